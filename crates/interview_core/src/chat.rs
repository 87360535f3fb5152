use std::collections::BTreeSet;

/// Opening message from the interviewer.
pub const WELCOME_MESSAGE: &str = "Welcome to your coding interview! I'm here to help you implement \
the missing functionality in this calendar app.\n\nYour tasks:\n\
1. Implement meeting creation in Calendar.tsx\n\
2. Complete the meeting editing functionality\n\
3. Add attendee management in MeetingModal.tsx\n\
4. Implement meeting deletion\n\n\
Feel free to ask me questions as you work through these challenges!";

/// Shown in place of a reply when the chat collaborator fails.
pub const FALLBACK_REPLY: &str = "I apologize, but I'm having trouble connecting to my AI service \
right now. Please try again in a moment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Why a chat request was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPurpose {
    Conversation,
    Feedback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTranscript {
    turns: Vec<ChatTurn>,
    pending: BTreeSet<u64>,
    next_request_id: u64,
    history_window: usize,
}

impl ChatTranscript {
    pub fn new(history_window: usize) -> Self {
        Self {
            turns: vec![ChatTurn::assistant(WELCOME_MESSAGE)],
            pending: BTreeSet::new(),
            next_request_id: 0,
            history_window,
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_waiting(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Records the user's message and opens a request. Returns the request id
    /// and the history to send: the last `history_window` turns before the
    /// message, followed by the message itself.
    pub fn submit(&mut self, text: &str) -> Option<(u64, Vec<ChatTurn>)> {
        let text = text.trim();
        if text.is_empty() || self.is_waiting() {
            return None;
        }
        let mut history = self.recent_history();
        let turn = ChatTurn::user(text);
        history.push(turn.clone());
        self.turns.push(turn);
        Some((self.open_request(), history))
    }

    /// Opens a request whose prompt is not shown in the transcript.
    pub fn submit_hidden(&mut self, prompt: String) -> Option<(u64, Vec<ChatTurn>)> {
        if self.is_waiting() {
            return None;
        }
        let mut history = self.recent_history();
        history.push(ChatTurn::user(prompt));
        Some((self.open_request(), history))
    }

    /// Closes a request. Errors are replaced by [`FALLBACK_REPLY`]. Unknown
    /// ids are ignored.
    pub fn resolve(&mut self, request_id: u64, reply: Result<String, String>) -> bool {
        if !self.pending.remove(&request_id) {
            return false;
        }
        let text = match reply {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) | Err(_) => FALLBACK_REPLY.to_string(),
        };
        self.turns.push(ChatTurn::assistant(text));
        true
    }

    fn recent_history(&self) -> Vec<ChatTurn> {
        let skip = self.turns.len().saturating_sub(self.history_window);
        self.turns[skip..].to_vec()
    }

    fn open_request(&mut self) -> u64 {
        self.next_request_id += 1;
        self.pending.insert(self.next_request_id);
        self.next_request_id
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new(crate::DEFAULT_HISTORY_WINDOW)
    }
}
