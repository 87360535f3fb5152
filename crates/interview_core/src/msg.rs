use crate::CompileOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The seeded project is in place; evaluates auto-start.
    ProjectLoaded,
    /// User opened a file in the editor.
    FileSelected { path: String },
    /// A file's content was replaced by the editor.
    FileEdited { path: String, content: String },
    /// User clicked Start Preview.
    StartClicked,
    /// User clicked Stop Preview.
    StopClicked,
    /// User clicked Refresh.
    RefreshClicked,
    /// User dismissed the preview error.
    ErrorDismissed,
    /// A debounce timer ran out without being superseded.
    DebounceElapsed { ticket: u64 },
    /// Engine finished a compile-and-execute pass.
    CompileFinished {
        generation: u64,
        outcome: CompileOutcome,
    },
    /// The preview surface rejected a presented document.
    SurfaceFailed { generation: u64, message: String },
    /// User sent a chat message.
    ChatSubmitted(String),
    /// Chat collaborator answered (or failed).
    ChatReplied {
        request_id: u64,
        reply: Result<String, String>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
