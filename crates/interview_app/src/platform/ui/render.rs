use interview_core::{AppViewModel, ChatRole, ChatTurn, PreviewStatus, PreviewView};

pub fn status_line(preview: &PreviewView) -> String {
    let label = match preview.status {
        PreviewStatus::Stopped => "stopped",
        PreviewStatus::Unavailable => "unavailable",
        PreviewStatus::Compiling => "compiling",
        PreviewStatus::Ready => "ready",
        PreviewStatus::Failed => "failed",
    };
    let mut line = format!("[preview: {label}");
    if preview.document_len > 0 {
        line.push_str(&format!(", {} bytes", preview.document_len));
    }
    line.push(']');
    if let Some(error) = &preview.last_error {
        line.push_str(&format!(" error: {error}"));
    }
    line
}

pub fn file_list(view: &AppViewModel) -> String {
    view.files
        .iter()
        .map(|row| {
            let marker = if row.is_selected { '*' } else { ' ' };
            let note = if row.is_placeholder { " (empty)" } else { "" };
            format!("{marker} {} [{}]{note}", row.path, row.language)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn selected_file(view: &AppViewModel) -> String {
    match &view.selected {
        Some(file) => format!(
            "--- {} ({}) ---\n{}\n--- end of {} ---",
            file.path, file.language, file.content, file.name
        ),
        None => "No file open. Use `open <path>`.".to_string(),
    }
}

pub fn chat_turns(turns: &[ChatTurn]) -> String {
    turns
        .iter()
        .map(|turn| {
            let speaker = match turn.role {
                ChatRole::User => "you",
                ChatRole::Assistant => "interviewer",
            };
            format!("{speaker}> {}", turn.text)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use interview_core::{AppState, ChatTurn, PreviewStatus, PreviewView};

    use super::{chat_turns, file_list, status_line};

    #[test]
    fn status_line_includes_error() {
        let line = status_line(&PreviewView {
            status: PreviewStatus::Failed,
            last_error: Some("disk full".to_string()),
            document_len: 10,
        });
        assert_eq!(line, "[preview: failed, 10 bytes] error: disk full");
    }

    #[test]
    fn file_list_shows_every_sample_file() {
        let listing = file_list(&AppState::new().view());
        assert_eq!(listing.lines().count(), 7);
        assert!(listing.contains("src/components/Calendar.tsx [typescript]"));
    }

    #[test]
    fn chat_turns_label_speakers() {
        let text = chat_turns(&[ChatTurn::user("hi"), ChatTurn::assistant("hello")]);
        assert_eq!(text, "you> hi\n\ninterviewer> hello");
    }
}
