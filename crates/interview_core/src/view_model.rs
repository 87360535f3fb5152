use crate::{ChatTurn, PreviewStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub preview: PreviewView,
    pub files: Vec<FileRowView>,
    pub selected: Option<SelectedFileView>,
    pub chat: Vec<ChatTurn>,
    pub chat_loading: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewView {
    pub status: PreviewStatus,
    pub last_error: Option<String>,
    pub document_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRowView {
    pub path: String,
    pub name: String,
    pub language: &'static str,
    pub is_selected: bool,
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFileView {
    pub path: String,
    pub name: String,
    pub language: &'static str,
    pub content: String,
}
