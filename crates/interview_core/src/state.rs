use std::time::Duration;

use crate::feedback::FeedbackTracker;
use crate::sample::{sample_project, ENTRY_PATH};
use crate::tree::{language_for, SourceNode};
use crate::view_model::{AppViewModel, FileRowView, PreviewView, SelectedFileView};
use crate::{ChatTranscript, PreviewState, SourceTree};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(750);
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// File the preview is built from.
    pub entry_path: String,
    /// Quiet period after the last edit before a recompile.
    pub debounce: Duration,
    pub auto_start: bool,
    pub proactive_feedback: bool,
    /// Transcript turns sent along with each chat request.
    pub history_window: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            entry_path: ENTRY_PATH.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            auto_start: true,
            proactive_feedback: true,
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

/// Copy of the file open in the editor. Kept in step with the tree on every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: String,
    pub name: String,
    pub content: String,
}

impl SelectedFile {
    fn from_node(node: &SourceNode) -> Self {
        Self {
            path: node.path().to_string(),
            name: node.name().to_string(),
            content: node.content().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    tree: SourceTree,
    selected: Option<SelectedFile>,
    preview: PreviewState,
    chat: ChatTranscript,
    feedback: FeedbackTracker,
    settings: SessionSettings,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Session over the seeded sample project with default settings.
    pub fn new() -> Self {
        Self::with_project(sample_project(), SessionSettings::default())
    }

    pub fn with_project(tree: SourceTree, settings: SessionSettings) -> Self {
        Self {
            tree,
            selected: None,
            preview: PreviewState::new(settings.auto_start),
            chat: ChatTranscript::new(settings.history_window),
            feedback: FeedbackTracker::new(),
            settings,
            dirty: false,
        }
    }

    pub fn tree(&self) -> &SourceTree {
        &self.tree
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn chat(&self) -> &ChatTranscript {
        &self.chat
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        let selected_path = self.selected.as_ref().map(|file| file.path.as_str());
        let files = self
            .tree
            .flatten()
            .into_iter()
            .map(|node| FileRowView {
                path: node.path().to_string(),
                name: node.name().to_string(),
                language: language_for(node.path()),
                is_selected: selected_path == Some(node.path()),
                is_placeholder: node.content().is_none(),
            })
            .collect();

        AppViewModel {
            preview: PreviewView {
                status: self.preview.status(),
                last_error: self.preview.last_error().map(ToOwned::to_owned),
                document_len: self.preview.document().len(),
            },
            files,
            selected: self.selected.as_ref().map(|file| SelectedFileView {
                path: file.path.clone(),
                name: file.name.clone(),
                language: language_for(&file.path),
                content: file.content.clone(),
            }),
            chat: self.chat.turns().to_vec(),
            chat_loading: self.chat.is_waiting(),
            dirty: self.dirty,
        }
    }

    /// Returns and clears the re-render flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn preview_mut(&mut self) -> &mut PreviewState {
        &mut self.preview
    }

    pub(crate) fn chat_mut(&mut self) -> &mut ChatTranscript {
        &mut self.chat
    }

    pub(crate) fn entry_present(&self) -> bool {
        self.tree.has_content_at(&self.settings.entry_path)
    }

    pub(crate) fn select(&mut self, path: &str) -> bool {
        match self.tree.find(path) {
            Some(node) if node.is_file() => {
                self.selected = Some(SelectedFile::from_node(node));
                true
            }
            _ => false,
        }
    }

    /// Writes `content` into the tree and the selected copy. Returns the
    /// previous content, or `None` when `path` is not a file.
    pub(crate) fn apply_edit(&mut self, path: &str, content: &str) -> Option<String> {
        let previous = match self.tree.find(path) {
            Some(node) if node.is_file() => node.content().unwrap_or_default().to_string(),
            _ => return None,
        };
        self.tree = self.tree.update(path, content);
        if let Some(selected) = self.selected.as_mut().filter(|file| file.path == path) {
            selected.content = content.to_string();
        }
        Some(previous)
    }

    /// Records the edit with the feedback tracker; true when it is worth a review.
    pub(crate) fn observe_for_feedback(&mut self, path: &str, previous: &str, current: &str) -> bool {
        self.feedback.observe(path, previous, current)
    }
}
