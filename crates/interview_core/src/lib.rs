//! Interview session core: pure state machine, project tree and view-model helpers.
mod chat;
mod effect;
mod feedback;
mod msg;
mod preview;
mod sample;
mod state;
mod tree;
mod update;
mod view_model;

pub use chat::{ChatPurpose, ChatRole, ChatTranscript, ChatTurn, FALLBACK_REPLY, WELCOME_MESSAGE};
pub use effect::Effect;
pub use feedback::{
    is_interesting_change, review_prompt, FeedbackTracker, CHALLENGE_HANDLERS,
    LENGTH_DELTA_THRESHOLD,
};
pub use msg::Msg;
pub use preview::{CompileOutcome, Disposition, PreviewState, PreviewStatus};
pub use sample::{sample_project, ENTRY_PATH, MODAL_PATH};
pub use state::{
    AppState, SelectedFile, SessionSettings, DEFAULT_DEBOUNCE, DEFAULT_HISTORY_WINDOW,
};
pub use tree::{language_for, FileMap, NodeKind, SourceNode, SourceTree, TreeError};
pub use update::update;
pub use view_model::{AppViewModel, FileRowView, PreviewView, SelectedFileView};
