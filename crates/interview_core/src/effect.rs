use std::time::Duration;

use crate::{ChatPurpose, ChatTurn, FileMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the debounce timer, replacing any armed one.
    ScheduleCompile { ticket: u64, delay: Duration },
    /// Disarm the debounce timer, if any.
    CancelScheduledCompile,
    /// Synthesize a document from `files` and report back with `generation`.
    Compile { generation: u64, files: FileMap },
    /// Replace the sandboxed surface's content.
    PresentDocument { generation: u64, document: String },
    /// Blank the sandboxed surface.
    ClearPreview,
    SendChat {
        request_id: u64,
        purpose: ChatPurpose,
        history: Vec<ChatTurn>,
    },
}
