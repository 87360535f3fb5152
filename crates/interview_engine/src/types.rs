use crate::chat::ChatError;

pub type Ticket = u64;
pub type Generation = u64;
pub type RequestId = u64;

/// Result of one synthesis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    Ready { document: String },
    MissingEntryPoint { path: String },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    DebounceElapsed {
        ticket: Ticket,
    },
    CompileFinished {
        generation: Generation,
        outcome: CompileOutcome,
    },
    SurfaceFailed {
        generation: Generation,
        message: String,
    },
    ChatReplied {
        request_id: RequestId,
        result: Result<String, ChatError>,
    },
}
