//! Interview engine: preview pipeline, timers, chat client and effect execution.
mod chat;
mod debounce;
mod document;
mod engine;
mod executor;
mod persist;
mod synth;
mod transform;
mod types;

pub use chat::{
    ChatClient, ChatError, ChatFailureKind, ChatMessage, ChatRole, ChatSettings,
    OpenAiChatClient, DEFAULT_CHAT_ENDPOINT, DEFAULT_CHAT_MODEL, SYSTEM_PROMPT,
};
pub use debounce::Debouncer;
pub use document::escape_program_text;
pub use engine::EngineHandle;
pub use executor::{
    host_page, sandbox_attribute, FileSurface, MemorySurface, PreviewSurface, SurfaceError,
    HOST_FILE, PREVIEW_FILE, SANDBOX_CAPABILITIES,
};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use synth::{
    DocumentSynthesizer, ProgramId, SourceFiles, SynthError, SynthesizerConfig,
    BABEL_SCRIPT, DEFAULT_ENTRY_COMPONENT, DEFAULT_ENTRY_PATH, DEFAULT_MODAL_PATH,
    REACT_DOM_SCRIPT, REACT_SCRIPT, TAILWIND_SCRIPT,
};
pub use transform::transform_source;
pub use types::{CompileOutcome, EngineEvent, Generation, RequestId, Ticket};
