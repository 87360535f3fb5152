use std::sync::Arc;
use std::time::Duration;

use interview_engine::{
    ChatClient, ChatError, ChatFailureKind, ChatMessage, CompileOutcome, DocumentSynthesizer,
    EngineEvent, EngineHandle, MemorySurface, SourceFiles, DEFAULT_ENTRY_PATH,
};

const WAIT: Duration = Duration::from_secs(5);

struct EchoChat;

#[async_trait::async_trait]
impl ChatClient for EchoChat {
    async fn send(&self, history: &[ChatMessage]) -> Result<String, ChatError> {
        match history.last() {
            Some(message) if message.content == "fail" => Err(ChatError {
                kind: ChatFailureKind::Network,
                message: "offline".to_string(),
            }),
            Some(message) => Ok(format!("echo: {}", message.content)),
            None => Ok(String::new()),
        }
    }
}

fn engine(surface: MemorySurface) -> EngineHandle {
    session_logging::initialize_for_tests();
    EngineHandle::new(
        DocumentSynthesizer::default(),
        Box::new(surface),
        Arc::new(EchoChat),
    )
}

fn entry_files() -> SourceFiles {
    let mut files = SourceFiles::new();
    files.insert(
        DEFAULT_ENTRY_PATH.to_string(),
        "const Calendar = () => null;".to_string(),
    );
    files
}

#[test]
fn compile_reports_document_and_present_loads_surface() {
    let surface = MemorySurface::new();
    let engine = engine(surface.clone());

    engine.compile(3, entry_files());
    let document = match engine.recv_timeout(WAIT) {
        Some(EngineEvent::CompileFinished {
            generation: 3,
            outcome: CompileOutcome::Ready { document },
        }) => document,
        other => panic!("unexpected event {other:?}"),
    };
    assert!(document.contains("const Calendar = () => null;"));

    engine.present(3, document.clone());
    engine.clear();
    engine.present(3, document.clone());
    // Commands are applied in order; a chat round-trip flushes them.
    engine.send_chat(1, vec![ChatMessage::new(interview_engine::ChatRole::User, "ping")]);
    let _ = engine.recv_timeout(WAIT);
    assert_eq!(surface.content(), Some(document));
}

#[test]
fn compile_without_entry_reports_missing_entry_point() {
    let engine = engine(MemorySurface::new());
    engine.compile(1, SourceFiles::new());
    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::CompileFinished {
            generation: 1,
            outcome: CompileOutcome::MissingEntryPoint {
                path: DEFAULT_ENTRY_PATH.to_string()
            },
        })
    );
}

#[test]
fn chat_results_come_back_with_request_id() {
    let engine = engine(MemorySurface::new());
    engine.send_chat(7, vec![ChatMessage::new(interview_engine::ChatRole::User, "fail")]);
    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::ChatReplied {
            request_id: 7,
            result: Err(err),
        }) => assert_eq!(err.kind, ChatFailureKind::Network),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn scheduled_compile_fires_once_and_cancel_suppresses_it() {
    let engine = engine(MemorySurface::new());
    engine.schedule_compile(1, Duration::from_millis(20));
    engine.schedule_compile(2, Duration::from_millis(20));
    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::DebounceElapsed { ticket: 2 })
    );

    engine.schedule_compile(3, Duration::from_millis(50));
    engine.cancel_scheduled_compile();
    assert_eq!(engine.recv_timeout(Duration::from_millis(300)), None);
}
