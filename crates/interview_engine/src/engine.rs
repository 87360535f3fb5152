use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use session_logging::{session_debug, session_info, session_warn};

use crate::chat::{ChatClient, ChatMessage};
use crate::debounce::Debouncer;
use crate::executor::PreviewSurface;
use crate::synth::{DocumentSynthesizer, SourceFiles, SynthError};
use crate::{CompileOutcome, EngineEvent, Generation, RequestId, Ticket};

enum EngineCommand {
    Schedule { ticket: Ticket, delay: Duration },
    Cancel,
    Compile { generation: Generation, files: SourceFiles },
    Present { generation: Generation, document: String },
    Clear,
    Chat { request_id: RequestId, history: Vec<ChatMessage> },
}

/// Runs the pipeline on a background tokio runtime. Commands go in through
/// the handle; results come back as [`EngineEvent`]s.
///
/// Timer and surface commands are applied in the order they were sent.
/// Compiles and chat requests run concurrently and may finish in any order.
/// Clones share the same engine; each event is received by one of them.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(
        synthesizer: DocumentSynthesizer,
        surface: Box<dyn PreviewSurface>,
        chat: Arc<dyn ChatClient>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let synthesizer = Arc::new(synthesizer);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut debouncer = Debouncer::new(runtime.handle().clone(), event_tx.clone());
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Schedule { ticket, delay } => {
                        debouncer.schedule(ticket, delay);
                    }
                    EngineCommand::Cancel => debouncer.cancel(),
                    EngineCommand::Compile { generation, files } => {
                        let synthesizer = synthesizer.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let outcome = compile(&synthesizer, generation, &files);
                            let _ = event_tx.send(EngineEvent::CompileFinished {
                                generation,
                                outcome,
                            });
                        });
                    }
                    EngineCommand::Present {
                        generation,
                        document,
                    } => {
                        if let Err(err) = surface.load(&document) {
                            session_warn!("Surface rejected generation {generation}: {err}");
                            let _ = event_tx.send(EngineEvent::SurfaceFailed {
                                generation,
                                message: err.to_string(),
                            });
                        }
                    }
                    EngineCommand::Clear => {
                        if let Err(err) = surface.clear() {
                            session_warn!("Surface could not be cleared: {err}");
                        }
                    }
                    EngineCommand::Chat {
                        request_id,
                        history,
                    } => {
                        let chat = chat.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = chat.send(&history).await;
                            if let Err(err) = &result {
                                session_warn!("Chat request {request_id} failed: {err}");
                            }
                            let _ = event_tx.send(EngineEvent::ChatReplied { request_id, result });
                        });
                    }
                }
            }
            session_debug!("Engine command channel closed");
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn schedule_compile(&self, ticket: Ticket, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::Schedule { ticket, delay });
    }

    pub fn cancel_scheduled_compile(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel);
    }

    pub fn compile(&self, generation: Generation, files: SourceFiles) {
        let _ = self.cmd_tx.send(EngineCommand::Compile { generation, files });
    }

    pub fn present(&self, generation: Generation, document: String) {
        let _ = self.cmd_tx.send(EngineCommand::Present {
            generation,
            document,
        });
    }

    pub fn clear(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Clear);
    }

    pub fn send_chat(&self, request_id: RequestId, history: Vec<ChatMessage>) {
        let _ = self.cmd_tx.send(EngineCommand::Chat {
            request_id,
            history,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

fn compile(
    synthesizer: &DocumentSynthesizer,
    generation: Generation,
    files: &SourceFiles,
) -> CompileOutcome {
    session_info!("Compile pass {generation} over {} files", files.len());
    match synthesizer.synthesize(files) {
        Ok(document) => {
            session_info!(
                "Compile pass {generation} produced {} bytes",
                document.len()
            );
            CompileOutcome::Ready { document }
        }
        Err(SynthError::MissingEntryPoint { path }) => {
            session_warn!("Compile pass {generation}: no entry file at {path}");
            CompileOutcome::MissingEntryPoint { path }
        }
    }
}
