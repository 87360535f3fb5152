use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use interview_core::{ChatPurpose, ChatRole, ChatTurn, CompileOutcome, Effect, Msg};
use interview_engine::{ChatMessage, EngineEvent, EngineHandle};
use session_logging::{session_debug, session_info};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let runner = Self { engine };
        runner.spawn_event_loop(event_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleCompile { ticket, delay } => {
                    session_debug!("ScheduleCompile ticket={} delay={:?}", ticket, delay);
                    self.engine.schedule_compile(ticket, delay);
                }
                Effect::CancelScheduledCompile => {
                    session_debug!("CancelScheduledCompile");
                    self.engine.cancel_scheduled_compile();
                }
                Effect::Compile { generation, files } => {
                    session_info!("Compile generation={} files={}", generation, files.len());
                    self.engine.compile(generation, files);
                }
                Effect::PresentDocument {
                    generation,
                    document,
                } => {
                    session_info!(
                        "PresentDocument generation={} bytes={}",
                        generation,
                        document.len()
                    );
                    self.engine.present(generation, document);
                }
                Effect::ClearPreview => {
                    session_info!("ClearPreview");
                    self.engine.clear();
                }
                Effect::SendChat {
                    request_id,
                    purpose,
                    history,
                } => {
                    session_info!(
                        "SendChat request_id={} purpose={} turns={}",
                        request_id,
                        purpose_label(purpose),
                        history.len()
                    );
                    self.engine.send_chat(request_id, to_chat_messages(&history));
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<AppEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.recv_timeout(Duration::from_millis(50)) {
                if event_tx.send(AppEvent::Msg(map_event(event))).is_err() {
                    break;
                }
            }
        });
    }
}

fn purpose_label(purpose: ChatPurpose) -> &'static str {
    match purpose {
        ChatPurpose::Conversation => "conversation",
        ChatPurpose::Feedback => "feedback",
    }
}

fn to_chat_messages(history: &[ChatTurn]) -> Vec<ChatMessage> {
    history
        .iter()
        .map(|turn| {
            let role = match turn.role {
                ChatRole::User => interview_engine::ChatRole::User,
                ChatRole::Assistant => interview_engine::ChatRole::Assistant,
            };
            ChatMessage::new(role, turn.text.clone())
        })
        .collect()
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DebounceElapsed { ticket } => Msg::DebounceElapsed { ticket },
        EngineEvent::CompileFinished {
            generation,
            outcome,
        } => Msg::CompileFinished {
            generation,
            outcome: map_outcome(outcome),
        },
        EngineEvent::SurfaceFailed {
            generation,
            message,
        } => Msg::SurfaceFailed {
            generation,
            message,
        },
        EngineEvent::ChatReplied { request_id, result } => Msg::ChatReplied {
            request_id,
            reply: result.map_err(|err| err.to_string()),
        },
    }
}

fn map_outcome(outcome: interview_engine::CompileOutcome) -> CompileOutcome {
    match outcome {
        interview_engine::CompileOutcome::Ready { document } => CompileOutcome::Ready { document },
        interview_engine::CompileOutcome::MissingEntryPoint { path } => {
            CompileOutcome::MissingEntryPoint { path }
        }
        interview_engine::CompileOutcome::Failed { message } => CompileOutcome::Failed { message },
    }
}

#[cfg(test)]
mod tests {
    use interview_core::{ChatTurn, CompileOutcome, Msg};
    use interview_engine::{ChatError, ChatFailureKind, EngineEvent};

    use super::{map_event, to_chat_messages};

    #[test]
    fn turns_keep_role_and_order() {
        let messages = to_chat_messages(&[ChatTurn::assistant("hi"), ChatTurn::user("help")]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, interview_engine::ChatRole::Assistant);
        assert_eq!(messages[1].role, interview_engine::ChatRole::User);
        assert_eq!(messages[1].content, "help");
    }

    #[test]
    fn compile_events_map_to_core_outcomes() {
        let msg = map_event(EngineEvent::CompileFinished {
            generation: 4,
            outcome: interview_engine::CompileOutcome::MissingEntryPoint {
                path: "a.tsx".to_string(),
            },
        });
        assert_eq!(
            msg,
            Msg::CompileFinished {
                generation: 4,
                outcome: CompileOutcome::MissingEntryPoint {
                    path: "a.tsx".to_string()
                },
            }
        );
    }

    #[test]
    fn chat_errors_become_messages() {
        let msg = map_event(EngineEvent::ChatReplied {
            request_id: 2,
            result: Err(ChatError {
                kind: ChatFailureKind::HttpStatus(500),
                message: "boom".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::ChatReplied {
                request_id: 2,
                reply: Err("http status 500: boom".to_string()),
            }
        );
    }
}
