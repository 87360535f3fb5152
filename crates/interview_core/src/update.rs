use crate::feedback::review_prompt;
use crate::tree::language_for;
use crate::{AppState, ChatPurpose, Disposition, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ProjectLoaded => {
            let effects = auto_start(&mut state);
            state.mark_dirty();
            effects
        }
        Msg::FileSelected { path } => {
            if state.select(&path) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FileEdited { path, content } => {
            let Some(previous) = state.apply_edit(&path, &content) else {
                return (state, Vec::new());
            };
            state.mark_dirty();

            let mut effects = match state.preview_mut().note_change() {
                Some(ticket) => vec![Effect::ScheduleCompile {
                    ticket,
                    delay: state.settings().debounce,
                }],
                None => auto_start(&mut state),
            };
            if let Some(effect) = proactive_feedback(&mut state, &path, &previous, &content) {
                effects.push(effect);
            }
            effects
        }
        Msg::StartClicked => match state.preview_mut().start() {
            Some(generation) => {
                state.mark_dirty();
                vec![compile(&state, generation)]
            }
            None => Vec::new(),
        },
        Msg::StopClicked => {
            if state.preview_mut().stop() {
                state.mark_dirty();
                vec![Effect::CancelScheduledCompile, Effect::ClearPreview]
            } else {
                Vec::new()
            }
        }
        Msg::RefreshClicked => match state.preview_mut().refresh() {
            Some(generation) => {
                state.mark_dirty();
                vec![Effect::CancelScheduledCompile, compile(&state, generation)]
            }
            None => Vec::new(),
        },
        Msg::ErrorDismissed => {
            if state.preview_mut().dismiss_error() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DebounceElapsed { ticket } => match state.preview_mut().debounce_elapsed(ticket) {
            Some(generation) => {
                state.mark_dirty();
                vec![compile(&state, generation)]
            }
            None => Vec::new(),
        },
        Msg::CompileFinished {
            generation,
            outcome,
        } => match state.preview_mut().finish(generation, outcome) {
            Disposition::Stale => Vec::new(),
            Disposition::Present(document) => {
                state.mark_dirty();
                vec![Effect::PresentDocument {
                    generation,
                    document,
                }]
            }
            Disposition::Unavailable | Disposition::Failed => {
                state.mark_dirty();
                Vec::new()
            }
        },
        Msg::SurfaceFailed {
            generation,
            message,
        } => {
            if state.preview_mut().surface_failed(generation, message) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ChatSubmitted(text) => match state.chat_mut().submit(&text) {
            Some((request_id, history)) => {
                state.mark_dirty();
                vec![Effect::SendChat {
                    request_id,
                    purpose: ChatPurpose::Conversation,
                    history,
                }]
            }
            None => Vec::new(),
        },
        Msg::ChatReplied { request_id, reply } => {
            if state.chat_mut().resolve(request_id, reply) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn compile(state: &AppState, generation: u64) -> Effect {
    Effect::Compile {
        generation,
        files: state.tree().file_map(),
    }
}

fn auto_start(state: &mut AppState) -> Vec<Effect> {
    let entry_present = state.entry_present();
    match state.preview_mut().auto_start(entry_present) {
        Some(generation) => vec![compile(state, generation)],
        None => Vec::new(),
    }
}

fn proactive_feedback(
    state: &mut AppState,
    path: &str,
    previous: &str,
    content: &str,
) -> Option<Effect> {
    let language = language_for(path);
    let is_code = matches!(language, "typescript" | "javascript");
    if !state.settings().proactive_feedback || !is_code || state.chat().is_waiting() {
        return None;
    }
    if !state.observe_for_feedback(path, previous, content) {
        return None;
    }
    let (request_id, history) = state
        .chat_mut()
        .submit_hidden(review_prompt(path, language, content))?;
    Some(Effect::SendChat {
        request_id,
        purpose: ChatPurpose::Feedback,
        history,
    })
}
