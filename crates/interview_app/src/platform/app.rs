use std::fs;
use std::io::{self, BufRead};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use interview_core::{sample_project, update, AppState, Msg};
use interview_engine::{DocumentSynthesizer, EngineHandle, FileSurface, OpenAiChatClient};
use session_logging::{session_info, session_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::command::{parse_command, Command, HELP};
use super::ui::render;

/// Everything the main loop reacts to.
pub enum AppEvent {
    Input(Option<Command>),
    Msg(Msg),
    InputClosed,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let surface = FileSurface::new(config.output_dir.clone()).with_context(|| {
        format!(
            "preparing preview directory {}",
            config.output_dir.display()
        )
    })?;
    let host_page = surface.host_page_path();

    let api_key = std::env::var(&config.chat.api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty());
    if api_key.is_none() {
        session_warn!(
            "{} is not set; interviewer replies will fall back to the apology message",
            config.chat.api_key_env
        );
    }

    let settings = config.session_settings();
    let engine = EngineHandle::new(
        DocumentSynthesizer::new(config.synthesizer_config(&settings.entry_path)),
        Box::new(surface),
        Arc::new(OpenAiChatClient::new(config.chat_settings(api_key))),
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(engine, event_tx.clone());
    spawn_input_reader(event_tx);

    println!("Interview simulator. Preview page: {}", host_page.display());
    println!("Type `help` for commands.\n");

    let mut app = ConsoleApp::new(AppState::with_project(sample_project(), settings), runner);
    app.print_new_turns();
    app.dispatch(Msg::ProjectLoaded);

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => app.dispatch(msg),
            AppEvent::Input(None) => println!("{HELP}"),
            AppEvent::Input(Some(Command::Quit)) | AppEvent::InputClosed => break,
            AppEvent::Input(Some(command)) => app.handle_command(command),
        }
    }
    session_info!("Session ended");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            if event_tx.send(AppEvent::Input(parse_command(&line))).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

struct ConsoleApp {
    state: AppState,
    runner: EffectRunner,
    shown_turns: usize,
}

impl ConsoleApp {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            shown_turns: 0,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        if was_dirty {
            self.render();
        }
    }

    fn handle_command(&mut self, command: Command) {
        let msg = match command {
            Command::Files => {
                println!("{}", render::file_list(&self.state.view()));
                return;
            }
            Command::Show => {
                println!("{}", render::selected_file(&self.state.view()));
                return;
            }
            Command::Status => {
                println!("{}", render::status_line(&self.state.view().preview));
                return;
            }
            Command::Help | Command::Quit => {
                println!("{HELP}");
                return;
            }
            Command::Open(path) => Msg::FileSelected { path },
            Command::Edit { path, source } => match fs::read_to_string(&source) {
                Ok(content) => Msg::FileEdited { path, content },
                Err(err) => {
                    println!("Cannot read {}: {err}", source.display());
                    return;
                }
            },
            Command::Append { path, text } => {
                let Some(current) = self.state.tree().find(&path).filter(|node| node.is_file())
                else {
                    println!("No file at {path}");
                    return;
                };
                let mut content = current.content().unwrap_or_default().to_string();
                if !content.is_empty() && !content.ends_with('\n') {
                    content.push('\n');
                }
                content.push_str(&text);
                content.push('\n');
                Msg::FileEdited { path, content }
            }
            Command::Start => Msg::StartClicked,
            Command::Stop => Msg::StopClicked,
            Command::Refresh => Msg::RefreshClicked,
            Command::Dismiss => Msg::ErrorDismissed,
            Command::Ask(text) => Msg::ChatSubmitted(text),
        };
        self.dispatch(msg);
    }

    fn render(&mut self) {
        let view = self.state.view();
        println!("{}", render::status_line(&view.preview));
        self.print_new_turns();
        if view.chat_loading {
            println!("(interviewer is typing...)");
        }
    }

    fn print_new_turns(&mut self) {
        let turns = self.state.chat().turns();
        if turns.len() > self.shown_turns {
            println!("{}\n", render::chat_turns(&turns[self.shown_turns..]));
            self.shown_turns = turns.len();
        }
    }
}
