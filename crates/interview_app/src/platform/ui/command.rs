//! Line commands typed at the console.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Files,
    Open(String),
    Show,
    /// Replace a project file with the content of a file on disk.
    Edit { path: String, source: PathBuf },
    Append { path: String, text: String },
    Start,
    Stop,
    Refresh,
    Dismiss,
    Ask(String),
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  files                      list project files
  open <path>                open a file in the editor
  show                       print the open file
  edit <path> <disk-file>    replace a file with the content of <disk-file>
  append <path> <text>       append a line to a file
  start | stop | refresh     control the live preview
  dismiss                    dismiss the preview error
  ask <text>                 ask the interviewer
  status                     print preview status
  help                       show this help
  quit                       exit";

/// Parses one input line. Blank lines, unknown commands and missing
/// arguments yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "files" | "ls" => Command::Files,
        "open" => Command::Open(required(rest)?.to_string()),
        "show" | "cat" => Command::Show,
        "edit" => {
            let (path, source) = rest.split_once(char::is_whitespace)?;
            Command::Edit {
                path: path.to_string(),
                source: PathBuf::from(required(source.trim())?),
            }
        }
        "append" => {
            let (path, text) = rest.split_once(char::is_whitespace)?;
            Command::Append {
                path: path.to_string(),
                text: text.trim_start().to_string(),
            }
        }
        "start" => Command::Start,
        "stop" => Command::Stop,
        "refresh" => Command::Refresh,
        "dismiss" => Command::Dismiss,
        "ask" => Command::Ask(required(rest)?.to_string()),
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn required(arg: &str) -> Option<&str> {
    let arg = arg.trim();
    (!arg.is_empty()).then_some(arg)
}
