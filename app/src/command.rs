use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  file <path>       select a PDF to upload
  upload            upload the selected PDF
  question <text>   set the question text
  ask [text]        ask the current question (or <text>)
  show              print the current state
  ping              check that the backend is reachable
  help              show this list
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectFile(PathBuf),
    Upload,
    SetQuestion(String),
    Ask(Option<String>),
    Show,
    Ping,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parses one input line. Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim().is_empty() {
            return None;
        }

        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "file" => match rest.trim() {
                "" => Command::Unknown(trimmed.to_string()),
                path => Command::SelectFile(PathBuf::from(path)),
            },
            "upload" => Command::Upload,
            "question" => Command::SetQuestion(rest.to_string()),
            "ask" => match rest {
                "" => Command::Ask(None),
                text => Command::Ask(Some(text.to_string())),
            },
            "show" => Command::Show,
            "ping" => Command::Ping,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(trimmed.to_string()),
        };
        Some(command)
    }
}
