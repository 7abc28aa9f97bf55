use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommandParseError;

/// Developer console commands. Accepted either as plain words (`goto 2`) or
/// as JSON (`{"type":"go_to_page","payload":{"page":2}}`) for scripted runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ConsoleCommand {
    Next,
    Previous,
    GoToPage { page: i64 },
    Reset,
    Log,
    Help,
    Quit,
}

impl ConsoleCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleCommand::Next => "next",
            ConsoleCommand::Previous => "previous",
            ConsoleCommand::GoToPage { .. } => "go_to_page",
            ConsoleCommand::Reset => "reset",
            ConsoleCommand::Log => "log",
            ConsoleCommand::Help => "help",
            ConsoleCommand::Quit => "quit",
        }
    }
}

pub const CONSOLE_HELP: &str = "\
commands:
  next | n            go to the next page
  prev | p            go to the previous page
  goto <n> | go <n>   go to page n
  reset               return to the first page
  log                 print the current page
  quit | exit         leave the console";

impl FromStr for ConsoleCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.starts_with('{') {
            return serde_json::from_str(line)
                .map_err(|_| CommandParseError::Unknown(line.to_string()));
        }

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Err(CommandParseError::Empty);
        };
        let command = command.to_ascii_lowercase();

        match command.as_str() {
            "next" | "n" => Ok(ConsoleCommand::Next),
            "prev" | "previous" | "p" => Ok(ConsoleCommand::Previous),
            "reset" => Ok(ConsoleCommand::Reset),
            "log" => Ok(ConsoleCommand::Log),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            "goto" | "go" | "page" => {
                let Some(value) = words.next() else {
                    return Err(CommandParseError::MissingArgument { command });
                };
                let page = value
                    .parse::<i64>()
                    .map_err(|_| CommandParseError::InvalidArgument {
                        value: value.to_string(),
                    })?;
                Ok(ConsoleCommand::GoToPage { page })
            }
            _ => Err(CommandParseError::Unknown(command)),
        }
    }
}
