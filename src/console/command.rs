//! Parsing of console input lines.

use std::str::FromStr;

use thiserror::Error;

use crate::models::GoalId;

pub const HELP: &str = "\
Type a goal and press Enter to add it (or to update the goal being edited).
An empty line submits the current input; start a goal with // for a literal /.
  /edit <id>    load a goal into the input for editing
  /delete <id>  remove a goal
  /submit       submit the current input as-is
  /list         show all goals
  /help         show this help
  /quit         exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the input with this text and submit it.
    Enter(String),
    Submit,
    Edit(GoalId),
    Delete(GoalId),
    List,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: /{0} (try /help)")]
    Unknown(String),

    #[error("/{0} needs a goal id")]
    MissingId(&'static str),

    #[error("Invalid goal id: {0}")]
    InvalidId(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if line.is_empty() {
            return Ok(Self::Submit);
        }
        if let Some(literal) = line.strip_prefix("//") {
            return Ok(Self::Enter(format!("/{}", literal)));
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Self::Enter(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "edit" => parse_id("edit", arg).map(Self::Edit),
            "delete" => parse_id("delete", arg).map(Self::Delete),
            "submit" => Ok(Self::Submit),
            "list" => Ok(Self::List),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<GoalId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingId(command));
    }
    // Accept the `#123` form shown in the rendered list.
    let digits = arg.strip_prefix('#').unwrap_or(arg);
    digits
        .parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}
