//! REPL command parsing.
//!
//! # Responsibility
//! - Map one input line to a board event or a session command.
//! - Validate categories against the configured set before they reach core.

use quicknote_core::{BoardEvent, CategorySet, Filter, NoteId, ALL_FILTER_TOKEN};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the board.
    Event(BoardEvent),
    /// Print the current view.
    List,
    /// Print configured categories.
    Categories,
    Help,
    Quit,
}

/// Input line could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank line.
    Empty,
    MissingArgument(&'static str),
    InvalidNoteId(String),
    UnknownCategory(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::MissingArgument(usage) => write!(f, "missing argument; usage: {usage}"),
            Self::InvalidNoteId(raw) => write!(f, "invalid note id `{raw}`"),
            Self::UnknownCategory(name) => write!(f, "unknown category `{name}`"),
        }
    }
}

impl Error for CommandError {}

pub const HELP_TEXT: &str = "\
commands:
  add <category> <text>   add a note in a category
  <text>                  add a note in the default category
  delete <id> | rm <id>   delete a note
  search [text]           filter by text (empty clears)
  filter <all|category>   filter by category
  list                    show the current view
  categories              show configured categories
  help                    show this help
  quit | exit             leave";

/// Parses one REPL line.
pub fn parse_command(line: &str, categories: &CategorySet) -> Result<Command, CommandError> {
    let line = line.trim_start();
    if line.trim_end().is_empty() {
        return Err(CommandError::Empty);
    }

    // Search text keeps its surrounding spaces; every other argument is trimmed.
    let (keyword, raw_rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = raw_rest.trim();

    match keyword.to_ascii_lowercase().as_str() {
        "add" => {
            let (name, text) = match rest.split_once(char::is_whitespace) {
                Some((name, text)) => (name, text),
                None => (rest, ""),
            };
            if name.is_empty() {
                return Err(CommandError::MissingArgument("add <category> <text>"));
            }
            let category = categories
                .get(name)
                .cloned()
                .ok_or_else(|| CommandError::UnknownCategory(name.to_string()))?;
            Ok(Command::Event(BoardEvent::Add {
                text: text.to_string(),
                category,
            }))
        }
        "delete" | "rm" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("delete <id>"));
            }
            let id: NoteId = rest
                .parse()
                .map_err(|_| CommandError::InvalidNoteId(rest.to_string()))?;
            Ok(Command::Event(BoardEvent::Delete(id)))
        }
        "search" => Ok(Command::Event(BoardEvent::SearchChanged(
            raw_rest.to_string(),
        ))),
        "filter" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("filter <all|category>"));
            }
            if rest != ALL_FILTER_TOKEN && categories.get(rest).is_none() {
                return Err(CommandError::UnknownCategory(rest.to_string()));
            }
            Ok(Command::Event(BoardEvent::FilterSelected(Filter::parse(rest))))
        }
        // Session keywords followed by more words are note text.
        "list" | "ls" if rest.is_empty() => Ok(Command::List),
        "categories" if rest.is_empty() => Ok(Command::Categories),
        "help" | "?" if rest.is_empty() => Ok(Command::Help),
        "quit" | "exit" if rest.is_empty() => Ok(Command::Quit),
        _ => Ok(Command::Event(BoardEvent::Add {
            text: line.trim_end().to_string(),
            category: categories.default_category().clone(),
        })),
    }
}
