//! Command tokenizer
//!
//! Splits one input line into a [`CommandType`] and the untouched remainder of
//! the line. What the remainder means is left to [`crate::parser::arguments`].

use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    Todo,
    Deadline,
    Event,
    List,
    Mark,
    Unmark,
    Delete,
    Find,
    FreeTime,
    Bye,
    Unknown,
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandType::Todo => "todo",
            CommandType::Deadline => "deadline",
            CommandType::Event => "event",
            CommandType::List => "list",
            CommandType::Mark => "mark",
            CommandType::Unmark => "unmark",
            CommandType::Delete => "delete",
            CommandType::Find => "find",
            CommandType::FreeTime => "freetime",
            CommandType::Bye => "bye",
            CommandType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A tokenized input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub command_type: CommandType,
    pub argument: String,
}

impl Command {
    pub fn new(command_type: CommandType, argument: impl Into<String>) -> Self {
        Self { command_type, argument: argument.into() }
    }
}

/// Keywords that take an argument, in the order they are tried
const KEYWORDS: [(&str, CommandType); 8] = [
    ("todo", CommandType::Todo),
    ("deadline", CommandType::Deadline),
    ("event", CommandType::Event),
    ("mark", CommandType::Mark),
    ("unmark", CommandType::Unmark),
    ("delete", CommandType::Delete),
    ("find", CommandType::Find),
    ("freetime", CommandType::FreeTime),
];

/// Tokenize one line of input. Never fails: anything unrecognised comes back
/// as [`CommandType::Unknown`] carrying the trimmed line.
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Command::new(CommandType::Unknown, "");
    }

    if trimmed.eq_ignore_ascii_case("bye") {
        return Command::new(CommandType::Bye, "");
    }
    if trimmed.eq_ignore_ascii_case("list") {
        return Command::new(CommandType::List, "");
    }

    for (keyword, command_type) in KEYWORDS {
        if let Some(argument) = strip_keyword(trimmed, keyword) {
            debug!("Tokenized '{}' as {} with argument {:?}", trimmed, command_type, argument);
            return Command::new(command_type, argument);
        }
    }

    debug!("No keyword matched '{}'", trimmed);
    Command::new(CommandType::Unknown, trimmed)
}

/// If `input` starts with `keyword` (ASCII case-insensitive), return what follows it.
///
/// A single space right after the keyword is consumed as the separator. Any
/// other following text is returned as-is, so `todoX` yields `X` and
/// `todo  x` yields ` x`.
fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let head = input.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &input[keyword.len()..];
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}
