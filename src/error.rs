//! Error types for taskmate
//!
//! `TaskError` covers everything a user can get wrong while typing a command.
//! Every variant is recoverable: the command processor turns it into an
//! error response and the session carries on.

use std::path::PathBuf;

const DEADLINE_USAGE: &str = "Please use format: deadline <description> /by <date>";
const EVENT_USAGE: &str = "Please use format: event <description> /from <start> /to <end>";

/// Which command family an error came from, so the message can carry the right usage hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKindHint {
    Todo,
    Deadline,
    Event,
}

/// Which index-taking command an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexCommand {
    Mark,
    Unmark,
    Delete,
}

impl IndexCommand {
    pub fn keyword(self) -> &'static str {
        match self {
            IndexCommand::Mark => "mark",
            IndexCommand::Unmark => "unmark",
            IndexCommand::Delete => "delete",
        }
    }

    fn action(self) -> &'static str {
        match self {
            IndexCommand::Mark => "mark as done",
            IndexCommand::Unmark => "mark as not done",
            IndexCommand::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("The description of {} cannot be empty.{}", article(.0), usage_suffix(.0))]
    EmptyDescription(TaskKindHint),

    #[error("Please specify when the deadline is due.\nPlease use format: deadline <description> /by <date>")]
    MissingDate,

    #[error("Please specify when the event starts.\nPlease use format: event <description> /from <start> /to <end>")]
    MissingStart,

    #[error("Please specify when the event ends.\nPlease use format: event <description> /from <start> /to <end>")]
    MissingEnd,

    #[error(
        "Invalid date format: {0}. Please use formats like: yyyy-mm-dd, yyyy-mm-dd HHmm, d/m/yyyy, or d/m/yyyy HHmm"
    )]
    InvalidDateFormat(String),

    #[error("{}", malformed_message(.0))]
    MalformedCommand(TaskKindHint),

    #[error("The event cannot end before it starts.\nPlease use format: event <description> /from <start> /to <end>")]
    EventEndsBeforeStart,

    #[error("Please specify which task to {}.\nUse: {} <task number>", .0.action(), .0.keyword())]
    MissingIndex(IndexCommand),

    #[error("That's not a valid task number.\nPlease provide a number (e.g., {} 1)", .0.keyword())]
    InvalidIndex(IndexCommand),

    #[error("I don't have a task with that number.\nUse 'list' to see your tasks first.")]
    TaskNotFound,

    #[error("Please specify a keyword to search for.\nUse: find <keyword>")]
    MissingKeyword,

    #[error("Please specify how many hours you need.\nUse: freetime <hours>")]
    MissingHours,

    #[error("That's not a valid number of hours.\nPlease provide a positive number (e.g., freetime 4)")]
    InvalidHours,
}

fn article(kind: &TaskKindHint) -> &'static str {
    match kind {
        TaskKindHint::Todo => "a todo",
        TaskKindHint::Deadline => "a deadline",
        TaskKindHint::Event => "an event",
    }
}

fn usage_suffix(kind: &TaskKindHint) -> String {
    match kind {
        TaskKindHint::Todo => String::new(),
        TaskKindHint::Deadline => format!("\n{DEADLINE_USAGE}"),
        TaskKindHint::Event => format!("\n{EVENT_USAGE}"),
    }
}

fn malformed_message(kind: &TaskKindHint) -> String {
    match kind {
        TaskKindHint::Todo => "I couldn't understand that todo.\nUse: todo <description>".to_string(),
        TaskKindHint::Deadline => {
            format!("I need both a description and a due date.\n{DEADLINE_USAGE}")
        }
        TaskKindHint::Event => {
            format!("I need a description and both start and end times for the event.\n{EVENT_USAGE}")
        }
    }
}

/// Failures of the backing file. These never end a session; the caller decides whether to log them.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read tasks from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write tasks to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
