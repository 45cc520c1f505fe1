//! Task model
//!
//! A task is a description, a done flag and a kind. The kind is a closed enum
//! so formatting and storage can match on it exhaustively.

use crate::parser::datetime::format_display;
use chrono::NaiveDateTime;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { due_at: NaiveDateTime },
    Event { start_at: NaiveDateTime, end_at: NaiveDateTime },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self { description: description.into(), done: false, kind }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, due_at: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Deadline { due_at })
    }

    pub fn event(description: impl Into<String>, start_at: NaiveDateTime, end_at: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Event { start_at, end_at })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// `(start, end)` if this task is an event
    pub fn event_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match self.kind {
            TaskKind::Event { start_at, end_at } => Some((start_at, end_at)),
            _ => None,
        }
    }

    /// `[T]`, `[D]` or `[E]`
    pub fn type_icon(&self) -> &'static str {
        match self.kind {
            TaskKind::Todo => "[T]",
            TaskKind::Deadline { .. } => "[D]",
            TaskKind::Event { .. } => "[E]",
        }
    }

    pub fn status_icon(&self) -> &'static str {
        if self.done {
            "[X]"
        } else {
            "[ ]"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.type_icon(), self.status_icon(), self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due_at } => write!(f, " (by: {})", format_display(due_at)),
            TaskKind::Event { start_at, end_at } => write!(
                f,
                " (from: {} to: {})",
                format_display(start_at),
                format_display(end_at)
            ),
        }
    }
}
