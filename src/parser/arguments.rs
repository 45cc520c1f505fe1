//! Per-command argument decomposition
//!
//! The tokenizer hands over the raw remainder of a line; these functions turn
//! it into validated values for each command family.

use crate::error::{IndexCommand, TaskError, TaskKindHint};
use crate::parser::datetime::parse_datetime;
use chrono::NaiveDateTime;

const BY_SEPARATOR: &str = " /by ";
const FROM_SEPARATOR: &str = " /from ";
const TO_SEPARATOR: &str = " /to ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineArgs {
    pub description: String,
    pub due_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventArgs {
    pub description: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

/// `todo <description>`
pub fn parse_todo(argument: &str) -> Result<String, TaskError> {
    let description = argument.trim();
    if description.is_empty() {
        return Err(TaskError::EmptyDescription(TaskKindHint::Todo));
    }
    Ok(description.to_string())
}

/// `deadline <description> /by <date>`
pub fn parse_deadline(argument: &str) -> Result<DeadlineArgs, TaskError> {
    if argument.trim().is_empty() {
        return Err(TaskError::EmptyDescription(TaskKindHint::Deadline));
    }

    let (description, by) = argument
        .split_once(BY_SEPARATOR)
        .ok_or(TaskError::MalformedCommand(TaskKindHint::Deadline))?;
    let description = description.trim();
    let by = by.trim();

    if description.is_empty() {
        return Err(TaskError::EmptyDescription(TaskKindHint::Deadline));
    }
    if by.is_empty() {
        return Err(TaskError::MissingDate);
    }

    Ok(DeadlineArgs { description: description.to_string(), due_at: parse_datetime(by)? })
}

/// `event <description> /from <start> /to <end>`
///
/// Rejects an event whose end is before its start; equal instants are allowed.
pub fn parse_event(argument: &str) -> Result<EventArgs, TaskError> {
    if argument.trim().is_empty() {
        return Err(TaskError::EmptyDescription(TaskKindHint::Event));
    }

    let malformed = TaskError::MalformedCommand(TaskKindHint::Event);
    let (description, times) = argument.split_once(FROM_SEPARATOR).ok_or(malformed.clone())?;
    let (from, to) = times.split_once(TO_SEPARATOR).ok_or(malformed)?;

    let description = description.trim();
    let from = from.trim();
    let to = to.trim();

    if description.is_empty() {
        return Err(TaskError::EmptyDescription(TaskKindHint::Event));
    }
    if from.is_empty() {
        return Err(TaskError::MissingStart);
    }
    if to.is_empty() {
        return Err(TaskError::MissingEnd);
    }

    let start_at = parse_datetime(from)?;
    let end_at = parse_datetime(to)?;
    if end_at < start_at {
        return Err(TaskError::EventEndsBeforeStart);
    }

    Ok(EventArgs { description: description.to_string(), start_at, end_at })
}

/// `mark|unmark|delete <n>`: returns the 1-based number as typed.
///
/// Zero and negative numbers are well-formed here; they simply never match a
/// task, see [`to_zero_based`].
pub fn parse_index(argument: &str, command: IndexCommand) -> Result<i64, TaskError> {
    let text = argument.trim();
    if text.is_empty() {
        return Err(TaskError::MissingIndex(command));
    }
    text.parse::<i64>().map_err(|_| TaskError::InvalidIndex(command))
}

/// Convert a 1-based task number into a list position, if it can be one
pub fn to_zero_based(number: i64) -> Option<usize> {
    usize::try_from(number.checked_sub(1)?).ok()
}

/// `find <keyword>`
pub fn parse_keyword(argument: &str) -> Result<String, TaskError> {
    let keyword = argument.trim();
    if keyword.is_empty() {
        return Err(TaskError::MissingKeyword);
    }
    Ok(keyword.to_string())
}

/// `freetime <hours>`: a positive whole number of hours
pub fn parse_hours(argument: &str) -> Result<u32, TaskError> {
    let text = argument.trim();
    if text.is_empty() {
        return Err(TaskError::MissingHours);
    }
    let hours = text.parse::<i32>().map_err(|_| TaskError::InvalidHours)?;
    if hours <= 0 {
        return Err(TaskError::InvalidHours);
    }
    Ok(hours as u32)
}
