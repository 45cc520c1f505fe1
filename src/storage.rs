//! Flat-file persistence for the task list
//!
//! One task per line, fields separated by `" | "`:
//!
//! ```text
//! T | 0 | read book
//! D | 1 | return book | 2024-12-25T18:00:00
//! E | 0 | project meeting | 2024-12-25T14:00:00 | 2024-12-25T16:00:00
//! ```
//!
//! Lines that cannot be decoded are reported and skipped; they never stop the
//! rest of the file from loading.

use crate::error::StorageError;
use crate::parser::datetime::{format_storage, parse_canonical};
use crate::task::{Task, TaskKind};
use crate::task_list::TaskList;
use chrono::NaiveDateTime;
use log::{debug, info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const FIELD_SEPARATOR: &str = " | ";
const TEMP_SUFFIX: &str = "tmp";

/// Why a stored line was not turned into a task
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("expected at least 3 fields, found {0}")]
    TooFewFields(usize),
    #[error("unknown task type '{0}'")]
    UnknownType(String),
    #[error("{kind} record needs {expected} fields, found {found}")]
    MissingTimestamp { kind: char, expected: usize, found: usize },
    #[error("unparsable timestamp '{0}'")]
    BadTimestamp(String),
    #[error("event ends before it starts")]
    ReversedEvent,
}

/// A line skipped during [`Storage::load`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub content: String,
    pub reason: DecodeError,
}

/// What a load produced: the tasks, plus anything that had to be left behind
#[derive(Debug, Default)]
pub struct LoadReport {
    pub tasks: TaskList,
    pub skipped: Vec<SkippedLine>,
}

/// Encode a task as one storage line, without the trailing newline
pub fn encode_task(task: &Task) -> String {
    let done = if task.is_done() { "1" } else { "0" };
    let mut fields = vec![type_letter(task.kind()).to_string(), done.to_string(), task.description().to_string()];
    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { due_at } => fields.push(format_storage(due_at)),
        TaskKind::Event { start_at, end_at } => {
            fields.push(format_storage(start_at));
            fields.push(format_storage(end_at));
        }
    }
    fields.join(FIELD_SEPARATOR)
}

/// Decode one storage line.
///
/// Type and status are taken from the left and timestamps from the right, so
/// a description may itself contain the field separator.
pub fn decode_task(line: &str) -> Result<Task, DecodeError> {
    let mut head = line.splitn(3, FIELD_SEPARATOR);
    let (kind, done, mut rest) = match (head.next(), head.next(), head.next()) {
        (Some(kind), Some(done), Some(rest)) => (kind, done, rest),
        (Some(_), Some(_), None) => return Err(DecodeError::TooFewFields(2)),
        _ => return Err(DecodeError::TooFewFields(1)),
    };
    // Trailing empty fields carry nothing
    while let Some(stripped) = rest.strip_suffix(FIELD_SEPARATOR) {
        rest = stripped;
    }
    if rest.is_empty() {
        return Err(DecodeError::TooFewFields(2));
    }

    let mut task = match kind {
        "T" => Task::todo(rest),
        "D" => {
            let (description, [due_at]) = split_timestamps::<1>('D', rest)?;
            Task::deadline(description, timestamp(due_at)?)
        }
        "E" => {
            let (description, [start_at, end_at]) = split_timestamps::<2>('E', rest)?;
            let start_at = timestamp(start_at)?;
            let end_at = timestamp(end_at)?;
            if end_at < start_at {
                return Err(DecodeError::ReversedEvent);
            }
            Task::event(description, start_at, end_at)
        }
        other => return Err(DecodeError::UnknownType(other.to_string())),
    };
    task.set_done(done == "1");
    Ok(task)
}

/// Split `N` timestamp fields off the right of `rest`, leaving the description
fn split_timestamps<const N: usize>(kind: char, rest: &str) -> Result<(&str, [&str; N]), DecodeError> {
    let mut timestamps = [""; N];
    let mut remaining = rest;
    for (taken, slot) in timestamps.iter_mut().rev().enumerate() {
        let (left, field) = remaining.rsplit_once(FIELD_SEPARATOR).ok_or(DecodeError::MissingTimestamp {
            kind,
            expected: N + 3,
            found: taken + 3,
        })?;
        *slot = field;
        remaining = left;
    }
    Ok((remaining, timestamps))
}

fn type_letter(kind: &TaskKind) -> char {
    match kind {
        TaskKind::Todo => 'T',
        TaskKind::Deadline { .. } => 'D',
        TaskKind::Event { .. } => 'E',
    }
}

fn timestamp(field: &str) -> Result<NaiveDateTime, DecodeError> {
    parse_canonical(field.trim()).ok_or_else(|| DecodeError::BadTimestamp(field.to_string()))
}

/// The backing file of one task list
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every task from disk. A missing file is an empty list.
    pub fn load(&self) -> Result<LoadReport, StorageError> {
        let mut report = LoadReport::default();
        if !self.path.exists() {
            info!("No task file at {}, starting empty", self.path.display());
            return Ok(report);
        }

        let read_err = |source: std::io::Error| StorageError::Read { path: self.path.clone(), source };
        let file = File::open(&self.path).map_err(read_err)?;

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(read_err)?;
            if line.trim().is_empty() {
                continue;
            }
            match decode_task(&line) {
                Ok(task) => report.tasks.add(task),
                Err(reason) => {
                    warn!("Skipping line {} of {}: {}", index + 1, self.path.display(), reason);
                    report.skipped.push(SkippedLine { line_number: index + 1, content: line, reason });
                }
            }
        }

        info!(
            "Loaded {} tasks from {} ({} skipped)",
            report.tasks.len(),
            self.path.display(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Write the whole list, replacing the previous file.
    ///
    /// The new contents go to a sibling temp file first and are renamed into
    /// place, so a failed write leaves the old file intact.
    pub fn save(&self, tasks: &TaskList) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| StorageError::CreateDir { path: parent.to_path_buf(), source })?;
        }

        let temp_path = self.path.with_extension(TEMP_SUFFIX);
        let write_err = |source: std::io::Error| StorageError::Write { path: self.path.clone(), source };

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        for task in tasks {
            writeln!(writer, "{}", encode_task(task)).map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;
        drop(writer);

        fs::rename(&temp_path, &self.path).map_err(write_err)?;
        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
