//! Taskmate: a terminal task assistant
//!
//! Keeps todos, deadlines and events in a flat file and answers free-time
//! queries against the scheduled events.

pub mod app;
pub mod cli;
pub mod command_processor;
pub mod config;
pub mod error;
pub mod free_time;
pub mod parser;
pub mod storage;
pub mod task;
pub mod task_list;
pub mod ui;

// Re-export commonly used types
pub use command_processor::{CommandProcessor, Context, Response};
pub use config::Config;
pub use error::{StorageError, TaskError};
pub use free_time::{FreeTimeFinder, FreeTimeSlot, WorkingHours};
pub use storage::Storage;
pub use task::{Task, TaskKind};
pub use task_list::TaskList;
