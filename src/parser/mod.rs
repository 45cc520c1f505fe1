/// Taskmate parser module
///
/// Turns raw input lines into typed commands and validated arguments.
pub mod arguments;
pub mod command;
pub mod datetime;

pub use command::{parse_command, Command, CommandType};
pub use datetime::{format_display, format_storage, parse_datetime};
