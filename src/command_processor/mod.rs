use crate::error::TaskError;
use crate::free_time::WorkingHours;
use crate::parser::{parse_command, Command, CommandType};
use crate::task_list::TaskList;
use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};
use std::fmt::Debug;

pub mod add_handler;
pub mod delete_handler;
pub mod exit_handler;
pub mod find_handler;
pub mod freetime_handler;
pub mod help_handler;
pub mod list_handler;
pub mod mark_handler;

/// Session state the handlers operate on
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub tasks: TaskList,
    pub working_hours: WorkingHours,
    /// Pinned clock for free-time searches; `None` reads the local clock
    pub clock: Option<NaiveDateTime>,
}

impl Context {
    pub fn new(tasks: TaskList, working_hours: WorkingHours) -> Self {
        Self { tasks, working_hours, clock: None }
    }

    pub fn with_clock(mut self, now: NaiveDateTime) -> Self {
        self.clock = Some(now);
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.unwrap_or_else(|| Local::now().naive_local())
    }
}

/// What a command produced: lines to show, and what the session should do next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub lines: Vec<String>,
    /// The task list changed and should be persisted
    pub modified: bool,
    /// The session should end
    pub exit: bool,
    pub is_error: bool,
}

impl Response {
    pub fn message(lines: Vec<String>) -> Self {
        Self { lines, ..Self::default() }
    }

    pub fn modified(lines: Vec<String>) -> Self {
        Self { lines, modified: true, ..Self::default() }
    }

    pub fn exit() -> Self {
        Self { exit: true, ..Self::default() }
    }

    pub fn error(err: &TaskError) -> Self {
        Self { lines: vec![format!(" OOPS!!! {err}")], is_error: true, ..Self::default() }
    }
}

pub trait CommandHandler: Debug {
    fn execute(&self, command: &Command, ctx: &mut Context) -> Result<Response, TaskError>;
    fn can_handle(&self, command: CommandType) -> bool;
}

#[derive(Debug)]
pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(add_handler::AddHandler),
            Box::new(list_handler::ListHandler),
            Box::new(mark_handler::MarkHandler),
            Box::new(delete_handler::DeleteHandler),
            Box::new(find_handler::FindHandler),
            Box::new(freetime_handler::FreeTimeHandler),
            Box::new(exit_handler::ExitHandler),
            Box::new(help_handler::HelpHandler),
        ];
        Self { handlers }
    }

    /// Run one line of input against the session. Never fails: a rejected
    /// command comes back as an error response and the session carries on.
    pub fn process(&self, line: &str, ctx: &mut Context) -> Response {
        let command = parse_command(line);
        debug!("Attempting to execute command: {}", command.command_type);
        debug!("Parsed argument: {:?}", command.argument);

        for handler in &self.handlers {
            if handler.can_handle(command.command_type) {
                return match handler.execute(&command, ctx) {
                    Ok(response) => {
                        if response.modified {
                            info!("Command '{}' changed the task list ({} tasks)", command.command_type, ctx.tasks.len());
                        }
                        response
                    }
                    Err(e) => {
                        warn!("Command '{}' rejected: {:?}", command.command_type, e);
                        Response::error(&e)
                    }
                };
            }
        }

        // Every command type has a handler; reaching here means the table above is incomplete
        warn!("No handler registered for {}", command.command_type);
        help_handler::unknown_command()
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}
