//! Add command handler
//!
//! Handles `todo`, `deadline` and `event`.

use super::{CommandHandler, Context, Response};
use crate::error::{TaskError, TaskKindHint};
use crate::parser::arguments::{parse_deadline, parse_event, parse_todo};
use crate::parser::{Command, CommandType};
use crate::task::Task;
use log::debug;

#[derive(Debug)]
pub struct AddHandler;

fn build_task(command: &Command) -> Result<Task, TaskError> {
    match command.command_type {
        CommandType::Deadline => {
            let args = parse_deadline(&command.argument)?;
            Ok(Task::deadline(args.description, args.due_at))
        }
        CommandType::Event => {
            let args = parse_event(&command.argument)?;
            Ok(Task::event(args.description, args.start_at, args.end_at))
        }
        CommandType::Todo => Ok(Task::todo(parse_todo(&command.argument)?)),
        _ => Err(TaskError::MalformedCommand(TaskKindHint::Todo)),
    }
}

/// Confirmation shown after a task joins the list
fn added_lines(task: &Task, total: usize) -> Vec<String> {
    vec![
        " Got it. I've added this task:".to_string(),
        format!("   {task}"),
        format!(" Now you have {total} tasks in the list."),
    ]
}

impl CommandHandler for AddHandler {
    fn execute(&self, command: &Command, ctx: &mut Context) -> Result<Response, TaskError> {
        let task = build_task(command)?;
        debug!("Built {} task: {}", command.command_type, task);
        let lines = added_lines(&task, ctx.tasks.len() + 1);
        ctx.tasks.add(task);
        Ok(Response::modified(lines))
    }

    fn can_handle(&self, command: CommandType) -> bool {
        matches!(command, CommandType::Todo | CommandType::Deadline | CommandType::Event)
    }
}
