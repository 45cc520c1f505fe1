//! List command handler

use super::{CommandHandler, Context, Response};
use crate::error::TaskError;
use crate::parser::{Command, CommandType};
use crate::task::Task;

#[derive(Debug)]
pub struct ListHandler;

/// ` 1.[T][ ] read book` style lines, numbered from 1
pub(crate) fn numbered<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<String> {
    tasks.into_iter().enumerate().map(|(i, task)| format!(" {}.{}", i + 1, task)).collect()
}

impl CommandHandler for ListHandler {
    fn execute(&self, _command: &Command, ctx: &mut Context) -> Result<Response, TaskError> {
        if ctx.tasks.is_empty() {
            return Ok(Response::message(vec![" Your task list is empty.".to_string()]));
        }
        let mut lines = vec![" Here are the tasks in your list:".to_string()];
        lines.extend(numbered(&ctx.tasks));
        Ok(Response::message(lines))
    }

    fn can_handle(&self, command: CommandType) -> bool {
        command == CommandType::List
    }
}
