//! Delete command handler

use super::{CommandHandler, Context, Response};
use crate::error::{IndexCommand, TaskError};
use crate::parser::arguments::{parse_index, to_zero_based};
use crate::parser::{Command, CommandType};

#[derive(Debug)]
pub struct DeleteHandler;

impl CommandHandler for DeleteHandler {
    fn execute(&self, command: &Command, ctx: &mut Context) -> Result<Response, TaskError> {
        let number = parse_index(&command.argument, IndexCommand::Delete)?;
        let removed = to_zero_based(number)
            .and_then(|index| ctx.tasks.delete(index))
            .ok_or(TaskError::TaskNotFound)?;

        Ok(Response::modified(vec![
            " Noted. I've removed this task:".to_string(),
            format!("   {removed}"),
            format!(" Now you have {} tasks in the list.", ctx.tasks.len()),
        ]))
    }

    fn can_handle(&self, command: CommandType) -> bool {
        command == CommandType::Delete
    }
}
