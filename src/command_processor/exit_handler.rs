//! Exit command handler
//!
//! Handles `bye`. Ending the session is left to the caller, which sees
//! [`Response::exit`] set.

use super::{CommandHandler, Context, Response};
use crate::error::TaskError;
use crate::parser::{Command, CommandType};

#[derive(Debug)]
pub struct ExitHandler;

impl CommandHandler for ExitHandler {
    fn execute(&self, _command: &Command, _ctx: &mut Context) -> Result<Response, TaskError> {
        Ok(Response::exit())
    }

    fn can_handle(&self, command: CommandType) -> bool {
        command == CommandType::Bye
    }
}
