//! Help for unrecognised input
//!
//! Anything the tokenizer could not place lands here and gets the list of
//! commands back.

use super::{CommandHandler, Context, Response};
use crate::error::TaskError;
use crate::parser::{Command, CommandType};

#[derive(Debug)]
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn execute(&self, _command: &Command, _ctx: &mut Context) -> Result<Response, TaskError> {
        Ok(unknown_command())
    }

    fn can_handle(&self, command: CommandType) -> bool {
        command == CommandType::Unknown
    }
}

pub(crate) fn unknown_command() -> Response {
    Response::message(
        [
            " OOPS!!! I'm sorry, but I don't know what that means :-(",
            " Try 'list', 'todo <description>', 'deadline <desc> /by <date>',",
            " 'event <desc> /from <start> /to <end>', 'mark <number>',",
            " 'unmark <number>', 'delete <number>', 'find <keyword>',",
            " 'freetime <hours>', or 'bye'.",
        ]
        .iter()
        .map(|line| line.to_string())
        .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_command() {
        let mut ctx = Context::default();
        let response = HelpHandler.execute(&Command::new(CommandType::Unknown, "blah"), &mut ctx).unwrap();
        let text = response.lines.join("\n");
        for keyword in ["list", "todo", "deadline", "event", "mark", "unmark", "delete", "find", "freetime", "bye"] {
            assert!(text.contains(keyword), "help should mention {keyword}");
        }
        assert!(!response.modified);
        assert!(!response.is_error);
    }
}
