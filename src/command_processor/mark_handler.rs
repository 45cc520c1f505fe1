//! Mark and unmark command handler

use super::{CommandHandler, Context, Response};
use crate::error::{IndexCommand, TaskError};
use crate::parser::arguments::{parse_index, to_zero_based};
use crate::parser::{Command, CommandType};

#[derive(Debug)]
pub struct MarkHandler;

impl CommandHandler for MarkHandler {
    fn execute(&self, command: &Command, ctx: &mut Context) -> Result<Response, TaskError> {
        let (which, done, header) = if command.command_type == CommandType::Unmark {
            (IndexCommand::Unmark, false, " OK, I've marked this task as not done yet:")
        } else {
            (IndexCommand::Mark, true, " Nice! I've marked this task as done:")
        };

        let number = parse_index(&command.argument, which)?;
        let index = to_zero_based(number).ok_or(TaskError::TaskNotFound)?;
        let task = ctx.tasks.mark_task(index, done).ok_or(TaskError::TaskNotFound)?;

        Ok(Response::modified(vec![header.to_string(), format!("   {task}")]))
    }

    fn can_handle(&self, command: CommandType) -> bool {
        matches!(command, CommandType::Mark | CommandType::Unmark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;
    use crate::task_list::TaskList;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn context() -> Context {
        let mut ctx = Context::default();
        ctx.tasks = TaskList::from(vec![Task::todo("read book"), Task::todo("buy milk")]);
        ctx
    }

    #[test]
    fn test_mark_then_unmark() {
        let mut ctx = context();
        let response = MarkHandler.execute(&Command::new(CommandType::Mark, "2"), &mut ctx).unwrap();
        assert!(response.modified);
        assert_eq!(response.lines, vec![" Nice! I've marked this task as done:", "   [T][X] buy milk"]);

        let response = MarkHandler.execute(&Command::new(CommandType::Unmark, " 2 "), &mut ctx).unwrap();
        assert_eq!(response.lines, vec![" OK, I've marked this task as not done yet:", "   [T][ ] buy milk"]);
        assert!(!ctx.tasks.get(1).unwrap().is_done());
    }

    #[test_case("0" ; "zero")]
    #[test_case("-1" ; "negative")]
    #[test_case("3" ; "past the end")]
    fn test_out_of_range(argument: &str) {
        let mut ctx = context();
        let err = MarkHandler.execute(&Command::new(CommandType::Mark, argument), &mut ctx).unwrap_err();
        assert_eq!(err, TaskError::TaskNotFound);
        assert!(ctx.tasks.iter().all(|t| !t.is_done()));
    }

    #[test]
    fn test_bad_index() {
        let mut ctx = context();
        assert_eq!(
            MarkHandler.execute(&Command::new(CommandType::Unmark, ""), &mut ctx),
            Err(TaskError::MissingIndex(IndexCommand::Unmark))
        );
        assert_eq!(
            MarkHandler.execute(&Command::new(CommandType::Mark, "one"), &mut ctx),
            Err(TaskError::InvalidIndex(IndexCommand::Mark))
        );
    }
}
