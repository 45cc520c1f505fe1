//! Find command handler

use super::list_handler::numbered;
use super::{CommandHandler, Context, Response};
use crate::error::TaskError;
use crate::parser::arguments::parse_keyword;
use crate::parser::{Command, CommandType};
use log::debug;

#[derive(Debug)]
pub struct FindHandler;

impl CommandHandler for FindHandler {
    fn execute(&self, command: &Command, ctx: &mut Context) -> Result<Response, TaskError> {
        let keyword = parse_keyword(&command.argument)?;
        let matches = ctx.tasks.find_tasks(&keyword);
        debug!("'{}' matched {} of {} tasks", keyword, matches.len(), ctx.tasks.len());

        if matches.is_empty() {
            return Ok(Response::message(vec![format!(" No matching tasks found with keyword: {keyword}")]));
        }
        let mut lines = vec![" Here are the matching tasks in your list:".to_string()];
        lines.extend(numbered(matches));
        Ok(Response::message(lines))
    }

    fn can_handle(&self, command: CommandType) -> bool {
        command == CommandType::Find
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;
    use crate::task_list::TaskList;
    use pretty_assertions::assert_eq;

    fn context() -> Context {
        let mut ctx = Context::default();
        ctx.tasks = TaskList::from(vec![
            Task::todo("read book"),
            Task::todo("buy groceries"),
            Task::todo("return BOOK"),
        ]);
        ctx
    }

    #[test]
    fn test_find_numbers_matches_from_one() {
        let mut ctx = context();
        let response = FindHandler.execute(&Command::new(CommandType::Find, "book"), &mut ctx).unwrap();
        assert_eq!(
            response.lines,
            vec![
                " Here are the matching tasks in your list:",
                " 1.[T][ ] read book",
                " 2.[T][ ] return BOOK",
            ]
        );
    }

    #[test]
    fn test_find_nothing() {
        let mut ctx = context();
        let response = FindHandler.execute(&Command::new(CommandType::Find, " xyz "), &mut ctx).unwrap();
        assert_eq!(response.lines, vec![" No matching tasks found with keyword: xyz"]);
        assert_eq!(
            FindHandler.execute(&Command::new(CommandType::Find, ""), &mut ctx),
            Err(TaskError::MissingKeyword)
        );
    }
}
