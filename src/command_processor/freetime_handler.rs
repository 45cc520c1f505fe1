//! Free time command handler
//!
//! `freetime <hours>` reports the earliest gap between events inside the
//! configured working hours.

use super::{CommandHandler, Context, Response};
use crate::error::TaskError;
use crate::free_time::FreeTimeFinder;
use crate::parser::arguments::parse_hours;
use crate::parser::{Command, CommandType};
use log::info;

#[derive(Debug)]
pub struct FreeTimeHandler;

impl CommandHandler for FreeTimeHandler {
    fn execute(&self, command: &Command, ctx: &mut Context) -> Result<Response, TaskError> {
        let hours = parse_hours(&command.argument)?;
        let finder = FreeTimeFinder::new(&ctx.tasks).with_working_hours(ctx.working_hours);

        let lines = match finder.find_next_free_time_from(ctx.now(), hours) {
            Some(slot) => {
                info!("Found {}h slot starting {}", hours, slot.start());
                vec![" Found a free time slot:".to_string(), format!("   {slot}")]
            }
            None => vec![format!(" Sorry, I couldn't find any free time slots of {hours} hours.")],
        };
        Ok(Response::message(lines))
    }

    fn can_handle(&self, command: CommandType) -> bool {
        command == CommandType::FreeTime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;
    use crate::task_list::TaskList;
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    fn at(day: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, day).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_slot_after_event() {
        let mut ctx = Context::default().with_clock(at(25, 8));
        ctx.tasks = TaskList::from(vec![Task::event("meeting", at(25, 9), at(25, 12))]);

        let response = FreeTimeHandler.execute(&Command::new(CommandType::FreeTime, "4"), &mut ctx).unwrap();
        assert!(!response.modified);
        assert_eq!(
            response.lines,
            vec![" Found a free time slot:", "   Dec 25 2024 12:00 to Dec 25 2024 16:00 (4 hours)"]
        );
    }

    #[test]
    fn test_no_slot() {
        let mut ctx = Context::default().with_clock(at(25, 8));
        let response = FreeTimeHandler.execute(&Command::new(CommandType::FreeTime, "13"), &mut ctx).unwrap();
        assert_eq!(response.lines, vec![" Sorry, I couldn't find any free time slots of 13 hours."]);
    }

    #[test]
    fn test_bad_hours() {
        let mut ctx = Context::default();
        for (argument, expected) in [
            ("", TaskError::MissingHours),
            ("0", TaskError::InvalidHours),
            ("-2", TaskError::InvalidHours),
            ("two", TaskError::InvalidHours),
        ] {
            assert_eq!(
                FreeTimeHandler.execute(&Command::new(CommandType::FreeTime, argument), &mut ctx),
                Err(expected)
            );
        }
    }
}
