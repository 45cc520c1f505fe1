//! Free-time search over the events in a task list
//!
//! Scans day by day over a fixed horizon and returns the first gap inside
//! working hours that is at least the requested number of whole hours.
//! Only events take part; todos and deadlines never block time.

use crate::parser::datetime::format_display;
use crate::task_list::TaskList;
use chrono::{Days, Duration, Local, NaiveDateTime, NaiveTime};
use log::debug;
use std::fmt;

pub const DEFAULT_DAY_START_HOUR: u32 = 9;
pub const DEFAULT_DAY_END_HOUR: u32 = 21;
pub const DEFAULT_HORIZON_DAYS: u32 = 14;

/// The daily window and the number of days searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    day_start: NaiveTime,
    day_end: NaiveTime,
    horizon_days: u32,
}

impl WorkingHours {
    /// `None` unless `day_start < day_end` and the horizon is at least one day
    pub fn new(day_start: NaiveTime, day_end: NaiveTime, horizon_days: u32) -> Option<Self> {
        if day_start >= day_end || horizon_days == 0 {
            return None;
        }
        Some(Self { day_start, day_end, horizon_days })
    }

    /// Whole-hour window, e.g. `from_hours(9, 21, 14)`
    pub fn from_hours(start_hour: u32, end_hour: u32, horizon_days: u32) -> Option<Self> {
        Self::new(
            NaiveTime::from_hms_opt(start_hour, 0, 0)?,
            NaiveTime::from_hms_opt(end_hour, 0, 0)?,
            horizon_days,
        )
    }

    pub fn day_start(&self) -> NaiveTime {
        self.day_start
    }

    pub fn day_end(&self) -> NaiveTime {
        self.day_end
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(DEFAULT_DAY_START_HOUR, 0, 0).unwrap_or_default(),
            day_end: NaiveTime::from_hms_opt(DEFAULT_DAY_END_HOUR, 0, 0).unwrap_or_default(),
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

/// An open interval found by [`FreeTimeFinder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeTimeSlot {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl FreeTimeSlot {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Length in whole hours, rounded down
    pub fn duration_hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }
}

impl fmt::Display for FreeTimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} ({} hours)",
            format_display(&self.start),
            format_display(&self.end),
            self.duration_hours()
        )
    }
}

pub struct FreeTimeFinder<'a> {
    tasks: &'a TaskList,
    working_hours: WorkingHours,
}

impl<'a> FreeTimeFinder<'a> {
    pub fn new(tasks: &'a TaskList) -> Self {
        Self { tasks, working_hours: WorkingHours::default() }
    }

    pub fn with_working_hours(mut self, working_hours: WorkingHours) -> Self {
        self.working_hours = working_hours;
        self
    }

    /// Earliest slot of `hours_needed` hours, searching from today
    pub fn find_next_free_time(&self, hours_needed: u32) -> Option<FreeTimeSlot> {
        self.find_next_free_time_from(Local::now().naive_local(), hours_needed)
    }

    /// Earliest slot of `hours_needed` hours, searching from the date of `now`.
    ///
    /// Each day's window starts at the configured opening time even on the
    /// first day, whatever the clock time of `now`.
    pub fn find_next_free_time_from(&self, now: NaiveDateTime, hours_needed: u32) -> Option<FreeTimeSlot> {
        if hours_needed == 0 {
            return None;
        }

        let events = self.sorted_events();
        debug!(
            "Searching {} days from {} for {} free hours around {} events",
            self.working_hours.horizon_days,
            now.date(),
            hours_needed,
            events.len()
        );

        for offset in 0..self.working_hours.horizon_days {
            let date = now.date().checked_add_days(Days::new(u64::from(offset)))?;
            let day_start = date.and_time(self.working_hours.day_start);
            let day_end = date.and_time(self.working_hours.day_end);

            if let Some(slot) = find_in_day(day_start, day_end, hours_needed, &events) {
                debug!("Found free slot {}", slot);
                return Some(slot);
            }
        }

        debug!("No free slot of {} hours within the horizon", hours_needed);
        None
    }

    fn sorted_events(&self) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        let mut events: Vec<_> = self.tasks.iter().filter_map(|task| task.event_span()).collect();
        events.sort_by_key(|(start, _)| *start);
        events
    }
}

/// Gap scan for a single day. `events` must already be sorted by start.
fn find_in_day(
    day_start: NaiveDateTime,
    day_end: NaiveDateTime,
    hours_needed: u32,
    events: &[(NaiveDateTime, NaiveDateTime)],
) -> Option<FreeTimeSlot> {
    let needed = i64::from(hours_needed);
    let mut cursor = day_start;

    let overlapping = events.iter().filter(|(start, end)| !(*end < day_start || *start > day_end));
    for (start, end) in overlapping {
        let gap_end = (*start).max(day_start);
        if (gap_end - cursor).num_hours() >= needed {
            return Some(FreeTimeSlot::new(cursor, cursor + Duration::hours(needed)));
        }
        cursor = cursor.max(*end);
        if cursor > day_end {
            break;
        }
    }

    if cursor < day_end && (day_end - cursor).num_hours() >= needed {
        return Some(FreeTimeSlot::new(cursor, cursor + Duration::hours(needed)));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;
    use chrono::{NaiveDate, Timelike};
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, m, 0).unwrap()
    }

    fn list(events: &[(NaiveDateTime, NaiveDateTime)]) -> TaskList {
        let mut tasks = TaskList::new();
        tasks.add(Task::todo("not an event"));
        tasks.add(Task::deadline("nor this", at(10, 12, 0)));
        for (i, (start, end)) in events.iter().enumerate() {
            tasks.add(Task::event(format!("event {}", i), *start, *end));
        }
        tasks
    }

    #[test]
    fn test_empty_day_starts_at_opening() {
        let tasks = list(&[]);
        let slot = FreeTimeFinder::new(&tasks).find_next_free_time_from(at(10, 15, 30), 3).unwrap();
        assert_eq!(slot, FreeTimeSlot::new(at(10, 9, 0), at(10, 12, 0)));
        assert_eq!(slot.duration_hours(), 3);
    }

    #[test]
    fn test_slot_avoids_event() {
        let tasks = list(&[(at(10, 14, 0), at(10, 16, 0))]);
        let slot = FreeTimeFinder::new(&tasks).find_next_free_time_from(at(10, 8, 0), 2).unwrap();
        assert!(slot.start().hour() >= 9);
        assert!(slot.end() <= at(10, 14, 0) || slot.start() >= at(10, 16, 0));
        assert_eq!(slot.start(), at(10, 9, 0));
    }

    #[test]
    fn test_gap_after_event_when_morning_is_too_short() {
        let tasks = list(&[(at(10, 10, 0), at(10, 13, 0))]);
        let slot = FreeTimeFinder::new(&tasks).find_next_free_time_from(at(10, 0, 0), 2).unwrap();
        assert_eq!(slot, FreeTimeSlot::new(at(10, 13, 0), at(10, 15, 0)));
    }

    #[test]
    fn test_partial_hours_do_not_count() {
        // 09:00-10:59 is free: 1h59m is only one whole hour
        let tasks = list(&[(at(10, 10, 59), at(10, 20, 30))]);
        let slot = FreeTimeFinder::new(&tasks).find_next_free_time_from(at(10, 0, 0), 2).unwrap();
        assert_eq!(slot.start(), at(11, 9, 0));
    }

    #[test]
    fn test_trailing_gap() {
        let tasks = list(&[(at(10, 9, 0), at(10, 18, 0))]);
        let slot = FreeTimeFinder::new(&tasks).find_next_free_time_from(at(10, 0, 0), 3).unwrap();
        assert_eq!(slot, FreeTimeSlot::new(at(10, 18, 0), at(10, 21, 0)));
    }

    #[test]
    fn test_fully_booked_day_moves_to_next_day() {
        let tasks = list(&[(at(10, 9, 0), at(10, 21, 0))]);
        let slot = FreeTimeFinder::new(&tasks).find_next_free_time_from(at(10, 12, 0), 1).unwrap();
        assert_eq!(slot.start(), at(11, 9, 0));
    }

    #[test]
    fn test_multi_day_event_blocks_every_day_it_covers() {
        let tasks = list(&[(at(10, 8, 0), at(12, 22, 0))]);
        let slot = FreeTimeFinder::new(&tasks).find_next_free_time_from(at(10, 0, 0), 4).unwrap();
        assert_eq!(slot.start(), at(13, 9, 0));
    }

    #[test]
    fn test_unsorted_events_are_sorted_by_start() {
        let tasks = list(&[(at(10, 13, 0), at(10, 21, 0)), (at(10, 9, 0), at(10, 12, 0))]);
        let slot = FreeTimeFinder::new(&tasks).find_next_free_time_from(at(10, 0, 0), 1).unwrap();
        assert_eq!(slot, FreeTimeSlot::new(at(10, 12, 0), at(10, 13, 0)));
    }

    #[test]
    fn test_overlapping_events_keep_cursor_at_latest_end() {
        let tasks = list(&[(at(10, 9, 0), at(10, 15, 0)), (at(10, 10, 0), at(10, 11, 0))]);
        let slot = FreeTimeFinder::new(&tasks).find_next_free_time_from(at(10, 0, 0), 2).unwrap();
        assert_eq!(slot.start(), at(10, 15, 0));
    }

    #[test]
    fn test_request_longer_than_window_finds_nothing() {
        let tasks = list(&[]);
        let finder = FreeTimeFinder::new(&tasks);
        assert_eq!(finder.find_next_free_time_from(at(10, 0, 0), 13), None);
        assert!(finder.find_next_free_time_from(at(10, 0, 0), 12).is_some());
    }

    #[test]
    fn test_zero_hours_finds_nothing() {
        let tasks = list(&[]);
        assert_eq!(FreeTimeFinder::new(&tasks).find_next_free_time_from(at(10, 0, 0), 0), None);
    }

    #[test]
    fn test_horizon_is_bounded() {
        let start = at(1, 0, 0);
        let busy = list(&[(start, start + Duration::days(14))]);
        assert_eq!(FreeTimeFinder::new(&busy).find_next_free_time_from(start, 1), None);

        let shorter = list(&[(start, start + Duration::days(13))]);
        let slot = FreeTimeFinder::new(&shorter).find_next_free_time_from(start, 1).unwrap();
        assert_eq!(slot.start(), at(14, 9, 0));
    }

    #[test]
    fn test_custom_working_hours() {
        let tasks = list(&[(at(10, 8, 0), at(10, 9, 0))]);
        let hours = WorkingHours::from_hours(7, 10, 2).unwrap();
        let slot = FreeTimeFinder::new(&tasks)
            .with_working_hours(hours)
            .find_next_free_time_from(at(10, 0, 0), 1)
            .unwrap();
        assert_eq!(slot, FreeTimeSlot::new(at(10, 7, 0), at(10, 8, 0)));
    }

    #[test]
    fn test_working_hours_validation() {
        assert!(WorkingHours::from_hours(21, 9, 14).is_none());
        assert!(WorkingHours::from_hours(9, 9, 14).is_none());
        assert!(WorkingHours::from_hours(9, 21, 0).is_none());
        assert!(WorkingHours::from_hours(9, 24, 1).is_none());
        assert_eq!(WorkingHours::from_hours(9, 21, 14), Some(WorkingHours::default()));
    }

    #[test]
    fn test_slot_display() {
        let slot = FreeTimeSlot::new(at(10, 9, 0), at(10, 11, 0));
        assert_eq!(slot.to_string(), "Mar 10 2025 09:00 to Mar 10 2025 11:00 (2 hours)");
    }
}
