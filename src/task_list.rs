//! Ordered task collection
//!
//! Positions are 0-based here; the 1-based numbers users type are converted
//! before they reach this module.

use crate::task::Task;
use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: Task) {
        debug!("Adding task '{}' at position {}", task.description(), self.tasks.len());
        self.tasks.push(task);
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Remove and return the task at `index`, or `None` when out of range
    pub fn delete(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// Set the done flag of the task at `index`. Out-of-range is a no-op;
    /// returns the updated task when there was one.
    pub fn mark_task(&mut self, index: usize, done: bool) -> Option<&Task> {
        let task = self.tasks.get_mut(index)?;
        task.set_done(done);
        Some(&*task)
    }

    /// Tasks whose description contains `keyword`, ignoring case and
    /// surrounding whitespace of the keyword. A blank keyword matches nothing.
    pub fn find_tasks(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.tasks
            .iter()
            .filter(|task| task.description().to_lowercase().contains(&needle))
            .collect()
    }

    /// Read-only view in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
