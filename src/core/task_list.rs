//! In-memory ordered collection of tasks.
//!
//! Indices are zero-based here; errors report the 1-based number the user typed.
//! A task's identity is its position, so deleting shifts every later task down.

use crate::core::{
    error::{BuddyError, Result},
    task::Task,
};
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Bounds-checked lookup
    pub fn get(&self, index: usize) -> Result<&Task> {
        self.tasks
            .get(index)
            .ok_or_else(|| {
                BuddyError::index_out_of_range(index.saturating_add(1), self.tasks.len())
            })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Task> {
        let size = self.tasks.len();
        self.tasks
            .get_mut(index)
            .ok_or_else(|| BuddyError::index_out_of_range(index.saturating_add(1), size))
    }

    pub fn add_todo(&mut self, description: &str) -> Result<&Task> {
        self.push(Task::todo(description)?)
    }

    pub fn add_deadline(&mut self, description: &str, by: NaiveDateTime) -> Result<&Task> {
        self.push(Task::deadline(description, by)?)
    }

    pub fn add_event(
        &mut self,
        description: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<&Task> {
        self.push(Task::event(description, from, to)?)
    }

    fn push(&mut self, task: Task) -> Result<&Task> {
        self.tasks.push(task);
        let last = self.tasks.len() - 1;
        self.get(last)
    }

    pub fn mark_done(&mut self, index: usize) -> Result<&Task> {
        let task = self.get_mut(index)?;
        task.mark_done();
        Ok(task)
    }

    pub fn mark_undone(&mut self, index: usize) -> Result<&Task> {
        let task = self.get_mut(index)?;
        task.mark_undone();
        Ok(task)
    }

    /// Remove and return the task at `index`
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(BuddyError::index_out_of_range(
                index.saturating_add(1),
                self.tasks.len(),
            ));
        }
        Ok(self.tasks.remove(index))
    }

    /// Tasks whose description contains `keyword`, ignoring case, in list order
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.matches_keyword(keyword))
            .collect()
    }

    /// Deadlines and events that fall on `date`, in list order
    pub fn on_date(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.is_on_date(date))
            .collect()
    }
}
