//! The ordered task collection. Indices are 1-based at the boundary; every
//! operation shares the same bound check and an out-of-range index is a
//! reportable error, never a panic.

use crate::error::CommandError;
use crate::model::Task;

#[derive(Debug, Default, Clone)]
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

    /// Maps a 1-based external index to a vec position.
    fn position(&self, index: usize) -> Result<usize, CommandError> {
        if index < 1 || index > self.tasks.len() {
            return Err(CommandError::TaskNumberOutOfRange(index as i64));
        }
        Ok(index - 1)
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes and returns the task at `index`; survivors keep their order
    /// and shift down by one.
    pub fn delete(&mut self, index: usize) -> Result<Task, CommandError> {
        let position = self.position(index)?;
        Ok(self.tasks.remove(position))
    }

    pub fn mark_done(&mut self, index: usize) -> Result<&Task, CommandError> {
        let position = self.position(index)?;
        let task = &mut self.tasks[position];
        task.mark();
        Ok(task)
    }

    pub fn mark_not_done(&mut self, index: usize) -> Result<&Task, CommandError> {
        let position = self.position(index)?;
        let task = &mut self.tasks[position];
        task.unmark();
        Ok(task)
    }

    pub fn get(&self, index: usize) -> Result<&Task, CommandError> {
        let position = self.position(index)?;
        Ok(&self.tasks[position])
    }

    /// Case-insensitive substring search over descriptions, in list order.
    /// An empty result is an empty sequence, not an error.
    pub fn find(&self, term: &str) -> Vec<&Task> {
        let needle = term.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.description().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Detached copy of the sequence, e.g. for persistence. Mutating the
    /// copy never affects the list.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }
}
