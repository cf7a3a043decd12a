//! The command-handling boundary: one raw line in, one response out.
//!
//! Parse and index failures are recovered here and become the response for
//! that command. Storage failures degrade gracefully: a setup failure
//! disables persistence for the session, a write failure is reported and the
//! in-memory list stays authoritative. Nothing short of `bye` ends the
//! session.

use crate::list::TaskList;
use crate::parser::{self, Command};
use crate::storage::Storage;
use crate::ui;
use std::path::Path;

/// One response: the message body plus the exit flag the front-end loop
/// checks after `bye`.
#[derive(Debug)]
pub struct Reply {
    pub message: String,
    pub exit: bool,
}

impl Reply {
    fn message(message: String) -> Self {
        Self {
            message,
            exit: false,
        }
    }
}

pub struct Session {
    list: TaskList,
    storage: Option<Storage>,
}

impl Session {
    /// Opens the store at `path` and loads any prior tasks. Returns the
    /// session plus startup notices (setup/read failures, per-line warnings,
    /// the loaded-count report) for the front end to display.
    pub fn open(path: &Path) -> (Self, Vec<String>) {
        let mut notices = Vec::new();
        let mut list = TaskList::new();

        let storage = match Storage::new(path) {
            Ok(storage) => {
                match storage.load() {
                    Ok(loaded) => {
                        notices.extend(loaded.warnings);
                        list = TaskList::from_tasks(loaded.tasks);
                        notices.push(ui::tasks_loaded(list.len()));
                    }
                    Err(e) => notices.push(format!("Could not load tasks: {}", e)),
                }
                Some(storage)
            }
            Err(e) => {
                notices.push(format!(
                    "Storage setup failed: {}\nWill continue without saving tasks.",
                    e
                ));
                None
            }
        };

        (Self { list, storage }, notices)
    }

    /// Session with persistence disabled; also what a failed setup leaves
    /// behind.
    pub fn in_memory() -> Self {
        Self {
            list: TaskList::new(),
            storage: None,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.list
    }

    /// Handles one raw input line and composes the response.
    pub fn handle(&mut self, input: &str) -> Reply {
        let command = match parser::parse(input, self.list.len()) {
            Ok(command) => command,
            Err(e) => return Reply::message(e.to_string()),
        };

        match command {
            Command::Bye => Reply {
                message: ui::goodbye(),
                exit: true,
            },
            Command::List => Reply::message(ui::task_list(&self.list.snapshot())),
            Command::Add(task) => {
                let message = ui::task_added(&task, self.list.len() + 1);
                self.list.add(task);
                self.finish(message)
            }
            Command::Mark(index) => match self.list.mark_done(index) {
                Ok(task) => {
                    let message = ui::task_marked(task);
                    self.finish(message)
                }
                Err(e) => Reply::message(e.to_string()),
            },
            Command::Unmark(index) => match self.list.mark_not_done(index) {
                Ok(task) => {
                    let message = ui::task_unmarked(task);
                    self.finish(message)
                }
                Err(e) => Reply::message(e.to_string()),
            },
            Command::Delete(index) => match self.list.delete(index) {
                Ok(task) => {
                    let message = ui::task_deleted(&task, self.list.len());
                    self.finish(message)
                }
                Err(e) => Reply::message(e.to_string()),
            },
            Command::Find(term) => {
                let matches = self.list.find(&term);
                Reply::message(ui::search_results(&matches, &term))
            }
        }
    }

    /// Persists after a successful mutation, appending any write failure to
    /// the response instead of losing the in-memory change.
    fn finish(&mut self, mut message: String) -> Reply {
        if let Some(warning) = self.persist() {
            message.push('\n');
            message.push_str(&warning);
        }
        Reply::message(message)
    }

    fn persist(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.save(&self.list.snapshot()) {
            Ok(()) => None,
            Err(e) => Some(format!("Error saving tasks: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_become_responses_not_failures() {
        let mut session = Session::in_memory();
        let reply = session.handle("blah");
        assert_eq!(reply.message, "I'm not sure what 'blah' means.");
        assert!(!reply.exit);
    }

    #[test]
    fn bye_sets_the_exit_flag() {
        let mut session = Session::in_memory();
        let reply = session.handle("bye");
        assert_eq!(reply.message, "Bye. Hope to see you again soon!");
        assert!(reply.exit);
    }

    #[test]
    fn add_works_without_persistence() {
        let mut session = Session::in_memory();
        let reply = session.handle("todo read book");
        assert_eq!(
            reply.message,
            "Got it. I've added this task:\n  [T][ ] read book\nNow you have 1 task in the list."
        );
        assert_eq!(session.tasks().len(), 1);
    }
}
