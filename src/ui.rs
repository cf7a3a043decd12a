//! Response-string composition. Message bodies only; whatever front end is
//! running owns framing and echoing.

use crate::model::Task;
use std::fmt::Write;

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

pub fn welcome() -> String {
    "Hello! I'm Taskpal\nWhat can I do for you?".to_string()
}

pub fn goodbye() -> String {
    "Bye. Hope to see you again soon!".to_string()
}

pub fn task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "You have no tasks in your list.".to_string();
    }
    let mut out = String::from("Here are the tasks in your list:");
    for (i, task) in tasks.iter().enumerate() {
        let _ = write!(out, "\n{}. {}", i + 1, task);
    }
    out
}

pub fn task_added(task: &Task, count: usize) -> String {
    format!(
        "Got it. I've added this task:\n  {}\nNow you have {} task{} in the list.",
        task,
        count,
        plural(count)
    )
}

pub fn task_deleted(task: &Task, count: usize) -> String {
    format!(
        "Noted. I've removed this task:\n  {}\nNow you have {} task{} in the list.",
        task,
        count,
        plural(count)
    )
}

pub fn task_marked(task: &Task) -> String {
    format!("Nice! I've marked this task as done:\n  {}", task)
}

pub fn task_unmarked(task: &Task) -> String {
    format!("OK, I've marked this task as not done yet:\n  {}", task)
}

pub fn tasks_loaded(count: usize) -> String {
    format!("[I have loaded {} task{}]", count, plural(count))
}

pub fn search_results(matches: &[&Task], term: &str) -> String {
    if matches.is_empty() {
        return format!("No matching tasks found for: \"{}\"", term);
    }
    let mut out = String::from("Here are the matching tasks in your list:");
    for (i, task) in matches.iter().enumerate() {
        let _ = write!(out, "\n{}. {}", i + 1, task);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_pluralized() {
        let task = Task::todo("read book");
        assert!(task_added(&task, 1).ends_with("Now you have 1 task in the list."));
        assert!(task_deleted(&task, 2).ends_with("Now you have 2 tasks in the list."));
    }

    #[test]
    fn listing_numbers_from_one() {
        let tasks = vec![Task::todo("a"), Task::todo("b")];
        assert_eq!(
            task_list(&tasks),
            "Here are the tasks in your list:\n1. [T][ ] a\n2. [T][ ] b"
        );
    }

    #[test]
    fn empty_listing_has_its_own_notice() {
        assert_eq!(task_list(&[]), "You have no tasks in your list.");
    }
}
