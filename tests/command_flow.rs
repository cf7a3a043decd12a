use std::fs;
use taskpal::session::Session;
use tempfile::TempDir;

fn open(dir: &TempDir) -> (Session, Vec<String>) {
    Session::open(&dir.path().join("tasks.txt"))
}

#[test]
fn end_to_end_scenario() {
    let dir = TempDir::new().unwrap();
    let (mut session, notices) = open(&dir);
    assert!(notices.iter().any(|n| n == "[I have loaded 0 tasks]"));

    let reply = session.handle("todo read book");
    assert_eq!(
        reply.message,
        "Got it. I've added this task:\n  [T][ ] read book\nNow you have 1 task in the list."
    );

    let reply = session.handle("deadline report /by 2/12/2023 1800");
    assert_eq!(
        reply.message,
        "Got it. I've added this task:\n  [D][ ] report (by: 2 December 2023, 6:00PM)\n\
         Now you have 2 tasks in the list."
    );

    let reply = session.handle("list");
    assert_eq!(
        reply.message,
        "Here are the tasks in your list:\n\
         1. [T][ ] read book\n\
         2. [D][ ] report (by: 2 December 2023, 6:00PM)"
    );

    let reply = session.handle("mark 1");
    assert_eq!(
        reply.message,
        "Nice! I've marked this task as done:\n  [T][X] read book"
    );

    let reply = session.handle("delete 2");
    assert_eq!(
        reply.message,
        "Noted. I've removed this task:\n  [D][ ] report (by: 2 December 2023, 6:00PM)\n\
         Now you have 1 task in the list."
    );
    assert_eq!(session.tasks().len(), 1);

    let reply = session.handle("bye");
    assert!(reply.exit);
}

#[test]
fn invalid_task_numbers_get_tailored_messages() {
    let dir = TempDir::new().unwrap();
    let (mut session, _) = open(&dir);
    for task in ["todo a", "todo b", "todo c"] {
        session.handle(task);
    }

    assert_eq!(
        session.handle("mark 0").message,
        "Task 0 does not exist in the list."
    );
    assert_eq!(
        session.handle("mark -1").message,
        "Task -1 does not exist in the list."
    );
    assert_eq!(
        session.handle("mark 999").message,
        "Task 999 does not exist in the list."
    );
    assert_eq!(
        session.handle("mark").message,
        "\"\" is not a valid task number."
    );
    assert_eq!(
        session.handle("mark two").message,
        "\"two\" is not a valid task number."
    );
    // None of those touched the list
    assert!(!session.tasks().get(1).unwrap().is_done());
}

#[test]
fn unmark_restores_the_rendering() {
    let dir = TempDir::new().unwrap();
    let (mut session, _) = open(&dir);
    session.handle("todo read book");
    session.handle("mark 1");

    let reply = session.handle("unmark 1");
    assert_eq!(
        reply.message,
        "OK, I've marked this task as not done yet:\n  [T][ ] read book"
    );
}

#[test]
fn find_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let (mut session, _) = open(&dir);
    session.handle("todo Read Book");
    session.handle("todo buy milk");

    let reply = session.handle("find BOOK");
    assert_eq!(
        reply.message,
        "Here are the matching tasks in your list:\n1. [T][ ] Read Book"
    );

    let reply = session.handle("find zebra");
    assert_eq!(reply.message, "No matching tasks found for: \"zebra\"");

    let reply = session.handle("find ");
    assert_eq!(
        reply.message,
        "The search term cannot be empty. Please use: find <keyword>"
    );
}

#[test]
fn tasks_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let (mut session, _) = open(&dir);
        session.handle("todo water plants");
        session.handle("event retro /from 10/9/2023 1400 /to 10/9/2023 1600");
        session.handle("mark 1");
    }

    let (mut session, notices) = open(&dir);
    assert!(notices.iter().any(|n| n == "[I have loaded 2 tasks]"));
    assert_eq!(
        session.handle("list").message,
        "Here are the tasks in your list:\n\
         1. [T][X] water plants\n\
         2. [E][ ] retro (from: 10 September 2023, 2:00PM to: 10 September 2023, 4:00PM)"
    );
}

#[test]
fn corrupt_line_does_not_block_startup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.txt");
    fs::write(&path, "T | 0 | keep me\ncorrupt nonsense\n").unwrap();

    let (session, notices) = Session::open(&path);
    assert_eq!(session.tasks().len(), 1);
    assert!(notices.iter().any(|n| n.contains("Skipping line 2")));
    assert!(notices.iter().any(|n| n == "[I have loaded 1 task]"));
}

#[test]
fn parse_failures_never_create_partial_tasks() {
    let dir = TempDir::new().unwrap();
    let (mut session, _) = open(&dir);

    session.handle("deadline report");
    session.handle("deadline report /by next tuesday");
    session.handle("event x /to 1/1/2024 1000 /from 1/1/2024 0900");
    assert!(session.tasks().is_empty());

    assert_eq!(
        session.handle("deadline report /by next tuesday").message,
        "Your date and time is entered in the wrong format.\n\
         Enter it in this format: 2/12/2019 1800.\n\
         This corresponds to 2 December 2019, 6pm."
    );
}
