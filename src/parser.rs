//! Turns one line of raw input into a validated command.
//!
//! Classification is a case-sensitive prefix match against a fixed keyword
//! table. Argument validation happens here, before anything touches the
//! list: a malformed `deadline` never creates a partial task and a bad index
//! never reaches a mutation.

use crate::error::CommandError;
use crate::model::Task;

/// A classified user intent plus its validated payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Bye,
    List,
    Add(Task),
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Find(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Mark,
    Unmark,
    Delete,
    List,
    Todo,
    Deadline,
    Event,
    Bye,
    Find,
}

const KEYWORDS: &[(&str, Keyword)] = &[
    ("mark", Keyword::Mark),
    ("unmark", Keyword::Unmark),
    ("delete", Keyword::Delete),
    ("list", Keyword::List),
    ("todo", Keyword::Todo),
    ("deadline", Keyword::Deadline),
    ("event", Keyword::Event),
    ("bye", Keyword::Bye),
    ("find", Keyword::Find),
];

fn classify(input: &str) -> Option<Keyword> {
    KEYWORDS
        .iter()
        .find(|(word, _)| input.starts_with(word))
        .map(|(_, keyword)| *keyword)
}

/// Parses one raw line. `list_size` is the list size at parse time and
/// bounds the index commands.
pub fn parse(input: &str, list_size: usize) -> Result<Command, CommandError> {
    match classify(input) {
        None => Err(CommandError::UnknownCommand(input.to_string())),
        Some(Keyword::Bye) => Ok(Command::Bye),
        Some(Keyword::List) => Ok(Command::List),
        Some(Keyword::Todo) => parse_todo(input).map(Command::Add),
        Some(Keyword::Deadline) => parse_deadline(input).map(Command::Add),
        Some(Keyword::Event) => parse_event(input).map(Command::Add),
        Some(Keyword::Mark) => parse_index(input, 4, list_size).map(Command::Mark),
        Some(Keyword::Unmark) => parse_index(input, 6, list_size).map(Command::Unmark),
        Some(Keyword::Delete) => parse_index(input, 6, list_size).map(Command::Delete),
        Some(Keyword::Find) => parse_find(input),
    }
}

fn parse_todo(input: &str) -> Result<Task, CommandError> {
    let description = input[4..].trim();
    if description.is_empty() {
        return Err(CommandError::EmptyDescription("todo"));
    }
    Ok(Task::todo(description))
}

fn parse_deadline(input: &str) -> Result<Task, CommandError> {
    let rest = &input[8..];
    if rest.trim().is_empty() {
        return Err(CommandError::EmptyDescription("deadline"));
    }

    // Searched on the untrimmed tail so `deadline /by ...` still reports an
    // empty description rather than a missing marker.
    let sep = rest.find(" /by ").ok_or(CommandError::MissingDeadline)?;

    let description = rest[..sep].trim();
    if description.is_empty() {
        return Err(CommandError::EmptyDescription("deadline"));
    }

    let when = rest[sep + 5..].trim();
    if when.is_empty() {
        return Err(CommandError::MissingDeadline);
    }

    let due = Task::parse_datetime(when).ok_or(CommandError::BadDateFormat)?;
    Ok(Task::deadline(description, due))
}

fn parse_event(input: &str) -> Result<Task, CommandError> {
    let rest = &input[5..];
    if rest.trim().is_empty() {
        return Err(CommandError::EmptyDescription("event"));
    }

    let from_idx = rest.find(" /from ");
    let to_idx = rest.find(" /to ");
    let (from_idx, to_idx) = match (from_idx, to_idx) {
        // Swapped or overlapping markers are rejected even though both are
        // present: `/from` must fully precede `/to`.
        (Some(f), Some(t)) if f + 7 <= t => (f, t),
        _ => return Err(CommandError::MissingEventTime),
    };

    let description = rest[..from_idx].trim();
    if description.is_empty() {
        return Err(CommandError::EmptyDescription("event"));
    }

    let start = rest[from_idx + 7..to_idx].trim();
    let end = rest[to_idx + 5..].trim();
    if start.is_empty() || end.is_empty() {
        return Err(CommandError::MissingEventTime);
    }

    let from = Task::parse_datetime(start).ok_or(CommandError::BadDateFormat)?;
    let to = Task::parse_datetime(end).ok_or(CommandError::BadDateFormat)?;
    // Chronological order of from/to is deliberately not checked.
    Ok(Task::event(description, from, to))
}

fn parse_index(input: &str, prefix_len: usize, list_size: usize) -> Result<usize, CommandError> {
    let rest = input[prefix_len..].trim();
    if rest.is_empty() {
        return Err(CommandError::TaskNumberUnparseable(String::new()));
    }
    let number: i64 = rest
        .parse()
        .map_err(|_| CommandError::TaskNumberUnparseable(rest.to_string()))?;
    if number < 1 || number as usize > list_size {
        return Err(CommandError::TaskNumberOutOfRange(number));
    }
    Ok(number as usize)
}

fn parse_find(input: &str) -> Result<Command, CommandError> {
    let term = input[4..].trim();
    if term.is_empty() {
        return Err(CommandError::EmptySearchTerm);
    }
    Ok(Command::Find(term.to_string()))
}
