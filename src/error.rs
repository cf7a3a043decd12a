use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything a single user command can fail with. Each variant carries
/// enough context to render its own message; the session layer turns any of
/// these into one response string and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("The description of a {0} cannot be empty.")]
    EmptyDescription(&'static str),

    #[error("The deadline format is incorrect. Please use: deadline <description> /by <date>")]
    MissingDeadline,

    #[error("The event format is incorrect. Please use: event <description> /from <start> /to <end>")]
    MissingEventTime,

    /// The index parsed as a number but is zero, negative, or past the end
    /// of the current list.
    #[error("Task {0} does not exist in the list.")]
    TaskNumberOutOfRange(i64),

    /// The text after the keyword was empty or not a number at all.
    #[error("\"{0}\" is not a valid task number.")]
    TaskNumberUnparseable(String),

    #[error(
        "Your date and time is entered in the wrong format.\n\
         Enter it in this format: 2/12/2019 1800.\n\
         This corresponds to 2 December 2019, 6pm."
    )]
    BadDateFormat,

    #[error("The search term cannot be empty. Please use: find <keyword>")]
    EmptySearchTerm,

    #[error("I'm not sure what '{0}' means.")]
    UnknownCommand(String),
}

/// Storage failures. Setup (can't create the store) is distinct from I/O on
/// an existing store; malformed records are NOT errors, they surface as
/// per-line warnings during load.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("could not create file {path}: {source}")]
    CreateFile { path: PathBuf, source: io::Error },

    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}
