use chrono::NaiveDateTime;
use std::fmt;

/// Wire format for date-times, both in commands and in the store file.
/// No-pad day/month, 24-hour clock: `2/12/2019 1800`.
pub const INPUT_FORMAT: &str = "%-d/%-m/%Y %H%M";

/// Human-readable format used only for rendering: `2 December 2019, 6:00PM`.
pub const DISPLAY_FORMAT: &str = "%-d %B %Y, %-I:%M%p";

/// The closed set of task shapes. Serialization and rendering dispatch on
/// this enum; there is no "unknown" variant to defend against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { due: NaiveDateTime },
    Event { from: NaiveDateTime, to: NaiveDateTime },
}

/// One trackable item. Constructors take whatever they are given: the
/// parser and the storage codec validate descriptions and dates *before*
/// construction, so a Task also accepts already-validated data during load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    completed: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            completed: false,
            kind: TaskKind::Deadline { due },
        }
    }

    /// No ordering between `from` and `to` is enforced, intentionally.
    pub fn event(description: impl Into<String>, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            completed: false,
            kind: TaskKind::Event { from, to },
        }
    }

    /// Parses a date-time in the wire format. Returns None on any mismatch;
    /// callers decide whether that is a bad command or a malformed record.
    pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(text.trim(), INPUT_FORMAT).ok()
    }

    pub fn mark(&mut self) {
        self.completed = true;
    }

    pub fn unmark(&mut self) {
        self.completed = false;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.completed
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Due date in the wire format, for Deadline tasks.
    pub fn due_date(&self) -> Option<String> {
        match &self.kind {
            TaskKind::Deadline { due } => Some(due.format(INPUT_FORMAT).to_string()),
            _ => None,
        }
    }

    /// Start time in the wire format, for Event tasks.
    pub fn start_time(&self) -> Option<String> {
        match &self.kind {
            TaskKind::Event { from, .. } => Some(from.format(INPUT_FORMAT).to_string()),
            _ => None,
        }
    }

    /// End time in the wire format, for Event tasks.
    pub fn end_time(&self) -> Option<String> {
        match &self.kind {
            TaskKind::Event { to, .. } => Some(to.format(INPUT_FORMAT).to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        };
        let done = if self.completed { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", tag, done, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", due.format(DISPLAY_FORMAT)),
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                from.format(DISPLAY_FORMAT),
                to.format(DISPLAY_FORMAT)
            ),
        }
    }
}
