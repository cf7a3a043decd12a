//! Line-oriented persistence for the task list.
//!
//! One record per line, fields joined by the literal ` | `:
//!
//! ```text
//! T | <0|1> | <description>
//! D | <0|1> | <description> | <d/M/yyyy HHmm>
//! E | <0|1> | <description> | <d/M/yyyy HHmm> | <d/M/yyyy HHmm>
//! ```
//!
//! A malformed line is skipped with a warning and the rest of the file still
//! loads; a single corrupted record must not lose the whole list.

use crate::error::StorageError;
use crate::model::{INPUT_FORMAT, Task, TaskKind};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a load: the tasks that parsed, plus one warning per line that
/// did not.
#[derive(Debug, Default)]
pub struct Loaded {
    pub tasks: Vec<Task>,
    pub warnings: Vec<String>,
}

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Opens the store at `path`, creating the parent directory and an empty
    /// file on first use. An empty store is not an error; failing to create
    /// one is, and is distinct from later read/write failures.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|source| StorageError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        if !path.exists() {
            fs::File::create(&path).map_err(|source| StorageError::CreateFile {
                path: path.clone(),
                source,
            })?;
        }

        Ok(Self { path })
    }

    /// Loads all records. Lines are parsed independently; each malformed one
    /// becomes a warning naming its line number and the load continues.
    pub fn load(&self) -> Result<Loaded, StorageError> {
        let text = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;

        let mut loaded = Loaded::default();
        for (number, line) in text.lines().enumerate() {
            match parse_record(line) {
                Ok(task) => loaded.tasks.push(task),
                Err(reason) => loaded
                    .warnings
                    .push(format!("Skipping line {}: {}", number + 1, reason)),
            }
        }
        Ok(loaded)
    }

    /// Serializes the full snapshot, replacing the file in one pass.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&encode_record(task));
            contents.push('\n');
        }
        Self::atomic_write(&self.path, contents).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Atomic write: write to a .tmp file then rename over the target.
    fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> std::io::Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }
}

fn encode_record(task: &Task) -> String {
    let done = if task.is_done() { "1" } else { "0" };
    let description = task.description();
    match task.kind() {
        TaskKind::Todo => format!("T | {} | {}", done, description),
        TaskKind::Deadline { due } => format!(
            "D | {} | {} | {}",
            done,
            description,
            due.format(INPUT_FORMAT)
        ),
        TaskKind::Event { from, to } => format!(
            "E | {} | {} | {} | {}",
            done,
            description,
            from.format(INPUT_FORMAT),
            to.format(INPUT_FORMAT)
        ),
    }
}

fn parse_record(line: &str) -> Result<Task, String> {
    let parts: Vec<&str> = line.split(" | ").collect();
    if parts.len() < 3 {
        return Err("expected at least 3 fields".to_string());
    }

    // "1" means done; any other value loads as not-done.
    let done = parts[1] == "1";
    let description = parts[2];
    if description.is_empty() {
        return Err("empty description".to_string());
    }

    let mut task = match parts[0] {
        "T" => Task::todo(description),
        "D" => {
            let raw = parts.get(3).ok_or("deadline record is missing its due date")?;
            let due = Task::parse_datetime(raw)
                .ok_or_else(|| format!("bad date-time '{}'", raw))?;
            Task::deadline(description, due)
        }
        "E" => {
            if parts.len() < 5 {
                return Err("event record is missing from/to times".to_string());
            }
            let from = Task::parse_datetime(parts[3])
                .ok_or_else(|| format!("bad date-time '{}'", parts[3]))?;
            let to = Task::parse_datetime(parts[4])
                .ok_or_else(|| format!("bad date-time '{}'", parts[4]))?;
            Task::event(description, from, to)
        }
        other => return Err(format!("unknown task type '{}'", other)),
    };

    if done {
        task.mark();
    }
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_record_round_trips() {
        let mut task = Task::todo("read book");
        task.mark();
        let line = encode_record(&task);
        assert_eq!(line, "T | 1 | read book");
        assert_eq!(parse_record(&line).unwrap(), task);
    }

    #[test]
    fn deadline_record_keeps_wire_date() {
        let due = Task::parse_datetime("2/12/2023 1800").unwrap();
        let task = Task::deadline("report", due);
        let line = encode_record(&task);
        assert_eq!(line, "D | 0 | report | 2/12/2023 1800");
        assert_eq!(parse_record(&line).unwrap(), task);
    }

    #[test]
    fn event_record_keeps_both_times() {
        let from = Task::parse_datetime("10/9/2023 1400").unwrap();
        let to = Task::parse_datetime("10/9/2023 1600").unwrap();
        let task = Task::event("meeting", from, to);
        let line = encode_record(&task);
        assert_eq!(line, "E | 0 | meeting | 10/9/2023 1400 | 10/9/2023 1600");
        assert_eq!(parse_record(&line).unwrap(), task);
    }

    #[test]
    fn malformed_records_are_individually_rejected() {
        assert!(parse_record("").is_err());
        assert!(parse_record("T | 1").is_err());
        assert!(parse_record("X | 0 | mystery").is_err());
        assert!(parse_record("D | 0 | report").is_err());
        assert!(parse_record("D | 0 | report | not a date").is_err());
        assert!(parse_record("E | 0 | meeting | 10/9/2023 1400").is_err());
        assert!(parse_record("T | 1 | ").is_err());
    }

    #[test]
    fn unknown_done_flag_loads_as_not_done() {
        let task = parse_record("T | 2 | odd flag").unwrap();
        assert!(!task.is_done());
    }
}
