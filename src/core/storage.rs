//! Flat-file persistence for the task list.
//!
//! One task per line, fields joined by ` | `:
//!
//! ```text
//! T | 0 | buy milk
//! D | 1 | return book | 2023-12-02T18:00
//! E | 0 | project meeting | 2023-08-06T14:00 | 2023-08-06T16:00
//! ```
//!
//! Backslashes and pipes inside a description are escaped (`\\`, `\|`), so an
//! unescaped ` | ` only ever appears as a field separator.
//!
//! # Load Policy
//! A line that fails to parse, or is not valid UTF-8, is skipped and reported
//! in [`LoadOutcome::skipped`]; the rest of the file still loads.

use crate::core::{
    datetime::{format_for_storage, parse_stored_date_time},
    error::{BuddyError, Result},
    task::{Task, TaskKind},
};
use std::fs;
use std::path::{Path, PathBuf};

const SEPARATOR: &str = " | ";

/// Tasks read from disk plus the lines that had to be skipped
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub tasks: Vec<Task>,
    pub skipped: Vec<BuddyError>,
}

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every task from the data file, creating an empty file if it is missing
    pub fn load(&self) -> Result<LoadOutcome> {
        self.ensure_directory()?;

        if !self.path.exists() {
            log::debug!(
                "Data file '{}' does not exist, creating it",
                self.path.display()
            );
            fs::write(&self.path, "")
                .map_err(|e| BuddyError::storage_write_failed(&self.path, e))?;
            return Ok(LoadOutcome::default());
        }

        let content =
            fs::read(&self.path).map_err(|e| BuddyError::storage_read_failed(&self.path, e))?;

        let mut outcome = LoadOutcome::default();
        for (i, raw) in content.split(|&byte| byte == b'\n').enumerate() {
            let decoded = std::str::from_utf8(raw)
                .map_err(|_| BuddyError::corrupted_line(i + 1, "invalid UTF-8"))
                .and_then(|line| {
                    let line = line.strip_suffix('\r').unwrap_or(line);
                    if line.trim().is_empty() {
                        Ok(None)
                    } else {
                        decode_line(line, i + 1).map(Some)
                    }
                });
            match decoded {
                Ok(Some(task)) => outcome.tasks.push(task),
                Ok(None) => {}
                Err(err) => {
                    log::warn!("Skipping line in '{}': {err}", self.path.display());
                    outcome.skipped.push(err);
                }
            }
        }

        log::debug!(
            "Loaded {} tasks from '{}' ({} skipped)",
            outcome.tasks.len(),
            self.path.display(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }

    /// Rewrite the whole data file with `tasks`, in order
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        self.ensure_directory()?;

        let mut content = String::with_capacity(tasks.len() * 48);
        for task in tasks {
            content.push_str(&encode_line(task));
            content.push('\n');
        }

        if let Err(e) = fs::write(&self.path, content) {
            log::error!(
                "Failed to write data file '{}': {}",
                self.path.display(),
                e
            );
            return Err(BuddyError::storage_write_failed(&self.path, e));
        }

        log::debug!("Saved {} tasks to '{}'", tasks.len(), self.path.display());
        Ok(())
    }

    fn ensure_directory(&self) -> Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        if dir.as_os_str().is_empty() || dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(dir).map_err(|e| {
            log::error!("Failed to create data directory '{}': {}", dir.display(), e);
            BuddyError::storage_directory_creation_failed(dir, e)
        })
    }
}

/// Serialize one task into its line format
pub fn encode_line(task: &Task) -> String {
    let mut fields = vec![
        task.kind().tag().to_string(),
        if task.is_done() { "1" } else { "0" }.to_string(),
        escape(task.description()),
    ];
    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { by } => fields.push(format_for_storage(by)),
        TaskKind::Event { from, to } => {
            fields.push(format_for_storage(from));
            fields.push(format_for_storage(to));
        }
    }
    fields.join(SEPARATOR)
}

/// Parse one line of the data file back into a task
pub fn decode_line(line: &str, line_number: usize) -> Result<Task> {
    decode_fields(&split_fields(line))
        .map_err(|reason| BuddyError::corrupted_line(line_number, reason))
}

fn decode_fields(fields: &[String]) -> std::result::Result<Task, String> {
    let [tag, done, description, rest @ ..] = fields else {
        return Err(format!("expected at least 3 fields, found {}", fields.len()));
    };

    let done = match done.as_str() {
        "1" => true,
        "0" => false,
        other => return Err(format!("invalid completion flag '{other}'")),
    };

    let built = match (tag.as_str(), rest) {
        ("T", []) => Task::todo(description.as_str()),
        ("D", [by]) => parse_stored_date_time(by)
            .and_then(|by| Task::deadline(description.as_str(), by)),
        ("E", [from, to]) => parse_stored_date_time(from).and_then(|from| {
            parse_stored_date_time(to).and_then(|to| Task::event(description.as_str(), from, to))
        }),
        ("T" | "D" | "E", _) => {
            return Err(format!("wrong number of fields for task type '{tag}'"));
        }
        (other, _) => return Err(format!("unknown task type '{other}'")),
    };

    let mut task = built.map_err(|e| e.to_string())?;
    if done {
        task.mark_done();
    }
    Ok(task)
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('|', "\\|")
}

/// Split on unescaped ` | ` and unescape `\\` and `\|`; any other backslash is literal
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if matches!(chars.peek(), Some('\\' | '|')) => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            ' ' if chars.peek() == Some(&'|') => {
                let mut lookahead = chars.clone();
                lookahead.next();
                if lookahead.peek() == Some(&' ') {
                    chars.next();
                    chars.next();
                    fields.push(std::mem::take(&mut current));
                } else {
                    current.push(ch);
                }
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}
