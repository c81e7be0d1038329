//! User-invocable operations.
//!
//! [`Command`] is the closed set of operations a line of input can parse into.
//! [`Command::execute`] is the single dispatch point; each operation family
//! lives in its own module.

pub mod add;
pub mod cheer;
pub mod date;
pub mod delete;
pub mod exit;
pub mod find;
pub mod list;
pub mod mark;

pub use add::*;
pub use cheer::*;
pub use date::*;
pub use delete::*;
pub use exit::*;
pub use find::*;
pub use list::*;
pub use mark::*;

use crate::core::{error::Result, session::Session};
use chrono::NaiveDateTime;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    List,
    /// Zero-based index of the task to mark as done
    Mark(usize),
    /// Zero-based index of the task to mark as not done
    Unmark(usize),
    Todo(String),
    Deadline {
        description: String,
        by: NaiveDateTime,
    },
    Event {
        description: String,
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    /// Zero-based index of the task to remove
    Delete(usize),
    Find(String),
    /// Only the calendar date is used; the time is midnight
    Date(NaiveDateTime),
    Cheer,
}

impl Command {
    pub fn execute<R: BufRead, W: Write>(&self, session: &mut Session<R, W>) -> Result<()> {
        match self {
            Command::Exit => execute_exit(session),
            Command::List => execute_list(session),
            Command::Mark(index) => execute_mark(session, *index),
            Command::Unmark(index) => execute_unmark(session, *index),
            Command::Todo(description) => execute_todo(session, description),
            Command::Deadline { description, by } => execute_deadline(session, description, *by),
            Command::Event {
                description,
                from,
                to,
            } => execute_event(session, description, *from, *to),
            Command::Delete(index) => execute_delete(session, *index),
            Command::Find(keyword) => execute_find(session, keyword),
            Command::Date(date) => execute_date(session, date.date()),
            Command::Cheer => execute_cheer(session),
        }
    }

    /// Whether the session ends after this command
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Whether this command changes the task list and therefore persists it
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Mark(_)
                | Command::Unmark(_)
                | Command::Todo(_)
                | Command::Deadline { .. }
                | Command::Event { .. }
                | Command::Delete(_)
        )
    }
}
