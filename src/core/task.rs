//! Task entities: todos, deadlines and events.
//!
//! A [`Task`] carries the attributes every task shares (description and
//! completion flag) and a [`TaskKind`] holding the variant-specific timestamps.
//! Rendering, date matching and persistence all dispatch on `TaskKind` with a
//! single exhaustive `match`.
//!
//! # Invariants
//! - The description is non-empty after trimming.
//! - An event never ends before it starts.
//! - New tasks start out not done.

use crate::core::{
    datetime::format_for_display,
    error::{BuddyError, Result},
};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Variant-specific data of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain todo (T)
    Todo,
    /// Task due by a point in time (D)
    Deadline { by: NaiveDateTime },
    /// Task spanning a period (E)
    Event {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

impl TaskKind {
    /// One-letter tag used both on screen and in the data file
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::Todo => "todo",
            TaskKind::Deadline { .. } => "deadline",
            TaskKind::Event { .. } => "event",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Result<Self> {
        Self::new(description.into(), TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Result<Self> {
        Self::new(description.into(), TaskKind::Deadline { by })
    }

    pub fn event(
        description: impl Into<String>,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Self> {
        if from > to {
            return Err(BuddyError::event_ends_before_start(
                format_for_display(&from),
                format_for_display(&to),
            ));
        }
        Self::new(description.into(), TaskKind::Event { from, to })
    }

    fn new(description: String, kind: TaskKind) -> Result<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(BuddyError::empty_description(kind.name()));
        }
        Ok(Self {
            description: description.to_string(),
            done: false,
            kind,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// `[X]` when done, `[ ]` otherwise
    pub fn status_icon(&self) -> &'static str {
        if self.done {
            "[X]"
        } else {
            "[ ]"
        }
    }

    /// Case-insensitive substring match against the description
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }

    /// Whether the task falls on the given calendar date.
    ///
    /// Deadlines match on their due date. Events match on their first day,
    /// their last day, and every day in between. Todos never match.
    pub fn is_on_date(&self, date: NaiveDate) -> bool {
        match self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { by } => by.date() == date,
            TaskKind::Event { from, to } => from.date() <= date && date <= to.date(),
        }
    }

    /// Trailing schedule text, e.g. ` (by: Dec 2 2023, 6:00 pm)`
    pub fn schedule_suffix(&self) -> String {
        match self.kind {
            TaskKind::Todo => String::new(),
            TaskKind::Deadline { by } => format!(" (by: {})", format_for_display(&by)),
            TaskKind::Event { from, to } => format!(
                " (from: {} to: {})",
                format_for_display(&from),
                format_for_display(&to)
            ),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]{} {}{}",
            self.kind.tag(),
            self.status_icon(),
            self.description,
            self.schedule_suffix()
        )
    }
}
