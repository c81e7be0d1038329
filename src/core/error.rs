//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`BuddyError`] which covers every failure a Buddy session
//! can run into. It uses `thiserror` for ergonomic error definitions and includes
//! constructors for the variants that carry context.
//!
//! # Public API
//! - [`BuddyError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, BuddyError>`
//!
//! # Error Categories
//! - **Parse errors**: Unknown keyword, malformed arguments, unparsable dates
//! - **Bounds errors**: Task numbers outside the current list
//! - **Storage errors**: Directory, read and write failures, corrupted lines
//! - **Config errors**: Unreadable or malformed config files

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for buddy
#[derive(Error, Debug)]
pub enum BuddyError {
    // Parse errors
    #[error("Unknown command: {keyword}")]
    UnknownCommand { keyword: String },

    #[error("Please provide a task number to {action}.")]
    MissingTaskNumber { action: String },

    #[error("Invalid task number format.")]
    InvalidTaskNumber { input: String },

    #[error("Task number must be positive (got 0)")]
    ZeroTaskNumber,

    #[error("The description of {article} {kind} cannot be empty.")]
    EmptyDescription {
        article: &'static str,
        kind: &'static str,
    },

    #[error("Please provide a keyword to search for.")]
    EmptyKeyword,

    #[error("Please provide a date in d/M/yyyy format.")]
    MissingDate,

    #[error("Invalid deadline format. Please use: deadline <description> /by <date>\nExample: deadline return book /by 2/12/2023 1800")]
    InvalidDeadlineFormat,

    #[error("Invalid event format. Please use: event <description> /from <start> /to <end>\nExample: event project meeting /from 6/8/2023 1400 /to 6/8/2023 1600")]
    InvalidEventFormat,

    #[error("Invalid date format: '{input}'. Please use {expected} format (e.g., {example})")]
    InvalidDate {
        input: String,
        expected: &'static str,
        example: &'static str,
    },

    #[error("An event cannot end before it starts ({from} > {to})")]
    EventEndsBeforeStart { from: String, to: String },

    // Bounds errors
    #[error("Task index out of range: {index} (you have {size} tasks)")]
    IndexOutOfRange { index: usize, size: usize },

    // Storage errors
    #[error("Failed to create data directory '{path}': {source}")]
    StorageDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read data file '{path}': {source}")]
    StorageReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write data file '{path}': {source}")]
    StorageWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Corrupted task data on line {line_number}: {reason}")]
    CorruptedLine { line_number: usize, reason: String },

    // Config errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Cheer errors
    #[error("No motivational quotes found. Please check {path}")]
    NoQuotes { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using BuddyError
pub type Result<T> = std::result::Result<T, BuddyError>;

impl BuddyError {
    /// Create an unknown command error
    pub fn unknown_command(keyword: impl Into<String>) -> Self {
        Self::UnknownCommand {
            keyword: keyword.into(),
        }
    }

    /// Create a missing task number error for a specific action
    pub fn missing_task_number(action: impl Into<String>) -> Self {
        Self::MissingTaskNumber {
            action: action.into(),
        }
    }

    /// Create an invalid task number error
    pub fn invalid_task_number(input: impl Into<String>) -> Self {
        Self::InvalidTaskNumber {
            input: input.into(),
        }
    }

    /// Create an empty description error for a task kind
    pub fn empty_description(kind: &'static str) -> Self {
        let article = match kind.chars().next() {
            Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
            _ => "a",
        };
        Self::EmptyDescription { article, kind }
    }

    /// Create an invalid date error
    pub fn invalid_date(
        input: impl Into<String>,
        expected: &'static str,
        example: &'static str,
    ) -> Self {
        Self::InvalidDate {
            input: input.into(),
            expected,
            example,
        }
    }

    /// Create an event ordering error
    pub fn event_ends_before_start(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::EventEndsBeforeStart {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an index out of range error; `index` is the 1-based number the user typed
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    pub fn storage_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::StorageDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    pub fn storage_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn storage_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a corrupted line error
    pub fn corrupted_line(line_number: usize, reason: impl Into<String>) -> Self {
        Self::CorruptedLine {
            line_number,
            reason: reason.into(),
        }
    }

    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn no_quotes(path: impl Into<PathBuf>) -> Self {
        Self::NoQuotes { path: path.into() }
    }
}
