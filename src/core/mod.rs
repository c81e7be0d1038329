//! Core functionality for Buddy.
//!
//! This module provides the task model, command parsing, persistence,
//! configuration and the terminal UI that the commands are built from.

pub mod colors;
pub mod config;
pub mod datetime;
pub mod dirs;
pub mod error;
pub mod parser;
pub mod quotes;
pub mod session;
pub mod storage;
pub mod task;
pub mod task_list;
pub mod templates;
pub mod ui;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{BuddyError, Result};

// === Task model ===
// A single task and the ordered list the session works on
pub use task::{Task, TaskKind};
pub use task_list::TaskList;

// === Input parsing ===
// Turns one line of user input into a `Command`
pub use parser::CommandParser;

// === Persistence ===
// Flat-file storage for tasks and the quote file used by `cheer`
pub use quotes::QuoteBook;
pub use storage::{LoadOutcome, Storage};

// === Configuration ===
pub use config::BuddyConfig;

// === Session ===
// The read-parse-execute loop and its terminal boundary
pub use session::Session;
pub use ui::Ui;

// === UI templates ===
// Template system for consistent output formatting with colors
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};

// === Color system ===
// One color per task kind, shared by every listing
pub use colors::{format_task_colored, get_kind_color_style};
