//! Buddy - a chat-style command-line task tracker.
//!
//! Users type one command per line (`todo`, `deadline`, `event`, `list`,
//! `mark`, `find`, ...) and Buddy keeps the resulting task list in a plain
//! text file between runs.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The task model and task list
//! - Command parsing
//! - Flat-file storage and configuration
//! - The interactive session and its UI templates

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use commands::Command;
pub use core::{
    // Error handling
    BuddyError,
    Result,

    // Task model
    Task,
    TaskKind,
    TaskList,

    // Parsing and persistence
    CommandParser,
    LoadOutcome,
    QuoteBook,
    Storage,
    BuddyConfig,

    // Session
    Session,
    Ui,

    // UI and formatting
    render_template,
    render_template_plain,
    strip_ansi_codes,
    TemplateContext,
    Templates,
    TEMPLATES,
};
