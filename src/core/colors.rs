//! Unified color system for task rendering.
//!
//! Every place that shows a task goes through these helpers so the same task
//! kind always gets the same color.
//!
//! # Public API
//! - [`get_kind_color_style`]: Get color function for a task kind
//! - [`get_colored_status_icon`]: Colored `[X]` / `[ ]`
//! - [`format_task_colored`]: Complete colored task line
//!
//! # Color Scheme
//! - **Todo**: Cyan tag
//! - **Deadline**: Yellow tag
//! - **Event**: Magenta tag
//! - **Done**: Green check, pending tasks get a muted box
//! - **Schedule**: Muted `(by: ...)` / `(from: ... to: ...)` suffix

use crate::core::task::{Task, TaskKind};
use colored::*;

/// Single function to apply color styling based on task kind
pub fn get_kind_color_style(kind: &TaskKind) -> Box<dyn Fn(&str) -> ColoredString> {
    match kind {
        TaskKind::Todo => Box::new(|text: &str| text.cyan()),
        TaskKind::Deadline { .. } => Box::new(|text: &str| text.yellow()),
        TaskKind::Event { .. } => Box::new(|text: &str| text.magenta()),
    }
}

/// Colored `[T]` / `[D]` / `[E]` tag
pub fn get_colored_tag(kind: &TaskKind) -> ColoredString {
    let color_fn = get_kind_color_style(kind);
    color_fn(&format!("[{}]", kind.tag()))
}

pub fn get_colored_status_icon(task: &Task) -> ColoredString {
    if task.is_done() {
        task.status_icon().green()
    } else {
        task.status_icon().bright_black()
    }
}

/// Colored rendering of a task; identical to its `Display` once ANSI codes are stripped
pub fn format_task_colored(task: &Task) -> String {
    let description = if task.is_done() {
        task.description().bright_black()
    } else {
        task.description().white()
    };
    format!(
        "{}{} {}{}",
        get_colored_tag(task.kind()),
        get_colored_status_icon(task),
        description,
        task.schedule_suffix().bright_black()
    )
}
