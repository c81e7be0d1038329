//! Template system for consistent output formatting.
//!
//! Every message Buddy prints is a template with `{placeholder}` slots that is
//! filled in a single pass and then colored.
//!
//! # Public API
//! - [`Templates`]: Template definitions for all output messages
//! - [`TemplateContext`]: Context data for template rendering
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Main rendering function with colors
//! - [`render_template_plain`]: Plain text rendering for testing
//! - [`strip_ansi_codes`]: Utility for removing color codes
//!
//! # Placeholders
//! - `{task}`: A task, rendered with [`format_task_colored`]
//! - `{n}`: 1-based position in a listing
//! - `{count}`: Number of tasks in the list
//! - `{date}`: A calendar date
//! - `{message}`: Free text such as an error or a quote

use crate::core::{colors::format_task_colored, task::Task};
use colored::*;

/// Template definitions for all output messages
pub struct Templates {
    pub divider: &'static str,
    pub welcome: &'static str,
    pub goodbye: &'static str,

    pub list_header: &'static str,
    pub list_empty: &'static str,
    pub task_line: &'static str,
    pub task_detail: &'static str,
    pub task_count: &'static str,

    pub added: &'static str,
    pub marked: &'static str,
    pub unmarked: &'static str,
    pub deleted: &'static str,

    pub found_header: &'static str,
    pub found_empty: &'static str,
    pub date_header: &'static str,
    pub date_empty: &'static str,

    pub cheer: &'static str,
    pub error: &'static str,
    pub loading_error: &'static str,
    pub loading_fallback: &'static str,
    pub loading_warning: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    divider: "  ____________________________________________________________",
    welcome: "  Hello! I'm Buddy\n  What can I do for you?",
    goodbye: "  Bye. Hope to see you again soon!",

    list_header: "  Here are the tasks in your list:",
    list_empty: "  Your task list is empty!",
    task_line: "  {n}. {task}",
    task_detail: "    {task}",
    task_count: "  Now you have {count} tasks in the list.",

    added: "  Got it. I've added this task:",
    marked: "  Nice! I've marked this task as done:",
    unmarked: "  OK, I've marked this task as not done yet:",
    deleted: "  Noted. I've removed this task:",

    found_header: "  Here are the matching tasks in your list:",
    found_empty: "  No matching tasks found.",
    date_header: "  Tasks on {date}:",
    date_empty: "  No tasks found on this date.",

    cheer: "  {message}",
    error: "  ✕ {message}",
    loading_error: "  Error loading tasks: {message}",
    loading_fallback: "  Starting with an empty task list.",
    loading_warning: "  Warning: {message}",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub task: Option<&'a Task>,
    pub n: Option<usize>,
    pub count: Option<usize>,
    pub date: Option<&'a str>,
    pub message: Option<&'a str>,
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let estimated_capacity = template.len()
        + context.date.map_or(0, |s| s.len())
        + context.message.map_or(0, |s| s.len())
        + context.task.map_or(0, |t| t.description().len() + 64)
        + 8;

    let mut result = String::with_capacity(estimated_capacity);
    render_template_single_pass(template, context, &mut result);
    apply_colors(result, template)
}

/// Single-pass placeholder substitution
fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    use std::fmt::Write;

    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if !found_closing {
            output.push(ch);
            output.push_str(&placeholder);
            continue;
        }

        match placeholder.as_str() {
            "task" => {
                if let Some(task) = context.task {
                    output.push_str(&format_task_colored(task));
                }
            }
            "n" => {
                if let Some(value) = context.n {
                    let _ = write!(output, "{value}");
                }
            }
            "count" => {
                if let Some(value) = context.count {
                    let _ = write!(output, "{value}");
                }
            }
            "date" => {
                if let Some(value) = context.date {
                    output.push_str(&value.blue().to_string());
                }
            }
            "message" => {
                if let Some(value) = context.message {
                    output.push_str(value);
                }
            }
            _ => {
                // Unknown placeholder, keep as-is
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
            }
        }
    }
}

/// Whole-line coloring for templates that carry a fixed tone
fn apply_colors(text: String, template: &str) -> String {
    if template == TEMPLATES.divider {
        text.bright_black().to_string()
    } else if template == TEMPLATES.error || template == TEMPLATES.loading_error {
        text.red().to_string()
    } else if template == TEMPLATES.loading_warning {
        text.yellow().to_string()
    } else if template == TEMPLATES.added
        || template == TEMPLATES.marked
        || template == TEMPLATES.cheer
    {
        text.green().to_string()
    } else {
        text
    }
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colors for testing
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}
