//! Common assertion helpers for test output validation
//!
//! Provides predicates for the lines Buddy prints in response to commands.

#![allow(dead_code)]

use predicates::prelude::*;

pub fn has_welcome() -> impl Predicate<str> {
    predicates::str::contains("Hello! I'm Buddy")
}

pub fn has_goodbye() -> impl Predicate<str> {
    predicates::str::contains("Bye. Hope to see you again soon!")
}

/// A numbered listing line such as `  2. [D][ ] return book`
pub fn has_task_line(n: usize, task: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("  {n}. {task}\n"))
}

pub fn has_task_count(count: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("Now you have {count} tasks in the list."))
}

/// An error line rendered by the session loop
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("✕ {message}"))
}
