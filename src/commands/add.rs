use crate::core::{error::Result, session::Session};
use chrono::NaiveDateTime;
use std::io::{BufRead, Write};

pub fn execute_todo<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    description: &str,
) -> Result<()> {
    let task = session.mutate(|tasks| tasks.add_todo(description).cloned())?;
    session.ui.show_added_task(&task, session.tasks.len())
}

pub fn execute_deadline<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    description: &str,
    by: NaiveDateTime,
) -> Result<()> {
    let task = session.mutate(|tasks| tasks.add_deadline(description, by).cloned())?;
    session.ui.show_added_task(&task, session.tasks.len())
}

pub fn execute_event<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    description: &str,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Result<()> {
    let task = session.mutate(|tasks| tasks.add_event(description, from, to).cloned())?;
    session.ui.show_added_task(&task, session.tasks.len())
}
