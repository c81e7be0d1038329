use crate::core::{error::Result, session::Session};
use std::io::{BufRead, Write};

pub fn execute_delete<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    index: usize,
) -> Result<()> {
    let task = session.mutate(|tasks| tasks.delete(index))?;
    session.ui.show_deleted_task(&task, session.tasks.len())
}
