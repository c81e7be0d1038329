use crate::core::{error::Result, session::Session};
use std::io::{BufRead, Write};

pub fn execute_find<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    keyword: &str,
) -> Result<()> {
    let matches = session.tasks.find(keyword);
    log::debug!("Found {} tasks matching '{keyword}'", matches.len());
    session.ui.show_found_tasks(&matches)
}
