use crate::core::{error::Result, session::Session};
use std::io::{BufRead, Write};

pub fn execute_list<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.ui.show_task_list(session.tasks.tasks())
}
