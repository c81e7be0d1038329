use crate::core::{error::Result, session::Session};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

pub fn execute_date<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    date: NaiveDate,
) -> Result<()> {
    let matches = session.tasks.on_date(date);
    session.ui.show_tasks_on_date(&matches, date)
}
