use crate::core::{error::Result, quotes::clock_seed, session::Session};
use std::io::{BufRead, Write};

pub fn execute_cheer<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let quote = session.quotes.pick(clock_seed())?;
    session.ui.show_cheer(&quote)
}
