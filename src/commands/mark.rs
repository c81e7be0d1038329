use crate::core::{error::Result, session::Session};
use std::io::{BufRead, Write};

pub fn execute_mark<R: BufRead, W: Write>(session: &mut Session<R, W>, index: usize) -> Result<()> {
    let task = session.mutate(|tasks| tasks.mark_done(index).cloned())?;
    session.ui.show_marked_task(&task)
}

pub fn execute_unmark<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    index: usize,
) -> Result<()> {
    let task = session.mutate(|tasks| tasks.mark_undone(index).cloned())?;
    session.ui.show_unmarked_task(&task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{session_in, take_output};
    use crate::core::error::BuddyError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_mark_then_unmark_persists_each_step() -> Result<()> {
        let dir = TempDir::new()?;
        let mut session = session_in(dir.path(), "")?;
        session.tasks.add_todo("buy milk")?;
        let data_file = session.storage.path().to_path_buf();

        execute_mark(&mut session, 0)?;
        assert!(take_output(&mut session).contains("Nice! I've marked this task as done:\n    [T][X] buy milk"));
        assert_eq!(fs::read_to_string(&data_file)?, "T | 1 | buy milk\n");

        execute_unmark(&mut session, 0)?;
        assert!(take_output(&mut session).contains("OK, I've marked this task as not done yet:\n    [T][ ] buy milk"));
        assert_eq!(fs::read_to_string(&data_file)?, "T | 0 | buy milk\n");
        Ok(())
    }

    #[test]
    fn test_mark_out_of_range_does_not_save() -> Result<()> {
        let dir = TempDir::new()?;
        let mut session = session_in(dir.path(), "")?;
        session.tasks.add_todo("buy milk")?;
        let data_file = session.storage.path().to_path_buf();

        let err = execute_mark(&mut session, 1).unwrap_err();

        assert!(matches!(err, BuddyError::IndexOutOfRange { index: 2, size: 1 }));
        assert_eq!(fs::read_to_string(&data_file)?, "");
        Ok(())
    }
}
