use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*};

#[cfg(test)]
mod search_command_tests {
    use super::*;

    #[test]
    fn test_find_matches_substring_ignoring_case() -> anyhow::Result<()> {
        let workspace = create_workspace_with_tasks()?;

        workspace
            .buddy()?
            .write_stdin("find BOOK\nbye\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Here are the matching tasks in your list:",
            ))
            .stdout(assertions::has_task_line(
                1,
                "[D][X] return book (by: Dec 2 2023, 6:00 pm)",
            ))
            .stdout(assertions::has_task_line(
                2,
                "[E][ ] book fair (from: Dec 1 2023, 10:00 am to: Dec 3 2023, 5:00 pm)",
            ))
            .stdout(predicate::str::contains("buy milk").not());

        Ok(())
    }

    #[test]
    fn test_find_without_matches() -> anyhow::Result<()> {
        let workspace = create_workspace_with_tasks()?;

        workspace
            .buddy()?
            .write_stdin("find eggs\nfind\nbye\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("No matching tasks found."))
            .stdout(assertions::has_error("Please provide a keyword to search for."));

        Ok(())
    }

    #[test]
    fn test_date_lists_deadlines_and_events_on_that_day() -> anyhow::Result<()> {
        let workspace = create_workspace_with_tasks()?;

        workspace
            .buddy()?
            .write_stdin("date 2/12/2023\ndate 5/12/2023\nbye\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Tasks on Dec 2 2023:"))
            .stdout(assertions::has_task_line(
                1,
                "[D][X] return book (by: Dec 2 2023, 6:00 pm)",
            ))
            .stdout(predicate::str::contains("Tasks on Dec 5 2023:"))
            .stdout(predicate::str::contains("No tasks found on this date."));

        Ok(())
    }

    #[test]
    fn test_date_rejects_bad_input() -> anyhow::Result<()> {
        let workspace = create_workspace_with_tasks()?;

        workspace
            .buddy()?
            .write_stdin("date tomorrow\ndate\nbye\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Invalid date format: 'tomorrow'"))
            .stdout(assertions::has_error("Please provide a date in d/M/yyyy format."));

        Ok(())
    }

    #[test]
    fn test_cheer_prints_a_quote() -> anyhow::Result<()> {
        let workspace = create_workspace_with_quotes()?;

        workspace
            .buddy()?
            .write_stdin("cheer\nbye\n")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("You are doing great.")
                    .or(predicate::str::contains("One task at a time.")),
            );

        Ok(())
    }

    #[test]
    fn test_cheer_without_quote_file() -> anyhow::Result<()> {
        let workspace = create_workspace_with_tasks()?;

        workspace
            .buddy()?
            .write_stdin("cheer\nbye\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("No motivational quotes found."));

        Ok(())
    }
}
