//! Predefined data files for common scenarios

#![allow(dead_code)]

use super::workspace::*;
use buddy::core::error::Result;

/// One task of each kind, the deadline already done
pub const MIXED_TASKS: &str = "\
T | 0 | buy milk
D | 1 | return book | 2023-12-02T18:00
E | 0 | book fair | 2023-12-01T10:00 | 2023-12-03T17:00
";

pub const QUOTES: &str = "\
You are doing great.
One task at a time.
";

/// Scenario: workspace whose data file already holds [`MIXED_TASKS`]
pub fn create_workspace_with_tasks() -> Result<TestWorkspace> {
    let workspace = setup_workspace()?;
    workspace.write_data(MIXED_TASKS)?;
    Ok(workspace)
}

/// Scenario: workspace with a quote file for `cheer`
pub fn create_workspace_with_quotes() -> Result<TestWorkspace> {
    let workspace = setup_workspace()?;
    workspace.write_quotes(QUOTES)?;
    Ok(workspace)
}
