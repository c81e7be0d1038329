//! Temporary workspaces and binary invocation helpers
//!
//! Every test gets its own directory holding the data file, the quote file
//! and an isolated config directory, so runs never touch the user's files.

#![allow(dead_code)]

use assert_cmd::Command;
use buddy::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory the binary is pointed at. The TempDir must be kept
/// alive for the duration of the test to prevent cleanup.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data_file(&self) -> PathBuf {
        self.path.join("data").join("buddy.txt")
    }

    pub fn cheer_file(&self) -> PathBuf {
        self.path.join("data").join("cheer.txt")
    }

    pub fn config_home(&self) -> PathBuf {
        self.path.join("config")
    }

    /// Current contents of the data file
    pub fn read_data(&self) -> Result<String> {
        Ok(fs::read_to_string(self.data_file())?)
    }

    pub fn write_data(&self, content: &str) -> Result<()> {
        write_file(&self.data_file(), content)
    }

    pub fn write_quotes(&self, content: &str) -> Result<()> {
        write_file(&self.cheer_file(), content)
    }

    /// Write `buddy/config.json` under this workspace's config home
    pub fn write_config(&self, json: &str) -> Result<()> {
        write_file(&self.config_home().join("buddy").join("config.json"), json)
    }

    /// The binary with colors off, config isolated and explicit file locations
    pub fn buddy(&self) -> Result<Command> {
        let mut cmd = self.buddy_without_paths()?;
        cmd.arg("--data-file")
            .arg(self.data_file())
            .arg("--cheer-file")
            .arg(self.cheer_file());
        Ok(cmd)
    }

    /// The binary with colors off and config isolated, file locations left to config
    pub fn buddy_without_paths(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("buddy").map_err(std::io::Error::other)?;
        cmd.current_dir(&self.path)
            .env("NO_COLOR", "1")
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("HOME", &self.path)
            .env_remove("RUST_LOG");
        Ok(cmd)
    }
}

/// Sets up an empty workspace
pub fn setup_workspace() -> Result<TestWorkspace> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    Ok(TestWorkspace { temp_dir, path })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, content)?;
    Ok(())
}
