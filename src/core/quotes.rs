//! Motivational quotes for the `cheer` command.

use crate::core::error::{BuddyError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct QuoteBook {
    path: PathBuf,
}

impl QuoteBook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every non-blank line of the quote file, trimmed.
    ///
    /// A missing file yields no quotes; its directory is created so the user
    /// can drop one in.
    pub fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            if let Some(dir) = self.path.parent() {
                if !dir.as_os_str().is_empty() && !dir.exists() {
                    fs::create_dir_all(dir)
                        .map_err(|e| BuddyError::storage_directory_creation_failed(dir, e))?;
                }
            }
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| BuddyError::storage_read_failed(&self.path, e))?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Pick one quote using `seed`, failing when the file has none
    pub fn pick(&self, seed: usize) -> Result<String> {
        let mut quotes = self.load()?;
        if quotes.is_empty() {
            return Err(BuddyError::no_quotes(&self.path));
        }
        let index = seed % quotes.len();
        Ok(quotes.swap_remove(index))
    }
}

/// Seed derived from the wall clock, good enough to vary the quote between calls
pub fn clock_seed() -> usize {
    chrono::Local::now().timestamp_subsec_nanos() as usize
}
