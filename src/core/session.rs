//! The read-parse-execute loop of one Buddy session.
//!
//! A [`Session`] bundles the in-memory [`TaskList`] with its collaborators:
//! the [`Ui`], the [`Storage`] the list is persisted to, and the [`QuoteBook`]
//! used by `cheer`. It lives for the whole process.
//!
//! # Error Handling
//! - Parse and bounds errors are shown to the user and the loop continues.
//! - A failed load at startup is reported and the session starts empty.
//! - A failed save rolls the list back to its state before the command.

use crate::core::{
    error::Result,
    parser::CommandParser,
    quotes::QuoteBook,
    storage::Storage,
    task_list::TaskList,
    ui::Ui,
};
use std::io::{BufRead, Write};

pub struct Session<R: BufRead, W: Write> {
    pub tasks: TaskList,
    pub ui: Ui<R, W>,
    pub storage: Storage,
    pub quotes: QuoteBook,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Greet the user and load the persisted task list
    pub fn start(mut ui: Ui<R, W>, storage: Storage, quotes: QuoteBook) -> Result<Self> {
        ui.show_welcome()?;

        let tasks = match storage.load() {
            Ok(outcome) => {
                let warnings: Vec<String> =
                    outcome.skipped.iter().map(ToString::to_string).collect();
                ui.show_loading_warnings(&warnings)?;
                TaskList::from_tasks(outcome.tasks)
            }
            Err(e) => {
                log::warn!("Starting with an empty task list: {e}");
                ui.show_loading_error(&e.to_string())?;
                TaskList::new()
            }
        };

        Ok(Self {
            tasks,
            ui,
            storage,
            quotes,
        })
    }

    /// Process input lines until `bye` or end of input
    pub fn run(&mut self) -> Result<()> {
        while let Some(line) = self.ui.read_command()? {
            if line.trim().is_empty() {
                continue;
            }

            match self.handle(&line) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => {
                    log::debug!("Command '{line}' failed: {e}");
                    self.ui.show_error(&e.to_string())?;
                }
            }
        }
        log::debug!("Session ended with {} tasks", self.tasks.len());
        Ok(())
    }

    /// Parse and execute one line; `Ok(true)` means the session should end
    pub fn handle(&mut self, line: &str) -> Result<bool> {
        let command = CommandParser::parse(line)?;
        command.execute(self)?;
        if command.is_mutating() {
            log::debug!("Persisted {} tasks after '{line}'", self.tasks.len());
        }
        Ok(command.is_exit())
    }

    /// Persist the current list, restoring `snapshot` if the write fails
    pub fn persist_or_rollback(&mut self, snapshot: TaskList) -> Result<()> {
        if let Err(e) = self.storage.save(self.tasks.tasks()) {
            log::warn!("Save failed, rolling back the last change: {e}");
            self.tasks = snapshot;
            return Err(e);
        }
        Ok(())
    }

    /// Run `mutation` against the list and persist the result as one unit
    pub fn mutate<T>(&mut self, mutation: impl FnOnce(&mut TaskList) -> Result<T>) -> Result<T> {
        let snapshot = self.tasks.clone();
        let value = mutation(&mut self.tasks)?;
        self.persist_or_rollback(snapshot)?;
        Ok(value)
    }
}
