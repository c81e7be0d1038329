//! Input/output boundary of a Buddy session.
//!
//! [`Ui`] owns the reader it takes commands from and the writer it renders to,
//! so the session never touches process-wide stdin/stdout directly. Every
//! response is framed by divider lines and rendered through [`TEMPLATES`].

use crate::core::{
    datetime::format_date_for_display,
    error::Result,
    task::Task,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

pub struct Ui<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Ui<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Next input line without its line ending, or `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than failing the read.
    pub fn read_command(&mut self) -> Result<Option<String>> {
        let mut buffer = Vec::new();
        if self.reader.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(None);
        }
        let mut input = String::from_utf8_lossy(&buffer).into_owned();
        let trimmed_len = input.trim_end_matches(['\r', '\n']).len();
        input.truncate(trimmed_len);
        Ok(Some(input))
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn show_welcome(&mut self) -> Result<()> {
        self.framed(|ui| ui.line(TEMPLATES.welcome, &TemplateContext::default()))
    }

    pub fn show_goodbye(&mut self) -> Result<()> {
        self.framed(|ui| ui.line(TEMPLATES.goodbye, &TemplateContext::default()))
    }

    pub fn show_error(&mut self, message: &str) -> Result<()> {
        self.framed(|ui| {
            ui.line(
                TEMPLATES.error,
                &TemplateContext {
                    message: Some(message),
                    ..Default::default()
                },
            )
        })
    }

    pub fn show_loading_error(&mut self, message: &str) -> Result<()> {
        self.framed(|ui| {
            ui.line(
                TEMPLATES.loading_error,
                &TemplateContext {
                    message: Some(message),
                    ..Default::default()
                },
            )?;
            ui.line(TEMPLATES.loading_fallback, &TemplateContext::default())
        })
    }

    pub fn show_loading_warnings(&mut self, messages: &[String]) -> Result<()> {
        if messages.is_empty() {
            return Ok(());
        }
        self.framed(|ui| {
            for message in messages {
                ui.line(
                    TEMPLATES.loading_warning,
                    &TemplateContext {
                        message: Some(message),
                        ..Default::default()
                    },
                )?;
            }
            Ok(())
        })
    }

    pub fn show_task_list(&mut self, tasks: &[Task]) -> Result<()> {
        self.framed(|ui| {
            ui.line(TEMPLATES.list_header, &TemplateContext::default())?;
            if tasks.is_empty() {
                return ui.line(TEMPLATES.list_empty, &TemplateContext::default());
            }
            ui.numbered(tasks.iter())
        })
    }

    pub fn show_added_task(&mut self, task: &Task, total: usize) -> Result<()> {
        self.show_task_change(TEMPLATES.added, task, Some(total))
    }

    pub fn show_marked_task(&mut self, task: &Task) -> Result<()> {
        self.show_task_change(TEMPLATES.marked, task, None)
    }

    pub fn show_unmarked_task(&mut self, task: &Task) -> Result<()> {
        self.show_task_change(TEMPLATES.unmarked, task, None)
    }

    pub fn show_deleted_task(&mut self, task: &Task, total: usize) -> Result<()> {
        self.show_task_change(TEMPLATES.deleted, task, Some(total))
    }

    pub fn show_found_tasks(&mut self, tasks: &[&Task]) -> Result<()> {
        self.framed(|ui| {
            if tasks.is_empty() {
                return ui.line(TEMPLATES.found_empty, &TemplateContext::default());
            }
            ui.line(TEMPLATES.found_header, &TemplateContext::default())?;
            ui.numbered(tasks.iter().copied())
        })
    }

    pub fn show_tasks_on_date(&mut self, tasks: &[&Task], date: NaiveDate) -> Result<()> {
        let date = format_date_for_display(&date);
        self.framed(|ui| {
            ui.line(
                TEMPLATES.date_header,
                &TemplateContext {
                    date: Some(&date),
                    ..Default::default()
                },
            )?;
            if tasks.is_empty() {
                return ui.line(TEMPLATES.date_empty, &TemplateContext::default());
            }
            ui.numbered(tasks.iter().copied())
        })
    }

    pub fn show_cheer(&mut self, quote: &str) -> Result<()> {
        self.framed(|ui| {
            ui.line(
                TEMPLATES.cheer,
                &TemplateContext {
                    message: Some(quote),
                    ..Default::default()
                },
            )
        })
    }

    fn show_task_change(&mut self, header: &str, task: &Task, total: Option<usize>) -> Result<()> {
        self.framed(|ui| {
            ui.line(header, &TemplateContext::default())?;
            ui.line(
                TEMPLATES.task_detail,
                &TemplateContext {
                    task: Some(task),
                    ..Default::default()
                },
            )?;
            if let Some(count) = total {
                ui.line(
                    TEMPLATES.task_count,
                    &TemplateContext {
                        count: Some(count),
                        ..Default::default()
                    },
                )?;
            }
            Ok(())
        })
    }

    fn numbered<'t>(&mut self, tasks: impl Iterator<Item = &'t Task>) -> Result<()> {
        for (i, task) in tasks.enumerate() {
            self.line(
                TEMPLATES.task_line,
                &TemplateContext {
                    task: Some(task),
                    n: Some(i + 1),
                    ..Default::default()
                },
            )?;
        }
        Ok(())
    }

    fn framed(&mut self, body: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        self.line(TEMPLATES.divider, &TemplateContext::default())?;
        body(self)?;
        self.line(TEMPLATES.divider, &TemplateContext::default())?;
        self.writer.flush()?;
        Ok(())
    }

    fn line(&mut self, template: &str, context: &TemplateContext) -> Result<()> {
        writeln!(self.writer, "{}", render_template(template, context))?;
        Ok(())
    }
}
