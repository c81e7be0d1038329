//! Parsing of one line of user input into a [`Command`].
//!
//! The first whitespace-delimited token is the keyword (case-insensitive), the
//! rest of the line is the argument string.
//!
//! # Supported Forms
//! - `bye`, `list`, `cheer`
//! - `mark <n>`, `unmark <n>`, `delete <n>` (1-based task numbers)
//! - `todo <description>`, `find <keyword>`, `date <d/M/yyyy>`
//! - `deadline <description> /by <d/M/yyyy HHmm>`
//! - `event <description> /from <d/M/yyyy HHmm> /to <d/M/yyyy HHmm>`

use crate::commands::Command;
use crate::core::{
    datetime::{format_for_display, parse_user_date, parse_user_date_time},
    error::{BuddyError, Result},
};
use once_cell::sync::Lazy;
use regex::Regex;

static EVENT_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" /from | /to ").expect("event separator pattern is valid"));

const DEADLINE_SEPARATOR: &str = " /by ";

pub struct CommandParser;

impl CommandParser {
    pub fn parse(input: &str) -> Result<Command> {
        let input = input.trim();
        let (keyword, arguments) = match input.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (input, ""),
        };
        let keyword = keyword.to_lowercase();
        log::debug!("Parsing command keyword '{keyword}' with arguments '{arguments}'");

        match keyword.as_str() {
            "bye" => Ok(Command::Exit),
            "list" => Ok(Command::List),
            "cheer" => Ok(Command::Cheer),
            "mark" => Ok(Command::Mark(Self::parse_task_number(arguments, "mark")?)),
            "unmark" => Ok(Command::Unmark(Self::parse_task_number(
                arguments, "unmark",
            )?)),
            "delete" => Ok(Command::Delete(Self::parse_task_number(
                arguments, "delete",
            )?)),
            "todo" => {
                if arguments.is_empty() {
                    return Err(BuddyError::empty_description("todo"));
                }
                Ok(Command::Todo(arguments.to_string()))
            }
            "find" => {
                if arguments.is_empty() {
                    return Err(BuddyError::EmptyKeyword);
                }
                Ok(Command::Find(arguments.to_string()))
            }
            "date" => {
                if arguments.is_empty() {
                    return Err(BuddyError::MissingDate);
                }
                Ok(Command::Date(parse_user_date(arguments)?))
            }
            "deadline" => Self::parse_deadline(arguments),
            "event" => Self::parse_event(arguments),
            _ => Err(BuddyError::unknown_command(keyword)),
        }
    }

    /// Parse a 1-based task number into a zero-based index
    pub fn parse_task_number(arguments: &str, action: &str) -> Result<usize> {
        if arguments.is_empty() {
            return Err(BuddyError::missing_task_number(action));
        }
        let number: usize = arguments
            .parse()
            .map_err(|_| BuddyError::invalid_task_number(arguments))?;
        if number == 0 {
            return Err(BuddyError::ZeroTaskNumber);
        }
        Ok(number - 1)
    }

    fn parse_deadline(arguments: &str) -> Result<Command> {
        if arguments.is_empty() {
            return Err(BuddyError::empty_description("deadline"));
        }

        let parts: Vec<&str> = arguments.split(DEADLINE_SEPARATOR).collect();
        let [description, by] = parts.as_slice() else {
            return Err(BuddyError::InvalidDeadlineFormat);
        };

        let description = description.trim();
        if description.is_empty() {
            return Err(BuddyError::empty_description("deadline"));
        }

        Ok(Command::Deadline {
            description: description.to_string(),
            by: parse_user_date_time(by)?,
        })
    }

    fn parse_event(arguments: &str) -> Result<Command> {
        if arguments.is_empty() {
            return Err(BuddyError::empty_description("event"));
        }

        let parts: Vec<&str> = EVENT_SEPARATOR.split(arguments).collect();
        let [description, from, to] = parts.as_slice() else {
            return Err(BuddyError::InvalidEventFormat);
        };

        let description = description.trim();
        if description.is_empty() {
            return Err(BuddyError::empty_description("event"));
        }

        let from = parse_user_date_time(from)?;
        let to = parse_user_date_time(to)?;
        if from > to {
            return Err(BuddyError::event_ends_before_start(
                format_for_display(&from),
                format_for_display(&to),
            ));
        }

        Ok(Command::Event {
            description: description.to_string(),
            from,
            to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .expect("valid test date")
    }

    #[test]
    fn test_parse_simple_keywords() -> Result<()> {
        assert_eq!(CommandParser::parse("bye")?, Command::Exit);
        assert_eq!(CommandParser::parse("list")?, Command::List);
        assert_eq!(CommandParser::parse("cheer")?, Command::Cheer);
        Ok(())
    }

    #[test]
    fn test_keyword_is_case_insensitive() -> Result<()> {
        assert_eq!(CommandParser::parse("BYE")?, Command::Exit);
        assert_eq!(CommandParser::parse("LiSt")?, Command::List);
        assert_eq!(
            CommandParser::parse("TODO Read a book")?,
            Command::Todo("Read a book".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_parse_index_commands_are_zero_based() -> Result<()> {
        assert_eq!(CommandParser::parse("mark 1")?, Command::Mark(0));
        assert_eq!(CommandParser::parse("unmark 3")?, Command::Unmark(2));
        assert_eq!(CommandParser::parse("delete  12 ")?, Command::Delete(11));
        Ok(())
    }

    #[test]
    fn test_parse_index_missing() {
        let err = CommandParser::parse("mark").unwrap_err();
        assert_eq!(err.to_string(), "Please provide a task number to mark.");
        let err = CommandParser::parse("delete   ").unwrap_err();
        assert_eq!(err.to_string(), "Please provide a task number to delete.");
    }

    #[test]
    fn test_parse_index_not_a_number() {
        for input in ["mark abc", "unmark -1", "delete 1 2"] {
            let err = CommandParser::parse(input).unwrap_err();
            assert!(matches!(err, BuddyError::InvalidTaskNumber { .. }), "{input}");
        }
    }

    #[test]
    fn test_parse_index_zero() {
        let err = CommandParser::parse("mark 0").unwrap_err();
        assert!(matches!(err, BuddyError::ZeroTaskNumber));
    }

    #[test]
    fn test_parse_todo() -> Result<()> {
        assert_eq!(
            CommandParser::parse("todo buy milk")?,
            Command::Todo("buy milk".to_string())
        );
        let err = CommandParser::parse("todo ").unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
        Ok(())
    }

    #[test]
    fn test_parse_deadline() -> Result<()> {
        assert_eq!(
            CommandParser::parse("deadline return book /by 2/12/2023 1800")?,
            Command::Deadline {
                description: "return book".to_string(),
                by: at(2023, 12, 2, 18, 0),
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_deadline_without_time_is_midnight() -> Result<()> {
        assert_eq!(
            CommandParser::parse("deadline pay rent /by 1/1/2024")?,
            Command::Deadline {
                description: "pay rent".to_string(),
                by: at(2024, 1, 1, 0, 0),
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_deadline_missing_by() {
        let err = CommandParser::parse("deadline buy milk").unwrap_err();
        assert!(matches!(err, BuddyError::InvalidDeadlineFormat));
        assert!(err.to_string().contains("Invalid deadline format"));
    }

    #[test]
    fn test_parse_deadline_repeated_by() {
        let err = CommandParser::parse("deadline a /by 1/1/2024 /by 2/1/2024").unwrap_err();
        assert!(matches!(err, BuddyError::InvalidDeadlineFormat));
    }

    #[test]
    fn test_parse_deadline_bad_date() {
        let err = CommandParser::parse("deadline a /by someday").unwrap_err();
        assert!(matches!(err, BuddyError::InvalidDate { .. }));
    }

    #[test]
    fn test_parse_deadline_empty() {
        let err = CommandParser::parse("deadline").unwrap_err();
        assert!(matches!(err, BuddyError::EmptyDescription { .. }));
    }

    #[test]
    fn test_parse_event() -> Result<()> {
        assert_eq!(
            CommandParser::parse("event Team meeting /from 15/4/2025 1400 /to 15/4/2025 1600")?,
            Command::Event {
                description: "Team meeting".to_string(),
                from: at(2025, 4, 15, 14, 0),
                to: at(2025, 4, 15, 16, 0),
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_event_wrong_shape() {
        for input in [
            "event party",
            "event party /from 1/1/2024 1800",
            "event party /from 1/1/2024 1800 /to 1/1/2024 2000 /to 2/1/2024 0100",
        ] {
            let err = CommandParser::parse(input).unwrap_err();
            assert!(matches!(err, BuddyError::InvalidEventFormat), "{input}");
        }
    }

    #[test]
    fn test_parse_event_reversed_period() {
        let err = CommandParser::parse("event party /from 2/1/2024 1800 /to 1/1/2024 2000")
            .unwrap_err();
        assert!(matches!(err, BuddyError::EventEndsBeforeStart { .. }));
    }

    #[test]
    fn test_parse_find() -> Result<()> {
        assert_eq!(
            CommandParser::parse("find book")?,
            Command::Find("book".to_string())
        );
        assert!(matches!(
            CommandParser::parse("find   ").unwrap_err(),
            BuddyError::EmptyKeyword
        ));
        Ok(())
    }

    #[test]
    fn test_parse_date() -> Result<()> {
        assert_eq!(
            CommandParser::parse("date 2/12/2023")?,
            Command::Date(at(2023, 12, 2, 0, 0))
        );
        assert!(matches!(
            CommandParser::parse("date").unwrap_err(),
            BuddyError::MissingDate
        ));
        assert!(matches!(
            CommandParser::parse("date 2/12/2023 1800").unwrap_err(),
            BuddyError::InvalidDate { .. }
        ));
        Ok(())
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = CommandParser::parse("invalid command").unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: invalid");
    }

    #[test]
    fn test_parse_task_number_helper() -> Result<()> {
        assert_eq!(CommandParser::parse_task_number("7", "mark")?, 6);
        assert!(CommandParser::parse_task_number("", "mark").is_err());
        Ok(())
    }
}
