//! Date and time formats used for input, display and storage.
//!
//! Users type `d/M/yyyy HHmm` (or a bare `d/M/yyyy`, meaning midnight), the
//! data file stores `yyyy-MM-ddTHH:mm`, and output shows `Dec 2 2023, 6:00 pm`.

use crate::core::error::{BuddyError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// User-facing input format, e.g. `2/12/2023 1800`
pub const INPUT_FORMAT: &str = "%d/%m/%Y %H%M";
/// User-facing date-only format, e.g. `2/12/2023`
pub const INPUT_DATE_FORMAT: &str = "%d/%m/%Y";
/// Persisted format, e.g. `2023-12-02T18:00`
pub const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Display format, e.g. `Dec 2 2023, 6:00 pm`
pub const DISPLAY_FORMAT: &str = "%b %-d %Y, %-I:%M %P";
/// Display format for a calendar date, e.g. `Dec 2 2023`
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d %Y";

const INPUT_HINT: &str = "d/M/yyyy HHmm";
const INPUT_EXAMPLE: &str = "2/12/2023 1800";

/// Parse a date/time typed by the user.
///
/// Accepts `d/M/yyyy HHmm`; a bare `d/M/yyyy` falls back to midnight.
pub fn parse_user_date_time(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(value) = NaiveDateTime::parse_from_str(input, INPUT_FORMAT) {
        return Ok(value);
    }
    NaiveDate::parse_from_str(input, INPUT_DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| BuddyError::invalid_date(input, INPUT_HINT, INPUT_EXAMPLE))
}

/// Parse a bare `d/M/yyyy` date as used by the `date` command.
///
/// The date is completed with ` 0000` and parsed with the full input format, so
/// anything other than a bare date is rejected.
pub fn parse_user_date(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    NaiveDateTime::parse_from_str(&format!("{input} 0000"), INPUT_FORMAT)
        .map_err(|_| BuddyError::invalid_date(input, "d/M/yyyy", "2/12/2023"))
}

/// Parse a timestamp read back from the data file.
///
/// The user format is tried first, then the storage format, so files written
/// by hand with user-style dates still load.
pub fn parse_stored_date_time(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    NaiveDateTime::parse_from_str(input, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, STORAGE_FORMAT))
        .map_err(|_| BuddyError::invalid_date(input, "yyyy-MM-ddTHH:mm", "2023-12-02T18:00"))
}

pub fn format_for_storage(value: &NaiveDateTime) -> String {
    value.format(STORAGE_FORMAT).to_string()
}

pub fn format_for_display(value: &NaiveDateTime) -> String {
    value.format(DISPLAY_FORMAT).to_string()
}

pub fn format_date_for_display(value: &NaiveDate) -> String {
    value.format(DISPLAY_DATE_FORMAT).to_string()
}
