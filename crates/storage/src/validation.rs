//! Field rules shared by every request payload.
//!
//! Presence and range checks run through `validator` derives on the request
//! types; the functions here cover the parts the derives cannot express
//! (blank-after-trim) and the normalization applied once a request is valid.

use chrono::NaiveDate;
use validator::ValidationError;

pub const DEFAULT_STATUS: &str = "active";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rejects strings that are empty once surrounding whitespace is removed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Accepts an empty string (treated as "no date") or a `YYYY-MM-DD` date.
pub fn calendar_date(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("invalid_date"))
}

/// Trimmed value of a field the validator has already required.
pub fn required(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Trimmed value, or `None` when absent or blank.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn status(value: Option<String>) -> String {
    optional(value).unwrap_or_else(|| DEFAULT_STATUS.to_string())
}

/// Parses a date the validator has already accepted.
pub fn date(value: Option<String>) -> Option<NaiveDate> {
    optional(value).and_then(|v| NaiveDate::parse_from_str(&v, DATE_FORMAT).ok())
}
