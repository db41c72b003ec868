//! Date normalization for holiday lookups.
//!
//! Every lookup goes through [`normalize`], which reduces the accepted input
//! representations to the canonical `YYYY-MM-DD` string the holiday records
//! use. Timestamps keep the calendar date of their own offset; no UTC
//! shifting is performed.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use thiserror::Error;

/// Canonical calendar-date format shared with the holiday records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur while normalizing a date input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Accepted date representations for holiday lookups.
#[derive(Debug, Clone)]
pub enum DateInput {
    /// A plain calendar date.
    Date(NaiveDate),
    /// A timestamp; its offset's calendar date is used.
    Timestamp(DateTime<FixedOffset>),
    /// A `YYYY-MM-DD` string or an RFC 3339 timestamp string.
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value.fixed_offset())
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Normalizes an accepted input to the canonical `YYYY-MM-DD` string.
pub fn normalize(input: &DateInput) -> Result<String, DateError> {
    match input {
        DateInput::Date(date) => Ok(date.format(DATE_FORMAT).to_string()),
        DateInput::Timestamp(ts) => Ok(ts.date_naive().format(DATE_FORMAT).to_string()),
        DateInput::Text(text) => normalize_text(text),
    }
}

/// Extracts the 4-digit year prefix from a canonical date string.
pub fn year_of(canonical: &str) -> Result<i32, DateError> {
    canonical
        .get(..4)
        .and_then(|prefix| prefix.parse().ok())
        .ok_or_else(|| DateError::InvalidDate(canonical.to_string()))
}

fn normalize_text(text: &str) -> Result<String, DateError> {
    let text = text.trim();
    // Calendar-date strings are validated through chrono rather than passed
    // through textually, so "2024-13-45" is rejected here.
    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Ok(date.format(DATE_FORMAT).to_string());
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.date_naive().format(DATE_FORMAT).to_string());
    }
    Err(DateError::InvalidDate(text.to_string()))
}
