// Validation errors raised while building filter state from user input
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("date range ends ({end}) before it starts ({start})")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid date for {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("unknown analytics area: {0}")]
    UnknownArea(String),

    #[error("unknown date preset: {0}")]
    UnknownPreset(String),
}
