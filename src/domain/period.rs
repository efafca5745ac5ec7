// Reporting periods - inclusive date ranges and quick presets
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::FilterError;

/// Inclusive calendar date range. `end` never precedes `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = FilterError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FilterError> {
        if end < start {
            return Err(FilterError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Default current period shown when a dashboard is first opened.
    pub fn default_current() -> Self {
        Self {
            start: ymd(2024, 10, 1),
            end: ymd(2024, 12, 31),
        }
    }

    /// Default comparative period.
    pub fn default_comparison() -> Self {
        Self {
            start: ymd(2024, 1, 1),
            end: ymd(2024, 6, 30),
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::default_current()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Last30,
    Last90,
    LastQuarter,
    YearToDate,
}

impl DatePreset {
    pub fn range_ending(&self, today: NaiveDate) -> DateRange {
        match self {
            DatePreset::Last30 => DateRange {
                start: today - Duration::days(30),
                end: today,
            },
            DatePreset::Last90 => DateRange {
                start: today - Duration::days(90),
                end: today,
            },
            DatePreset::LastQuarter => {
                let quarter = today.month0() / 3;
                let (year, previous) = if quarter == 0 {
                    (today.year() - 1, 3)
                } else {
                    (today.year(), quarter - 1)
                };
                let start = ymd(year, previous * 3 + 1, 1);
                let next_start = if previous == 3 {
                    ymd(year + 1, 1, 1)
                } else {
                    ymd(year, previous * 3 + 4, 1)
                };
                DateRange {
                    start,
                    end: next_start - Duration::days(1),
                }
            }
            DatePreset::YearToDate => DateRange {
                start: ymd(today.year(), 1, 1),
                end: today,
            },
        }
    }
}

impl FromStr for DatePreset {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last30" => Ok(DatePreset::Last30),
            "last90" => Ok(DatePreset::Last90),
            "lastQuarter" | "last_quarter" => Ok(DatePreset::LastQuarter),
            "ytd" => Ok(DatePreset::YearToDate),
            other => Err(FilterError::UnknownPreset(other.to_string())),
        }
    }
}

/// Parse a `YYYY-MM-DD` request parameter.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| FilterError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

// Only called with constant, valid calendar dates.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
