// Query-string form of the filter state
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::error::FilterError;
use crate::domain::filter::FilterState;
use crate::domain::period::{parse_date, DatePreset, DateRange};

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub hospital: Option<String>,
    pub location: Option<String>,
    pub specialty: Option<String>,
    pub surgeon: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    /// `last30`, `last90`, `lastQuarter` or `ytd`; overrides start/end.
    pub preset: Option<String>,
    pub compare: Option<bool>,
    pub compare_start: Option<String>,
    pub compare_end: Option<String>,
}

impl FilterQuery {
    pub fn into_filter_state(self, today: NaiveDate) -> Result<FilterState, FilterError> {
        let defaults = FilterState::default();

        let date_range = match self.preset.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(preset) => preset.trim().parse::<DatePreset>()?.range_ending(today),
            None => range_from(
                "start",
                self.start.as_deref(),
                "end",
                self.end.as_deref(),
                defaults.date_range,
            )?,
        };

        let comparison_requested = self.compare_start.is_some() || self.compare_end.is_some();
        let comparison_date_range = if comparison_requested {
            Some(range_from(
                "compare_start",
                self.compare_start.as_deref(),
                "compare_end",
                self.compare_end.as_deref(),
                DateRange::default_comparison(),
            )?)
        } else {
            defaults.comparison_date_range
        };

        let periods = FilterState {
            date_range,
            comparison_date_range,
            show_comparison: self.compare.unwrap_or(comparison_requested),
            ..defaults
        };

        Ok(periods
            .select_hospital(self.hospital)
            .select_location(self.location)
            .select_specialty(self.specialty)
            .select_surgeon(self.surgeon))
    }
}

fn range_from(
    start_field: &'static str,
    start: Option<&str>,
    end_field: &'static str,
    end: Option<&str>,
    fallback: DateRange,
) -> Result<DateRange, FilterError> {
    let start = match start.filter(|s| !s.trim().is_empty()) {
        Some(value) => parse_date(start_field, value)?,
        None => fallback.start,
    };
    let end = match end.filter(|s| !s.trim().is_empty()) {
        Some(value) => parse_date(end_field, value)?,
        None => fallback.end,
    };
    DateRange::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
    }

    #[test]
    fn test_empty_query_is_default_filter() {
        let filter = FilterQuery::default().into_filter_state(today()).unwrap();
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn test_levels_and_dates() {
        let query = FilterQuery {
            hospital: Some("".to_string()),
            specialty: Some("Ortho".to_string()),
            start: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        let filter = query.into_filter_state(today()).unwrap();
        assert_eq!(filter.hospital, None);
        assert_eq!(filter.specialty.as_deref(), Some("Ortho"));
        assert_eq!(filter.date_range.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(filter.date_range.end, DateRange::default_current().end);
        assert!(!filter.show_comparison);
    }

    #[test]
    fn test_comparison_bounds_switch_comparison_on() {
        let query = FilterQuery {
            compare_end: Some("2024-03-31".to_string()),
            ..Default::default()
        };
        let filter = query.into_filter_state(today()).unwrap();
        assert!(filter.show_comparison);
        assert_eq!(filter.active_comparison().unwrap().days(), 91);
    }

    #[test]
    fn test_preset_overrides_dates() {
        let query = FilterQuery {
            preset: Some("lastQuarter".to_string()),
            start: Some("not-a-date".to_string()),
            ..Default::default()
        };
        let filter = query.into_filter_state(today()).unwrap();
        assert_eq!(filter.date_range.start, NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let bad_date = FilterQuery {
            end: Some("31/12/2024".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            bad_date.into_filter_state(today()),
            Err(FilterError::InvalidDate { field: "end", .. })
        ));

        let inverted = FilterQuery {
            start: Some("2025-01-01".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            inverted.into_filter_state(today()),
            Err(FilterError::InvertedRange { .. })
        ));
    }
}
