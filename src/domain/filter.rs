// Hierarchical filter state and the entity filter predicate
use serde::{Deserialize, Deserializer, Serialize};

use super::period::DateRange;

/// Levels of the hospital → location → specialty → surgeon hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Hospital,
    Location,
    Specialty,
    Surgeon,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Hospital,
        FilterField::Location,
        FilterField::Specialty,
        FilterField::Surgeon,
    ];

    pub fn default_rule(&self) -> MatchRule {
        match self {
            FilterField::Hospital => MatchRule::Token,
            _ => MatchRule::Exact,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Hospital => "hospital",
            FilterField::Location => "location",
            FilterField::Specialty => "specialty",
            FilterField::Surgeon => "surgeon",
        }
    }
}

/// How a selected filter value is compared against a record value.
/// All rules ignore ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    Exact,
    Contains,
    /// The selected value's words appear as a run of whole words in the
    /// record value: "MARH" and "VORH JRI" match "VORH JRI OR"-style names,
    /// but "MARH" does not match "MARH2 OR".
    Token,
}

impl MatchRule {
    pub fn matches(&self, candidate: &str, wanted: &str) -> bool {
        match self {
            MatchRule::Exact => candidate.eq_ignore_ascii_case(wanted),
            MatchRule::Contains => candidate
                .to_ascii_lowercase()
                .contains(&wanted.to_ascii_lowercase()),
            MatchRule::Token => {
                let wanted: Vec<&str> = wanted.split_whitespace().collect();
                let tokens: Vec<&str> = candidate.split_whitespace().collect();
                !wanted.is_empty()
                    && tokens.windows(wanted.len()).any(|run| {
                        run.iter()
                            .zip(&wanted)
                            .all(|(token, word)| token.eq_ignore_ascii_case(word))
                    })
            }
        }
    }
}

/// The active dashboard selection. `None` on any level means "no constraint".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    #[serde(deserialize_with = "blank_as_none")]
    pub hospital: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub location: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub specialty: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub surgeon: Option<String>,
    pub date_range: DateRange,
    pub comparison_date_range: Option<DateRange>,
    pub show_comparison: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            hospital: None,
            location: None,
            specialty: None,
            surgeon: None,
            date_range: DateRange::default_current(),
            comparison_date_range: Some(DateRange::default_comparison()),
            show_comparison: false,
        }
    }
}

impl FilterState {
    pub fn value(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Hospital => self.hospital.as_deref(),
            FilterField::Location => self.location.as_deref(),
            FilterField::Specialty => self.specialty.as_deref(),
            FilterField::Surgeon => self.surgeon.as_deref(),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        FilterField::ALL.iter().all(|field| self.value(*field).is_none())
    }

    /// Comparison period, only when comparison is switched on.
    pub fn active_comparison(&self) -> Option<DateRange> {
        if self.show_comparison {
            Some(self.comparison_date_range.unwrap_or_else(DateRange::default_comparison))
        } else {
            None
        }
    }

    /// Same selection restricted to the hospital and location levels.
    pub fn site_scope(&self) -> FilterState {
        FilterState {
            specialty: None,
            surgeon: None,
            ..self.clone()
        }
    }

    // Selection helpers return a new state; clearing a level clears every
    // level beneath it.

    pub fn select_hospital(&self, hospital: Option<String>) -> FilterState {
        let hospital = hospital.and_then(blank_to_none);
        let mut next = self.clone();
        if hospital.is_none() {
            next = next.select_location(None);
        }
        next.hospital = hospital;
        next
    }

    pub fn select_location(&self, location: Option<String>) -> FilterState {
        let location = location.and_then(blank_to_none);
        let mut next = self.clone();
        if location.is_none() {
            next = next.select_specialty(None);
        }
        next.location = location;
        next
    }

    pub fn select_specialty(&self, specialty: Option<String>) -> FilterState {
        let specialty = specialty.and_then(blank_to_none);
        let mut next = self.clone();
        if specialty.is_none() {
            next.surgeon = None;
        }
        next.specialty = specialty;
        next
    }

    pub fn select_surgeon(&self, surgeon: Option<String>) -> FilterState {
        FilterState {
            surgeon: surgeon.and_then(blank_to_none),
            ..self.clone()
        }
    }
}

fn blank_to_none(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(blank_to_none))
}

/// A record that can be narrowed by the hierarchical filter.
///
/// Scalar fields return a single value, array fields (e.g. a service's
/// sites) return every element. A field the record does not carry returns
/// nothing and so never matches a set filter level.
pub trait Filterable {
    fn field_values(&self, field: FilterField) -> Vec<&str>;

    fn match_rule(&self, field: FilterField) -> MatchRule {
        field.default_rule()
    }

    fn matches(&self, filter: &FilterState) -> bool {
        FilterField::ALL.iter().all(|field| match filter.value(*field) {
            None => true,
            Some(wanted) => {
                let rule = self.match_rule(*field);
                self.field_values(*field)
                    .iter()
                    .any(|candidate| rule.matches(candidate, wanted))
            }
        })
    }
}

/// Entities satisfying every set level of `filter`, in their original order.
pub fn filter_entities<'a, T: Filterable>(entities: &'a [T], filter: &FilterState) -> Vec<&'a T> {
    entities.iter().filter(|entity| entity.matches(filter)).collect()
}
