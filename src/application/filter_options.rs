// Hierarchical filter options - selectable values at each level
use crate::domain::dataset::AnalyticsDataset;
use crate::domain::filter::{filter_entities, FilterState};
use crate::domain::hospital::Hospital;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub hospitals: Vec<Hospital>,
    pub locations: Vec<String>,
    pub specialties: Vec<String>,
    pub surgeons: Vec<String>,
}

/// A level only offers options once its parent level is selected.
pub fn filter_options(dataset: &AnalyticsDataset, filter: &FilterState) -> FilterOptions {
    let locations = match filter.hospital.as_deref() {
        Some(_) => {
            let scope = FilterState::default().select_hospital(filter.hospital.clone());
            sorted(filter_entities(&dataset.locations, &scope).into_iter().map(|l| l.name.clone()))
        }
        None => Vec::new(),
    };

    let specialties = match filter.location.as_deref() {
        Some(_) => {
            let scope = FilterState {
                specialty: None,
                surgeon: None,
                ..filter.clone()
            };
            sorted(
                filter_entities(&dataset.service_lines, &scope)
                    .into_iter()
                    .map(|s| s.name.clone()),
            )
        }
        None => Vec::new(),
    };

    let surgeons = match filter.specialty.as_deref() {
        Some(_) => {
            let scope = FilterState {
                surgeon: None,
                ..filter.clone()
            };
            sorted(filter_entities(&dataset.providers, &scope).into_iter().map(|p| p.name.clone()))
        }
        None => Vec::new(),
    };

    FilterOptions {
        hospitals: dataset.hospitals.clone(),
        locations,
        specialties,
        surgeons,
    }
}

fn sorted(values: impl Iterator<Item = String>) -> Vec<String> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock_repository::MockRepository;

    #[test]
    fn test_nothing_below_an_unselected_level() {
        let dataset = MockRepository::seeded().unwrap().dataset();
        let options = filter_options(&dataset, &FilterState::default());

        assert_eq!(options.hospitals.len(), 4);
        assert!(options.locations.is_empty());
        assert!(options.specialties.is_empty());
        assert!(options.surgeons.is_empty());
    }

    #[test]
    fn test_options_narrow_down_the_hierarchy() {
        let dataset = MockRepository::seeded().unwrap().dataset();
        let filter = FilterState::default().select_hospital(Some("vorh".to_string()));
        let options = filter_options(&dataset, &filter);
        assert_eq!(options.locations, vec!["VORH JRI OR", "VORH Main OR"]);
        assert!(options.specialties.is_empty());

        let filter = FilterState::default()
            .select_hospital(Some("memh".to_string()))
            .select_location(Some("MEMH OR".to_string()));
        let options = filter_options(&dataset, &filter);
        assert_eq!(options.specialties, vec!["ENT", "General Surgery"]);

        let filter = filter.select_specialty(Some("ENT".to_string()));
        let options = filter_options(&dataset, &filter);
        assert_eq!(options.surgeons, vec!["Dr. Clark"]);
    }
}
