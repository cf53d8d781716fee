//! Static state → city lookup table

use crate::error::ConfigurationError;
use crate::state::SelectOption;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One configured parent entry and its dependent options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub state: String,
    pub cities: Vec<String>,
}

impl Region {
    pub fn new(state: &str, cities: &[&str]) -> Self {
        Self {
            state: state.to_string(),
            cities: cities.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Immutable mapping from state name to its ordered cities
#[derive(Debug, Clone)]
pub struct LookupTable {
    regions: Vec<Region>,
    index: HashMap<String, usize>,
}

impl LookupTable {
    /// Build a table, rejecting empty or duplicated names
    pub fn new(regions: Vec<Region>) -> Result<Self, ConfigurationError> {
        let mut index = HashMap::with_capacity(regions.len());

        for (i, region) in regions.iter().enumerate() {
            if region.state.is_empty() {
                return Err(ConfigurationError::EmptyState { index: i });
            }
            if index.insert(region.state.clone(), i).is_some() {
                return Err(ConfigurationError::DuplicateState(region.state.clone()));
            }

            let mut seen = HashSet::with_capacity(region.cities.len());
            for city in &region.cities {
                if city.is_empty() {
                    return Err(ConfigurationError::EmptyCity {
                        state: region.state.clone(),
                    });
                }
                if !seen.insert(city.as_str()) {
                    return Err(ConfigurationError::DuplicateCity {
                        state: region.state.clone(),
                        city: city.clone(),
                    });
                }
            }
        }

        Ok(Self { regions, index })
    }

    /// Configured cities for a single state, empty when unknown
    pub fn cities_of(&self, state: &str) -> &[String] {
        self.index
            .get(state)
            .map(|&i| self.regions[i].cities.as_slice())
            .unwrap_or(&[])
    }

    /// Union of the cities of every given state.
    ///
    /// Order follows the states as given, then each state's configured
    /// order. A city reachable from two states appears once, at its first
    /// position. Unknown states contribute nothing.
    pub fn cities_for<S: AsRef<str>>(&self, states: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        states
            .iter()
            .flat_map(|s| self.cities_of(s.as_ref()))
            .filter(|city| seen.insert(city.as_str()))
            .cloned()
            .collect()
    }

    /// Selectable states in table order
    pub fn state_options(&self) -> Vec<SelectOption> {
        self.regions
            .iter()
            .map(|r| SelectOption::from_name(&r.state))
            .collect()
    }

    /// Selectable cities for the given states
    pub fn city_options<S: AsRef<str>>(&self, states: &[S]) -> Vec<SelectOption> {
        self.cities_for(states)
            .iter()
            .map(|c| SelectOption::from_name(c))
            .collect()
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        let regions = default_regions();
        let index = regions
            .iter()
            .enumerate()
            .map(|(i, r)| (r.state.clone(), i))
            .collect();
        Self { regions, index }
    }
}

/// Regions shipped with the form
pub fn default_regions() -> Vec<Region> {
    vec![
        Region::new("California", &["Los Angeles", "San Francisco", "San Diego"]),
        Region::new("Texas", &["Houston", "Dallas", "Austin"]),
        Region::new("Florida", &["Miami", "Orlando", "Tampa"]),
        Region::new("NewYork", &["New York City", "Buffalo", "Albany"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> LookupTable {
        LookupTable::default()
    }

    mod construction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_table_has_four_states() {
            let names: Vec<String> = table()
                .state_options()
                .into_iter()
                .map(|o| o.value)
                .collect();
            assert_eq!(names, vec!["California", "Texas", "Florida", "NewYork"]);
        }

        #[test]
        fn test_default_regions_pass_validation() {
            let checked = LookupTable::new(default_regions()).unwrap();
            let builtin = table();
            assert_eq!(checked.state_options(), builtin.state_options());
            assert_eq!(checked.index, builtin.index);
        }

        #[test]
        fn test_empty_state_rejected() {
            let err = LookupTable::new(vec![Region::new("", &["A"])]).unwrap_err();
            assert_eq!(err, ConfigurationError::EmptyState { index: 0 });
        }

        #[test]
        fn test_duplicate_state_rejected() {
            let err = LookupTable::new(vec![
                Region::new("Texas", &["Houston"]),
                Region::new("Texas", &["Dallas"]),
            ])
            .unwrap_err();
            assert_eq!(err, ConfigurationError::DuplicateState("Texas".to_string()));
        }

        #[test]
        fn test_empty_city_rejected() {
            let err = LookupTable::new(vec![Region::new("Texas", &["Houston", ""])]).unwrap_err();
            assert!(matches!(err, ConfigurationError::EmptyCity { .. }));
        }

        #[test]
        fn test_duplicate_city_within_state_rejected() {
            let err =
                LookupTable::new(vec![Region::new("Texas", &["Austin", "Austin"])]).unwrap_err();
            assert_eq!(
                err,
                ConfigurationError::DuplicateCity {
                    state: "Texas".to_string(),
                    city: "Austin".to_string(),
                }
            );
        }

        #[test]
        fn test_same_city_under_two_states_allowed() {
            let result = LookupTable::new(vec![
                Region::new("A", &["Springfield"]),
                Region::new("B", &["Springfield"]),
            ]);
            assert!(result.is_ok());
        }

        #[test]
        fn test_empty_table_allowed() {
            let table = LookupTable::new(Vec::new()).unwrap();
            assert!(table.state_options().is_empty());
        }
    }

    mod cities_for {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_single_state() {
            assert_eq!(
                table().cities_for(&["California"]),
                vec!["Los Angeles", "San Francisco", "San Diego"]
            );
        }

        #[test]
        fn test_two_states_follow_selection_order() {
            assert_eq!(
                table().cities_for(&["California", "Texas"]),
                vec![
                    "Los Angeles",
                    "San Francisco",
                    "San Diego",
                    "Houston",
                    "Dallas",
                    "Austin"
                ]
            );
            assert_eq!(
                table().cities_for(&["Texas", "California"]),
                vec![
                    "Houston",
                    "Dallas",
                    "Austin",
                    "Los Angeles",
                    "San Francisco",
                    "San Diego"
                ]
            );
        }

        #[test]
        fn test_unknown_state_contributes_nothing() {
            assert_eq!(
                table().cities_for(&["Atlantis", "Texas"]),
                vec!["Houston", "Dallas", "Austin"]
            );
        }

        #[test]
        fn test_empty_selection_is_empty() {
            let empty: [&str; 0] = [];
            assert!(table().cities_for(&empty).is_empty());
        }

        #[test]
        fn test_shared_city_kept_once_at_first_position() {
            let table = LookupTable::new(vec![
                Region::new("A", &["X", "Shared"]),
                Region::new("B", &["Shared", "Y"]),
            ])
            .unwrap();
            assert_eq!(table.cities_for(&["A", "B"]), vec!["X", "Shared", "Y"]);
            assert_eq!(table.cities_for(&["B", "A"]), vec!["Shared", "Y", "X"]);
        }

        #[test]
        fn test_repeated_state_does_not_duplicate() {
            assert_eq!(
                table().cities_for(&["Florida", "Florida"]),
                vec!["Miami", "Orlando", "Tampa"]
            );
        }

        #[test]
        fn test_every_subset_is_duplicate_free() {
            let names = ["California", "Texas", "Florida", "NewYork"];
            let table = table();
            for mask in 0u8..16 {
                let subset: Vec<&str> = names
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, n)| *n)
                    .collect();
                let cities = table.cities_for(&subset);
                let unique: HashSet<&String> = cities.iter().collect();
                assert_eq!(unique.len(), cities.len());
                assert_eq!(cities.len(), subset.len() * 3);
            }
        }
    }

    #[test]
    fn test_city_options_use_name_for_value_and_label() {
        let options = table().city_options(&["NewYork"]);
        assert_eq!(options[0].value, "New York City");
        assert_eq!(options[0].label, "New York City");
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_cities_of_unknown_state_is_empty() {
        assert!(table().cities_of("Nowhere").is_empty());
        assert_eq!(table().cities_of("Texas"), ["Houston", "Dallas", "Austin"]);
    }
}
