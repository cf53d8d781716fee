//! Keeps the cities selection consistent with the states selection

use super::field::SelectOption;
use crate::lookup::LookupTable;

/// Cities currently offered, derived from the selected states
#[derive(Debug, Clone, Default)]
pub struct DependentSelection {
    available: Vec<SelectOption>,
    has_parent: bool,
}

impl DependentSelection {
    /// Recompute the offered cities and prune stale selections.
    ///
    /// Selected cities that are no longer offered are removed from `cities`
    /// in place and returned. With no state selected, every city is removed.
    pub fn on_states_changed(
        &mut self,
        lookup: &LookupTable,
        states: &[SelectOption],
        cities: &mut Vec<SelectOption>,
    ) -> Vec<SelectOption> {
        let names: Vec<&str> = states.iter().map(|s| s.value.as_str()).collect();
        self.available = lookup.city_options(&names);
        self.has_parent = !names.is_empty();

        let (kept, pruned): (Vec<_>, Vec<_>) = std::mem::take(cities)
            .into_iter()
            .partition(|city| self.offers(&city.value));
        *cities = kept;
        pruned
    }

    /// The city selector accepts nothing while no state is selected
    pub fn is_disabled(&self) -> bool {
        !self.has_parent
    }

    pub fn offers(&self, city: &str) -> bool {
        self.available.iter().any(|o| o.value == city)
    }

    pub fn available(&self) -> &[SelectOption] {
        &self.available
    }

    pub fn clear(&mut self) {
        self.available.clear();
        self.has_parent = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options(names: &[&str]) -> Vec<SelectOption> {
        names.iter().map(|n| SelectOption::from_name(n)).collect()
    }

    fn values(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_default_is_disabled() {
        let controller = DependentSelection::default();
        assert!(controller.is_disabled());
        assert!(controller.available().is_empty());
    }

    #[test]
    fn test_selecting_state_offers_its_cities() {
        let lookup = LookupTable::default();
        let mut controller = DependentSelection::default();
        let mut cities = Vec::new();

        controller.on_states_changed(&lookup, &options(&["California"]), &mut cities);

        assert!(!controller.is_disabled());
        assert_eq!(
            values(controller.available()),
            vec!["Los Angeles", "San Francisco", "San Diego"]
        );
    }

    #[test]
    fn test_deselecting_state_prunes_exactly_its_cities() {
        let lookup = LookupTable::default();
        let mut controller = DependentSelection::default();
        let mut cities = Vec::new();
        controller.on_states_changed(&lookup, &options(&["California", "Texas"]), &mut cities);
        cities = options(&["San Diego", "Austin", "Los Angeles", "Dallas"]);

        let pruned = controller.on_states_changed(&lookup, &options(&["Texas"]), &mut cities);

        assert_eq!(values(&cities), vec!["Austin", "Dallas"]);
        assert_eq!(values(&pruned), vec!["San Diego", "Los Angeles"]);
    }

    #[test]
    fn test_clearing_states_empties_cities_and_disables() {
        let lookup = LookupTable::default();
        let mut controller = DependentSelection::default();
        let mut cities = Vec::new();
        controller.on_states_changed(&lookup, &options(&["Florida"]), &mut cities);
        cities = options(&["Miami"]);

        let pruned = controller.on_states_changed(&lookup, &[], &mut cities);

        assert!(cities.is_empty());
        assert_eq!(values(&pruned), vec!["Miami"]);
        assert!(controller.is_disabled());
    }

    #[test]
    fn test_adding_state_keeps_existing_cities() {
        let lookup = LookupTable::default();
        let mut controller = DependentSelection::default();
        let mut cities = Vec::new();
        controller.on_states_changed(&lookup, &options(&["Texas"]), &mut cities);
        cities = options(&["Houston"]);

        let pruned =
            controller.on_states_changed(&lookup, &options(&["Texas", "NewYork"]), &mut cities);

        assert!(pruned.is_empty());
        assert_eq!(values(&cities), vec!["Houston"]);
        assert!(controller.offers("Buffalo"));
    }

    #[test]
    fn test_unknown_state_enables_selector_without_offers() {
        let lookup = LookupTable::default();
        let mut controller = DependentSelection::default();
        let mut cities = Vec::new();
        controller.on_states_changed(&lookup, &options(&["Atlantis"]), &mut cities);
        assert!(!controller.is_disabled());
        assert!(controller.available().is_empty());
    }
}
