use std::fmt;

use crate::{constants::Weight, graph::Location};

/// Ordered path of locations from a query's source to its target, together
/// with the total accumulated cost.
#[derive(Debug, PartialEq, Clone)]
pub struct Route {
    locations: Vec<Location>,
    cost: Weight,
}

impl Route {
    pub fn new(locations: Vec<Location>, cost: Weight) -> Self {
        debug_assert!(!locations.is_empty(), "a route holds at least its source");
        Route { locations, cost }
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn cost(&self) -> Weight {
        self.cost
    }

    pub fn source(&self) -> &Location {
        &self.locations[0]
    }

    pub fn target(&self) -> &Location {
        &self.locations[self.locations.len() - 1]
    }

    /// Number of connections travelled.
    pub fn hops(&self) -> usize {
        self.locations.len() - 1
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, location) in self.locations.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", location)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_with_arrows() {
        let route = Route::new(vec!["A".into(), "B".into(), "C".into()], 3.0);
        assert_eq!(route.to_string(), "A -> B -> C");
        assert_eq!(route.source().as_str(), "A");
        assert_eq!(route.target().as_str(), "C");
        assert_eq!(route.hops(), 2);
    }

    #[test]
    fn single_location_route() {
        let route = Route::new(vec!["A".into()], 0.0);
        assert_eq!(route.to_string(), "A");
        assert_eq!(route.source(), route.target());
        assert_eq!(route.hops(), 0);
    }
}
