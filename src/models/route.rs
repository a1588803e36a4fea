//! Route type: a depot-first visiting order.

use serde::{Deserialize, Serialize};

use super::Stop;

/// An ordered visiting sequence produced by one optimization call.
///
/// The first stop is always the depot; the remaining stops are a
/// permutation of the optimization input. A route is a plain return value:
/// it owns its stops and has no lifecycle beyond the call that produced it.
///
/// # Examples
///
/// ```
/// use tour_routing::models::{Coordinate, Route, Stop};
///
/// let route = Route::new(vec![
///     Stop::depot(Coordinate::new(0.0, 0.0)),
///     Stop::new(1, 0.0, 1.0),
/// ]);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.stop_ids(), vec![-1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<Stop>,
}

impl Route {
    /// Wraps an already ordered stop sequence.
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// The stops in visiting order, depot first.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The stop ids in visiting order.
    pub fn stop_ids(&self) -> Vec<i64> {
        self.stops.iter().map(Stop::id).collect()
    }

    /// Number of stops, the depot included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route holds no stops at all.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Consumes the route, yielding the ordered stops.
    pub fn into_stops(self) -> Vec<Stop> {
        self.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, DEPOT_ID};

    #[test]
    fn test_route_accessors() {
        let route = Route::new(vec![
            Stop::depot(Coordinate::new(0.0, 0.0)),
            Stop::new(2, 0.0, 1.0),
            Stop::new(5, 0.0, 2.0),
        ]);
        assert_eq!(route.len(), 3);
        assert!(!route.is_empty());
        assert_eq!(route.stop_ids(), vec![DEPOT_ID, 2, 5]);
        assert_eq!(route.stops()[0].id(), DEPOT_ID);
    }

    #[test]
    fn test_route_into_stops() {
        let stops = vec![Stop::depot(Coordinate::new(0.0, 0.0))];
        let route = Route::new(stops.clone());
        assert_eq!(route.into_stops(), stops);
    }
}
