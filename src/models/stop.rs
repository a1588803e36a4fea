//! Delivery stop and depot types.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Sentinel identifier for the synthesized depot stop.
///
/// Real stops must never carry this id; the planner rejects them at the
/// boundary before any route is built.
pub const DEPOT_ID: i64 = -1;

/// A point to visit on a delivery tour.
///
/// Routing reads only the id and the coordinate. The remaining attributes
/// (weight, volume, time window) belong to the dispatching domain and are
/// carried through the heuristics untouched.
///
/// Ids must be unique within a single optimization call; all route
/// bookkeeping is keyed by them.
///
/// # Examples
///
/// ```
/// use tour_routing::models::{Coordinate, Stop, DEPOT_ID};
///
/// let stop = Stop::new(7, 48.86, 2.35)
///     .with_weight(12.5)
///     .with_time_window("08:00-12:00");
/// assert_eq!(stop.id(), 7);
/// assert_eq!(stop.time_window(), Some("08:00-12:00"));
///
/// let depot = Stop::depot(Coordinate::new(48.85, 2.35));
/// assert_eq!(depot.id(), DEPOT_ID);
/// assert!(depot.is_depot());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: i64,
    coordinate: Coordinate,
    weight: f64,
    volume: f64,
    time_window: Option<String>,
}

impl Stop {
    /// Creates a stop at the given position with zero weight and volume.
    pub fn new(id: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            coordinate: Coordinate::new(latitude, longitude),
            weight: 0.0,
            volume: 0.0,
            time_window: None,
        }
    }

    /// Creates the virtual depot stop (id = [`DEPOT_ID`]).
    pub fn depot(coordinate: Coordinate) -> Self {
        Self {
            id: DEPOT_ID,
            coordinate,
            weight: 0.0,
            volume: 0.0,
            time_window: None,
        }
    }

    /// Sets the parcel weight for this stop.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the parcel volume for this stop.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Sets the delivery time window label for this stop.
    pub fn with_time_window(mut self, time_window: impl Into<String>) -> Self {
        self.time_window = Some(time_window.into());
        self
    }

    /// Stop identifier ([`DEPOT_ID`] for the depot).
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Geographic position of this stop.
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Returns `true` if this is the synthesized depot stop.
    pub fn is_depot(&self) -> bool {
        self.id == DEPOT_ID
    }

    /// Parcel weight (not enforced by the heuristics).
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Parcel volume (not enforced by the heuristics).
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Delivery time window label, if any (not enforced by the heuristics).
    pub fn time_window(&self) -> Option<&str> {
        self.time_window.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_new() {
        let s = Stop::new(3, 10.0, 20.0);
        assert_eq!(s.id(), 3);
        assert_eq!(s.coordinate().latitude(), 10.0);
        assert_eq!(s.coordinate().longitude(), 20.0);
        assert_eq!(s.weight(), 0.0);
        assert_eq!(s.volume(), 0.0);
        assert!(s.time_window().is_none());
        assert!(!s.is_depot());
    }

    #[test]
    fn test_stop_builders() {
        let s = Stop::new(1, 0.0, 0.0)
            .with_weight(5.5)
            .with_volume(0.3)
            .with_time_window("14:00-18:00");
        assert_eq!(s.weight(), 5.5);
        assert_eq!(s.volume(), 0.3);
        assert_eq!(s.time_window(), Some("14:00-18:00"));
    }

    #[test]
    fn test_depot() {
        let d = Stop::depot(Coordinate::new(1.5, -2.5));
        assert_eq!(d.id(), DEPOT_ID);
        assert!(d.is_depot());
        assert_eq!(d.weight(), 0.0);
        assert_eq!(d.coordinate().latitude(), 1.5);
    }
}
