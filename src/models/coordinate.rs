//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
///
/// Construction never validates: the distance metric accepts any finite
/// pair, and range checking happens once at the planner boundary via
/// [`Coordinate::is_in_range`].
///
/// # Examples
///
/// ```
/// use tour_routing::models::Coordinate;
///
/// let paris = Coordinate::new(48.8566, 2.3522);
/// assert!(paris.is_in_range());
/// assert!(!Coordinate::new(91.0, 0.0).is_in_range());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if latitude is within [-90, 90] and longitude within
    /// [-180, 180]. Non-finite values are out of range.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}
