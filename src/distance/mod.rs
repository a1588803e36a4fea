//! Great-circle distance metric.
//!
//! # Formula
//!
//! Haversine distance over a spherical Earth of radius 6371 km:
//!
//! ```text
//! h = sin²(Δlat/2) + cos(lat_a)·cos(lat_b)·sin²(Δlon/2)
//! d = 2·R·atan2(√h, √(1−h))
//! ```
//!
//! The metric is pure and total: any finite coordinate pair, including
//! antipodal points and out-of-range values, yields a finite non-negative
//! number. Range validation belongs to the planner boundary, not here.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in kilometers.
///
/// Symmetric up to floating-point rounding and exactly zero for identical
/// coordinates.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::haversine_km;
/// use tour_routing::models::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// // One degree of longitude at the equator is about 111.19 km.
/// assert!((haversine_km(&a, &b) - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    // Rounding can push h a hair past 1.0 for near-antipodal pairs, which
    // would put NaN under the square root.
    let h = ((d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2))
    .min(1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
