//! Boundary error taxonomy.
//!
//! The heuristics and the distance metric never fail for validated input;
//! everything here is detected at the planner boundary before a route is
//! built.

use thiserror::Error;

/// Errors raised while validating optimization input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// A stop (or the depot, reported with the sentinel id) carries a
    /// coordinate outside the valid latitude/longitude range.
    ///
    /// The metric would happily produce a finite but geometrically
    /// meaningless distance for it, so the planner fails fast instead.
    #[error("stop {id} has an out-of-range coordinate ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Identifier of the offending stop.
        id: i64,
        /// Latitude as received, in decimal degrees.
        latitude: f64,
        /// Longitude as received, in decimal degrees.
        longitude: f64,
    },

    /// Two stops share an identifier, or a real stop carries the depot
    /// sentinel. Route bookkeeping is keyed by id and assumes uniqueness.
    #[error("duplicate stop id {id}")]
    DuplicateStopId {
        /// The identifier seen more than once.
        id: i64,
    },
}

/// Failure reported by an externally supplied optimizer (network error,
/// parse error, timeout).
///
/// The planner never propagates this: any failure falls back to the input
/// stop order.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("external optimizer failed: {0}")]
pub struct ExternalOptimizerError(pub String);
