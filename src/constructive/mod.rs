//! Constructive route-building heuristics.
//!
//! - [`nearest_neighbor`] — greedy nearest-neighbor walk, O(n²)
//! - [`clarke_wright_savings`] — Clarke-Wright savings merges (1964), O(n² log n)
//!
//! Both consume a depot-first stop slice and return a depot-first
//! permutation of it. The [`RouteOptimizer`] trait puts the two behind one
//! capability so the planner can treat them interchangeably.

mod clarke_wright;
mod nearest_neighbor;

pub use clarke_wright::clarke_wright_savings;
pub use nearest_neighbor::nearest_neighbor;

use crate::models::Stop;

/// A deterministic route construction strategy.
///
/// `stops[0]` is the depot; the result starts with the depot and continues
/// with a permutation of `stops[1..]`. Implementations hold no mutable
/// state and may be shared across threads.
pub trait RouteOptimizer: Send + Sync {
    /// Builds a visiting order over the given depot-first stops.
    fn build_route(&self, stops: &[Stop]) -> Vec<Stop>;
}

/// Greedy nearest-neighbor strategy (see [`nearest_neighbor`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl RouteOptimizer for NearestNeighbor {
    fn build_route(&self, stops: &[Stop]) -> Vec<Stop> {
        nearest_neighbor(stops)
    }
}

/// Clarke-Wright savings strategy (see [`clarke_wright_savings`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct ClarkeWright;

impl RouteOptimizer for ClarkeWright {
    fn build_route(&self, stops: &[Stop]) -> Vec<Stop> {
        clarke_wright_savings(stops)
    }
}
