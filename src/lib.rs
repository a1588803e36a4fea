//! # tour-routing
//!
//! Delivery tour optimization from a single depot: computes a depot-first
//! visiting order over a set of stops, minimizing total great-circle
//! travel distance with interchangeable construction heuristics.
//!
//! The computed route is an open path (no closing leg back to the depot),
//! built by one of two deterministic heuristics, or by an externally
//! registered optimizer that falls back to the input order on failure.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Coordinate, Stop, Route, depot sentinel)
//! - [`distance`] — Haversine great-circle metric
//! - [`constructive`] — Construction heuristics (Nearest Neighbor, Clarke-Wright)
//! - [`planner`] — Boundary validation, algorithm dispatch, total distance
//! - [`error`] — Boundary error taxonomy
//!
//! ## Example
//!
//! ```
//! use tour_routing::models::{Coordinate, Stop, DEPOT_ID};
//! use tour_routing::planner::{total_distance_km, Algorithm, RoutePlanner};
//!
//! let depot = Coordinate::new(48.8566, 2.3522);
//! let stops = vec![
//!     Stop::new(1, 48.8606, 2.3376).with_weight(4.0),
//!     Stop::new(2, 48.8738, 2.2950),
//!     Stop::new(3, 48.8529, 2.3500),
//! ];
//!
//! let planner = RoutePlanner::new();
//! let route = planner.optimize(depot, &stops, Algorithm::from_key("CW"))?;
//!
//! assert_eq!(route.stops()[0].id(), DEPOT_ID);
//! assert_eq!(route.len(), 4);
//! assert!(total_distance_km(&route) > 0.0);
//! # Ok::<(), tour_routing::error::RoutingError>(())
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod models;
pub mod planner;
