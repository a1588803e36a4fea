//! Domain model types for tour optimization.
//!
//! Provides the core abstractions: geographic coordinates, delivery stops
//! with pass-through dispatch attributes, the synthesized depot sentinel,
//! and routes as depot-first visiting orders.

mod coordinate;
mod route;
mod stop;

pub use coordinate::Coordinate;
pub use route::Route;
pub use stop::{Stop, DEPOT_ID};
