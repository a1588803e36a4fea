//! Route planning orchestration.
//!
//! The planner is the boundary of the crate: it validates incoming stops,
//! synthesizes the depot as a virtual stop, dispatches to a construction
//! heuristic by algorithm key, and sums route distances. An externally
//! supplied optimizer (for example an LLM-backed service) can be
//! registered for the [`Algorithm::Ai`] key; any failure there falls back
//! to the input order instead of surfacing to the caller.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::constructive::{ClarkeWright, NearestNeighbor, RouteOptimizer};
use crate::distance::haversine_km;
use crate::error::{ExternalOptimizerError, RoutingError};
use crate::models::{Coordinate, Route, Stop, DEPOT_ID};

/// Route construction algorithm selector.
///
/// Free-form request strings are parsed once by [`Algorithm::from_key`]
/// and never travel further into the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Greedy nearest-neighbor walk (the default).
    #[default]
    NearestNeighbor,
    /// Clarke-Wright savings merges.
    ClarkeWright,
    /// Externally supplied optimizer, falling back to input order on
    /// failure.
    Ai,
}

impl Algorithm {
    /// Parses a request-level algorithm key, case-insensitively.
    ///
    /// `"CLARKE_WRIGHT"` and `"CW"` select [`Algorithm::ClarkeWright`],
    /// `"AI"` selects [`Algorithm::Ai`]; anything else, an empty key
    /// included, is the nearest-neighbor default. Unrecognized keys are
    /// policy, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_routing::planner::Algorithm;
    ///
    /// assert_eq!(Algorithm::from_key("cw"), Algorithm::ClarkeWright);
    /// assert_eq!(Algorithm::from_key("Clarke_Wright"), Algorithm::ClarkeWright);
    /// assert_eq!(Algorithm::from_key("ai"), Algorithm::Ai);
    /// assert_eq!(Algorithm::from_key("banana"), Algorithm::NearestNeighbor);
    /// ```
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_uppercase().as_str() {
            "CLARKE_WRIGHT" | "CW" => Self::ClarkeWright,
            "AI" => Self::Ai,
            _ => Self::NearestNeighbor,
        }
    }
}

/// An optimizer living outside this crate (network service, language
/// model).
///
/// Same depot-first contract as the in-crate heuristics, but fallible.
/// The planner converts any error into a fallback to the input order, so
/// external failures never reach the caller.
pub trait ExternalOptimizer: Send + Sync {
    /// Attempts to build a visiting order over the depot-first stops.
    fn try_build_route(&self, stops: &[Stop]) -> Result<Vec<Stop>, ExternalOptimizerError>;
}

/// Stateless orchestrator over the construction heuristics.
///
/// # Examples
///
/// ```
/// use tour_routing::models::{Coordinate, Stop, DEPOT_ID};
/// use tour_routing::planner::{total_distance_km, Algorithm, RoutePlanner};
///
/// let depot = Coordinate::new(48.8566, 2.3522);
/// let stops = vec![Stop::new(1, 48.86, 2.35), Stop::new(2, 48.87, 2.36)];
///
/// let planner = RoutePlanner::new();
/// let route = planner.optimize(depot, &stops, Algorithm::from_key("CW"))?;
/// assert_eq!(route.stops()[0].id(), DEPOT_ID);
/// assert!(total_distance_km(&route) > 0.0);
/// # Ok::<(), tour_routing::error::RoutingError>(())
/// ```
#[derive(Default)]
pub struct RoutePlanner {
    external: Option<Box<dyn ExternalOptimizer>>,
}

impl RoutePlanner {
    /// Creates a planner with only the in-crate heuristics.
    pub fn new() -> Self {
        Self { external: None }
    }

    /// Registers an external optimizer for [`Algorithm::Ai`].
    pub fn with_external(mut self, external: Box<dyn ExternalOptimizer>) -> Self {
        self.external = Some(external);
        self
    }

    /// Computes a visiting order for `stops` dispatched from `depot`.
    ///
    /// The depot is synthesized as a virtual stop with [`DEPOT_ID`] and
    /// prepended to a fresh copy of the input; the input itself is never
    /// mutated. The returned route starts at the depot and visits every
    /// stop exactly once, as an open path.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidCoordinate`] if the depot or any stop is out
    /// of range; [`RoutingError::DuplicateStopId`] if two stops share an
    /// id or a stop carries the depot sentinel.
    pub fn optimize(
        &self,
        depot: Coordinate,
        stops: &[Stop],
        algorithm: Algorithm,
    ) -> Result<Route, RoutingError> {
        validate(&depot, stops)?;

        let mut input = Vec::with_capacity(stops.len() + 1);
        input.push(Stop::depot(depot));
        input.extend(stops.iter().cloned());

        debug!(?algorithm, stops = stops.len(), "building route");
        let routed = match algorithm {
            Algorithm::NearestNeighbor | Algorithm::ClarkeWright => {
                let optimizer: &dyn RouteOptimizer = match algorithm {
                    Algorithm::ClarkeWright => &ClarkeWright,
                    _ => &NearestNeighbor,
                };
                optimizer.build_route(&input)
            }
            Algorithm::Ai => self.optimize_external(input),
        };

        Ok(Route::new(routed))
    }

    /// Runs the registered external optimizer, keeping the input order on
    /// any failure or when none is registered.
    fn optimize_external(&self, input: Vec<Stop>) -> Vec<Stop> {
        match &self.external {
            Some(external) => match external.try_build_route(&input) {
                Ok(routed) => routed,
                Err(err) => {
                    warn!(error = %err, "external optimizer failed, keeping input order");
                    input
                }
            },
            None => {
                warn!("no external optimizer registered, keeping input order");
                input
            }
        }
    }
}

/// Total length of a route, in kilometers.
///
/// Sums the great-circle distance over consecutive stops. The route is an
/// open path: no closing leg back to the depot is added. Routes with fewer
/// than two stops have length `0.0`.
pub fn total_distance_km(route: &Route) -> f64 {
    route
        .stops()
        .windows(2)
        .map(|leg| haversine_km(leg[0].coordinate(), leg[1].coordinate()))
        .sum()
}

/// Fails fast on input the heuristics cannot be trusted with: out-of-range
/// coordinates and colliding ids (the depot sentinel included).
fn validate(depot: &Coordinate, stops: &[Stop]) -> Result<(), RoutingError> {
    if !depot.is_in_range() {
        return Err(RoutingError::InvalidCoordinate {
            id: DEPOT_ID,
            latitude: depot.latitude(),
            longitude: depot.longitude(),
        });
    }

    let mut seen = HashSet::with_capacity(stops.len() + 1);
    seen.insert(DEPOT_ID);
    for stop in stops {
        if !stop.coordinate().is_in_range() {
            return Err(RoutingError::InvalidCoordinate {
                id: stop.id(),
                latitude: stop.coordinate().latitude(),
                longitude: stop.coordinate().longitude(),
            });
        }
        if !seen.insert(stop.id()) {
            return Err(RoutingError::DuplicateStopId { id: stop.id() });
        }
    }
    Ok(())
}
