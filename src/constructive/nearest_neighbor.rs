//! Nearest-neighbor constructive heuristic.
//!
//! Builds the route greedily: starting from the depot, always travel to the
//! closest not-yet-visited stop.
//!
//! Visited tracking uses an index-flagged array over the input slice, never
//! an unordered set: candidates are scanned in input order with a strict
//! `<` comparison, so equidistant stops resolve to the first one in the
//! input and the output is reproducible across runs and platforms.
//!
//! # Complexity
//!
//! O(n²) distance evaluations for n stops.

use crate::distance::haversine_km;
use crate::models::Stop;

/// Builds a visiting order with the greedy nearest-neighbor walk.
///
/// `stops[0]` is the depot. The result starts with the depot and continues
/// with a permutation of `stops[1..]`; the input is never mutated.
///
/// # Examples
///
/// ```
/// use tour_routing::constructive::nearest_neighbor;
/// use tour_routing::models::{Coordinate, Stop};
///
/// let stops = vec![
///     Stop::depot(Coordinate::new(0.0, 0.0)),
///     Stop::new(1, 0.0, 2.0),
///     Stop::new(2, 0.0, 1.0),
/// ];
/// let route = nearest_neighbor(&stops);
/// let ids: Vec<i64> = route.iter().map(|s| s.id()).collect();
/// assert_eq!(ids, vec![-1, 2, 1]);
/// ```
pub fn nearest_neighbor(stops: &[Stop]) -> Vec<Stop> {
    let n = stops.len();
    if n <= 2 {
        return stops.to_vec();
    }

    let mut visited = vec![false; n];
    visited[0] = true;

    let mut route = Vec::with_capacity(n);
    route.push(stops[0].clone());
    let mut current = 0usize;

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for (i, stop) in stops.iter().enumerate().skip(1) {
            if visited[i] {
                continue;
            }
            let d = haversine_km(stops[current].coordinate(), stop.coordinate());
            let closer = match best {
                None => true,
                Some((_, best_d)) => d < best_d,
            };
            if closer {
                best = Some((i, d));
            }
        }

        // One unvisited stop remains per iteration, so `best` is always set.
        if let Some((next, _)) = best {
            visited[next] = true;
            route.push(stops[next].clone());
            current = next;
        }
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, DEPOT_ID};

    fn ids(route: &[Stop]) -> Vec<i64> {
        route.iter().map(Stop::id).collect()
    }

    fn depot_at_origin() -> Stop {
        Stop::depot(Coordinate::new(0.0, 0.0))
    }

    #[test]
    fn test_depot_only() {
        let stops = vec![depot_at_origin()];
        assert_eq!(ids(&nearest_neighbor(&stops)), vec![DEPOT_ID]);
    }

    #[test]
    fn test_single_stop() {
        let stops = vec![depot_at_origin(), Stop::new(1, 0.0, 1.0)];
        assert_eq!(ids(&nearest_neighbor(&stops)), vec![DEPOT_ID, 1]);
    }

    #[test]
    fn test_greedy_walk() {
        // Depot at the origin; (0,1) and (1,0) are exactly equidistant from
        // it, so the first leg is decided by input order.
        let stops = vec![
            depot_at_origin(),
            Stop::new(1, 0.0, 1.0),
            Stop::new(2, 0.0, 2.0),
            Stop::new(3, 1.0, 0.0),
        ];
        assert_eq!(ids(&nearest_neighbor(&stops)), vec![DEPOT_ID, 1, 2, 3]);
    }

    #[test]
    fn test_tie_breaks_by_input_order() {
        let stops_a = vec![
            depot_at_origin(),
            Stop::new(1, 0.0, 1.0),
            Stop::new(2, 1.0, 0.0),
        ];
        let stops_b = vec![
            depot_at_origin(),
            Stop::new(2, 1.0, 0.0),
            Stop::new(1, 0.0, 1.0),
        ];
        // Same stop set, both equidistant from the depot: whichever comes
        // first in the input wins the tie.
        assert_eq!(ids(&nearest_neighbor(&stops_a)), vec![DEPOT_ID, 1, 2]);
        assert_eq!(ids(&nearest_neighbor(&stops_b)), vec![DEPOT_ID, 2, 1]);
    }

    #[test]
    fn test_chooses_nearest() {
        let stops = vec![
            depot_at_origin(),
            Stop::new(1, 0.0, 10.0), // far
            Stop::new(2, 0.0, 1.0),  // near
        ];
        assert_eq!(ids(&nearest_neighbor(&stops)), vec![DEPOT_ID, 2, 1]);
    }

    #[test]
    fn test_permutation_and_input_untouched() {
        let stops = vec![
            depot_at_origin(),
            Stop::new(4, 2.0, -1.0).with_weight(3.0),
            Stop::new(9, -1.0, 4.0).with_time_window("08:00-10:00"),
            Stop::new(2, 0.5, 0.5),
        ];
        let before = stops.clone();
        let route = nearest_neighbor(&stops);
        assert_eq!(stops, before);

        let mut routed_ids = ids(&route[1..]);
        routed_ids.sort_unstable();
        assert_eq!(routed_ids, vec![2, 4, 9]);
        // Domain attributes ride along untouched.
        let heavy = route.iter().find(|s| s.id() == 4).expect("stop 4 routed");
        assert_eq!(heavy.weight(), 3.0);
    }

    #[test]
    fn test_deterministic() {
        let stops = vec![
            depot_at_origin(),
            Stop::new(1, 3.3, -2.2),
            Stop::new(2, -1.7, 0.4),
            Stop::new(3, 2.0, 2.0),
            Stop::new(4, -0.1, -0.1),
        ];
        assert_eq!(ids(&nearest_neighbor(&stops)), ids(&nearest_neighbor(&stops)));
    }
}
