//! Clarke-Wright savings heuristic.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each client on
//! its own chain and merges chains in decreasing order of the saving gained
//! by connecting two clients directly instead of serving each from the
//! depot:
//!
//! ```text
//! s(i, j) = d(depot, i) + d(depot, j) − d(i, j)
//! ```
//!
//! Chains only grow at their two ends; a saving whose stops are interior,
//! or already on the same chain, is skipped. Chain membership is keyed by
//! position index and re-resolved at every step, so later savings see
//! merged chains. This single-vehicle rendition carries no capacity checks:
//! well-formed inputs converge to one chain covering every client.
//!
//! # Complexity
//!
//! O(n² log n) for n clients, dominated by sorting the savings.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4),
//! 568-581.

use crate::distance::haversine_km;
use crate::models::Stop;

/// The distance saved by chaining two clients instead of serving each from
/// the depot. Indexes into the input slice.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: f64,
}

/// Builds a visiting order with the Clarke-Wright savings merges.
///
/// `stops[0]` is the depot. The result starts with the depot and continues
/// with a permutation of `stops[1..]`; the input is never mutated. Up to
/// two clients the input is returned unchanged, skipping the savings
/// machinery entirely.
///
/// # Examples
///
/// ```
/// use tour_routing::constructive::clarke_wright_savings;
/// use tour_routing::models::{Coordinate, Stop};
///
/// let stops = vec![
///     Stop::depot(Coordinate::new(0.0, 0.0)),
///     Stop::new(1, 2.0, 2.0),
///     Stop::new(2, 2.2, 3.0),
///     Stop::new(3, 2.0, 4.0),
/// ];
/// let route = clarke_wright_savings(&stops);
/// let ids: Vec<i64> = route.iter().map(|s| s.id()).collect();
/// assert_eq!(ids, vec![-1, 1, 2, 3]);
/// ```
pub fn clarke_wright_savings(stops: &[Stop]) -> Vec<Stop> {
    let n = stops.len();
    // Zero, one, or two clients: nothing to merge.
    if n <= 3 {
        return stops.to_vec();
    }

    let depot = stops[0].coordinate();
    let num_clients = n - 1;

    // Savings for every unordered client pair, in nested-loop order.
    let mut savings = Vec::with_capacity(num_clients * (num_clients - 1) / 2);
    for i in 1..n {
        for j in (i + 1)..n {
            let value = haversine_km(depot, stops[i].coordinate())
                + haversine_km(depot, stops[j].coordinate())
                - haversine_km(stops[i].coordinate(), stops[j].coordinate());
            savings.push(Saving { i, j, value });
        }
    }

    // Stable descending sort: tied savings keep first-computed order.
    savings.sort_by(|a, b| b.value.total_cmp(&a.value));

    // One chain per client, keyed by position index.
    let mut route_of = vec![0usize; n];
    let mut route_members: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 1..n {
        route_of[i] = i;
        route_members[i].push(i);
    }

    for saving in &savings {
        let ri = route_of[saving.i];
        let rj = route_of[saving.j];

        // Same chain: a merge would close a cycle.
        if ri == rj {
            continue;
        }

        let i_at_start = route_members[ri].first() == Some(&saving.i);
        let i_at_end = route_members[ri].last() == Some(&saving.i);
        let j_at_start = route_members[rj].first() == Some(&saving.j);
        let j_at_end = route_members[rj].last() == Some(&saving.j);

        // Chains grow only at their two ends; when both matched stops sit
        // on the same side, one chain is reversed to line the ends up.
        // Interior stops cannot be merge points.
        let (merge_from, merge_into, reverse_from, reverse_into) = if i_at_end && j_at_start {
            (rj, ri, false, false)
        } else if j_at_end && i_at_start {
            (ri, rj, false, false)
        } else if i_at_end && j_at_end {
            (rj, ri, true, false)
        } else if i_at_start && j_at_start {
            (rj, ri, false, true)
        } else {
            continue;
        };

        let mut from_members = std::mem::take(&mut route_members[merge_from]);
        if reverse_from {
            from_members.reverse();
        }
        if reverse_into {
            route_members[merge_into].reverse();
        }
        route_members[merge_into].append(&mut from_members);

        for &idx in &route_members[merge_into] {
            route_of[idx] = merge_into;
        }
    }

    // Surviving chains join in first-created order; with the complete
    // savings list a single chain survives.
    let mut route = Vec::with_capacity(n);
    route.push(stops[0].clone());
    for members in &route_members {
        for &idx in members {
            route.push(stops[idx].clone());
        }
    }
    route
}
