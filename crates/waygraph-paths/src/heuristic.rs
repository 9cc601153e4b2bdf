use waygraph_core::{Cost, Key, WayGraph};

use crate::pathfinder::UNREACHABLE;

/// Local cheapest-exit estimate of the remaining cost from `from` to `goal`.
///
/// If a direct `from -> goal` edge exists, its weight is returned exactly;
/// otherwise the minimum outgoing weight among `from`'s neighbors, and
/// [`UNREACHABLE`] for waypoints with no exits at all.
///
/// Evaluating it costs O(degree) and needs no precomputation, but it is not
/// admissible: the direct-edge rule returns that edge's weight even when a
/// cheaper multi-hop route to the goal exists, so it can overestimate. A
/// search ordered by it behaves greedily around such edges and may report a
/// suboptimal path.
pub fn cheapest_exit<K: Key>(graph: &WayGraph<K>, from: &K, goal: &K) -> Cost {
    if let Some(weight) = graph.edge(from, goal) {
        return weight;
    }
    graph
        .neighbors(from)
        .map(|(_, weight)| weight)
        .min()
        .unwrap_or(UNREACHABLE)
}
