use waygraph_core::{Cost, Key, WayGraph};

use crate::heuristic::cheapest_exit;

/// Minimal search interface: provides weighted neighbor enumeration.
pub trait Pather<K: Key> {
    /// Append `(neighbor, weight)` pairs for `node` into `buf`. The caller
    /// clears `buf` before calling. Weights must be non-negative.
    fn neighbors(&self, node: &K, buf: &mut Vec<(K, Cost)>);
}

/// Pather with a frontier-ordering estimate for A*.
pub trait AstarPather<K: Key>: Pather<K> {
    /// Estimate of the remaining cost from `from` to `goal`.
    ///
    /// Only used to order the frontier. The estimate does not have to be
    /// admissible, but an overestimating implementation degrades the search
    /// toward greedy best-first and the returned path may then be
    /// suboptimal.
    fn estimate(&self, from: &K, goal: &K) -> Cost;
}

impl<K: Key> Pather<K> for WayGraph<K> {
    fn neighbors(&self, node: &K, buf: &mut Vec<(K, Cost)>) {
        buf.extend(self.neighbors(node).map(|(k, w)| (k.clone(), w)));
    }
}

impl<K: Key> AstarPather<K> for WayGraph<K> {
    /// The local cheapest-exit estimate. See [`cheapest_exit`] for its
    /// admissibility caveats.
    fn estimate(&self, from: &K, goal: &K) -> Cost {
        cheapest_exit(self, from, goal)
    }
}
