use std::collections::{BinaryHeap, HashMap, HashSet};

use waygraph_core::{Cost, Key};

/// A waypoint with an associated cost, returned from Dijkstra map queries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCost<K> {
    pub node: K,
    pub cost: Cost,
}

/// Sentinel cost meaning "unreachable".
pub const UNREACHABLE: Cost = Cost::MAX;

// ---------------------------------------------------------------------------
// Internal state for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

/// Best known cost to reach a waypoint, and the predecessor it was reached
/// from (`None` for a search start).
pub(crate) struct NodeState<K> {
    pub(crate) g: Cost,
    pub(crate) parent: Option<K>,
}

/// Frontier entry, ordered by `f` for use in `BinaryHeap`. The same
/// waypoint may appear multiple times; stale entries are skipped on pop.
#[derive(Clone, Eq, PartialEq)]
pub(crate) struct FrontierEntry<K> {
    pub(crate) f: Cost,
    pub(crate) node: K,
}

impl<K: Eq> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl<K: Eq> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Central coordinator for search queries over a keyed graph.
///
/// `PathFinder` owns all per-query state (frontier heap, cost and
/// predecessor maps, finalized set, neighbor scratch buffer) so that
/// repeated queries reuse their allocations. Every query fully resets the
/// state it relies on; nothing carries over between calls except capacity,
/// and the Dijkstra cost map retained for
/// [`dijkstra_cost`](Self::dijkstra_cost) lookups.
///
/// Queries take `&mut self`, so one `PathFinder` serves one search at a
/// time; for parallel searches over a shared graph, give each thread its
/// own finder.
pub struct PathFinder<K> {
    // A* state
    pub(crate) nodes: HashMap<K, NodeState<K>>,
    pub(crate) closed: HashSet<K>,
    pub(crate) open: BinaryHeap<FrontierEntry<K>>,
    // Dijkstra caches, retained between queries for cost lookups
    pub(crate) dijkstra_map: HashMap<K, Cost>,
    pub(crate) dijkstra_results: Vec<PathCost<K>>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<(K, Cost)>,
}

impl<K: Key> Default for PathFinder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> PathFinder<K> {
    /// Create a new `PathFinder` with empty caches.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            closed: HashSet::new(),
            open: BinaryHeap::new(),
            dijkstra_map: HashMap::new(),
            dijkstra_results: Vec::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Reconstruct a start-to-`goal` path by walking predecessor links.
    ///
    /// Must only be called once `goal` has a recorded state; the chain ends
    /// at the search start, whose predecessor is `None`.
    pub(crate) fn reconstruct(&self, goal: &K) -> Vec<K> {
        let mut path = Vec::new();
        let mut cur = Some(goal.clone());
        while let Some(node) = cur {
            cur = self.nodes.get(&node).and_then(|s| s.parent.clone());
            path.push(node);
        }
        path.reverse();
        path
    }
}
