use std::collections::HashMap;

use crate::{Cost, Key};

/// A static weighted graph of named waypoints.
///
/// Stored as adjacency: waypoint key to (neighbor key to edge weight). Every
/// entry is directed; callers that want an undirected graph declare both
/// directions, either explicitly via [`insert_edge`](Self::insert_edge) or
/// with the [`link`](Self::link) convenience. Searches only ever follow the
/// adjacency actually present; symmetry is never assumed or enforced.
///
/// Keys that are absent from the outer map behave as waypoints with no
/// neighbors; queries about them return empty iterators rather than panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WayGraph<K: Key> {
    adjacency: HashMap<K, HashMap<K, Cost>>,
}

impl<K: Key> Default for WayGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> WayGraph<K> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Insert a directed edge from `from` to `to` with the given weight.
    ///
    /// Weights must be non-negative. Re-inserting an existing edge replaces
    /// its weight.
    pub fn insert_edge(&mut self, from: K, to: K, weight: Cost) {
        debug_assert!(weight >= 0, "edge weights must be non-negative");
        self.adjacency.entry(from).or_default().insert(to, weight);
    }

    /// Insert the edge in both directions with the same weight.
    pub fn link(&mut self, a: K, b: K, weight: Cost) {
        self.insert_edge(a.clone(), b.clone(), weight);
        self.insert_edge(b, a, weight);
    }

    /// The weight of the direct edge from `from` to `to`, if one exists.
    #[inline]
    pub fn edge(&self, from: &K, to: &K) -> Option<Cost> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Iterate over the neighbors of `node` with their edge weights.
    ///
    /// Empty for keys without an adjacency entry.
    pub fn neighbors(&self, node: &K) -> impl Iterator<Item = (&K, Cost)> {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .map(|(k, &w)| (k, w))
    }

    /// Whether `node` has an adjacency entry.
    #[inline]
    pub fn contains(&self, node: &K) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Iterate over all waypoint keys that have an adjacency entry.
    pub fn nodes(&self) -> impl Iterator<Item = &K> {
        self.adjacency.keys()
    }

    /// Number of waypoints with an adjacency entry.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no waypoints at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<K: Key> FromIterator<(K, K, Cost)> for WayGraph<K> {
    /// Build a graph from directed `(from, to, weight)` triples.
    fn from_iter<I: IntoIterator<Item = (K, K, Cost)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in iter {
            graph.insert_edge(from, to, weight);
        }
        graph
    }
}

#[cfg(feature = "serde")]
impl<K: Key + serde::Serialize> serde::Serialize for WayGraph<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.adjacency.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: Key + serde::Deserialize<'de>> serde::Deserialize<'de> for WayGraph<K> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let adjacency = HashMap::deserialize(deserializer)?;
        Ok(Self { adjacency })
    }
}
