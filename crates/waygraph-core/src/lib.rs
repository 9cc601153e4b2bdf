//! Core types for waygraph: waypoint keys, edge costs, and the adjacency
//! structure shared by all search algorithms.

mod graph;

pub use graph::WayGraph;

use std::hash::Hash;

/// Edge and path costs. All edge weights must be non-negative.
pub type Cost = i64;

/// Bound for waypoint identifiers: opaque, cheaply clonable, hashable keys.
///
/// Blanket-implemented, so `&str`, `String`, integers and the like all
/// qualify without any explicit impl.
pub trait Key: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Key for T {}
