//! Route search over keyed weighted graphs.
//!
//! This crate provides best-first search between named waypoints of a
//! [`WayGraph`](waygraph_core::WayGraph):
//!
//! - **A\*** least-cost route search ([`PathFinder::astar_path`])
//! - **Dijkstra** multi-source distance maps ([`PathFinder::dijkstra_map`])
//!
//! All queries go through [`PathFinder`], which owns the frontier, cost
//! maps and scratch buffers so that repeated queries reuse their
//! allocations.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`Pather`] | A* |
//!
//! Both traits are implemented for `WayGraph` itself; the A* estimate it
//! uses is the local [`cheapest_exit`] heuristic, which can overestimate.
//! See its documentation for the consequences.

mod astar;
mod dijkstra;
mod heuristic;
mod path;
mod pathfinder;
mod traits;

#[cfg(test)]
mod fixtures;

pub use heuristic::cheapest_exit;
pub use path::path_cost;
pub use pathfinder::{PathCost, PathFinder, UNREACHABLE};
pub use traits::{AstarPather, Pather};
