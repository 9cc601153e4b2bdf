//! Shared helpers for the waygraph demo binaries.

use std::error::Error;
use std::fs;
use std::path::Path;

use waygraph_core::WayGraph;

/// Load a graph from a JSON file shaped as `{node: {neighbor: weight}}`.
///
/// Edges are taken exactly as listed; a file that wants symmetric links
/// lists both directions, like `data/campus.json` does.
pub fn load_graph(path: &Path) -> Result<WayGraph<String>, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let graph = serde_json::from_str(&data)?;
    Ok(graph)
}
