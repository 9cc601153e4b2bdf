use waygraph_core::{Cost, Key, WayGraph};

/// Total weight of the consecutive edges along `path`.
///
/// Returns `None` as soon as one consecutive pair is not an edge of the
/// graph, which makes this double as a walk-validity check. Empty and
/// single-waypoint paths cost `Some(0)`.
pub fn path_cost<K: Key>(graph: &WayGraph<K>, path: &[K]) -> Option<Cost> {
    let mut total = 0;
    for pair in path.windows(2) {
        total += graph.edge(&pair[0], &pair[1])?;
    }
    Some(total)
}
