use waygraph_core::Key;

use crate::PathFinder;
use crate::pathfinder::{FrontierEntry, NodeState};
use crate::traits::AstarPather;

impl<K: Key> PathFinder<K> {
    /// Compute a least-cost path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if no
    /// path exists. Unknown keys behave as waypoints without neighbors, so
    /// an absent start or goal also yields `None` rather than an error.
    ///
    /// The path is least-cost as long as the pather's estimate never
    /// overestimates the remaining cost; with an overestimating pather the
    /// reported cost may exceed the true minimum. Among equal-cost optima,
    /// which path is reported depends on frontier tie order.
    pub fn astar_path<P: AstarPather<K>>(
        &mut self,
        pather: &P,
        from: &K,
        to: &K,
    ) -> Option<Vec<K>> {
        if from == to {
            return Some(vec![from.clone()]);
        }

        self.nodes.clear();
        self.closed.clear();
        self.open.clear();

        self.nodes.insert(
            from.clone(),
            NodeState {
                g: 0,
                parent: None,
            },
        );
        self.open.push(FrontierEntry {
            f: pather.estimate(from, to),
            node: from.clone(),
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = self.open.pop() else {
                break false;
            };
            let cur = current.node;

            if cur == *to {
                break true;
            }

            // Skip stale entries for already-finalized waypoints.
            if self.closed.contains(&cur) {
                continue;
            }
            self.closed.insert(cur.clone());

            let current_g = self.nodes[&cur].g;

            nbuf.clear();
            pather.neighbors(&cur, &mut nbuf);

            for (neighbor, weight) in nbuf.drain(..) {
                let tentative = current_g + weight;
                let improves = match self.nodes.get(&neighbor) {
                    Some(state) => tentative < state.g,
                    None => true,
                };
                if !improves {
                    continue;
                }
                // Estimates may be UNREACHABLE for exit-less waypoints.
                let f = tentative.saturating_add(pather.estimate(&neighbor, to));
                self.nodes.insert(
                    neighbor.clone(),
                    NodeState {
                        g: tentative,
                        parent: Some(cur.clone()),
                    },
                );
                self.open.push(FrontierEntry { f, node: neighbor });
            }
        };

        self.nbuf = nbuf;

        found.then(|| self.reconstruct(to))
    }
}
