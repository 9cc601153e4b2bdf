use waygraph_core::{Cost, Key};

use crate::PathFinder;
use crate::pathfinder::{FrontierEntry, PathCost, UNREACHABLE};
use crate::traits::Pather;

impl<K: Key> PathFinder<K> {
    /// Compute a multi-source Dijkstra distance map.
    ///
    /// Every source starts at cost 0. Expansion stops when the cumulative
    /// cost exceeds `max_cost`. Returns all reached waypoints in
    /// finalization order; the underlying cost map stays queryable through
    /// [`dijkstra_cost`](Self::dijkstra_cost) until the next map query,
    /// surviving interleaved [`astar_path`](Self::astar_path) calls.
    pub fn dijkstra_map<P: Pather<K>>(
        &mut self,
        pather: &P,
        sources: &[K],
        max_cost: Cost,
    ) -> &[PathCost<K>] {
        self.dijkstra_map.clear();
        self.dijkstra_results.clear();
        self.closed.clear();
        self.open.clear();

        // Seed sources.
        for src in sources {
            if self.dijkstra_map.contains_key(src) {
                continue;
            }
            self.dijkstra_map.insert(src.clone(), 0);
            self.open.push(FrontierEntry {
                f: 0,
                node: src.clone(),
            });
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = self.open.pop() {
            let cur = current.node;
            if self.closed.contains(&cur) {
                continue;
            }
            self.closed.insert(cur.clone());

            let current_cost = self.dijkstra_map[&cur];
            self.dijkstra_results.push(PathCost {
                node: cur.clone(),
                cost: current_cost,
            });

            nbuf.clear();
            pather.neighbors(&cur, &mut nbuf);

            for (neighbor, weight) in nbuf.drain(..) {
                let tentative = current_cost + weight;
                if tentative > max_cost {
                    continue;
                }
                let known = self
                    .dijkstra_map
                    .get(&neighbor)
                    .copied()
                    .unwrap_or(UNREACHABLE);
                if tentative >= known {
                    continue;
                }
                self.dijkstra_map.insert(neighbor.clone(), tentative);
                self.open.push(FrontierEntry {
                    f: tentative,
                    node: neighbor,
                });
            }
        }

        self.nbuf = nbuf;
        &self.dijkstra_results
    }

    /// Query the cost of a waypoint in the last computed Dijkstra map.
    ///
    /// Returns [`UNREACHABLE`] for waypoints the last
    /// [`dijkstra_map`](Self::dijkstra_map) call did not reach.
    pub fn dijkstra_cost(&self, node: &K) -> Cost {
        self.dijkstra_map
            .get(node)
            .copied()
            .unwrap_or(UNREACHABLE)
    }
}
