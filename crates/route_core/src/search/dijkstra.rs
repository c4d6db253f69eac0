use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::error::{Result, RouteError};
use crate::graph::*;
use crate::search::shortest_path::Route;
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::FxHashMap;

/// Frontier entry: a node together with its tentative cost at push time.
#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) cost: Weight,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, cost: Weight) -> Self {
        Self { node_idx, cost }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.cost == self.cost
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the cheapest candidate sits at the top of the heap.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Least-cost route from `source` to `target`.
    ///
    /// Fails with [`RouteError::UnknownSource`] if `source` has no outgoing
    /// connections and with [`RouteError::NoPath`] if `target` cannot be
    /// reached.
    pub fn search(&mut self, source: &str, target: &str) -> Result<Route> {
        self.stats.init();
        let result = self.run(source, target);
        self.stats.finish();

        match &result {
            Ok(route) => {
                debug!("Path found: {}", route);
                info!(
                    "Path found: {:?}/{} nodes settled",
                    self.stats.duration.unwrap_or_default(),
                    self.stats.nodes_settled
                );
            }
            Err(err) => {
                info!(
                    "No path found ({}): {:?}/{} nodes settled",
                    err,
                    self.stats.duration.unwrap_or_default(),
                    self.stats.nodes_settled
                );
            }
        }

        result
    }

    fn run(&mut self, source: &str, target: &str) -> Result<Route> {
        let source_idx = match self.g.node_index(source) {
            Some(node_idx) if self.g.out_degree(node_idx) > 0 => node_idx,
            _ => {
                return Err(RouteError::UnknownSource {
                    location: source.into(),
                })
            }
        };
        let no_path = || RouteError::NoPath {
            from: source.into(),
            to: target.into(),
        };
        let target_idx = self.g.node_index(target).ok_or_else(no_path)?;

        // Absent entries stand for an infinite cost.
        let mut costs: FxHashMap<NodeIndex, Weight> =
            FxHashMap::with_capacity_and_hasher(self.g.num_locations(), Default::default());
        let mut predecessors: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
        let mut queue = BinaryHeap::new();

        costs.insert(source_idx, 0.0);
        queue.push(Candidate::new(source_idx, 0.0));

        while let Some(Candidate { node_idx, cost }) = queue.pop() {
            if node_idx == target_idx {
                self.stats.nodes_settled += 1;
                break;
            }

            // Stale entry, a cheaper one was already settled
            if costs.get(&node_idx).map_or(false, |&best| cost > best) {
                continue;
            }
            self.stats.nodes_settled += 1;

            for connection in self.g.neighbors_outgoing(node_idx) {
                let new_cost = cost + connection.cost();
                let improves = costs
                    .get(&connection.target())
                    .map_or(true, |&best| new_cost < best);

                if improves {
                    costs.insert(connection.target(), new_cost);
                    predecessors.insert(connection.target(), node_idx);
                    queue.push(Candidate::new(connection.target(), new_cost));
                }
            }
        }

        let cost = *costs.get(&target_idx).ok_or_else(no_path)?;

        let locations = super::reconstruct_path(target_idx, source_idx, &predecessors)
            .into_iter()
            .map(|node_idx| self.g.resolve(node_idx).clone())
            .collect();

        Ok(Route::new(locations, cost))
    }
}
