use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::graph::{Graph, NodeIndex};

use self::dijkstra::Dijkstra;
use self::shortest_path::Route;

pub mod dijkstra;
pub mod shortest_path;

/// Least-cost route from `source` to `target`.
///
/// Runs a fresh [`Dijkstra`] search; nothing is kept between calls.
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> Result<Route> {
    Dijkstra::new(graph).search(source, target)
}

/// Walks the predecessor links back from `target` and returns the nodes in
/// source-to-target order.
///
/// Expects `target` to be reachable: the walk stops at the first node without
/// a predecessor, which is `source` for every node the search improved.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    predecessors: &FxHashMap<NodeIndex, NodeIndex>,
) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut node = target;

    while let Some(prev_node) = predecessors.get(&node) {
        path.push(*prev_node);
        node = *prev_node;
    }
    debug_assert_eq!(node, source);

    path.reverse();
    path
}

#[cfg(test)]
fn assert_route(
    expected_path: Vec<&str>,
    expected_cost: crate::constants::Weight,
    route: Result<Route>,
) {
    let route = route.expect("expected a route");
    let locations: Vec<&str> = route.locations().iter().map(|l| l.as_str()).collect();
    assert_eq!(expected_path, locations);
    approx::assert_abs_diff_eq!(expected_cost, route.cost(), epsilon = 1e-9);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;

    #[test]
    fn reconstruct_linear_chain() {
        let mut predecessors = FxHashMap::default();
        predecessors.insert(node_index(1), node_index(0));
        predecessors.insert(node_index(2), node_index(1));
        predecessors.insert(node_index(3), node_index(2));

        let path = reconstruct_path(node_index(3), node_index(0), &predecessors);
        assert_eq!(
            path,
            vec![node_index(0), node_index(1), node_index(2), node_index(3)]
        );
    }

    #[test]
    fn reconstruct_ignores_unrelated_entries() {
        let mut predecessors = FxHashMap::default();
        predecessors.insert(node_index(1), node_index(0));
        predecessors.insert(node_index(4), node_index(0));
        predecessors.insert(node_index(5), node_index(4));

        let path = reconstruct_path(node_index(1), node_index(0), &predecessors);
        assert_eq!(path, vec![node_index(0), node_index(1)]);
    }

    #[test]
    fn reconstruct_source_equals_target() {
        let predecessors = FxHashMap::default();
        let path = reconstruct_path(node_index(7), node_index(7), &predecessors);
        assert_eq!(path, vec![node_index(7)]);
    }

    #[test]
    fn shortest_path_entry_point() {
        let mut g = Graph::new();
        crate::connection!(g, "A" => "B", 1.0);
        crate::connection!(g, "B" => "C", 2.0);
        crate::connection!(g, "A" => "C", 4.0);

        assert_route(vec!["A", "B", "C"], 3.0, shortest_path(&g, "A", "C"));
    }
}
