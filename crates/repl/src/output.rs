use std::fmt::Write;

use route_core::{
    error::RouteError,
    graph::Graph,
    search::shortest_path::Route,
    statistics::{average_out_degree, max_out_degree, SearchStats},
};

pub fn route_found(route: &Route, stats: &SearchStats) -> String {
    format!(
        ">>> ROUTE FOUND <<<\nPath: {}\nTotal cost (shortest possible): {}\nTook: {:?} ({} locations settled)",
        route,
        route.cost(),
        stats.duration.unwrap_or_default(),
        stats.nodes_settled
    )
}

pub fn route_error(err: &RouteError) -> String {
    match err {
        RouteError::NoPath { to, .. } => {
            format!("Unfortunately there are no registered routes leading to '{}'.", to)
        }
        _ => format!("Error: {}", err),
    }
}

pub fn graph_info(g: &Graph) -> String {
    format!(
        "Graph has {} locations and {} connections (avg. out-degree {:.2}, max {})",
        g.num_locations(),
        g.num_connections(),
        average_out_degree(g),
        max_out_degree(g)
    )
}

/// One line per known location with its number of outgoing connections.
pub fn location_list(g: &Graph) -> String {
    if g.num_locations() == 0 {
        return "No locations registered yet".to_string();
    }

    let mut out = String::new();
    for location in g.known_locations() {
        let degree = g.outgoing(location.as_str()).count();
        let _ = writeln!(out, "{} ({} outgoing)", location, degree);
    }
    out.pop();
    out
}
