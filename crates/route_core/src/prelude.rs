//! Re-exports of the most commonly used items in `route_core`.
pub use crate::constants::Weight;
pub use crate::error::RouteError;
pub use crate::graph::{Connection, Graph, Location};
pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path;
pub use crate::search::shortest_path::Route;
