//! Crate to compute least-cost routes between named locations.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! // Build the graph from directed connections
//! let mut g = Graph::new();
//! g.add_connection("A", "B", 1.0).expect("valid cost");
//! g.add_connection("B", "C", 2.0).expect("valid cost");
//! g.add_connection("A", "C", 4.0).expect("valid cost");
//!
//! // Query the cheapest route
//! let route = shortest_path(&g, "A", "C").expect("C is reachable from A");
//! assert_eq!(route.to_string(), "A -> B -> C");
//! assert_eq!(route.cost(), 3.0);
//!
//! // Failures are typed and leave the graph usable
//! assert!(matches!(
//!     shortest_path(&g, "C", "A"),
//!     Err(RouteError::UnknownSource { .. })
//! ));
//!```
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
