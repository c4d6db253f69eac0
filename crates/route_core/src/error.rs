use thiserror::Error;

use crate::{constants::Weight, graph::Location};

/// Convenient result alias for routing operations.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors raised while building the graph or answering a route query.
///
/// All variants are recoverable: a failed query yields no route but leaves the
/// graph untouched, so callers can report the error and keep going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Raised when a connection cost is negative, NaN or infinite.
    #[error("invalid cost {cost} for connection {from} -> {to}: cost must be a finite, non-negative number")]
    InvalidCost {
        from: Location,
        to: Location,
        cost: Weight,
    },

    /// Raised when the query origin has no outgoing connections in the graph.
    #[error("origin '{location}' is not registered in the map")]
    UnknownSource { location: Location },

    /// Raised when the target cannot be reached from the origin.
    #[error("there are no registered routes from '{from}' to '{to}'")]
    NoPath { from: Location, to: Location },
}
