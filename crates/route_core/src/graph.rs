use crate::constants::Weight;
use crate::error::{Result, RouteError};
use log::debug;
use rustc_hash::FxHashMap;
use std::{borrow::Borrow, fmt};

/// Default integer type for node and edge indices
pub type DefaultIdx = u32;

/// Named point in the delivery network.
///
/// Names are taken as entered: no trimming or case folding happens here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Location(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Location(name.to_owned())
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Location(name)
    }
}

impl From<&Location> for Location {
    fn from(location: &Location) -> Self {
        location.clone()
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

impl From<DefaultIdx> for NodeIndex {
    fn from(ix: DefaultIdx) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// An invalid `EdgeIndex` used to denote absence of an edge.
    #[inline]
    pub fn end() -> Self {
        EdgeIndex(DefaultIdx::MAX)
    }
}

/// Directed, weighted connection between two locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    source: NodeIndex,
    target: NodeIndex,
    cost: Weight,
}

impl Connection {
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn target(&self) -> NodeIndex {
        self.target
    }

    pub fn cost(&self) -> Weight {
        self.cost
    }
}

/// Directed graph of locations and the connections between them.
///
/// Every location is interned the first time it shows up, whether as source
/// or destination, so destination-only locations still own a `NodeIndex`.
#[derive(Debug, Clone)]
pub struct Graph {
    locations: Vec<Location>,
    index: FxHashMap<Location, NodeIndex>,
    edges_out: Vec<Vec<EdgeIndex>>,
    edges: Vec<Connection>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            locations: Vec::new(),
            index: FxHashMap::default(),
            edges_out: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(num_locations: usize, num_connections: usize) -> Self {
        Self {
            locations: Vec::with_capacity(num_locations),
            index: FxHashMap::with_capacity_and_hasher(num_locations, Default::default()),
            edges_out: Vec::with_capacity(num_locations),
            edges: Vec::with_capacity(num_connections),
        }
    }

    /// Add a directed connection from `source` to `destination`.
    ///
    /// Duplicate connections between the same pair are kept as separate
    /// edges. Fails with [`RouteError::InvalidCost`] if `cost` is negative,
    /// NaN or infinite, in which case the graph is left unchanged.
    ///
    /// **Panics** if the graph is at the maximum number of edges for its index
    /// type
    ///
    /// Returns the index of the new connection.
    pub fn add_connection(
        &mut self,
        source: impl Into<Location>,
        destination: impl Into<Location>,
        cost: Weight,
    ) -> Result<EdgeIndex> {
        let source = source.into();
        let destination = destination.into();

        if !cost.is_finite() || cost < 0.0 {
            return Err(RouteError::InvalidCost {
                from: source,
                to: destination,
                cost,
            });
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        debug!("Adding connection {} -> {} ({})", source, destination, cost);

        let source = self.intern(source);
        let target = self.intern(destination);

        self.edges.push(Connection {
            source,
            target,
            cost,
        });
        self.edges_out[source.index()].push(edge_idx);

        Ok(edge_idx)
    }

    /// Adds every `(source, destination, cost)` triple, stopping at the first
    /// rejected one. Connections added before the failure stay in the graph.
    pub fn add_connections<S, D>(
        &mut self,
        connections: impl IntoIterator<Item = (S, D, Weight)>,
    ) -> Result<()>
    where
        S: Into<Location>,
        D: Into<Location>,
    {
        for (source, destination, cost) in connections {
            self.add_connection(source, destination, cost)?;
        }
        Ok(())
    }

    fn intern(&mut self, location: Location) -> NodeIndex {
        if let Some(node_idx) = self.index.get(&location) {
            return *node_idx;
        }

        let node_idx = NodeIndex::new(self.locations.len());
        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.index.insert(location.clone(), node_idx);
        self.locations.push(location);
        self.edges_out.push(Vec::new());

        node_idx
    }

    /// Outgoing connections of `location` in insertion order.
    ///
    /// Empty for locations that are unknown or only ever used as destination.
    pub fn outgoing<'a>(&'a self, location: &str) -> impl Iterator<Item = &'a Connection> + 'a {
        self.node_index(location)
            .into_iter()
            .flat_map(move |node_idx| self.neighbors_outgoing(node_idx))
    }

    pub fn neighbors_outgoing(&self, node_idx: NodeIndex) -> impl Iterator<Item = &Connection> {
        self.edges_out
            .get(node_idx.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |edge_idx| &self.edges[edge_idx.index()])
    }

    /// Every location that appears as source or destination, each exactly
    /// once, in the order it was first seen.
    pub fn known_locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn node_index(&self, location: &str) -> Option<NodeIndex> {
        self.index.get(location).copied()
    }

    pub fn location(&self, node_idx: NodeIndex) -> Option<&Location> {
        self.locations.get(node_idx.index())
    }

    /// **Panics** if `node_idx` was not handed out by this graph
    pub(crate) fn resolve(&self, node_idx: NodeIndex) -> &Location {
        &self.locations[node_idx.index()]
    }

    pub fn contains(&self, location: &str) -> bool {
        self.index.contains_key(location)
    }

    /// Whether `location` has been used as the source of at least one
    /// connection.
    pub fn has_outgoing(&self, location: &str) -> bool {
        self.node_index(location)
            .map_or(false, |node_idx| !self.edges_out[node_idx.index()].is_empty())
    }

    pub fn out_degree(&self, node_idx: NodeIndex) -> usize {
        self.edges_out.get(node_idx.index()).map_or(0, Vec::len)
    }

    /// Returns an iterator over all connections of the graph
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.edges.iter()
    }

    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    pub fn num_connections(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to add a directed connection with a cost to a graph, panicking on
/// an invalid cost. Meant for tests and sample graphs.
///
/// connection!(g, "A" => "B", 3.0)
#[macro_export]
macro_rules! connection {
    ($graph:expr, $source:expr => $target:expr, $cost:expr) => {
        $graph
            .add_connection($source, $target, $cost)
            .expect("invalid connection cost")
    };
}
