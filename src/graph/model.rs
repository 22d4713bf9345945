//! Topology snapshot types.
//!
//! A [`Graph`] is the value a collaborator hands to the engine: a list of [`Node`]s, a list
//! of [`Edge`]s (called *links* on the wire, matching the saved topology format) and a
//! direction flag. The engine never mutates a snapshot; every algorithm derives its own
//! private views from it.
//!
//! Undirected links are stored exactly once. Both orientations only appear in derived
//! views such as [`crate::graph::Adjacency`].

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// The role of a device in the topology.
///
/// The kind is purely descriptive: no algorithm looks at it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Layer 3 device forwarding between networks
    #[default]
    Router,
    /// Layer 2 device forwarding inside a network
    Switch,
    /// End-user host
    Pc,
    /// Service host
    Server,
}

/// A device in the topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier, the only field algorithms use
    pub id: String,
    /// Human readable label
    #[serde(default)]
    pub label: String,
    /// Device role
    #[serde(default)]
    pub kind: NodeKind,
}

impl Node {
    /// Creates a node whose label equals its id.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            kind,
        }
    }

    /// Replaces the label of this node.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A link between two devices.
///
/// `weight` drives the cost based algorithms (shortest paths, spanning trees). `capacity`
/// drives max-flow and falls back to `weight` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Id of the source node
    pub source: String,
    /// Id of the target node
    pub target: String,
    /// Cost of crossing the link
    pub weight: f64,
    /// Throughput of the link, `None` means "same as weight"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
}

impl Edge {
    /// Creates a link without an explicit capacity.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
            capacity: None,
        }
    }

    /// Sets an explicit capacity for max-flow computations.
    #[must_use]
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// The capacity used by max-flow: the explicit capacity, or the weight.
    #[must_use]
    pub fn effective_capacity(&self) -> f64 {
        self.capacity.unwrap_or(self.weight)
    }

    /// Returns `true` if this link joins `a` and `b`.
    ///
    /// For undirected graphs the orientation of the stored link does not matter.
    #[must_use]
    pub fn connects(&self, a: &str, b: &str, directed: bool) -> bool {
        (self.source == a && self.target == b)
            || (!directed && self.source == b && self.target == a)
    }

    /// Returns `true` if source and target are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

/// A topology snapshot.
///
/// # Examples
///
/// ```rust
/// use topograph::{Edge, Graph, NodeKind};
///
/// let graph = Graph::undirected()
///     .with_node("A", NodeKind::Router)
///     .with_node("B", NodeKind::Switch)
///     .with_link(Edge::new("A", "B", 1.0));
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.link_count(), 1);
/// assert!(!graph.is_directed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    /// Devices, ids are expected to be unique
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Links between devices
    #[serde(default)]
    pub links: Vec<Edge>,
    /// Whether links are one-way
    #[serde(default)]
    pub is_directed: bool,
}

impl Graph {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new(is_directed: bool) -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            is_directed,
        }
    }

    /// Creates an empty directed snapshot.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected snapshot.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Appends a node.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Appends a link.
    pub fn add_link(&mut self, link: Edge) {
        self.links.push(link);
    }

    /// Builder form of [`add_node`](Self::add_node).
    #[must_use]
    pub fn with_node(mut self, id: impl Into<String>, kind: NodeKind) -> Self {
        self.add_node(Node::new(id, kind));
        self
    }

    /// Builder form of [`add_link`](Self::add_link).
    #[must_use]
    pub fn with_link(mut self, link: Edge) -> Self {
        self.add_link(link);
        self
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Returns `true` if a node with this id exists.
    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the snapshot has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the first link with a negative weight, if any.
    #[must_use]
    pub fn first_negative_link(&self) -> Option<&Edge> {
        self.links.iter().find(|link| link.weight < 0.0)
    }
}
