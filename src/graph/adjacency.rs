//! Neighbour-list view of a topology snapshot.
//!
//! This module provides [`Adjacency`], the view every algorithm builds at the start of a
//! run. It maps string node ids to dense [`NodeIndex`] positions and stores, per node, the
//! list of outgoing [`Neighbor`] entries together with their weight and capacity.
//!
//! For undirected snapshots every link produces two entries (one per orientation); the
//! snapshot itself still stores the link once. The view is never cached: building it is
//! cheap at topology scale, and a fresh view per call cannot go stale when the collaborator
//! edits the graph between runs.
//!
//! # Examples
//!
//! ```rust
//! use topograph::{build_adjacency, Edge, Graph, NodeKind};
//!
//! let graph = Graph::undirected()
//!     .with_node("A", NodeKind::Router)
//!     .with_node("B", NodeKind::Router)
//!     .with_link(Edge::new("A", "B", 3.0));
//!
//! let view = build_adjacency(&graph);
//! let b = view.index_of("B").unwrap();
//! assert_eq!(view.neighbors(b).len(), 1); // mirrored entry B -> A
//! assert_eq!(view.id(view.neighbors(b)[0].node), "A");
//! ```

use std::collections::HashMap;

use crate::{
    graph::{model::Edge, GraphBase, Graph, NodeIndex, Successors},
    trace::LinkRef,
};

/// One outgoing entry of an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// The node at the far end of the link
    pub node: NodeIndex,
    /// Weight of the link
    pub weight: f64,
    /// Effective capacity of the link (weight when the link has none)
    pub capacity: f64,
    /// Position of the originating link in [`Graph::links`]
    pub link: usize,
}

/// A neighbour-list view over a [`Graph`].
///
/// Nodes keep the order of the snapshot; adjacency entries keep the order of the links,
/// with the mirrored entry of an undirected link appended to the target's list at the
/// moment the link is processed.
#[derive(Debug, Clone)]
pub struct Adjacency {
    /// Node ids, indexed by `NodeIndex`
    ids: Vec<String>,
    /// Map from node id to `NodeIndex`
    index: HashMap<String, NodeIndex>,
    /// Outgoing entries per node
    lists: Vec<Vec<Neighbor>>,
    /// Whether links were added one-way only
    directed: bool,
}

impl Adjacency {
    /// Builds the view honouring the snapshot's direction flag.
    #[must_use]
    pub fn build(graph: &Graph) -> Self {
        Self::with_direction(graph, graph.is_directed)
    }

    /// Builds an undirected view regardless of the snapshot's direction flag.
    ///
    /// Used where the answer depends only on which nodes are connected, such as the
    /// two-zone partition check.
    #[must_use]
    pub fn undirected(graph: &Graph) -> Self {
        Self::with_direction(graph, false)
    }

    fn with_direction(graph: &Graph, directed: bool) -> Self {
        let mut ids = Vec::with_capacity(graph.nodes.len());
        let mut index = HashMap::with_capacity(graph.nodes.len());

        for node in &graph.nodes {
            if index.contains_key(&node.id) {
                log::warn!("duplicate node id `{}` ignored in adjacency view", node.id);
                continue;
            }
            index.insert(node.id.clone(), NodeIndex::new(ids.len()));
            ids.push(node.id.clone());
        }

        let mut lists = vec![Vec::new(); ids.len()];

        for (position, link) in graph.links.iter().enumerate() {
            let (Some(&from), Some(&to)) = (index.get(&link.source), index.get(&link.target))
            else {
                log::warn!(
                    "link {} -> {} references a missing node, skipped",
                    link.source,
                    link.target
                );
                continue;
            };

            let capacity = link.effective_capacity();
            lists[from.index()].push(Neighbor {
                node: to,
                weight: link.weight,
                capacity,
                link: position,
            });
            if !directed {
                lists[to.index()].push(Neighbor {
                    node: from,
                    weight: link.weight,
                    capacity,
                    link: position,
                });
            }
        }

        Self {
            ids,
            index,
            lists,
            directed,
        }
    }

    /// Returns `true` if entries exist only in link direction.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the `NodeIndex` for a node id, if it exists.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Returns the node id at `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` was not produced by this view.
    #[must_use]
    pub fn id(&self, node: NodeIndex) -> &str {
        &self.ids[node.index()]
    }

    /// All node ids in index order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Outgoing entries of `node`.
    #[must_use]
    pub fn neighbors(&self, node: NodeIndex) -> &[Neighbor] {
        &self.lists[node.index()]
    }

    /// Total number of adjacency entries (twice the link count for undirected views).
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// The link `from -> entry.node` as an owned [`Edge`], oriented in travel direction.
    #[must_use]
    pub fn edge(&self, from: NodeIndex, entry: &Neighbor) -> Edge {
        Edge {
            source: self.id(from).to_string(),
            target: self.id(entry.node).to_string(),
            weight: entry.weight,
            capacity: Some(entry.capacity),
        }
    }

    /// The link `from -> to` as a [`LinkRef`].
    #[must_use]
    pub fn link_ref(&self, from: NodeIndex, to: NodeIndex) -> LinkRef {
        LinkRef::new(self.id(from), self.id(to))
    }

    /// Maps node indices back to node ids.
    #[must_use]
    pub fn names(&self, nodes: &[NodeIndex]) -> Vec<String> {
        nodes.iter().map(|&node| self.id(node).to_string()).collect()
    }
}

impl GraphBase for Adjacency {
    fn node_count(&self) -> usize {
        self.ids.len()
    }
}

impl Successors for Adjacency {
    fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> {
        self.lists[node.index()].iter().map(|entry| entry.node)
    }
}

/// Builds the adjacency view of a snapshot.
///
/// Shorthand for [`Adjacency::build`].
#[must_use]
pub fn build_adjacency(graph: &Graph) -> Adjacency {
    Adjacency::build(graph)
}
