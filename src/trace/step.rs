//! A single recorded state of an algorithm run.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::graph::Edge;

/// Identifies a link by its travelled orientation.
///
/// For undirected snapshots `source`/`target` follow the direction the algorithm crossed
/// the link in, which may be the reverse of how the link is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LinkRef {
    /// Node the link was entered from
    pub source: String,
    /// Node the link leads to
    pub target: String,
}

impl LinkRef {
    /// Creates a new link reference.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The key used in [`AlgorithmStep::flow_details`], `"source->target"`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}->{}", self.source, self.target)
    }
}

impl fmt::Display for LinkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

impl From<&Edge> for LinkRef {
    fn from(edge: &Edge) -> Self {
        LinkRef::new(edge.source.clone(), edge.target.clone())
    }
}

/// The two zones of a (partial) bipartition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSets {
    /// Nodes coloured with the first colour
    pub set_a: Vec<String>,
    /// Nodes coloured with the second colour
    pub set_b: Vec<String>,
}

/// One entry of the step trace.
///
/// Every optional field, when present, holds the **cumulative** state up to and including
/// this step, as an owned copy. A viewer can render step *i* on its own without replaying
/// the steps before it, and later steps can never alter what an earlier step shows.
///
/// Steps are built with the `with_*` methods, each of which copies its argument:
///
/// ```rust
/// use topograph::{AlgorithmStep, LinkRef};
///
/// let visited = vec!["A".to_string(), "B".to_string()];
/// let step = AlgorithmStep::new("Discovered B from A")
///     .at_node("B")
///     .on_link(LinkRef::new("A", "B"))
///     .with_visited(&visited);
///
/// assert_eq!(step.visited.as_deref(), Some(&visited[..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmStep {
    /// Human readable description of what happened
    pub log: String,
    /// Node the algorithm is working on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_node_id: Option<String>,
    /// Link the algorithm is working on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_link_id: Option<LinkRef>,
    /// Nodes visited so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited: Option<Vec<String>>,
    /// A node sequence (shortest path, augmenting path, Eulerian walk so far)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    /// Accepted tree edges (spanning trees, shortest-path trees)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst_links: Option<Vec<Edge>>,
    /// Edges crossed so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traversed_edges: Option<Vec<Edge>>,
    /// Current flow per link, keyed by [`LinkRef::key`] in flow direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_details: Option<BTreeMap<String, f64>>,
    /// Current two-zone partition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bipartite_sets: Option<ZoneSets>,
}

impl AlgorithmStep {
    /// Creates a step carrying only a log line.
    #[must_use]
    pub fn new(log: impl Into<String>) -> Self {
        Self {
            log: log.into(),
            ..Self::default()
        }
    }

    /// Sets the node being worked on.
    #[must_use]
    pub fn at_node(mut self, id: &str) -> Self {
        self.current_node_id = Some(id.to_string());
        self
    }

    /// Sets the link being worked on.
    #[must_use]
    pub fn on_link(mut self, link: LinkRef) -> Self {
        self.current_link_id = Some(link);
        self
    }

    /// Records a copy of the visited set.
    #[must_use]
    pub fn with_visited(mut self, visited: &[String]) -> Self {
        self.visited = Some(visited.to_vec());
        self
    }

    /// Records a copy of a node sequence.
    #[must_use]
    pub fn with_path(mut self, path: &[String]) -> Self {
        self.path = Some(path.to_vec());
        self
    }

    /// Records a copy of the accepted tree edges.
    #[must_use]
    pub fn with_mst_links(mut self, links: &[Edge]) -> Self {
        self.mst_links = Some(links.to_vec());
        self
    }

    /// Records a copy of the traversed edges.
    #[must_use]
    pub fn with_traversed(mut self, edges: &[Edge]) -> Self {
        self.traversed_edges = Some(edges.to_vec());
        self
    }

    /// Records a copy of the per-link flow map.
    #[must_use]
    pub fn with_flow(mut self, flow: &BTreeMap<String, f64>) -> Self {
        self.flow_details = Some(flow.clone());
        self
    }

    /// Records a copy of the two zones.
    #[must_use]
    pub fn with_zones(mut self, set_a: &[String], set_b: &[String]) -> Self {
        self.bipartite_sets = Some(ZoneSets {
            set_a: set_a.to_vec(),
            set_b: set_b.to_vec(),
        });
        self
    }
}
