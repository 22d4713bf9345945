//! Terminal state of an algorithm run.

use serde::Serialize;
use thiserror::Error;

use crate::{
    graph::Edge,
    trace::{AlgorithmStep, LinkRef},
    Algorithm,
};

/// Why an algorithm refused to run on its input.
///
/// These are expected input irregularities, not faults: a rejected run still returns an
/// [`AlgorithmResult`] whose only step explains the reason.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum Infeasibility {
    /// A start/end id is not part of the snapshot.
    #[error("node `{id}` does not exist in this topology")]
    UnknownNode {
        /// The offending id
        id: String,
    },

    /// A required start/end id was not supplied.
    #[error("a {role} node must be selected")]
    MissingNode {
        /// Which parameter is missing (`start`, `source`, `sink`)
        role: &'static str,
    },

    /// Dijkstra was given a negative weight.
    #[error("link {link} has negative weight {weight}; Dijkstra requires non-negative weights, use Bellman-Ford instead")]
    NegativeWeight {
        /// The first negative link found
        link: LinkRef,
        /// Its weight
        weight: f64,
    },

    /// Bellman-Ford was given an undirected negative link, which is a two-edge negative cycle.
    #[error("undirected link {link} has negative weight {weight}; it can be crossed back and forth forever, forming a negative cycle")]
    UndirectedNegativeWeight {
        /// The first negative link found
        link: LinkRef,
        /// Its weight
        weight: f64,
    },

    /// A spanning tree was requested on a directed snapshot.
    #[error("minimum spanning trees are only defined for undirected topologies")]
    DirectedGraph,

    /// Max-flow source and sink are the same node.
    #[error("source and sink must differ, both are `{id}`")]
    SameTerminals {
        /// The shared id
        id: String,
    },

    /// Undirected Eulerian precondition failed.
    #[error("{count} nodes have odd degree; an Eulerian walk needs exactly 0 or 2")]
    OddDegree {
        /// Number of odd-degree nodes
        count: usize,
    },

    /// Directed Eulerian precondition failed.
    #[error("in/out degrees are unbalanced ({starts} nodes with one extra outgoing link, {ends} with one extra incoming, {other} off by more); an Eulerian walk needs all balanced or exactly one of each")]
    Unbalanced {
        /// Nodes with `out == in + 1`
        starts: usize,
        /// Nodes with `in == out + 1`
        ends: usize,
        /// Nodes with any other imbalance
        other: usize,
    },

    /// The links do not all lie in one connected component.
    #[error("links are split across disconnected parts of the topology; no single walk can cover them all")]
    DisconnectedEdges,

    /// The snapshot has no nodes.
    #[error("the topology has no nodes")]
    EmptyGraph,
}

/// Result of a BFS or DFS.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Traversal {
    /// Start node
    pub start: String,
    /// Nodes in visitation order
    pub order: Vec<String>,
    /// Discovery edges, in discovery order
    pub tree: Vec<Edge>,
}

/// Final distance of one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDistance {
    /// Node id
    pub node: String,
    /// Distance from the source, `None` when unreachable
    pub distance: Option<f64>,
}

/// The answer to a source-to-destination query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Requested destination
    pub target: String,
    /// Node sequence from source to target, empty when unreachable
    pub path: Vec<String>,
    /// Total cost, `None` when unreachable
    pub cost: Option<f64>,
}

/// Result of Dijkstra or Bellman-Ford.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortestPaths {
    /// Source node
    pub source: String,
    /// Distances in snapshot node order
    pub distances: Vec<NodeDistance>,
    /// Shortest-path tree edges, oriented away from the source
    pub tree: Vec<Edge>,
    /// Present when a destination was requested
    pub route: Option<Route>,
    /// Nodes left at infinite distance (only filled when no destination was requested)
    pub unreachable: Vec<String>,
}

impl ShortestPaths {
    /// Distance to `node`; `None` if unreachable or unknown.
    #[must_use]
    pub fn distance_to(&self, node: &str) -> Option<f64> {
        self.distances
            .iter()
            .find(|entry| entry.node == node)
            .and_then(|entry| entry.distance)
    }
}

/// Result of Prim or Kruskal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanningTree {
    /// Accepted edges, in acceptance order
    pub edges: Vec<Edge>,
    /// Sum of accepted edge weights
    pub total_cost: f64,
    /// Nodes touched by the tree, in the order they joined it
    pub nodes: Vec<String>,
    /// `true` when the topology is disconnected and only a forest could be built
    pub is_forest: bool,
}

/// Net flow on one link.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeFlow {
    /// Node the flow leaves
    pub source: String,
    /// Node the flow enters
    pub target: String,
    /// Units of flow, never negative
    pub flow: f64,
    /// Capacity between the two nodes
    pub capacity: f64,
}

/// Result of Edmonds-Karp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxFlow {
    /// Source node
    pub source: String,
    /// Sink node
    pub sink: String,
    /// Maximum flow value
    pub value: f64,
    /// Net flow per node pair, in flow direction (zero flows keep link orientation)
    pub flows: Vec<EdgeFlow>,
    /// Augmenting paths in the order they were used
    pub augmenting_paths: Vec<Vec<String>>,
    /// Nodes still reachable from the source in the final residual graph
    pub source_side: Vec<String>,
    /// Links crossing from the source side to the sink side
    pub cut: Vec<Edge>,
}

impl MaxFlow {
    /// Total capacity of the links in [`cut`](Self::cut).
    #[must_use]
    pub fn cut_capacity(&self) -> f64 {
        self.cut.iter().map(Edge::effective_capacity).sum()
    }
}

/// Whether an Eulerian walk returns to its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WalkShape {
    /// Closed walk, start equals end
    Circuit,
    /// Open walk between the two odd (or unbalanced) nodes
    Path,
}

/// Result of Fleury or Hierholzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EulerianWalk {
    /// Circuit or open path
    pub shape: WalkShape,
    /// Node sequence, one longer than the number of links
    pub walk: Vec<String>,
    /// Links in walk order, oriented in travel direction
    pub edges: Vec<Edge>,
}

/// Result of the two-zone partition check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bipartition {
    /// Whether a valid partition exists
    pub is_bipartite: bool,
    /// First zone (complete only when `is_bipartite`)
    pub set_a: Vec<String>,
    /// Second zone (complete only when `is_bipartite`)
    pub set_b: Vec<String>,
    /// The link whose endpoints ended up in the same zone
    pub conflict: Option<LinkRef>,
}

/// Typed terminal state of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum Outcome {
    /// A precondition failed; nothing was computed
    Rejected(Infeasibility),
    /// BFS / DFS result
    Traversal(Traversal),
    /// Dijkstra / Bellman-Ford result
    ShortestPaths(ShortestPaths),
    /// Bellman-Ford found a negative cycle; no distances are usable
    NegativeCycle {
        /// The link that could still be relaxed after `|V|-1` rounds
        link: LinkRef,
    },
    /// Prim / Kruskal result
    SpanningTree(SpanningTree),
    /// Edmonds-Karp result
    MaxFlow(MaxFlow),
    /// Fleury / Hierholzer result
    EulerianWalk(EulerianWalk),
    /// Bipartite check result
    Bipartition(Bipartition),
}

/// Everything a run produced: the terminal state, the step trace and the log lines.
///
/// `logs[i]` is always `steps[i].log`. A result is never modified after it is returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult {
    /// Which algorithm ran
    pub algorithm: Algorithm,
    /// Terminal state
    pub outcome: Outcome,
    /// One log line per step
    pub logs: Vec<String>,
    /// Recorded steps, in execution order
    pub steps: Vec<AlgorithmStep>,
}

impl AlgorithmResult {
    pub(crate) fn new(algorithm: Algorithm, outcome: Outcome, steps: Vec<AlgorithmStep>) -> Self {
        let logs = steps.iter().map(|step| step.log.clone()).collect();
        Self {
            algorithm,
            outcome,
            logs,
            steps,
        }
    }

    /// The precondition that rejected this run, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<&Infeasibility> {
        match &self.outcome {
            Outcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }

    /// Returns `true` if a precondition rejected the run.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.rejection().is_some()
    }

    /// The last recorded step.
    #[must_use]
    pub fn final_step(&self) -> Option<&AlgorithmStep> {
        self.steps.last()
    }

    /// BFS / DFS payload.
    #[must_use]
    pub fn traversal(&self) -> Option<&Traversal> {
        match &self.outcome {
            Outcome::Traversal(traversal) => Some(traversal),
            _ => None,
        }
    }

    /// Dijkstra / Bellman-Ford payload.
    #[must_use]
    pub fn shortest_paths(&self) -> Option<&ShortestPaths> {
        match &self.outcome {
            Outcome::ShortestPaths(paths) => Some(paths),
            _ => None,
        }
    }

    /// Prim / Kruskal payload.
    #[must_use]
    pub fn spanning_tree(&self) -> Option<&SpanningTree> {
        match &self.outcome {
            Outcome::SpanningTree(tree) => Some(tree),
            _ => None,
        }
    }

    /// Edmonds-Karp payload.
    #[must_use]
    pub fn max_flow(&self) -> Option<&MaxFlow> {
        match &self.outcome {
            Outcome::MaxFlow(flow) => Some(flow),
            _ => None,
        }
    }

    /// Fleury / Hierholzer payload.
    #[must_use]
    pub fn eulerian_walk(&self) -> Option<&EulerianWalk> {
        match &self.outcome {
            Outcome::EulerianWalk(walk) => Some(walk),
            _ => None,
        }
    }

    /// Bipartite check payload.
    #[must_use]
    pub fn bipartition(&self) -> Option<&Bipartition> {
        match &self.outcome {
            Outcome::Bipartition(parts) => Some(parts),
            _ => None,
        }
    }

    /// Edges a renderer should emphasise for the final state.
    ///
    /// Tree edges for traversals, spanning trees and shortest-path trees; the route for a
    /// destination query; the walk for Eulerian runs; links carrying flow for max-flow.
    #[must_use]
    pub fn highlighted_edges(&self) -> Vec<Edge> {
        match &self.outcome {
            Outcome::Traversal(traversal) => traversal.tree.clone(),
            Outcome::ShortestPaths(paths) => match &paths.route {
                Some(route) => self
                    .final_step()
                    .and_then(|step| step.traversed_edges.clone())
                    .filter(|_| route.cost.is_some())
                    .unwrap_or_default(),
                None => paths.tree.clone(),
            },
            Outcome::SpanningTree(tree) => tree.edges.clone(),
            Outcome::MaxFlow(flow) => flow
                .flows
                .iter()
                .filter(|entry| entry.flow > 0.0)
                .map(|entry| Edge::new(&entry.source, &entry.target, entry.flow))
                .collect(),
            Outcome::EulerianWalk(walk) => walk.edges.clone(),
            Outcome::Rejected(_) | Outcome::NegativeCycle { .. } | Outcome::Bipartition(_) => {
                Vec::new()
            }
        }
    }
}
