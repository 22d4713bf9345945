//! The traced algorithm suite.
//!
//! Every algorithm is a pure function from a [`Graph`] snapshot (plus node ids where needed)
//! to an [`AlgorithmResult`]. Runs are synchronous and single threaded; each builds its own
//! adjacency view and scratch state and never touches the snapshot.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`bfs`] - Breadth-first search from a start node
//! - [`dfs`] - Depth-first search from a start node, recording discovery edges
//!
//! ## Shortest Paths
//!
//! - [`dijkstra`] - Label-setting search, rejects negative weights
//! - [`bellman_ford`] - Round based relaxation with negative cycle detection
//!
//! ## Spanning Trees
//!
//! - [`prim`] - Grows one tree from a start node, falls back to a forest
//! - [`kruskal`] - Sorted edges with union-find cycle detection
//!
//! ## Flow
//!
//! - [`edmonds_karp`] - Maximum flow with BFS augmenting paths, reports the min cut
//!
//! ## Eulerian Walks
//!
//! - [`fleury`] - Avoids bridges while walking
//! - [`hierholzer`] - Stack based circuit splicing
//!
//! ## Partitioning
//!
//! - [`bipartite`] - Two-zone colouring by BFS
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Needs |
//! |-----------|-----------------|-------|
//! | BFS/DFS | O(V + E) | start |
//! | Dijkstra | O(V² + E) | start, optional end |
//! | Bellman-Ford | O(V · E) | start, optional end |
//! | Prim | O(V² + E) | optional start |
//! | Kruskal | O(E log E) | - |
//! | Edmonds-Karp | O(V · E²) | source, sink |
//! | Fleury | O(E²) | - |
//! | Hierholzer | O(V + E) | - |
//! | Bipartite | O(V + E) | - |
//!
//! # Examples
//!
//! ```rust
//! use topograph::{run, Algorithm, AlgorithmRequest, Edge, Graph, NodeKind};
//!
//! let graph = Graph::undirected()
//!     .with_node("A", NodeKind::Router)
//!     .with_node("B", NodeKind::Router)
//!     .with_node("C", NodeKind::Server)
//!     .with_link(Edge::new("A", "B", 1.0))
//!     .with_link(Edge::new("B", "C", 2.0))
//!     .with_link(Edge::new("A", "C", 4.0));
//!
//! let request = AlgorithmRequest::new(Algorithm::Dijkstra)
//!     .with_start("A")
//!     .with_end("C");
//! let result = run(&graph, &request);
//!
//! let route = result.shortest_paths().unwrap().route.as_ref().unwrap();
//! assert_eq!(route.path, vec!["A", "B", "C"]);
//! assert_eq!(route.cost, Some(3.0));
//! assert_eq!(result.logs.len(), result.steps.len());
//! ```

mod bellman_ford;
mod bipartite;
mod dijkstra;
mod disjoint_set;
mod euler;
mod kruskal;
mod max_flow;
mod paths;
mod prim;
mod traversal;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::{
    graph::{validate, Graph, ValidationConfig},
    trace::{AlgorithmResult, Infeasibility, Trace},
    Error, Result,
};

pub use bellman_ford::bellman_ford;
pub use bipartite::bipartite;
pub use dijkstra::dijkstra;
pub use disjoint_set::DisjointSet;
pub use euler::{fleury, hierholzer};
pub use kruskal::kruskal;
pub use max_flow::edmonds_karp;
pub use prim::prim;
pub use traversal::{bfs, dfs};

/// The closed set of algorithms the engine can run.
///
/// Names are kebab-case both for [`std::str::FromStr`] and for serde, so the same string
/// works on the command line and in JSON requests.
///
/// # Examples
///
/// ```rust
/// use std::str::FromStr;
/// use topograph::Algorithm;
///
/// assert_eq!(Algorithm::from_str("bellman-ford").unwrap(), Algorithm::BellmanFord);
/// assert_eq!(Algorithm::from_str("max-flow").unwrap(), Algorithm::EdmondsKarp);
/// assert_eq!(Algorithm::Hierholzer.to_string(), "hierholzer");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
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
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// Dijkstra shortest paths
    Dijkstra,
    /// Bellman-Ford shortest paths
    BellmanFord,
    /// Prim minimum spanning tree
    Prim,
    /// Kruskal minimum spanning tree
    Kruskal,
    /// Edmonds-Karp maximum flow
    #[strum(
        to_string = "edmonds-karp",
        serialize = "max-flow",
        serialize = "ford-fulkerson"
    )]
    EdmondsKarp,
    /// Fleury Eulerian walk
    Fleury,
    /// Hierholzer Eulerian walk
    Hierholzer,
    /// Two-zone partition check
    Bipartite,
}

impl Algorithm {
    /// Parses a kebab-case algorithm name, aliases included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] if `name` matches no algorithm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topograph::{Algorithm, Error};
    ///
    /// assert_eq!(Algorithm::parse("kruskal")?, Algorithm::Kruskal);
    /// assert!(matches!(Algorithm::parse("astar"), Err(Error::UnknownAlgorithm(_))));
    /// # Ok::<(), topograph::Error>(())
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| Error::UnknownAlgorithm(name.to_string()))
    }

    /// Returns `true` if the algorithm cannot run without a start (or source) node.
    #[must_use]
    pub fn needs_start(self) -> bool {
        matches!(
            self,
            Algorithm::Bfs
                | Algorithm::Dfs
                | Algorithm::Dijkstra
                | Algorithm::BellmanFord
                | Algorithm::EdmondsKarp
        )
    }

    /// Returns `true` if the algorithm uses a start node when one is given.
    #[must_use]
    pub fn accepts_start(self) -> bool {
        self.needs_start() || self == Algorithm::Prim
    }

    /// Returns `true` if the algorithm cannot run without an end (or sink) node.
    #[must_use]
    pub fn needs_end(self) -> bool {
        self == Algorithm::EdmondsKarp
    }

    /// Returns `true` if the algorithm uses an end node when one is given.
    #[must_use]
    pub fn accepts_end(self) -> bool {
        matches!(
            self,
            Algorithm::Dijkstra | Algorithm::BellmanFord | Algorithm::EdmondsKarp
        )
    }

    /// What the start parameter means for this algorithm.
    #[must_use]
    pub fn start_role(self) -> &'static str {
        match self {
            Algorithm::EdmondsKarp => "source",
            _ => "start",
        }
    }

    /// What the end parameter means for this algorithm.
    #[must_use]
    pub fn end_role(self) -> &'static str {
        match self {
            Algorithm::EdmondsKarp => "sink",
            _ => "end",
        }
    }

    /// One line summary for catalogues and help output.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-first traversal from a start node",
            Algorithm::Dfs => "Depth-first traversal from a start node",
            Algorithm::Dijkstra => "Shortest paths with non-negative weights",
            Algorithm::BellmanFord => "Shortest paths with negative weights and cycle detection",
            Algorithm::Prim => "Minimum spanning tree grown from one node",
            Algorithm::Kruskal => "Minimum spanning tree from sorted links",
            Algorithm::EdmondsKarp => "Maximum flow and minimum cut between two nodes",
            Algorithm::Fleury => "Eulerian walk that avoids bridges",
            Algorithm::Hierholzer => "Eulerian walk by circuit splicing",
            Algorithm::Bipartite => "Split the topology into two zones",
        }
    }
}

/// A request to run one algorithm.
///
/// `start` doubles as the max-flow source and `end` as the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmRequest {
    /// The algorithm to run
    pub algorithm: Algorithm,
    /// Start / source node id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End / sink node id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl AlgorithmRequest {
    /// Creates a request without node parameters.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            start: None,
            end: None,
        }
    }

    /// Sets the start (or source) node.
    #[must_use]
    pub fn with_start(mut self, id: impl Into<String>) -> Self {
        self.start = Some(id.into());
        self
    }

    /// Sets the end (or sink) node.
    #[must_use]
    pub fn with_end(mut self, id: impl Into<String>) -> Self {
        self.end = Some(id.into());
        self
    }
}

/// Runs the requested algorithm on `graph`.
///
/// Missing required ids are reported as [`Infeasibility::MissingNode`] and unknown ids as
/// [`Infeasibility::UnknownNode`]; this function never fails.
#[must_use]
pub fn run(graph: &Graph, request: &AlgorithmRequest) -> AlgorithmResult {
    let algorithm = request.algorithm;
    let start = request.start.as_deref();
    let end = request.end.as_deref();

    log::info!(
        "running {} on {} nodes and {} links",
        algorithm,
        graph.node_count(),
        graph.link_count()
    );

    let result = match algorithm {
        Algorithm::Bfs => match start {
            Some(start) => bfs(graph, start),
            None => missing(algorithm, algorithm.start_role()),
        },
        Algorithm::Dfs => match start {
            Some(start) => dfs(graph, start),
            None => missing(algorithm, algorithm.start_role()),
        },
        Algorithm::Dijkstra => match start {
            Some(start) => dijkstra(graph, start, end),
            None => missing(algorithm, algorithm.start_role()),
        },
        Algorithm::BellmanFord => match start {
            Some(start) => bellman_ford(graph, start, end),
            None => missing(algorithm, algorithm.start_role()),
        },
        Algorithm::Prim => prim(graph, start),
        Algorithm::Kruskal => kruskal(graph),
        Algorithm::EdmondsKarp => match (start, end) {
            (Some(source), Some(sink)) => edmonds_karp(graph, source, sink),
            (None, _) => missing(algorithm, algorithm.start_role()),
            (_, None) => missing(algorithm, algorithm.end_role()),
        },
        Algorithm::Fleury => fleury(graph),
        Algorithm::Hierholzer => hierholzer(graph),
        Algorithm::Bipartite => bipartite(graph),
    };

    log::info!(
        "{} finished with {} steps{}",
        algorithm,
        result.steps.len(),
        if result.is_rejected() { " (rejected)" } else { "" }
    );

    result
}

/// Validates `graph` and `request`, then runs the algorithm.
///
/// # Errors
///
/// Returns the first snapshot violation reported by [`validate`], [`Error::MissingParameter`]
/// when a required id is absent, or [`Error::UnknownNode`] when a supplied id is not part
/// of the snapshot.
pub fn run_validated(
    graph: &Graph,
    request: &AlgorithmRequest,
    config: &ValidationConfig,
) -> Result<AlgorithmResult> {
    validate(graph, config)?;

    let algorithm = request.algorithm;
    if algorithm.needs_start() && request.start.is_none() {
        return Err(Error::MissingParameter {
            algorithm,
            parameter: algorithm.start_role(),
        });
    }
    if algorithm.needs_end() && request.end.is_none() {
        return Err(Error::MissingParameter {
            algorithm,
            parameter: algorithm.end_role(),
        });
    }

    for id in [&request.start, &request.end].into_iter().flatten() {
        if !graph.contains_node(id) {
            return Err(Error::UnknownNode(id.clone()));
        }
    }

    Ok(run(graph, request))
}

fn missing(algorithm: Algorithm, role: &'static str) -> AlgorithmResult {
    Trace::new(algorithm).reject(Infeasibility::MissingNode { role })
}
