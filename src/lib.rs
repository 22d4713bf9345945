// Copyright 2026 The topograph Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # topograph
//!
//! A step-traced graph algorithm engine for network topology visualisation.
//!
//! `topograph` takes a snapshot of a network topology (devices and weighted links, directed
//! or not) and runs classic graph algorithms over it. Every run returns the final answer
//! *and* the ordered list of intermediate states that led to it, so a viewer can animate
//! the run step by step or a tool can print it as a narrated log.
//!
//! ## Features
//!
//! - **Traversal** - BFS and DFS with discovery edges
//! - **Shortest paths** - Dijkstra and Bellman-Ford with negative cycle detection
//! - **Spanning trees** - Prim and Kruskal, falling back to forests on split topologies
//! - **Maximum flow** - Edmonds-Karp with the matching minimum cut
//! - **Eulerian walks** - Fleury and Hierholzer with a shared feasibility check
//! - **Partitioning** - Two-zone bipartite check
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use topograph::prelude::*;
//!
//! let graph = Graph::undirected()
//!     .with_node("A", NodeKind::Router)
//!     .with_node("B", NodeKind::Switch)
//!     .with_node("C", NodeKind::Server)
//!     .with_link(Edge::new("A", "B", 1.0))
//!     .with_link(Edge::new("B", "C", 2.0))
//!     .with_link(Edge::new("A", "C", 4.0));
//!
//! let request = AlgorithmRequest::new(Algorithm::Kruskal);
//! let result = run_validated(&graph, &request, &ValidationConfig::default())?;
//!
//! for line in &result.logs {
//!     println!("{line}");
//! }
//! assert_eq!(result.spanning_tree().unwrap().total_cost, 3.0);
//! # Ok::<(), topograph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Snapshot types, the adjacency view, reachability helpers and validation
//! - [`trace`] - The step trace protocol: [`AlgorithmStep`], [`Outcome`], [`AlgorithmResult`]
//! - [`algorithms`] - The algorithm suite and the [`run`] dispatcher
//! - [`utils`] - Graphviz DOT rendering
//! - [`Error`] and [`Result`] - Caller-contract violations
//!
//! ### Outcomes versus Errors
//!
//! Algorithm preconditions (a negative weight handed to Dijkstra, a directed snapshot
//! handed to Prim, an odd-degree topology handed to Fleury, ...) are expected situations and
//! come back as [`Outcome::Rejected`] with a single explanatory step. [`Error`] is reserved
//! for broken snapshots and requests, and is only produced by [`validate`] and
//! [`run_validated`].
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: one `debug` record per recorded step, `info`
//! when a run starts and ends, `warn` for rejected inputs and skipped dangling links. No
//! logger is installed by the library.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use topograph::prelude::*;
///
/// let graph = Graph::directed().with_node("A", NodeKind::Router);
/// let result = run(&graph, &AlgorithmRequest::new(Algorithm::Bfs).with_start("A"));
/// assert_eq!(result.traversal().unwrap().order, vec!["A"]);
/// ```
pub mod prelude;

/// Topology snapshots and the views algorithms derive from them.
///
/// # Key Types
///
/// - [`graph::Graph`] - A snapshot: nodes, links and a direction flag
/// - [`graph::Adjacency`] - Neighbour lists keyed by dense [`graph::NodeIndex`] positions
/// - [`graph::ValidationConfig`] - Which snapshot checks [`graph::validate`] performs
pub mod graph;

/// The step trace protocol shared by every algorithm.
pub mod trace;

/// The traced algorithm suite.
pub mod algorithms;

/// Rendering helpers.
pub mod utils;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use topograph::{validate, Graph, Result, ValidationConfig};
///
/// fn check(graph: &Graph) -> Result<()> {
///     validate(graph, &ValidationConfig::strict())
/// }
///
/// assert!(check(&Graph::undirected()).is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `topograph` Error type
///
/// # Examples
///
/// ```rust
/// use topograph::{run_validated, Algorithm, AlgorithmRequest, Error, Graph, ValidationConfig};
///
/// let request = AlgorithmRequest::new(Algorithm::Bfs).with_start("missing");
/// match run_validated(&Graph::undirected(), &request, &ValidationConfig::default()) {
///     Err(Error::UnknownNode(id)) => assert_eq!(id, "missing"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
pub use error::Error;

pub use algorithms::{run, run_validated, Algorithm, AlgorithmRequest};
pub use graph::{build_adjacency, validate, Edge, Graph, Node, NodeKind, ValidationConfig};
pub use trace::{
    AlgorithmResult, AlgorithmStep, Bipartition, EdgeFlow, EulerianWalk, Infeasibility, LinkRef,
    MaxFlow, NodeDistance, Outcome, Route, ShortestPaths, SpanningTree, Traversal, WalkShape,
    ZoneSets,
};
