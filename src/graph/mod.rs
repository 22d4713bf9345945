//! Topology snapshots and the views algorithms derive from them.
//!
//! # Architecture
//!
//! - **Snapshot**: [`Graph`], [`Node`], [`Edge`], [`NodeKind`] are the serialisable values a
//!   collaborator hands to the engine. They are never mutated by an algorithm.
//! - **Views**: [`Adjacency`] maps string ids to dense [`NodeIndex`] positions and stores
//!   per-node neighbour lists honouring the direction flag. Every run builds its own.
//! - **Traits**: [`GraphBase`] and [`Successors`] let the untraced reachability helpers in
//!   [`reach`] run over both full views and the shrinking edge pools of the Eulerian walks.
//! - **Validation**: [`validate`] and [`ValidationConfig`] check a snapshot before dispatch.
//!
//! # Usage Examples
//!
//! ```rust
//! use topograph::graph::{reach, Adjacency, Edge, Graph, NodeKind};
//!
//! let graph = Graph::directed()
//!     .with_node("A", NodeKind::Router)
//!     .with_node("B", NodeKind::Router)
//!     .with_node("C", NodeKind::Server)
//!     .with_link(Edge::new("A", "B", 1.0))
//!     .with_link(Edge::new("B", "C", 1.0));
//!
//! let view = Adjacency::build(&graph);
//! let a = view.index_of("A").unwrap();
//! assert_eq!(reach::reachable_count(&view, a), 3);
//! ```

mod adjacency;
mod index;
mod model;
mod traits;
mod validation;

pub mod reach;

pub use adjacency::{build_adjacency, Adjacency, Neighbor};
pub use index::NodeIndex;
pub use model::{Edge, Graph, Node, NodeKind};
pub use traits::{GraphBase, Successors};
pub use validation::{validate, ValidationConfig};
