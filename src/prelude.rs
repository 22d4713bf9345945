//! # topograph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the topograph library. Import this module to get quick access to everything needed
//! to build a snapshot, run an algorithm and read its trace.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all topograph operations
pub use crate::Error;

/// The result type used throughout topograph
pub use crate::Result;

/// Configuration for snapshot validation before a run
pub use crate::ValidationConfig;

// ================================================================================================
// Snapshot
// ================================================================================================

/// Snapshot types
pub use crate::{Edge, Graph, Node, NodeKind};

/// Snapshot validation
pub use crate::validate;

// ================================================================================================
// Running Algorithms
// ================================================================================================

/// Algorithm selection and dispatch
pub use crate::{run, run_validated, Algorithm, AlgorithmRequest};

// ================================================================================================
// Reading Results
// ================================================================================================

/// Trace and terminal state
pub use crate::{AlgorithmResult, AlgorithmStep, Infeasibility, LinkRef, Outcome};

/// Per-algorithm payloads
pub use crate::{
    Bipartition, EdgeFlow, EulerianWalk, MaxFlow, ShortestPaths, SpanningTree, Traversal,
    WalkShape,
};
