//! Snapshot validation configuration
//!
//! The algorithm core assumes a well-formed snapshot. Collaborators that cannot guarantee
//! one (files loaded from disk, hand-edited JSON) run [`validate`] first; it rejects the
//! snapshot with an [`Error`](crate::Error) instead of letting a broken link surface later
//! as a confusing trace.

use std::collections::HashSet;

use crate::{graph::Graph, Error, Result};

/// Configuration for snapshot validation before an algorithm run
///
/// Every check is independent. `max_nodes == 0` disables the size limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidationConfig {
    /// Reject empty node ids
    pub enable_structural_validation: bool,

    /// Reject two nodes sharing an id
    pub enable_duplicate_validation: bool,

    /// Reject links whose endpoints are not in the node list
    pub enable_link_validation: bool,

    /// Reject NaN or infinite weights and capacities
    pub enable_weight_validation: bool,

    /// Reject negative capacities (a negative throughput has no meaning for max-flow)
    pub enable_capacity_validation: bool,

    /// Maximum number of nodes accepted (default: 4096)
    pub max_nodes: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl ValidationConfig {
    /// Creates a disabled validation configuration
    ///
    /// **Warning**: Use only when the collaborator already guarantees a well-formed snapshot.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enable_structural_validation: false,
            enable_duplicate_validation: false,
            enable_link_validation: false,
            enable_weight_validation: false,
            enable_capacity_validation: false,
            max_nodes: 0,
        }
    }

    /// Creates a minimal validation configuration
    ///
    /// Only checks what would otherwise make an algorithm silently ignore part of the input.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            enable_structural_validation: true,
            enable_duplicate_validation: true,
            enable_link_validation: true,
            enable_weight_validation: false,
            enable_capacity_validation: false,
            max_nodes: 0,
        }
    }

    /// Creates the validation configuration used by default
    #[must_use]
    pub fn production() -> Self {
        Self {
            enable_structural_validation: true,
            enable_duplicate_validation: true,
            enable_link_validation: true,
            enable_weight_validation: true,
            enable_capacity_validation: false,
            max_nodes: 4096,
        }
    }

    /// Creates a validation configuration with all checks enabled
    #[must_use]
    pub fn strict() -> Self {
        Self {
            enable_structural_validation: true,
            enable_duplicate_validation: true,
            enable_link_validation: true,
            enable_weight_validation: true,
            enable_capacity_validation: true,
            max_nodes: 256,
        }
    }
}

/// Checks a snapshot against `config`.
///
/// # Errors
///
/// Returns the first violation found, in this order: size limit, empty ids, duplicate ids,
/// dangling links, non-finite weights/capacities, negative capacities.
pub fn validate(graph: &Graph, config: &ValidationConfig) -> Result<()> {
    if config.max_nodes != 0 && graph.node_count() > config.max_nodes {
        return Err(malformed_error!(
            "graph has {} nodes, the limit is {}",
            graph.node_count(),
            config.max_nodes
        ));
    }

    if config.enable_structural_validation {
        if let Some(position) = graph.nodes.iter().position(|node| node.id.is_empty()) {
            return Err(malformed_error!("node #{} has an empty id", position));
        }
    }

    let mut ids = HashSet::with_capacity(graph.node_count());
    for node in &graph.nodes {
        if !ids.insert(node.id.as_str()) && config.enable_duplicate_validation {
            return Err(Error::DuplicateNode(node.id.clone()));
        }
    }

    for link in &graph.links {
        if config.enable_link_validation
            && (!ids.contains(link.source.as_str()) || !ids.contains(link.target.as_str()))
        {
            return Err(Error::DanglingLink {
                from: link.source.clone(),
                to: link.target.clone(),
            });
        }

        if config.enable_weight_validation {
            if !link.weight.is_finite() {
                return Err(Error::InvalidWeight {
                    from: link.source.clone(),
                    to: link.target.clone(),
                    field: "weight",
                    value: link.weight,
                });
            }
            if let Some(capacity) = link.capacity.filter(|c| !c.is_finite()) {
                return Err(Error::InvalidWeight {
                    from: link.source.clone(),
                    to: link.target.clone(),
                    field: "capacity",
                    value: capacity,
                });
            }
        }

        if config.enable_capacity_validation && link.effective_capacity() < 0.0 {
            return Err(Error::InvalidWeight {
                from: link.source.clone(),
                to: link.target.clone(),
                field: "capacity",
                value: link.effective_capacity(),
            });
        }
    }

    Ok(())
}
