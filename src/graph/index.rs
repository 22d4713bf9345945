//! Dense node index used inside algorithm views.
//!
//! Snapshots identify nodes by string ids. Algorithms work on [`NodeIndex`] values instead,
//! which are positions in the snapshot's node list. This keeps per-node scratch state in
//! plain vectors (`vec![false; node_count]`) and makes every iteration order follow the
//! order in which the collaborator listed its nodes.

use std::fmt;

/// A strongly-typed position of a node inside an algorithm view.
///
/// `NodeIndex` wraps a `usize`, preventing accidental mixing of node positions with link
/// positions or other integers. Indices are assigned sequentially from 0 in snapshot order
/// by [`Adjacency::build`](crate::graph::Adjacency::build).
///
/// # Examples
///
/// ```rust
/// use topograph::graph::NodeIndex;
///
/// let node = NodeIndex::new(2);
/// let distances = vec![0.0, 1.5, 4.0];
/// assert_eq!(distances[node.index()], 4.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    /// Creates a new `NodeIndex` from a raw position.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeIndex(index)
    }

    /// Returns the raw position, suitable for indexing per-node vectors.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for NodeIndex {
    #[inline]
    fn from(index: usize) -> Self {
        NodeIndex(index)
    }
}

impl From<NodeIndex> for usize {
    #[inline]
    fn from(node: NodeIndex) -> Self {
        node.0
    }
}
