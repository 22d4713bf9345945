//! Trait definitions for graph views.
//!
//! Reachability scans run over two kinds of views: the full [`Adjacency`] of a snapshot, and
//! the shrinking edge pools the Eulerian algorithms consume while walking. Both implement
//! [`Successors`], so the scan in [`crate::graph::reach`] is written once.
//!
//! [`Adjacency`]: crate::graph::Adjacency

use crate::graph::NodeIndex;

/// Core properties shared by every graph view.
pub trait GraphBase {
    /// Returns the number of nodes in the view.
    ///
    /// Valid node indices are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node indices in ascending order.
    fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.node_count()).map(NodeIndex::new)
    }
}

/// Forward traversal over a graph view.
///
/// For undirected views the successors of a node are all of its neighbours.
pub trait Successors: GraphBase {
    /// Returns an iterator over the nodes reachable from `node` through one edge.
    ///
    /// A node may appear more than once when parallel edges exist.
    fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PairList {
        node_count: usize,
        edges: Vec<(NodeIndex, NodeIndex)>,
    }

    impl GraphBase for PairList {
        fn node_count(&self) -> usize {
            self.node_count
        }
    }

    impl Successors for PairList {
        fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> {
            self.edges
                .iter()
                .filter(move |(src, _)| *src == node)
                .map(|(_, dst)| *dst)
        }
    }

    #[test]
    fn test_default_node_indices() {
        let graph = PairList {
            node_count: 3,
            edges: vec![],
        };
        let ids: Vec<NodeIndex> = graph.node_indices().collect();
        assert_eq!(
            ids,
            vec![NodeIndex::new(0), NodeIndex::new(1), NodeIndex::new(2)]
        );
    }

    #[test]
    fn test_successors() {
        let graph = PairList {
            node_count: 3,
            edges: vec![
                (NodeIndex::new(0), NodeIndex::new(1)),
                (NodeIndex::new(0), NodeIndex::new(2)),
                (NodeIndex::new(1), NodeIndex::new(2)),
            ],
        };
        let succ: Vec<NodeIndex> = graph.successors(NodeIndex::new(0)).collect();
        assert_eq!(succ, vec![NodeIndex::new(1), NodeIndex::new(2)]);
        assert_eq!(graph.successors(NodeIndex::new(2)).count(), 0);
    }
}
