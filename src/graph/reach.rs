//! Untraced reachability scans.
//!
//! These helpers answer "which nodes can I get to from here" without recording any trace
//! steps. They back the Fleury bridge test and the Eulerian connectivity check, where the
//! scan is bookkeeping rather than something a viewer should watch.

use std::collections::VecDeque;

use crate::graph::{NodeIndex, Successors};

/// Breadth-first iterator over the nodes reachable from a start node.
///
/// Each reachable node is yielded exactly once, the start node first.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph view
/// * `G` - View type implementing [`Successors`]
pub struct Reachable<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeIndex>,
    seen: Vec<bool>,
}

impl<'g, G: Successors> Reachable<'g, G> {
    fn new(graph: &'g G, start: NodeIndex) -> Self {
        let node_count = graph.node_count();
        if start.index() >= node_count {
            return Reachable {
                graph,
                queue: VecDeque::new(),
                seen: Vec::new(),
            };
        }

        let mut seen = vec![false; node_count];
        seen[start.index()] = true;

        let mut queue = VecDeque::new();
        queue.push_back(start);

        Reachable { graph, queue, seen }
    }
}

impl<G: Successors> Iterator for Reachable<'_, G> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if !self.seen[succ.index()] {
                self.seen[succ.index()] = true;
                self.queue.push_back(succ);
            }
        }

        Some(node)
    }
}

/// Returns an iterator over every node reachable from `start`, in BFS order.
///
/// An out-of-range start yields nothing.
pub fn reachable<G: Successors>(graph: &G, start: NodeIndex) -> Reachable<'_, G> {
    Reachable::new(graph, start)
}

/// Counts the nodes reachable from `start`, including `start` itself.
pub fn reachable_count<G: Successors>(graph: &G, start: NodeIndex) -> usize {
    reachable(graph, start).count()
}

/// Returns a per-node flag telling whether the node is reachable from `start`.
pub fn reachable_mask<G: Successors>(graph: &G, start: NodeIndex) -> Vec<bool> {
    let mut mask = vec![false; graph.node_count()];
    for node in reachable(graph, start) {
        mask[node.index()] = true;
    }
    mask
}
