//! Breadth-first and depth-first traversal.
//!
//! Both record one step per node visit and one step per discovery edge (the first time a
//! neighbour is reached). `visited` holds the nodes reached so far, `traversed_edges` the
//! discovery edges so far.

use std::collections::VecDeque;

use crate::{
    algorithms::Algorithm,
    graph::{Adjacency, Edge, Graph, GraphBase, Neighbor, NodeIndex},
    trace::{AlgorithmResult, AlgorithmStep, Infeasibility, Outcome, Trace, Traversal},
};

/// Breadth-first traversal from `start`.
///
/// Nodes are marked when discovered, so each node enters the queue once. The result's
/// `order` is the dequeue order.
///
/// # Examples
///
/// ```rust
/// use topograph::{algorithms::bfs, Edge, Graph, NodeKind};
///
/// let graph = Graph::undirected()
///     .with_node("A", NodeKind::Router)
///     .with_node("B", NodeKind::Switch)
///     .with_node("C", NodeKind::Pc)
///     .with_link(Edge::new("A", "B", 1.0))
///     .with_link(Edge::new("B", "C", 1.0));
///
/// let result = bfs(&graph, "A");
/// assert_eq!(result.traversal().unwrap().order, vec!["A", "B", "C"]);
/// ```
#[must_use]
pub fn bfs(graph: &Graph, start: &str) -> AlgorithmResult {
    let mut trace = Trace::new(Algorithm::Bfs);
    let view = Adjacency::build(graph);
    let Some(origin) = view.index_of(start) else {
        return trace.reject(Infeasibility::UnknownNode {
            id: start.to_string(),
        });
    };

    let mut seen = vec![false; view.node_count()];
    let mut visited = vec![start.to_string()];
    let mut order = Vec::new();
    let mut tree: Vec<Edge> = Vec::new();
    let mut queue = VecDeque::new();

    seen[origin.index()] = true;
    queue.push_back(origin);

    while let Some(node) = queue.pop_front() {
        let id = view.id(node);
        order.push(id.to_string());
        trace.record(
            AlgorithmStep::new(format!("Visiting {id}"))
                .at_node(id)
                .with_visited(&visited)
                .with_traversed(&tree),
        );

        for entry in view.neighbors(node) {
            if seen[entry.node.index()] {
                continue;
            }
            seen[entry.node.index()] = true;

            let next = view.id(entry.node);
            visited.push(next.to_string());
            tree.push(view.edge(node, entry));
            queue.push_back(entry.node);

            trace.record(
                AlgorithmStep::new(format!("Discovered {next} from {id}"))
                    .at_node(next)
                    .on_link(view.link_ref(node, entry.node))
                    .with_visited(&visited)
                    .with_traversed(&tree),
            );
        }
    }

    trace.record(
        AlgorithmStep::new(format!(
            "BFS complete: reached {} of {} nodes",
            visited.len(),
            view.node_count()
        ))
        .with_visited(&visited)
        .with_traversed(&tree),
    );

    trace.finish(Outcome::Traversal(Traversal {
        start: start.to_string(),
        order,
        tree,
    }))
}

/// Depth-first traversal from `start`.
///
/// The stack carries the node a candidate was discovered from, so the discovery edge is
/// known when the candidate is finally visited. Neighbours are pushed in reverse so they
/// are explored in adjacency order.
///
/// # Examples
///
/// ```rust
/// use topograph::{algorithms::dfs, Edge, Graph, NodeKind};
///
/// let graph = Graph::undirected()
///     .with_node("A", NodeKind::Router)
///     .with_node("B", NodeKind::Router)
///     .with_node("C", NodeKind::Router)
///     .with_node("D", NodeKind::Router)
///     .with_link(Edge::new("A", "B", 1.0))
///     .with_link(Edge::new("A", "C", 1.0))
///     .with_link(Edge::new("B", "D", 1.0));
///
/// let result = dfs(&graph, "A");
/// assert_eq!(result.traversal().unwrap().order, vec!["A", "B", "D", "C"]);
/// ```
#[must_use]
pub fn dfs(graph: &Graph, start: &str) -> AlgorithmResult {
    let mut trace = Trace::new(Algorithm::Dfs);
    let view = Adjacency::build(graph);
    let Some(origin) = view.index_of(start) else {
        return trace.reject(Infeasibility::UnknownNode {
            id: start.to_string(),
        });
    };

    let mut seen = vec![false; view.node_count()];
    let mut visited: Vec<String> = Vec::new();
    let mut tree: Vec<Edge> = Vec::new();
    let mut stack: Vec<(NodeIndex, Option<(NodeIndex, Neighbor)>)> = vec![(origin, None)];

    while let Some((node, via)) = stack.pop() {
        if seen[node.index()] {
            continue;
        }
        seen[node.index()] = true;

        let id = view.id(node);
        visited.push(id.to_string());

        if let Some((from, entry)) = via {
            tree.push(view.edge(from, &entry));
            trace.record(
                AlgorithmStep::new(format!("Discovered {} from {}", id, view.id(from)))
                    .at_node(id)
                    .on_link(view.link_ref(from, node))
                    .with_visited(&visited)
                    .with_traversed(&tree),
            );
        }

        trace.record(
            AlgorithmStep::new(format!("Visiting {id}"))
                .at_node(id)
                .with_visited(&visited)
                .with_traversed(&tree),
        );

        for entry in view.neighbors(node).iter().rev() {
            if !seen[entry.node.index()] {
                stack.push((entry.node, Some((node, *entry))));
            }
        }
    }

    trace.record(
        AlgorithmStep::new(format!(
            "DFS complete: reached {} of {} nodes",
            visited.len(),
            view.node_count()
        ))
        .with_visited(&visited)
        .with_traversed(&tree),
    );

    trace.finish(Outcome::Traversal(Traversal {
        start: start.to_string(),
        order: visited,
        tree,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    fn branching(directed: bool) -> Graph {
        Graph::new(directed)
            .with_node("A", NodeKind::Router)
            .with_node("B", NodeKind::Switch)
            .with_node("C", NodeKind::Switch)
            .with_node("D", NodeKind::Pc)
            .with_node("E", NodeKind::Server)
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("A", "C", 1.0))
            .with_link(Edge::new("B", "D", 1.0))
    }

    #[test]
    fn test_bfs_order_and_tree() {
        let result = bfs(&branching(false), "A");
        let traversal = result.traversal().unwrap();
        assert_eq!(traversal.order, vec!["A", "B", "C", "D"]);

        let tree: Vec<(&str, &str)> = traversal
            .tree
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(tree, vec![("A", "B"), ("A", "C"), ("B", "D")]);
    }

    #[test]
    fn test_bfs_step_counts() {
        let result = bfs(&branching(false), "A");
        // 4 visits, 3 discoveries, 1 summary
        assert_eq!(result.steps.len(), 8);
        let last = result.final_step().unwrap();
        assert_eq!(last.visited.as_ref().unwrap().len(), 4);
        assert_eq!(last.traversed_edges.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_dfs_order_follows_adjacency() {
        let result = dfs(&branching(false), "A");
        let traversal = result.traversal().unwrap();
        assert_eq!(traversal.order, vec!["A", "B", "D", "C"]);
        assert_eq!(traversal.tree.len(), 3);
        assert_eq!(traversal.tree[1].source, "B");
        assert_eq!(traversal.tree[1].target, "D");
    }

    #[test]
    fn test_traversal_respects_direction() {
        let result = bfs(&branching(true), "B");
        assert_eq!(result.traversal().unwrap().order, vec!["B", "D"]);

        let result = dfs(&branching(false), "D");
        assert_eq!(result.traversal().unwrap().order, vec!["D", "B", "A", "C"]);
    }

    #[test]
    fn test_isolated_start() {
        let result = dfs(&branching(false), "E");
        let traversal = result.traversal().unwrap();
        assert_eq!(traversal.order, vec!["E"]);
        assert!(traversal.tree.is_empty());
    }

    #[test]
    fn test_unknown_start_is_rejected() {
        let result = bfs(&branching(false), "Z");
        assert_eq!(
            result.rejection(),
            Some(&Infeasibility::UnknownNode { id: "Z".into() })
        );
        assert_eq!(result.steps.len(), 1);
    }

    #[test]
    fn test_steps_do_not_share_state() {
        let result = bfs(&branching(false), "A");
        let sizes: Vec<usize> = result
            .steps
            .iter()
            .map(|s| s.visited.as_ref().unwrap().len())
            .collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sizes[0], 1);
    }
}
