//! Kruskal minimum spanning tree.

use crate::{
    algorithms::{Algorithm, DisjointSet},
    graph::{Adjacency, Edge, Graph, GraphBase, NodeIndex},
    trace::{AlgorithmResult, AlgorithmStep, Infeasibility, LinkRef, Outcome, SpanningTree, Trace},
};

/// Builds a minimum spanning tree (or forest) from links sorted by weight.
///
/// Links are stable-sorted ascending, so equal weights keep snapshot order. Every link is
/// evaluated, including those after the tree is complete; each gets an "evaluating" step
/// followed by an "accepted" or "rejected" step. Directed snapshots are rejected.
///
/// # Examples
///
/// ```rust
/// use topograph::{algorithms::kruskal, Edge, Graph, NodeKind};
///
/// let graph = Graph::undirected()
///     .with_node("A", NodeKind::Router)
///     .with_node("B", NodeKind::Router)
///     .with_node("C", NodeKind::Router)
///     .with_link(Edge::new("A", "B", 1.0))
///     .with_link(Edge::new("B", "C", 2.0))
///     .with_link(Edge::new("A", "C", 4.0));
///
/// let tree = kruskal(&graph).spanning_tree().cloned().unwrap();
/// assert_eq!(tree.total_cost, 3.0);
/// assert_eq!(tree.edges.len(), 2);
/// ```
#[must_use]
pub fn kruskal(graph: &Graph) -> AlgorithmResult {
    let mut trace = Trace::new(Algorithm::Kruskal);

    if graph.is_directed {
        return trace.reject(Infeasibility::DirectedGraph);
    }

    let view = Adjacency::build(graph);
    let node_count = view.node_count();

    let mut candidates: Vec<(NodeIndex, NodeIndex, &Edge)> = graph
        .links
        .iter()
        .filter_map(|link| {
            Some((
                view.index_of(&link.source)?,
                view.index_of(&link.target)?,
                link,
            ))
        })
        .collect();
    candidates.sort_by(|a, b| a.2.weight.total_cmp(&b.2.weight));

    let mut sets = DisjointSet::new(node_count);
    let mut joined = vec![false; node_count];
    let mut nodes: Vec<String> = Vec::new();
    let mut edges: Vec<Edge> = Vec::new();
    let mut total_cost = 0.0;

    for (from, to, link) in candidates {
        let link_ref = LinkRef::from(link);
        trace.record(
            AlgorithmStep::new(format!("Evaluating {link}"))
                .on_link(link_ref.clone())
                .with_visited(&nodes)
                .with_mst_links(&edges),
        );

        if sets.union(from.index(), to.index()) {
            for node in [from, to] {
                if !joined[node.index()] {
                    joined[node.index()] = true;
                    nodes.push(view.id(node).to_string());
                }
            }
            total_cost += link.weight;
            edges.push(link.clone());

            trace.record(
                AlgorithmStep::new(format!("Accepted {link}, tree cost {total_cost}"))
                    .on_link(link_ref)
                    .with_visited(&nodes)
                    .with_mst_links(&edges),
            );
        } else {
            trace.record(
                AlgorithmStep::new(format!("Rejected {link}: it would form a cycle"))
                    .on_link(link_ref)
                    .with_visited(&nodes)
                    .with_mst_links(&edges),
            );
        }
    }

    let is_forest = edges.len() < node_count.saturating_sub(1);
    if is_forest {
        trace.record(
            AlgorithmStep::new(format!(
                "Topology is disconnected: {} links cannot span {} nodes, returning a spanning forest",
                edges.len(),
                node_count
            ))
            .with_visited(&nodes)
            .with_mst_links(&edges),
        );
    }

    trace.record(
        AlgorithmStep::new(format!(
            "Minimum spanning {} complete: {} links, total cost {}",
            if is_forest { "forest" } else { "tree" },
            edges.len(),
            total_cost
        ))
        .with_visited(&nodes)
        .with_mst_links(&edges),
    );

    trace.finish(Outcome::SpanningTree(SpanningTree {
        edges,
        total_cost,
        nodes,
        is_forest,
    }))
}
