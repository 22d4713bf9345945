//! Prim minimum spanning tree.

use crate::{
    algorithms::Algorithm,
    graph::{Adjacency, Edge, Graph, GraphBase, Neighbor, NodeIndex},
    trace::{AlgorithmResult, AlgorithmStep, Infeasibility, Outcome, SpanningTree, Trace},
};

/// Grows a minimum spanning tree from `start` (or the first node).
///
/// Each round picks the node outside the tree with the smallest connecting weight by a
/// linear scan. If the topology is disconnected the run stops once the root's component is
/// spanned, records a warning step and reports the partial result with `is_forest` set.
/// Directed snapshots are rejected.
///
/// # Examples
///
/// ```rust
/// use topograph::{algorithms::prim, Edge, Graph, NodeKind};
///
/// let graph = Graph::undirected()
///     .with_node("A", NodeKind::Router)
///     .with_node("B", NodeKind::Router)
///     .with_node("C", NodeKind::Router)
///     .with_link(Edge::new("A", "B", 1.0))
///     .with_link(Edge::new("B", "C", 2.0))
///     .with_link(Edge::new("A", "C", 4.0));
///
/// let tree = prim(&graph, None).spanning_tree().cloned().unwrap();
/// assert_eq!(tree.total_cost, 3.0);
/// assert_eq!(tree.nodes, vec!["A", "B", "C"]);
/// ```
#[must_use]
pub fn prim(graph: &Graph, start: Option<&str>) -> AlgorithmResult {
    let mut trace = Trace::new(Algorithm::Prim);

    if graph.is_directed {
        return trace.reject(Infeasibility::DirectedGraph);
    }

    let view = Adjacency::build(graph);
    let root = match start {
        Some(id) => match view.index_of(id) {
            Some(node) => node,
            None => {
                return trace.reject(Infeasibility::UnknownNode { id: id.to_string() });
            }
        },
        None if view.node_count() == 0 => {
            trace.record(AlgorithmStep::new("Nothing to span: the topology has no nodes"));
            return trace.finish(Outcome::SpanningTree(SpanningTree {
                edges: Vec::new(),
                total_cost: 0.0,
                nodes: Vec::new(),
                is_forest: false,
            }));
        }
        None => NodeIndex::new(0),
    };

    let node_count = view.node_count();
    let mut key = vec![f64::INFINITY; node_count];
    let mut parent: Vec<Option<(NodeIndex, Neighbor)>> = vec![None; node_count];
    let mut in_tree = vec![false; node_count];
    let mut nodes: Vec<String> = Vec::new();
    let mut edges: Vec<Edge> = Vec::new();
    let mut total_cost = 0.0;

    key[root.index()] = 0.0;

    while let Some(node) = view
        .node_indices()
        .filter(|n| !in_tree[n.index()] && key[n.index()].is_finite())
        .min_by(|a, b| key[a.index()].total_cmp(&key[b.index()]))
    {
        in_tree[node.index()] = true;
        let id = view.id(node);
        nodes.push(id.to_string());

        match parent[node.index()] {
            None => trace.record(
                AlgorithmStep::new(format!("Activated {id} as the tree root"))
                    .at_node(id)
                    .with_visited(&nodes)
                    .with_mst_links(&edges),
            ),
            Some((from, entry)) => {
                let edge = view.edge(from, &entry);
                total_cost += edge.weight;
                edges.push(edge);
                trace.record(
                    AlgorithmStep::new(format!(
                        "Accepted {} -> {} (weight {}), tree cost {}",
                        view.id(from),
                        id,
                        entry.weight,
                        total_cost
                    ))
                    .at_node(id)
                    .on_link(view.link_ref(from, node))
                    .with_visited(&nodes)
                    .with_mst_links(&edges),
                );
            }
        }

        for entry in view.neighbors(node) {
            let next = entry.node.index();
            if !in_tree[next] && entry.weight < key[next] {
                key[next] = entry.weight;
                parent[next] = Some((node, *entry));
            }
        }
    }

    let is_forest = nodes.len() < node_count;
    if is_forest {
        trace.record(
            AlgorithmStep::new(format!(
                "Topology is disconnected: {} of {} nodes cannot be reached from {}, returning a spanning forest",
                node_count - nodes.len(),
                node_count,
                view.id(root)
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
