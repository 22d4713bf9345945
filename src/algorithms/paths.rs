//! Result assembly shared by the shortest-path algorithms.

use crate::{
    graph::{Adjacency, Edge, GraphBase, Neighbor, NodeIndex},
    trace::{AlgorithmStep, NodeDistance, Route, ShortestPaths, Trace},
};

/// Predecessor entry: the node a label came from and the adjacency entry that was relaxed.
pub(super) type Predecessor = Option<(NodeIndex, Neighbor)>;

/// Shortest-path tree edges in node order, oriented away from the source.
pub(super) fn tree_edges(view: &Adjacency, pred: &[Predecessor]) -> Vec<Edge> {
    pred.iter()
        .flatten()
        .map(|(from, entry)| view.edge(*from, entry))
        .collect()
}

/// Walks predecessors back from `target` to `source`.
///
/// Returns `None` if the chain breaks or a node repeats before reaching `source`.
pub(super) fn walk_back(
    pred: &[Predecessor],
    source: NodeIndex,
    target: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    let mut seen = vec![false; pred.len()];
    let mut path = vec![target];
    let mut current = target;
    seen[current.index()] = true;

    while current != source {
        let (previous, _) = pred[current.index()]?;
        if seen[previous.index()] {
            return None;
        }
        seen[previous.index()] = true;
        path.push(previous);
        current = previous;
    }

    path.reverse();
    Some(path)
}

/// Edges along a path produced by [`walk_back`].
fn route_edges(view: &Adjacency, pred: &[Predecessor], path: &[NodeIndex]) -> Vec<Edge> {
    path.iter()
        .skip(1)
        .filter_map(|node| pred[node.index()])
        .map(|(from, entry)| view.edge(from, &entry))
        .collect()
}

/// Records the closing steps and builds the payload.
///
/// With a destination the route (or its absence) is reported; otherwise the whole tree is
/// reported and unreachable nodes are listed.
pub(super) fn conclude(
    trace: &mut Trace,
    view: &Adjacency,
    source: NodeIndex,
    dist: &[f64],
    pred: &[Predecessor],
    target: Option<NodeIndex>,
) -> ShortestPaths {
    let distances = view
        .node_indices()
        .map(|node| NodeDistance {
            node: view.id(node).to_string(),
            distance: Some(dist[node.index()]).filter(|d| d.is_finite()),
        })
        .collect();
    let tree = tree_edges(view, pred);
    let source_id = view.id(source);

    let mut route = None;
    let mut unreachable = Vec::new();

    match target {
        Some(target) => {
            let target_id = view.id(target);
            let path = dist[target.index()]
                .is_finite()
                .then(|| walk_back(pred, source, target))
                .flatten();

            match path {
                Some(path) => {
                    let cost = dist[target.index()];
                    let names = view.names(&path);
                    let edges = route_edges(view, pred, &path);
                    trace.record(
                        AlgorithmStep::new(format!(
                            "Shortest path {} with cost {}",
                            names.join(" -> "),
                            cost
                        ))
                        .at_node(target_id)
                        .with_path(&names)
                        .with_traversed(&edges),
                    );
                    route = Some(Route {
                        target: target_id.to_string(),
                        path: names,
                        cost: Some(cost),
                    });
                }
                None => {
                    trace.record(
                        AlgorithmStep::new(format!(
                            "Destination {target_id} is unreachable from {source_id}"
                        ))
                        .at_node(target_id),
                    );
                    route = Some(Route {
                        target: target_id.to_string(),
                        path: Vec::new(),
                        cost: None,
                    });
                }
            }
        }
        None => {
            unreachable = view
                .node_indices()
                .filter(|node| !dist[node.index()].is_finite())
                .map(|node| view.id(node).to_string())
                .collect::<Vec<_>>();

            let reached: Vec<String> = view
                .node_indices()
                .filter(|node| dist[node.index()].is_finite())
                .map(|node| view.id(node).to_string())
                .collect();

            trace.record(
                AlgorithmStep::new(format!(
                    "Shortest-path tree from {} complete with {} edges",
                    source_id,
                    tree.len()
                ))
                .at_node(source_id)
                .with_visited(&reached)
                .with_mst_links(&tree),
            );

            if !unreachable.is_empty() {
                trace.record(AlgorithmStep::new(format!(
                    "Unreachable from {}: {}",
                    source_id,
                    unreachable.join(", ")
                )));
            }
        }
    }

    ShortestPaths {
        source: source_id.to_string(),
        distances,
        tree,
        route,
        unreachable,
    }
}
