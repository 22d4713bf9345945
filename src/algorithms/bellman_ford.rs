//! Bellman-Ford shortest paths with negative cycle detection.

use crate::{
    algorithms::{
        paths::{conclude, tree_edges, Predecessor},
        Algorithm,
    },
    graph::{Adjacency, Graph, GraphBase, Neighbor, NodeIndex},
    trace::{AlgorithmResult, AlgorithmStep, Infeasibility, LinkRef, Outcome, Trace},
};

/// Shortest paths from `start`, tolerating negative weights on directed links.
///
/// Every adjacency entry (both orientations of an undirected link) is relaxed for up to
/// `|V| - 1` rounds; a round without any improvement ends the loop early. One more pass
/// follows: if any entry can still be relaxed, a negative cycle is reachable from `start`
/// and the run ends with [`Outcome::NegativeCycle`] and no distances.
///
/// An undirected link with a negative weight is a two-link negative cycle on its own and
/// rejects the run up front.
///
/// # Examples
///
/// ```rust
/// use topograph::{algorithms::bellman_ford, Edge, Graph, NodeKind, Outcome};
///
/// let graph = Graph::directed()
///     .with_node("A", NodeKind::Router)
///     .with_node("B", NodeKind::Router)
///     .with_node("C", NodeKind::Router)
///     .with_link(Edge::new("A", "B", 4.0))
///     .with_link(Edge::new("A", "C", 1.0))
///     .with_link(Edge::new("C", "B", -2.0));
///
/// let result = bellman_ford(&graph, "A", Some("B"));
/// let route = result.shortest_paths().unwrap().route.as_ref().unwrap();
/// assert_eq!(route.path, vec!["A", "C", "B"]);
/// assert_eq!(route.cost, Some(-1.0));
/// ```
#[must_use]
pub fn bellman_ford(graph: &Graph, start: &str, end: Option<&str>) -> AlgorithmResult {
    let mut trace = Trace::new(Algorithm::BellmanFord);

    if !graph.is_directed {
        if let Some(link) = graph.first_negative_link() {
            return trace.reject(Infeasibility::UndirectedNegativeWeight {
                link: LinkRef::from(link),
                weight: link.weight,
            });
        }
    }

    let view = Adjacency::build(graph);
    let Some(source) = view.index_of(start) else {
        return trace.reject(Infeasibility::UnknownNode {
            id: start.to_string(),
        });
    };
    let target = match end {
        Some(id) => match view.index_of(id) {
            Some(node) => Some(node),
            None => {
                return trace.reject(Infeasibility::UnknownNode { id: id.to_string() });
            }
        },
        None => None,
    };

    let arcs: Vec<(NodeIndex, Neighbor)> = view
        .node_indices()
        .flat_map(|node| view.neighbors(node).iter().map(move |entry| (node, *entry)))
        .collect();

    let node_count = view.node_count();
    let mut dist = vec![f64::INFINITY; node_count];
    let mut pred: Vec<Predecessor> = vec![None; node_count];
    dist[source.index()] = 0.0;

    let rounds = node_count.saturating_sub(1);
    for round in 1..=rounds {
        trace.record(
            AlgorithmStep::new(format!("Round {round} of {rounds}"))
                .at_node(start)
                .with_visited(&reached(&view, &dist))
                .with_traversed(&tree_edges(&view, &pred)),
        );

        let mut changed = false;
        for (from, entry) in &arcs {
            let base = dist[from.index()];
            if !base.is_finite() {
                continue;
            }
            let candidate = base + entry.weight;
            if candidate < dist[entry.node.index()] {
                dist[entry.node.index()] = candidate;
                pred[entry.node.index()] = Some((*from, *entry));
                changed = true;

                let (a, b) = (view.id(*from), view.id(entry.node));
                trace.record(
                    AlgorithmStep::new(format!(
                        "Relaxed {a} -> {b}: distance to {b} is now {candidate}"
                    ))
                    .at_node(b)
                    .on_link(view.link_ref(*from, entry.node))
                    .with_visited(&reached(&view, &dist)),
                );
            }
        }

        if !changed {
            trace.record(AlgorithmStep::new(format!(
                "No distance changed in round {round}, stopping early"
            )));
            break;
        }
    }

    for (from, entry) in &arcs {
        let base = dist[from.index()];
        if base.is_finite() && base + entry.weight < dist[entry.node.index()] {
            let link = view.link_ref(*from, entry.node);
            trace.record(
                AlgorithmStep::new(format!(
                    "Negative cycle detected: {link} can still be relaxed after {rounds} rounds"
                ))
                .at_node(view.id(entry.node))
                .on_link(link.clone()),
            );
            return trace.finish(Outcome::NegativeCycle { link });
        }
    }

    let paths = conclude(&mut trace, &view, source, &dist, &pred, target);
    trace.finish(Outcome::ShortestPaths(paths))
}

/// Ids of nodes with a finite distance, in node order.
fn reached(view: &Adjacency, dist: &[f64]) -> Vec<String> {
    view.node_indices()
        .filter(|node| dist[node.index()].is_finite())
        .map(|node| view.id(node).to_string())
        .collect()
}
