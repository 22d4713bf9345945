//! Dijkstra shortest paths.

use crate::{
    algorithms::{
        paths::{conclude, tree_edges, Predecessor},
        Algorithm,
    },
    graph::{Adjacency, Graph, GraphBase},
    trace::{AlgorithmResult, AlgorithmStep, Infeasibility, LinkRef, Outcome, Trace},
};

/// Shortest paths from `start`, optionally to `end`.
///
/// Any negative link weight rejects the run before anything is computed. The next node to
/// settle is found by scanning all unsettled nodes for the smallest tentative distance
/// (ties go to the node listed first). With an `end` the search stops as soon as `end` is
/// settled, so distances of nodes that were never settled are tentative upper bounds.
///
/// # Examples
///
/// ```rust
/// use topograph::{algorithms::dijkstra, Edge, Graph, NodeKind};
///
/// let graph = Graph::undirected()
///     .with_node("A", NodeKind::Router)
///     .with_node("B", NodeKind::Router)
///     .with_node("C", NodeKind::Router)
///     .with_link(Edge::new("A", "B", 1.0))
///     .with_link(Edge::new("B", "C", 2.0))
///     .with_link(Edge::new("A", "C", 4.0));
///
/// let result = dijkstra(&graph, "A", None);
/// let paths = result.shortest_paths().unwrap();
/// assert_eq!(paths.distance_to("C"), Some(3.0));
/// assert_eq!(paths.tree.len(), 2);
/// ```
#[must_use]
pub fn dijkstra(graph: &Graph, start: &str, end: Option<&str>) -> AlgorithmResult {
    let mut trace = Trace::new(Algorithm::Dijkstra);

    if let Some(link) = graph.first_negative_link() {
        return trace.reject(Infeasibility::NegativeWeight {
            link: LinkRef::from(link),
            weight: link.weight,
        });
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

    let node_count = view.node_count();
    let mut dist = vec![f64::INFINITY; node_count];
    let mut pred: Vec<Predecessor> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut visited: Vec<String> = Vec::new();

    dist[source.index()] = 0.0;

    loop {
        let Some(node) = view
            .node_indices()
            .filter(|n| !settled[n.index()] && dist[n.index()].is_finite())
            .min_by(|a, b| dist[a.index()].total_cmp(&dist[b.index()]))
        else {
            break;
        };

        settled[node.index()] = true;
        let id = view.id(node);
        visited.push(id.to_string());

        trace.record(
            AlgorithmStep::new(format!(
                "Settled {} at distance {}",
                id,
                dist[node.index()]
            ))
            .at_node(id)
            .with_visited(&visited)
            .with_traversed(&tree_edges(&view, &pred)),
        );

        if Some(node) == target {
            break;
        }

        for entry in view.neighbors(node) {
            if settled[entry.node.index()] {
                continue;
            }
            let candidate = dist[node.index()] + entry.weight;
            if candidate < dist[entry.node.index()] {
                dist[entry.node.index()] = candidate;
                pred[entry.node.index()] = Some((node, *entry));

                let next = view.id(entry.node);
                trace.record(
                    AlgorithmStep::new(format!(
                        "Relaxed {id} -> {next}: distance to {next} is now {candidate}"
                    ))
                    .at_node(next)
                    .on_link(view.link_ref(node, entry.node))
                    .with_visited(&visited),
                );
            }
        }
    }

    let paths = conclude(&mut trace, &view, source, &dist, &pred, target);
    trace.finish(Outcome::ShortestPaths(paths))
}
