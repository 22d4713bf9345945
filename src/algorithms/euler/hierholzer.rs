//! Hierholzer's algorithm.

use crate::{
    algorithms::{
        euler::{conclude, prepare},
        Algorithm,
    },
    graph::{Edge, Graph, NodeIndex},
    trace::{AlgorithmResult, AlgorithmStep, Trace},
};

/// Eulerian walk by iterative circuit splicing.
///
/// The node on top of the stack consumes its next unused link and pushes the far end
/// ("forward"); a node with no unused link left is popped onto the circuit ("backtrack").
/// The walk is the circuit in reverse pop order. Undirected links are consumed once for
/// both orientations.
///
/// # Examples
///
/// ```rust
/// use topograph::{algorithms::hierholzer, Edge, Graph, NodeKind};
///
/// let graph = Graph::directed()
///     .with_node("A", NodeKind::Router)
///     .with_node("B", NodeKind::Router)
///     .with_node("C", NodeKind::Router)
///     .with_link(Edge::new("A", "B", 1.0))
///     .with_link(Edge::new("B", "C", 1.0))
///     .with_link(Edge::new("C", "A", 1.0));
///
/// let walk = hierholzer(&graph).eulerian_walk().cloned().unwrap();
/// assert_eq!(walk.walk, vec!["A", "B", "C", "A"]);
/// ```
#[must_use]
pub fn hierholzer(graph: &Graph) -> AlgorithmResult {
    let (mut trace, view, mut pool, plan) =
        match prepare(graph, Trace::new(Algorithm::Hierholzer)) {
            Ok(prepared) => prepared,
            Err(done) => return done,
        };

    let mut cursor = vec![0usize; pool.incident.len()];
    // node on the stack and the link used to reach it
    let mut stack: Vec<(NodeIndex, Option<usize>)> = vec![(plan.start, None)];
    let mut circuit: Vec<NodeIndex> = Vec::new();
    let mut circuit_links: Vec<usize> = Vec::new();
    let mut consumed: Vec<Edge> = Vec::new();

    while let Some(&(top, _)) = stack.last() {
        let incident = &pool.incident[top.index()];
        while cursor[top.index()] < incident.len() && !pool.alive[incident[cursor[top.index()]]] {
            cursor[top.index()] += 1;
        }

        if let Some(&link) = incident.get(cursor[top.index()]) {
            pool.alive[link] = false;
            let next = pool.other(link, top);
            consumed.push(pool.edge(&view, link, top));
            stack.push((next, Some(link)));

            let on_stack: Vec<NodeIndex> = stack.iter().map(|&(node, _)| node).collect();
            trace.record(
                AlgorithmStep::new(format!("Forward {} -> {}", view.id(top), view.id(next)))
                    .at_node(view.id(next))
                    .on_link(view.link_ref(top, next))
                    .with_path(&view.names(&on_stack))
                    .with_traversed(&consumed),
            );
        } else {
            if let Some((_, Some(link))) = stack.pop() {
                circuit_links.push(link);
            }
            circuit.push(top);

            let log = match stack.last() {
                Some(&(below, _)) => {
                    format!("Backtrack from {} to {}", view.id(top), view.id(below))
                }
                None => format!("Backtrack from {}", view.id(top)),
            };
            trace.record(
                AlgorithmStep::new(log)
                    .at_node(view.id(top))
                    .with_path(&view.names(&circuit))
                    .with_traversed(&consumed),
            );
        }
    }

    circuit.reverse();
    circuit_links.reverse();
    let walk = view.names(&circuit);
    let edges: Vec<Edge> = circuit
        .windows(2)
        .zip(&circuit_links)
        .map(|(hop, &link)| pool.edge(&view, link, hop[0]))
        .collect();
    let unused = pool.alive.iter().filter(|&&alive| alive).count();

    conclude(trace, plan.shape, walk, edges, unused)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::NodeKind,
        trace::{Infeasibility, WalkShape},
    };

    fn nodes(directed: bool, ids: &[&str]) -> Graph {
        ids.iter()
            .fold(Graph::new(directed), |g, id| g.with_node(*id, NodeKind::Router))
    }

    #[test]
    fn test_splices_sub_circuits() {
        // bowtie: two triangles sharing C
        let graph = nodes(false, &["A", "B", "C", "D", "E"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("B", "C", 1.0))
            .with_link(Edge::new("C", "A", 1.0))
            .with_link(Edge::new("C", "D", 1.0))
            .with_link(Edge::new("D", "E", 1.0))
            .with_link(Edge::new("E", "C", 1.0));
        let walk = hierholzer(&graph).eulerian_walk().cloned().unwrap();
        assert_eq!(walk.shape, WalkShape::Circuit);
        assert_eq!(walk.walk, vec!["A", "B", "C", "D", "E", "C", "A"]);
        assert_eq!(walk.edges.len(), 6);
        for (hop, edge) in walk.walk.windows(2).zip(&walk.edges) {
            assert_eq!(edge.source, hop[0]);
            assert_eq!(edge.target, hop[1]);
        }
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        // from A the walk first runs A-B-C-A-D and has to back out of D
        let graph = nodes(false, &["A", "B", "C", "D"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("B", "C", 1.0))
            .with_link(Edge::new("C", "A", 1.0))
            .with_link(Edge::new("A", "D", 1.0));
        let result = hierholzer(&graph);
        let walk = result.eulerian_walk().unwrap();
        assert_eq!(walk.shape, WalkShape::Path);
        assert_eq!(walk.walk.len(), 5);
        assert_eq!(walk.walk.first().map(String::as_str), Some("A"));
        assert_eq!(walk.walk.last().map(String::as_str), Some("D"));

        let forward = result.logs.iter().filter(|l| l.starts_with("Forward")).count();
        let backtrack = result
            .logs
            .iter()
            .filter(|l| l.starts_with("Backtrack"))
            .count();
        assert_eq!(forward, 4);
        assert_eq!(backtrack, 5);
    }

    #[test]
    fn test_directed_path() {
        let graph = nodes(true, &["A", "B", "C"])
            .with_link(Edge::new("B", "C", 1.0))
            .with_link(Edge::new("A", "B", 1.0));
        let walk = hierholzer(&graph).eulerian_walk().cloned().unwrap();
        assert_eq!(walk.shape, WalkShape::Path);
        assert_eq!(walk.walk, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unbalanced_rejected() {
        let graph = nodes(true, &["A", "B", "C"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("C", "B", 1.0));
        assert!(matches!(
            hierholzer(&graph).rejection(),
            Some(Infeasibility::Unbalanced { .. })
        ));
    }

    #[test]
    fn test_linkless_graph_is_trivial() {
        let result = hierholzer(&nodes(false, &["solo", "other"]));
        let walk = result.eulerian_walk().unwrap();
        assert_eq!(walk.walk, vec!["solo"]);
        assert!(walk.edges.is_empty());
    }
}
