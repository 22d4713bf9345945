//! Fleury's algorithm.

use crate::{
    algorithms::{
        euler::{conclude, prepare, LinkPool},
        Algorithm,
    },
    graph::{reach, Adjacency, Edge, Graph, NodeIndex},
    trace::{AlgorithmResult, AlgorithmStep, Trace},
};

/// Returns `true` if consuming `link` from `node` would strand part of the remaining walk.
///
/// Undirected: the number of nodes reachable from `node` drops once the link is gone.
/// Directed: some node still carrying a link is no longer reachable from the link's head.
fn is_bridge(pool: &mut LinkPool, link: usize, node: NodeIndex) -> bool {
    let head = pool.other(link, node);

    if pool.directed {
        pool.alive[link] = false;
        let mask = reach::reachable_mask(&*pool, head);
        let stranded = pool
            .links
            .iter()
            .zip(&pool.alive)
            .any(|(entry, &alive)| alive && !mask[entry.from.index()]);
        pool.alive[link] = true;
        stranded
    } else {
        let before = reach::reachable_count(&*pool, node);
        pool.alive[link] = false;
        let after = reach::reachable_count(&*pool, node);
        pool.alive[link] = true;
        after < before
    }
}

/// Eulerian walk that never burns a bridge while another link is available.
///
/// At every node the first live link that is not a bridge is taken; if all of them are
/// bridges the first is taken anyway. One step is recorded per crossed link. The walk is
/// capped at twice the link count.
///
/// # Examples
///
/// ```rust
/// use topograph::{algorithms::fleury, Edge, Graph, NodeKind, WalkShape};
///
/// let graph = Graph::undirected()
///     .with_node("A", NodeKind::Router)
///     .with_node("B", NodeKind::Router)
///     .with_node("C", NodeKind::Router)
///     .with_link(Edge::new("A", "B", 1.0))
///     .with_link(Edge::new("B", "C", 1.0))
///     .with_link(Edge::new("C", "A", 1.0));
///
/// let walk = fleury(&graph).eulerian_walk().cloned().unwrap();
/// assert_eq!(walk.shape, WalkShape::Circuit);
/// assert_eq!(walk.walk, vec!["A", "B", "C", "A"]);
/// ```
#[must_use]
pub fn fleury(graph: &Graph) -> AlgorithmResult {
    let (mut trace, view, mut pool, plan) = match prepare(graph, Trace::new(Algorithm::Fleury))
    {
        Ok(prepared) => prepared,
        Err(done) => return done,
    };

    let mut current = plan.start;
    let mut walk = vec![view.id(current).to_string()];
    let mut edges: Vec<Edge> = Vec::new();
    let mut remaining = pool.len();

    for _ in 0..pool.len() * 2 {
        if remaining == 0 {
            break;
        }

        let candidates = pool.live_from(current);
        let Some(&first) = candidates.first() else {
            break;
        };

        let safe = if candidates.len() == 1 {
            Some(first)
        } else {
            candidates
                .iter()
                .copied()
                .find(|&link| !is_bridge(&mut pool, link, current))
        };
        let chosen = safe.unwrap_or(first);

        pool.alive[chosen] = false;
        remaining -= 1;
        let next = pool.other(chosen, current);
        edges.push(pool.edge(&view, chosen, current));
        walk.push(view.id(next).to_string());

        trace.record(step(&view, current, next, safe.is_none(), &walk, &edges));
        current = next;
    }

    conclude(trace, plan.shape, walk, edges, remaining)
}

fn step(
    view: &Adjacency,
    from: NodeIndex,
    to: NodeIndex,
    forced: bool,
    walk: &[String],
    edges: &[Edge],
) -> AlgorithmStep {
    let (a, b) = (view.id(from), view.id(to));
    let log = if forced {
        format!("Crossed {a} -> {b} (only bridges were left)")
    } else {
        format!("Crossed {a} -> {b}")
    };

    AlgorithmStep::new(log)
        .at_node(b)
        .on_link(view.link_ref(from, to))
        .with_path(walk)
        .with_traversed(edges)
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
    fn test_avoids_bridge() {
        // bowtie: two triangles sharing C, the C-A link is a bridge once A-B-C is walked
        let graph = nodes(false, &["A", "B", "C", "D", "E"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("B", "C", 1.0))
            .with_link(Edge::new("C", "A", 1.0))
            .with_link(Edge::new("C", "D", 1.0))
            .with_link(Edge::new("D", "E", 1.0))
            .with_link(Edge::new("E", "C", 1.0));
        let result = fleury(&graph);
        let walk = result.eulerian_walk().unwrap();
        assert_eq!(walk.walk.len(), 7);
        assert_eq!(walk.walk.first(), walk.walk.last());
        assert_eq!(walk.edges.len(), 6);
    }

    #[test]
    fn test_open_path_from_odd_node() {
        // B has degree 3, D has degree 1
        let graph = nodes(false, &["A", "B", "C", "D"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("B", "C", 1.0))
            .with_link(Edge::new("C", "A", 1.0))
            .with_link(Edge::new("B", "D", 1.0));
        let walk = fleury(&graph).eulerian_walk().cloned().unwrap();
        assert_eq!(walk.shape, WalkShape::Path);
        assert_eq!(walk.walk.first().map(String::as_str), Some("B"));
        assert_eq!(walk.walk.last().map(String::as_str), Some("D"));
        assert_eq!(walk.walk.len(), 5);
    }

    #[test]
    fn test_directed_walk() {
        let graph = nodes(true, &["A", "B", "C"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("B", "C", 1.0))
            .with_link(Edge::new("C", "A", 1.0))
            .with_link(Edge::new("A", "C", 1.0))
            .with_link(Edge::new("C", "A", 1.0));
        let walk = fleury(&graph).eulerian_walk().cloned().unwrap();
        assert_eq!(walk.shape, WalkShape::Circuit);
        assert_eq!(walk.walk.len(), 6);
        for edge in &walk.edges {
            assert!(graph
                .links
                .iter()
                .any(|l| l.source == edge.source && l.target == edge.target));
        }
    }

    #[test]
    fn test_odd_degrees_rejected() {
        let graph = nodes(false, &["H", "A", "B", "C"])
            .with_link(Edge::new("H", "A", 1.0))
            .with_link(Edge::new("H", "B", 1.0))
            .with_link(Edge::new("H", "C", 1.0));
        let result = fleury(&graph);
        assert_eq!(
            result.rejection(),
            Some(&Infeasibility::OddDegree { count: 4 })
        );
        assert_eq!(result.steps.len(), 1);
    }

    #[test]
    fn test_one_step_per_link() {
        let graph = nodes(false, &["A", "B"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("A", "B", 2.0));
        let result = fleury(&graph);
        let crossings = result
            .logs
            .iter()
            .filter(|l| l.starts_with("Crossed"))
            .count();
        assert_eq!(crossings, 2);
        // plan step, 2 crossings, summary
        assert_eq!(result.steps.len(), 4);
    }
}
