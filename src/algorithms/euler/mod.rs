//! Eulerian walks.
//!
//! Both algorithms share the feasibility check and a consumable pool of links:
//!
//! - Undirected: 0 odd-degree nodes gives a circuit, exactly 2 give a path starting at the
//!   first odd node, anything else is rejected.
//! - Directed: all nodes balanced gives a circuit; exactly one node with `out = in + 1`
//!   (the start) and one with `in = out + 1` gives a path; anything else is rejected.
//! - Every link must lie in one weakly connected component.
//!
//! A topology with nodes but no links has the trivial one-node walk.

mod fleury;
mod hierholzer;

use crate::{
    graph::{reach, Adjacency, Edge, Graph, GraphBase, NodeIndex, Successors},
    trace::{AlgorithmResult, AlgorithmStep, EulerianWalk, Infeasibility, Outcome, Trace, WalkShape},
};

pub use fleury::fleury;
pub use hierholzer::hierholzer;

/// One link of the pool, resolved to node positions.
#[derive(Debug, Clone)]
struct PoolLink {
    from: NodeIndex,
    to: NodeIndex,
    weight: f64,
    capacity: Option<f64>,
}

/// The links a walk may still consume.
///
/// `incident[n]` lists the pool positions usable from `n`: outgoing links when directed,
/// every touching link when undirected (a self-loop is listed once).
#[derive(Debug, Clone)]
struct LinkPool {
    links: Vec<PoolLink>,
    alive: Vec<bool>,
    incident: Vec<Vec<usize>>,
    directed: bool,
}

impl LinkPool {
    fn new(graph: &Graph, view: &Adjacency) -> Self {
        let mut links = Vec::new();
        let mut incident = vec![Vec::new(); view.node_count()];

        for link in &graph.links {
            let (Some(from), Some(to)) = (view.index_of(&link.source), view.index_of(&link.target))
            else {
                continue;
            };
            let position = links.len();
            incident[from.index()].push(position);
            if !graph.is_directed && from != to {
                incident[to.index()].push(position);
            }
            links.push(PoolLink {
                from,
                to,
                weight: link.weight,
                capacity: link.capacity,
            });
        }

        Self {
            alive: vec![true; links.len()],
            links,
            incident,
            directed: graph.is_directed,
        }
    }

    fn len(&self) -> usize {
        self.links.len()
    }

    /// The far end of `link` when leaving `node`.
    fn other(&self, link: usize, node: NodeIndex) -> NodeIndex {
        let entry = &self.links[link];
        if entry.from == node {
            entry.to
        } else {
            entry.from
        }
    }

    /// Live links usable from `node`, in snapshot order.
    fn live_from(&self, node: NodeIndex) -> Vec<usize> {
        self.incident[node.index()]
            .iter()
            .copied()
            .filter(|&link| self.alive[link])
            .collect()
    }

    /// `link` as crossed from `from`, as an owned [`Edge`].
    fn edge(&self, view: &Adjacency, link: usize, from: NodeIndex) -> Edge {
        let entry = &self.links[link];
        Edge {
            source: view.id(from).to_string(),
            target: view.id(self.other(link, from)).to_string(),
            weight: entry.weight,
            capacity: entry.capacity,
        }
    }
}

impl GraphBase for LinkPool {
    fn node_count(&self) -> usize {
        self.incident.len()
    }
}

impl Successors for LinkPool {
    fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> {
        self.incident[node.index()]
            .iter()
            .filter(move |&&link| self.alive[link])
            .map(move |&link| self.other(link, node))
    }
}

/// Where a feasible walk starts and whether it closes.
#[derive(Debug, Clone, Copy)]
struct Plan {
    start: NodeIndex,
    shape: WalkShape,
}

/// Checks degree balance and edge connectivity.
///
/// Returns `Ok(None)` when there are nodes but no links.
fn plan(graph: &Graph, view: &Adjacency, pool: &LinkPool) -> Result<Option<Plan>, Infeasibility> {
    let node_count = view.node_count();
    if node_count == 0 {
        return Err(Infeasibility::EmptyGraph);
    }
    if pool.len() == 0 {
        return Ok(None);
    }

    let mut out_degree = vec![0usize; node_count];
    let mut in_degree = vec![0usize; node_count];
    for link in &pool.links {
        out_degree[link.from.index()] += 1;
        in_degree[link.to.index()] += 1;
    }
    let touched = |n: usize| out_degree[n] + in_degree[n] > 0;
    let first_touched = (0..node_count).find(|&n| touched(n)).unwrap_or(0);

    let (start, shape) = if pool.directed {
        let mut starts = Vec::new();
        let mut ends = 0;
        let mut other = 0;
        for n in 0..node_count {
            let (out, inn) = (out_degree[n], in_degree[n]);
            if out == inn + 1 {
                starts.push(n);
            } else if inn == out + 1 {
                ends += 1;
            } else if out != inn {
                other += 1;
            }
        }
        match (starts.as_slice(), ends, other) {
            ([], 0, 0) => (first_touched, WalkShape::Circuit),
            ([start], 1, 0) => (*start, WalkShape::Path),
            _ => {
                return Err(Infeasibility::Unbalanced {
                    starts: starts.len(),
                    ends,
                    other,
                })
            }
        }
    } else {
        // a self-loop counts once as out and once as in, adding 2 to the degree
        let odd: Vec<usize> = (0..node_count)
            .filter(|&n| (out_degree[n] + in_degree[n]) % 2 == 1)
            .collect();
        match odd.as_slice() {
            [] => (first_touched, WalkShape::Circuit),
            [start, _] => (*start, WalkShape::Path),
            _ => return Err(Infeasibility::OddDegree { count: odd.len() }),
        }
    };

    let start = NodeIndex::new(start);
    let connected = reach::reachable_mask(&Adjacency::undirected(graph), start);
    if (0..node_count).any(|n| touched(n) && !connected[n]) {
        return Err(Infeasibility::DisconnectedEdges);
    }

    Ok(Some(Plan { start, shape }))
}

/// Resolves the pool and plan, or closes the trace early.
fn prepare(
    graph: &Graph,
    mut trace: Trace,
) -> Result<(Trace, Adjacency, LinkPool, Plan), AlgorithmResult> {
    let view = Adjacency::build(graph);
    let pool = LinkPool::new(graph, &view);

    match plan(graph, &view, &pool) {
        Ok(Some(plan)) => {
            let start = view.id(plan.start);
            trace.record(
                AlgorithmStep::new(match plan.shape {
                    WalkShape::Circuit => format!("Eulerian circuit exists, starting at {start}"),
                    WalkShape::Path => format!("Eulerian path exists, starting at {start}"),
                })
                .at_node(start)
                .with_path(&[start.to_string()]),
            );
            Ok((trace, view, pool, plan))
        }
        Ok(None) => {
            let start = view.id(NodeIndex::new(0)).to_string();
            trace.record(
                AlgorithmStep::new(format!("No links to walk, the walk is just {start}"))
                    .at_node(&start)
                    .with_path(&[start.clone()]),
            );
            Err(trace.finish(Outcome::EulerianWalk(EulerianWalk {
                shape: WalkShape::Circuit,
                walk: vec![start],
                edges: Vec::new(),
            })))
        }
        Err(reason) => Err(trace.reject(reason)),
    }
}

/// Records the closing step and builds the payload.
fn conclude(
    mut trace: Trace,
    shape: WalkShape,
    walk: Vec<String>,
    edges: Vec<Edge>,
    unused: usize,
) -> AlgorithmResult {
    if unused > 0 {
        log::warn!("eulerian walk stopped with {unused} links unused");
        trace.record(
            AlgorithmStep::new(format!("Walk stopped early, {unused} links were not used"))
                .with_path(&walk)
                .with_traversed(&edges),
        );
    }

    trace.record(
        AlgorithmStep::new(format!(
            "Eulerian {} complete: {}",
            match shape {
                WalkShape::Circuit => "circuit",
                WalkShape::Path => "path",
            },
            walk.join(" -> ")
        ))
        .with_path(&walk)
        .with_traversed(&edges),
    );

    trace.finish(Outcome::EulerianWalk(EulerianWalk { shape, walk, edges }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    fn nodes(directed: bool, ids: &[&str]) -> Graph {
        ids.iter()
            .fold(Graph::new(directed), |g, id| g.with_node(*id, NodeKind::Router))
    }

    fn plan_of(graph: &Graph) -> Result<Option<Plan>, Infeasibility> {
        let view = Adjacency::build(graph);
        let pool = LinkPool::new(graph, &view);
        plan(graph, &view, &pool)
    }

    #[test]
    fn test_undirected_path_starts_at_odd_node() {
        let graph = nodes(false, &["A", "B", "C"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("B", "C", 1.0));
        let plan = plan_of(&graph).unwrap().unwrap();
        assert_eq!(plan.start, NodeIndex::new(0));
        assert_eq!(plan.shape, WalkShape::Path);
    }

    #[test]
    fn test_undirected_odd_degree_rejected() {
        let graph = nodes(false, &["H", "A", "B", "C"])
            .with_link(Edge::new("H", "A", 1.0))
            .with_link(Edge::new("H", "B", 1.0))
            .with_link(Edge::new("H", "C", 1.0));
        assert_eq!(
            plan_of(&graph).unwrap_err(),
            Infeasibility::OddDegree { count: 4 }
        );
    }

    #[test]
    fn test_directed_balance() {
        let graph = nodes(true, &["A", "B", "C"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("B", "C", 1.0));
        let plan = plan_of(&graph).unwrap().unwrap();
        assert_eq!(plan.shape, WalkShape::Path);
        assert_eq!(plan.start, NodeIndex::new(0));

        let graph = nodes(true, &["A", "B", "C"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("A", "C", 1.0));
        assert_eq!(
            plan_of(&graph).unwrap_err(),
            Infeasibility::Unbalanced {
                starts: 0,
                ends: 2,
                other: 1
            }
        );
    }

    #[test]
    fn test_disconnected_links_rejected() {
        let graph = nodes(false, &["A", "B", "C", "D"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("B", "A", 1.0))
            .with_link(Edge::new("C", "D", 1.0))
            .with_link(Edge::new("D", "C", 1.0));
        assert_eq!(
            plan_of(&graph).unwrap_err(),
            Infeasibility::DisconnectedEdges
        );
    }

    #[test]
    fn test_isolated_nodes_do_not_matter() {
        let graph = nodes(false, &["Z", "A", "B"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("B", "A", 2.0));
        let plan = plan_of(&graph).unwrap().unwrap();
        assert_eq!(plan.shape, WalkShape::Circuit);
        assert_eq!(plan.start, NodeIndex::new(1));
    }

    #[test]
    fn test_empty_and_linkless() {
        assert_eq!(
            plan_of(&Graph::undirected()).unwrap_err(),
            Infeasibility::EmptyGraph
        );
        assert!(plan_of(&nodes(false, &["A"])).unwrap().is_none());
    }

    #[test]
    fn test_pool_successors_skip_dead_links() {
        let graph = nodes(false, &["A", "B", "C"])
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("C", "A", 1.0));
        let view = Adjacency::build(&graph);
        let mut pool = LinkPool::new(&graph, &view);
        let a = NodeIndex::new(0);
        assert_eq!(pool.successors(a).count(), 2);
        pool.alive[0] = false;
        let left: Vec<NodeIndex> = pool.successors(a).collect();
        assert_eq!(left, vec![NodeIndex::new(2)]);
    }
}
