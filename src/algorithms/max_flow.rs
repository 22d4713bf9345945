//! Edmonds-Karp maximum flow.
//!
//! The residual network is a dense `|V| x |V|` matrix, which is plenty at topology scale
//! and keeps parallel links trivial: their capacities simply add up. Self-loops carry no
//! flow and are ignored. Residual capacities at or below [`EPSILON`] count as saturated, and
//! so does a NaN residual, which is what an infinite capacity leaves behind once it carries
//! an infinite bottleneck.

use std::collections::{BTreeMap, VecDeque};

use crate::{
    algorithms::Algorithm,
    graph::{Adjacency, Edge, Graph, GraphBase, NodeIndex},
    trace::{AlgorithmResult, AlgorithmStep, EdgeFlow, Infeasibility, LinkRef, MaxFlow, Outcome, Trace},
};

/// Residual capacities at or below this are treated as zero.
const EPSILON: f64 = 1e-9;

/// Capacity and residual matrices for one run.
struct Network {
    capacity: Vec<Vec<f64>>,
    residual: Vec<Vec<f64>>,
    /// Distinct node pairs joined by at least one link, in first-seen link order
    pairs: Vec<(NodeIndex, NodeIndex)>,
    directed: bool,
}

impl Network {
    fn new(graph: &Graph, view: &Adjacency) -> Self {
        let node_count = view.node_count();
        let directed = graph.is_directed;
        let mut capacity = vec![vec![0.0; node_count]; node_count];
        let mut pairs: Vec<(NodeIndex, NodeIndex)> = Vec::new();

        for link in &graph.links {
            let (Some(u), Some(v)) = (view.index_of(&link.source), view.index_of(&link.target))
            else {
                continue;
            };
            if u == v {
                continue;
            }

            let amount = link.effective_capacity().max(0.0);
            let known = pairs
                .iter()
                .any(|&(a, b)| (a, b) == (u, v) || (!directed && (a, b) == (v, u)));
            if !known {
                pairs.push((u, v));
            }

            capacity[u.index()][v.index()] += amount;
            if !directed {
                capacity[v.index()][u.index()] += amount;
            }
        }

        Self {
            residual: capacity.clone(),
            capacity,
            pairs,
            directed,
        }
    }

    /// Net flow per node pair, inferred from capacity minus residual.
    ///
    /// Undirected pairs report the direction the flow actually runs in; pairs without flow
    /// keep the orientation of their first link.
    fn flows(&self, view: &Adjacency) -> Vec<EdgeFlow> {
        self.pairs
            .iter()
            .map(|&(u, v)| {
                let (a, b) = (u.index(), v.index());
                let cap = self.capacity[a][b];
                let forward = used(cap, self.residual[a][b]);
                let backward = used(cap, self.residual[b][a]);
                let (from, to, flow) = if self.directed {
                    (u, v, forward.max(0.0))
                } else if forward > EPSILON {
                    (u, v, forward)
                } else if backward > EPSILON {
                    (v, u, backward)
                } else {
                    (u, v, 0.0)
                };

                EdgeFlow {
                    source: view.id(from).to_string(),
                    target: view.id(to).to_string(),
                    flow: if flow > EPSILON { flow } else { 0.0 },
                    capacity: cap,
                }
            })
            .collect()
    }

    /// Breadth-first search over edges with spare residual capacity.
    ///
    /// Records one step per dequeued node and stops as soon as `sink` is discovered.
    /// Returns the parent of every discovered node and the discovered mask.
    fn search(
        &self,
        view: &Adjacency,
        source: NodeIndex,
        sink: NodeIndex,
        trace: &mut Trace,
        explored: &mut Vec<String>,
    ) -> (Vec<Option<NodeIndex>>, Vec<bool>) {
        let node_count = view.node_count();
        let mut parent = vec![None; node_count];
        let mut seen = vec![false; node_count];
        let mut frontier: Vec<Edge> = Vec::new();
        let mut queue = VecDeque::new();

        seen[source.index()] = true;
        queue.push_back(source);
        mark(explored, view.id(source));

        while let Some(node) = queue.pop_front() {
            let u = node.index();
            for v in 0..node_count {
                if seen[v] || !has_room(self.residual[u][v]) {
                    continue;
                }
                seen[v] = true;
                let next = NodeIndex::new(v);
                parent[v] = Some(node);
                frontier.push(
                    Edge::new(view.id(node), view.id(next), self.residual[u][v])
                        .with_capacity(self.capacity[u][v]),
                );
                mark(explored, view.id(next));
                queue.push_back(next);
            }

            let id = view.id(node);
            trace.record(
                AlgorithmStep::new(format!("Expanding {id} in the residual graph"))
                    .at_node(id)
                    .with_visited(explored)
                    .with_traversed(&frontier),
            );

            if seen[sink.index()] {
                break;
            }
        }

        (parent, seen)
    }
}

/// Spare capacity worth augmenting along; false for NaN.
fn has_room(residual: f64) -> bool {
    residual > EPSILON
}

/// Capacity in use on one direction of a pair. A NaN residual is a saturated infinite link.
fn used(capacity: f64, residual: f64) -> f64 {
    if residual.is_nan() {
        capacity
    } else {
        capacity - residual
    }
}

fn mark(explored: &mut Vec<String>, id: &str) {
    if !explored.iter().any(|seen| seen == id) {
        explored.push(id.to_string());
    }
}

fn flow_map(flows: &[EdgeFlow]) -> BTreeMap<String, f64> {
    flows
        .iter()
        .map(|entry| (LinkRef::new(&entry.source, &entry.target).key(), entry.flow))
        .collect()
}

/// Maximum flow from `source` to `sink`, with the matching minimum cut.
///
/// Capacities come from [`Edge::effective_capacity`]. Undirected links can carry flow in
/// either direction up to their capacity. Each augmentation records three steps: the path,
/// its bottleneck, and the refreshed per-link flow map.
///
/// # Examples
///
/// ```rust
/// use topograph::{algorithms::edmonds_karp, Edge, Graph, NodeKind};
///
/// let graph = Graph::undirected()
///     .with_node("A", NodeKind::Router)
///     .with_node("B", NodeKind::Router)
///     .with_node("C", NodeKind::Server)
///     .with_link(Edge::new("A", "B", 1.0).with_capacity(5.0))
///     .with_link(Edge::new("B", "C", 1.0).with_capacity(3.0))
///     .with_link(Edge::new("A", "C", 1.0).with_capacity(1.0));
///
/// let flow = edmonds_karp(&graph, "A", "C").max_flow().cloned().unwrap();
/// assert_eq!(flow.value, 4.0);
/// assert_eq!(flow.cut_capacity(), 4.0);
/// ```
#[must_use]
pub fn edmonds_karp(graph: &Graph, source: &str, sink: &str) -> AlgorithmResult {
    let mut trace = Trace::new(Algorithm::EdmondsKarp);

    let view = Adjacency::build(graph);
    let Some(s) = view.index_of(source) else {
        return trace.reject(Infeasibility::UnknownNode {
            id: source.to_string(),
        });
    };
    let Some(t) = view.index_of(sink) else {
        return trace.reject(Infeasibility::UnknownNode {
            id: sink.to_string(),
        });
    };
    if s == t {
        return trace.reject(Infeasibility::SameTerminals {
            id: source.to_string(),
        });
    }

    let mut network = Network::new(graph, &view);
    let mut explored: Vec<String> = Vec::new();
    let mut augmenting_paths: Vec<Vec<String>> = Vec::new();
    let mut value = 0.0;

    let reachable = loop {
        let (parent, seen) = network.search(&view, s, t, &mut trace, &mut explored);
        if !seen[t.index()] {
            trace.record(
                AlgorithmStep::new(format!(
                    "No augmenting path left: {sink} is unreachable in the residual graph"
                ))
                .at_node(sink)
                .with_visited(&explored),
            );
            break seen;
        }

        let mut path = vec![t];
        let mut current = t;
        while let Some(previous) = parent[current.index()] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        let names = view.names(&path);

        trace.record(
            AlgorithmStep::new(format!("Augmenting path {}", names.join(" -> ")))
                .at_node(sink)
                .with_path(&names),
        );

        let bottleneck = path
            .windows(2)
            .map(|hop| network.residual[hop[0].index()][hop[1].index()])
            .fold(f64::INFINITY, f64::min);

        trace.record(
            AlgorithmStep::new(format!("Bottleneck of this path is {bottleneck}"))
                .with_path(&names),
        );

        for hop in path.windows(2) {
            let (u, v) = (hop[0].index(), hop[1].index());
            network.residual[u][v] -= bottleneck;
            network.residual[v][u] += bottleneck;
        }
        value += bottleneck;
        augmenting_paths.push(names.clone());

        let flows = network.flows(&view);
        trace.record(
            AlgorithmStep::new(format!(
                "Pushed {bottleneck} units along the path, total flow is now {value}"
            ))
            .with_path(&names)
            .with_flow(&flow_map(&flows)),
        );
    };

    let flows = network.flows(&view);
    let source_side: Vec<String> = view
        .node_indices()
        .filter(|node| reachable[node.index()])
        .map(|node| view.id(node).to_string())
        .collect();

    let cut: Vec<Edge> = graph
        .links
        .iter()
        .filter_map(|link| {
            let u = view.index_of(&link.source)?;
            let v = view.index_of(&link.target)?;
            let (from_side, to_side) = (reachable[u.index()], reachable[v.index()]);
            if from_side && !to_side {
                Some(link.clone())
            } else if !graph.is_directed && to_side && !from_side {
                Some(Edge {
                    source: link.target.clone(),
                    target: link.source.clone(),
                    ..link.clone()
                })
            } else {
                None
            }
        })
        .collect();

    trace.record(
        AlgorithmStep::new(format!(
            "Maximum flow from {source} to {sink} is {value}, minimum cut has {} links, \
             source side is {}",
            cut.len(),
            source_side.join(", ")
        ))
        .with_visited(&explored)
        .with_path(&source_side)
        .with_traversed(&cut)
        .with_flow(&flow_map(&flows)),
    );

    trace.finish(Outcome::MaxFlow(MaxFlow {
        source: source.to_string(),
        sink: sink.to_string(),
        value,
        flows,
        augmenting_paths,
        source_side,
        cut,
    }))
}
