//! Two-zone partition check.

use std::collections::VecDeque;

use crate::{
    algorithms::Algorithm,
    graph::{Adjacency, Graph, GraphBase},
    trace::{AlgorithmResult, AlgorithmStep, Bipartition, Outcome, Trace},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    A,
    B,
}

impl Zone {
    fn opposite(self) -> Self {
        match self {
            Zone::A => Zone::B,
            Zone::B => Zone::A,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Zone::A => "A",
            Zone::B => "B",
        }
    }
}

/// Splits the topology into two zones so that every link crosses between them.
///
/// Colours by BFS, starting every uncoloured component in zone A. Link direction is
/// ignored. The first link with both endpoints in the same zone ends the run with
/// `is_bipartite == false` and that link as the conflict.
///
/// # Examples
///
/// ```rust
/// use topograph::{algorithms::bipartite, Edge, Graph, NodeKind};
///
/// let graph = Graph::undirected()
///     .with_node("sw", NodeKind::Switch)
///     .with_node("pc1", NodeKind::Pc)
///     .with_node("pc2", NodeKind::Pc)
///     .with_link(Edge::new("sw", "pc1", 1.0))
///     .with_link(Edge::new("sw", "pc2", 1.0));
///
/// let parts = bipartite(&graph).bipartition().cloned().unwrap();
/// assert!(parts.is_bipartite);
/// assert_eq!(parts.set_a, vec!["sw"]);
/// assert_eq!(parts.set_b, vec!["pc1", "pc2"]);
/// ```
#[must_use]
pub fn bipartite(graph: &Graph) -> AlgorithmResult {
    let mut trace = Trace::new(Algorithm::Bipartite);
    let view = Adjacency::undirected(graph);

    let mut zone: Vec<Option<Zone>> = vec![None; view.node_count()];
    let mut set_a: Vec<String> = Vec::new();
    let mut set_b: Vec<String> = Vec::new();
    let mut queue = VecDeque::new();

    for root in view.node_indices() {
        if zone[root.index()].is_some() {
            continue;
        }

        zone[root.index()] = Some(Zone::A);
        let id = view.id(root);
        set_a.push(id.to_string());
        trace.record(
            AlgorithmStep::new(format!("Starting a new component at {id} in zone A"))
                .at_node(id)
                .with_zones(&set_a, &set_b),
        );
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            let Some(here) = zone[node.index()] else {
                continue;
            };

            for entry in view.neighbors(node) {
                let (from, to) = (view.id(node), view.id(entry.node));
                match zone[entry.node.index()] {
                    None => {
                        let there = here.opposite();
                        zone[entry.node.index()] = Some(there);
                        match there {
                            Zone::A => set_a.push(to.to_string()),
                            Zone::B => set_b.push(to.to_string()),
                        }
                        queue.push_back(entry.node);

                        trace.record(
                            AlgorithmStep::new(format!(
                                "Placed {to} in zone {} opposite {from}",
                                there.name()
                            ))
                            .at_node(to)
                            .on_link(view.link_ref(node, entry.node))
                            .with_zones(&set_a, &set_b),
                        );
                    }
                    Some(there) if there == here => {
                        let link = view.link_ref(node, entry.node);
                        trace.record(
                            AlgorithmStep::new(format!(
                                "Conflict: {from} and {to} are both in zone {}, the topology cannot be split in two",
                                here.name()
                            ))
                            .at_node(to)
                            .on_link(link.clone())
                            .with_zones(&set_a, &set_b),
                        );
                        return trace.finish(Outcome::Bipartition(Bipartition {
                            is_bipartite: false,
                            set_a,
                            set_b,
                            conflict: Some(link),
                        }));
                    }
                    Some(_) => {}
                }
            }
        }
    }

    trace.record(
        AlgorithmStep::new(format!(
            "Topology is bipartite: zone A has {} nodes, zone B has {}",
            set_a.len(),
            set_b.len()
        ))
        .with_zones(&set_a, &set_b),
    );

    trace.finish(Outcome::Bipartition(Bipartition {
        is_bipartite: true,
        set_a,
        set_b,
        conflict: None,
    }))
}
