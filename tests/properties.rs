//! Integration tests for the algorithm suite.
//!
//! Each test checks one cross-algorithm property over a set of hand-built topologies:
//! traversal coverage, agreement between the shortest-path algorithms, agreement between
//! the spanning-tree algorithms, max-flow/min-cut duality, Eulerian walk completeness and
//! bipartite partitions.

use topograph::graph::{reach, Adjacency};
use topograph::prelude::*;

fn graph_of(directed: bool, ids: &[&str], links: &[(&str, &str, f64)]) -> Graph {
    let mut graph = Graph::new(directed);
    for id in ids {
        graph.add_node(Node::new(*id, NodeKind::Router));
    }
    for (source, target, weight) in links {
        graph.add_link(Edge::new(*source, *target, *weight));
    }
    graph
}

fn triangle() -> Graph {
    graph_of(
        false,
        &["A", "B", "C"],
        &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0)],
    )
}

/// A small campus: core routers, distribution switches and hosts.
fn campus() -> Graph {
    graph_of(
        false,
        &["core1", "core2", "dist1", "dist2", "pc1", "pc2", "srv"],
        &[
            ("core1", "core2", 1.0),
            ("core1", "dist1", 4.0),
            ("core2", "dist1", 2.0),
            ("core2", "dist2", 3.0),
            ("dist1", "dist2", 5.0),
            ("dist1", "pc1", 1.0),
            ("dist2", "pc2", 1.0),
            ("core1", "srv", 7.0),
            ("dist2", "srv", 2.0),
        ],
    )
}

fn grid() -> Graph {
    let ids = ["g00", "g01", "g02", "g10", "g11", "g12", "g20", "g21", "g22"];
    let mut links = Vec::new();
    for row in 0..3 {
        for col in 0..3 {
            let here = ids[row * 3 + col];
            if col < 2 {
                links.push((here, ids[row * 3 + col + 1], (row + col + 1) as f64));
            }
            if row < 2 {
                links.push((here, ids[(row + 1) * 3 + col], (2 * row + col + 1) as f64));
            }
        }
    }
    graph_of(false, &ids, &links)
}

fn directed_mesh() -> Graph {
    graph_of(
        true,
        &["s", "a", "b", "c", "d", "t"],
        &[
            ("s", "a", 10.0),
            ("s", "c", 10.0),
            ("a", "b", 4.0),
            ("a", "c", 2.0),
            ("a", "d", 8.0),
            ("c", "d", 9.0),
            ("d", "b", 6.0),
            ("b", "t", 10.0),
            ("d", "t", 10.0),
        ],
    )
}

fn split() -> Graph {
    graph_of(
        false,
        &["A", "B", "C", "X", "Y"],
        &[("A", "B", 1.0), ("B", "C", 1.0), ("X", "Y", 3.0)],
    )
}

fn topologies() -> Vec<Graph> {
    vec![triangle(), campus(), grid(), directed_mesh(), split()]
}

#[test]
fn traversal_covers_exactly_the_reachable_component() {
    for graph in topologies() {
        let view = Adjacency::build(&graph);
        for node in &graph.nodes {
            let start = view.index_of(&node.id).unwrap();
            let expected = reach::reachable_count(&view, start);

            for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
                let result = run(&graph, &AlgorithmRequest::new(algorithm).with_start(&node.id));
                let traversal = result.traversal().unwrap();
                assert_eq!(traversal.order.len(), expected, "{algorithm} from {}", node.id);
                assert!(traversal.order.len() <= graph.node_count());
                assert_eq!(traversal.tree.len(), expected - 1);
                assert_eq!(
                    result.final_step().unwrap().visited.as_ref().unwrap().len(),
                    expected
                );
            }
        }
    }
}

#[test]
fn dijkstra_and_bellman_ford_agree() {
    for graph in topologies() {
        for node in &graph.nodes {
            let fast = run(
                &graph,
                &AlgorithmRequest::new(Algorithm::Dijkstra).with_start(&node.id),
            );
            let slow = run(
                &graph,
                &AlgorithmRequest::new(Algorithm::BellmanFord).with_start(&node.id),
            );
            let fast = fast.shortest_paths().unwrap();
            let slow = slow.shortest_paths().unwrap();

            for other in &graph.nodes {
                let (a, b) = (fast.distance_to(&other.id), slow.distance_to(&other.id));
                match (a, b) {
                    (Some(a), Some(b)) => {
                        assert!((a - b).abs() < 1e-9, "{} -> {}", node.id, other.id);
                    }
                    (None, None) => {}
                    _ => panic!("reachability differs for {} -> {}", node.id, other.id),
                }
            }
            assert_eq!(fast.unreachable, slow.unreachable);
        }
    }
}

#[test]
fn bellman_ford_never_returns_distances_through_negative_cycles() {
    let graph = graph_of(
        true,
        &["s", "a", "b", "c"],
        &[("s", "a", 1.0), ("a", "b", 1.0), ("b", "c", -4.0), ("c", "a", 1.0)],
    );
    let result = run(
        &graph,
        &AlgorithmRequest::new(Algorithm::BellmanFord)
            .with_start("s")
            .with_end("c"),
    );
    assert!(matches!(result.outcome, Outcome::NegativeCycle { .. }));
    assert!(result.shortest_paths().is_none());

    // starting on the cycle itself
    let result = run(
        &graph,
        &AlgorithmRequest::new(Algorithm::BellmanFord).with_start("c"),
    );
    assert!(matches!(result.outcome, Outcome::NegativeCycle { .. }));

    let isolated = graph_of(
        true,
        &["s", "t", "a", "b"],
        &[("s", "t", 2.0), ("a", "b", -1.0), ("b", "a", -1.0)],
    );
    let result = run(
        &isolated,
        &AlgorithmRequest::new(Algorithm::BellmanFord).with_start("s"),
    );
    assert_eq!(result.shortest_paths().unwrap().distance_to("t"), Some(2.0));
}

#[test]
fn prim_and_kruskal_build_trees_of_equal_cost() {
    for graph in [triangle(), campus(), grid()] {
        let prim = run(&graph, &AlgorithmRequest::new(Algorithm::Prim));
        let kruskal = run(&graph, &AlgorithmRequest::new(Algorithm::Kruskal));
        let (prim, kruskal) = (prim.spanning_tree().unwrap(), kruskal.spanning_tree().unwrap());

        assert!(!prim.is_forest);
        assert!(!kruskal.is_forest);
        assert_eq!(prim.edges.len(), graph.node_count() - 1);
        assert_eq!(kruskal.edges.len(), graph.node_count() - 1);
        assert!((prim.total_cost - kruskal.total_cost).abs() < 1e-9);
    }
}

#[test]
fn spanning_trees_reject_directed_topologies() {
    for algorithm in [Algorithm::Prim, Algorithm::Kruskal] {
        let result = run(&directed_mesh(), &AlgorithmRequest::new(algorithm));
        assert_eq!(result.rejection(), Some(&Infeasibility::DirectedGraph));
        assert_eq!(result.steps.len(), 1);
    }
}

#[test]
fn max_flow_equals_min_cut_and_conserves_flow() {
    let cases = [
        (directed_mesh(), "s", "t"),
        (campus(), "core1", "pc2"),
        (grid(), "g00", "g22"),
        (triangle(), "A", "C"),
    ];

    for (graph, source, sink) in cases {
        let result = run(
            &graph,
            &AlgorithmRequest::new(Algorithm::EdmondsKarp)
                .with_start(source)
                .with_end(sink),
        );
        let flow = result.max_flow().unwrap();
        assert!(
            (flow.value - flow.cut_capacity()).abs() < 1e-9,
            "{source} -> {sink}: flow {} cut {}",
            flow.value,
            flow.cut_capacity()
        );

        for node in &graph.nodes {
            let inflow: f64 = flow
                .flows
                .iter()
                .filter(|f| f.target == node.id)
                .map(|f| f.flow)
                .sum();
            let outflow: f64 = flow
                .flows
                .iter()
                .filter(|f| f.source == node.id)
                .map(|f| f.flow)
                .sum();

            if node.id == source {
                assert!((outflow - inflow - flow.value).abs() < 1e-9);
            } else if node.id == sink {
                assert!((inflow - outflow - flow.value).abs() < 1e-9);
            } else {
                assert!((inflow - outflow).abs() < 1e-9, "imbalance at {}", node.id);
            }
        }

        for entry in &flow.flows {
            assert!(entry.flow >= 0.0);
            assert!(entry.flow <= entry.capacity + 1e-9);
        }
    }
}

#[test]
fn directed_mesh_max_flow_value() {
    let result = run(
        &directed_mesh(),
        &AlgorithmRequest::new(Algorithm::EdmondsKarp)
            .with_start("s")
            .with_end("t"),
    );
    assert_eq!(result.max_flow().unwrap().value, 19.0);
}

/// Each walk edge must consume a distinct snapshot link.
fn assert_uses_every_link_once(graph: &Graph, walk: &EulerianWalk) {
    assert_eq!(walk.walk.len(), graph.link_count() + 1);
    assert_eq!(walk.edges.len(), graph.link_count());

    let mut used = vec![false; graph.link_count()];
    for (hop, edge) in walk.walk.windows(2).zip(&walk.edges) {
        assert_eq!(edge.source, hop[0]);
        assert_eq!(edge.target, hop[1]);
        let position = graph
            .links
            .iter()
            .enumerate()
            .position(|(i, link)| {
                !used[i]
                    && link.weight == edge.weight
                    && link.connects(&edge.source, &edge.target, graph.is_directed)
            })
            .unwrap_or_else(|| panic!("{edge} is not an unused link"));
        used[position] = true;
    }
}

#[test]
fn eulerian_walks_use_every_link_once() {
    let cases = [
        // circuit: every degree even
        graph_of(
            false,
            &["A", "B", "C", "D", "E"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 2.0),
                ("C", "A", 3.0),
                ("C", "D", 4.0),
                ("D", "E", 5.0),
                ("E", "C", 6.0),
            ],
        ),
        // open path between the two odd nodes
        graph_of(
            false,
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 2.0),
                ("C", "D", 3.0),
                ("D", "A", 4.0),
                ("A", "C", 5.0),
            ],
        ),
        // directed circuit with a detour
        graph_of(
            true,
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 2.0),
                ("C", "A", 3.0),
                ("B", "D", 4.0),
                ("D", "B", 5.0),
            ],
        ),
        // directed path
        graph_of(
            true,
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 2.0), ("C", "A", 3.0), ("A", "C", 4.0)],
        ),
    ];

    for graph in &cases {
        for algorithm in [Algorithm::Fleury, Algorithm::Hierholzer] {
            let result = run(graph, &AlgorithmRequest::new(algorithm));
            let walk = result
                .eulerian_walk()
                .unwrap_or_else(|| panic!("{algorithm}: {:?}", result.rejection()));
            assert_uses_every_link_once(graph, walk);
            if walk.shape == WalkShape::Circuit {
                assert_eq!(walk.walk.first(), walk.walk.last());
            }
        }
    }
}

#[test]
fn eulerian_walks_reject_degree_infeasible_topologies() {
    for graph in [campus(), grid(), directed_mesh()] {
        for algorithm in [Algorithm::Fleury, Algorithm::Hierholzer] {
            let result = run(&graph, &AlgorithmRequest::new(algorithm));
            assert!(matches!(
                result.rejection(),
                Some(Infeasibility::OddDegree { .. } | Infeasibility::Unbalanced { .. })
            ));
            assert_eq!(result.steps.len(), 1);
        }
    }
}

#[test]
fn bipartite_partitions() {
    let result = run(&grid(), &AlgorithmRequest::new(Algorithm::Bipartite));
    let parts = result.bipartition().unwrap();
    assert!(parts.is_bipartite);
    assert_eq!(parts.set_a.len() + parts.set_b.len(), 9);
    assert!(parts.set_a.iter().all(|id| !parts.set_b.contains(id)));
    for link in &grid().links {
        let a_side = parts.set_a.contains(&link.source);
        assert_ne!(a_side, parts.set_a.contains(&link.target), "{link}");
    }

    for graph in [triangle(), campus()] {
        let result = run(&graph, &AlgorithmRequest::new(Algorithm::Bipartite));
        let parts = result.bipartition().unwrap();
        assert!(!parts.is_bipartite);
        assert!(parts.conflict.is_some());
    }
}

#[test]
fn reference_triangle() {
    let graph = triangle();

    let result = run(
        &graph,
        &AlgorithmRequest::new(Algorithm::Dijkstra)
            .with_start("A")
            .with_end("C"),
    );
    let route = result.shortest_paths().unwrap().route.clone().unwrap();
    assert_eq!(route.path, vec!["A", "B", "C"]);
    assert_eq!(route.cost, Some(3.0));

    for algorithm in [Algorithm::Prim, Algorithm::Kruskal] {
        let result = run(&graph, &AlgorithmRequest::new(algorithm));
        let tree = result.spanning_tree().unwrap();
        assert_eq!(tree.total_cost, 3.0);
        let mut chosen: Vec<(String, String)> = tree
            .edges
            .iter()
            .map(|e| {
                let mut pair = [e.source.clone(), e.target.clone()];
                pair.sort();
                (pair[0].clone(), pair[1].clone())
            })
            .collect();
        chosen.sort();
        assert_eq!(
            chosen,
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string())
            ]
        );
    }

    let mut graph = triangle();
    for (link, capacity) in graph.links.iter_mut().zip([5.0, 3.0, 1.0]) {
        link.capacity = Some(capacity);
    }
    let result = run(
        &graph,
        &AlgorithmRequest::new(Algorithm::EdmondsKarp)
            .with_start("A")
            .with_end("C"),
    );
    assert_eq!(result.max_flow().unwrap().value, 4.0);
}

#[test]
fn every_result_keeps_logs_and_steps_in_sync() {
    for graph in topologies() {
        let first = graph.nodes[0].id.clone();
        let last = graph.nodes[graph.node_count() - 1].id.clone();
        for algorithm in <Algorithm as strum::IntoEnumIterator>::iter() {
            let result = run(
                &graph,
                &AlgorithmRequest::new(algorithm)
                    .with_start(&first)
                    .with_end(&last),
            );
            assert!(!result.steps.is_empty());
            let logs: Vec<&String> = result.steps.iter().map(|s| &s.log).collect();
            assert_eq!(result.logs.iter().collect::<Vec<_>>(), logs);
        }
    }
}

/// `visited` is cumulative: once a node appears in a step it stays in every later step
/// that carries the field.
#[test]
fn visited_never_shrinks() {
    let mut capacitated = triangle();
    for (link, capacity) in capacitated.links.iter_mut().zip([5.0, 3.0, 1.0]) {
        link.capacity = Some(capacity);
    }
    let mut graphs = topologies();
    graphs.push(capacitated);

    for graph in &graphs {
        let first = graph.nodes[0].id.clone();
        let last = graph.nodes[graph.node_count() - 1].id.clone();
        for algorithm in <Algorithm as strum::IntoEnumIterator>::iter() {
            let result = run(
                graph,
                &AlgorithmRequest::new(algorithm)
                    .with_start(&first)
                    .with_end(&last),
            );

            let mut seen: Vec<String> = Vec::new();
            for (position, step) in result.steps.iter().enumerate() {
                let Some(visited) = &step.visited else {
                    continue;
                };
                let dropped: Vec<&String> =
                    seen.iter().filter(|id| !visited.contains(id)).collect();
                assert!(
                    dropped.is_empty(),
                    "{algorithm}: step {} '{}' dropped {dropped:?}",
                    position + 1,
                    step.log
                );
                seen.clone_from(visited);
            }
        }
    }
}
