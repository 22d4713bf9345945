use std::path::Path;

use serde::Serialize;
use topograph::{validate, Graph};

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, validation_config},
    output::{field, print_output, TextTable},
};

#[derive(Debug, Serialize)]
pub struct TopologyInfo {
    pub directed: bool,
    pub node_count: usize,
    pub link_count: usize,
    pub total_weight: f64,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub nodes: Vec<NodeInfo>,
}

#[derive(Debug, Serialize)]
pub struct NodeInfo {
    pub id: String,
    pub label: String,
    pub kind: String,
    pub out_degree: usize,
    pub in_degree: usize,
}

fn describe(graph: &Graph) -> Vec<NodeInfo> {
    graph
        .nodes
        .iter()
        .map(|node| {
            let out_degree = graph.links.iter().filter(|l| l.source == node.id).count();
            let in_degree = graph.links.iter().filter(|l| l.target == node.id).count();
            NodeInfo {
                id: node.id.clone(),
                label: node.label.clone(),
                kind: node.kind.to_string(),
                out_degree,
                in_degree,
            }
        })
        .collect()
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    let config = validation_config(&opts.validation)?;
    let validation = validate(&graph, &config);

    let info = TopologyInfo {
        directed: graph.is_directed,
        node_count: graph.node_count(),
        link_count: graph.link_count(),
        total_weight: graph.links.iter().map(|l| l.weight).sum(),
        valid: validation.is_ok(),
        error_message: validation.err().map(|e| e.to_string()),
        nodes: describe(&graph),
    };

    print_output(&info, opts, |info| {
        let direction = if info.directed { "directed" } else { "undirected" };
        field("Topology", direction);
        field("Nodes", info.node_count);
        field("Links", info.link_count);
        field("Total weight", info.total_weight);
        match &info.error_message {
            None => field("Valid", format!("yes ({})", opts.validation)),
            Some(message) => field("Valid", format!("no, {message}")),
        }

        if info.nodes.is_empty() {
            return;
        }

        println!();
        if info.directed {
            let mut table = TextTable::new(&["Id", "Kind", "Label", "Out", "In"], &[3, 4]).nested();
            for node in &info.nodes {
                table.row([
                    node.id.clone(),
                    node.kind.clone(),
                    node.label.clone(),
                    node.out_degree.to_string(),
                    node.in_degree.to_string(),
                ]);
            }
            table.print();
        } else {
            let mut table = TextTable::new(&["Id", "Kind", "Label", "Degree"], &[3]).nested();
            for node in &info.nodes {
                table.row([
                    node.id.clone(),
                    node.kind.clone(),
                    node.label.clone(),
                    (node.out_degree + node.in_degree).to_string(),
                ]);
            }
            table.print();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use topograph::{Edge, NodeKind};

    #[test]
    fn degrees_count_both_ends() {
        let graph = Graph::undirected()
            .with_node("A", NodeKind::Router)
            .with_node("B", NodeKind::Pc)
            .with_link(Edge::new("A", "B", 1.0))
            .with_link(Edge::new("A", "A", 1.0));
        let nodes = describe(&graph);

        assert_eq!(nodes[0].out_degree + nodes[0].in_degree, 3);
        assert_eq!(nodes[1].in_degree, 1);
        assert_eq!(nodes[1].kind, "pc");
    }
}
