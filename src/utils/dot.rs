//! DOT format rendering of topology snapshots.
//!
//! Output can be rendered with Graphviz tools. Result edges (a shortest path, a spanning
//! tree, an Eulerian walk, ...) can be passed in to be drawn bold and coloured.

use std::fmt::Write;

use crate::graph::{Edge, Graph, NodeKind};

/// Escapes a string for safe use in DOT format labels and identifiers.
///
/// This function handles all characters that have special meaning in DOT format,
/// including quotes, backslashes, newlines, and angle brackets.
///
/// # Arguments
///
/// * `s` - The string to escape
///
/// # Returns
///
/// A new string with all special characters properly escaped.
///
/// # Examples
///
/// ```rust
/// use topograph::utils::escape_dot;
///
/// let escaped = escape_dot("core<1>");
/// assert_eq!(escaped, "core\\<1\\>");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

fn shape(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Router => "ellipse",
        NodeKind::Switch => "box",
        NodeKind::Pc => "note",
        NodeKind::Server => "box3d",
    }
}

/// Renders `graph` as a DOT document.
///
/// Links matching an entry of `highlighted` (orientation ignored for undirected snapshots)
/// are drawn bold and red. Links pointing at missing nodes are skipped.
///
/// # Examples
///
/// ```rust
/// use topograph::{utils::dot, Edge, Graph, NodeKind};
///
/// let graph = Graph::undirected()
///     .with_node("A", NodeKind::Router)
///     .with_node("B", NodeKind::Pc)
///     .with_link(Edge::new("A", "B", 2.0));
///
/// let text = dot::render(&graph, &[Edge::new("B", "A", 2.0)]);
/// assert!(text.starts_with("graph Topology {"));
/// assert!(text.contains("\"A\" -- \"B\" [label=\"2\", penwidth=3, color=red];"));
/// ```
#[must_use]
pub fn render(graph: &Graph, highlighted: &[Edge]) -> String {
    let (keyword, arrow) = if graph.is_directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut dot = String::new();
    let _ = writeln!(dot, "{keyword} Topology {{");
    dot.push_str("    node [fontname=\"Courier\", fontsize=10];\n");
    dot.push_str("    edge [fontname=\"Courier\", fontsize=9];\n\n");

    for node in &graph.nodes {
        let _ = writeln!(
            dot,
            "    \"{}\" [label=\"{}\", shape={}];",
            escape_dot(&node.id),
            escape_dot(&node.label),
            shape(node.kind)
        );
    }

    dot.push('\n');

    for link in &graph.links {
        if !graph.contains_node(&link.source) || !graph.contains_node(&link.target) {
            continue;
        }

        let label = match link.capacity {
            Some(capacity) => format!("{} / {}", link.weight, capacity),
            None => link.weight.to_string(),
        };
        let emphasis = if highlighted
            .iter()
            .any(|edge| link.connects(&edge.source, &edge.target, graph.is_directed))
        {
            ", penwidth=3, color=red"
        } else {
            ""
        };

        let _ = writeln!(
            dot,
            "    \"{}\" {arrow} \"{}\" [label=\"{}\"{emphasis}];",
            escape_dot(&link.source),
            escape_dot(&link.target),
            escape_dot(&label),
        );
    }

    dot.push_str("}\n");
    dot
}
