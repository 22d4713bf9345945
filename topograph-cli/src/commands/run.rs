use std::path::Path;

use anyhow::{bail, Context};
use topograph::{
    run_validated, utils::dot, Algorithm, AlgorithmRequest, AlgorithmResult, Outcome, WalkShape,
};

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, validation_config},
    output::{arrow_path, distance_table, field, flow_table, print_output, trace_table},
};

pub fn run(
    path: &Path,
    algorithm: &str,
    start: Option<&str>,
    end: Option<&str>,
    format: &str,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    let config = validation_config(&opts.validation)?;
    let algorithm = Algorithm::parse(algorithm)?;

    let request = AlgorithmRequest {
        algorithm,
        start: start.map(str::to_string),
        end: end.map(str::to_string),
    };
    let result = run_validated(&graph, &request, &config)
        .with_context(|| format!("cannot run {algorithm} on {}", path.display()))?;

    match format {
        "dot" => {
            print!("{}", dot::render(&graph, &result.highlighted_edges()));
            Ok(())
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        "text" => print_output(&result, opts, print_result),
        other => bail!("unknown output format: {other} (expected text, dot, or json)"),
    }
}

fn print_result(result: &AlgorithmResult) {
    trace_table(result).print();
    println!();

    match &result.outcome {
        Outcome::Rejected(reason) => field("Rejected", reason),
        Outcome::Traversal(traversal) => {
            field("Start", &traversal.start);
            field("Order", traversal.order.join(", "));
        }
        Outcome::ShortestPaths(paths) => {
            field("Source", &paths.source);
            if let Some(route) = &paths.route {
                match route.cost {
                    Some(cost) => {
                        field("Route", format!("{} (cost {cost})", arrow_path(&route.path)));
                    }
                    None => field("Route", format!("{} is unreachable", route.target)),
                }
            }
            println!("\nDistances:");
            distance_table(paths).print();
        }
        Outcome::NegativeCycle { link } => {
            field("Negative cycle", format!("through {link}, no distances are defined"));
        }
        Outcome::SpanningTree(tree) => {
            let kind = if tree.is_forest { "Spanning forest" } else { "Spanning tree" };
            field(kind, format!("{} links, total cost {}", tree.edges.len(), tree.total_cost));
            for edge in &tree.edges {
                println!("  {edge}");
            }
        }
        Outcome::MaxFlow(flow) => {
            field("Max flow", format!("{} ({} -> {})", flow.value, flow.source, flow.sink));
            field(
                "Min cut",
                format!("{} links (capacity {})", flow.cut.len(), flow.cut_capacity()),
            );
            field("Source side", flow.source_side.join(", "));
            println!("\nFlows:");
            flow_table(flow).print();
        }
        Outcome::EulerianWalk(walk) => {
            let kind = match walk.shape {
                WalkShape::Circuit => "Euler circuit",
                WalkShape::Path => "Euler path",
            };
            field(kind, arrow_path(&walk.walk));
        }
        Outcome::Bipartition(parts) => {
            if parts.is_bipartite {
                field("Zone A", parts.set_a.join(", "));
                field("Zone B", parts.set_b.join(", "));
            } else if let Some(link) = &parts.conflict {
                field("Not bipartite", format!("conflict on {link}"));
            }
        }
    }
}
