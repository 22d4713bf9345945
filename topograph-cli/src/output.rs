use std::fmt::Display;

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;
use topograph::{AlgorithmResult, MaxFlow, ShortestPaths};

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Prints `Label:` padded to a fixed width, then the value.
pub fn field(label: &str, value: impl Display) {
    println!("{:<15}{value}", format!("{label}:"));
}

/// A borderless table whose numeric columns are right-aligned.
///
/// Columns are separated by two spaces; trailing whitespace is trimmed on print.
pub struct TextTable {
    table: Table,
    indent: &'static str,
}

impl TextTable {
    /// Creates a table; `numeric` lists the column positions to right-align.
    pub fn new(headers: &[&str], numeric: &[usize]) -> Self {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(headers.to_vec());

        let last = headers.len().saturating_sub(1);
        for position in 0..headers.len() {
            if let Some(column) = table.column_mut(position) {
                if numeric.contains(&position) {
                    column.set_cell_alignment(CellAlignment::Right);
                }
                column.set_padding((0, if position == last { 0 } else { 2 }));
            }
        }

        Self { table, indent: "" }
    }

    /// Nests the table under a heading.
    pub fn nested(mut self) -> Self {
        self.indent = "  ";
        self
    }

    pub fn row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: ToString,
    {
        self.table
            .add_row(cells.into_iter().map(|cell| cell.to_string()).collect::<Vec<_>>());
    }

    pub fn render(&self) -> String {
        self.table
            .to_string()
            .lines()
            .map(|line| format!("{}{}", self.indent, line.trim_end()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

/// One row per recorded step: position, focus node, focus link, log line.
pub fn trace_table(result: &AlgorithmResult) -> TextTable {
    let mut table = TextTable::new(&["#", "Node", "Link", "Step"], &[0]);
    for (position, step) in result.steps.iter().enumerate() {
        table.row([
            (position + 1).to_string(),
            step.current_node_id.clone().unwrap_or_default(),
            step.current_link_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            step.log.clone(),
        ]);
    }
    table
}

/// Final distance per node, `inf` when unreachable.
pub fn distance_table(paths: &ShortestPaths) -> TextTable {
    let mut table = TextTable::new(&["Node", "Distance"], &[1]).nested();
    for entry in &paths.distances {
        let distance = entry
            .distance
            .map_or_else(|| "inf".to_string(), |d| d.to_string());
        table.row([entry.node.clone(), distance]);
    }
    table
}

/// Net flow per node pair against its capacity.
pub fn flow_table(flow: &MaxFlow) -> TextTable {
    let mut table = TextTable::new(&["From", "To", "Flow", "Capacity"], &[2, 3]).nested();
    for entry in &flow.flows {
        table.row([
            entry.source.clone(),
            entry.target.clone(),
            entry.flow.to_string(),
            entry.capacity.to_string(),
        ]);
    }
    table
}

/// Joins node ids into a readable route, `A -> B -> C`.
pub fn arrow_path(ids: &[String]) -> String {
    ids.join(" -> ")
}
