use serde::Serialize;
use strum::IntoEnumIterator;
use topograph::Algorithm;

use crate::{
    app::GlobalOptions,
    output::{print_output, TextTable},
};

#[derive(Debug, Serialize)]
pub struct AlgorithmEntry {
    name: String,
    start: &'static str,
    end: &'static str,
    description: &'static str,
}

fn requirement(needed: bool, accepted: bool, role: &'static str) -> &'static str {
    match (needed, accepted, role) {
        (true, _, "source") => "source",
        (true, _, "sink") => "sink",
        (true, _, _) => "required",
        (false, true, _) => "optional",
        (false, false, _) => "-",
    }
}

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let entries: Vec<AlgorithmEntry> = Algorithm::iter()
        .map(|algorithm| AlgorithmEntry {
            name: algorithm.to_string(),
            start: requirement(
                algorithm.needs_start(),
                algorithm.accepts_start(),
                algorithm.start_role(),
            ),
            end: requirement(
                algorithm.needs_end(),
                algorithm.accepts_end(),
                algorithm.end_role(),
            ),
            description: algorithm.description(),
        })
        .collect();

    print_output(&entries, opts, |entries| {
        let mut table = TextTable::new(&["Algorithm", "Start", "End", "Description"], &[]);
        for entry in entries {
            table.row([entry.name.as_str(), entry.start, entry.end, entry.description]);
        }
        table.print();
    })
}
