use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// topograph - step-traced graph algorithms on network topology snapshots
#[derive(Debug, Parser)]
#[command(name = "topograph", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output, one line per recorded step.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Snapshot validation level: disabled, minimal, production, or strict.
    #[arg(long, global = true, default_value = "production")]
    pub validation: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one algorithm on a topology snapshot and print its trace.
    Run {
        /// Path to the topology JSON file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Algorithm name (see `topograph list`).
        #[arg(short, long)]
        algorithm: String,

        /// Start node id (the source for max-flow).
        #[arg(short, long, value_name = "ID")]
        start: Option<String>,

        /// End node id (the sink for max-flow).
        #[arg(short, long, value_name = "ID")]
        end: Option<String>,

        /// Output format: text, dot, json.
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the available algorithms and the node ids they need.
    List,

    /// Display a snapshot overview: counts, direction and per-node degrees.
    Info {
        /// Path to the topology JSON file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}
