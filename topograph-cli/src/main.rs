mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })?;

    let cli = Cli::parse();

    // topograph info+ on stderr unless --json; --verbose adds per-step debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("topograph", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Run {
            path,
            algorithm,
            start,
            end,
            format,
        } => commands::run::run(
            path,
            algorithm,
            start.as_deref(),
            end.as_deref(),
            format,
            &cli.global,
        ),
        Command::List => commands::list::run(&cli.global),
        Command::Info { path } => commands::info::run(path, &cli.global),
    }
}
