// src/cli/handlers.rs
use crate::cli::args::Cli;
use crate::config::Config;
use crate::exit::FixtureExit;
use crate::output::{OutputTarget, WriteMode};
use crate::pipeline::{self, RunOptions, RunSummary};
use anyhow::Result;
use colored::Colorize;

/// Loads the config named by `--config`, or the local one if present.
///
/// # Errors
/// Returns error if an explicit config is missing or any config is invalid.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_local()?,
    };
    Ok(config)
}

/// Merges command-line flags over `config`.
#[must_use]
pub fn resolve_options(cli: &Cli, config: Config) -> RunOptions {
    let output = if cli.stdout {
        OutputTarget::Stdout
    } else {
        OutputTarget::File(cli.output.clone().unwrap_or(config.output.path))
    };
    let mode = if cli.buffered || config.output.buffered {
        WriteMode::Buffered
    } else {
        WriteMode::Streaming
    };

    RunOptions {
        input: cli.input.clone().unwrap_or(config.input.path),
        skip_header: cli.header.unwrap_or(config.input.header),
        output,
        order: cli.order.unwrap_or(config.render.order),
        mode,
    }
}

/// Handles a full run.
///
/// # Errors
/// Returns error if config loading, reading, or writing fails.
pub fn handle_run(cli: &Cli) -> Result<FixtureExit> {
    let config = load_config(cli)?;
    let opts = resolve_options(cli, config);
    let summary = pipeline::run(&opts)?;
    print_summary(&summary);
    Ok(FixtureExit::Success)
}

fn print_summary(summary: &RunSummary) {
    let line = format!("Wrote {} fixtures to {}", summary.fixtures, summary.output);
    // Keep stdout clean for the blocks themselves.
    if summary.output == OutputTarget::Stdout {
        eprintln!("{}", line.green());
    } else {
        println!("{}", line.green());
    }
}
