// src/bin/fixturegen.rs
use clap::Parser;
use colored::Colorize;
use fixturegen_core::cli::{self, Cli};
use fixturegen_core::exit::FixtureExit;
use fixturegen_core::logging;

fn main() -> FixtureExit {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match cli::handle_run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            FixtureExit::from(&e)
        }
    }
}
