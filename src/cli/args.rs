use crate::aggregate::RenderOrder;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Flags left unset fall back to `fixturegen.toml`, then to built-in defaults.
#[derive(Debug, Parser)]
#[command(
    name = "fixturegen",
    version,
    about = "Aggregate a lighting fixture CSV export into fixture schedule blocks"
)]
pub struct Cli {
    /// Source CSV file [default: input.csv]
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Skip the first record as a header [default: true]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub header: Option<bool>,

    /// Destination file, appended to [default: output.txt]
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file [default: ./fixturegen.toml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Order of rendered fixtures [default: first-seen]
    #[arg(long, value_enum)]
    pub order: Option<RenderOrder>,

    /// Render everything before writing so a failure leaves the output untouched
    #[arg(long)]
    pub buffered: bool,

    /// Write blocks to stdout instead of the output file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}
