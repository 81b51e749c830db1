// src/pipeline.rs
//! End-to-end run: read every record, aggregate, then render.
//!
//! The input is consumed completely before the output is opened, so a bad
//! record never leaves partial output behind. Rendering failures in
//! streaming mode can; see [`WriteMode`].

use crate::aggregate::{FixtureSet, RenderOrder};
use crate::error::Result;
use crate::output::{self, OutputTarget, WriteMode};
use crate::reader::{ReaderOptions, RecordReader};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub skip_header: bool,
    pub output: OutputTarget,
    pub order: RenderOrder,
    pub mode: WriteMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub fixtures: usize,
    pub records: u64,
    pub output: OutputTarget,
}

/// Aggregates every record `reader` yields.
///
/// # Errors
/// Returns the first read, schema or extraction error.
pub fn aggregate<R: Read>(reader: RecordReader<R>) -> Result<FixtureSet> {
    let mut set = FixtureSet::new();
    for record in reader {
        set.ingest_record(&record?)?;
    }
    Ok(set)
}

/// Aggregates an in-memory or streamed CSV source.
///
/// # Errors
/// See [`aggregate`].
pub fn aggregate_reader<R: Read>(source: R, skip_header: bool) -> Result<FixtureSet> {
    aggregate(RecordReader::from_reader(source, ReaderOptions { skip_header })?)
}

/// Runs the whole conversion described by `opts`.
///
/// # Errors
/// Returns the first error from reading, aggregating or writing.
pub fn run(opts: &RunOptions) -> Result<RunSummary> {
    let reader = RecordReader::open(
        &opts.input,
        ReaderOptions {
            skip_header: opts.skip_header,
        },
    )?;
    let set = aggregate(reader)?;
    info!(
        input = %opts.input.display(),
        records = set.records(),
        fixtures = set.len(),
        "aggregated input"
    );

    let ordered = set.ordered(opts.order);
    let written = output::write_fixtures(&ordered, &opts.output, opts.mode)?;
    info!(blocks = written, output = %opts.output, mode = ?opts.mode, "wrote fixtures");

    Ok(RunSummary {
        fixtures: written,
        records: set.records(),
        output: opts.output.clone(),
    })
}
