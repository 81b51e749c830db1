// src/output.rs
//! Output sinks for rendered blocks.

use crate::aggregate::FixtureAggregate;
use crate::error::{FixtureError, Result};
use crate::render::Renderer;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Appended to; existing contents are never truncated.
    File(PathBuf),
    Stdout,
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => f.write_str("<stdout>"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Each block goes to the sink as soon as it is rendered.
    #[default]
    Streaming,
    /// All blocks are rendered in memory and written with one call.
    Buffered,
}

/// Opens `path` for appending, creating it if absent.
///
/// # Errors
/// Returns `Io` if the file cannot be opened for writing.
pub fn open_append(path: &Path) -> Result<File> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FixtureError::io(e, path))?;
    debug!(path = %path.display(), "opened output for append");
    Ok(file)
}

/// Renders `fixtures` into `target` and returns the number of blocks written.
///
/// In `Buffered` mode nothing reaches the target unless every block renders.
///
/// # Errors
/// Returns `Io` if the target cannot be opened, `Render` or `Write` on a failing block.
pub fn write_fixtures(
    fixtures: &[&FixtureAggregate],
    target: &OutputTarget,
    mode: WriteMode,
) -> Result<usize> {
    let mut renderer = Renderer::new(target.to_string());

    match mode {
        WriteMode::Streaming => {
            let mut sink = open_sink(target)?;
            renderer.render_all(fixtures.iter().copied(), &mut sink)
        }
        WriteMode::Buffered => {
            let mut buf = Vec::new();
            let written = renderer.render_all(fixtures.iter().copied(), &mut buf)?;
            let mut sink = open_sink(target)?;
            sink.write_all(&buf)
                .and_then(|()| sink.flush())
                .map_err(|source| FixtureError::Write {
                    source,
                    target: target.to_string(),
                })?;
            Ok(written)
        }
    }
}

fn open_sink(target: &OutputTarget) -> Result<Box<dyn Write>> {
    Ok(match target {
        OutputTarget::File(path) => Box::new(open_append(path)?),
        OutputTarget::Stdout => Box::new(io::stdout().lock()),
    })
}
