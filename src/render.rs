// src/render.rs
//! Fixture schedule block rendering.
//!
//! Each aggregate becomes one `FIXTURE n ( ... )` block. Apart from the
//! substituted fields the block text is a fixed output format and must stay
//! byte-for-byte stable.

use crate::aggregate::FixtureAggregate;
use crate::error::{FixtureError, Result};
use std::fmt::Write as _;
use std::io::Write;
use tracing::debug;

/// Written before every block.
pub const BLOCK_SEPARATOR: &str = "\r\n";

/// Renders a single block without the leading separator.
///
/// # Errors
/// Returns `Render` if formatting fails.
pub fn render_block(index: usize, list_position: usize, fixture: &FixtureAggregate) -> Result<String> {
    let mut out = String::with_capacity(512);
    write_block(&mut out, index, list_position, fixture).map_err(|source| FixtureError::Render {
        id: fixture.id.clone(),
        source,
    })?;
    Ok(out)
}

fn write_block(
    out: &mut String,
    index: usize,
    list_position: usize,
    f: &FixtureAggregate,
) -> std::fmt::Result {
    writeln!(out, "FIXTURE {index} (")?;
    writeln!(out, "  list position = {list_position}")?;
    writeln!(out, "  fixture use type = FIXTURE_USE_INTERIOR")?;
    writeln!(out, "  power adjustment factor = 0.000")?;
    writeln!(out, "  paf desc = None")?;
    writeln!(out, "  lamp wattage = 0.00")?;
    writeln!(out, "  lighting type = LED")?;
    writeln!(out, "  type of fixture = <|{}|>", f.id)?;
    writeln!(out, "  description = <|{}|>", f.description)?;
    writeln!(out, "  fixture type = <|{}|>", f.id)?;
    writeln!(out, "  parent number = 1")?;
    writeln!(out, "  lamp ballast description = <||>")?;
    writeln!(out, "  lamp type = Other")?;
    writeln!(out, "  ballast = UNSPECIFIED_BALLAST")?;
    writeln!(out, "  number of lamps = 1")?;
    writeln!(out, "  fixture wattage = {}", f.wattage)?;
    write!(out, "  quantity = {} )", f.count)
}

/// Numbers blocks and writes them to a sink.
///
/// `index` and `list_position` are tracked separately even though they
/// currently advance together.
#[derive(Debug)]
pub struct Renderer {
    index: usize,
    list_position: usize,
    target: String,
}

impl Renderer {
    /// `target` names the sink in write errors.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            index: 1,
            list_position: 1,
            target: target.into(),
        }
    }

    /// Writes `BLOCK_SEPARATOR` followed by a block for every fixture.
    ///
    /// Returns the number of blocks written. Blocks already written stay in
    /// the sink if a later one fails.
    ///
    /// # Errors
    /// Returns `Render` or `Write` on the first failing block.
    pub fn render_all<'a, W, I>(&mut self, fixtures: I, out: &mut W) -> Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = &'a FixtureAggregate>,
    {
        let mut written = 0;
        for fixture in fixtures {
            self.render_one(fixture, out)?;
            written += 1;
        }
        out.flush().map_err(|e| self.write_error(e))?;
        debug!(blocks = written, target = %self.target, "rendered fixtures");
        Ok(written)
    }

    fn render_one<W: Write>(&mut self, fixture: &FixtureAggregate, out: &mut W) -> Result<()> {
        out.write_all(BLOCK_SEPARATOR.as_bytes())
            .map_err(|e| self.write_error(e))?;
        let block = render_block(self.index, self.list_position, fixture)?;
        out.write_all(block.as_bytes())
            .map_err(|e| self.write_error(e))?;
        self.index += 1;
        self.list_position += 1;
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> FixtureError {
        FixtureError::Write {
            source,
            target: self.target.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    const F1_BLOCK: &str = "FIXTURE 1 (
  list position = 1
  fixture use type = FIXTURE_USE_INTERIOR
  power adjustment factor = 0.000
  paf desc = None
  lamp wattage = 0.00
  lighting type = LED
  type of fixture = <|F1|>
  description = <|Downlight|>
  fixture type = <|F1|>
  parent number = 1
  lamp ballast description = <||>
  lamp type = Other
  ballast = UNSPECIFIED_BALLAST
  number of lamps = 1
  fixture wattage = 150
  quantity = 2 )";

    fn fixture(id: &str, description: &str, wattage: u64, count: u64) -> FixtureAggregate {
        FixtureAggregate {
            id: id.into(),
            description: description.into(),
            wattage,
            count,
        }
    }

    #[test]
    fn test_block_text() {
        let block = render_block(1, 1, &fixture("F1", "Downlight", 150, 2)).unwrap();
        assert_eq!(block, F1_BLOCK);
    }

    #[test]
    fn test_description_verbatim() {
        let block = render_block(3, 3, &fixture("X-7", "6\" Can, <dim>", 0, 1)).unwrap();
        assert!(block.starts_with("FIXTURE 3 (\n  list position = 3\n"));
        assert!(block.contains("  description = <|6\" Can, <dim>|>\n"));
        assert!(block.contains("  type of fixture = <|X-7|>\n"));
        assert!(block.ends_with("  fixture wattage = 0\n  quantity = 1 )"));
    }

    #[test]
    fn test_render_all_numbers_and_separates() {
        let fixtures = [fixture("F1", "Downlight", 150, 2), fixture("F2", "Wallwasher", 75, 1)];
        let mut out = Vec::new();
        let n = Renderer::new("buffer").render_all(&fixtures, &mut out).unwrap();
        assert_eq!(n, 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\r\nFIXTURE 1 (\n  list position = 1\n"));
        assert!(text.contains(" )\r\nFIXTURE 2 (\n  list position = 2\n"));
        assert_eq!(text.matches("\r\n").count(), 2);
        assert!(text.ends_with("quantity = 1 )"));
    }

    #[test]
    fn test_counters_continue_across_calls() {
        let mut renderer = Renderer::new("buffer");
        let mut out = Vec::new();
        renderer.render_all([&fixture("A", "a", 1, 1)], &mut out).unwrap();
        renderer.render_all([&fixture("B", "b", 1, 1)], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("FIXTURE 2 (\n  list position = 2\n  fixture use type"));
    }

    #[test]
    fn test_empty_writes_nothing() {
        let mut out = Vec::new();
        let n = Renderer::new("buffer")
            .render_all(std::iter::empty(), &mut out)
            .unwrap();
        assert_eq!(n, 0);
        assert!(out.is_empty());
    }

    struct FailAfter {
        budget: usize,
        inner: Vec<u8>,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.budget == 0 {
                return Err(std::io::Error::other("disk full"));
            }
            self.budget -= 1;
            self.inner.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_keeps_earlier_blocks() {
        let fixtures = [fixture("F1", "Downlight", 150, 2), fixture("F2", "Wallwasher", 75, 1)];
        // Separator and block of the first fixture succeed, then the sink fails.
        let mut sink = FailAfter {
            budget: 2,
            inner: Vec::new(),
        };
        let err = Renderer::new("out.txt")
            .render_all(&fixtures, &mut sink)
            .unwrap_err();
        assert!(matches!(err, FixtureError::Write { ref target, .. } if target == "out.txt"));
        let text = String::from_utf8(sink.inner).unwrap();
        assert_eq!(text, format!("\r\n{F1_BLOCK}"));
    }
}
