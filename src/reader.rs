// src/reader.rs
//! Streams fixture records out of a comma-separated export.
//!
//! Every data record must carry exactly [`FIELDS_PER_RECORD`] fields laid out as
//! `[label, fixture id, description, wattage text]`. The label column is kept
//! only for error messages.

use crate::error::{FixtureError, Result};
use csv::StringRecord;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

pub const FIELDS_PER_RECORD: usize = 4;

const DELIMITER: u8 = b',';
const QUOTE: u8 = b'"';

/// One data record, with the input line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub line: u64,
    pub label: String,
    pub fixture_id: String,
    pub description: String,
    pub wattage_text: String,
}

impl SourceRecord {
    /// All four fields in input order.
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.label.clone(),
            self.fixture_id.clone(),
            self.description.clone(),
            self.wattage_text.clone(),
        ]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReaderOptions {
    /// Discard the first record before iteration starts.
    pub skip_header: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self { skip_header: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    FieldStart,
    Unquoted,
    Quoted,
    /// Just saw a quote inside a quoted field: either its end or the first half of `""`.
    QuoteInQuoted,
}

/// Drops blanks that open a field so a quote after `, ` still starts a quoted field.
///
/// Tracks quoting the way the `csv` parser does, so blanks inside quotes and
/// after the first character of a field are passed through untouched. Line
/// terminators are never dropped, which keeps record line numbers intact.
struct LeadingSpaceTrim<R> {
    inner: R,
    state: Scan,
}

impl<R: Read> LeadingSpaceTrim<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            state: Scan::FieldStart,
        }
    }

    /// Advances the scanner by one byte and reports whether the byte is kept.
    fn keep(&mut self, b: u8) -> bool {
        let is_term = b == b'\n' || b == b'\r';
        let (next, keep) = match self.state {
            Scan::FieldStart if matches!(b, b' ' | b'\t' | 0x0b | 0x0c) => (Scan::FieldStart, false),
            Scan::FieldStart if b == QUOTE => (Scan::Quoted, true),
            Scan::FieldStart | Scan::Unquoted if b == DELIMITER || is_term => (Scan::FieldStart, true),
            Scan::FieldStart | Scan::Unquoted => (Scan::Unquoted, true),
            Scan::Quoted if b == QUOTE => (Scan::QuoteInQuoted, true),
            Scan::Quoted => (Scan::Quoted, true),
            Scan::QuoteInQuoted if b == QUOTE => (Scan::Quoted, true),
            Scan::QuoteInQuoted if b == DELIMITER || is_term => (Scan::FieldStart, true),
            Scan::QuoteInQuoted => (Scan::Unquoted, true),
        };
        self.state = next;
        keep
    }
}

impl<R: Read> Read for LeadingSpaceTrim<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Ok(0);
            }
            let mut kept = 0;
            for i in 0..n {
                let b = buf[i];
                if self.keep(b) {
                    buf[kept] = b;
                    kept += 1;
                }
            }
            // A chunk made only of dropped blanks must not look like end of input.
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}

pub struct RecordReader<R: Read> {
    inner: csv::Reader<LeadingSpaceTrim<R>>,
    buf: StringRecord,
    done: bool,
}

impl RecordReader<File> {
    /// Opens `path` for reading.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or the header cannot be read.
    pub fn open(path: &Path, options: ReaderOptions) -> Result<Self> {
        let file = File::open(path).map_err(|e| FixtureError::io(e, path))?;
        debug!(path = %path.display(), "opened input");
        Self::from_reader(file, options)
    }
}

impl<R: Read> RecordReader<R> {
    /// Wraps any byte source.
    ///
    /// # Errors
    /// Returns `MissingHeader` if `skip_header` is set and the input holds no records.
    pub fn from_reader(source: R, options: ReaderOptions) -> Result<Self> {
        // Field counts are checked per record so the error can show the offending row.
        let inner = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(DELIMITER)
            .quote(QUOTE)
            .trim(csv::Trim::None)
            .from_reader(LeadingSpaceTrim::new(source));

        let mut reader = Self {
            inner,
            buf: StringRecord::new(),
            done: false,
        };

        if options.skip_header {
            reader.skip_header()?;
        }
        Ok(reader)
    }

    fn skip_header(&mut self) -> Result<()> {
        if !self.inner.read_record(&mut self.buf)? {
            return Err(FixtureError::MissingHeader);
        }
        debug!(fields = self.buf.len(), "skipped header");
        Ok(())
    }

    fn next_record(&mut self) -> Result<Option<SourceRecord>> {
        if !self.inner.read_record(&mut self.buf)? {
            return Ok(None);
        }

        let line = self.buf.position().map_or(0, csv::Position::line);
        let fields: Vec<&str> = self.buf.iter().collect();

        let &[label, fixture_id, description, wattage_text] = &fields[..] else {
            return Err(FixtureError::FieldCount {
                line,
                expected: FIELDS_PER_RECORD,
                found: fields.len(),
                record: fields.iter().map(ToString::to_string).collect(),
            });
        };

        Ok(Some(SourceRecord {
            line,
            label: label.to_string(),
            fixture_id: fixture_id.to_string(),
            description: description.to_string(),
            wattage_text: wattage_text.to_string(),
        }))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<SourceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
