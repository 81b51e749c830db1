// src/aggregate.rs
//! Groups records by fixture id and counts quantities.

use crate::error::{FixtureError, Result};
use crate::reader::SourceRecord;
use crate::wattage::extract_wattage;
use clap::ValueEnum;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::trace;

/// Accumulated data for one fixture type.
///
/// `description` and `wattage` come from the first record seen for the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureAggregate {
    pub id: String,
    pub description: String,
    pub wattage: u64,
    pub count: u64,
}

/// Order in which aggregates are handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderOrder {
    /// Order in which each id first appeared in the input.
    #[default]
    FirstSeen,
    /// Sorted by fixture id.
    Id,
}

/// All aggregates for one run, kept in first-seen order.
#[derive(Debug, Default)]
pub struct FixtureSet {
    entries: Vec<FixtureAggregate>,
    by_id: HashMap<String, usize>,
    records: u64,
}

impl FixtureSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one record for `id`, creating the aggregate on first sight.
    ///
    /// Wattage is only extracted for a new id; later records for the same id
    /// only bump the count.
    ///
    /// # Errors
    /// Returns `Extraction` if a new id's wattage text has no parseable leading digits.
    /// Nothing is inserted in that case.
    pub fn ingest(&mut self, id: &str, description: &str, wattage_text: &str, line: u64) -> Result<()> {
        self.ingest_with(id, description, wattage_text, line, || {
            vec![id.to_string(), description.to_string(), wattage_text.to_string()]
        })
    }

    /// Like [`FixtureSet::ingest`], but extraction errors carry every field of `record`.
    ///
    /// # Errors
    /// See [`FixtureSet::ingest`].
    pub fn ingest_record(&mut self, record: &SourceRecord) -> Result<()> {
        self.ingest_with(
            &record.fixture_id,
            &record.description,
            &record.wattage_text,
            record.line,
            || record.fields(),
        )
    }

    fn ingest_with(
        &mut self,
        id: &str,
        description: &str,
        wattage_text: &str,
        line: u64,
        record: impl FnOnce() -> Vec<String>,
    ) -> Result<()> {
        if let Some(&slot) = self.by_id.get(id) {
            self.entries[slot].count += 1;
            self.records += 1;
            return Ok(());
        }

        let wattage = extract_wattage(wattage_text).map_err(|source| FixtureError::Extraction {
            line,
            id: id.to_string(),
            record: record(),
            source,
        })?;

        trace!(id, wattage, line, "new fixture");
        self.by_id.insert(id.to_string(), self.entries.len());
        self.entries.push(FixtureAggregate {
            id: id.to_string(),
            description: description.to_string(),
            wattage,
            count: 1,
        });
        self.records += 1;
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FixtureAggregate> {
        self.by_id.get(id).map(|&slot| &self.entries[slot])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total records ingested across all ids.
    #[must_use]
    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &FixtureAggregate> {
        self.entries.iter()
    }

    #[must_use]
    pub fn ordered(&self, order: RenderOrder) -> Vec<&FixtureAggregate> {
        let mut out: Vec<&FixtureAggregate> = self.entries.iter().collect();
        if order == RenderOrder::Id {
            out.sort_by(|a, b| a.id.cmp(&b.id));
        }
        out
    }
}
