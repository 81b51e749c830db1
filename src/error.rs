// src/error.rs
use crate::wattage::WattageError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Error reading header: input is empty")]
    MissingHeader,

    #[error("Error reading record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: expected {expected} fields, found {found}: {record:?}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
        record: Vec<String>,
    },

    #[error("Line {line}: bad wattage for fixture {id:?} in record {record:?}: {source}")]
    Extraction {
        line: u64,
        id: String,
        record: Vec<String>,
        source: WattageError,
    },

    #[error("Error rendering fixture {id:?}: {source}")]
    Render {
        id: String,
        source: std::fmt::Error,
    },

    #[error("Error writing output: {source} (target: {target})")]
    Write {
        source: std::io::Error,
        target: String,
    },

    #[error("Invalid config in {path}: {source}")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },
}

impl FixtureError {
    /// True for failures caused by the content of the input file rather than the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::Csv(e) => !matches!(e.kind(), csv::ErrorKind::Io(_)),
            Self::MissingHeader | Self::FieldCount { .. } | Self::Extraction { .. } => true,
            _ => false,
        }
    }

    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
