// src/config/mod.rs
pub mod types;

pub use self::types::{Config, InputConfig, OutputConfig, RenderConfig};

use crate::error::{FixtureError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE: &str = "fixturegen.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `fixturegen.toml` from the working directory, or defaults if there is none.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_local() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::new());
        }
        Self::load_from(path)
    }

    /// Loads an explicit config file. A missing file is an error.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read and `Config` if the TOML is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FixtureError::io(e, path))?;
        let config = Self::parse_toml(&content).map_err(|source| FixtureError::Config {
            source,
            path: path.to_path_buf(),
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// # Errors
    /// Returns error if `content` is not a valid config document.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
