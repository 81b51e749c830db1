use crate::aggregate::RenderOrder;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
    /// Treat the first record as a header and skip it.
    #[serde(default = "default_header")]
    pub header: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            header: default_header(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Render everything in memory before touching the output file.
    #[serde(default)]
    pub buffered: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            buffered: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub order: RenderOrder,
}

fn default_input_path() -> PathBuf { PathBuf::from("input.csv") }
fn default_output_path() -> PathBuf { PathBuf::from("output.txt") }
const fn default_header() -> bool { true }

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub render: RenderConfig,
}
