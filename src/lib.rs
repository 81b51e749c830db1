pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod reader;
pub mod render;
pub mod wattage;
