//! Command-line surface.

pub mod args;
pub mod handlers;

pub use args::Cli;
pub use handlers::handle_run;
