//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a tracing filter, e.g. `FIXTUREGEN_LOG=fixturegen_core=debug`.
pub const LOG_ENV: &str = "FIXTUREGEN_LOG";

static INIT: Once = Once::new();

/// Installs the global subscriber, writing to stderr.
///
/// `FIXTUREGEN_LOG` wins when set and valid; otherwise the level is `warn`,
/// or `info` when `verbose` is true. Calling this more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "info" } else { "warn" };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .init();
    });
}
