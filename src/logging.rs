//! Structured logging for qingpu-asr using the tracing crate.
//!
//! Standard output belongs to the progress lines and the JSON result block that the
//! calling process parses, so log records go to standard error through a
//! non-blocking writer. Log level is controlled by `RUST_LOG` (defaults to "warn").

use std::io;
use std::sync::OnceLock;
use tracing_subscriber::prelude::*;

/// Global non-blocking guard holder to keep the writer alive for the program lifetime.
static APPENDER_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

const DEFAULT_FILTER: &str = "warn";

/// Initializes the logging system with stderr output.
///
/// # Errors
/// - If logging was already initialized
/// - If a global subscriber is already installed
pub fn init_logging() -> Result<(), anyhow::Error> {
    let (non_blocking, guard) = tracing_appender::non_blocking(io::stderr());

    APPENDER_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Logging already initialized"))?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_level(true)
                .with_ansi(false),
        )
        .try_init()?;

    tracing::debug!("Logging initialized");
    Ok(())
}
