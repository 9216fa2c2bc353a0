//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the binary
//! - Provide the pluggable logger the match middleware reports through
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Log level from `RUST_LOG`, falling back to the configured level
//! - The matcher never touches global logging state directly; it is handed
//!   a [`MatchLogger`] at construction

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log target used by [`TracingLogger`].
pub const LOG_TARGET: &str = "match_request";

/// Sink for the matcher's human-readable messages.
pub trait MatchLogger: Send + Sync + std::fmt::Debug {
    /// Informational message (verbose mode).
    fn log(&self, message: &str);

    /// Misconfiguration warning.
    fn warn(&self, message: &str);
}

/// Default logger: forwards to `tracing` at INFO/WARN.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl MatchLogger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: LOG_TARGET, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: LOG_TARGET, "{}", message);
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    let fallback = format!("match_request={level},tower_http={level}", level = default_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
