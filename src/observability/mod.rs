//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Match middleware produces:
//!     → logging.rs (MatchLogger messages, structured tracing events)
//!     → metrics.rs (decision counters)
//!
//! Consumers:
//!     → stdout via tracing-subscriber
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{MatchLogger, TracingLogger};
