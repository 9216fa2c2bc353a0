//! Metrics collection and exposition.
//!
//! # Metrics
//! - `match_request_decisions_total` (counter): decisions by outcome
//!   (`matched`, `passed`, `unhandled`)
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed, so the library
//!   can be embedded without the exporter
//! - Prometheus exporter is opt-in via configuration

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

pub const DECISIONS_TOTAL: &str = "match_request_decisions_total";

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one dispatch decision.
pub fn record_decision(outcome: &'static str) {
    metrics::counter!(DECISIONS_TOTAL, "outcome" => outcome).increment(1);
}
