//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the TOML config file.

use serde::{Deserialize, Serialize};

use crate::matching::Condition;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Match conditions and middleware options.
    pub matching: MatchConfig,

    /// Response produced by the demonstration match handler.
    pub handler: HandlerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Match middleware configuration.
///
/// ```toml
/// [matching]
/// verbose = true
/// matched_condition_field = "rule"
///
/// [[matching.conditions]]
/// pattern = "/admin"
/// reason = "maintenance"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MatchConfig {
    /// Conditions in evaluation order.
    pub conditions: Vec<Condition>,

    /// Log every match.
    pub verbose: bool,

    /// Request locals field receiving the matched condition.
    pub matched_condition_field: Option<String>,
}

/// Demonstration match handler settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// HTTP status returned for matched requests.
    pub status: u16,

    /// Message included in the response body.
    pub message: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            status: 503,
            message: "Request intercepted".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
