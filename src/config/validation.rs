//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and the handler status code
//! - Reject an empty matched-condition field name
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Conditions themselves are never rejected: any pattern string is legal

use std::net::SocketAddr;

use axum::http::StatusCode;
use thiserror::Error;

use crate::config::schema::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid listener bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),

    #[error("handler status {0} is not a valid HTTP status code")]
    InvalidHandlerStatus(u16),

    #[error("matched_condition_field must not be empty")]
    EmptyMatchedConditionField,
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if StatusCode::from_u16(config.handler.status).is_err() {
        errors.push(ValidationError::InvalidHandlerStatus(config.handler.status));
    }

    if config.matching.matched_condition_field.as_deref() == Some("") {
        errors.push(ValidationError::EmptyMatchedConditionField);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
