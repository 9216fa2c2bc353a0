//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the match middleware from configuration
//! - Create the Axum Router with the match handler and fall-through stage
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener with graceful shutdown

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, HandlerConfig};
use crate::http::locals::RequestLocals;
use crate::http::middleware::{match_request_middleware, MatchHandler, MatchState};
use crate::http::request::original_url;
use crate::matching::{MatchOptions, MatchRequest};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings the match handler reads on every matched request.
#[derive(Debug, Clone)]
struct MatchedResponse {
    status: StatusCode,
    message: String,
    condition_field: Option<String>,
}

impl MatchedResponse {
    fn new(handler: &HandlerConfig, condition_field: Option<String>) -> Self {
        Self {
            status: StatusCode::from_u16(handler.status).unwrap_or(StatusCode::SERVICE_UNAVAILABLE),
            message: handler.message.clone(),
            condition_field,
        }
    }
}

/// HTTP server running the match middleware in front of a fall-through stage.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let matched = Arc::new(MatchedResponse::new(
            &config.handler,
            config.matching.matched_condition_field.clone(),
        ));
        let handler = MatchHandler::new(move |req| matched_handler(matched.clone(), req));

        let state: MatchState = Arc::new(MatchRequest::new(
            MatchOptions::from(config.matching.clone()),
            Some(handler),
        ));

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: MatchState) -> Router {
        Router::new()
            .fallback(passthrough_handler)
            .layer(from_fn_with_state(state, match_request_middleware))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            conditions = self.config.matching.conditions.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Answers matched requests with the configured status and the matched condition.
async fn matched_handler(settings: Arc<MatchedResponse>, req: Request<Body>) -> Response {
    let condition = settings
        .condition_field
        .as_deref()
        .and_then(|field| {
            req.extensions()
                .get::<RequestLocals>()
                .and_then(|locals| locals.get(field).cloned())
        })
        .unwrap_or(Value::Null);

    (
        settings.status,
        Json(json!({
            "message": settings.message,
            "condition": condition,
        })),
    )
        .into_response()
}

/// Next pipeline stage for requests that match no condition.
async fn passthrough_handler(req: Request<Body>) -> impl IntoResponse {
    (StatusCode::OK, original_url(&req))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
