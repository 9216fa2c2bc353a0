//! Match middleware for axum.
//!
//! Runs the [`MatchRequest`] decision for every request and either hands the
//! request to the configured [`MatchHandler`] or passes it to the next stage.
//! The request's [`RequestLocals`] travel in its extensions in both cases.

use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Router,
};
use futures_util::future::BoxFuture;
use tower::ServiceExt;

use crate::http::locals::RequestLocals;
use crate::http::request::{original_url, request_id};
use crate::matching::{Dispatch, MatchRequest};

type BoxedHandler = dyn Fn(Request<Body>) -> BoxFuture<'static, Response> + Send + Sync;

/// Handler invoked when a condition matches.
#[derive(Clone)]
pub struct MatchHandler(Arc<BoxedHandler>);

impl MatchHandler {
    /// Wrap an async function.
    pub fn new<F, Fut, R>(f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        Self(Arc::new(move |req: Request<Body>| -> BoxFuture<'static, Response> {
            let fut = f(req);
            Box::pin(async move { fut.await.into_response() })
        }))
    }

    /// Dispatch matched requests into a whole router.
    pub fn from_router(router: Router) -> Self {
        Self::new(move |req| {
            let router = router.clone();
            async move {
                match router.oneshot(req).await {
                    Ok(response) => response,
                    Err(never) => match never {},
                }
            }
        })
    }

    pub async fn call(&self, req: Request<Body>) -> Response {
        (self.0)(req).await
    }
}

impl std::fmt::Debug for MatchHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchHandler").finish_non_exhaustive()
    }
}

/// Shared state for [`match_request_middleware`].
pub type MatchState = Arc<MatchRequest<MatchHandler>>;

/// Middleware function, mount with `axum::middleware::from_fn_with_state`.
pub async fn match_request_middleware(
    State(state): State<MatchState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let url = original_url(&req);
    let request_id = request_id(&req);

    let mut locals = req
        .extensions_mut()
        .remove::<RequestLocals>()
        .unwrap_or_default();
    let dispatch = state.dispatch(&url, &mut locals);
    req.extensions_mut().insert(locals);

    let outcome = dispatch.outcome();
    match dispatch {
        Dispatch::Handler(handler) => {
            tracing::debug!(request_id = %request_id, url = %url, outcome, "Dispatching to match handler");
            handler.call(req).await
        }
        Dispatch::Next | Dispatch::Unhandled => {
            tracing::debug!(request_id = %request_id, url = %url, outcome, "Passing to next stage");
            next.run(req).await
        }
    }
}
