//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace)
//!     → middleware/match_request.rs (run MatchRequest decision)
//!         ├─ match    → MatchHandler (sees RequestLocals)
//!         └─ no match → next stage
//! ```

pub mod locals;
pub mod middleware;
pub mod request;
pub mod server;

pub use locals::RequestLocals;
pub use middleware::{match_request_middleware, MatchHandler, MatchState};
pub use request::{original_url, request_id, X_REQUEST_ID};
pub use server::{HttpServer, ServerError};
