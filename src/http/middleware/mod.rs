//! HTTP middleware.

pub mod match_request;

pub use match_request::{match_request_middleware, MatchHandler, MatchState};
