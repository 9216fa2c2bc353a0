//! Request-matching middleware library.
//!
//! Checks each request's URL against an ordered list of conditions and hands
//! matching requests to a dedicated handler instead of the next stage.

pub mod config;
pub mod http;
pub mod matching;
pub mod observability;

pub use config::AppConfig;
pub use http::{match_request_middleware, HttpServer, MatchHandler, RequestLocals};
pub use matching::{Condition, MatchOptions, MatchRequest};
