//! Request matching subsystem.
//!
//! # Data Flow
//! ```text
//! MatchOptions (conditions, verbose, logger, field)
//!     → matcher.rs (compile patterns, keep order)
//!     → dispatch.rs (MatchRequest, frozen)
//!
//! Per request:
//!     original URL
//!     → matcher.rs (first matching condition)
//!     → dispatch.rs (log, store in RequestLocals, pick continuation)
//!     → Dispatch::Handler or Dispatch::Next
//! ```
//!
//! # Design Decisions
//! - First match wins
//! - Deterministic: same URL and config always yield the same decision
//! - No regex; patterns are wildcard, never, or plain substring

pub mod condition;
pub mod dispatch;
pub mod matcher;
pub mod options;
pub mod pattern;

pub use condition::Condition;
pub use dispatch::{Dispatch, MatchRequest};
pub use matcher::Matcher;
pub use options::MatchOptions;
pub use pattern::Pattern;
