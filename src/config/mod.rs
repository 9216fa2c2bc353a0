//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → MatchOptions for the middleware
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the middleware is built from it once
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::AppConfig;
pub use schema::HandlerConfig;
pub use schema::ListenerConfig;
pub use schema::MatchConfig;
pub use schema::ObservabilityConfig;
