//! Construction-time options for the match middleware.

use std::sync::Arc;

use crate::config::MatchConfig;
use crate::matching::condition::Condition;
use crate::observability::{MatchLogger, TracingLogger};

/// Options consumed once when building a [`MatchRequest`](crate::matching::MatchRequest).
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Conditions in evaluation order.
    pub conditions: Vec<Condition>,

    /// Log every match through the logger.
    pub verbose: bool,

    /// Sink for verbose lines and warnings.
    pub logger: Arc<dyn MatchLogger>,

    /// Name under which the matched condition is stored in the request locals.
    pub matched_condition_field: Option<String>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            verbose: false,
            logger: Arc::new(TracingLogger),
            matched_condition_field: None,
        }
    }
}

impl MatchOptions {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            ..Self::default()
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn logger(mut self, logger: Arc<dyn MatchLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn matched_condition_field(mut self, field: impl Into<String>) -> Self {
        self.matched_condition_field = Some(field.into());
        self
    }
}

impl From<MatchConfig> for MatchOptions {
    fn from(config: MatchConfig) -> Self {
        Self {
            conditions: config.conditions,
            verbose: config.verbose,
            logger: Arc::new(TracingLogger),
            matched_condition_field: config.matched_condition_field,
        }
    }
}
