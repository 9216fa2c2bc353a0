//! Ordered condition scan.
//!
//! # Responsibilities
//! - Compile each condition's pattern once
//! - Find the first condition matching a URL
//!
//! # Design Decisions
//! - First match wins; later conditions are never evaluated
//! - Immutable after construction (shared across requests without locks)
//! - O(n) scan with early exit

use crate::matching::condition::Condition;
use crate::matching::pattern::Pattern;

/// A condition paired with its compiled pattern.
#[derive(Debug, Clone)]
struct CompiledCondition {
    pattern: Pattern,
    condition: Condition,
}

/// Evaluates an ordered list of conditions against request URLs.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    conditions: Vec<CompiledCondition>,
}

impl Matcher {
    /// Compile the given conditions, preserving their order.
    pub fn new(conditions: Vec<Condition>) -> Self {
        let conditions = conditions
            .into_iter()
            .map(|condition| CompiledCondition {
                pattern: Pattern::parse(condition.pattern.as_deref()),
                condition,
            })
            .collect();
        Self { conditions }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Returns the first condition whose pattern matches the URL.
    pub fn evaluate(&self, url: &str) -> Option<&Condition> {
        self.conditions
            .iter()
            .find(|c| c.pattern.matches(url))
            .map(|c| &c.condition)
    }

    /// Indices of conditions shadowed by an earlier wildcard.
    pub fn unreachable_conditions(&self) -> Vec<usize> {
        match self.conditions.iter().position(|c| c.pattern.is_always()) {
            Some(first_wildcard) => (first_wildcard + 1..self.conditions.len()).collect(),
            None => Vec::new(),
        }
    }
}
