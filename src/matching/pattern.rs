//! Pattern evaluation.
//!
//! # Rules
//! - Empty/absent or `"none"` never matches
//! - `"*"` or `"all"` matches every URL
//! - Anything else is a case-sensitive substring search over the URL
//!
//! # Design Decisions
//! - Patterns are compiled once at construction, never re-parsed per request
//! - No regex or glob syntax: every other string is taken literally

/// A compiled condition pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Never matches (empty, absent or `"none"`).
    Never,
    /// Matches every URL (`"*"` or `"all"`).
    Always,
    /// Matches when the needle occurs anywhere in the URL.
    Contains(String),
}

impl Pattern {
    /// Compile a raw pattern value.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some("none") => Pattern::Never,
            Some("*") | Some("all") => Pattern::Always,
            Some(needle) => Pattern::Contains(needle.to_string()),
        }
    }

    /// Returns true if the URL satisfies this pattern.
    pub fn matches(&self, url: &str) -> bool {
        match self {
            Pattern::Never => false,
            Pattern::Always => true,
            Pattern::Contains(needle) => url.contains(needle.as_str()),
        }
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Pattern::Always)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_patterns() {
        for raw in [None, Some(""), Some("none")] {
            let pattern = Pattern::parse(raw);
            assert_eq!(pattern, Pattern::Never);
            assert!(!pattern.matches("/"));
            assert!(!pattern.matches("/none"));
            assert!(!pattern.matches(""));
        }
    }

    #[test]
    fn test_wildcard_patterns() {
        for raw in ["*", "all"] {
            let pattern = Pattern::parse(Some(raw));
            assert!(pattern.is_always());
            assert!(pattern.matches("/anything"));
            assert!(pattern.matches(""));
        }
    }

    #[test]
    fn test_substring_pattern() {
        let pattern = Pattern::parse(Some("/admin"));
        assert!(pattern.matches("/user/admin/edit"));
        assert!(pattern.matches("/admin"));
        assert!(pattern.matches("/search?next=/admin"));
        assert!(!pattern.matches("/user"));
        assert!(!pattern.matches("/ADMIN")); // Case sensitive
    }

    #[test]
    fn test_literal_metacharacters() {
        // Only the exact strings "*" and "all" are wildcards
        let star = Pattern::parse(Some("/files/*"));
        assert!(!star.matches("/files/a.txt"));
        assert!(star.matches("/files/*"));

        let all = Pattern::parse(Some("all/"));
        assert!(all.matches("/install/"));
        assert!(!all.matches("/x"));
    }
}
