//! Match conditions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A configured rule: a pattern plus arbitrary payload carried through unchanged.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Condition {
    /// Raw pattern value (see [`Pattern`](crate::matching::Pattern)).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Any other fields, opaque to the matcher.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Condition {
    /// Create a condition with the given pattern and no extra fields.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            extra: Map::new(),
        }
    }

    /// Attach a field.
    ///
    /// `"pattern"` sets the pattern itself: a string value replaces it, any
    /// other value clears it.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == "pattern" {
            self.extra.remove("pattern");
            self.pattern = match value {
                Value::String(pattern) => Some(pattern),
                _ => None,
            };
        } else {
            self.extra.insert(key, value);
        }
        self
    }

    /// The pattern as written, or an empty string when absent.
    pub fn pattern_str(&self) -> &str {
        self.pattern.as_deref().unwrap_or_default()
    }

    /// JSON object form: `pattern` alongside the extra fields.
    pub fn to_value(&self) -> Value {
        let mut object = self.extra.clone();
        match &self.pattern {
            Some(pattern) => {
                object.insert("pattern".to_string(), Value::String(pattern.clone()));
            }
            None => {
                object.remove("pattern");
            }
        }
        Value::Object(object)
    }
}
