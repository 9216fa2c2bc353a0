//! Request-scoped key/value store.
//!
//! Carried in the request extensions so that any later stage (a handler,
//! another middleware) can read what earlier stages recorded.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Per-request side-channel shared along the pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestLocals {
    values: HashMap<String, Value>,
}

impl RequestLocals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Deserialize a stored value into a concrete type.
    ///
    /// Returns `None` when the name is absent or the value has another shape.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.values
            .get(name)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
