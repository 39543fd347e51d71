use crate::common::Value;
use indexmap::IndexMap;

/// Opaque configuration passed through to the storage client when a
/// collection is opened.
///
/// This layer never interprets the entries; each client documents the keys
/// it understands and ignores the rest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionOptions {
    options: IndexMap<String, Value>,
}

impl CollectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option entry.
    pub fn with<T: Into<Value>>(mut self, key: &str, value: T) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
