use std::fmt::Display;

use serde::Serialize;
use serde_json::{Map, Value};

/// A bag of top-level keys to shallow-apply on top of a baseline descriptor.
///
/// Any key and any value shape is accepted; no validation is performed.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides(Map<String, Value>);

impl Overrides {
    /// Creates a new empty `Overrides` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an override key, replacing any previous value for that key.
    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.0.insert(key.to_string(), value);

        self
    }

    /// Whether no overrides are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Retrieves the number of overrides set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the override entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Overrides {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Overrides {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Overrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys = self.0.keys().cloned().collect::<Vec<_>>().join(", ");
        write!(f, "Overrides: keys=[{keys}]")
    }
}
