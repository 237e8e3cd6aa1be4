//! Schema-less Resource Records
//!
//! The OctoFit API does not guarantee any field on any record: an activity
//! may carry `name` or `title` or neither, numbers may arrive as JSON
//! numbers or as numeric strings. A [`ResourceRecord`] is therefore an
//! opaque field-name to value mapping with defensive accessors; typed
//! interpretation with fallbacks lives in [`crate::present`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record from a collection endpoint, shape unknown ahead of time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRecord(Map<String, Value>);

impl ResourceRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Raw field access.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The field's value as a non-empty string.
    ///
    /// Empty strings count as absent, matching how the dashboard treats
    /// `""` the same as a missing field.
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.0.get(field) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// The field's value as a number, accepting numeric strings.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.0.get(field) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The field's value as an array length (e.g. a `members` list).
    pub fn list_len(&self, field: &str) -> Option<usize> {
        match self.0.get(field) {
            Some(Value::Array(items)) => Some(items.len()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for ResourceRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ResourceRecord> for Value {
    fn from(record: ResourceRecord) -> Self {
        Value::Object(record.0)
    }
}
