//! Response Normalization
//!
//! The OctoFit API answers a collection GET in one of two shapes: a bare
//! JSON array of records, or a pagination envelope (`{"count": ..,
//! "next": .., "results": [..]}`). [`normalize`] masks that difference
//! from every consumer. It is deliberately fail-soft: a payload matching
//! neither shape degrades to an empty collection instead of an error, so
//! backend drift shows up as an empty view rather than a broken one.

use serde_json::Value;

use crate::record::ResourceRecord;

/// Extract the record list from a collection payload.
///
/// - bare array: returned as-is (order preserved)
/// - object with an array `results` field: that array; other envelope
///   fields (`count`, `next`, `previous`) are ignored
/// - anything else: empty
///
/// Never fails. Unexpected shapes are logged at debug level only.
pub fn normalize(payload: Value) -> Vec<ResourceRecord> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                tracing::debug!(
                    shape = json_shape(&other),
                    "`results` field is not an array, treating collection as empty"
                );
                return Vec::new();
            }
            None => {
                tracing::debug!("object payload has no `results` field, treating collection as empty");
                return Vec::new();
            }
        },
        other => {
            tracing::debug!(
                shape = json_shape(&other),
                "payload is neither array nor envelope, treating collection as empty"
            );
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(ResourceRecord::from(map)),
            other => {
                // A record is a field mapping; anything else carries no fields.
                tracing::debug!(shape = json_shape(&other), "dropping non-object collection element");
                None
            }
        })
        .collect()
}

fn json_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_is_identity() {
        let payload = json!([{"id": 1, "name": "Run"}, {"id": 2, "name": "Swim"}]);
        let records = normalize(payload.clone());
        assert_eq!(records.len(), 2);
        assert_eq!(serde_json::to_value(&records).unwrap(), payload);
    }

    #[test]
    fn test_envelope_results_extracted() {
        let payload = json!({
            "count": 2,
            "next": "http://localhost:8000/api/activities/?page=2",
            "previous": null,
            "results": [{"id": 1, "name": "Run"}]
        });
        let records = normalize(payload);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("name"), Some("Run"));
    }

    #[test]
    fn test_envelope_with_empty_results() {
        let records = normalize(json!({"count": 0, "results": []}));
        assert!(records.is_empty());
    }

    #[test]
    fn test_object_without_results_is_empty() {
        let records = normalize(json!({"detail": "Not found."}));
        assert!(records.is_empty());
    }

    #[test]
    fn test_non_array_results_is_empty() {
        let records = normalize(json!({"results": "oops"}));
        assert!(records.is_empty());
    }

    #[test]
    fn test_scalar_payloads_are_empty() {
        assert!(normalize(json!(null)).is_empty());
        assert!(normalize(json!(42)).is_empty());
        assert!(normalize(json!("ok")).is_empty());
        assert!(normalize(json!(true)).is_empty());
    }

    #[test]
    fn test_non_object_elements_are_dropped() {
        let records = normalize(json!([{"id": 1}, "stray", 7, {"id": 2}]));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number("id"), Some(1.0));
        assert_eq!(records[1].number("id"), Some(2.0));
    }

    #[test]
    fn test_order_preserved() {
        let records = normalize(json!([{"id": 3}, {"id": 1}, {"id": 2}]));
        let ids: Vec<f64> = records.iter().filter_map(|r| r.number("id")).collect();
        assert_eq!(ids, vec![3.0, 1.0, 2.0]);
    }
}
