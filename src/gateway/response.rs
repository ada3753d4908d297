//! # Response Formatting
//!
//! Envelopes wrap a result under a key named after the resource:
//! `{"restaurants": [...]}` for collections, `{"dish": {...}}` for a single
//! record.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::resource::Resource;

/// A successful result wrapped under its resource key
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    key: &'static str,
    body: Value,
}

impl Envelope {
    /// Collection envelope, keyed by the plural resource name
    pub fn collection(resource: Resource, rows: Vec<Value>) -> Self {
        Self {
            key: resource.plural(),
            body: Value::Array(rows),
        }
    }

    /// Single record envelope, keyed by the singular resource name
    pub fn single(resource: Resource, row: Value) -> Self {
        Self {
            key: resource.singular(),
            body: row,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.body)?;
        map.end()
    }
}

/// Body of a 404
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of a 400 or 500
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_serialization() {
        let envelope = Envelope::collection(
            Resource::Restaurant,
            vec![json!({"id": 1}), json!({"id": 2})],
        );

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, json!({"restaurants": [{"id": 1}, {"id": 2}]}));
    }

    #[test]
    fn test_single_serialization() {
        let envelope = Envelope::single(Resource::Dish, json!({"id": 1, "name": "Paneer Tikka"}));

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["dish"]["name"], "Paneer Tikka");
        assert!(json.get("dishes").is_none());
    }
}
