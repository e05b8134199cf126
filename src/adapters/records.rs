use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single resource as returned by `show`
///
/// An empty record means the resource was not found.
pub type Record = serde_json::Map<String, Value>;

/// Contact resource
///
/// JSON structure:
/// ```json
/// { "stored": "data", "emailAddress": "foobar@example.com" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub stored: String,
    #[serde(rename = "emailAddress")]
    pub email_address: String,
}

impl Contact {
    pub fn new(stored: impl Into<String>, email_address: impl Into<String>) -> Self {
        Self {
            stored: stored.into(),
            email_address: email_address.into(),
        }
    }

    /// Convert into the record shape returned by `show`
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("stored".to_string(), Value::String(self.stored.clone()));
        record.insert(
            "emailAddress".to_string(),
            Value::String(self.email_address.clone()),
        );
        record
    }
}

/// Result of a `search` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching elements
    ///
    /// Missing from the payload means nothing matched.
    #[serde(default)]
    pub elements: Vec<Value>,
}

/// Level of detail requested from the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Minimal,
    Partial,
    Complete,
}

/// Options accepted by `search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<Depth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, rename = "orderBy", skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_contact_uses_wire_field_names() {
        let contact = Contact::new("data", "foobar@example.com");
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            value,
            json!({"stored": "data", "emailAddress": "foobar@example.com"})
        );
        assert!(value.get("email_address").is_none());
    }

    #[test]
    fn test_to_record_matches_serialization() {
        let contact = Contact::new("data", "foobar@example.com");
        let serialized = serde_json::to_value(&contact).unwrap();
        assert_eq!(Value::Object(contact.to_record()), serialized);
    }

    #[rstest]
    #[case::empty_object(r#"{}"#)]
    #[case::empty_array(r#"{"elements": []}"#)]
    fn test_parse_empty_search_results(#[case] json: &str) {
        let results: SearchResults = serde_json::from_str(json).unwrap();
        assert!(results.elements.is_empty());
    }

    #[rstest]
    #[case::minimal(Depth::Minimal, "\"minimal\"")]
    #[case::partial(Depth::Partial, "\"partial\"")]
    #[case::complete(Depth::Complete, "\"complete\"")]
    fn test_depth_serializes_lowercase(#[case] depth: Depth, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&depth).unwrap(), expected);
    }

    #[test]
    fn test_default_search_options_serialize_empty() {
        let json = serde_json::to_string(&SearchOptions::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_search_options_order_by_field_name() {
        let options = SearchOptions {
            order_by: Some("name".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({"orderBy": "name"}));
    }
}
