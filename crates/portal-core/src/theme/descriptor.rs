//! Tenant theme descriptor as delivered by the backend.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::ThemeLoadError;

/// Mapping of semantic option name to raw style value.
///
/// Values are opaque strings (`"#112233"`, `"8px"`, `"Georgia"`). Nothing is
/// converted or validated; the browser decides what a value means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThemeDescriptor {
    options: BTreeMap<String, String>,
}

impl ThemeDescriptor {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, option: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(option, value);
        self
    }

    /// Insert or replace an option
    pub fn insert(&mut self, option: impl Into<String>, value: impl Into<String>) {
        self.options.insert(option.into(), value.into());
    }

    pub fn get(&self, option: &str) -> Option<&str> {
        self.options.get(option).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate options in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build a descriptor from a decoded JSON payload.
    ///
    /// The payload must be a JSON object. Entries whose value is not a string
    /// cannot be written as a style value and are dropped.
    pub fn from_json(payload: &Value) -> Result<Self, ThemeLoadError> {
        let object = payload.as_object().ok_or_else(|| {
            ThemeLoadError::Malformed(format!("expected a JSON object, got {}", json_kind(payload)))
        })?;

        let mut descriptor = Self::new();
        for (option, value) in object {
            match value {
                Value::String(s) => descriptor.insert(option.clone(), s.clone()),
                other => {
                    tracing::debug!(
                        option = %option,
                        kind = json_kind(other),
                        "Dropping non-string theme value"
                    );
                }
            }
        }
        Ok(descriptor)
    }

    /// Decode a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ThemeLoadError> {
        let payload: Value = serde_json::from_slice(body)
            .map_err(|e| ThemeLoadError::Malformed(e.to_string()))?;
        Self::from_json(&payload)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ThemeDescriptor {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut descriptor = Self::new();
        for (k, v) in iter {
            descriptor.insert(k, v);
        }
        descriptor
    }
}

fn json_kind(value: &Value) -> &'static str {
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
    fn test_from_json_keeps_string_values() {
        let payload = json!({ "corPrimaria": "#112233", "fontFamilia": "Georgia" });
        let descriptor = ThemeDescriptor::from_json(&payload).unwrap();
        assert_eq!(descriptor.len(), 2);
        assert_eq!(descriptor.get("corPrimaria"), Some("#112233"));
        assert_eq!(descriptor.get("fontFamilia"), Some("Georgia"));
    }

    #[test]
    fn test_from_json_keeps_unknown_keys() {
        // Unknown keys are the applier's concern, not the decoder's.
        let payload = json!({ "logoUrl": "https://cdn/logo.svg" });
        let descriptor = ThemeDescriptor::from_json(&payload).unwrap();
        assert_eq!(descriptor.get("logoUrl"), Some("https://cdn/logo.svg"));
    }

    #[test]
    fn test_from_json_drops_non_string_values() {
        let payload = json!({
            "corPrimaria": "#000",
            "raioBorda": 4,
            "sombra": null,
            "extra": { "nested": true },
        });
        let descriptor = ThemeDescriptor::from_json(&payload).unwrap();
        assert_eq!(descriptor.len(), 1);
        assert_eq!(descriptor.get("raioBorda"), None);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = ThemeDescriptor::from_json(&json!(["corPrimaria"])).unwrap_err();
        assert!(matches!(err, ThemeLoadError::Malformed(_)));
    }

    #[test]
    fn test_from_slice_rejects_invalid_json() {
        let err = ThemeDescriptor::from_slice(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, ThemeLoadError::Malformed(_)));
    }

    #[test]
    fn test_empty_object_is_valid() {
        let descriptor = ThemeDescriptor::from_slice(b"{}").unwrap();
        assert!(descriptor.is_empty());
    }
}
