//! Form-urlencoded serialization seam.

use serde_json::{Map, Value};

/// Collaborator that serializes a flat JSON-shaped object into
/// `application/x-www-form-urlencoded` syntax.
///
/// Output must be byte-for-byte stable across invocations; the matcher
/// compares it for exact equality against the observed body.
pub trait FormEncoder: Send + Sync {
    fn encode(&self, fields: &Map<String, Value>) -> String;
}

/// Percent-encoding encoder over the canonical (sorted) key order of the
/// field map.
#[derive(Debug, Default, Clone, Copy)]
pub struct UrlFormEncoder;

impl FormEncoder for UrlFormEncoder {
    fn encode(&self, fields: &Map<String, Value>) -> String {
        fields
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&scalar_text(value))
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Render a field value the way form data carries it: strings without
/// quotes, everything else in its JSON form.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
