//! Request representations for the matching predicate.
//!
//! The observed side and the specification side are deliberately two
//! distinct shapes: observed headers are a unique-keyed, lower-cased map as
//! delivered by an HTTP stack, while spec headers are the ordered
//! name/value list exactly as authored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An observed HTTP request under evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedRequest {
    /// Header map keyed by lower-cased header name.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ObservedRequest {
    /// Build an observed request, lower-casing header names on the way in.
    pub fn new(
        headers: impl IntoIterator<Item = (String, String)>,
        body: Option<String>,
    ) -> Self {
        Self {
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.to_lowercase(), value))
                .collect(),
            body,
        }
    }
}

/// A single authored header expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecHeader {
    pub name: String,
    pub value: String,
}

impl SpecHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A declarative expectation a candidate request must satisfy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecRequest {
    /// Ordered header expectations, casing as authored. Order carries no
    /// semantic weight.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<SpecHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Structural schema for JSON bodies, validated by the configured
    /// [`SchemaValidator`](crate::SchemaValidator).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}
