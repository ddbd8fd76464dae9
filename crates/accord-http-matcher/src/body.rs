//! Body equivalence strategies keyed by the resolved media kind.

use serde_json::Value;
use tracing::debug;

use crate::form::FormEncoder;
use crate::media_type::{MediaKind, MediaType};
use crate::request::{ObservedRequest, SpecRequest};
use crate::schema::SchemaValidator;

/// A side's body reduced to its comparison unit.
///
/// JSON bodies that fail to parse fall back to the trimmed raw text rather
/// than erroring; hardening that would change matching semantics for specs
/// that rely on the fallback.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BodyContent {
    Absent,
    Json(Value),
    Text(String),
}

impl BodyContent {
    /// Reduce a raw optional body to its comparison unit for the given
    /// media type.
    pub(crate) fn resolve(body: Option<&str>, media_type: Option<&MediaType>) -> Self {
        let Some(raw) = body else {
            return BodyContent::Absent;
        };
        let trimmed = raw.trim();
        if media_type.map(MediaType::kind) == Some(MediaKind::Json) {
            match serde_json::from_str(trimmed) {
                Ok(value) => BodyContent::Json(value),
                Err(_) => BodyContent::Text(trimmed.to_string()),
            }
        } else {
            BodyContent::Text(trimmed.to_string())
        }
    }

    /// View the content as a JSON value for schema validation. The text
    /// fallback is passed as a JSON string, absence as null.
    fn to_json(&self) -> Value {
        match self {
            BodyContent::Absent => Value::Null,
            BodyContent::Json(value) => value.clone(),
            BodyContent::Text(text) => Value::String(text.clone()),
        }
    }
}

/// Decide body equivalence between the observed and spec requests under an
/// already-compatible media type.
pub(crate) fn bodies_match(
    observed: &ObservedRequest,
    spec: &SpecRequest,
    media_type: Option<&MediaType>,
    schema_validator: &dyn SchemaValidator,
    form_encoder: &dyn FormEncoder,
) -> bool {
    let observed_content = BodyContent::resolve(observed.body.as_deref(), media_type);
    let spec_content = BodyContent::resolve(spec.body.as_deref(), media_type);

    // Absent compares equal to Absent, which also covers the trivial
    // no-body/no-spec-body success.
    if observed_content == spec_content {
        return true;
    }

    match media_type.map(MediaType::kind) {
        // Multipart payload contents are never compared; a compatible
        // multipart type on both sides is enough. Documented leniency.
        Some(MediaKind::Multipart) => true,
        Some(MediaKind::FormUrlEncoded) => {
            form_encoded_match(&observed_content, &spec_content, form_encoder)
        }
        Some(MediaKind::Json) => match &spec.schema {
            Some(schema) => schema_validator.matches_schema(&observed_content.to_json(), schema),
            None => observed_content == spec_content,
        },
        // No body rule for the remaining media types: degrade to a
        // non-match rather than panicking.
        _ => false,
    }
}

/// Form-urlencoded rule: the spec body is authored as a JSON object of form
/// fields; it is serialized through the encoder and compared byte-for-byte
/// against the raw observed body.
fn form_encoded_match(
    observed: &BodyContent,
    spec: &BodyContent,
    encoder: &dyn FormEncoder,
) -> bool {
    let (BodyContent::Text(observed_raw), BodyContent::Text(spec_raw)) = (observed, spec) else {
        return false;
    };
    match serde_json::from_str::<Value>(spec_raw) {
        Ok(Value::Object(fields)) => encoder.encode(&fields) == *observed_raw,
        Ok(_) | Err(_) => {
            debug!("spec body for form-urlencoded content is not a JSON object");
            false
        }
    }
}
