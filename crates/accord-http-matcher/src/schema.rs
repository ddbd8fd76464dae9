//! Schema-validation seam.
//!
//! Structural validation of a JSON body against a declared schema is an
//! external concern; the matcher only consumes the boolean verdict.

use serde_json::Value;
use tracing::warn;

/// Collaborator that validates a parsed JSON body against a schema.
pub trait SchemaValidator: Send + Sync {
    /// Returns true iff `body` is structurally valid under `schema`.
    fn matches_schema(&self, body: &Value, schema: &Value) -> bool;
}

/// Default validator used when no real engine is wired in: accepts every
/// body and warns when consulted.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveSchemaValidator;

impl SchemaValidator for PermissiveSchemaValidator {
    fn matches_schema(&self, _body: &Value, _schema: &Value) -> bool {
        warn!("spec declares a schema but no schema validator is configured; accepting body");
        true
    }
}
