//! The exported matching predicate.

use std::sync::Arc;

use tracing::debug;

use crate::body;
use crate::error::MatchError;
use crate::form::{FormEncoder, UrlFormEncoder};
use crate::headers;
use crate::media_type;
use crate::request::{ObservedRequest, SpecRequest};
use crate::schema::{PermissiveSchemaValidator, SchemaValidator};

/// Matching engine owning the external collaborator seams.
///
/// The engine is immutable after construction; one instance can be shared
/// across threads and reused for any number of evaluations. Inputs are
/// borrowed read-only and never retained.
#[derive(Clone)]
pub struct RequestMatcher {
    schema_validator: Arc<dyn SchemaValidator>,
    form_encoder: Arc<dyn FormEncoder>,
}

impl Default for RequestMatcher {
    fn default() -> Self {
        Self {
            schema_validator: Arc::new(PermissiveSchemaValidator),
            form_encoder: Arc::new(UrlFormEncoder),
        }
    }
}

impl RequestMatcher {
    pub fn new(
        schema_validator: Arc<dyn SchemaValidator>,
        form_encoder: Arc<dyn FormEncoder>,
    ) -> Self {
        Self {
            schema_validator,
            form_encoder,
        }
    }

    /// Replace the schema-validation collaborator.
    pub fn with_schema_validator(mut self, validator: Arc<dyn SchemaValidator>) -> Self {
        self.schema_validator = validator;
        self
    }

    /// Replace the form-encoding collaborator.
    pub fn with_form_encoder(mut self, encoder: Arc<dyn FormEncoder>) -> Self {
        self.form_encoder = encoder;
        self
    }

    /// Decide whether `observed` satisfies `spec`.
    ///
    /// Stages run in order (media-type compatibility, headers, body) and
    /// the first failing stage resolves to `Ok(false)`. The only surfaced
    /// error is a malformed content-type header value on either side.
    pub fn matches(
        &self,
        observed: &ObservedRequest,
        spec: &SpecRequest,
    ) -> Result<bool, MatchError> {
        let observed_type = media_type::from_observed(observed)?;
        let spec_type = media_type::from_spec(spec)?;

        if !media_type::compatible(observed_type.as_ref(), spec_type.as_ref()) {
            debug!(observed = ?observed_type, spec = ?spec_type, "skip: different content types");
            return Ok(false);
        }

        if !headers::headers_match(observed, spec) {
            debug!("skip: required header missing or different");
            return Ok(false);
        }

        let matched = body::bodies_match(
            observed,
            spec,
            observed_type.as_ref(),
            self.schema_validator.as_ref(),
            self.form_encoder.as_ref(),
        );
        if !matched {
            debug!("skip: different body");
        }
        Ok(matched)
    }
}

/// Evaluate the predicate with the default collaborators.
pub fn matches(observed: &ObservedRequest, spec: &SpecRequest) -> Result<bool, MatchError> {
    RequestMatcher::default().matches(observed, spec)
}
