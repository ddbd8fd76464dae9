//! Content-type normalization and classification.
//!
//! The primary media type is the lower-cased `type/subtype` token of a
//! content-type header value, with parameters such as `boundary=` or
//! `charset=` stripped. It is resolved once per side and its classified
//! kind drives the body comparison strategy.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MatchError;
use crate::request::{ObservedRequest, SpecRequest};

/// Canonical lower-case key of the content-type header.
pub(crate) const CONTENT_TYPE: &str = "content-type";

/// Extraction pattern for the primary media-type token. Compiled once and
/// shared process-wide; reads are safe across threads.
static MEDIA_TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([^;]+)").expect("media type pattern is valid"));

/// Media-type classification driving the body comparison strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Any media type whose token contains `json`, including `+json`
    /// suffixed types.
    Json,
    /// Exactly `application/x-www-form-urlencoded`.
    FormUrlEncoded,
    /// Exactly `multipart/form-data`.
    Multipart,
    Other,
}

/// A normalized primary media type.
///
/// Equality compares the normalized token; two types with the same kind but
/// different tokens (for example `application/json` and
/// `application/hal+json`) are not equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    essence: String,
    kind: MediaKind,
}

impl MediaType {
    /// Parse a raw content-type header value into its normalized primary
    /// media type.
    ///
    /// A value whose primary token is empty (empty string, whitespace only,
    /// or a leading `;`) is a caller error.
    pub fn parse(value: &str) -> Result<Self, MatchError> {
        let token = MEDIA_TYPE_RE
            .captures(value)
            .and_then(|captures| captures.get(1))
            .map(|token| token.as_str().trim())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| MatchError::MalformedContentType(value.to_string()))?;

        let essence = token.to_lowercase();
        let kind = if essence.contains("json") {
            MediaKind::Json
        } else if essence == "application/x-www-form-urlencoded" {
            MediaKind::FormUrlEncoded
        } else if essence == "multipart/form-data" {
            MediaKind::Multipart
        } else {
            MediaKind::Other
        };

        Ok(Self { essence, kind })
    }

    /// The normalized `type/subtype` token.
    pub fn essence(&self) -> &str {
        &self.essence
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn is_multipart(&self) -> bool {
        self.kind == MediaKind::Multipart
    }
}

/// Resolve the media type declared by an observed request, if any.
///
/// Absence of the header is a distinct outcome from an empty value: the
/// former is `Ok(None)`, the latter a malformed-header error.
pub(crate) fn from_observed(req: &ObservedRequest) -> Result<Option<MediaType>, MatchError> {
    req.headers
        .get(CONTENT_TYPE)
        .map(|value| MediaType::parse(value))
        .transpose()
}

/// Resolve the media type declared by a spec request's ordered header list,
/// if any. The name scan is case-insensitive.
pub(crate) fn from_spec(spec: &SpecRequest) -> Result<Option<MediaType>, MatchError> {
    spec.headers
        .iter()
        .find(|header| header.name.eq_ignore_ascii_case(CONTENT_TYPE))
        .map(|header| MediaType::parse(&header.value))
        .transpose()
}

/// Compatibility of the two resolved media types.
///
/// Both absent is compatible; exactly one absent is not. Two present types
/// are compatible when their normalized tokens are equal, or when both
/// classify as multipart form data (boundary parameters were already
/// stripped at normalization).
pub(crate) fn compatible(observed: Option<&MediaType>, spec: Option<&MediaType>) -> bool {
    match (observed, spec) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b || (a.is_multipart() && b.is_multipart()),
        _ => false,
    }
}
