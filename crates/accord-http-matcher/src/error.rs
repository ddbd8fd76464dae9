//! Error types for the matching core.

/// Errors surfaced by the matching predicate.
///
/// Only malformed caller input escapes the predicate. Data-shape problems
/// inside a body comparison (unparseable JSON, missing fields) degrade to a
/// non-match instead.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// A content-type header value whose primary media-type token is empty.
    #[error("malformed content-type header value: {0:?}")]
    MalformedContentType(String),
}
