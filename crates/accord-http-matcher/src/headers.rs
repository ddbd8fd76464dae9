//! Header-subset checking between an observed request and a spec.

use crate::request::{ObservedRequest, SpecRequest};

/// Sentinel spec-header name whose comparison is owned by media-type
/// resolution rather than the header matcher. Matched on exact casing.
const CONTENT_TYPE_SENTINEL: &str = "Content-Type";

/// Check that every header the spec requires is present in the observed
/// request with an exactly equal value.
///
/// Names compare case-insensitively (observed keys are already lower-cased),
/// values case-sensitively. An empty requirement list is vacuously
/// satisfied, the `Content-Type` sentinel is always satisfied, and the order
/// of spec headers carries no weight.
pub(crate) fn headers_match(observed: &ObservedRequest, spec: &SpecRequest) -> bool {
    spec.headers.iter().all(|required| {
        required.name == CONTENT_TYPE_SENTINEL
            || observed.headers.get(&required.name.to_lowercase()) == Some(&required.value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::SpecHeader;

    fn observed(headers: &[(&str, &str)]) -> ObservedRequest {
        ObservedRequest::new(
            headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
            None,
        )
    }

    #[test]
    fn test_empty_spec_headers_are_vacuously_satisfied() {
        let spec = SpecRequest::default();
        assert!(headers_match(&observed(&[("x-api-key", "secret")]), &spec));
        assert!(headers_match(&observed(&[]), &spec));
    }

    #[test]
    fn test_names_compare_case_insensitively() {
        let spec = SpecRequest {
            headers: vec![SpecHeader::new("X-Api-Key", "secret")],
            ..Default::default()
        };
        assert!(headers_match(&observed(&[("x-api-key", "secret")]), &spec));
    }

    #[test]
    fn test_values_compare_case_sensitively() {
        let spec = SpecRequest {
            headers: vec![SpecHeader::new("X-Api-Key", "Secret")],
            ..Default::default()
        };
        assert!(!headers_match(&observed(&[("x-api-key", "secret")]), &spec));
    }

    #[test]
    fn test_missing_header_fails_the_whole_check() {
        let spec = SpecRequest {
            headers: vec![
                SpecHeader::new("Accept", "application/json"),
                SpecHeader::new("X-Api-Key", "secret"),
            ],
            ..Default::default()
        };
        assert!(!headers_match(&observed(&[("accept", "application/json")]), &spec));
    }

    #[test]
    fn test_content_type_sentinel_is_always_satisfied() {
        let spec = SpecRequest {
            headers: vec![SpecHeader::new("Content-Type", "application/json")],
            ..Default::default()
        };
        // Observed value differs, and is even absent entirely; the sentinel
        // is exempt either way.
        assert!(headers_match(&observed(&[("content-type", "text/plain")]), &spec));
        assert!(headers_match(&observed(&[]), &spec));
    }

    #[test]
    fn test_sentinel_requires_exact_casing() {
        // A differently-cased content-type expectation is compared like any
        // other header, against the raw observed value.
        let spec = SpecRequest {
            headers: vec![SpecHeader::new("content-type", "text/plain")],
            ..Default::default()
        };
        assert!(headers_match(&observed(&[("content-type", "text/plain")]), &spec));
        assert!(!headers_match(&observed(&[("content-type", "text/plain; charset=ascii")]), &spec));
    }

    #[test]
    fn test_header_order_is_irrelevant() {
        let forward = SpecRequest {
            headers: vec![
                SpecHeader::new("X-A", "1"),
                SpecHeader::new("X-B", "2"),
            ],
            ..Default::default()
        };
        let reversed = SpecRequest {
            headers: vec![
                SpecHeader::new("X-B", "2"),
                SpecHeader::new("X-A", "1"),
            ],
            ..Default::default()
        };
        let req = observed(&[("x-a", "1"), ("x-b", "2")]);
        assert_eq!(headers_match(&req, &forward), headers_match(&req, &reversed));
        assert!(headers_match(&req, &forward));
    }
}
