//! Spec catalogue loading and first-match scanning.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::RequestMatcher;
use crate::media_type::{self, MediaKind};
use crate::request::{ObservedRequest, SpecRequest};

/// An ordered catalogue of spec requests, typically authored as a YAML or
/// JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecCatalog {
    #[serde(default)]
    pub specs: Vec<SpecRequest>,
}

impl SpecCatalog {
    /// Load a catalogue from a file. A `.json` extension parses as JSON,
    /// anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read spec catalogue {}", path.display()))?;
        let catalog: SpecCatalog = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&contents)
                .with_context(|| format!("invalid JSON spec catalogue {}", path.display()))?
        } else {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("invalid YAML spec catalogue {}", path.display()))?
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Authoring rules the data model cannot express: a schema is only
    /// meaningful for a JSON content type.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        for (index, spec) in self.specs.iter().enumerate() {
            if spec.schema.is_none() {
                continue;
            }
            let declared = media_type::from_spec(spec)
                .with_context(|| format!("spec #{index}: invalid content-type header"))?;
            if declared.map(|media| media.kind()) != Some(MediaKind::Json) {
                anyhow::bail!(
                    "spec #{index} declares a schema but its declared content type is not JSON"
                );
            }
        }
        Ok(())
    }

    /// Scan the catalogue in order and return the first spec the observed
    /// request satisfies.
    ///
    /// A candidate whose evaluation errors is skipped with a warning so one
    /// malformed spec never interrupts the scan.
    pub fn find_match<'a>(
        &'a self,
        matcher: &RequestMatcher,
        observed: &ObservedRequest,
    ) -> Option<&'a SpecRequest> {
        self.specs
            .iter()
            .find(|spec| match matcher.matches(observed, spec) {
                Ok(matched) => matched,
                Err(err) => {
                    warn!("skipping spec candidate: {err}");
                    false
                }
            })
    }
}
