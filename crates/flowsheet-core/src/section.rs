//! Flow-sheet dashboard section configuration.

use crate::concept::Concept;
use crate::error::Result;
use crate::header::{HeaderLabelResolver, HeaderLabelSource};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardParams {
    #[serde(default)]
    pub concept_names: Vec<String>,
}

/// A flow-sheet section as configured for a patient dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSheetSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_concept_source: Option<String>,
    #[serde(default)]
    pub dashboard_params: DashboardParams,
}

/// A resolved header for one concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLabel {
    pub uuid: String,
    pub label: String,
    pub source: HeaderLabelSource,
}

impl FlowSheetSection {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configured heading concept source; an empty string counts as unset.
    pub fn heading_concept_source(&self) -> Option<&str> {
        self.heading_concept_source
            .as_deref()
            .filter(|s| !s.is_empty())
    }

    pub fn concept_names(&self) -> &[String] {
        &self.dashboard_params.concept_names
    }

    pub fn header_resolver(&self) -> HeaderLabelResolver {
        HeaderLabelResolver::from(self)
    }

    /// Resolve the header of every concept, preserving order.
    pub fn header_labels(&self, concepts: &[Concept]) -> Vec<HeaderLabel> {
        let resolver = self.header_resolver();
        debug!(
            section = self.name.as_deref().unwrap_or("-"),
            heading_concept_source = resolver.heading_concept_source().unwrap_or("-"),
            concepts = concepts.len(),
            "resolving flow-sheet headers"
        );
        concepts
            .iter()
            .map(|concept| HeaderLabel {
                uuid: concept.uuid.clone(),
                label: resolver.label(concept),
                source: resolver.classify(concept),
            })
            .collect()
    }
}

impl From<&FlowSheetSection> for HeaderLabelResolver {
    fn from(section: &FlowSheetSection) -> Self {
        HeaderLabelResolver::new(section.heading_concept_source())
    }
}
