//! Header label selection for flow-sheet columns and rows.
//!
//! A header shows, in order of preference:
//! 1. the name of the concept's mapping registered under the configured
//!    heading concept source (the abbreviation),
//! 2. the concept's short name,
//! 3. the concept's full name.
//!
//! # Example
//!
//! ```
//! use flowsheet_core::{Concept, ConceptMapping, HeaderLabelResolver};
//!
//! let concept = Concept::new("u1")
//!     .with_short_name("sn")
//!     .with_mapping(ConceptMapping::new("CustomAbbreviationSource", "abbreviation", "SCD"));
//!
//! let resolver = HeaderLabelResolver::new(Some("CustomAbbreviationSource"));
//! assert_eq!(resolver.resolve(&concept), Some("abbreviation"));
//!
//! let resolver = HeaderLabelResolver::new(None::<String>);
//! assert_eq!(resolver.resolve(&concept), Some("sn"));
//! ```

use crate::concept::Concept;
use serde::{Deserialize, Serialize};

/// Which concept field supplied a header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderLabelSource {
    Abbreviation,
    ShortName,
    FullName,
    Missing,
}

impl std::fmt::Display for HeaderLabelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abbreviation => write!(f, "abbreviation"),
            Self::ShortName => write!(f, "short_name"),
            Self::FullName => write!(f, "full_name"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// Resolve the header label of `concept`.
///
/// Returns `None` when the concept has no matching mapping, no short name
/// and no name; callers render that as a blank label.
pub fn resolve_header_name<'a>(
    concept: &'a Concept,
    heading_concept_source: Option<&str>,
) -> Option<&'a str> {
    classify(concept, heading_concept_source).0
}

fn classify<'a>(
    concept: &'a Concept,
    heading_concept_source: Option<&str>,
) -> (Option<&'a str>, HeaderLabelSource) {
    if let Some(source) = heading_concept_source.filter(|s| !s.is_empty()) {
        if let Some(mapping) = concept.mapping_for_source(source) {
            return (Some(mapping.name.as_str()), HeaderLabelSource::Abbreviation);
        }
    }

    if let Some(short_name) = concept.short_name.as_deref().filter(|s| !s.is_empty()) {
        return (Some(short_name), HeaderLabelSource::ShortName);
    }

    match concept.name.as_deref() {
        Some(name) => (Some(name), HeaderLabelSource::FullName),
        None => (None, HeaderLabelSource::Missing),
    }
}

/// Header label resolver bound to a configured heading concept source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLabelResolver {
    heading_concept_source: Option<String>,
}

impl HeaderLabelResolver {
    pub fn new<S: Into<String>>(heading_concept_source: Option<S>) -> Self {
        Self {
            heading_concept_source: heading_concept_source
                .map(Into::into)
                .filter(|s: &String| !s.is_empty()),
        }
    }

    pub fn heading_concept_source(&self) -> Option<&str> {
        self.heading_concept_source.as_deref()
    }

    pub fn resolve<'a>(&self, concept: &'a Concept) -> Option<&'a str> {
        resolve_header_name(concept, self.heading_concept_source())
    }

    /// Like [`resolve`](Self::resolve), with an absent label rendered blank.
    pub fn label(&self, concept: &Concept) -> String {
        self.resolve(concept).unwrap_or_default().to_string()
    }

    /// Which field the label for `concept` comes from.
    pub fn classify(&self, concept: &Concept) -> HeaderLabelSource {
        classify(concept, self.heading_concept_source()).1
    }
}
