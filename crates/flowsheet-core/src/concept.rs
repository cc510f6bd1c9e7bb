//! Concept records as served by the clinical data service.
//!
//! A concept is a clinical observation type with a full name, an optional
//! short name, and zero or more mappings into external naming systems
//! (e.g. an abbreviation source or a bacteriology module).

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Association between a concept and an external naming system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptMapping {
    /// Naming system identifier, compared verbatim
    pub source: String,
    pub name: String,
    pub code: String,
}

impl ConceptMapping {
    pub fn new(
        source: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
            code: code.into(),
        }
    }
}

/// A clinical concept as displayed in a flow sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Ordered; position decides which of several same-source entries wins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<ConceptMapping>,
}

impl Concept {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: None,
            short_name: None,
            mappings: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn with_mapping(mut self, mapping: ConceptMapping) -> Self {
        self.mappings.push(mapping);
        self
    }

    /// First mapping registered under `source`, in sequence order.
    pub fn mapping_for_source(&self, source: &str) -> Option<&ConceptMapping> {
        self.mappings.iter().find(|m| m.source == source)
    }

    /// Parse a single concept from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let concept: Concept = serde_json::from_str(json)?;
        concept.validate()?;
        Ok(concept)
    }

    /// Parse either a single concept object or an array of concepts.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let concepts = if value.is_array() {
            serde_json::from_value::<Vec<Concept>>(value)?
        } else {
            vec![serde_json::from_value::<Concept>(value)?]
        };
        for concept in &concepts {
            concept.validate()?;
        }
        Ok(concepts)
    }

    pub fn validate(&self) -> Result<()> {
        if self.uuid.is_empty() {
            return Err(CoreError::invalid_concept("uuid must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let concept: Concept = serde_json::from_value(json!({
            "uuid": "uuid",
            "shortName": "shortName",
            "name": "name"
        }))
        .unwrap();

        assert_eq!(concept.short_name.as_deref(), Some("shortName"));
        assert_eq!(concept.name.as_deref(), Some("name"));
        assert!(concept.mappings.is_empty());
    }

    #[test]
    fn test_mapping_order_is_preserved() {
        let concept: Concept = serde_json::from_value(json!({
            "uuid": "uuid",
            "mappings": [
                {"source": "org.openmrs.module.bacteriology", "name": "SPECIMEN COLLECTION DATE", "code": "SPECIMEN_COLLECTION_DATE"},
                {"source": "Abbrevation", "name": "abbreviation", "code": "SCD"}
            ]
        }))
        .unwrap();

        assert_eq!(concept.mappings.len(), 2);
        assert_eq!(concept.mappings[0].source, "org.openmrs.module.bacteriology");
        assert_eq!(concept.mappings[1].code, "SCD");
    }

    #[test]
    fn test_mapping_for_source_returns_first_match() {
        let concept = Concept::new("u1")
            .with_mapping(ConceptMapping::new("Abbreviation", "first", "A1"))
            .with_mapping(ConceptMapping::new("Abbreviation", "second", "A2"));

        assert_eq!(concept.mapping_for_source("Abbreviation").unwrap().name, "first");
        assert!(concept.mapping_for_source("abbreviation").is_none());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_value(Concept::new("u1").with_name("name")).unwrap();
        assert_eq!(json, json!({"uuid": "u1", "name": "name"}));
    }

    #[test]
    fn test_list_from_json_accepts_object_or_array() {
        let single = Concept::list_from_json(r#"{"uuid": "u1", "name": "n"}"#).unwrap();
        assert_eq!(single.len(), 1);

        let many =
            Concept::list_from_json(r#"[{"uuid": "u1"}, {"uuid": "u2", "shortName": "s"}]"#)
                .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].short_name.as_deref(), Some("s"));
    }

    #[test]
    fn test_empty_uuid_is_rejected() {
        let err = Concept::from_json(r#"{"uuid": "", "name": "n"}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConcept { .. }));
    }

    #[test]
    fn test_missing_uuid_is_a_json_error() {
        let err = Concept::from_json(r#"{"name": "n"}"#).unwrap_err();
        assert!(matches!(err, CoreError::JsonError(_)));
    }
}
