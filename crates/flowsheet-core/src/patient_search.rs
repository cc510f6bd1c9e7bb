//! Patient lookup helpers for the registration search form.
//!
//! Patients are looked up either by name (published as the `q` query
//! parameter) or by identifier, which is the center id followed directly by
//! the registration number.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Query parameter carrying a name search.
pub const NAME_QUERY_PARAM: &str = "q";

/// Patient identifier composed of a registration center and a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatientIdentifier {
    pub center_id: String,
    pub registration_number: String,
}

impl PatientIdentifier {
    pub fn new(center_id: impl Into<String>, registration_number: impl Into<String>) -> Self {
        Self {
            center_id: center_id.into(),
            registration_number: registration_number.into(),
        }
    }
}

impl fmt::Display for PatientIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.center_id, self.registration_number)
    }
}

/// Minimal patient record returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub uuid: String,
}

/// Search response body; only `results` is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PatientSummary>,
}

impl SearchResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// What an identifier search turned up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found { uuid: String },
    NotFound { message: String },
}

impl SearchOutcome {
    /// The first result wins; an empty result list is reported as not found.
    pub fn from_results(identifier: &PatientIdentifier, results: &[PatientSummary]) -> Self {
        match results.first() {
            Some(patient) => Self::Found {
                uuid: patient.uuid.clone(),
            },
            None => Self::NotFound {
                message: format!(
                    "Could not find patient with identifier {identifier}. Please verify the patient ID entered or create a new patient record."
                ),
            },
        }
    }
}

/// `false` until a search has run, then whether it came back empty.
pub fn no_results_found<T>(results: Option<&[T]>) -> bool {
    results.is_some_and(|r| r.is_empty())
}

/// State of the patient search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub center_id: String,
    pub registration_number: String,
    pub name: String,
    initial_search: bool,
}

impl SearchForm {
    pub fn new(default_center_id: impl Into<String>) -> Self {
        Self {
            center_id: default_center_id.into(),
            ..Default::default()
        }
    }

    /// Build the form from the current query parameters; a non-empty `q`
    /// parameter pre-fills the name and requests an immediate name search.
    pub fn from_query(
        default_center_id: impl Into<String>,
        query: &HashMap<String, String>,
    ) -> Self {
        let mut form = Self::new(default_center_id);
        if let Some(name) = query.get(NAME_QUERY_PARAM).filter(|q| !q.is_empty()) {
            form.name = name.clone();
            form.initial_search = true;
        }
        form
    }

    /// The name to search for as soon as the form loads, if any.
    pub fn initial_search(&self) -> Option<&str> {
        self.initial_search.then_some(self.name.as_str())
    }

    /// Query parameters to publish for a name search.
    pub fn search_by_name(&self) -> Result<(&'static str, String)> {
        if self.name.is_empty() {
            return Err(CoreError::invalid_search("name must not be empty"));
        }
        Ok((NAME_QUERY_PARAM, self.name.clone()))
    }

    /// Identifier to search for from the center and registration number.
    pub fn search_by_id(&self) -> Result<PatientIdentifier> {
        if self.center_id.is_empty() {
            return Err(CoreError::invalid_search("center id must not be empty"));
        }
        if self.registration_number.is_empty() {
            return Err(CoreError::invalid_search(
                "registration number must not be empty",
            ));
        }
        Ok(PatientIdentifier::new(
            self.center_id.clone(),
            self.registration_number.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gan_form() -> SearchForm {
        let mut form = SearchForm::new("GAN");
        form.registration_number = "20001".into();
        form
    }

    #[test]
    fn test_default_center_id() {
        assert_eq!(SearchForm::new("SEM").center_id, "SEM");
    }

    #[test]
    fn test_query_parameter_prefills_name_and_searches() {
        let query = HashMap::from([("q".to_string(), "john".to_string())]);
        let form = SearchForm::from_query("SEM", &query);
        assert_eq!(form.name, "john");
        assert_eq!(form.initial_search(), Some("john"));
    }

    #[test]
    fn test_no_query_parameter_means_no_search() {
        let form = SearchForm::from_query("SEM", &HashMap::new());
        assert_eq!(form.initial_search(), None);
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_empty_query_parameter_means_no_search() {
        let query = HashMap::from([("q".to_string(), String::new())]);
        let form = SearchForm::from_query("SEM", &query);
        assert_eq!(form.initial_search(), None);
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_no_results_found() {
        assert!(!no_results_found::<PatientSummary>(None));
        assert!(no_results_found::<PatientSummary>(Some(&[][..])));
        let results = [PatientSummary { uuid: "x".into() }];
        assert!(!no_results_found(Some(&results[..])));
    }

    #[test]
    fn test_search_by_name_publishes_query() {
        let mut form = SearchForm::new("SEM");
        form.name = "Ram Singh".into();
        assert_eq!(form.search_by_name().unwrap(), ("q", "Ram Singh".to_string()));
    }

    #[test]
    fn test_search_by_name_rejects_empty_name() {
        let err = SearchForm::new("SEM").search_by_name().unwrap_err();
        assert!(matches!(err, CoreError::InvalidSearch(_)));
    }

    #[test]
    fn test_search_by_id_concatenates_center_and_number() {
        let id = gan_form().search_by_id().unwrap();
        assert_eq!(id.to_string(), "GAN20001");
    }

    #[test]
    fn test_search_by_id_requires_registration_number() {
        assert!(SearchForm::new("GAN").search_by_id().is_err());
    }

    #[test]
    fn test_outcome_found_uses_first_result() {
        let response =
            SearchResponse::from_json(r#"{"results": [{"uuid": "8989-90909"}, {"uuid": "other"}]}"#)
                .unwrap();
        let id = gan_form().search_by_id().unwrap();
        assert_eq!(
            SearchOutcome::from_results(&id, &response.results),
            SearchOutcome::Found {
                uuid: "8989-90909".into()
            }
        );
    }

    #[test]
    fn test_outcome_not_found_mentions_identifier() {
        let id = gan_form().search_by_id().unwrap();
        match SearchOutcome::from_results(&id, &[]) {
            SearchOutcome::NotFound { message } => {
                assert!(message.starts_with("Could not "));
                assert!(message.contains("GAN20001"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
