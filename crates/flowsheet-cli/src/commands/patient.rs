use std::fs;

use anyhow::{Context, Result};
use flowsheet_core::{PatientIdentifier, SearchForm, SearchOutcome, SearchResponse};
use tracing::info;

use crate::cli::{OutputFormat, PatientIdArgs};
use crate::config::AppConfig;
use crate::output;

/// Result of the `patient-id` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientLookup {
    /// No search response given; only the composed identifier.
    Identifier(PatientIdentifier),
    Outcome(SearchOutcome),
}

pub fn run(config: &AppConfig, args: &PatientIdArgs, format: OutputFormat) -> Result<()> {
    match resolve(config, args)? {
        PatientLookup::Identifier(identifier) => {
            println!("{identifier}");
            Ok(())
        }
        PatientLookup::Outcome(outcome) => output::print_outcome(&outcome, format),
    }
}

/// Compose the identifier from `--center` (or the configured default
/// center) and `--registration`, then classify `--results` if given.
pub fn resolve(config: &AppConfig, args: &PatientIdArgs) -> Result<PatientLookup> {
    let mut form = SearchForm::new(
        args.center
            .clone()
            .unwrap_or_else(|| config.registration.default_center_id.clone()),
    );
    form.registration_number = args.registration.clone();
    let identifier = form.search_by_id()?;
    info!(%identifier, "composed patient identifier");

    let Some(path) = &args.results else {
        return Ok(PatientLookup::Identifier(identifier));
    };

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read results file {path}"))?;
    let response = SearchResponse::from_json(&content)
        .with_context(|| format!("Failed to parse search response from {path}"))?;
    Ok(PatientLookup::Outcome(SearchOutcome::from_results(
        &identifier,
        &response.results,
    )))
}
