use std::fs;

use anyhow::{Context, Result};
use flowsheet_core::{Concept, FlowSheetSection, HeaderLabel};
use tracing::{debug, info};

use crate::cli::{HeaderArgs, OutputFormat};
use crate::config::AppConfig;
use crate::output;

pub fn run(config: &AppConfig, args: &HeaderArgs, format: OutputFormat) -> Result<()> {
    let labels = resolve(config, args)?;
    output::print_header_labels(&labels, format)
}

/// Resolve header labels for the concepts in `args.file`.
///
/// The heading concept source is taken from `--source`, then from the
/// `--section` file, then from configuration.
pub fn resolve(config: &AppConfig, args: &HeaderArgs) -> Result<Vec<HeaderLabel>> {
    let concepts = read_concepts(&args.file)?;

    let mut section = match &args.section {
        Some(path) => read_section(path)?,
        None => FlowSheetSection::default(),
    };
    if args.section.is_none() || args.source.is_some() {
        section.heading_concept_source = config
            .heading_concept_source(args.source.as_deref())
            .map(str::to_string);
    } else if section.heading_concept_source().is_none() {
        section.heading_concept_source = config.display.heading_concept_source.clone();
    }

    info!(
        concepts = concepts.len(),
        heading_concept_source = section.heading_concept_source().unwrap_or("-"),
        "resolving header labels"
    );
    Ok(section.header_labels(&concepts))
}

fn read_concepts(path: &str) -> Result<Vec<Concept>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read concept file {path}"))?;
    let concepts = Concept::list_from_json(&content)
        .with_context(|| format!("Failed to parse concepts from {path}"))?;
    debug!(path, count = concepts.len(), "loaded concepts");
    Ok(concepts)
}

fn read_section(path: &str) -> Result<FlowSheetSection> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read section file {path}"))?;
    FlowSheetSection::from_json(&content)
        .with_context(|| format!("Failed to parse section from {path}"))
}
