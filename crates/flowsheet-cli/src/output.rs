use crate::cli::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use flowsheet_core::{HeaderLabel, SearchOutcome};
use tabled::builder::Builder;
use tabled::settings::Style;

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn print_header_labels(labels: &[HeaderLabel], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(labels)?);
        }
        OutputFormat::Table => {
            if labels.is_empty() {
                println!("No concepts found.");
                return Ok(());
            }
            println!("{}", header_table(labels));
        }
    }
    Ok(())
}

fn header_table(labels: &[HeaderLabel]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["UUID", "Header", "From"]);
    for label in labels {
        let source = label.source.to_string();
        builder.push_record([label.uuid.as_str(), label.label.as_str(), source.as_str()]);
    }
    builder.build().with(Style::rounded()).to_string()
}

pub fn print_outcome(outcome: &SearchOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(outcome)?);
        }
        OutputFormat::Table => match outcome {
            SearchOutcome::Found { uuid } => print_success(&format!("Found patient {uuid}")),
            SearchOutcome::NotFound { message } => println!("{} {}", "!".yellow(), message),
        },
    }
    Ok(())
}
