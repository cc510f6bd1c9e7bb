use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "flowsheet")]
#[command(about = "Flow-sheet header labels and patient lookup helpers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (defaults to ./flowsheet.toml)
    #[arg(short, long, global = true, env = "FLOWSHEET_CONFIG")]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve header labels for one concept or an array of concepts
    Header(HeaderArgs),
    /// Compose a patient identifier and classify a search response
    PatientId(PatientIdArgs),
    /// Inspect the effective configuration
    Config(ConfigArgs),
}

#[derive(clap::Args)]
pub struct HeaderArgs {
    /// Path to a JSON file with a concept or an array of concepts
    pub file: String,
    /// Heading concept source (overrides configuration)
    #[arg(long)]
    pub source: Option<String>,
    /// Path to a JSON flow-sheet section; its heading concept source is used
    /// unless --source is given
    #[arg(long, conflicts_with = "source")]
    pub section: Option<String>,
}

#[derive(clap::Args)]
pub struct PatientIdArgs {
    /// Registration center (defaults to registration.default_center_id)
    #[arg(long)]
    pub center: Option<String>,
    /// Registration number
    #[arg(long)]
    pub registration: String,
    /// Path to a JSON search response ({"results": [...]})
    #[arg(long)]
    pub results: Option<String>,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show effective config
    Show,
}
