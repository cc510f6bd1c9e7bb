use anyhow::Result;
use clap::Parser;

use flowsheet_cli::cli::{Cli, Commands, ConfigCommands};
use flowsheet_cli::config::loader::load_config;
use flowsheet_cli::output::print_error;
use flowsheet_cli::{commands, observability};

fn main() {
    if let Err(e) = run() {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.format.unwrap_or_default();

    let config = load_config(cli.config.as_deref())?;
    observability::init_tracing_with_level(&config.logging.level);

    match &cli.command {
        Commands::Header(args) => {
            commands::header::run(&config, args, format)?;
        }
        Commands::PatientId(args) => {
            commands::patient::run(&config, args, format)?;
        }
        Commands::Config(args) => match &args.command {
            ConfigCommands::Show => {
                println!("{}", toml::to_string_pretty(&config)?);
            }
        },
    }

    Ok(())
}
