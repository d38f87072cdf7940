//! Finplan CLI - Household financial indicators and planning
//!
//! Usage:
//!   finplan indicators profile.json     Classify financial health indicators
//!   finplan plan profile.json --json    Generate a full financial plan
//!   finplan config show                 Show the effective configuration

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Indicators { profile, json } => {
            let engine = commands::load_engine(config)?;
            commands::cmd_indicators(&engine, &profile, json)
        }
        Commands::Plan { profile, json } => {
            let engine = commands::load_engine(config)?;
            commands::cmd_plan(&engine, &profile, json)
        }
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => commands::cmd_config_show(config),
            Some(ConfigAction::Template) => commands::cmd_config_template(),
            Some(ConfigAction::Path) => commands::cmd_config_path(config),
        },
    }
}
