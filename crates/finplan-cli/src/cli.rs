//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Finplan - Household financial indicators and plans
#[derive(Parser)]
#[command(name = "finplan")]
#[command(about = "Household financial health indicators and planning", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Engine config override (defaults to the per-user config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute and classify financial indicators for a profile
    Indicators {
        /// Profile file (.json or .toml)
        profile: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Generate a full financial plan for a profile
    Plan {
        /// Profile file (.json or .toml)
        profile: PathBuf,

        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Inspect engine configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the commented default config file
    Template,

    /// Show the path where a config override should be placed
    Path,
}
