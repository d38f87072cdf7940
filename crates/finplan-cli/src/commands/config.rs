//! Config inspection commands

use std::path::Path;

use anyhow::{Context, Result};
use finplan_core::config::{default_config_path, DEFAULT_CONFIG};

use super::load_engine;

/// Show the effective engine configuration as TOML
pub fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let engine = load_engine(config_path)?;
    let rendered =
        toml::to_string_pretty(engine.config()).context("Failed to render configuration")?;

    println!("# Effective configuration");
    match resolved_path(config_path) {
        Some(path) if path.exists() => println!("# Override: {}", path.display()),
        _ => println!("# Override: none (built-in defaults)"),
    }
    println!();
    println!("{}", rendered);
    Ok(())
}

/// Print the commented default config
pub fn cmd_config_template() -> Result<()> {
    print!("{}", DEFAULT_CONFIG);
    Ok(())
}

/// Show the path where a config override should be placed
pub fn cmd_config_path(config_path: Option<&Path>) -> Result<()> {
    match resolved_path(config_path) {
        Some(path) => {
            println!("{}", path.display());

            if !path.exists() {
                eprintln!();
                eprintln!("Note: This file does not exist yet.");
                eprintln!("Create it with: finplan config template > {}", path.display());
            }
        }
        None => {
            eprintln!("Could not determine config directory.");
            eprintln!("The data directory is not available on this system.");
        }
    }

    Ok(())
}

fn resolved_path(config_path: Option<&Path>) -> Option<std::path::PathBuf> {
    config_path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
}
