//! Shared utilities for commands
//!
//! - `load_profile` - Read a profile file
//! - `load_engine` - Build the engine from the config override resolution

use std::path::Path;

use anyhow::{Context, Result};
use finplan_core::{Engine, FinancialProfile};

/// Load a JSON or TOML profile file
pub fn load_profile(path: &Path) -> Result<FinancialProfile> {
    FinancialProfile::from_path(path)
        .with_context(|| format!("Failed to load profile from {}", path.display()))
}

/// Build the engine from `--config`, the per-user override, or built-in defaults
pub fn load_engine(config_path: Option<&Path>) -> Result<Engine> {
    Engine::from_config_path(config_path).context("Failed to load engine configuration")
}
