//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (load_profile, load_engine)
//! - `config` - Config inspection commands (show, template, path)
//! - `report` - Indicator and plan reports

pub mod config;
pub mod core;
pub mod report;

// Re-export command functions for main.rs
pub use config::*;
pub use core::*;
pub use report::*;

/// Format an amount with two decimals and thousands separators
pub fn money(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Format a ratio as a percentage with one decimal
pub fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
