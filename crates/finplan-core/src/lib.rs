//! Finplan Core Library
//!
//! Derivation engine for the Finplan household finance tool:
//! - Financial profile model (income, expenses, debts, assets, investments,
//!   insurance, pensions, goals)
//! - Indicator Calculator (debt, liquidity, savings and insurance ratios with
//!   five-level classification)
//! - Plan Generator (avalanche debt payoff, emergency reserve, insurance,
//!   allocation and projection, retirement, succession, action plan)
//! - Engine configuration with file overrides
//! - Guidance library for all static plan text
//!
//! Both entry points are pure: no I/O, no clock, no shared mutable state.

pub mod config;
pub mod engine;
pub mod error;
pub mod guidance;
pub mod indicators;
pub mod models;
pub mod plan;

/// Test utilities including profile builders
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ClassificationMode, Direction, EngineConfig, Indicator};
pub use engine::{compute_indicators, generate_plan, Engine};
pub use error::{Error, Result};
pub use guidance::GuidanceLibrary;
pub use indicators::{Classification, FinancialIndicators, IndicatorReading};
pub use models::FinancialProfile;
pub use plan::{FinancialPlan, InvestorProfile};
