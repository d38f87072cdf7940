//! Plan Generator
//!
//! Turns a [`FinancialProfile`] and its [`FinancialIndicators`] into a
//! [`FinancialPlan`]. Every section is a pure function of the profile, the
//! engine configuration and the guidance library:
//!
//! - **Organization** - avalanche debt payoff order and time to clear
//! - **Emergency reserve** - target size and contribution schedule
//! - **Protection** - life and home insurance recommendations
//! - **Investments** - investor profile, allocation and projection
//! - **Retirement** - target capital and required contribution
//! - **Succession / actions** - static checklists
//!
//! ## Usage
//!
//! ```rust,ignore
//! use finplan_core::{compute_indicators, generate_plan};
//!
//! let indicators = compute_indicators(&profile);
//! let plan = generate_plan(&profile, &indicators);
//! ```

pub mod actions;
pub mod debt;
pub mod investment;
pub mod protection;
pub mod reserve;
pub mod retirement;
pub mod types;

pub use types::{
    ActionHorizon, ActionItem, ActionPlan, AllocationBucket, AssetClass, DebtPayoffPlan,
    EmergencyReservePlan, FinancialOrganization, FinancialPlan, InsuranceKind,
    InsuranceRecommendation, InvestmentPlan, InvestorProfile, PayoffStrategy, ProjectionPoint,
    ProtectionPlan, RetirementPlan, SuccessionGuidance,
};

use tracing::debug;

use crate::config::EngineConfig;
use crate::guidance::GuidanceLibrary;
use crate::indicators::FinancialIndicators;
use crate::models::FinancialProfile;

/// Whole months needed to accumulate `amount` at `per_month`
///
/// Returns 0 when nothing can be set aside each month. Results beyond
/// `u32::MAX` months saturate at `u32::MAX`.
pub fn months_to_cover(amount: f64, per_month: f64) -> u32 {
    if per_month > 0.0 {
        (amount / per_month).ceil() as u32
    } else {
        0
    }
}

/// Build every plan section
pub fn build(
    config: &EngineConfig,
    guidance: &GuidanceLibrary,
    profile: &FinancialProfile,
    indicators: &FinancialIndicators,
) -> FinancialPlan {
    debug!(
        worst = %indicators.worst(),
        surplus = profile.monthly_surplus(),
        "Generating financial plan"
    );

    let investments = investment::investment_plan(&config.investment, guidance, profile);
    let retirement = retirement::retirement_plan(
        &config.retirement,
        guidance,
        profile,
        investments.annual_growth_rate,
    );

    FinancialPlan {
        indicators: indicators.clone(),
        organization: debt::organization(guidance, profile),
        emergency_reserve: reserve::emergency_reserve(&config.reserve, guidance, profile),
        protection: protection::protection(&config.insurance, profile),
        investments,
        retirement,
        succession: actions::succession(guidance),
        actions: actions::action_plan(guidance),
    }
}
