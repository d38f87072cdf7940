//! Retirement target and required contribution

use tracing::debug;

use crate::config::RetirementConfig;
use crate::guidance::GuidanceLibrary;
use crate::models::FinancialProfile;

use super::types::RetirementPlan;

/// Build the retirement plan
///
/// `growth_rate` is the annual rate of the household's investor profile. The
/// required capital assumes a flat income need over the whole horizon, with
/// no discounting.
pub fn retirement_plan(
    config: &RetirementConfig,
    guidance: &GuidanceLibrary,
    profile: &FinancialProfile,
    growth_rate: f64,
) -> RetirementPlan {
    let preferences = profile.retirement_preferences.clone().unwrap_or_default();

    let target_age = preferences.target_age.unwrap_or(config.target_age);
    let years_remaining = target_age.saturating_sub(profile.personal.age);
    let required_monthly_income = preferences
        .desired_monthly_income
        .unwrap_or_else(|| profile.total_monthly_expenses() * config.income_replacement);
    let total_capital_required = required_monthly_income * 12.0 * config.horizon_years as f64;

    let monthly_contribution = if years_remaining > 0 {
        let months = years_remaining as f64 * 12.0;
        total_capital_required / months / (1.0 + growth_rate).powi(years_remaining as i32)
    } else {
        0.0
    };

    debug!(
        target_age,
        years_remaining, required_monthly_income, monthly_contribution, "Built retirement plan"
    );

    RetirementPlan {
        target_age,
        years_remaining,
        required_monthly_income,
        total_capital_required,
        monthly_contribution,
        current_pension_balance: profile.total_pension_balance(),
        current_pension_contribution: profile.total_pension_contribution(),
        strategies: guidance.retirement_strategies.clone(),
    }
}
