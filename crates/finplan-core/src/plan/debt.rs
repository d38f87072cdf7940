//! Financial organization and debt payoff (avalanche)

use tracing::debug;

use crate::guidance::GuidanceLibrary;
use crate::models::{Debt, FinancialProfile};

use super::months_to_cover;
use super::types::{DebtPayoffPlan, FinancialOrganization, PayoffStrategy};

/// Order debts highest monthly rate first; equal rates keep input order
pub fn avalanche_order(debts: &[Debt]) -> Vec<Debt> {
    let mut ordered = debts.to_vec();
    // sort_by is stable
    ordered.sort_by(|a, b| b.monthly_interest_rate.total_cmp(&a.monthly_interest_rate));
    ordered
}

pub fn debt_payoff(profile: &FinancialProfile) -> DebtPayoffPlan {
    let total_principal = profile.total_debt_principal();
    let surplus = profile.monthly_surplus();
    let estimated_months = months_to_cover(total_principal, surplus);

    debug!(
        debts = profile.debts.len(),
        total_principal, surplus, estimated_months, "Built avalanche payoff plan"
    );

    DebtPayoffPlan {
        strategy: PayoffStrategy::Avalanche,
        order: avalanche_order(&profile.debts),
        total_principal,
        estimated_months,
    }
}

pub fn organization(guidance: &GuidanceLibrary, profile: &FinancialProfile) -> FinancialOrganization {
    FinancialOrganization {
        recommendations: guidance.organization_recommendations.clone(),
        expense_reduction_strategies: guidance.expense_reduction_strategies.clone(),
        debt_payoff: debt_payoff(profile),
    }
}
