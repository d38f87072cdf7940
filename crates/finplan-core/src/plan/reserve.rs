//! Emergency reserve sizing

use crate::config::ReserveConfig;
use crate::guidance::GuidanceLibrary;
use crate::models::FinancialProfile;

use super::months_to_cover;
use super::types::EmergencyReservePlan;

pub fn emergency_reserve(
    config: &ReserveConfig,
    guidance: &GuidanceLibrary,
    profile: &FinancialProfile,
) -> EmergencyReservePlan {
    let target_amount = profile.total_monthly_expenses() * config.months_of_expenses;
    let monthly_contribution = (profile.monthly_surplus() * config.surplus_share).max(0.0);

    EmergencyReservePlan {
        target_amount,
        monthly_contribution,
        months_to_target: months_to_cover(target_amount, monthly_contribution),
        recommended_products: guidance.reserve_products.clone(),
    }
}
