//! Insurance recommendations
//!
//! A fixed recommendation set: life cover sized from expenses, home cover
//! sized from residential property. Not a rule engine.

use crate::config::InsuranceConfig;
use crate::models::{FinancialProfile, Priority};

use super::types::{InsuranceKind, InsuranceRecommendation, ProtectionPlan};

pub fn protection(config: &InsuranceConfig, profile: &FinancialProfile) -> ProtectionPlan {
    let life_coverage = profile.total_monthly_expenses() * config.life_coverage_months;
    let home_coverage = profile.residential_asset_value();

    ProtectionPlan {
        recommendations: vec![
            InsuranceRecommendation {
                kind: InsuranceKind::Life,
                recommended_coverage: life_coverage,
                estimated_premium: life_coverage * config.life_premium_rate,
                priority: Priority::High,
            },
            InsuranceRecommendation {
                kind: InsuranceKind::Home,
                recommended_coverage: home_coverage,
                estimated_premium: home_coverage * config.home_premium_rate,
                priority: Priority::Medium,
            },
        ],
    }
}
