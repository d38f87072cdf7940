//! Investor profiling, target allocation and accumulation projection
//!
//! ## Projection formula
//!
//! Each point is `surplus × 12 × years × (1 + growth_rate)`: a yearly savings
//! total scaled linearly by elapsed years and a single growth factor. This is
//! not compound interest and understates long horizons considerably. The
//! formula is kept as-is so projections stay comparable with earlier reports.

use tracing::debug;

use crate::config::InvestmentConfig;
use crate::guidance::GuidanceLibrary;
use crate::models::FinancialProfile;

use super::types::{AllocationBucket, AssetClass, InvestmentPlan, InvestorProfile, ProjectionPoint};

/// Bucket an age into a risk profile
pub fn investor_profile(config: &InvestmentConfig, age: u32) -> InvestorProfile {
    if age > config.conservative_after_age {
        InvestorProfile::Conservative
    } else if age > config.moderate_after_age {
        InvestorProfile::Moderate
    } else {
        InvestorProfile::Aggressive
    }
}

pub fn allocation(
    config: &InvestmentConfig,
    guidance: &GuidanceLibrary,
    profile: InvestorProfile,
) -> Vec<AllocationBucket> {
    let table = config.allocation_for(profile);
    let examples = guidance.instruments_for(profile);

    AssetClass::all()
        .iter()
        .map(|class| AllocationBucket {
            asset_class: *class,
            percent: match class {
                AssetClass::FixedIncome => table.fixed_income,
                AssetClass::VariableIncome => table.variable_income,
                AssetClass::Alternative => table.alternative,
            },
            examples: examples.for_class(*class).to_vec(),
        })
        .collect()
}

/// Linear accumulation projection (see module docs)
pub fn projection(config: &InvestmentConfig, surplus: f64, growth_rate: f64) -> Vec<ProjectionPoint> {
    (1..=config.projection_points)
        .map(|i| {
            let years = i * config.projection_step_years;
            ProjectionPoint {
                years,
                value: surplus * 12.0 * years as f64 * (1.0 + growth_rate),
            }
        })
        .collect()
}

pub fn investment_plan(
    config: &InvestmentConfig,
    guidance: &GuidanceLibrary,
    profile: &FinancialProfile,
) -> InvestmentPlan {
    let investor = investor_profile(config, profile.personal.age);
    let growth_rate = config.allocation_for(investor).growth_rate;

    debug!(
        age = profile.personal.age,
        profile = %investor,
        growth_rate,
        "Selected investor profile"
    );

    InvestmentPlan {
        profile: investor,
        annual_growth_rate: growth_rate,
        allocation: allocation(config, guidance, investor),
        projection: projection(config, profile.monthly_surplus(), growth_rate),
    }
}
