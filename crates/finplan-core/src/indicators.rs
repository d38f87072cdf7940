//! Indicator Calculator
//!
//! Aggregates a [`FinancialProfile`] into four health ratios and classifies
//! each on a five-level scale:
//!
//! | Indicator          | Formula                                           |
//! |--------------------|---------------------------------------------------|
//! | Debt ratio         | debt principal / (monthly income × 12)            |
//! | Liquidity ratio    | investment value / (monthly expenses × 6)         |
//! | Savings rate       | (income − expenses) / income                      |
//! | Insurance coverage | insured coverage / (asset value + investments)    |
//!
//! Every division is zero-safe: a zero denominator yields a ratio of 0.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Direction, Indicator, IndicatorThresholds};
use crate::models::FinancialProfile;

/// Months of expenses the liquidity ratio measures against
const LIQUIDITY_BUFFER_MONTHS: f64 = 6.0;

/// Qualitative label of an indicator, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Excellent,
    Good,
    Regular,
    Attention,
    Critical,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Regular => "regular",
            Self::Attention => "attention",
            Self::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Regular => "Regular",
            Self::Attention => "Attention",
            Self::Critical => "Critical",
        }
    }

    /// Labels in threshold order (t0 maps to the first)
    pub fn all() -> &'static [Classification] {
        &[
            Self::Excellent,
            Self::Good,
            Self::Regular,
            Self::Attention,
            Self::Critical,
        ]
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "regular" => Ok(Self::Regular),
            "attention" => Ok(Self::Attention),
            "critical" => Ok(Self::Critical),
            _ => Err(format!("Unknown classification: {}", s)),
        }
    }
}

/// A ratio and its classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub value: f64,
    pub classification: Classification,
}

/// The four health indicators of a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialIndicators {
    pub debt_ratio: IndicatorReading,
    pub liquidity_ratio: IndicatorReading,
    pub savings_rate: IndicatorReading,
    pub insurance_coverage: IndicatorReading,
}

impl FinancialIndicators {
    pub fn get(&self, indicator: Indicator) -> &IndicatorReading {
        match indicator {
            Indicator::DebtRatio => &self.debt_ratio,
            Indicator::LiquidityRatio => &self.liquidity_ratio,
            Indicator::SavingsRate => &self.savings_rate,
            Indicator::InsuranceCoverage => &self.insurance_coverage,
        }
    }

    /// Worst classification across all indicators
    pub fn worst(&self) -> Classification {
        Indicator::all()
            .iter()
            .map(|i| self.get(*i).classification)
            .max()
            .unwrap_or(Classification::Excellent)
    }
}

/// Divide, returning 0 when the denominator is not positive
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Map a value through ascending thresholds `[t0, t1, t2, t3]`
///
/// Non-finite values never satisfy a comparison and land on Critical.
pub fn classify(value: f64, limits: &[f64; 4], direction: Direction) -> Classification {
    let levels = Classification::all();
    for (limit, level) in limits.iter().zip(levels) {
        let within = match direction {
            Direction::LowerIsBetter => value <= *limit,
            Direction::HigherIsBetter => value >= *limit,
        };
        if within {
            return *level;
        }
    }
    Classification::Critical
}

/// Compute and classify all indicators
pub fn compute(thresholds: &IndicatorThresholds, profile: &FinancialProfile) -> FinancialIndicators {
    let income = profile.total_monthly_income();
    let expenses = profile.total_monthly_expenses();
    let investments = profile.total_investment_value();
    let net_worth = profile.total_asset_value() + investments;

    debug!(
        income,
        expenses,
        debt = profile.total_debt_principal(),
        investments,
        net_worth,
        "Aggregated profile for indicators"
    );

    let debt_ratio = ratio(profile.total_debt_principal(), income * 12.0);
    let liquidity_ratio = ratio(investments, expenses * LIQUIDITY_BUFFER_MONTHS);
    let savings_rate = ratio(income - expenses, income);
    let insurance_coverage = ratio(profile.total_insurance_coverage(), net_worth);

    let reading = |indicator: Indicator, value: f64| IndicatorReading {
        value,
        classification: classify(
            value,
            thresholds.for_indicator(indicator),
            thresholds.direction_for(indicator),
        ),
    };

    let indicators = FinancialIndicators {
        debt_ratio: reading(Indicator::DebtRatio, debt_ratio),
        liquidity_ratio: reading(Indicator::LiquidityRatio, liquidity_ratio),
        savings_rate: reading(Indicator::SavingsRate, savings_rate),
        insurance_coverage: reading(Indicator::InsuranceCoverage, insurance_coverage),
    };

    debug!(
        mode = thresholds.mode.as_str(),
        debt = %indicators.debt_ratio.classification,
        liquidity = %indicators.liquidity_ratio.classification,
        savings = %indicators.savings_rate.classification,
        insurance = %indicators.insurance_coverage.classification,
        "Classified indicators"
    );

    indicators
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassificationMode;
    use crate::test_utils::ProfileBuilder;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_classify_lower_is_better() {
        let limits = [0.30, 0.50, 0.70, 0.90];
        let dir = Direction::LowerIsBetter;
        assert_eq!(classify(0.0, &limits, dir), Classification::Excellent);
        assert_eq!(classify(0.30, &limits, dir), Classification::Excellent);
        assert_eq!(classify(0.31, &limits, dir), Classification::Good);
        assert_eq!(classify(0.70, &limits, dir), Classification::Regular);
        assert_eq!(classify(0.85, &limits, dir), Classification::Attention);
        assert_eq!(classify(2.0, &limits, dir), Classification::Critical);
    }

    #[test]
    fn test_classify_higher_is_better() {
        let limits = [0.30, 0.20, 0.10, 0.05];
        let dir = Direction::HigherIsBetter;
        assert_eq!(classify(0.45, &limits, dir), Classification::Excellent);
        assert_eq!(classify(0.20, &limits, dir), Classification::Good);
        assert_eq!(classify(0.15, &limits, dir), Classification::Regular);
        assert_eq!(classify(0.05, &limits, dir), Classification::Attention);
        assert_eq!(classify(0.0, &limits, dir), Classification::Critical);
        assert_eq!(classify(-0.2, &limits, dir), Classification::Critical);
    }

    #[test]
    fn test_classify_nan_is_critical() {
        let limits = [0.30, 0.50, 0.70, 0.90];
        assert_eq!(
            classify(f64::NAN, &limits, Direction::LowerIsBetter),
            Classification::Critical
        );
        assert_eq!(
            classify(f64::NAN, &limits, Direction::HigherIsBetter),
            Classification::Critical
        );
    }

    #[test]
    fn test_ratio_guards_zero_denominator() {
        assert_eq!(ratio(100.0, 0.0), 0.0);
        assert_eq!(ratio(0.0, 0.0), 0.0);
        assert_eq!(ratio(50.0, 200.0), 0.25);
    }

    #[test]
    fn test_zero_income_zeroes_debt_and_savings() {
        let profile = ProfileBuilder::new()
            .expense(1500.0)
            .debt(20_000.0, 0.03)
            .build();

        let indicators = compute(&IndicatorThresholds::default(), &profile);
        assert_eq!(indicators.debt_ratio.value, 0.0);
        assert_eq!(indicators.savings_rate.value, 0.0);
    }

    #[test]
    fn test_zero_expenses_zeroes_liquidity() {
        let profile = ProfileBuilder::new()
            .income(4000.0)
            .investment(50_000.0)
            .build();

        let indicators = compute(&IndicatorThresholds::default(), &profile);
        assert_eq!(indicators.liquidity_ratio.value, 0.0);
    }

    #[test]
    fn test_basic_scenario() {
        let profile = ProfileBuilder::new().income(3000.0).expense(2000.0).build();

        let indicators = compute(&IndicatorThresholds::default(), &profile);
        assert_eq!(indicators.debt_ratio.value, 0.0);
        assert!((indicators.savings_rate.value - 1.0 / 3.0).abs() < EPS);
        assert_eq!(indicators.liquidity_ratio.value, 0.0);
        assert_eq!(indicators.insurance_coverage.value, 0.0);
    }

    #[test]
    fn test_all_ratios() {
        let profile = ProfileBuilder::new()
            .income(10_000.0)
            .expense(5_000.0)
            .debt(60_000.0, 0.01)
            .investment(45_000.0)
            .residence(255_000.0)
            .insurance(150_000.0)
            .build();

        let indicators = compute(&IndicatorThresholds::default(), &profile);
        assert!((indicators.debt_ratio.value - 0.5).abs() < EPS);
        assert!((indicators.liquidity_ratio.value - 1.5).abs() < EPS);
        assert!((indicators.savings_rate.value - 0.5).abs() < EPS);
        assert!((indicators.insurance_coverage.value - 0.5).abs() < EPS);

        assert_eq!(indicators.debt_ratio.classification, Classification::Good);
        assert_eq!(
            indicators.liquidity_ratio.classification,
            Classification::Excellent
        );
        assert_eq!(
            indicators.savings_rate.classification,
            Classification::Excellent
        );
        assert_eq!(
            indicators.insurance_coverage.classification,
            Classification::Regular
        );
        assert_eq!(indicators.worst(), Classification::Regular);
    }

    #[test]
    fn test_legacy_mode_inverts_savings_rate() {
        let profile = ProfileBuilder::new().income(10_000.0).expense(5_000.0).build();

        let corrected = compute(&IndicatorThresholds::default(), &profile);
        let legacy = compute(
            &IndicatorThresholds {
                mode: ClassificationMode::Legacy,
                ..Default::default()
            },
            &profile,
        );

        assert_eq!(corrected.savings_rate.value, legacy.savings_rate.value);
        assert_eq!(
            corrected.savings_rate.classification,
            Classification::Excellent
        );
        assert_eq!(legacy.savings_rate.classification, Classification::Critical);
        // Debt ratio is lower-is-better in both modes
        assert_eq!(
            corrected.debt_ratio.classification,
            legacy.debt_ratio.classification
        );
    }

    #[test]
    fn test_classification_parsing() {
        assert_eq!(
            Classification::from_str("Attention").unwrap(),
            Classification::Attention
        );
        assert!(Classification::from_str("fine").is_err());
        assert!(Classification::Critical > Classification::Excellent);
    }
}
