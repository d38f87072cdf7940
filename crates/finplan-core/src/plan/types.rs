//! Output types of the Plan Generator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::indicators::FinancialIndicators;
use crate::models::{Debt, Priority};

/// Risk-tolerance bucket driving the allocation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestorProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl InvestorProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }

    pub fn all() -> &'static [InvestorProfile] {
        &[Self::Conservative, Self::Moderate, Self::Aggressive]
    }
}

impl fmt::Display for InvestorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvestorProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "moderate" => Ok(Self::Moderate),
            "aggressive" => Ok(Self::Aggressive),
            _ => Err(format!("Unknown investor profile: {}", s)),
        }
    }
}

/// Asset classes of the allocation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    FixedIncome,
    VariableIncome,
    Alternative,
}

impl AssetClass {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FixedIncome => "Fixed income",
            Self::VariableIncome => "Variable income",
            Self::Alternative => "Alternative",
        }
    }

    pub fn all() -> &'static [AssetClass] {
        &[Self::FixedIncome, Self::VariableIncome, Self::Alternative]
    }
}

/// Debt payoff ordering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffStrategy {
    /// Highest interest rate first
    Avalanche,
}

impl PayoffStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Avalanche => "avalanche",
        }
    }
}

/// Insurance kinds the engine recommends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceKind {
    Life,
    Home,
}

impl InsuranceKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Life => "Life insurance",
            Self::Home => "Home insurance",
        }
    }
}

/// Time horizons of the action plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionHorizon {
    /// Up to 30 days
    Immediate,
    /// 1 to 3 months
    ShortTerm,
    /// 3 to 12 months
    MediumTerm,
    /// Beyond 12 months
    LongTerm,
}

impl ActionHorizon {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Immediate => "Immediate (up to 30 days)",
            Self::ShortTerm => "Short term (1-3 months)",
            Self::MediumTerm => "Medium term (3-12 months)",
            Self::LongTerm => "Long term (over 12 months)",
        }
    }

    pub fn all() -> &'static [ActionHorizon] {
        &[
            Self::Immediate,
            Self::ShortTerm,
            Self::MediumTerm,
            Self::LongTerm,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffPlan {
    pub strategy: PayoffStrategy,
    /// The input debts in payoff order
    pub order: Vec<Debt>,
    pub total_principal: f64,
    /// Whole months to clear all principal from the monthly surplus
    pub estimated_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialOrganization {
    pub recommendations: Vec<String>,
    pub expense_reduction_strategies: Vec<String>,
    pub debt_payoff: DebtPayoffPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyReservePlan {
    pub target_amount: f64,
    pub monthly_contribution: f64,
    pub months_to_target: u32,
    pub recommended_products: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceRecommendation {
    pub kind: InsuranceKind,
    pub recommended_coverage: f64,
    pub estimated_premium: f64,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectionPlan {
    pub recommendations: Vec<InsuranceRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationBucket {
    pub asset_class: AssetClass,
    pub percent: u32,
    pub examples: Vec<String>,
}

/// Accumulated value after `years`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub years: u32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    pub profile: InvestorProfile,
    pub annual_growth_rate: f64,
    pub allocation: Vec<AllocationBucket>,
    pub projection: Vec<ProjectionPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlan {
    pub target_age: u32,
    pub years_remaining: u32,
    pub required_monthly_income: f64,
    pub total_capital_required: f64,
    pub monthly_contribution: f64,
    /// Sum of accumulated pension balances today
    pub current_pension_balance: f64,
    /// Sum of current monthly pension contributions
    pub current_pension_contribution: f64,
    pub strategies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessionGuidance {
    pub guidelines: Vec<String>,
    pub required_documents: Vec<String>,
    pub strategies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub description: String,
    pub deadline_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub immediate: Vec<ActionItem>,
    pub short_term: Vec<ActionItem>,
    pub medium_term: Vec<ActionItem>,
    pub long_term: Vec<ActionItem>,
}

impl ActionPlan {
    pub fn for_horizon(&self, horizon: ActionHorizon) -> &[ActionItem] {
        match horizon {
            ActionHorizon::Immediate => &self.immediate,
            ActionHorizon::ShortTerm => &self.short_term,
            ActionHorizon::MediumTerm => &self.medium_term,
            ActionHorizon::LongTerm => &self.long_term,
        }
    }
}

/// The complete plan, together with the indicators it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialPlan {
    pub indicators: FinancialIndicators,
    pub organization: FinancialOrganization,
    pub emergency_reserve: EmergencyReservePlan,
    pub protection: ProtectionPlan,
    pub investments: InvestmentPlan,
    pub retirement: RetirementPlan,
    pub succession: SuccessionGuidance,
    pub actions: ActionPlan,
}
