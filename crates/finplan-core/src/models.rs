//! Domain models for Finplan
//!
//! The [`FinancialProfile`] is the single input to the engine. It is a plain
//! value: callers assemble it (from forms, files, or code), and every engine
//! call reads it without modification. Identifiers are assigned by the caller.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Personal details of the household's reference person
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub age: u32,
    pub dependents: u32,
    pub marital_status: String,
    pub occupation: String,
    pub region: String,
}

/// A recurring monthly income source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Monthly amount
    pub amount: f64,
}

/// Whether an expense is fixed (rent, tuition) or variable (groceries, leisure)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    #[default]
    Fixed,
    Variable,
}

impl ExpenseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Variable => "variable",
        }
    }
}

impl std::str::FromStr for ExpenseKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "variable" => Ok(Self::Variable),
            _ => Err(format!("Unknown expense kind: {}", s)),
        }
    }
}

impl std::fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A monthly expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Monthly amount
    pub amount: f64,
    #[serde(default)]
    pub kind: ExpenseKind,
}

/// An outstanding debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    /// Free-form kind (mortgage, credit card, personal loan, ...)
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    /// Outstanding principal
    pub principal: f64,
    /// Monthly interest rate as a fraction (0.02 = 2% a month)
    pub monthly_interest_rate: f64,
    /// Remaining installments
    #[serde(default)]
    pub remaining_months: u32,
    /// Monthly installment amount
    #[serde(default)]
    pub installment: f64,
}

/// Category of an owned asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    /// The household's own home; counts toward home-insurance coverage
    Residential,
    /// Other property (land, rental, commercial)
    RealEstate,
    Vehicle,
    Business,
    Valuables,
    #[default]
    Other,
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::RealEstate => "real_estate",
            Self::Vehicle => "vehicle",
            Self::Business => "business",
            Self::Valuables => "valuables",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for AssetCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "residential" | "home" => Ok(Self::Residential),
            "real_estate" | "realestate" => Ok(Self::RealEstate),
            "vehicle" => Ok(Self::Vehicle),
            "business" => Ok(Self::Business),
            "valuables" => Ok(Self::Valuables),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown asset category: {}", s)),
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An owned asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub category: AssetCategory,
    #[serde(default)]
    pub description: String,
    pub value: f64,
    /// Still being paid off
    #[serde(default)]
    pub financed: bool,
}

/// An investment position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub institution: String,
    pub value: f64,
    /// Expected annual return as a fraction
    #[serde(default)]
    pub expected_annual_return: f64,
}

/// How often an insurance premium is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumCadence {
    #[default]
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl PremiumCadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Semiannual => "semiannual",
            Self::Annual => "annual",
        }
    }
}

/// An existing insurance policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub id: String,
    /// Free-form kind (life, home, auto, health, ...)
    #[serde(default)]
    pub kind: String,
    pub coverage: f64,
    #[serde(default)]
    pub premium: f64,
    #[serde(default)]
    pub cadence: PremiumCadence,
}

/// A private pension plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionPlan {
    pub id: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub monthly_contribution: f64,
    #[serde(default)]
    pub accumulated_balance: f64,
}

/// Priority level, shared by goals and recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Horizon bucket of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalHorizon {
    Short,
    #[default]
    Medium,
    Long,
}

/// A financial goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub target_amount: f64,
    #[serde(default)]
    pub term_months: u32,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub horizon: GoalHorizon,
}

/// Optional retirement preferences; absent fields fall back to engine defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetirementPreferences {
    pub target_age: Option<u32>,
    pub desired_monthly_income: Option<f64>,
}

/// Everything the engine knows about a household
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialProfile {
    pub personal: PersonalInfo,
    pub income_sources: Vec<IncomeSource>,
    pub expenses: Vec<Expense>,
    pub debts: Vec<Debt>,
    pub assets: Vec<Asset>,
    pub investments: Vec<Investment>,
    pub insurance_policies: Vec<InsurancePolicy>,
    pub pension_plans: Vec<PensionPlan>,
    pub goals: Vec<Goal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retirement_preferences: Option<RetirementPreferences>,
}

impl FinancialProfile {
    /// Parse a profile from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a profile from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a profile file, picking the parser from the extension (`.json`, `.toml`)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self> = match extension.as_str() {
            "json" => Self::from_json_str,
            "toml" => Self::from_toml_str,
            other => {
                return Err(Error::UnsupportedFormat(format!(
                    "'{}' (expected .json or .toml)",
                    other
                )))
            }
        };

        debug!(path = %path.display(), format = %extension, "Loading financial profile");
        let content = fs::read_to_string(path)?;
        parse(&content)
    }

    pub fn total_monthly_income(&self) -> f64 {
        self.income_sources.iter().map(|i| i.amount).sum()
    }

    pub fn total_monthly_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Income minus expenses; negative when the household overspends
    pub fn monthly_surplus(&self) -> f64 {
        self.total_monthly_income() - self.total_monthly_expenses()
    }

    pub fn total_debt_principal(&self) -> f64 {
        self.debts.iter().map(|d| d.principal).sum()
    }

    pub fn total_asset_value(&self) -> f64 {
        self.assets.iter().map(|a| a.value).sum()
    }

    pub fn total_investment_value(&self) -> f64 {
        self.investments.iter().map(|i| i.value).sum()
    }

    pub fn total_insurance_coverage(&self) -> f64 {
        self.insurance_policies.iter().map(|p| p.coverage).sum()
    }

    /// Value of the household's own residences
    pub fn residential_asset_value(&self) -> f64 {
        self.assets
            .iter()
            .filter(|a| a.category == AssetCategory::Residential)
            .map(|a| a.value)
            .sum()
    }

    pub fn total_pension_balance(&self) -> f64 {
        self.pension_plans.iter().map(|p| p.accumulated_balance).sum()
    }

    pub fn total_pension_contribution(&self) -> f64 {
        self.pension_plans.iter().map(|p| p.monthly_contribution).sum()
    }
}
