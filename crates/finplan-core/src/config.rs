//! Engine configuration
//!
//! Every numeric parameter the engine uses (classification thresholds, reserve
//! size, insurance multipliers, allocation tables, retirement assumptions)
//! lives here so the derivation code carries no magic numbers.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, else the per-user override
//!    (~/.local/share/finplan/config.toml)
//! 2. Fall back to built-in defaults
//!
//! Override files may set any subset of keys. The commented template in
//! `config/finplan.toml` is compiled into the binary and parses to exactly
//! [`EngineConfig::default()`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::plan::{AssetClass, InvestorProfile};

/// Longest projection step accepted from config
pub const MAX_PROJECTION_STEP_YEARS: u32 = 100;

/// Most projection points accepted from config
pub const MAX_PROJECTION_POINTS: u32 = 100;

/// Embedded config template (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../../config/finplan.toml");

/// The four health indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    DebtRatio,
    LiquidityRatio,
    SavingsRate,
    InsuranceCoverage,
}

impl Indicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DebtRatio => "debt_ratio",
            Self::LiquidityRatio => "liquidity_ratio",
            Self::SavingsRate => "savings_rate",
            Self::InsuranceCoverage => "insurance_coverage",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Self::DebtRatio => "Debt ratio",
            Self::LiquidityRatio => "Liquidity ratio",
            Self::SavingsRate => "Savings rate",
            Self::InsuranceCoverage => "Insurance coverage",
        }
    }

    /// Which way is healthy for this metric
    pub fn direction(&self) -> Direction {
        match self {
            Self::DebtRatio => Direction::LowerIsBetter,
            Self::LiquidityRatio | Self::SavingsRate | Self::InsuranceCoverage => {
                Direction::HigherIsBetter
            }
        }
    }

    pub fn all() -> &'static [Indicator] {
        &[
            Self::DebtRatio,
            Self::LiquidityRatio,
            Self::SavingsRate,
            Self::InsuranceCoverage,
        ]
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comparison direction used when mapping a ratio onto thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `value <= t0` is Excellent
    LowerIsBetter,
    /// `value >= t0` is Excellent
    HigherIsBetter,
}

/// How indicators are classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    /// Each indicator uses its own [`Direction`]
    #[default]
    Corrected,
    /// Every indicator uses `LowerIsBetter`, reproducing historical outputs
    /// where a high savings rate or liquidity is reported as Critical
    Legacy,
}

impl ClassificationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corrected => "corrected",
            Self::Legacy => "legacy",
        }
    }
}

impl std::str::FromStr for ClassificationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "corrected" => Ok(Self::Corrected),
            "legacy" => Ok(Self::Legacy),
            _ => Err(format!("Unknown classification mode: {}", s)),
        }
    }
}

/// Threshold sets `[t0, t1, t2, t3]` per indicator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorThresholds {
    #[serde(rename = "classification_mode")]
    pub mode: ClassificationMode,
    pub debt_ratio: [f64; 4],
    pub liquidity_ratio: [f64; 4],
    pub savings_rate: [f64; 4],
    pub insurance_coverage: [f64; 4],
}

impl IndicatorThresholds {
    pub fn for_indicator(&self, indicator: Indicator) -> &[f64; 4] {
        match indicator {
            Indicator::DebtRatio => &self.debt_ratio,
            Indicator::LiquidityRatio => &self.liquidity_ratio,
            Indicator::SavingsRate => &self.savings_rate,
            Indicator::InsuranceCoverage => &self.insurance_coverage,
        }
    }

    /// Direction actually applied to an indicator under the current mode
    pub fn direction_for(&self, indicator: Indicator) -> Direction {
        match self.mode {
            ClassificationMode::Corrected => indicator.direction(),
            ClassificationMode::Legacy => Direction::LowerIsBetter,
        }
    }
}

impl Default for IndicatorThresholds {
    fn default() -> Self {
        Self {
            mode: ClassificationMode::Corrected,
            debt_ratio: [0.30, 0.50, 0.70, 0.90],
            liquidity_ratio: [1.50, 1.00, 0.50, 0.25],
            savings_rate: [0.30, 0.20, 0.10, 0.05],
            insurance_coverage: [1.50, 1.00, 0.50, 0.25],
        }
    }
}

/// Emergency reserve sizing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReserveConfig {
    /// Reserve target in months of expenses
    pub months_of_expenses: f64,
    /// Share of the monthly surplus directed to the reserve
    pub surplus_share: f64,
}

impl Default for ReserveConfig {
    fn default() -> Self {
        Self {
            months_of_expenses: 6.0,
            surplus_share: 0.5,
        }
    }
}

/// Insurance recommendation multipliers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsuranceConfig {
    /// Life cover in months of expenses
    pub life_coverage_months: f64,
    /// Estimated premium as a fraction of life cover
    pub life_premium_rate: f64,
    /// Estimated premium as a fraction of residential value
    pub home_premium_rate: f64,
}

impl Default for InsuranceConfig {
    fn default() -> Self {
        Self {
            life_coverage_months: 60.0,
            life_premium_rate: 0.002,
            home_premium_rate: 0.001,
        }
    }
}

/// Target allocation and expected growth for one investor profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileAllocation {
    pub fixed_income: u32,
    pub variable_income: u32,
    pub alternative: u32,
    /// Annual growth rate used by the projection and retirement plan
    pub growth_rate: f64,
}

impl ProfileAllocation {
    /// Sum of the three buckets, widened so oversized entries cannot wrap
    pub fn total_percent(&self) -> u64 {
        [self.fixed_income, self.variable_income, self.alternative]
            .iter()
            .map(|p| u64::from(*p))
            .sum()
    }

    fn buckets(&self) -> [(AssetClass, u32); 3] {
        [
            (AssetClass::FixedIncome, self.fixed_income),
            (AssetClass::VariableIncome, self.variable_income),
            (AssetClass::Alternative, self.alternative),
        ]
    }
}

/// Investor profiling, allocation tables and projection shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentConfig {
    /// Ages strictly above this are at least moderate
    pub moderate_after_age: u32,
    /// Ages strictly above this are conservative
    pub conservative_after_age: u32,
    pub projection_step_years: u32,
    pub projection_points: u32,
    pub conservative: ProfileAllocation,
    pub moderate: ProfileAllocation,
    pub aggressive: ProfileAllocation,
}

impl InvestmentConfig {
    pub fn allocation_for(&self, profile: InvestorProfile) -> &ProfileAllocation {
        match profile {
            InvestorProfile::Conservative => &self.conservative,
            InvestorProfile::Moderate => &self.moderate,
            InvestorProfile::Aggressive => &self.aggressive,
        }
    }
}

impl Default for InvestmentConfig {
    fn default() -> Self {
        Self {
            moderate_after_age: 35,
            conservative_after_age: 55,
            projection_step_years: 5,
            projection_points: 10,
            conservative: ProfileAllocation {
                fixed_income: 70,
                variable_income: 20,
                alternative: 10,
                growth_rate: 0.06,
            },
            moderate: ProfileAllocation {
                fixed_income: 50,
                variable_income: 40,
                alternative: 10,
                growth_rate: 0.08,
            },
            aggressive: ProfileAllocation {
                fixed_income: 30,
                variable_income: 60,
                alternative: 10,
                growth_rate: 0.10,
            },
        }
    }
}

/// Retirement assumptions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetirementConfig {
    pub target_age: u32,
    /// Fraction of current expenses needed as retirement income
    pub income_replacement: f64,
    /// Years the retirement capital has to last
    pub horizon_years: u32,
}

impl Default for RetirementConfig {
    fn default() -> Self {
        Self {
            target_age: 65,
            income_replacement: 0.8,
            horizon_years: 30,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EngineConfig {
    pub indicators: IndicatorThresholds,
    pub reserve: ReserveConfig,
    pub insurance: InsuranceConfig,
    pub investment: InvestmentConfig,
    pub retirement: RetirementConfig,
}

impl EngineConfig {
    /// Parse a config file body, applying its keys over the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = parse_config(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load using the two-layer resolution (override file, then defaults)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        match read_config_source(override_path)? {
            Some(content) => Self::from_toml_str(&content),
            None => Ok(Self::default()),
        }
    }

    /// Check the invariants the engine relies on
    pub fn validate(&self) -> Result<()> {
        for indicator in Indicator::all() {
            let limits = self.indicators.for_indicator(*indicator);
            if limits.iter().any(|t| !t.is_finite()) {
                return Err(Error::Config(format!(
                    "thresholds for {} must be finite",
                    indicator
                )));
            }
        }

        let investment = &self.investment;
        for profile in InvestorProfile::all() {
            let allocation = investment.allocation_for(*profile);
            let oversized = allocation.buckets().into_iter().find(|(_, p)| *p > 100);
            if let Some((class, percent)) = oversized {
                return Err(Error::Config(format!(
                    "{} {} allocation is {}%, expected at most 100%",
                    profile,
                    class.label(),
                    percent
                )));
            }
            if allocation.total_percent() != 100 {
                return Err(Error::Config(format!(
                    "{} allocation sums to {}%, expected 100%",
                    profile,
                    allocation.total_percent()
                )));
            }
            if !allocation.growth_rate.is_finite() || allocation.growth_rate <= -1.0 {
                return Err(Error::Config(format!(
                    "{} growth rate must be finite and above -100%",
                    profile
                )));
            }
        }

        if investment.conservative_after_age < investment.moderate_after_age {
            return Err(Error::Config(format!(
                "conservative_after_age ({}) must not be below moderate_after_age ({})",
                investment.conservative_after_age, investment.moderate_after_age
            )));
        }
        if investment.projection_step_years == 0 || investment.projection_points == 0 {
            return Err(Error::Config(
                "projection_step_years and projection_points must be positive".to_string(),
            ));
        }
        if investment.projection_step_years > MAX_PROJECTION_STEP_YEARS
            || investment.projection_points > MAX_PROJECTION_POINTS
        {
            return Err(Error::Config(format!(
                "projection_step_years must be at most {} and projection_points at most {}",
                MAX_PROJECTION_STEP_YEARS, MAX_PROJECTION_POINTS
            )));
        }

        let rates = [
            self.reserve.months_of_expenses,
            self.reserve.surplus_share,
            self.insurance.life_coverage_months,
            self.insurance.life_premium_rate,
            self.insurance.home_premium_rate,
            self.retirement.income_replacement,
        ];
        if rates.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(Error::Config(
                "reserve, insurance and retirement factors must be finite and non-negative"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("finplan").join("config.toml"))
}

/// Read the override file body, if one exists
///
/// An explicit path wins over the per-user location. A missing file falls
/// through to built-in defaults (`Ok(None)`).
pub fn read_config_source(override_path: Option<&Path>) -> Result<Option<String>> {
    let path = match override_path {
        Some(path) => {
            if !path.exists() {
                warn!(path = %path.display(), "Config file not found, using defaults");
                return Ok(None);
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No config override found, using defaults");
                return Ok(None);
            }
        },
    };

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
    info!(path = %path.display(), "Loaded config override");
    Ok(Some(content))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    indicators: Option<RawIndicators>,
    reserve: Option<RawReserve>,
    insurance: Option<RawInsurance>,
    investment: Option<RawInvestment>,
    retirement: Option<RawRetirement>,
}

#[derive(Debug, Deserialize)]
struct RawIndicators {
    classification_mode: Option<ClassificationMode>,
    debt_ratio: Option<[f64; 4]>,
    liquidity_ratio: Option<[f64; 4]>,
    savings_rate: Option<[f64; 4]>,
    insurance_coverage: Option<[f64; 4]>,
}

#[derive(Debug, Deserialize)]
struct RawReserve {
    months_of_expenses: Option<f64>,
    surplus_share: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawInsurance {
    life_coverage_months: Option<f64>,
    life_premium_rate: Option<f64>,
    home_premium_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawInvestment {
    moderate_after_age: Option<u32>,
    conservative_after_age: Option<u32>,
    projection_step_years: Option<u32>,
    projection_points: Option<u32>,
    conservative: Option<RawAllocation>,
    moderate: Option<RawAllocation>,
    aggressive: Option<RawAllocation>,
}

#[derive(Debug, Deserialize)]
struct RawAllocation {
    fixed_income: Option<u32>,
    variable_income: Option<u32>,
    alternative: Option<u32>,
    growth_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawRetirement {
    target_age: Option<u32>,
    income_replacement: Option<f64>,
    horizon_years: Option<u32>,
}

fn apply_allocation(target: &mut ProfileAllocation, raw: Option<RawAllocation>) {
    let Some(raw) = raw else { return };
    if let Some(v) = raw.fixed_income {
        target.fixed_income = v;
    }
    if let Some(v) = raw.variable_income {
        target.variable_income = v;
    }
    if let Some(v) = raw.alternative {
        target.alternative = v;
    }
    if let Some(v) = raw.growth_rate {
        target.growth_rate = v;
    }
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<EngineConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = EngineConfig::default();

    if let Some(indicators) = raw.indicators {
        let target = &mut config.indicators;
        if let Some(mode) = indicators.classification_mode {
            target.mode = mode;
        }
        if let Some(limits) = indicators.debt_ratio {
            target.debt_ratio = limits;
        }
        if let Some(limits) = indicators.liquidity_ratio {
            target.liquidity_ratio = limits;
        }
        if let Some(limits) = indicators.savings_rate {
            target.savings_rate = limits;
        }
        if let Some(limits) = indicators.insurance_coverage {
            target.insurance_coverage = limits;
        }
    }

    if let Some(reserve) = raw.reserve {
        if let Some(months) = reserve.months_of_expenses {
            config.reserve.months_of_expenses = months;
        }
        if let Some(share) = reserve.surplus_share {
            config.reserve.surplus_share = share;
        }
    }

    if let Some(insurance) = raw.insurance {
        if let Some(months) = insurance.life_coverage_months {
            config.insurance.life_coverage_months = months;
        }
        if let Some(rate) = insurance.life_premium_rate {
            config.insurance.life_premium_rate = rate;
        }
        if let Some(rate) = insurance.home_premium_rate {
            config.insurance.home_premium_rate = rate;
        }
    }

    if let Some(investment) = raw.investment {
        let target = &mut config.investment;
        if let Some(age) = investment.moderate_after_age {
            target.moderate_after_age = age;
        }
        if let Some(age) = investment.conservative_after_age {
            target.conservative_after_age = age;
        }
        if let Some(step) = investment.projection_step_years {
            target.projection_step_years = step;
        }
        if let Some(points) = investment.projection_points {
            target.projection_points = points;
        }
        apply_allocation(&mut target.conservative, investment.conservative);
        apply_allocation(&mut target.moderate, investment.moderate);
        apply_allocation(&mut target.aggressive, investment.aggressive);
    }

    if let Some(retirement) = raw.retirement {
        if let Some(age) = retirement.target_age {
            config.retirement.target_age = age;
        }
        if let Some(replacement) = retirement.income_replacement {
            config.retirement.income_replacement = replacement;
        }
        if let Some(years) = retirement.horizon_years {
            config.retirement.horizon_years = years;
        }
    }

    Ok(config)
}
