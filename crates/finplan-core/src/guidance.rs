//! Guidance library
//!
//! All non-personalized text that appears in a plan: recommendations,
//! product suggestions, example instruments, succession checklists and the
//! action-plan items with their deadlines. Derivation code looks entries up
//! here instead of carrying string literals.
//!
//! Guidance is resolved in two layers:
//! 1. Lists present in the `[guidance]` table of a config override
//! 2. Built-in defaults (compiled into binary)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::read_config_source;
use crate::error::{Error, Result};
use crate::plan::{ActionHorizon, AssetClass, InvestorProfile};

/// Built-in guidance content
mod defaults {
    pub const ORGANIZATION_RECOMMENDATIONS: &[&str] = &[
        "Set up a detailed monthly budget",
        "Track your spending every day",
        "Renegotiate recurring service contracts",
    ];

    pub const EXPENSE_REDUCTION_STRATEGIES: &[&str] = &[
        "Review subscriptions and non-essential services",
        "Compare prices before making purchases",
        "Plan meals ahead to cut food costs",
    ];

    pub const RESERVE_PRODUCTS: &[&str] = &[
        "Certificate of deposit with daily liquidity",
        "Low-fee money market fund",
        "Short-term government bonds",
    ];

    pub const RETIREMENT_STRATEGIES: &[&str] = &[
        "Maximize contributions to private pension plans",
        "Diversify retirement investments",
        "Review your accumulation plan every year",
    ];

    pub const SUCCESSION_GUIDELINES: &[&str] = &[
        "Write a will",
        "Consider estate planning during your lifetime",
        "Keep important documents organized",
    ];

    pub const SUCCESSION_DOCUMENTS: &[&str] = &[
        "Will",
        "Inventory of assets",
        "Insurance policies",
        "Property deeds",
    ];

    pub const SUCCESSION_STRATEGIES: &[&str] = &[
        "Lifetime gifts with retained usufruct",
        "Family holding company",
        "Life insurance with named beneficiaries",
    ];

    /// (fixed income, variable income, alternative) examples per profile
    pub const CONSERVATIVE_INSTRUMENTS: [&[&str]; 3] = [
        &["Government bonds", "Certificates of deposit", "Tax-exempt real estate notes"],
        &["Real estate investment trusts", "Dividend stocks"],
        &["Gold", "US dollar"],
    ];

    pub const MODERATE_INSTRUMENTS: [&[&str]; 3] = [
        &["Government bonds", "Certificates of deposit", "Corporate bonds"],
        &["Stocks", "Real estate investment trusts", "ETFs"],
        &["Gold", "Cryptocurrencies", "International investments"],
    ];

    pub const AGGRESSIVE_INSTRUMENTS: [&[&str]; 3] = [
        &["Government bonds", "Corporate bonds", "Certificates of deposit"],
        &["Stocks", "ETFs", "Investment funds"],
        &["Cryptocurrencies", "International investments"],
    ];

    pub const IMMEDIATE_ACTIONS: &[(&str, u32)] = &[
        ("Draft a detailed budget", 7),
        ("Start building the emergency reserve", 30),
        ("Review recurring service contracts", 15),
    ];

    pub const SHORT_TERM_ACTIONS: &[(&str, u32)] = &[
        ("Start paying off the most expensive debt", 90),
        ("Buy essential insurance", 60),
        ("Organize financial documents", 45),
    ];

    pub const MEDIUM_TERM_ACTIONS: &[(&str, u32)] = &[
        ("Review investment allocation", 180),
        ("Complete the emergency reserve", 365),
        ("Start investing for medium-term goals", 120),
    ];

    pub const LONG_TERM_ACTIONS: &[(&str, u32)] = &[
        ("Increase retirement contributions", 365),
        ("Review the succession plan", 730),
        ("Diversify long-term investments", 365),
    ];
}

/// An action-plan entry before it is placed into a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionTemplate {
    pub description: String,
    pub deadline_days: u32,
}

/// Action templates grouped by horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionTemplates {
    pub immediate: Vec<ActionTemplate>,
    pub short_term: Vec<ActionTemplate>,
    pub medium_term: Vec<ActionTemplate>,
    pub long_term: Vec<ActionTemplate>,
}

impl ActionTemplates {
    pub fn for_horizon(&self, horizon: ActionHorizon) -> &[ActionTemplate] {
        match horizon {
            ActionHorizon::Immediate => &self.immediate,
            ActionHorizon::ShortTerm => &self.short_term,
            ActionHorizon::MediumTerm => &self.medium_term,
            ActionHorizon::LongTerm => &self.long_term,
        }
    }
}

/// Example instruments per asset class for one investor profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentExamples {
    pub fixed_income: Vec<String>,
    pub variable_income: Vec<String>,
    pub alternative: Vec<String>,
}

impl InstrumentExamples {
    fn from_table(table: [&[&str]; 3]) -> Self {
        let [fixed, variable, alternative] = table;
        Self {
            fixed_income: to_strings(fixed),
            variable_income: to_strings(variable),
            alternative: to_strings(alternative),
        }
    }

    pub fn for_class(&self, asset_class: AssetClass) -> &[String] {
        match asset_class {
            AssetClass::FixedIncome => &self.fixed_income,
            AssetClass::VariableIncome => &self.variable_income,
            AssetClass::Alternative => &self.alternative,
        }
    }
}

/// All static plan content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceLibrary {
    pub organization_recommendations: Vec<String>,
    pub expense_reduction_strategies: Vec<String>,
    pub reserve_products: Vec<String>,
    pub retirement_strategies: Vec<String>,
    pub succession_guidelines: Vec<String>,
    pub succession_documents: Vec<String>,
    pub succession_strategies: Vec<String>,
    pub conservative_instruments: InstrumentExamples,
    pub moderate_instruments: InstrumentExamples,
    pub aggressive_instruments: InstrumentExamples,
    pub actions: ActionTemplates,
}

impl GuidanceLibrary {
    /// Built-in content
    pub fn builtin() -> Self {
        Self {
            organization_recommendations: to_strings(defaults::ORGANIZATION_RECOMMENDATIONS),
            expense_reduction_strategies: to_strings(defaults::EXPENSE_REDUCTION_STRATEGIES),
            reserve_products: to_strings(defaults::RESERVE_PRODUCTS),
            retirement_strategies: to_strings(defaults::RETIREMENT_STRATEGIES),
            succession_guidelines: to_strings(defaults::SUCCESSION_GUIDELINES),
            succession_documents: to_strings(defaults::SUCCESSION_DOCUMENTS),
            succession_strategies: to_strings(defaults::SUCCESSION_STRATEGIES),
            conservative_instruments: InstrumentExamples::from_table(
                defaults::CONSERVATIVE_INSTRUMENTS,
            ),
            moderate_instruments: InstrumentExamples::from_table(defaults::MODERATE_INSTRUMENTS),
            aggressive_instruments: InstrumentExamples::from_table(
                defaults::AGGRESSIVE_INSTRUMENTS,
            ),
            actions: ActionTemplates {
                immediate: to_actions(defaults::IMMEDIATE_ACTIONS),
                short_term: to_actions(defaults::SHORT_TERM_ACTIONS),
                medium_term: to_actions(defaults::MEDIUM_TERM_ACTIONS),
                long_term: to_actions(defaults::LONG_TERM_ACTIONS),
            },
        }
    }

    /// Apply the `[guidance]` table of a config file over the built-ins
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfigFile = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid guidance TOML: {}", e)))?;

        let mut library = Self::builtin();
        let Some(guidance) = raw.guidance else {
            return Ok(library);
        };

        replace(&mut library.organization_recommendations, guidance.organization_recommendations);
        replace(&mut library.expense_reduction_strategies, guidance.expense_reduction_strategies);
        replace(&mut library.reserve_products, guidance.reserve_products);
        replace(&mut library.retirement_strategies, guidance.retirement_strategies);
        replace(&mut library.succession_guidelines, guidance.succession_guidelines);
        replace(&mut library.succession_documents, guidance.succession_documents);
        replace(&mut library.succession_strategies, guidance.succession_strategies);

        if let Some(instruments) = guidance.instruments {
            replace(&mut library.conservative_instruments, instruments.conservative);
            replace(&mut library.moderate_instruments, instruments.moderate);
            replace(&mut library.aggressive_instruments, instruments.aggressive);
        }

        if let Some(actions) = guidance.actions {
            replace(&mut library.actions.immediate, actions.immediate);
            replace(&mut library.actions.short_term, actions.short_term);
            replace(&mut library.actions.medium_term, actions.medium_term);
            replace(&mut library.actions.long_term, actions.long_term);
        }

        Ok(library)
    }

    /// Load using the same override resolution as the engine config
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        match read_config_source(override_path)? {
            Some(content) => Self::from_toml_str(&content),
            None => Ok(Self::builtin()),
        }
    }

    pub fn instruments_for(&self, profile: InvestorProfile) -> &InstrumentExamples {
        match profile {
            InvestorProfile::Conservative => &self.conservative_instruments,
            InvestorProfile::Moderate => &self.moderate_instruments,
            InvestorProfile::Aggressive => &self.aggressive_instruments,
        }
    }
}

impl Default for GuidanceLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn to_actions(items: &[(&str, u32)]) -> Vec<ActionTemplate> {
    items
        .iter()
        .map(|(description, deadline_days)| ActionTemplate {
            description: description.to_string(),
            deadline_days: *deadline_days,
        })
        .collect()
}

fn replace<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Raw config file; only the `[guidance]` table is read here
#[derive(Debug, Deserialize)]
struct RawConfigFile {
    guidance: Option<RawGuidance>,
}

#[derive(Debug, Deserialize)]
struct RawGuidance {
    organization_recommendations: Option<Vec<String>>,
    expense_reduction_strategies: Option<Vec<String>>,
    reserve_products: Option<Vec<String>>,
    retirement_strategies: Option<Vec<String>>,
    succession_guidelines: Option<Vec<String>>,
    succession_documents: Option<Vec<String>>,
    succession_strategies: Option<Vec<String>>,
    instruments: Option<RawInstruments>,
    actions: Option<RawActions>,
}

#[derive(Debug, Deserialize)]
struct RawInstruments {
    conservative: Option<InstrumentExamples>,
    moderate: Option<InstrumentExamples>,
    aggressive: Option<InstrumentExamples>,
}

#[derive(Debug, Deserialize)]
struct RawActions {
    immediate: Option<Vec<ActionTemplate>>,
    short_term: Option<Vec<ActionTemplate>>,
    medium_term: Option<Vec<ActionTemplate>>,
    long_term: Option<Vec<ActionTemplate>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG;

    #[test]
    fn test_builtin_action_deadlines() {
        let library = GuidanceLibrary::builtin();
        let deadlines = |h: ActionHorizon| -> Vec<u32> {
            library
                .actions
                .for_horizon(h)
                .iter()
                .map(|a| a.deadline_days)
                .collect()
        };

        assert_eq!(deadlines(ActionHorizon::Immediate), vec![7, 30, 15]);
        assert_eq!(deadlines(ActionHorizon::ShortTerm), vec![90, 60, 45]);
        assert_eq!(deadlines(ActionHorizon::MediumTerm), vec![180, 365, 120]);
        assert_eq!(deadlines(ActionHorizon::LongTerm), vec![365, 730, 365]);
    }

    #[test]
    fn test_every_profile_has_examples_for_every_class() {
        let library = GuidanceLibrary::builtin();
        for profile in InvestorProfile::all() {
            for class in AssetClass::all() {
                assert!(
                    !library.instruments_for(*profile).for_class(*class).is_empty(),
                    "{} / {:?} has no examples",
                    profile,
                    class
                );
            }
        }
    }

    #[test]
    fn test_template_keeps_builtin_guidance() {
        let library = GuidanceLibrary::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(library, GuidanceLibrary::builtin());
    }

    #[test]
    fn test_override_replaces_single_lists() {
        let library = GuidanceLibrary::from_toml_str(
            r#"
            [guidance]
            reserve_products = ["High-yield savings account"]

            [guidance.instruments.moderate]
            fixed_income = ["Bond ladder"]
            variable_income = ["Index funds"]
            alternative = ["Gold ETF"]

            [[guidance.actions.immediate]]
            description = "Freeze credit card spending"
            deadline_days = 3
            "#,
        )
        .unwrap();

        assert_eq!(library.reserve_products, vec!["High-yield savings account"]);
        assert_eq!(
            library
                .instruments_for(InvestorProfile::Moderate)
                .for_class(AssetClass::VariableIncome)
                .to_vec(),
            vec!["Index funds".to_string()]
        );
        assert_eq!(library.actions.immediate.len(), 1);
        assert_eq!(library.actions.immediate[0].deadline_days, 3);

        // Untouched lists keep their defaults
        let builtin = GuidanceLibrary::builtin();
        assert_eq!(library.succession_documents, builtin.succession_documents);
        assert_eq!(library.actions.long_term, builtin.actions.long_term);
        assert_eq!(
            library.conservative_instruments,
            builtin.conservative_instruments
        );
    }

    #[test]
    fn test_invalid_guidance_is_config_error() {
        let err = GuidanceLibrary::from_toml_str(
            r#"
            [guidance]
            reserve_products = "not a list"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
