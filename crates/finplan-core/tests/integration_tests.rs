//! Integration tests for finplan-core
//!
//! These tests exercise the full profile → indicators → plan workflow.

use serde_json::json;

use finplan_core::{
    compute_indicators, generate_plan,
    models::FinancialProfile,
    plan::{AssetClass, InvestorProfile},
    Classification, ClassificationMode, Engine, EngineConfig, GuidanceLibrary, Indicator,
};

const EPS: f64 = 1e-9;

/// Build a profile from monthly incomes, expenses and `(principal, rate)` debts
fn household(age: u32, income: &[f64], expenses: &[f64], debts: &[(f64, f64)]) -> FinancialProfile {
    let income: Vec<_> = income
        .iter()
        .enumerate()
        .map(|(i, amount)| json!({ "id": format!("income-{}", i + 1), "amount": amount }))
        .collect();
    let expenses: Vec<_> = expenses
        .iter()
        .enumerate()
        .map(|(i, amount)| json!({ "id": format!("expense-{}", i + 1), "amount": amount }))
        .collect();
    let debts: Vec<_> = debts
        .iter()
        .enumerate()
        .map(|(i, (principal, rate))| {
            json!({
                "id": format!("debt-{}", i + 1),
                "principal": principal,
                "monthly_interest_rate": rate,
            })
        })
        .collect();

    serde_json::from_value(json!({
        "personal": { "age": age },
        "income_sources": income,
        "expenses": expenses,
        "debts": debts,
    }))
    .unwrap()
}

/// A two-income household in JSON, as a client would submit it
fn household_json() -> &'static str {
    r#"{
  "personal": { "name": "Ana Souza", "age": 42, "dependents": 2, "marital_status": "married" },
  "income_sources": [
    { "id": "salary", "description": "Salary", "amount": 8000 },
    { "id": "rent", "description": "Rental income", "amount": 1500 }
  ],
  "expenses": [
    { "id": "housing", "category": "housing", "amount": 3000, "kind": "fixed" },
    { "id": "groceries", "category": "food", "amount": 1800, "kind": "variable" },
    { "id": "school", "category": "education", "amount": 1200 }
  ],
  "debts": [
    { "id": "car", "kind": "vehicle", "principal": 30000, "monthly_interest_rate": 0.018, "remaining_months": 30, "installment": 1200 },
    { "id": "card", "kind": "credit_card", "principal": 4000, "monthly_interest_rate": 0.12, "remaining_months": 6, "installment": 700 }
  ],
  "assets": [
    { "id": "home", "category": "residential", "value": 450000 },
    { "id": "car", "category": "vehicle", "value": 60000, "financed": true }
  ],
  "investments": [
    { "id": "cdb", "category": "fixed income", "institution": "Bank", "value": 40000, "expected_annual_return": 0.11 }
  ],
  "insurance_policies": [
    { "id": "life", "kind": "life", "coverage": 300000, "premium": 90, "cadence": "monthly" }
  ],
  "pension_plans": [
    { "id": "pgbl", "kind": "pgbl", "monthly_contribution": 500, "accumulated_balance": 35000 }
  ],
  "goals": [
    { "id": "trip", "description": "Family trip", "target_amount": 20000, "term_months": 18, "priority": "low", "horizon": "medium" }
  ]
}"#
}

// =============================================================================
// Indicator Calculator
// =============================================================================

#[test]
fn test_indicators_for_simple_household() {
    let profile = household(30, &[3000.0], &[2000.0], &[]);
    let indicators = compute_indicators(&profile);

    assert_eq!(indicators.debt_ratio.value, 0.0);
    assert!((indicators.savings_rate.value - 1.0 / 3.0).abs() < EPS);
    assert_eq!(indicators.liquidity_ratio.value, 0.0);
    assert_eq!(indicators.insurance_coverage.value, 0.0);

    assert_eq!(indicators.debt_ratio.classification, Classification::Excellent);
    assert_eq!(indicators.savings_rate.classification, Classification::Excellent);
    assert_eq!(indicators.liquidity_ratio.classification, Classification::Critical);
    assert_eq!(indicators.worst(), Classification::Critical);

    let plan = generate_plan(&profile, &indicators);
    assert_eq!(plan.organization.debt_payoff.estimated_months, 0);
    assert!(plan.organization.debt_payoff.order.is_empty());
}

#[test]
fn test_empty_profile_is_all_zeros() {
    let indicators = compute_indicators(&FinancialProfile::default());
    for indicator in Indicator::all() {
        let reading = indicators.get(*indicator);
        assert_eq!(reading.value, 0.0, "{}", indicator);
        assert!(reading.value.is_finite());
    }
}

#[test]
fn test_legacy_mode_classifies_everything_lower_is_better() {
    let profile = household(30, &[3000.0], &[2000.0], &[]);

    let mut config = EngineConfig::default();
    config.indicators.mode = ClassificationMode::Legacy;
    let engine = Engine::new(config, GuidanceLibrary::builtin());

    let indicators = engine.compute_indicators(&profile);
    assert_eq!(indicators.liquidity_ratio.classification, Classification::Excellent);
    assert_eq!(indicators.savings_rate.classification, Classification::Critical);
    assert_eq!(indicators.debt_ratio.classification, Classification::Excellent);
}

// =============================================================================
// Plan Generator
// =============================================================================

#[test]
fn test_avalanche_payoff_workflow() {
    let profile = household(30, &[5000.0], &[4000.0], &[(12_000.0, 0.08), (5_000.0, 0.15)]);

    let plan = generate_plan(&profile, &compute_indicators(&profile));
    let payoff = &plan.organization.debt_payoff;

    let rates: Vec<f64> = payoff.order.iter().map(|d| d.monthly_interest_rate).collect();
    assert_eq!(rates, vec![0.15, 0.08]);
    assert_eq!(profile.monthly_surplus(), 1000.0);
    assert_eq!(payoff.estimated_months, 17);
}

#[test]
fn test_young_household_invests_aggressively() {
    let profile = household(30, &[6000.0], &[4000.0], &[]);

    let plan = generate_plan(&profile, &compute_indicators(&profile));
    let investments = &plan.investments;

    assert_eq!(investments.profile, InvestorProfile::Aggressive);
    let percents: Vec<(AssetClass, u32)> = investments
        .allocation
        .iter()
        .map(|b| (b.asset_class, b.percent))
        .collect();
    assert_eq!(
        percents,
        vec![
            (AssetClass::FixedIncome, 30),
            (AssetClass::VariableIncome, 60),
            (AssetClass::Alternative, 10),
        ]
    );
    assert_eq!(investments.projection[0].years, 5);
    assert!((investments.projection[0].value - 132_000.0).abs() < 1e-6);
}

#[test]
fn test_investor_profile_by_age() {
    let cases = [
        (56, InvestorProfile::Conservative),
        (40, InvestorProfile::Moderate),
        (20, InvestorProfile::Aggressive),
    ];

    for (age, expected) in cases {
        let profile = household(age, &[4000.0], &[], &[]);
        let plan = generate_plan(&profile, &compute_indicators(&profile));
        assert_eq!(plan.investments.profile, expected, "age {}", age);

        let total: u32 = plan.investments.allocation.iter().map(|b| b.percent).sum();
        assert_eq!(total, 100);
        assert!(plan
            .investments
            .allocation
            .iter()
            .all(|b| !b.examples.is_empty()));
    }
}

#[test]
fn test_debt_order_is_permutation_of_input() {
    let profile = household(
        45,
        &[7000.0],
        &[3000.0],
        &[(8_000.0, 0.03), (1_500.0, 0.12), (20_000.0, 0.03), (700.0, 0.09)],
    );

    let plan = generate_plan(&profile, &compute_indicators(&profile));
    let order = &plan.organization.debt_payoff.order;

    let mut ids: Vec<&str> = order.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["debt-2", "debt-4", "debt-1", "debt-3"]);
    ids.sort();
    assert_eq!(ids, vec!["debt-1", "debt-2", "debt-3", "debt-4"]);
}

#[test]
fn test_plan_is_deterministic() {
    let profile = FinancialProfile::from_json_str(household_json()).unwrap();

    let first = generate_plan(&profile, &compute_indicators(&profile));
    let second = generate_plan(&profile, &compute_indicators(&profile));
    assert_eq!(first, second);

    let json_first = serde_json::to_string(&first).unwrap();
    let json_second = serde_json::to_string(&second).unwrap();
    assert_eq!(json_first, json_second);
}

#[test]
fn test_sections_are_always_populated() {
    let plan = generate_plan(
        &FinancialProfile::default(),
        &compute_indicators(&FinancialProfile::default()),
    );

    assert!(!plan.organization.recommendations.is_empty());
    assert_eq!(plan.protection.recommendations.len(), 2);
    assert_eq!(plan.investments.projection.len(), 10);
    assert!(!plan.succession.required_documents.is_empty());
    assert!(!plan.actions.immediate.is_empty());
    assert!(!plan.actions.long_term.is_empty());
}

// =============================================================================
// Profile files
// =============================================================================

#[test]
fn test_json_household_full_workflow() {
    let profile = FinancialProfile::from_json_str(household_json()).unwrap();
    assert_eq!(profile.total_monthly_income(), 9500.0);
    assert_eq!(profile.total_monthly_expenses(), 6000.0);

    let indicators = compute_indicators(&profile);
    // 34000 / (9500 * 12)
    assert!((indicators.debt_ratio.value - 34_000.0 / 114_000.0).abs() < EPS);
    assert_eq!(indicators.debt_ratio.classification, Classification::Excellent);
    // 40000 / (6000 * 6)
    assert!((indicators.liquidity_ratio.value - 40_000.0 / 36_000.0).abs() < EPS);
    assert_eq!(indicators.liquidity_ratio.classification, Classification::Good);

    let plan = generate_plan(&profile, &indicators);
    assert_eq!(plan.organization.debt_payoff.order[0].id, "card");
    // 34000 / 3500 = 9.71
    assert_eq!(plan.organization.debt_payoff.estimated_months, 10);
    assert_eq!(plan.investments.profile, InvestorProfile::Moderate);
    assert_eq!(plan.protection.recommendations[1].recommended_coverage, 450_000.0);
    assert_eq!(plan.retirement.years_remaining, 23);
    assert_eq!(plan.retirement.current_pension_balance, 35_000.0);
}

#[test]
fn test_profile_file_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("household.json");
    std::fs::write(&path, household_json()).unwrap();

    let from_disk = FinancialProfile::from_path(&path).unwrap();
    let from_str = FinancialProfile::from_json_str(household_json()).unwrap();
    assert_eq!(from_disk, from_str);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_override_changes_plan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[reserve]
months_of_expenses = 12.0

[retirement]
target_age = 60

[guidance]
retirement_strategies = ["Max out employer match"]
"#,
    )
    .unwrap();

    let engine = Engine::from_config_path(Some(&path)).unwrap();
    let profile = household(40, &[6000.0], &[4000.0], &[]);
    let plan = engine.generate_plan_fresh(&profile);

    assert_eq!(plan.emergency_reserve.target_amount, 48_000.0);
    assert_eq!(plan.retirement.target_age, 60);
    assert_eq!(plan.retirement.years_remaining, 20);
    assert_eq!(plan.retirement.strategies, vec!["Max out employer match"]);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[investment.aggressive]
fixed_income = 50
variable_income = 60
alternative = 10
"#,
    )
    .unwrap();

    let err = Engine::from_config_path(Some(&path)).unwrap_err();
    assert!(matches!(err, finplan_core::Error::Config(_)));
}
