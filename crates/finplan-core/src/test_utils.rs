//! Test utilities for finplan-core
//!
//! A fluent builder for financial profiles so tests can state only the
//! fields they care about. Record ids are generated per collection
//! (`income-1`, `expense-1`, `debt-1`, ...).

use crate::models::{
    Asset, AssetCategory, Debt, Expense, ExpenseKind, FinancialProfile, IncomeSource,
    InsurancePolicy, Investment, PensionPlan, PremiumCadence,
};

/// Builder for [`FinancialProfile`] test fixtures
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    profile: FinancialProfile,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A 30-year-old couple with a mortgage, a car loan and some savings
    pub fn sample_household() -> FinancialProfile {
        Self::new()
            .name("Sample Household")
            .age(30)
            .income(6000.0)
            .income(1500.0)
            .expense(2500.0)
            .variable_expense(1500.0)
            .debt(180_000.0, 0.008)
            .debt(25_000.0, 0.019)
            .residence(320_000.0)
            .asset(AssetCategory::Vehicle, 45_000.0)
            .investment(30_000.0)
            .insurance(200_000.0)
            .pension(250.0, 12_000.0)
            .build()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.profile.personal.name = name.to_string();
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.profile.personal.age = age;
        self
    }

    pub fn income(mut self, amount: f64) -> Self {
        let id = format!("income-{}", self.profile.income_sources.len() + 1);
        self.profile.income_sources.push(IncomeSource {
            id,
            description: "Salary".to_string(),
            amount,
        });
        self
    }

    pub fn expense(self, amount: f64) -> Self {
        self.expense_of_kind(amount, ExpenseKind::Fixed)
    }

    pub fn variable_expense(self, amount: f64) -> Self {
        self.expense_of_kind(amount, ExpenseKind::Variable)
    }

    fn expense_of_kind(mut self, amount: f64, kind: ExpenseKind) -> Self {
        let id = format!("expense-{}", self.profile.expenses.len() + 1);
        self.profile.expenses.push(Expense {
            id,
            category: "household".to_string(),
            description: String::new(),
            amount,
            kind,
        });
        self
    }

    pub fn debt(mut self, principal: f64, monthly_interest_rate: f64) -> Self {
        let id = format!("debt-{}", self.profile.debts.len() + 1);
        self.profile.debts.push(Debt {
            id,
            kind: "loan".to_string(),
            description: String::new(),
            principal,
            monthly_interest_rate,
            remaining_months: 48,
            installment: principal / 48.0,
        });
        self
    }

    pub fn asset(mut self, category: AssetCategory, value: f64) -> Self {
        let id = format!("asset-{}", self.profile.assets.len() + 1);
        self.profile.assets.push(Asset {
            id,
            category,
            description: String::new(),
            value,
            financed: false,
        });
        self
    }

    pub fn residence(self, value: f64) -> Self {
        self.asset(AssetCategory::Residential, value)
    }

    pub fn investment(mut self, value: f64) -> Self {
        let id = format!("investment-{}", self.profile.investments.len() + 1);
        self.profile.investments.push(Investment {
            id,
            category: "fixed income".to_string(),
            institution: "Bank".to_string(),
            value,
            expected_annual_return: 0.1,
        });
        self
    }

    pub fn insurance(mut self, coverage: f64) -> Self {
        let id = format!("policy-{}", self.profile.insurance_policies.len() + 1);
        self.profile.insurance_policies.push(InsurancePolicy {
            id,
            kind: "life".to_string(),
            coverage,
            premium: coverage * 0.002 / 12.0,
            cadence: PremiumCadence::Monthly,
        });
        self
    }

    pub fn pension(mut self, monthly_contribution: f64, accumulated_balance: f64) -> Self {
        let id = format!("pension-{}", self.profile.pension_plans.len() + 1);
        self.profile.pension_plans.push(PensionPlan {
            id,
            kind: "private".to_string(),
            monthly_contribution,
            accumulated_balance,
        });
        self
    }

    pub fn build(self) -> FinancialProfile {
        self.profile
    }
}
