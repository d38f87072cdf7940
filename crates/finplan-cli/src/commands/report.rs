//! Indicator and plan report commands

use std::path::Path;

use anyhow::{Context, Result};
use finplan_core::plan::ActionHorizon;
use finplan_core::{Engine, FinancialIndicators, FinancialPlan, FinancialProfile, Indicator};
use tracing::info;

use super::{load_profile, money, percent};

pub fn cmd_indicators(engine: &Engine, profile_path: &Path, json: bool) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let indicators = engine.compute_indicators(&profile);
    info!(worst = %indicators.worst(), "Computed indicators");

    if json {
        let out = serde_json::to_string_pretty(&indicators)
            .context("Failed to serialize indicators to JSON")?;
        println!("{}", out);
        return Ok(());
    }

    print_profile_summary(&profile);
    print_indicators(&indicators);
    Ok(())
}

pub fn cmd_plan(engine: &Engine, profile_path: &Path, json: bool) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let plan = engine.generate_plan_fresh(&profile);
    info!(profile = %plan.investments.profile, "Generated financial plan");

    if json {
        let out =
            serde_json::to_string_pretty(&plan).context("Failed to serialize plan to JSON")?;
        println!("{}", out);
        return Ok(());
    }

    print_profile_summary(&profile);
    print_indicators(&plan.indicators);
    print_plan(&plan);
    Ok(())
}

fn print_profile_summary(profile: &FinancialProfile) {
    println!();
    if profile.personal.name.is_empty() {
        println!("📋 Household");
    } else {
        println!("📋 {}", profile.personal.name);
    }
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Age:              {}", profile.personal.age);
    println!("   Monthly income:   {}", money(profile.total_monthly_income()));
    println!("   Monthly expenses: {}", money(profile.total_monthly_expenses()));
    println!("   Monthly surplus:  {}", money(profile.monthly_surplus()));
    println!("   Total debt:       {}", money(profile.total_debt_principal()));
}

fn print_indicators(indicators: &FinancialIndicators) {
    println!();
    println!("📊 Indicators");
    println!("   {:22} │ {:>9} │ {}", "Indicator", "Value", "Classification");
    println!("   ───────────────────────┼───────────┼────────────────");

    for indicator in Indicator::all() {
        let reading = indicators.get(*indicator);
        println!(
            "   {:22} │ {:>9} │ {}",
            indicator.label(),
            percent(reading.value),
            reading.classification.label()
        );
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("   {}:", title);
    for item in items {
        println!("     - {}", item);
    }
}

fn print_plan(plan: &FinancialPlan) {
    let payoff = &plan.organization.debt_payoff;
    println!();
    println!("💳 Financial organization");
    print_list("Recommendations", &plan.organization.recommendations);
    print_list(
        "Reduce expenses",
        &plan.organization.expense_reduction_strategies,
    );
    if payoff.order.is_empty() {
        println!("   No debts to pay off.");
    } else {
        println!("   Payoff order (highest rate first):");
        for (i, debt) in payoff.order.iter().enumerate() {
            println!(
                "     {}. {:20} {:>14}  {:.2}%/month",
                i + 1,
                debt.id,
                money(debt.principal),
                debt.monthly_interest_rate * 100.0
            );
        }
        if payoff.estimated_months > 0 {
            println!("   Debt-free in about {} months", payoff.estimated_months);
        } else {
            println!("   ⚠️  No monthly surplus to put toward debt");
        }
    }

    let reserve = &plan.emergency_reserve;
    println!();
    println!("🛟 Emergency reserve");
    println!("   Target:       {}", money(reserve.target_amount));
    println!("   Contribution: {}/month", money(reserve.monthly_contribution));
    if reserve.months_to_target > 0 {
        println!("   Reached in:   {} months", reserve.months_to_target);
    }
    print_list("Where to keep it", &reserve.recommended_products);

    println!();
    println!("🛡️  Protection");
    for rec in &plan.protection.recommendations {
        println!(
            "   {:16} cover {:>16}  premium {:>12}  priority {}",
            rec.kind.label(),
            money(rec.recommended_coverage),
            money(rec.estimated_premium),
            rec.priority
        );
    }

    let investments = &plan.investments;
    println!();
    println!(
        "📈 Investments ({} profile, {} a year)",
        investments.profile,
        percent(investments.annual_growth_rate)
    );
    for bucket in &investments.allocation {
        println!(
            "   {:16} {:>3}%  {}",
            bucket.asset_class.label(),
            bucket.percent,
            bucket.examples.join(", ")
        );
    }
    println!("   Projection:");
    for point in &investments.projection {
        println!("     {:>3} years  {:>16}", point.years, money(point.value));
    }

    let retirement = &plan.retirement;
    println!();
    println!("🏖️  Retirement");
    println!(
        "   Target age {} ({} years away)",
        retirement.target_age, retirement.years_remaining
    );
    println!("   Monthly income needed: {}", money(retirement.required_monthly_income));
    println!("   Capital required:      {}", money(retirement.total_capital_required));
    println!("   Contribution:          {}/month", money(retirement.monthly_contribution));
    if retirement.current_pension_balance > 0.0 || retirement.current_pension_contribution > 0.0 {
        println!(
            "   Pension today:         {} ({}/month)",
            money(retirement.current_pension_balance),
            money(retirement.current_pension_contribution)
        );
    }
    print_list("Strategies", &retirement.strategies);

    println!();
    println!("📜 Succession");
    print_list("Guidelines", &plan.succession.guidelines);
    print_list("Documents", &plan.succession.required_documents);
    print_list("Strategies", &plan.succession.strategies);

    println!();
    println!("✅ Action plan");
    for horizon in ActionHorizon::all() {
        println!("   {}:", horizon.label());
        for item in plan.actions.for_horizon(*horizon) {
            println!("     - {} (within {} days)", item.description, item.deadline_days);
        }
    }
}
