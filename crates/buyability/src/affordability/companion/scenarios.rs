use super::super::amortization::monthly_payment;
use super::super::calculator::AffordabilityCalculator;
use super::super::domain::{AffordabilityResult, Cents, FinancialProfile};
use super::views::{RepaymentComparison, Scenario, ScenarioKind};

/// Re-runs the calculator on three perturbed copies of the profile.
pub(crate) fn build_scenarios(
    calculator: &AffordabilityCalculator,
    profile: &FinancialProfile,
    baseline: &AffordabilityResult,
) -> Vec<Scenario> {
    vec![
        increase_income(calculator, profile, baseline),
        reduce_expenses(calculator, profile, baseline),
        increase_deposit(calculator, profile, baseline),
    ]
}

fn scenario(
    kind: ScenarioKind,
    description: String,
    outcome: &AffordabilityResult,
    baseline: &AffordabilityResult,
) -> Scenario {
    Scenario {
        id: kind,
        label: kind.label(),
        description,
        affordability_max: outcome.affordability_max,
        affordability_delta: outcome.affordability_max.delta_from(baseline.affordability_max),
        monthly_repayment: None,
    }
}

fn increase_income(
    calculator: &AffordabilityCalculator,
    profile: &FinancialProfile,
    baseline: &AffordabilityResult,
) -> Scenario {
    let uplift = calculator.config().companion.income_uplift_ratio;
    let mut perturbed = profile.clone();
    perturbed.income = profile
        .income
        .map(|income| Cents::from_f64(income.as_f64() * (1.0 + uplift)));

    let outcome = calculator.calculate(&perturbed);
    scenario(
        ScenarioKind::IncreaseIncome,
        format!(
            "If your income grew by {:.0}%, you could afford up to {}.",
            uplift * 100.0,
            outcome.affordability_max
        ),
        &outcome,
        baseline,
    )
}

fn reduce_expenses(
    calculator: &AffordabilityCalculator,
    profile: &FinancialProfile,
    baseline: &AffordabilityResult,
) -> Scenario {
    let reduction = calculator.config().companion.expense_reduction;
    let mut perturbed = profile.clone();
    perturbed.monthly_expenses = profile
        .monthly_expenses
        .map(|expenses| expenses.saturating_sub(reduction));

    let outcome = calculator.calculate(&perturbed);
    scenario(
        ScenarioKind::ReduceExpenses,
        format!(
            "Cutting {} a month from your expenses would take you to {}.",
            reduction, outcome.affordability_max
        ),
        &outcome,
        baseline,
    )
}

fn increase_deposit(
    calculator: &AffordabilityCalculator,
    profile: &FinancialProfile,
    baseline: &AffordabilityResult,
) -> Scenario {
    let increase = calculator.config().companion.deposit_increase;
    let mut perturbed = profile.clone();
    perturbed.savings_deposit = Some(profile.deposit().saturating_add(increase));

    let outcome = calculator.calculate(&perturbed);
    let repayment = repayment_comparison(
        baseline,
        profile.deposit(),
        perturbed.deposit(),
        calculator.config().loan_term_months,
    );

    let mut result = scenario(
        ScenarioKind::IncreaseDeposit,
        format!(
            "Adding {} to your deposit lowers the repayment on a {} home by {} a month.",
            increase, baseline.affordability_max, repayment.reduction
        ),
        &outcome,
        baseline,
    );
    result.monthly_repayment = Some(repayment);
    result
}

/// Repayment on the baseline maximum price, financed at the baseline rate, for two deposits.
pub(crate) fn repayment_comparison(
    baseline: &AffordabilityResult,
    deposit: Cents,
    larger_deposit: Cents,
    term_months: u32,
) -> RepaymentComparison {
    let rate = baseline.interest_rate;
    let target = baseline.affordability_max;

    let before = monthly_payment(target.saturating_sub(deposit).as_f64(), rate, term_months);
    let after = monthly_payment(
        target.saturating_sub(larger_deposit).as_f64(),
        rate,
        term_months,
    )
    .min(before);

    let baseline_payment = Cents::from_f64(before);
    let scenario_payment = Cents::from_f64(after).min(baseline_payment);

    RepaymentComparison {
        baseline: baseline_payment,
        scenario: scenario_payment,
        reduction: baseline_payment.saturating_sub(scenario_payment),
    }
}
