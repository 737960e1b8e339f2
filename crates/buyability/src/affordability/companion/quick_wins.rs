use super::super::config::CompanionConfig;
use super::super::domain::{Cents, FinancialProfile};
use super::views::{Scenario, ScenarioKind};

/// Up to `max_quick_wins` suggestions, in rule order rather than by size of impact.
pub(crate) fn select_quick_wins(
    profile: &FinancialProfile,
    scenarios: &[Scenario],
    config: &CompanionConfig,
) -> Vec<String> {
    let find = |kind: ScenarioKind| scenarios.iter().find(|scenario| scenario.id == kind);
    let mut wins = Vec::new();

    if profile.monthly_expenses() > config.expense_quick_win_threshold {
        if let Some(scenario) = find(ScenarioKind::ReduceExpenses) {
            wins.push(format!(
                "Reduce your monthly expenses by {} to increase your affordability by {}",
                config.expense_reduction,
                gain(scenario.affordability_delta)
            ));
        }
    }

    if let Some(repayment) = find(ScenarioKind::IncreaseDeposit).and_then(|s| s.monthly_repayment)
    {
        if !repayment.reduction.is_zero() {
            wins.push(format!(
                "Increase your deposit by {} to lower your monthly repayment by {}",
                config.deposit_increase, repayment.reduction
            ));
        }
    }

    if !profile.has_partner_income() {
        wins.push("Add your partner's income to see your combined buying power".to_string());
    }

    if profile.monthly_debts() > config.debt_quick_win_threshold {
        wins.push("Pay off your smallest debt to free up monthly cash flow".to_string());
    }

    wins.truncate(config.max_quick_wins);
    wins
}

fn gain(delta: i64) -> Cents {
    Cents(delta.max(0).unsigned_abs())
}
