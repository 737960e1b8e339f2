use super::super::domain::{FinancialProfile, TRACKED_PROFILE_FIELDS};
use super::views::AccuracyBooster;

struct BoosterDefinition {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    accuracy_gain: u8,
    priority: u8,
    missing: fn(&FinancialProfile) -> bool,
}

static CATALOGUE: [BoosterDefinition; 6] = [
    BoosterDefinition {
        id: "monthly_expenses",
        title: "Add your monthly expenses",
        description: "Living costs beyond our baseline change how much you can repay each month.",
        accuracy_gain: 15,
        priority: 1,
        missing: |profile| profile.monthly_expenses.is_none(),
    },
    BoosterDefinition {
        id: "monthly_debts",
        title: "Add your monthly debt repayments",
        description: "Car, card, and personal loan repayments reduce what lenders will offer.",
        accuracy_gain: 15,
        priority: 2,
        missing: |profile| profile.monthly_debts.is_none(),
    },
    BoosterDefinition {
        id: "partner_income",
        title: "Add your partner's income",
        description: "Applying jointly can significantly increase your buying power.",
        accuracy_gain: 10,
        priority: 4,
        missing: |profile| !profile.has_partner_income(),
    },
    BoosterDefinition {
        id: "savings_deposit",
        title: "Tell us about your savings",
        description: "Your deposit adds directly to your price range and lowers the bond.",
        accuracy_gain: 20,
        priority: 3,
        missing: |profile| profile.savings_deposit.is_none(),
    },
    BoosterDefinition {
        id: "dependents",
        title: "Add your dependents",
        description: "Household size changes the living costs we assume.",
        accuracy_gain: 5,
        priority: 6,
        missing: |profile| profile.dependents.is_none(),
    },
    BoosterDefinition {
        id: "credit_score",
        title: "Add your credit score",
        description: "A known credit score lets us assume a sharper interest rate.",
        accuracy_gain: 10,
        priority: 5,
        missing: |profile| profile.credit_score.is_none(),
    },
];

/// Boosters for every catalogued field the profile is still missing, by ascending priority.
pub(crate) fn missing_boosters(profile: &FinancialProfile) -> Vec<AccuracyBooster> {
    let mut boosters: Vec<AccuracyBooster> = CATALOGUE
        .iter()
        .filter(|definition| (definition.missing)(profile))
        .map(|definition| AccuracyBooster {
            id: definition.id,
            title: definition.title,
            description: definition.description,
            accuracy_gain: definition.accuracy_gain,
            priority: definition.priority,
            completed: false,
        })
        .collect();

    boosters.sort_by_key(|booster| booster.priority);
    boosters
}

pub(crate) fn profile_completeness(profile: &FinancialProfile) -> u8 {
    let provided = profile.provided_fields() as f64;
    (provided / TRACKED_PROFILE_FIELDS as f64 * 100.0).round() as u8
}
