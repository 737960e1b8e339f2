use super::common::*;
use crate::affordability::domain::{AffordabilityTier, Cents, FinancialProfile, HouseholdSize};
use crate::affordability::{confidence_score, AffordabilityCalculator, AffordabilityConfig};

#[test]
fn starter_profile_produces_a_positive_range() {
    let calculator = AffordabilityCalculator::default();

    let result = calculator.calculate(&starter_profile());

    assert_eq!(result.confidence, 75);
    assert!(result.affordability_max > result.affordability_min);
    assert!(result.affordability_min > Cents::ZERO);
    assert_eq!(result.household, HouseholdSize::Single);
    assert_eq!(result.loan_term_months, 240);
    assert!((result.interest_rate - 13.25).abs() < f64::EPSILON);
    // (R30,000 - R8,000 baseline - R8,000 expenses) * 35%
    assert_eq!(result.monthly_payment_capacity, Cents::from_rands(4_900));
}

#[test]
fn calculation_is_deterministic() {
    let calculator = AffordabilityCalculator::default();

    for profile in [starter_profile(), complete_profile(), indebted_profile()] {
        let first = calculator.calculate(&profile);
        let second = calculator.calculate(&profile);
        assert_eq!(first, second);
    }
}

#[test]
fn empty_profile_degrades_to_a_low_zero_range() {
    let calculator = AffordabilityCalculator::default();

    let result = calculator.calculate(&FinancialProfile::default());

    assert_eq!(result.tier, AffordabilityTier::Low);
    assert_eq!(result.confidence, 0);
    assert_eq!(result.affordability_max, Cents::ZERO);
    assert_eq!(result.affordability_min, Cents::ZERO);
    assert_eq!(result.monthly_payment_capacity, Cents::ZERO);
    assert_eq!(result.factors.loan_to_value_ratio, 0.0);
    assert!(result
        .recommendations
        .iter()
        .any(|line| line.contains("monthly income")));
}

#[test]
fn outputs_stay_finite_and_non_negative() {
    let calculator = AffordabilityCalculator::default();
    let extremes = [
        FinancialProfile {
            income: Some(Cents(1)),
            monthly_debts: Some(Cents(u64::MAX / 4)),
            ..FinancialProfile::default()
        },
        FinancialProfile {
            income: Some(Cents::ZERO),
            savings_deposit: Some(Cents::from_rands(1_000_000)),
            ..FinancialProfile::default()
        },
        FinancialProfile {
            combined_income: Some(Cents::from_rands(500_000)),
            dependents: Some(12),
            credit_score: Some(300),
            ..FinancialProfile::default()
        },
    ];

    for profile in extremes {
        let result = calculator.calculate(&profile);
        assert!(result.confidence <= 100);
        assert!(result.affordability_min <= result.affordability_max);
        assert!(result.interest_rate.is_finite());
        assert!(result.factors.debt_to_income_ratio.is_finite());
        assert!(result.factors.debt_to_income_ratio >= 0.0);
        assert!(result.factors.loan_to_value_ratio.is_finite());
    }
}

#[test]
fn more_income_never_lowers_the_maximum() {
    let calculator = AffordabilityCalculator::default();
    let mut previous = Cents::ZERO;

    for rands in (0..=120_000).step_by(7_500) {
        let profile = FinancialProfile {
            income: Some(Cents::from_rands(rands)),
            ..complete_profile()
        };
        let max = calculator.calculate(&profile).affordability_max;
        assert!(max >= previous, "income R{rands} lowered the maximum");
        previous = max;
    }
}

#[test]
fn more_debt_never_raises_the_maximum() {
    let calculator = AffordabilityCalculator::default();
    let mut previous = Cents(u64::MAX);

    for rands in (0..=60_000).step_by(2_500) {
        let profile = FinancialProfile {
            monthly_debts: Some(Cents::from_rands(rands)),
            ..complete_profile()
        };
        let max = calculator.calculate(&profile).affordability_max;
        assert!(max <= previous, "debts of R{rands} raised the maximum");
        previous = max;
    }
}

#[test]
fn declaring_small_debts_can_raise_the_maximum_through_the_rate() {
    let calculator = AffordabilityCalculator::default();
    let undeclared = starter_profile();
    let declared = FinancialProfile {
        monthly_debts: Some(Cents::from_rands(100)),
        ..starter_profile()
    };

    let without = calculator.calculate(&undeclared);
    let with = calculator.calculate(&declared);

    // The extra 15 confidence points move the buyer into the sharpest margin.
    assert_eq!(without.confidence, 75);
    assert_eq!(with.confidence, 90);
    assert!(with.interest_rate < without.interest_rate);
    assert!(with.monthly_payment_capacity < without.monthly_payment_capacity);
    assert!(with.affordability_max > without.affordability_max);
}

#[test]
fn confidence_counts_provided_fields_even_when_zero() {
    let profile = FinancialProfile {
        income: Some(Cents::ZERO),
        monthly_expenses: Some(Cents::ZERO),
        ..FinancialProfile::default()
    };
    assert_eq!(confidence_score(&profile), 55);

    assert_eq!(confidence_score(&complete_profile()), 100);
}

#[test]
fn complete_profile_earns_the_sharper_rate() {
    let config = AffordabilityConfig::default();
    let calculator = AffordabilityCalculator::new(config.clone());

    let result = calculator.calculate(&complete_profile());

    assert_eq!(result.household, HouseholdSize::Family);
    assert!((result.interest_rate - (config.prime_rate + 0.5)).abs() < f64::EPSILON);
    assert_eq!(result.tier, AffordabilityTier::High);
}

#[test]
fn debts_beyond_disposable_income_collapse_the_range_to_the_deposit() {
    let calculator = AffordabilityCalculator::default();
    let profile = indebted_profile();

    let result = calculator.calculate(&profile);

    assert_eq!(result.factors.debt_to_income_ratio, 45.0);
    assert_eq!(result.monthly_payment_capacity, Cents::ZERO);
    assert_eq!(result.factors.monthly_disposable_income, Cents::ZERO);
    assert_eq!(result.affordability_max, profile.deposit());
    assert_eq!(result.factors.loan_to_value_ratio, 0.0);
}

#[test]
fn buyer_without_repayment_capacity_is_not_told_to_apply() {
    let calculator = AffordabilityCalculator::default();

    let result = calculator.calculate(&indebted_profile());

    assert_eq!(result.monthly_payment_capacity, Cents::ZERO);
    assert_ne!(result.tier, AffordabilityTier::High);
    assert_eq!(result.tier, AffordabilityTier::Low);
    assert!(!result
        .recommendations
        .iter()
        .any(|line| line.contains("strong position")));
    assert!(result
        .recommendations
        .iter()
        .any(|line| line.contains("reducing existing debt")));
}

#[test]
fn deposit_without_income_stays_in_the_low_tier() {
    let calculator = AffordabilityCalculator::default();
    let profile = FinancialProfile {
        savings_deposit: Some(Cents::from_rands(100_000)),
        ..FinancialProfile::default()
    };

    let result = calculator.calculate(&profile);

    assert_eq!(result.tier, AffordabilityTier::Low);
    assert_eq!(result.affordability_max, Cents::from_rands(100_000));
    assert!(result
        .recommendations
        .iter()
        .any(|line| line.contains("Build up your savings deposit")));
    assert!(!result
        .recommendations
        .iter()
        .any(|line| line.contains("reducing existing debt")));
}

#[test]
fn prime_rate_override_lowers_affordability_when_raised() {
    let base = AffordabilityCalculator::default().calculate(&starter_profile());
    let raised = AffordabilityCalculator::new(AffordabilityConfig::default().with_prime_rate(14.0))
        .calculate(&starter_profile());

    assert!(raised.affordability_max < base.affordability_max);
}
