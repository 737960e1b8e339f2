//! End-to-end behavior of the affordability workflow through the public service facade: a buyer
//! submits a profile, reads their companion report, then matches the result against a
//! development's price list loaded from CSV.

use std::io::Cursor;
use std::sync::Arc;

use buyability::affordability::{
    acquisition_costs, AffordabilityConfig, AffordabilityService, AffordabilityTier, Cents,
    FinancialProfileSubmission, Grade, MatchLevel, MatchUnitsRequest, ScenarioKind,
    UnitInventory,
};

const INVENTORY: &str = "\
development_id,unit_id,price,unit_type
waterfall-ridge,WR-01,320000,Studio
waterfall-ridge,WR-02,395000,1 Bed Apartment
waterfall-ridge,WR-03,430000,1 Bed Apartment
waterfall-ridge,WR-04,,2 Bed Apartment
waterfall-ridge,WR-05,650000,2 Bed Townhouse
";

fn service() -> AffordabilityService<UnitInventory> {
    let inventory = UnitInventory::from_reader(Cursor::new(INVENTORY)).expect("inventory parses");
    AffordabilityService::new(Arc::new(inventory), AffordabilityConfig::default())
}

fn starter_submission() -> FinancialProfileSubmission {
    FinancialProfileSubmission {
        income: Some(3_000_000),
        monthly_expenses: Some(800_000),
        savings_deposit: Some(5_000_000),
        ..FinancialProfileSubmission::default()
    }
}

#[test]
fn first_time_buyer_quote_then_match() {
    let service = service();

    let quote = service
        .calculate(starter_submission())
        .expect("profile calculates");

    assert_eq!(quote.result.confidence, 75);
    assert_eq!(quote.result.tier, AffordabilityTier::High);
    assert_eq!(quote.affordability_grade.grade, Grade::B);
    assert!(quote.result.affordability_max > quote.result.affordability_min);
    assert!(quote.result.affordability_min > Cents::ZERO);
    assert!(quote.scenario(ScenarioKind::IncreaseIncome).is_some());

    let matches = service
        .match_units(MatchUnitsRequest {
            development_id: "waterfall-ridge".to_string(),
            affordability_max: quote.result.affordability_max.value() as i64,
            monthly_payment_capacity: quote.result.monthly_payment_capacity.value() as i64,
            deposit: 5_000_000,
        })
        .expect("development exists");

    let levels: Vec<_> = matches
        .units
        .iter()
        .map(|unit| unit.matched.as_ref().map(|matched| matched.match_level))
        .collect();
    assert_eq!(
        levels,
        vec![
            Some(MatchLevel::Perfect),
            Some(MatchLevel::Good),
            Some(MatchLevel::Good),
            None,
            Some(MatchLevel::OutOfReach),
        ]
    );
    assert_eq!(matches.summary.affordable(), 3);

    let perfect = matches.units[0].matched.as_ref().expect("priced unit");
    assert!(perfect.within_monthly_budget);
    assert_eq!(perfect.down_payment_needed, Cents::ZERO);
}

#[test]
fn completing_the_profile_raises_accuracy() {
    let service = service();

    let partial = service
        .calculate(starter_submission())
        .expect("profile calculates");
    let complete = service
        .calculate(FinancialProfileSubmission {
            monthly_debts: Some(150_000),
            combined_income: Some(0),
            dependents: Some(0),
            credit_score: Some(720),
            ..starter_submission()
        })
        .expect("profile calculates");

    assert!(complete.accuracy_score > partial.accuracy_score);
    assert_eq!(complete.profile_completeness, 100);
    assert!(complete.accuracy_boosters.is_empty());
    assert!(complete.result.interest_rate < partial.result.interest_rate);
}

#[test]
fn acquisition_costs_for_a_two_million_home() {
    let config = AffordabilityConfig::default();

    let costs = acquisition_costs(Cents::from_rands(2_000_000), &config.acquisition);

    assert_eq!(costs.transfer_duty, Cents::from_rands(41_625));
    assert_eq!(costs.bond_registration, Cents::from_rands(24_000));
    assert_eq!(costs.legal_fees, Cents::from_rands(30_000));
    assert_eq!(costs.total, Cents::from_rands(2_095_625));
}
