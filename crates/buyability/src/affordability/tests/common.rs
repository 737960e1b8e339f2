use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::affordability::domain::{Cents, FinancialProfile, Rands};
use crate::affordability::intake::{FinancialProfileSubmission, MatchUnitsRequest};
use crate::affordability::inventory::UnitInventory;
use crate::affordability::repository::{
    DevelopmentId, RepositoryError, UnitRecord, UnitRepository,
};
use crate::affordability::{affordability_router, AffordabilityConfig, AffordabilityService};

pub(super) const HARBOUR_VIEW: &str = "harbour-view";

/// R30,000 income, R8,000 expenses, R50,000 deposit.
pub(super) fn starter_profile() -> FinancialProfile {
    FinancialProfile {
        income: Some(Cents::from_rands(30_000)),
        monthly_expenses: Some(Cents::from_rands(8_000)),
        savings_deposit: Some(Cents::from_rands(50_000)),
        ..FinancialProfile::default()
    }
}

pub(super) fn complete_profile() -> FinancialProfile {
    FinancialProfile {
        income: Some(Cents::from_rands(45_000)),
        combined_income: Some(Cents::from_rands(25_000)),
        monthly_expenses: Some(Cents::from_rands(9_000)),
        monthly_debts: Some(Cents::from_rands(3_500)),
        savings_deposit: Some(Cents::from_rands(250_000)),
        income_range: None,
        dependents: Some(1),
        credit_score: Some(760),
    }
}

pub(super) fn indebted_profile() -> FinancialProfile {
    FinancialProfile {
        income: Some(Cents::from_rands(20_000)),
        monthly_expenses: Some(Cents::from_rands(6_000)),
        monthly_debts: Some(Cents::from_rands(9_000)),
        savings_deposit: Some(Cents::from_rands(5_000)),
        ..FinancialProfile::default()
    }
}

/// Payload a client would send for `profile`.
pub(super) fn submission(profile: &FinancialProfile) -> FinancialProfileSubmission {
    let amount = |value: Option<Cents>| {
        value.map(|cents| i64::try_from(cents.value()).expect("fixture amount fits i64"))
    };
    FinancialProfileSubmission {
        income: amount(profile.income),
        combined_income: amount(profile.combined_income),
        monthly_expenses: amount(profile.monthly_expenses),
        monthly_debts: amount(profile.monthly_debts),
        savings_deposit: amount(profile.savings_deposit),
        income_range: profile.income_range,
        dependents: profile.dependents.map(i64::from),
        credit_score: profile.credit_score.map(i64::from),
    }
}

pub(super) fn unit(id: &str, price: Option<u64>) -> UnitRecord {
    UnitRecord {
        id: id.to_string(),
        price: price.map(Rands),
        unit_type: "2 Bed Apartment".to_string(),
    }
}

/// Harbour View priced around an R2,000,000 budget, plus one unpriced penthouse.
pub(super) fn inventory() -> UnitInventory {
    let mut inventory = UnitInventory::default();
    let development = DevelopmentId(HARBOUR_VIEW.to_string());
    for record in [
        unit("HV-101", Some(1_600_000)),
        unit("HV-102", Some(1_900_000)),
        unit("HV-PH", None),
        unit("HV-201", Some(2_198_000)),
        unit("HV-202", Some(2_220_000)),
    ] {
        inventory.insert(development.clone(), record);
    }
    inventory
}

pub(super) fn match_request(development_id: &str) -> MatchUnitsRequest {
    MatchUnitsRequest {
        development_id: development_id.to_string(),
        affordability_max: 200_000_000,
        monthly_payment_capacity: Cents::from_rands(20_000).value() as i64,
        deposit: Cents::from_rands(100_000).value() as i64,
    }
}

pub(super) fn build_service() -> AffordabilityService<UnitInventory> {
    AffordabilityService::new(Arc::new(inventory()), AffordabilityConfig::default())
}

pub(super) fn router_with_service<R>(service: AffordabilityService<R>) -> axum::Router
where
    R: UnitRepository + 'static,
{
    affordability_router(Arc::new(service))
}

pub(super) struct UnavailableUnits;

impl UnitRepository for UnavailableUnits {
    fn units_for_development(
        &self,
        _development_id: &DevelopmentId,
    ) -> Result<Vec<UnitRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("listing feed offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
