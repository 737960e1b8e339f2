use std::sync::Arc;

use axum::{extract::State, routing::post, Router};

use super::companion::CompanionResult;
use super::intake::{FinancialProfileSubmission, MatchUnitsRequest};
use super::repository::UnitRepository;
use super::service::{AffordabilityService, MatchUnitsResponse};
use crate::error::AppError;

/// Router builder exposing the calculator and unit-matching endpoints.
pub fn affordability_router<R>(service: Arc<AffordabilityService<R>>) -> Router
where
    R: UnitRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/affordability/calculate",
            post(calculate_handler::<R>),
        )
        .route(
            "/api/v1/affordability/match-units",
            post(match_units_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn calculate_handler<R>(
    State(service): State<Arc<AffordabilityService<R>>>,
    axum::Json(submission): axum::Json<FinancialProfileSubmission>,
) -> Result<axum::Json<CompanionResult>, AppError>
where
    R: UnitRepository + 'static,
{
    let outcome = service.calculate(submission)?;
    Ok(axum::Json(outcome))
}

pub(crate) async fn match_units_handler<R>(
    State(service): State<Arc<AffordabilityService<R>>>,
    axum::Json(request): axum::Json<MatchUnitsRequest>,
) -> Result<axum::Json<MatchUnitsResponse>, AppError>
where
    R: UnitRepository + 'static,
{
    let matches = service.match_units(request)?;
    Ok(axum::Json(matches))
}
