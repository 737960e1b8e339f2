use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::companion::{AffordabilityCompanion, CompanionResult};
use super::config::AffordabilityConfig;
use super::intake::{FinancialProfileSubmission, IntakeError, MatchUnitsRequest};
use super::matcher::{MatchSummary, UnitMatchResult, UnitMatcher};
use super::repository::{DevelopmentId, RepositoryError, UnitRecord, UnitRepository};

/// Unit record paired with its classification; `matched` is `None` for unpriced units.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedUnit {
    #[serde(flatten)]
    pub unit: UnitRecord,
    #[serde(rename = "match")]
    pub matched: Option<UnitMatchResult>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUnitsResponse {
    pub development_id: DevelopmentId,
    pub units: Vec<MatchedUnit>,
    pub summary: MatchSummary,
}

/// Service composing intake validation, the companion, the matcher, and the unit store.
pub struct AffordabilityService<R> {
    companion: Arc<AffordabilityCompanion>,
    matcher: Arc<UnitMatcher>,
    repository: Arc<R>,
}

impl<R> AffordabilityService<R>
where
    R: UnitRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: AffordabilityConfig) -> Self {
        let matcher = Arc::new(UnitMatcher::new(&config));
        let companion = Arc::new(AffordabilityCompanion::new(config));

        Self {
            companion,
            matcher,
            repository,
        }
    }

    pub fn companion(&self) -> &AffordabilityCompanion {
        &self.companion
    }

    /// Validate a submission and run the full companion calculation.
    pub fn calculate(
        &self,
        submission: FinancialProfileSubmission,
    ) -> Result<CompanionResult, AffordabilityServiceError> {
        let profile = submission.validate()?;
        let outcome = self.companion.enrich(&profile);

        debug!(
            tier = outcome.result.tier.label(),
            confidence = outcome.result.confidence,
            grade = ?outcome.affordability_grade.grade,
            affordability_max = outcome.result.affordability_max.value(),
            "affordability calculated"
        );

        Ok(outcome)
    }

    /// Classify every unit of a development against the buyer's affordability.
    pub fn match_units(
        &self,
        request: MatchUnitsRequest,
    ) -> Result<MatchUnitsResponse, AffordabilityServiceError> {
        let criteria = request.validate()?;
        let records = self
            .repository
            .units_for_development(&criteria.development_id)?;

        let priced: Vec<_> = records.iter().filter_map(UnitRecord::priced_unit).collect();
        let mut matches = self
            .matcher
            .match_units(
                &priced,
                criteria.affordability_max,
                criteria.monthly_payment_capacity,
                criteria.deposit,
            )
            .into_iter();

        let units: Vec<MatchedUnit> = records
            .into_iter()
            .map(|unit| {
                let matched = if unit.price.is_some() {
                    matches.next()
                } else {
                    None
                };
                MatchedUnit { unit, matched }
            })
            .collect();

        let summary: MatchSummary = units.iter().map(|unit| unit.matched.as_ref()).collect();

        info!(
            development = %criteria.development_id,
            units = summary.total,
            affordable = summary.affordable(),
            out_of_reach = summary.out_of_reach,
            "units matched"
        );

        Ok(MatchUnitsResponse {
            development_id: criteria.development_id,
            units,
            summary,
        })
    }
}

/// Error raised by the affordability service.
#[derive(Debug, thiserror::Error)]
pub enum AffordabilityServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
