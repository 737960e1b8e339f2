//! Affordability engine: base calculator, gamified companion, unit matcher, and the thin
//! service/router layer that exposes them over HTTP.
//!
//! The calculator, companion, matcher, and cost helpers are pure: no I/O, no shared state.
//! All amounts are [`Cents`] except published unit prices, which are [`Rands`].

pub mod amortization;
pub mod calculator;
pub mod companion;
pub mod config;
pub mod costs;
pub mod domain;
pub mod intake;
pub mod inventory;
pub mod matcher;
mod recommendations;
pub mod repository;
pub mod router;
mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use calculator::{confidence_score, AffordabilityCalculator};
pub use companion::{
    AccuracyBooster, AffordabilityCompanion, AffordabilityGrade, CompanionResult, Grade, Insight,
    InsightKind, RepaymentComparison, Scenario, ScenarioKind,
};
pub use config::AffordabilityConfig;
pub use costs::{acquisition_costs, transfer_duty, AcquisitionCosts};
pub use domain::{
    AffordabilityFactors, AffordabilityResult, AffordabilityTier, Cents, FinancialProfile,
    HouseholdSize, IncomeRange, Rands,
};
pub use intake::{FinancialProfileSubmission, IntakeError, MatchCriteria, MatchUnitsRequest};
pub use inventory::{InventoryError, UnitInventory};
pub use matcher::{MatchLevel, MatchSummary, Unit, UnitMatchResult, UnitMatcher};
pub use repository::{DevelopmentId, RepositoryError, UnitRecord, UnitRepository};
pub use router::affordability_router;
pub use service::{
    AffordabilityService, AffordabilityServiceError, MatchUnitsResponse, MatchedUnit,
};
