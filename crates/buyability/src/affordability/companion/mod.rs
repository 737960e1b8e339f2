//! Gamified layer over the base calculator: grade, boosters, insights, quick wins, and what-if
//! scenarios.

pub(crate) mod boosters;
pub(crate) mod grade;
pub(crate) mod insights;
pub(crate) mod quick_wins;
pub(crate) mod scenarios;
pub mod views;

pub use views::{
    AccuracyBooster, AffordabilityGrade, CompanionResult, Grade, Insight, InsightAction,
    InsightKind, RepaymentComparison, Scenario, ScenarioKind,
};

use super::calculator::AffordabilityCalculator;
use super::config::AffordabilityConfig;
use super::domain::FinancialProfile;
use boosters::{missing_boosters, profile_completeness};
use grade::grade_for;
use insights::{generate_insights, InsightContext};
use quick_wins::select_quick_wins;
use scenarios::build_scenarios;

/// Stateless wrapper that calls the calculator once for the primary result and once per scenario.
#[derive(Debug, Clone, Default)]
pub struct AffordabilityCompanion {
    calculator: AffordabilityCalculator,
}

impl AffordabilityCompanion {
    pub fn new(config: AffordabilityConfig) -> Self {
        Self::with_calculator(AffordabilityCalculator::new(config))
    }

    pub fn with_calculator(calculator: AffordabilityCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &AffordabilityCalculator {
        &self.calculator
    }

    pub fn enrich(&self, profile: &FinancialProfile) -> CompanionResult {
        let result = self.calculator.calculate(profile);
        let scenarios = build_scenarios(&self.calculator, profile, &result);

        let insights = generate_insights(&InsightContext {
            calculator: &self.calculator,
            profile,
            result: &result,
        });
        let quick_wins =
            select_quick_wins(profile, &scenarios, &self.calculator.config().companion);
        let affordability_grade = grade_for(
            result.tier,
            result.confidence,
            result.factors.debt_to_income_ratio,
        );

        CompanionResult {
            accuracy_score: result.confidence,
            profile_completeness: profile_completeness(profile),
            accuracy_boosters: missing_boosters(profile),
            affordability_grade,
            insights,
            quick_wins,
            scenarios,
            result,
        }
    }
}
