use super::amortization::max_principal;
use super::config::AffordabilityConfig;
use super::domain::{
    AffordabilityFactors, AffordabilityResult, Cents, FinancialProfile, HouseholdSize,
};
use super::recommendations::{recommend, RecommendationContext};
use super::scoring::{qualification_score, QualificationSignals};

/// Stateless calculator turning a financial profile into a purchasing-power estimate.
///
/// The calculator owns nothing but its configuration, so identical profiles always produce
/// identical results and a single instance can be shared freely across requests.
#[derive(Debug, Clone, Default)]
pub struct AffordabilityCalculator {
    config: AffordabilityConfig,
}

impl AffordabilityCalculator {
    pub fn new(config: AffordabilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AffordabilityConfig {
        &self.config
    }

    pub fn calculate(&self, profile: &FinancialProfile) -> AffordabilityResult {
        let household = HouseholdSize::for_profile(profile);
        let disposable = self.monthly_disposable_income(profile, household);
        let capacity = Cents::from_f64(disposable.as_f64() * self.config.housing_ratio);

        let confidence = confidence_score(profile);
        let interest_rate = self.config.rate_for_confidence(confidence);
        let term = self.config.loan_term_months;

        let max_loan = Cents::from_f64(max_principal(capacity.as_f64(), interest_rate, term));
        let deposit = profile.deposit();
        let affordability_max = max_loan.saturating_add(deposit);
        let affordability_min =
            Cents::from_f64(affordability_max.as_f64() * self.config.min_to_max_ratio)
                .min(affordability_max);

        let signals = QualificationSignals::from_profile(profile, capacity.as_f64());
        let tier = self
            .config
            .tier_thresholds
            .tier_for(qualification_score(&signals));

        let loan_to_value_ratio = if affordability_max.is_zero() {
            0.0
        } else {
            max_loan.as_f64() / affordability_max.as_f64() * 100.0
        };
        let recommended_down_payment = Cents::from_f64(
            affordability_max.as_f64() * self.config.recommended_deposit_ratio,
        );

        let recommendations = recommend(&RecommendationContext {
            tier,
            confidence,
            has_income: signals.has_income,
            deposit,
            recommended_down_payment,
        });

        AffordabilityResult {
            tier,
            affordability_min,
            affordability_max,
            monthly_payment_capacity: capacity,
            confidence,
            interest_rate,
            loan_term_months: term,
            household,
            factors: AffordabilityFactors {
                debt_to_income_ratio: round_to_hundredths(signals.debt_to_income),
                loan_to_value_ratio: round_to_hundredths(loan_to_value_ratio),
                monthly_disposable_income: disposable,
                recommended_down_payment,
            },
            recommendations,
        }
    }

    fn monthly_disposable_income(
        &self,
        profile: &FinancialProfile,
        household: HouseholdSize,
    ) -> Cents {
        let baseline = self.config.household_baselines.for_household(household);
        let outgoings = baseline
            .saturating_add(profile.monthly_expenses())
            .saturating_add(profile.monthly_debts());
        profile.monthly_income().saturating_sub(outgoings)
    }
}

/// Completeness weighting of the inputs, not a probability.
pub fn confidence_score(profile: &FinancialProfile) -> u8 {
    let mut score: u8 = 0;

    if profile.has_income() {
        score += 40;
    }

    score += match (
        profile.monthly_expenses.is_some(),
        profile.monthly_debts.is_some(),
    ) {
        (true, true) => 30,
        (true, false) | (false, true) => 15,
        (false, false) => 0,
    };

    if profile.savings_deposit.is_some() {
        score += 20;
    }
    if profile.credit_score.is_some() {
        score += 10;
    }

    score.min(100)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
