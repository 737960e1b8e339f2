use serde::{Deserialize, Serialize};

use super::amortization::monthly_payment;
use super::config::{AffordabilityConfig, MatcherConfig};
use super::domain::{Cents, Rands};

/// Housing unit as published by a development's price list.
///
/// `price` is in whole rands, unlike every other amount in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub price: Rands,
    pub unit_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Perfect,
    Good,
    Stretch,
    OutOfReach,
}

impl MatchLevel {
    pub const fn match_percentage(self) -> u8 {
        match self {
            Self::Perfect => 100,
            Self::Good => 85,
            Self::Stretch => 60,
            Self::OutOfReach => 30,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Comfortably within your budget",
            Self::Good => "A good fit for your budget",
            Self::Stretch => "A stretch; you may need a larger deposit or a co-applicant",
            Self::OutOfReach => "Currently out of reach for your budget",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect",
            Self::Good => "Good",
            Self::Stretch => "Stretch",
            Self::OutOfReach => "Out of reach",
        }
    }

    /// Compares price against the buyer's maximum with exact integer arithmetic so that a unit
    /// priced at exactly a band edge lands inside that band.
    pub fn classify(price: Cents, affordability_max: Cents, bands: &MatcherConfig) -> Self {
        if affordability_max.is_zero() {
            return Self::OutOfReach;
        }

        let scaled_price = u128::from(price.value()) * 100;
        let max = u128::from(affordability_max.value());
        let within = |pct: u64| scaled_price <= max * u128::from(pct);

        if within(bands.perfect_up_to_pct) {
            Self::Perfect
        } else if within(bands.good_up_to_pct) {
            Self::Good
        } else if within(bands.stretch_up_to_pct) {
            Self::Stretch
        } else {
            Self::OutOfReach
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitMatchResult {
    pub unit_id: String,
    pub match_level: MatchLevel,
    pub match_percentage: u8,
    /// Unit price as a percentage of the buyer's maximum; absent when the maximum is zero.
    pub percent_of_max: Option<f64>,
    pub monthly_payment: Cents,
    pub down_payment_needed: Cents,
    pub within_monthly_budget: bool,
    pub message: &'static str,
}

/// Classifies units against an affordability result. Each unit is judged on its own.
#[derive(Debug, Clone)]
pub struct UnitMatcher {
    bands: MatcherConfig,
    annual_rate: f64,
    term_months: u32,
}

impl Default for UnitMatcher {
    fn default() -> Self {
        Self::new(&AffordabilityConfig::default())
    }
}

impl UnitMatcher {
    pub fn new(config: &AffordabilityConfig) -> Self {
        Self {
            bands: config.matcher.clone(),
            annual_rate: config.prime_rate + config.matcher.rate_margin,
            term_months: config.loan_term_months,
        }
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    pub fn match_units(
        &self,
        units: &[Unit],
        affordability_max: Cents,
        monthly_payment_capacity: Cents,
        deposit: Cents,
    ) -> Vec<UnitMatchResult> {
        units
            .iter()
            .map(|unit| self.match_unit(unit, affordability_max, monthly_payment_capacity, deposit))
            .collect()
    }

    pub fn match_unit(
        &self,
        unit: &Unit,
        affordability_max: Cents,
        monthly_payment_capacity: Cents,
        deposit: Cents,
    ) -> UnitMatchResult {
        let price = unit.price.to_cents();
        let match_level = MatchLevel::classify(price, affordability_max, &self.bands);

        let percent_of_max = if affordability_max.is_zero() {
            None
        } else {
            Some(price.as_f64() / affordability_max.as_f64() * 100.0)
        };

        let loan_amount = price.saturating_sub(deposit);
        let monthly_payment = Cents::from_f64(monthly_payment(
            loan_amount.as_f64(),
            self.annual_rate,
            self.term_months,
        ));
        let minimum_deposit = Cents::from_f64(price.as_f64() * self.bands.minimum_deposit_ratio);

        UnitMatchResult {
            unit_id: unit.id.clone(),
            match_level,
            match_percentage: match_level.match_percentage(),
            percent_of_max,
            monthly_payment,
            down_payment_needed: minimum_deposit.saturating_sub(deposit),
            within_monthly_budget: monthly_payment <= monthly_payment_capacity,
            message: match_level.message(),
        }
    }
}

/// Count of units per match level. `unpriced` covers units the matcher could not classify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub total: usize,
    pub perfect: usize,
    pub good: usize,
    pub stretch: usize,
    pub out_of_reach: usize,
    pub unpriced: usize,
}

impl MatchSummary {
    pub fn record(&mut self, level: Option<MatchLevel>) {
        self.total += 1;
        match level {
            Some(MatchLevel::Perfect) => self.perfect += 1,
            Some(MatchLevel::Good) => self.good += 1,
            Some(MatchLevel::Stretch) => self.stretch += 1,
            Some(MatchLevel::OutOfReach) => self.out_of_reach += 1,
            None => self.unpriced += 1,
        }
    }

    pub fn affordable(&self) -> usize {
        self.perfect + self.good
    }
}

impl<'a> FromIterator<Option<&'a UnitMatchResult>> for MatchSummary {
    fn from_iter<I: IntoIterator<Item = Option<&'a UnitMatchResult>>>(iter: I) -> Self {
        let mut summary = Self::default();
        for result in iter {
            summary.record(result.map(|matched| matched.match_level));
        }
        summary
    }
}
