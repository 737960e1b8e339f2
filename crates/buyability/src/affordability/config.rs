use serde::{Deserialize, Serialize};

use super::domain::{AffordabilityTier, Cents, HouseholdSize};

/// Every tunable constant used by the calculator, companion, matcher, and cost helpers.
///
/// `Default` carries the South African figures the engine ships with; regional deployments
/// replace the whole struct rather than patching individual algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityConfig {
    /// Annual prime lending rate in percent.
    pub prime_rate: f64,
    pub risk_margins: RiskMargins,
    pub loan_term_months: u32,
    /// Share of disposable income that can go towards a bond repayment.
    pub housing_ratio: f64,
    /// Lower end of the affordable range as a fraction of the upper end.
    pub min_to_max_ratio: f64,
    pub household_baselines: HouseholdBaselines,
    pub tier_thresholds: TierThresholds,
    pub recommended_deposit_ratio: f64,
    pub matcher: MatcherConfig,
    pub acquisition: AcquisitionCostConfig,
    pub companion: CompanionConfig,
}

impl Default for AffordabilityConfig {
    fn default() -> Self {
        Self {
            prime_rate: 11.75,
            risk_margins: RiskMargins::default(),
            loan_term_months: 240,
            housing_ratio: 0.35,
            min_to_max_ratio: 0.8,
            household_baselines: HouseholdBaselines::default(),
            tier_thresholds: TierThresholds::default(),
            recommended_deposit_ratio: 0.10,
            matcher: MatcherConfig::default(),
            acquisition: AcquisitionCostConfig::default(),
            companion: CompanionConfig::default(),
        }
    }
}

impl AffordabilityConfig {
    pub fn with_prime_rate(mut self, prime_rate: f64) -> Self {
        self.prime_rate = prime_rate;
        self
    }

    /// Annual rate the calculator assumes for a profile with the given confidence.
    pub fn rate_for_confidence(&self, confidence: u8) -> f64 {
        self.prime_rate + self.risk_margins.margin_for(confidence)
    }
}

/// Risk margin over prime; steps down as the profile becomes more complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMargins {
    pub high_confidence_from: u8,
    pub high_confidence_margin: f64,
    pub medium_confidence_from: u8,
    pub medium_confidence_margin: f64,
    pub low_confidence_margin: f64,
}

impl Default for RiskMargins {
    fn default() -> Self {
        Self {
            high_confidence_from: 80,
            high_confidence_margin: 0.5,
            medium_confidence_from: 50,
            medium_confidence_margin: 1.5,
            low_confidence_margin: 2.5,
        }
    }
}

impl RiskMargins {
    pub fn margin_for(&self, confidence: u8) -> f64 {
        if confidence >= self.high_confidence_from {
            self.high_confidence_margin
        } else if confidence >= self.medium_confidence_from {
            self.medium_confidence_margin
        } else {
            self.low_confidence_margin
        }
    }
}

/// Baseline monthly living costs assumed before declared expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdBaselines {
    pub single: Cents,
    pub couple: Cents,
    pub family: Cents,
}

impl Default for HouseholdBaselines {
    fn default() -> Self {
        Self {
            single: Cents::from_rands(8_000),
            couple: Cents::from_rands(12_000),
            family: Cents::from_rands(15_000),
        }
    }
}

impl HouseholdBaselines {
    pub fn for_household(&self, household: HouseholdSize) -> Cents {
        match household {
            HouseholdSize::Single => self.single,
            HouseholdSize::Couple => self.couple,
            HouseholdSize::Family => self.family,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 70.0,
            medium: 40.0,
        }
    }
}

impl TierThresholds {
    pub fn tier_for(&self, score: f64) -> AffordabilityTier {
        if score >= self.high {
            AffordabilityTier::High
        } else if score >= self.medium {
            AffordabilityTier::Medium
        } else {
            AffordabilityTier::Low
        }
    }
}

/// Classification bands, in percent of the buyer's maximum price, plus the financing assumptions
/// used to quote a unit's repayment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub perfect_up_to_pct: u64,
    pub good_up_to_pct: u64,
    pub stretch_up_to_pct: u64,
    /// Margin over prime used when quoting unit repayments.
    pub rate_margin: f64,
    pub minimum_deposit_ratio: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            perfect_up_to_pct: 80,
            good_up_to_pct: 95,
            stretch_up_to_pct: 110,
            rate_margin: 1.5,
            minimum_deposit_ratio: 0.10,
        }
    }
}

/// One progressive transfer-duty band. `upper_bound: None` marks the open top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDutyBracket {
    pub upper_bound: Option<Cents>,
    /// Marginal rate in basis points.
    pub rate_bps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionCostConfig {
    /// Ascending, contiguous bands starting at zero.
    pub transfer_duty_brackets: Vec<TransferDutyBracket>,
    pub bond_registration_bps: u32,
    pub legal_fees_bps: u32,
}

impl Default for AcquisitionCostConfig {
    fn default() -> Self {
        // SARS transfer duty table effective 1 March 2024.
        let bracket = |upper: Option<u64>, rate_bps| TransferDutyBracket {
            upper_bound: upper.map(Cents::from_rands),
            rate_bps,
        };

        Self {
            transfer_duty_brackets: vec![
                bracket(Some(1_100_000), 0),
                bracket(Some(1_512_500), 300),
                bracket(Some(2_117_500), 600),
                bracket(Some(2_722_500), 800),
                bracket(Some(12_100_000), 1_100),
                bracket(None, 1_300),
            ],
            bond_registration_bps: 120,
            legal_fees_bps: 150,
        }
    }
}

/// Perturbations and rule thresholds used by the companion layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanionConfig {
    pub income_uplift_ratio: f64,
    pub expense_reduction: Cents,
    pub deposit_increase: Cents,
    pub expense_quick_win_threshold: Cents,
    pub debt_quick_win_threshold: Cents,
    pub co_applicant_income_threshold: Cents,
    pub healthy_debt_to_income: f64,
    pub high_debt_to_income: f64,
    pub target_debt_to_income: f64,
    pub strong_deposit_ratio: f64,
    pub minimum_deposit_ratio: f64,
    pub complete_profile_confidence: u8,
    pub max_quick_wins: usize,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            income_uplift_ratio: 0.20,
            expense_reduction: Cents::from_rands(2_000),
            deposit_increase: Cents::from_rands(50_000),
            expense_quick_win_threshold: Cents::from_rands(5_000),
            debt_quick_win_threshold: Cents::from_rands(2_000),
            co_applicant_income_threshold: Cents::from_rands(25_000),
            healthy_debt_to_income: 30.0,
            high_debt_to_income: 40.0,
            target_debt_to_income: 30.0,
            strong_deposit_ratio: 0.15,
            minimum_deposit_ratio: 0.10,
            complete_profile_confidence: 70,
            max_quick_wins: 3,
        }
    }
}
