use std::fmt;

use serde::{Deserialize, Serialize};

/// Monetary amount in the minor currency unit (cents).
///
/// Every profile field and every engine output is expressed in `Cents`. Whole-currency prices
/// coming from unit inventories use [`Rands`] and must be converted with [`Rands::to_cents`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn from_rands(rands: u64) -> Self {
        Cents(rands.saturating_mul(100))
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Rounds a float amount to the nearest cent; negative and non-finite input collapses to zero.
    pub fn from_f64(amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            Cents(amount.round() as u64)
        } else {
            Cents::ZERO
        }
    }

    pub const fn saturating_add(self, other: Cents) -> Cents {
        Cents(self.0.saturating_add(other.0))
    }

    pub const fn saturating_sub(self, other: Cents) -> Cents {
        Cents(self.0.saturating_sub(other.0))
    }

    /// Signed difference `self - other`, used for scenario deltas.
    pub fn delta_from(self, other: Cents) -> i64 {
        let delta = i128::from(self.0) - i128::from(other.0);
        delta.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Cents {
    /// Renders the amount rounded to the nearest rand, e.g. `R1,250,000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rands = self.0 / 100 + u64::from(self.0 % 100 >= 50);
        write!(f, "R{}", group_thousands(rands))
    }
}

/// Whole currency units, as published on unit price lists.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rands(pub u64);

impl Rands {
    /// The only sanctioned conversion from whole units into the engine's minor units.
    pub const fn to_cents(self) -> Cents {
        Cents::from_rands(self.0)
    }
}

impl fmt::Display for Rands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", group_thousands(self.0))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Coarse income bucket captured when a buyer will not share an exact figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeRange {
    #[serde(rename = "under_10k")]
    Under10k,
    #[serde(rename = "10k_to_20k")]
    From10kTo20k,
    #[serde(rename = "20k_to_35k")]
    From20kTo35k,
    #[serde(rename = "35k_to_50k")]
    From35kTo50k,
    #[serde(rename = "50k_to_75k")]
    From50kTo75k,
    #[serde(rename = "over_75k")]
    Over75k,
}

/// Validated financial facts for a single calculation.
///
/// `None` means the buyer did not provide the field. Arithmetic treats it as zero, while the
/// confidence score and the accuracy boosters treat it as missing information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    #[serde(default)]
    pub income: Option<Cents>,
    #[serde(default)]
    pub combined_income: Option<Cents>,
    #[serde(default)]
    pub monthly_expenses: Option<Cents>,
    #[serde(default)]
    pub monthly_debts: Option<Cents>,
    #[serde(default)]
    pub savings_deposit: Option<Cents>,
    #[serde(default)]
    pub income_range: Option<IncomeRange>,
    #[serde(default)]
    pub dependents: Option<u32>,
    #[serde(default)]
    pub credit_score: Option<u16>,
}

/// Number of optional inputs tracked for profile completeness.
pub const TRACKED_PROFILE_FIELDS: usize = 7;

impl FinancialProfile {
    pub fn monthly_income(&self) -> Cents {
        self.income
            .unwrap_or_default()
            .saturating_add(self.combined_income.unwrap_or_default())
    }

    pub fn monthly_expenses(&self) -> Cents {
        self.monthly_expenses.unwrap_or_default()
    }

    pub fn monthly_debts(&self) -> Cents {
        self.monthly_debts.unwrap_or_default()
    }

    pub fn deposit(&self) -> Cents {
        self.savings_deposit.unwrap_or_default()
    }

    pub fn dependents(&self) -> u32 {
        self.dependents.unwrap_or_default()
    }

    pub fn has_income(&self) -> bool {
        self.income.is_some() || self.combined_income.is_some()
    }

    /// A declared partner income counts even when it is zero.
    pub fn has_partner_income(&self) -> bool {
        self.combined_income.is_some()
    }

    /// Count of the tracked optional fields the buyer has filled in.
    pub fn provided_fields(&self) -> usize {
        [
            self.income.is_some(),
            self.combined_income.is_some(),
            self.monthly_expenses.is_some(),
            self.monthly_debts.is_some(),
            self.savings_deposit.is_some(),
            self.dependents.is_some(),
            self.credit_score.is_some(),
        ]
        .into_iter()
        .filter(|provided| *provided)
        .count()
    }
}

/// Household bucket selecting the baseline living-expense estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdSize {
    Single,
    Couple,
    Family,
}

impl HouseholdSize {
    pub fn for_profile(profile: &FinancialProfile) -> Self {
        if profile.dependents() > 0 {
            Self::Family
        } else if profile.has_partner_income() {
            Self::Couple
        } else {
            Self::Single
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Couple => "Couple",
            Self::Family => "Family",
        }
    }
}

/// Coarse qualification tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordabilityTier {
    Low,
    Medium,
    High,
}

impl AffordabilityTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Derived diagnostics reported alongside the affordability range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityFactors {
    /// Monthly debts as a percentage of monthly income.
    pub debt_to_income_ratio: f64,
    /// Maximum loan as a percentage of the maximum purchase price.
    pub loan_to_value_ratio: f64,
    pub monthly_disposable_income: Cents,
    pub recommended_down_payment: Cents,
}

/// Output of the base calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityResult {
    pub tier: AffordabilityTier,
    pub affordability_min: Cents,
    pub affordability_max: Cents,
    pub monthly_payment_capacity: Cents,
    pub confidence: u8,
    /// Annual rate in percent applied to this profile.
    pub interest_rate: f64,
    pub loan_term_months: u32,
    pub household: HouseholdSize,
    pub factors: AffordabilityFactors,
    pub recommendations: Vec<String>,
}
