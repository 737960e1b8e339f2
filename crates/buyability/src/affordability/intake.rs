//! Boundary validation turning raw JSON payloads into the engine's typed inputs.
//!
//! Payload numbers are accepted as signed integers so that a negative amount is reported with
//! the offending field instead of surfacing as a generic deserialization failure.

use serde::{Deserialize, Serialize};

use super::domain::{Cents, FinancialProfile, IncomeRange};
use super::repository::DevelopmentId;

pub const MIN_CREDIT_SCORE: i64 = 300;
pub const MAX_CREDIT_SCORE: i64 = 850;

/// Validation errors raised before a request reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} must not be negative (found {value})")]
    NegativeAmount { field: &'static str, value: i64 },
    #[error("{field} must be between 0 and {max} (found {value})")]
    CountOutOfRange {
        field: &'static str,
        value: i64,
        max: u32,
    },
    #[error("creditScore must be between 300 and 850 (found {found})")]
    CreditScoreOutOfRange { found: i64 },
    #[error("developmentId must not be empty")]
    MissingDevelopment,
}

impl IntakeError {
    pub fn field(&self) -> &'static str {
        match self {
            IntakeError::NegativeAmount { field, .. }
            | IntakeError::CountOutOfRange { field, .. } => *field,
            IntakeError::CreditScoreOutOfRange { .. } => "creditScore",
            IntakeError::MissingDevelopment => "developmentId",
        }
    }
}

/// Raw calculator payload as submitted by the buyer wizard. Amounts are in cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfileSubmission {
    #[serde(default)]
    pub income: Option<i64>,
    #[serde(default)]
    pub combined_income: Option<i64>,
    #[serde(default)]
    pub monthly_expenses: Option<i64>,
    #[serde(default)]
    pub monthly_debts: Option<i64>,
    #[serde(default)]
    pub savings_deposit: Option<i64>,
    #[serde(default)]
    pub income_range: Option<IncomeRange>,
    #[serde(default)]
    pub dependents: Option<i64>,
    #[serde(default)]
    pub credit_score: Option<i64>,
}

impl FinancialProfileSubmission {
    pub fn validate(self) -> Result<FinancialProfile, IntakeError> {
        let credit_score = self.credit_score.map(credit_score).transpose()?;

        Ok(FinancialProfile {
            income: optional_amount("income", self.income)?,
            combined_income: optional_amount("combinedIncome", self.combined_income)?,
            monthly_expenses: optional_amount("monthlyExpenses", self.monthly_expenses)?,
            monthly_debts: optional_amount("monthlyDebts", self.monthly_debts)?,
            savings_deposit: optional_amount("savingsDeposit", self.savings_deposit)?,
            income_range: self.income_range,
            dependents: self
                .dependents
                .map(|value| count("dependents", value))
                .transpose()?,
            credit_score,
        })
    }
}

/// Raw unit-matching payload. Amounts are in cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUnitsRequest {
    pub development_id: String,
    pub affordability_max: i64,
    #[serde(default)]
    pub monthly_payment_capacity: i64,
    #[serde(default)]
    pub deposit: i64,
}

/// Validated unit-matching inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    pub development_id: DevelopmentId,
    pub affordability_max: Cents,
    pub monthly_payment_capacity: Cents,
    pub deposit: Cents,
}

impl MatchUnitsRequest {
    pub fn validate(self) -> Result<MatchCriteria, IntakeError> {
        let development_id = self.development_id.trim();
        if development_id.is_empty() {
            return Err(IntakeError::MissingDevelopment);
        }

        Ok(MatchCriteria {
            development_id: DevelopmentId(development_id.to_string()),
            affordability_max: amount("affordabilityMax", self.affordability_max)?,
            monthly_payment_capacity: amount(
                "monthlyPaymentCapacity",
                self.monthly_payment_capacity,
            )?,
            deposit: amount("deposit", self.deposit)?,
        })
    }
}

fn amount(field: &'static str, value: i64) -> Result<Cents, IntakeError> {
    u64::try_from(value)
        .map(Cents)
        .map_err(|_| IntakeError::NegativeAmount { field, value })
}

fn optional_amount(
    field: &'static str,
    value: Option<i64>,
) -> Result<Option<Cents>, IntakeError> {
    value.map(|value| amount(field, value)).transpose()
}

fn credit_score(found: i64) -> Result<u16, IntakeError> {
    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&found) {
        return Err(IntakeError::CreditScoreOutOfRange { found });
    }
    u16::try_from(found).map_err(|_| IntakeError::CreditScoreOutOfRange { found })
}

fn count(field: &'static str, value: i64) -> Result<u32, IntakeError> {
    u32::try_from(value).map_err(|_| IntakeError::CountOutOfRange {
        field,
        value,
        max: u32::MAX,
    })
}
