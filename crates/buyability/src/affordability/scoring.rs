use super::domain::FinancialProfile;

/// Ratios feeding the qualification tier, all in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct QualificationSignals {
    pub debt_to_income: f64,
    pub payment_to_income: f64,
    pub down_payment_ratio: f64,
    pub has_income: bool,
    pub has_capacity: bool,
    pub credit_score: Option<u16>,
}

const DTI_WEIGHT: f64 = 0.3;
const PTI_WEIGHT: f64 = 0.4;
const DOWN_PAYMENT_WEIGHT: f64 = 0.3;
const PROPERTY_VALUE_MULTIPLE: f64 = 10.0;

impl QualificationSignals {
    pub(crate) fn from_profile(profile: &FinancialProfile, capacity: f64) -> Self {
        let monthly_income = profile.monthly_income().as_f64();
        let has_income = monthly_income > 0.0;

        let (debt_to_income, payment_to_income) = if has_income {
            (
                profile.monthly_debts().as_f64() / monthly_income * 100.0,
                capacity / monthly_income * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        // Rough property value proxy: ten times the sustainable repayment.
        let property_value = capacity * PROPERTY_VALUE_MULTIPLE;
        let down_payment_ratio = if property_value > 0.0 {
            profile.deposit().as_f64() / property_value * 100.0
        } else {
            0.0
        };

        Self {
            debt_to_income,
            payment_to_income,
            down_payment_ratio,
            has_income,
            has_capacity: capacity > 0.0,
            credit_score: profile.credit_score,
        }
    }
}

fn ratio_score(ratio_pct: f64) -> f64 {
    (100.0 - (ratio_pct - 30.0) * 5.0).max(0.0)
}

pub(crate) fn credit_adjustment(credit_score: Option<u16>) -> f64 {
    match credit_score {
        Some(score) if score >= 750 => 10.0,
        Some(score) if score >= 650 => 5.0,
        Some(score) if score >= 550 => 0.0,
        Some(_) => -10.0,
        None => 0.0,
    }
}

/// Weighted composite of the debt, repayment, and deposit sub-scores plus the credit adjustment.
///
/// Without income there is nothing to service a bond from, so both income ratios score zero.
/// Likewise a buyer with no repayment capacity earns nothing for the repayment ratio.
pub(crate) fn qualification_score(signals: &QualificationSignals) -> f64 {
    let (dti_score, pti_score) = match (signals.has_income, signals.has_capacity) {
        (false, _) => (0.0, 0.0),
        (true, false) => (ratio_score(signals.debt_to_income), 0.0),
        (true, true) => (
            ratio_score(signals.debt_to_income),
            ratio_score(signals.payment_to_income),
        ),
    };
    let down_payment_score = (signals.down_payment_ratio * 2.0).clamp(0.0, 100.0);

    DTI_WEIGHT * dti_score
        + PTI_WEIGHT * pti_score
        + DOWN_PAYMENT_WEIGHT * down_payment_score
        + credit_adjustment(signals.credit_score)
}
