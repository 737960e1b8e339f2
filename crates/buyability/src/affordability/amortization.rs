//! Fixed-rate annuity identities shared by the calculator, the companion, and the matcher.
//!
//! With monthly rate `r = annual / 100 / 12` and term `n` months:
//!
//! - payment   = P × r(1+r)^n / [(1+r)^n − 1]
//! - principal = M × [(1+r)^n − 1] / [r(1+r)^n]
//!
//! A zero rate degenerates to straight-line repayment.

fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Largest principal serviceable by `payment` per month.
pub fn max_principal(payment: f64, annual_rate_pct: f64, term_months: u32) -> f64 {
    if payment <= 0.0 || term_months == 0 {
        return 0.0;
    }

    let r = monthly_rate(annual_rate_pct);
    let n = term_months as i32;
    if r <= 0.0 {
        return payment * f64::from(term_months);
    }

    let growth = (1.0 + r).powi(n);
    payment * (growth - 1.0) / (r * growth)
}

/// Level monthly installment repaying `principal` over the term.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_months: u32) -> f64 {
    if principal <= 0.0 || term_months == 0 {
        return 0.0;
    }

    let r = monthly_rate(annual_rate_pct);
    let n = term_months as i32;
    if r <= 0.0 {
        return principal / f64::from(term_months);
    }

    let growth = (1.0 + r).powi(n);
    principal * r * growth / (growth - 1.0)
}
