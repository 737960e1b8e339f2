use serde::Serialize;

use super::config::{AcquisitionCostConfig, TransferDutyBracket};
use super::domain::Cents;

const BASIS_POINTS: u128 = 10_000;

/// Once-off costs of buying a property at a given price. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionCosts {
    pub purchase_price: Cents,
    pub transfer_duty: Cents,
    pub bond_registration: Cents,
    pub legal_fees: Cents,
    pub total: Cents,
}

/// Progressive transfer duty over ascending, contiguous brackets.
///
/// Bracket `i` covers `(upper[i-1], upper[i]]` with the first lower bound at zero; the value
/// falling inside each band is taxed at that band's marginal rate.
pub fn transfer_duty(property_value: Cents, brackets: &[TransferDutyBracket]) -> Cents {
    let value = u128::from(property_value.value());
    let mut lower: u128 = 0;
    let mut duty: u128 = 0;

    for bracket in brackets {
        if value <= lower {
            break;
        }

        let upper = bracket
            .upper_bound
            .map_or(value, |bound| u128::from(bound.value()).min(value));
        let taxable = upper.saturating_sub(lower);
        duty += taxable * u128::from(bracket.rate_bps) / BASIS_POINTS;

        match bracket.upper_bound {
            Some(bound) => lower = u128::from(bound.value()),
            None => break,
        }
    }

    Cents(u64::try_from(duty).unwrap_or(u64::MAX))
}

fn flat_fee(amount: Cents, rate_bps: u32) -> Cents {
    let fee = u128::from(amount.value()) * u128::from(rate_bps) / BASIS_POINTS;
    Cents(u64::try_from(fee).unwrap_or(u64::MAX))
}

pub fn acquisition_costs(
    purchase_price: Cents,
    config: &AcquisitionCostConfig,
) -> AcquisitionCosts {
    let transfer_duty = transfer_duty(purchase_price, &config.transfer_duty_brackets);
    let bond_registration = flat_fee(purchase_price, config.bond_registration_bps);
    let legal_fees = flat_fee(purchase_price, config.legal_fees_bps);
    let total = purchase_price
        .saturating_add(transfer_duty)
        .saturating_add(bond_registration)
        .saturating_add(legal_fees);

    AcquisitionCosts {
        purchase_price,
        transfer_duty,
        bond_registration,
        legal_fees,
        total,
    }
}
