use crate::errors::Error;
use crate::types::{SaleCaps, SaleTotals};

/// Validate a purchase of `amount` by a contributor who has already put in
/// `contributed`. Checks run in a fixed order and stop at the first failure.
pub fn validate_purchase(
    amount: i128,
    contributed: i128,
    totals: &SaleTotals,
    caps: &SaleCaps,
) -> Result<(), Error> {
    if amount < caps.min_contribution {
        return Err(Error::BelowMinimumContribution);
    }

    match contributed.checked_add(amount) {
        Some(sum) if sum <= caps.max_per_contributor => {}
        _ => return Err(Error::PerContributorCapExceeded),
    }

    match totals.total_raised.checked_add(amount) {
        Some(sum) if sum <= caps.hard_cap => Ok(()),
        _ => Err(Error::HardCapExceeded),
    }
}

pub fn soft_cap_met(totals: &SaleTotals, caps: &SaleCaps) -> bool {
    totals.total_raised >= caps.soft_cap
}

pub fn hard_cap_reached(totals: &SaleTotals, caps: &SaleCaps) -> bool {
    totals.total_raised >= caps.hard_cap
}

pub fn remaining_cap(totals: &SaleTotals, caps: &SaleCaps) -> i128 {
    caps.hard_cap.saturating_sub(totals.total_raised).max(0)
}
