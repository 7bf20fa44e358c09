use crate::errors::Error;
use crate::types::ConversionRate;

/// Largest scale whose power of ten still fits comfortably in an `i128`.
pub const MAX_RATE_DECIMALS: u32 = 18;

pub fn scale(decimals: u32) -> Option<i128> {
    if decimals > MAX_RATE_DECIMALS {
        return None;
    }
    10i128.checked_pow(decimals)
}

/// Convert a native amount into its token entitlement.
///
/// The product is formed before dividing by the scale, so the only rounding
/// is the final floor to the rate's precision.
pub fn to_tokens(native_amount: i128, rate: &ConversionRate) -> Result<i128, Error> {
    let scale = scale(rate.decimals).ok_or(Error::RateOverflow)?;
    native_amount
        .checked_mul(rate.tokens_per_unit)
        .map(|product| product / scale)
        .ok_or(Error::RateOverflow)
}
