//! Money calculation utilities using rust_decimal for precision
//!
//! Totals are computed in `Decimal`, then converted to `f64` for
//! storage/serialization.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `price × quantity`, or `None` on overflow
pub fn line_total(price: f64, quantity: i64) -> Option<Decimal> {
    to_decimal(price).checked_mul(Decimal::from(quantity))
}

/// Sum of line totals, or `None` on overflow
pub fn sum_lines<I>(lines: I) -> Option<Decimal>
where
    I: IntoIterator<Item = (f64, i64)>,
{
    lines
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, (price, qty)| {
            acc.checked_add(line_total(price, qty)?)
        })
}
