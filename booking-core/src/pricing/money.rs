//! Money conversion helpers
//!
//! Catalog JSON carries plain `f64` amounts; they are lifted to
//! `Decimal` at the boundary and every intermediate figure stays in
//! full precision. Rounding happens exactly once per emitted figure.

use rust_decimal::prelude::*;

/// Monetary precision (2 decimal places)
pub const DECIMAL_PLACES: u32 = 2;

/// Convert an f64 catalog amount to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert a Decimal back to f64 with monetary rounding
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or(0.0)
}

/// Round to monetary precision, midpoint away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
