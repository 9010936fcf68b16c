//! Pricing - pure order-summary calculation over `rust_decimal`

mod calculator;
mod money;

pub use calculator::compute_summary;
pub use money::{round_money, to_decimal, to_f64, DECIMAL_PLACES};
