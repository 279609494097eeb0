//! Decimal formatting for `roundedValue`.
//!
//! Rule: take the shortest decimal that round-trips to the `f64`, round it
//! half-up (away from zero) to `decimals` places, then drop trailing
//! fractional zeros. The decimal point is always `.` and digits are never
//! grouped.
//!
//! `1.005` -> `1.01`, `80.75999999999999` -> `80.76`, `3440441.0` -> `3440441`.

use crate::error::{EvalError, EvalResult};

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub const DEFAULT_DECIMALS: u32 = 2;

// From 2^53 on every f64 is an integer, so rounding leaves it unchanged.
const INTEGRAL_FROM: f64 = 9_007_199_254_740_992.0;

// Fractional digits a `Decimal` can carry.
const MAX_SCALE: usize = 28;

pub fn format_rounded(value: f64, decimals: u32) -> EvalResult<String> {
    if !value.is_finite() {
        return Err(EvalError::NonFiniteResult(value));
    }

    // `Display` for f64 is the shortest round-trip form and never uses an
    // exponent.
    let repr = value.to_string();
    if value.abs() >= INTEGRAL_FROM {
        return Ok(repr);
    }

    let rounded = to_decimal(&repr)?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    if rounded.is_zero() {
        return Ok("0".to_string());
    }
    Ok(rounded.to_string())
}

/// Parse a plain decimal string, dropping fractional digits past what a
/// `Decimal` can hold. Those digits sit far below any rounding position.
fn to_decimal(repr: &str) -> EvalResult<Decimal> {
    let clipped = match repr.split_once('.') {
        Some((int_part, frac_part)) if frac_part.len() > MAX_SCALE => {
            format!("{}.{}", int_part, &frac_part[..MAX_SCALE])
        }
        _ => repr.to_string(),
    };
    Decimal::from_str(&clipped).map_err(|source| EvalError::DecimalConversion {
        value: repr.to_string(),
        source,
    })
}
