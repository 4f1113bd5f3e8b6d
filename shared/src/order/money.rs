//! Money calculation utilities using rust_decimal for precision
//!
//! Prices travel as `f64` on the wire and in storage. Arithmetic is done in
//! `Decimal` and converted back rounded to cents.

use rust_decimal::prelude::*;

/// 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Finite values beyond the `Decimal` range saturate at its bounds.
/// Non-finite input is logged and treated as zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        if value.is_finite() {
            tracing::warn!(value = ?value, "Monetary value out of range, saturating");
            return if value > 0.0 { Decimal::MAX } else { Decimal::MIN };
        }
        tracing::error!(
            value = ?value,
            "Non-finite f64 in monetary calculation, defaulting to zero"
        );
        Decimal::ZERO
    })
}

/// `unit * quantity`, saturating instead of overflowing
#[inline]
pub fn line_total(unit: Decimal, quantity: u32) -> Decimal {
    unit.saturating_mul(Decimal::from(quantity))
}

/// Round a Decimal to cents
#[inline]
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_cents(value).to_f64().unwrap_or_default()
}

/// Render an amount as dollars: `"$1.00"`, `"-$1.00"`, `"$0.00"`
///
/// The sign goes before the dollar sign. An amount that rounds to zero is
/// printed without a sign.
pub fn format_money(amount: f64) -> String {
    let rounded = round_cents(to_decimal(amount));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${:.2}", sign, rounded.abs())
}
