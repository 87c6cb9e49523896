//! Common utility functions for dosage calculations.

use rust_decimal::Decimal;

/// Rounds a milligram quantity to exactly one decimal place using half-up
/// rounding.
///
/// Values at exactly 0.05 are rounded up to 0.1 (away from zero), which is
/// how every displayed dosage figure is rounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use dose_core::calculations::common::round_tenth_mg;
///
/// assert_eq!(round_tenth_mg(dec!(46.64)), dec!(46.6));
/// assert_eq!(round_tenth_mg(dec!(46.65)), dec!(46.7));
/// assert_eq!(round_tenth_mg(dec!(46.66)), dec!(46.7));
/// assert_eq!(round_tenth_mg(dec!(-46.65)), dec!(-46.7)); // Away from zero
/// ```
pub fn round_tenth_mg(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
