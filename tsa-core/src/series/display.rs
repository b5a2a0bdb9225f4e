use rust_decimal::{Decimal, RoundingStrategy};

use crate::{DisplayStats, DisplayValue, Stats, TsaError};

/// Round a statistic to two decimal places for presentation.
///
/// The exact binary value of `value` is converted first and then rounded
/// half away from zero. Literals that are not exactly representable therefore
/// round according to their true value: `2.005_f64` is stored as
/// `2.00499999...` and displays as `2.00`, while the exact `0.125` displays as
/// `0.13`. Finite values too large for a two-place `Decimal` are whole
/// numbers and are kept as [`DisplayValue::Wide`].
///
/// ```
/// use tsa_core::round_for_display;
///
/// assert_eq!(round_for_display(2.005).unwrap().to_string(), "2.00");
/// assert_eq!(round_for_display(0.125).unwrap().to_string(), "0.13");
/// assert_eq!(round_for_display(20.0).unwrap().to_string(), "20.00");
/// assert_eq!(round_for_display(1e30).unwrap().to_string(), "1000000000000000019884624838656.00");
/// ```
///
/// # Errors
/// Returns `TsaError::InvalidArg` if `value` is NaN or infinite.
pub fn round_for_display(value: f64) -> Result<DisplayValue, TsaError> {
    if !value.is_finite() {
        return Err(TsaError::InvalidArg(format!(
            "{value} cannot be displayed as a decimal"
        )));
    }
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return Ok(DisplayValue::Wide(value));
    };
    let mut rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // rounding leaves short values alone; pad them so "20" renders as "20.00"
    rounded.rescale(2);
    if rounded.scale() < 2 {
        // no room left in the 96-bit mantissa for two places
        return Ok(DisplayValue::Wide(value));
    }
    Ok(DisplayValue::Exact(rounded))
}

/// Presentation copy of `stats`; the input is left untouched.
///
/// # Errors
/// See [`round_for_display`].
pub fn display_stats(stats: &Stats) -> Result<DisplayStats, TsaError> {
    Ok(DisplayStats {
        min: round_for_display(stats.min)?,
        max: round_for_display(stats.max)?,
        mean: round_for_display(stats.mean)?,
    })
}
