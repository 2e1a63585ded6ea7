// ============================================================================
// Scalar Transformation
// Multiply, divide and negate intervals under the dual overflow policy
// ============================================================================
//
// Each field is scaled and narrowed on its own: an overflow in `months`
// fails (strict) or wraps (wrap) without touching `days` or `microseconds`.
// Rounding is half away from zero, computed on the exact binary value of the
// factor.

use crate::domain::{Interval, OverflowMode};
use crate::numeric::{div_round, mul_round, NativeWidth, NumericError, NumericResult, Rounded};

/// Narrow an exact intermediate into a field's native width.
#[inline]
pub(crate) fn narrow<T: NativeWidth>(value: Rounded, mode: OverflowMode) -> NumericResult<T> {
    match mode {
        OverflowMode::Strict => value.checked().ok_or(NumericError::Overflow),
        OverflowMode::Wrap => Ok(value.wrapped()),
    }
}

/// Narrow a scaling result; `None` marks a non-finite product.
#[inline]
fn narrow_scaled<T: NativeWidth>(value: Option<Rounded>, mode: OverflowMode) -> NumericResult<T> {
    match value {
        Some(rounded) => narrow(rounded, mode),
        None if mode.is_strict() => Err(NumericError::Overflow),
        None => Ok(Rounded::ZERO.wrapped()),
    }
}

/// Multiply every field by `factor`, rounding each to the nearest integer.
///
/// # Errors
/// In strict mode, returns `Overflow` if any rounded field leaves its native
/// width or `factor` is NaN or infinite. Never fails in wrap mode, where
/// out-of-range fields wrap and non-finite factors produce zero fields.
///
/// # Example
/// ```
/// use calendar_interval::domain::{Interval, OverflowMode};
/// use calendar_interval::engine::multiply;
///
/// // 1 year 1 second × 0.5 = 6 months 500 milliseconds
/// let iv = Interval::new(12, 0, 1_000_000);
/// let half = multiply(&iv, 0.5, OverflowMode::Strict).unwrap();
/// assert_eq!(half, Interval::new(6, 0, 500_000));
/// ```
pub fn multiply(interval: &Interval, factor: f64, mode: OverflowMode) -> NumericResult<Interval> {
    let months = narrow_scaled(mul_round(i64::from(interval.months()), factor), mode)?;
    let days = narrow_scaled(mul_round(i64::from(interval.days()), factor), mode)?;
    let micros = narrow_scaled(mul_round(interval.microseconds(), factor), mode)?;
    Ok(Interval::new(months, days, micros))
}

/// Divide every field by `divisor`, rounding each to the nearest integer.
///
/// Returns `Ok(None)` for a zero divisor in wrap mode. Dividing by an
/// infinite value yields the zero interval.
///
/// # Errors
/// In strict mode, returns `DivisionByZero` if `divisor` is zero (of either
/// sign), and `Overflow` if a rounded field leaves its native width or the
/// divisor is NaN.
pub fn divide(
    interval: &Interval,
    divisor: f64,
    mode: OverflowMode,
) -> NumericResult<Option<Interval>> {
    if divisor == 0.0 {
        return match mode {
            OverflowMode::Strict => Err(NumericError::DivisionByZero),
            OverflowMode::Wrap => Ok(None),
        };
    }
    let months = narrow_scaled(div_round(i64::from(interval.months()), divisor), mode)?;
    let days = narrow_scaled(div_round(i64::from(interval.days()), divisor), mode)?;
    let micros = narrow_scaled(div_round(interval.microseconds(), divisor), mode)?;
    Ok(Some(Interval::new(months, days, micros)))
}

/// Flip the sign of every field.
///
/// # Errors
/// In strict mode, returns `Overflow` when a field holds its type's minimum.
/// In wrap mode that field stays at the minimum.
pub fn negate(interval: &Interval, mode: OverflowMode) -> NumericResult<Interval> {
    let months = narrow(Rounded::from_i128(-i128::from(interval.months())), mode)?;
    let days = narrow(Rounded::from_i128(-i128::from(interval.days())), mode)?;
    let micros = narrow(Rounded::from_i128(-i128::from(interval.microseconds())), mode)?;
    Ok(Interval::new(months, days, micros))
}
