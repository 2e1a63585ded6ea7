// ============================================================================
// Interval Construction
// Assemble an interval from year/month/week/day/hour/minute/second parts
// ============================================================================

use crate::domain::interval::{DAYS_PER_WEEK, MICROS_PER_HOUR, MICROS_PER_MINUTE, MONTHS_PER_YEAR};
use crate::domain::{Interval, OverflowMode};
use crate::engine::scale::narrow;
use crate::numeric::{NumericResult, Rounded, Seconds};
use rust_decimal::Decimal;

/// Build an interval from seven independent components.
///
/// - `months = years × 12 + months`
/// - `days = weeks × 7 + days`
/// - `microseconds = seconds + minutes × 60s + hours × 3600s`
///
/// No cross-field normalization happens: 25 hours stay 25 hours.
///
/// # Errors
/// In strict mode, returns `Overflow` when a sum leaves its field's native
/// width. In wrap mode the sum wraps instead.
#[allow(clippy::too_many_arguments)]
pub fn make_interval(
    years: i32,
    months: i32,
    weeks: i32,
    days: i32,
    hours: i32,
    minutes: i32,
    seconds: Seconds,
    mode: OverflowMode,
) -> NumericResult<Interval> {
    let total_months = i128::from(years) * i128::from(MONTHS_PER_YEAR) + i128::from(months);
    let total_days = i128::from(weeks) * i128::from(DAYS_PER_WEEK) + i128::from(days);
    let total_micros = i128::from(seconds.raw_value())
        + i128::from(minutes) * i128::from(MICROS_PER_MINUTE)
        + i128::from(hours) * i128::from(MICROS_PER_HOUR);

    Ok(Interval::new(
        narrow(Rounded::from_i128(total_months), mode)?,
        narrow(Rounded::from_i128(total_days), mode)?,
        narrow(Rounded::from_i128(total_micros), mode)?,
    ))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Fluent builder over [`make_interval`]; unset components are zero.
///
/// # Example
/// ```
/// use calendar_interval::domain::{Interval, OverflowMode};
/// use calendar_interval::engine::IntervalBuilder;
///
/// let iv = IntervalBuilder::new()
///     .with_years(1)
///     .with_weeks(2)
///     .with_hours(25)
///     .build(OverflowMode::Strict)
///     .unwrap();
/// assert_eq!(iv, Interval::new(12, 14, 25 * 3_600_000_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalBuilder {
    years: i32,
    months: i32,
    weeks: i32,
    days: i32,
    hours: i32,
    minutes: i32,
    seconds: Seconds,
}

impl IntervalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    pub fn with_months(mut self, months: i32) -> Self {
        self.months = months;
        self
    }

    pub fn with_weeks(mut self, weeks: i32) -> Self {
        self.weeks = weeks;
        self
    }

    pub fn with_days(mut self, days: i32) -> Self {
        self.days = days;
        self
    }

    pub fn with_hours(mut self, hours: i32) -> Self {
        self.hours = hours;
        self
    }

    pub fn with_minutes(mut self, minutes: i32) -> Self {
        self.minutes = minutes;
        self
    }

    /// Seconds with up to microsecond precision
    pub fn with_seconds(mut self, seconds: Seconds) -> Self {
        self.seconds = seconds;
        self
    }

    /// Seconds given as `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// `PrecisionLoss` beyond six decimal places, `Overflow` beyond 18 digits.
    pub fn with_seconds_decimal(self, seconds: Decimal) -> NumericResult<Self> {
        Ok(self.with_seconds(Seconds::from_decimal(seconds)?))
    }

    /// Assemble the interval under `mode`.
    pub fn build(&self, mode: OverflowMode) -> NumericResult<Interval> {
        make_interval(
            self.years,
            self.months,
            self.weeks,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            mode,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    const STRICT: OverflowMode = OverflowMode::Strict;
    const WRAP: OverflowMode = OverflowMode::Wrap;

    fn secs(s: &str) -> Seconds {
        s.parse().unwrap()
    }

    #[test]
    fn test_all_components() {
        let iv = make_interval(1, 2, 3, 4, 5, 6, secs("7.008009"), STRICT).unwrap();
        assert_eq!(iv.months(), 14);
        assert_eq!(iv.days(), 25);
        assert_eq!(
            iv.microseconds(),
            5 * MICROS_PER_HOUR + 6 * MICROS_PER_MINUTE + 7_008_009
        );
    }

    #[test]
    fn test_mixed_signs_are_not_normalized() {
        let iv = make_interval(1, -13, 1, -8, 25, -61, secs("-0.5"), STRICT).unwrap();
        let micros = 25 * MICROS_PER_HOUR - 61 * MICROS_PER_MINUTE - 500_000;
        assert_eq!(iv, Interval::new(-1, -1, micros));
    }

    #[test]
    fn test_negative_years_with_micro() {
        let iv = make_interval(-10_000, 0, 0, 0, 0, 0, secs("0.000001"), STRICT).unwrap();
        assert_eq!(iv, Interval::new(-120_000, 0, 1));
        assert_eq!(
            make_interval(-10_000, 0, 0, 0, 0, 0, secs("0.000001"), WRAP).unwrap(),
            iv
        );
    }

    #[test]
    fn test_months_overflow() {
        let result = make_interval(i32::MAX, 0, 0, 0, 0, 0, Seconds::ZERO, STRICT);
        assert_eq!(result, Err(NumericError::Overflow));

        let wrapped = make_interval(i32::MAX, 0, 0, 1, 0, 0, Seconds::ZERO, WRAP).unwrap();
        assert_eq!(wrapped, Interval::new(i32::MAX.wrapping_mul(12), 1, 0));
    }

    #[test]
    fn test_months_sum_overflow() {
        // 178956970 years is 2147483640 months; 8 more months cross i32::MAX
        assert!(make_interval(178_956_970, 7, 0, 0, 0, 0, Seconds::ZERO, STRICT).is_ok());
        assert_eq!(
            make_interval(178_956_970, 8, 0, 0, 0, 0, Seconds::ZERO, STRICT),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            make_interval(178_956_970, 8, 0, 0, 0, 0, Seconds::ZERO, WRAP)
                .unwrap()
                .months(),
            i32::MIN
        );
    }

    #[test]
    fn test_days_overflow() {
        let result = make_interval(0, 0, i32::MAX, 0, 0, 0, Seconds::ZERO, STRICT);
        assert_eq!(result, Err(NumericError::Overflow));

        let wrapped = make_interval(0, 0, i32::MAX, 0, 0, 0, Seconds::ZERO, WRAP).unwrap();
        assert_eq!(wrapped.days(), i32::MAX.wrapping_mul(7));
    }

    #[test]
    fn test_extreme_time_components_fit() {
        let iv = make_interval(0, 0, 0, 0, i32::MAX, i32::MAX, Seconds::MAX, STRICT).unwrap();
        assert_eq!(
            iv.microseconds(),
            i64::from(i32::MAX) * MICROS_PER_HOUR
                + i64::from(i32::MAX) * MICROS_PER_MINUTE
                + Seconds::MAX.raw_value()
        );
    }

    #[test]
    fn test_builder() {
        let iv = IntervalBuilder::new()
            .with_months(3)
            .with_days(-2)
            .with_minutes(90)
            .with_seconds_decimal(Decimal::new(15, 1))
            .unwrap()
            .build(STRICT)
            .unwrap();
        assert_eq!(iv, Interval::new(3, -2, 90 * MICROS_PER_MINUTE + 1_500_000));

        assert_eq!(IntervalBuilder::new().build(WRAP).unwrap(), Interval::ZERO);
    }

    #[test]
    fn test_builder_rejects_sub_microsecond_seconds() {
        let result = IntervalBuilder::new().with_seconds_decimal(Decimal::new(1, 7));
        assert_eq!(result, Err(NumericError::PrecisionLoss));
    }
}
