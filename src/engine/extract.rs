// ============================================================================
// Field Extraction
// Decompose an interval into a single calendar or time unit
// ============================================================================
//
// Integer division truncates toward zero throughout, so extracting the
// largest unit of a single-signed interval keeps its sign.

use crate::domain::interval::{
    DAYS_PER_MONTH, MICROS_PER_HOUR, MICROS_PER_MINUTE, MONTHS_PER_QUARTER, MONTHS_PER_YEAR,
    YEARS_PER_CENTURY, YEARS_PER_DECADE, YEARS_PER_MILLENNIUM,
};
use crate::domain::{FieldValue, Interval, IntervalField};
use crate::numeric::{Millis, NumericError, NumericResult, Seconds};

/// Extract one field from an interval.
///
/// # Errors
/// Returns `Overflow` for `microsecond`, `second`, `millisecond` and `epoch`
/// when the total microsecond projection does not fit the result type.
/// This holds in both overflow modes: a projection never wraps.
/// Every other field always succeeds.
///
/// # Example
/// ```
/// use calendar_interval::domain::{FieldValue, Interval, IntervalField};
/// use calendar_interval::engine::extract;
///
/// // 10 hours 100 minutes
/// let iv = Interval::from_micros(10 * 3_600_000_000 + 100 * 60_000_000);
/// assert_eq!(extract(IntervalField::Hour, &iv), Ok(FieldValue::BigInt(11)));
/// ```
pub fn extract(field: IntervalField, interval: &Interval) -> NumericResult<FieldValue> {
    let value = match field {
        IntervalField::Millennium => FieldValue::Int(extract_millennia(interval)),
        IntervalField::Century => FieldValue::Int(extract_centuries(interval)),
        IntervalField::Decade => FieldValue::Int(extract_decades(interval)),
        IntervalField::Year => FieldValue::Int(extract_years(interval)),
        IntervalField::Quarter => FieldValue::Int(extract_quarters(interval)),
        IntervalField::Month => FieldValue::Int(extract_months(interval)),
        IntervalField::Day => FieldValue::BigInt(extract_days(interval)),
        IntervalField::Hour => FieldValue::BigInt(extract_hours(interval)),
        IntervalField::Minute => FieldValue::BigInt(extract_minutes(interval)),
        IntervalField::Second => FieldValue::Seconds(extract_seconds(interval)?),
        IntervalField::Millisecond => FieldValue::Millis(extract_millis(interval)?),
        IntervalField::Microsecond => FieldValue::BigInt(extract_micros(interval)?),
        IntervalField::Epoch => FieldValue::Seconds(extract_epoch(interval)?),
    };
    Ok(value)
}

// ============================================================================
// Month-based Units
// ============================================================================

#[inline]
pub fn extract_years(interval: &Interval) -> i32 {
    interval.months() / MONTHS_PER_YEAR
}

#[inline]
pub fn extract_millennia(interval: &Interval) -> i32 {
    extract_years(interval) / YEARS_PER_MILLENNIUM
}

#[inline]
pub fn extract_centuries(interval: &Interval) -> i32 {
    extract_years(interval) / YEARS_PER_CENTURY
}

#[inline]
pub fn extract_decades(interval: &Interval) -> i32 {
    extract_years(interval) / YEARS_PER_DECADE
}

#[inline]
pub fn extract_quarters(interval: &Interval) -> i32 {
    interval.months() / MONTHS_PER_QUARTER
}

#[inline]
pub fn extract_months(interval: &Interval) -> i32 {
    interval.months()
}

// ============================================================================
// Day
// ============================================================================

/// Months at 30 days plus the day field. Sub-day time is ignored.
#[inline]
pub fn extract_days(interval: &Interval) -> i64 {
    i64::from(interval.months()) * DAYS_PER_MONTH + i64::from(interval.days())
}

// ============================================================================
// Time Units (full microsecond projection)
// ============================================================================

#[inline]
pub fn extract_hours(interval: &Interval) -> i64 {
    // |projection| < 2^74, so the quotient is far inside i64
    (interval.total_micros() / i128::from(MICROS_PER_HOUR)) as i64
}

#[inline]
pub fn extract_minutes(interval: &Interval) -> i64 {
    (interval.total_micros() / i128::from(MICROS_PER_MINUTE)) as i64
}

/// Total seconds as decimal(18, 6).
pub fn extract_seconds(interval: &Interval) -> NumericResult<Seconds> {
    Seconds::try_from_raw_wide(interval.total_micros())
}

/// Total milliseconds as decimal(18, 3).
pub fn extract_millis(interval: &Interval) -> NumericResult<Millis> {
    // one microsecond is exactly one unit of the third decimal place
    Millis::try_from_raw_wide(interval.total_micros())
}

pub fn extract_micros(interval: &Interval) -> NumericResult<i64> {
    i64::try_from(interval.total_micros()).map_err(|_| NumericError::Overflow)
}

/// Seconds since the zero interval, as decimal(18, 6).
pub fn extract_epoch(interval: &Interval) -> NumericResult<Seconds> {
    extract_seconds(interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interval::{MICROS_PER_DAY, MICROS_PER_SECOND};

    fn years_months(years: i32, months: i32) -> Interval {
        Interval::new(years * 12 + months, 0, 0)
    }

    fn int(field: IntervalField, iv: &Interval) -> i64 {
        extract(field, iv).unwrap().as_i64().unwrap()
    }

    #[test]
    fn test_year_rolls_extra_months() {
        // 9 years 12 months
        assert_eq!(int(IntervalField::Year, &years_months(9, 12)), 10);
    }

    #[test]
    fn test_quarter() {
        assert_eq!(int(IntervalField::Quarter, &years_months(2, 3)), 9);
        assert_eq!(int(IntervalField::Quarter, &Interval::new(-5, 0, 0)), -1);
    }

    #[test]
    fn test_month_identity() {
        let iv = Interval::new(-27, 400, 1);
        assert_eq!(extract(IntervalField::Month, &iv), Ok(FieldValue::Int(-27)));
    }

    #[test]
    fn test_large_units_ignore_days_and_time() {
        // 999 years 400 days
        let iv = Interval::new(999 * 12, 400, 5 * MICROS_PER_DAY);
        assert_eq!(int(IntervalField::Millennium, &iv), 0);
        assert_eq!(int(IntervalField::Century, &iv), 9);
        assert_eq!(int(IntervalField::Decade, &iv), 99);
        assert_eq!(int(IntervalField::Year, &iv), 999);

        let thousand = years_months(1_000, 0);
        assert_eq!(int(IntervalField::Millennium, &thousand), 1);
    }

    #[test]
    fn test_truncates_toward_zero() {
        let iv = years_months(-1, -11);
        assert_eq!(int(IntervalField::Year, &iv), -1);
        assert_eq!(int(IntervalField::Decade, &iv), 0);

        let iv = Interval::from_micros(-(MICROS_PER_HOUR + 1));
        assert_eq!(int(IntervalField::Hour, &iv), -1);
        assert_eq!(int(IntervalField::Minute, &iv), -60);
    }

    #[test]
    fn test_day_folds_months_only() {
        let iv = Interval::new(2, 5, 47 * MICROS_PER_HOUR);
        assert_eq!(extract(IntervalField::Day, &iv), Ok(FieldValue::BigInt(65)));

        let mixed = Interval::new(1, -45, 0);
        assert_eq!(int(IntervalField::Day, &mixed), -15);
    }

    #[test]
    fn test_hour_uses_full_projection() {
        let iv = Interval::from_micros(10 * MICROS_PER_HOUR + 100 * MICROS_PER_MINUTE);
        assert_eq!(int(IntervalField::Hour, &iv), 11);
        assert_eq!(int(IntervalField::Minute, &iv), 700);

        let month_and_day = Interval::new(1, 1, 0);
        assert_eq!(int(IntervalField::Hour, &month_and_day), 31 * 24);
    }

    #[test]
    fn test_sub_second_units_are_exact() {
        let iv = Interval::new(0, 1, 1_500_001);
        let seconds = extract(IntervalField::Second, &iv).unwrap();
        assert_eq!(seconds.to_string(), "86401.500001");

        let millis = extract(IntervalField::Millisecond, &iv).unwrap();
        assert_eq!(millis.to_string(), "86401500.001");

        assert_eq!(
            extract(IntervalField::Microsecond, &iv),
            Ok(FieldValue::BigInt(86_401_500_001))
        );
        assert_eq!(extract(IntervalField::Epoch, &iv), Ok(seconds));
    }

    #[test]
    fn test_epoch_of_year() {
        let iv = years_months(1, 0);
        let epoch = extract(IntervalField::Epoch, &iv).unwrap();
        assert_eq!(
            epoch.to_decimal(),
            rust_decimal::Decimal::new(360 * 86_400 * MICROS_PER_SECOND, 6)
        );
    }

    #[test]
    fn test_projection_overflow_is_reported() {
        let iv = Interval::new(i32::MAX, 0, 0);
        assert_eq!(extract(IntervalField::Microsecond, &iv), Err(NumericError::Overflow));
        assert_eq!(extract(IntervalField::Second, &iv), Err(NumericError::Overflow));
        assert_eq!(extract(IntervalField::Millisecond, &iv), Err(NumericError::Overflow));
        assert_eq!(extract(IntervalField::Epoch, &iv), Err(NumericError::Overflow));
        // integer units stay exact
        assert_eq!(int(IntervalField::Hour, &iv), i64::from(i32::MAX) * 30 * 24);
        assert_eq!(int(IntervalField::Day, &iv), i64::from(i32::MAX) * 30);
    }

    #[test]
    fn test_every_field_of_zero_is_zero() {
        for field in IntervalField::ALL {
            let value = extract(field, &Interval::ZERO).unwrap();
            assert!(value.to_decimal().is_zero(), "{} of zero", field);
        }
    }
}
