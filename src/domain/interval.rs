// ============================================================================
// Interval Value
// Immutable (months, days, microseconds) triple and conversion constants
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================
//
// A month is a fixed 30 days when projected into day or time units. These
// constants never normalize stored fields against each other.

pub const MONTHS_PER_YEAR: i32 = 12;
pub const MONTHS_PER_QUARTER: i32 = 3;
pub const YEARS_PER_DECADE: i32 = 10;
pub const YEARS_PER_CENTURY: i32 = 100;
pub const YEARS_PER_MILLENNIUM: i32 = 1_000;
pub const DAYS_PER_WEEK: i32 = 7;
pub const DAYS_PER_MONTH: i64 = 30;

pub const MICROS_PER_MILLI: i64 = 1_000;
pub const MICROS_PER_SECOND: i64 = 1_000_000;
pub const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
pub const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;
pub const MICROS_PER_DAY: i64 = 24 * MICROS_PER_HOUR;
pub const MICROS_PER_MONTH: i64 = DAYS_PER_MONTH * MICROS_PER_DAY;

// ============================================================================
// Interval
// ============================================================================

/// An elapsed-time span made of three independent magnitudes.
///
/// Each field keeps its own sign and is never folded into another one:
/// 45 days stays 45 days, and `(1, -2, 3)` is a valid interval. Equality is
/// field-wise, so `1 month` and `30 days` are different values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    months: i32,
    days: i32,
    microseconds: i64,
}

impl Interval {
    /// The zero-length interval
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Create an interval from its three fields.
    #[inline]
    pub const fn new(months: i32, days: i32, microseconds: i64) -> Self {
        Self {
            months,
            days,
            microseconds,
        }
    }

    /// Create an interval holding only a microsecond component.
    #[inline]
    pub const fn from_micros(microseconds: i64) -> Self {
        Self::new(0, 0, microseconds)
    }

    /// Convert a `chrono::TimeDelta` into a pure microsecond interval.
    ///
    /// Sub-microsecond precision is truncated toward zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the delta does not fit in 64-bit microseconds.
    pub fn from_chrono(delta: chrono::TimeDelta) -> NumericResult<Self> {
        delta
            .num_microseconds()
            .map(Self::from_micros)
            .ok_or(NumericError::Overflow)
    }

    #[inline]
    pub const fn months(&self) -> i32 {
        self.months
    }

    #[inline]
    pub const fn days(&self) -> i32 {
        self.days
    }

    #[inline]
    pub const fn microseconds(&self) -> i64 {
        self.microseconds
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.months == 0 && self.days == 0 && self.microseconds == 0
    }

    /// Total microsecond projection: months at 30 days, days at 24 hours,
    /// plus the microsecond field. Always exact in 128 bits.
    #[inline]
    pub const fn total_micros(&self) -> i128 {
        self.months as i128 * MICROS_PER_MONTH as i128
            + self.days as i128 * MICROS_PER_DAY as i128
            + self.microseconds as i128
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Interval {
    /// Renders e.g. `1 years 2 months 3 days 4.500000 seconds`, skipping zero
    /// components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0 seconds");
        }

        let years = self.months / MONTHS_PER_YEAR;
        let months = self.months % MONTHS_PER_YEAR;
        let mut parts: Vec<String> = Vec::with_capacity(4);
        if years != 0 {
            parts.push(format!("{} years", years));
        }
        if months != 0 {
            parts.push(format!("{} months", months));
        }
        if self.days != 0 {
            parts.push(format!("{} days", self.days));
        }
        if self.microseconds != 0 {
            let whole = self.microseconds / MICROS_PER_SECOND;
            let frac = (self.microseconds % MICROS_PER_SECOND).unsigned_abs();
            let sign = if self.microseconds < 0 && whole == 0 {
                "-"
            } else {
                ""
            };
            parts.push(format!("{}{}.{:06} seconds", sign, whole, frac));
        }
        write!(f, "{}", parts.join(" "))
    }
}
