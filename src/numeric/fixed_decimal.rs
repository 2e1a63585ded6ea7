// ============================================================================
// Fixed-Point Decimal
// Exact decimal(18, D) values for sub-second interval fields
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fixed-point decimal number with compile-time scale.
///
/// Internally stores `value × 10^DECIMALS` as an i64, bounded to the declared
/// SQL precision of 18 significant digits.
///
/// # Type Parameter
/// - `DECIMALS`: Number of decimal places (0-17). Default is 6.
///
/// # Value Range
/// With DECIMALS=6 (seconds):
/// - Minimum: -999,999,999,999.999999
/// - Maximum: +999,999,999,999.999999
/// - Precision: 0.000001 (one microsecond)
///
/// # Example
/// ```
/// use calendar_interval::numeric::FixedDecimal;
///
/// let secs: FixedDecimal<6> = "1.5".parse().unwrap();
/// assert_eq!(secs.raw_value(), 1_500_000);
/// assert_eq!(secs.to_string(), "1.500000");
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 6>(i64);

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Declared precision of every decimal this crate produces or accepts.
pub const DECIMAL_PRECISION: u8 = 18;

/// Largest raw magnitude with 18 significant digits
const MAX_RAW: i64 = pow10(DECIMAL_PRECISION) - 1;

impl<const D: u8> FixedDecimal<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Declared precision (total significant digits)
    pub const PRECISION: u8 = DECIMAL_PRECISION;

    /// Zero value
    pub const ZERO: Self = Self::from_raw(0);

    /// One (1.0)
    pub const ONE: Self = Self::from_raw(pow10(D));

    /// Maximum representable value
    pub const MAX: Self = Self::from_raw(MAX_RAW);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation without a precision check.
    ///
    /// Callers must guarantee `|raw| <= 10^18 - 1`.
    #[inline]
    pub(crate) const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from a raw scaled value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value needs more than 18 digits.
    #[inline]
    pub fn try_from_raw(raw: i64) -> NumericResult<Self> {
        if (-MAX_RAW..=MAX_RAW).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(NumericError::Overflow)
        }
    }

    /// Create from a raw scaled value held in a wider integer.
    #[inline]
    pub(crate) fn try_from_raw_wide(raw: i128) -> NumericResult<Self> {
        let raw = i64::try_from(raw).map_err(|_| NumericError::Overflow)?;
        Self::try_from_raw(raw)
    }

    /// Create from integer and fractional parts.
    ///
    /// # Arguments
    /// - `integer`: The integer part (can be negative)
    /// - `fraction`: The fractional part (must be < SCALE, always positive)
    #[inline]
    pub fn from_parts(integer: i64, fraction: u64) -> NumericResult<Self> {
        if fraction >= Self::SCALE as u64 {
            return Err(NumericError::InvalidInput);
        }

        let int_scaled = integer
            .checked_mul(Self::SCALE)
            .ok_or(NumericError::Overflow)?;

        let frac_signed = if integer < 0 {
            -(fraction as i64)
        } else {
            fraction as i64
        };

        int_scaled
            .checked_add(frac_signed)
            .ok_or(NumericError::Overflow)
            .and_then(Self::try_from_raw)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    ///
    /// For `FixedDecimal<6>` this is a microsecond count.
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    /// Negation. Never fails because the range is symmetric.
    #[inline]
    pub const fn negated(self) -> Self {
        Self::from_raw(-self.0)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8> Default for FixedDecimal<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: u8> PartialEq for FixedDecimal<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const D: u8> Eq for FixedDecimal<D> {}

impl<const D: u8> PartialOrd for FixedDecimal<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const D: u8> Ord for FixedDecimal<D> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const D: u8> Hash for FixedDecimal<D> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimal({}, {})({}, raw={})",
            Self::PRECISION,
            D,
            self,
            self.0
        )
    }
}

impl<const D: u8> fmt::Display for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if self.0 < 0 && int_part == 0 {
            // Handle -0.xxx case
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl<const D: u8> FixedDecimal<D> {
    /// Convert from rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `PrecisionLoss` if `d` carries digits beyond `DECIMALS` places
    /// - `Overflow` if the value needs more than 18 digits
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let scaled = d
            .checked_mul(Decimal::from(Self::SCALE))
            .ok_or(NumericError::Overflow)?;

        if !scaled.fract().is_zero() {
            return Err(NumericError::PrecisionLoss);
        }

        let raw = scaled.to_i64().ok_or(NumericError::Overflow)?;
        Self::try_from_raw(raw)
    }

    /// Convert to rust_decimal::Decimal, keeping the scale.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, D as u32)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8> std::str::FromStr for FixedDecimal<D> {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123.000000
    /// - "123.456" -> 123.456000
    /// - "-0.001" -> -0.001000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, Some(frac_str)),
            None => (s, None),
        };

        if int_str.is_empty() && frac_str.map_or(true, str::is_empty) {
            return Err(NumericError::InvalidInput);
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumericError::InvalidInput);
        }

        let int_val: i64 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| NumericError::Overflow)?
        };

        let frac_val: u64 = match frac_str {
            None | Some("") => 0,
            Some(frac) if !frac.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(NumericError::InvalidInput);
            }
            Some(frac) if frac.len() > D as usize => return Err(NumericError::PrecisionLoss),
            Some(frac) => {
                // Pad with zeros to reach DECIMALS length
                let padded = format!("{:0<width$}", frac, width = D as usize);
                padded.parse().map_err(|_| NumericError::InvalidInput)?
            }
        };

        let result = Self::from_parts(int_val, frac_val)?;
        Ok(if is_negative { result.negated() } else { result })
    }
}

// ============================================================================
// Type Aliases for Interval Fields
// ============================================================================

/// Seconds with microsecond resolution: decimal(18, 6)
pub type Seconds = FixedDecimal<6>;

/// Milliseconds with microsecond resolution: decimal(18, 3)
pub type Millis = FixedDecimal<3>;

// ============================================================================
// Tests
// ============================================================================
