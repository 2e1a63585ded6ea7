// ============================================================================
// Exact Scaling
// Integer × f64 and integer ÷ f64 with round-half-away-from-zero, computed
// on the exact binary value of the factor
// ============================================================================
//
// An f64 factor is decoded into `±mantissa × 2^exponent` so the scaled field
// is an exact rational number. The rounded result is kept as sign + u128
// magnitude; `carried` records that bits were shifted out of the magnitude,
// in which case only its low 128 bits are meaningful (enough for wrapping).

/// Integer types an interval field can be narrowed into.
pub trait NativeWidth: Copy {
    /// Width of the type in bits
    const BITS: u32;

    /// Two's-complement reinterpretation of the low `BITS` bits.
    fn from_low_bits(bits: u64) -> Self;
}

impl NativeWidth for i32 {
    const BITS: u32 = 32;

    #[inline]
    fn from_low_bits(bits: u64) -> Self {
        bits as u32 as i32
    }
}

impl NativeWidth for i64 {
    const BITS: u32 = 64;

    #[inline]
    fn from_low_bits(bits: u64) -> Self {
        bits as i64
    }
}

/// An exactly rounded integer of unbounded width, pending narrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounded {
    negative: bool,
    magnitude: u128,
    carried: bool,
}

impl Rounded {
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: 0,
        carried: false,
    };

    /// Wrap an exact 128-bit intermediate.
    #[inline]
    pub fn from_i128(value: i128) -> Self {
        Self {
            negative: value < 0,
            magnitude: value.unsigned_abs(),
            carried: false,
        }
    }

    /// Narrow to `T`, or `None` if the value does not fit.
    pub fn checked<T: NativeWidth>(self) -> Option<T> {
        if self.carried {
            return None;
        }
        let max_positive = (1u128 << (T::BITS - 1)) - 1;
        let limit = if self.negative {
            max_positive + 1
        } else {
            max_positive
        };
        if self.magnitude > limit {
            None
        } else {
            Some(self.wrapped())
        }
    }

    /// Narrow to `T` with two's-complement wraparound.
    pub fn wrapped<T: NativeWidth>(self) -> T {
        let low = self.magnitude as u64;
        let bits = if self.negative {
            low.wrapping_neg()
        } else {
            low
        };
        T::from_low_bits(bits)
    }
}

/// Decompose a finite f64 into `(negative, mantissa, exponent)` with
/// `|x| = mantissa × 2^exponent` and an odd (or zero) mantissa.
fn decode(x: f64) -> (bool, u64, i32) {
    let bits = x.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & 0x000f_ffff_ffff_ffff;

    let (mut mantissa, mut exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };

    if mantissa != 0 {
        let tz = mantissa.trailing_zeros();
        mantissa >>= tz;
        exponent += tz as i32;
    }
    (negative, mantissa, exponent)
}

/// Round `numerator / denominator` to nearest, ties away from zero.
#[inline]
fn div_round_half_away(numerator: u128, denominator: u128) -> u128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder >= denominator - remainder {
        quotient + 1
    } else {
        quotient
    }
}

/// `round(value × factor)`. Returns `None` when `factor` is not finite.
pub fn mul_round(value: i64, factor: f64) -> Option<Rounded> {
    if !factor.is_finite() {
        return None;
    }
    let (factor_negative, mantissa, exponent) = decode(factor);
    if mantissa == 0 || value == 0 {
        return Some(Rounded::ZERO);
    }

    // < 2^117, never overflows
    let product = u128::from(value.unsigned_abs()) * u128::from(mantissa);
    let negative = (value < 0) != factor_negative;

    let (magnitude, carried) = if exponent >= 0 {
        let shift = exponent as u32;
        let carried = shift >= product.leading_zeros();
        let magnitude = if shift >= u128::BITS {
            0
        } else {
            product << shift
        };
        (magnitude, carried)
    } else {
        let shift = exponent.unsigned_abs();
        let magnitude = if shift >= u128::BITS {
            0
        } else {
            let half = 1u128 << (shift - 1);
            let remainder = product & ((half << 1) - 1);
            let quotient = product >> shift;
            if remainder >= half {
                quotient + 1
            } else {
                quotient
            }
        };
        (magnitude, false)
    };

    Some(Rounded {
        negative,
        magnitude,
        carried,
    })
}

/// `round(value ÷ divisor)` for a non-zero divisor.
///
/// Returns `None` when `divisor` is NaN. Infinite divisors round every value
/// to zero.
pub fn div_round(value: i64, divisor: f64) -> Option<Rounded> {
    if divisor.is_nan() {
        return None;
    }
    if divisor.is_infinite() || value == 0 {
        return Some(Rounded::ZERO);
    }
    let (divisor_negative, mantissa, exponent) = decode(divisor);
    debug_assert!(mantissa != 0, "division by zero must be handled by the caller");
    if mantissa == 0 {
        return None;
    }

    let numerator = u128::from(value.unsigned_abs());
    let negative = (value < 0) != divisor_negative;
    let mantissa = u128::from(mantissa);

    if exponent >= 0 {
        // divisor >= 2^75 means |quotient| < 2^-11
        if exponent >= 75 {
            return Some(Rounded::ZERO);
        }
        let denominator = mantissa << exponent;
        return Some(Rounded {
            negative,
            magnitude: div_round_half_away(numerator, denominator),
            carried: false,
        });
    }

    // value × 2^shift ÷ mantissa by binary long division, one bit per step
    let shift = exponent.unsigned_abs();
    let mut quotient = numerator / mantissa;
    let mut remainder = numerator % mantissa;
    let mut carried = false;
    for _ in 0..shift {
        carried |= quotient >> (u128::BITS - 1) != 0;
        quotient <<= 1;
        remainder <<= 1;
        if remainder >= mantissa {
            remainder -= mantissa;
            quotient |= 1;
        }
    }
    if remainder >= mantissa - remainder {
        quotient = quotient.wrapping_add(1);
        carried |= quotient == 0;
    }

    Some(Rounded {
        negative,
        magnitude: quotient,
        carried,
    })
}
