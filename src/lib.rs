// ============================================================================
// Calendar Interval Library
// Month/day/microsecond interval arithmetic with strict or wrapping overflow
// ============================================================================

//! # Calendar Interval
//!
//! Arithmetic on SQL-style intervals made of three independent fields:
//! months, days and microseconds.
//!
//! ## Features
//!
//! - **Field extraction** for millennium down to microsecond, plus epoch,
//!   using a fixed 30-day month when crossing into day or time units
//! - **Scalar multiply / divide** by `f64` with exact round-half-away-from-zero
//! - **Construction** from year/month/week/day/hour/minute/second components
//! - **Dual overflow policy**: strict (fail) or wrap (two's complement), chosen
//!   per call
//! - **Exact decimals** for second, millisecond and epoch results
//!
//! ## Example
//!
//! ```rust
//! use calendar_interval::prelude::*;
//!
//! // 1 year 1 second
//! let iv = Interval::new(12, 0, 1_000_000);
//!
//! let half = multiply(&iv, 0.5, OverflowMode::Strict).unwrap();
//! assert_eq!(half, Interval::new(6, 0, 500_000));
//!
//! let epoch = extract(IntervalField::Epoch, &half).unwrap();
//! assert_eq!(epoch.to_string(), "15552000.500000");
//!
//! // Division by zero: an error in strict mode, NULL otherwise
//! assert_eq!(
//!     divide(&iv, 0.0, OverflowMode::Strict),
//!     Err(NumericError::DivisionByZero)
//! );
//! assert_eq!(divide(&iv, 0.0, OverflowMode::Wrap), Ok(None));
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ArithmeticConfig, FieldType, FieldValue, Interval, IntervalField, OverflowMode,
    };
    pub use crate::engine::{
        divide, extract, make_interval, multiply, negate, IntervalBuilder, IntervalEvaluator,
    };
    pub use crate::numeric::{FixedDecimal, Millis, NumericError, NumericResult, Seconds};
}
