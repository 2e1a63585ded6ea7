// ============================================================================
// Numeric Module
// Fixed-point decimals and exact scaling for interval arithmetic
// ============================================================================
//
// This module provides:
// - FixedDecimal<D>: decimal(18, D) with compile-time scale
// - NumericError: Error types for arithmetic operations
// - Exact integer × f64 / integer ÷ f64 rounding with pending narrowing
//
// Design principles:
// - No binary floating point in any result
// - All arithmetic returns Result (no panics)
// - Narrowing is explicit: callers choose checked or wrapping

mod errors;
mod fixed_decimal;
mod scaling;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, Millis, Seconds, DECIMAL_PRECISION};
pub use scaling::{div_round, mul_round, NativeWidth, Rounded};
