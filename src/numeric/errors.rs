// ============================================================================
// Numeric Errors
// Failure conditions for interval arithmetic and fixed-point conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while computing on intervals.
///
/// `Overflow` and `DivisionByZero` are only ever produced under
/// [`OverflowMode::Strict`](crate::domain::OverflowMode::Strict); in wrapping
/// mode the same inputs wrap or yield an absent result instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result does not fit the native width of its field
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => write!(f, "arithmetic overflow: interval field out of range"),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
