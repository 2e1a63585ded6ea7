// ============================================================================
// Arithmetic Configuration
// Strict vs. wrapping overflow policy, supplied per call
// ============================================================================

use crate::numeric::NumericError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Overflow Mode
// ============================================================================

/// How interval arithmetic reacts to out-of-range results and zero divisors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverflowMode {
    /// ANSI semantics
    /// - Overflow of any field fails with `NumericError::Overflow`
    /// - Division by zero fails with `NumericError::DivisionByZero`
    #[default]
    Strict,

    /// Legacy semantics
    /// - Overflow wraps in the field's two's-complement width
    /// - Division by zero yields an absent result
    Wrap,
}

impl OverflowMode {
    /// Map the boolean "strict arithmetic" flag onto a mode.
    #[inline]
    pub const fn from_strict_flag(strict: bool) -> Self {
        if strict {
            OverflowMode::Strict
        } else {
            OverflowMode::Wrap
        }
    }

    #[inline]
    pub const fn is_strict(self) -> bool {
        matches!(self, OverflowMode::Strict)
    }
}

impl FromStr for OverflowMode {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "ansi" | "true" => Ok(OverflowMode::Strict),
            "wrap" | "legacy" | "false" => Ok(OverflowMode::Wrap),
            _ => Err(NumericError::InvalidInput),
        }
    }
}

// ============================================================================
// Complete Arithmetic Configuration
// ============================================================================

/// Settings an evaluation layer hands to [`IntervalEvaluator`](crate::engine::IntervalEvaluator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArithmeticConfig {
    /// Overflow and divide-by-zero policy
    pub overflow_mode: OverflowMode,
}

impl ArithmeticConfig {
    /// Create a new configuration with the given overflow mode
    pub const fn new(overflow_mode: OverflowMode) -> Self {
        Self { overflow_mode }
    }

    /// Builder method: Set overflow mode
    pub fn with_overflow_mode(mut self, mode: OverflowMode) -> Self {
        self.overflow_mode = mode;
        self
    }

    /// Builder method: Set overflow mode from the boolean strict flag
    pub fn with_strict(self, strict: bool) -> Self {
        self.with_overflow_mode(OverflowMode::from_strict_flag(strict))
    }

    pub const fn is_strict(&self) -> bool {
        self.overflow_mode.is_strict()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ArithmeticConfig {
    /// ANSI-style configuration: overflow and divide-by-zero fail
    pub const fn ansi() -> Self {
        Self::new(OverflowMode::Strict)
    }

    /// Legacy configuration: overflow wraps, divide-by-zero yields NULL
    pub const fn legacy() -> Self {
        Self::new(OverflowMode::Wrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(OverflowMode::default(), OverflowMode::Strict);
        assert!(ArithmeticConfig::default().is_strict());
    }

    #[test]
    fn test_strict_flag() {
        assert_eq!(OverflowMode::from_strict_flag(true), OverflowMode::Strict);
        assert_eq!(OverflowMode::from_strict_flag(false), OverflowMode::Wrap);
        assert!(!ArithmeticConfig::ansi().with_strict(false).is_strict());
    }

    #[test]
    fn test_presets() {
        assert_eq!(ArithmeticConfig::ansi().overflow_mode, OverflowMode::Strict);
        assert_eq!(ArithmeticConfig::legacy().overflow_mode, OverflowMode::Wrap);
        assert_eq!(
            ArithmeticConfig::legacy().with_overflow_mode(OverflowMode::Strict),
            ArithmeticConfig::ansi()
        );
    }

    #[test]
    fn test_builder_chain() {
        let config = ArithmeticConfig::default()
            .with_overflow_mode(OverflowMode::Wrap)
            .with_strict(true);
        assert_eq!(config, ArithmeticConfig::ansi());
        assert!(config.is_strict());
        assert!(!config.with_strict(false).is_strict());
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("ANSI".parse::<OverflowMode>(), Ok(OverflowMode::Strict));
        assert_eq!("legacy".parse::<OverflowMode>(), Ok(OverflowMode::Wrap));
        assert_eq!("false".parse::<OverflowMode>(), Ok(OverflowMode::Wrap));
        assert_eq!(
            "sometimes".parse::<OverflowMode>(),
            Err(NumericError::InvalidInput)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = ArithmeticConfig::legacy();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"overflow_mode":"wrap"}"#);
        let back: ArithmeticConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
