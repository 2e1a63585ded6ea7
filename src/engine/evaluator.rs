// ============================================================================
// Interval Evaluator
// Entry point for an expression layer: resolves unit names and applies the
// configured overflow mode to every call
// ============================================================================

use crate::domain::{ArithmeticConfig, FieldValue, Interval, IntervalField, OverflowMode};
use crate::engine::{divide, extract, multiply, negate, IntervalBuilder};
use crate::numeric::NumericResult;

/// Stateless evaluator bound to one [`ArithmeticConfig`].
///
/// The overflow mode is read once at the start of each call, so evaluators
/// with different configurations can be used side by side from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalEvaluator {
    config: ArithmeticConfig,
}

impl IntervalEvaluator {
    /// Create an evaluator for the given configuration
    pub fn new(config: ArithmeticConfig) -> Self {
        tracing::debug!(mode = ?config.overflow_mode, "interval evaluator created");
        Self { config }
    }

    /// Shorthand for an evaluator built from the boolean strict flag
    pub fn with_strict(strict: bool) -> Self {
        Self::new(ArithmeticConfig::default().with_strict(strict))
    }

    pub fn config(&self) -> &ArithmeticConfig {
        &self.config
    }

    #[inline]
    fn mode(&self) -> OverflowMode {
        self.config.overflow_mode
    }

    /// `EXTRACT(<unit> FROM interval)` with the unit given by name.
    ///
    /// # Errors
    /// `InvalidInput` for an unknown unit name; see [`extract`] otherwise.
    pub fn extract(&self, unit: &str, interval: &Interval) -> NumericResult<FieldValue> {
        let field: IntervalField = unit.parse()?;
        tracing::trace!(%field, %interval, "extract");
        extract(field, interval)
    }

    /// `interval * factor`
    pub fn multiply(&self, interval: &Interval, factor: f64) -> NumericResult<Interval> {
        let mode = self.mode();
        tracing::trace!(%interval, factor, ?mode, "multiply");
        multiply(interval, factor, mode)
    }

    /// `interval / divisor`; `Ok(None)` is SQL NULL.
    pub fn divide(&self, interval: &Interval, divisor: f64) -> NumericResult<Option<Interval>> {
        let mode = self.mode();
        tracing::trace!(%interval, divisor, ?mode, "divide");
        divide(interval, divisor, mode)
    }

    /// `-interval`
    pub fn negate(&self, interval: &Interval) -> NumericResult<Interval> {
        let mode = self.mode();
        tracing::trace!(%interval, ?mode, "negate");
        negate(interval, mode)
    }

    /// `make_interval(...)` from builder components
    pub fn make_interval(&self, parts: &IntervalBuilder) -> NumericResult<Interval> {
        let mode = self.mode();
        tracing::trace!(?parts, ?mode, "make_interval");
        parts.build(mode)
    }
}
