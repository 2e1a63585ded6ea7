// ============================================================================
// Engine Module
// Interval operations: extraction, scalar scaling and construction
// ============================================================================

mod evaluator;
mod extract;
mod make;
mod scale;

pub use evaluator::IntervalEvaluator;
pub use extract::{
    extract, extract_centuries, extract_days, extract_decades, extract_epoch, extract_hours,
    extract_micros, extract_millennia, extract_millis, extract_minutes, extract_months,
    extract_quarters, extract_seconds, extract_years,
};
pub use make::{make_interval, IntervalBuilder};
pub use scale::{divide, multiply, negate};
