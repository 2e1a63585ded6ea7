// ============================================================================
// Domain Models Module
// Contains the interval value object, extraction units and arithmetic settings
// ============================================================================

pub mod config;
pub mod field;
pub mod interval;

pub use config::{ArithmeticConfig, OverflowMode};
pub use field::{FieldType, FieldValue, IntervalField};
pub use interval::Interval;
