// ============================================================================
// Interval Fields
// Extraction units and their typed results
// ============================================================================

use crate::numeric::{Millis, NumericError, Seconds, DECIMAL_PRECISION};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Interval Field
// ============================================================================

/// A unit that can be extracted from an interval.
///
/// Millennium through month read only the month count. Day folds months in
/// at 30 days. Hour and below use the full microsecond projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IntervalField {
    Millennium,
    Century,
    Decade,
    Year,
    Quarter,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
    Epoch,
}

impl IntervalField {
    /// Every field, largest unit first, `Epoch` last.
    pub const ALL: [IntervalField; 13] = [
        IntervalField::Millennium,
        IntervalField::Century,
        IntervalField::Decade,
        IntervalField::Year,
        IntervalField::Quarter,
        IntervalField::Month,
        IntervalField::Day,
        IntervalField::Hour,
        IntervalField::Minute,
        IntervalField::Second,
        IntervalField::Millisecond,
        IntervalField::Microsecond,
        IntervalField::Epoch,
    ];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            IntervalField::Millennium => "millennium",
            IntervalField::Century => "century",
            IntervalField::Decade => "decade",
            IntervalField::Year => "year",
            IntervalField::Quarter => "quarter",
            IntervalField::Month => "month",
            IntervalField::Day => "day",
            IntervalField::Hour => "hour",
            IntervalField::Minute => "minute",
            IntervalField::Second => "second",
            IntervalField::Millisecond => "millisecond",
            IntervalField::Microsecond => "microsecond",
            IntervalField::Epoch => "epoch",
        }
    }

    /// Declared result type of extracting this field.
    pub const fn result_type(self) -> FieldType {
        match self {
            IntervalField::Millennium
            | IntervalField::Century
            | IntervalField::Decade
            | IntervalField::Year
            | IntervalField::Quarter
            | IntervalField::Month => FieldType::Int,
            IntervalField::Day
            | IntervalField::Hour
            | IntervalField::Minute
            | IntervalField::Microsecond => FieldType::BigInt,
            IntervalField::Second | IntervalField::Epoch => FieldType::Decimal {
                precision: DECIMAL_PRECISION,
                scale: 6,
            },
            IntervalField::Millisecond => FieldType::Decimal {
                precision: DECIMAL_PRECISION,
                scale: 3,
            },
        }
    }
}

impl fmt::Display for IntervalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntervalField {
    type Err = NumericError;

    /// Parse a unit name, case-insensitively, accepting the usual plural and
    /// abbreviated SQL spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.trim().to_ascii_lowercase().as_str() {
            "millennium" | "millennia" | "millenniums" | "mil" | "mils" => {
                IntervalField::Millennium
            }
            "century" | "centuries" | "c" | "cent" | "cents" => IntervalField::Century,
            "decade" | "decades" | "dec" | "decs" => IntervalField::Decade,
            "year" | "years" | "y" | "yr" | "yrs" => IntervalField::Year,
            "quarter" | "quarters" | "qtr" | "qtrs" => IntervalField::Quarter,
            "month" | "months" | "mon" | "mons" => IntervalField::Month,
            "day" | "days" | "d" => IntervalField::Day,
            "hour" | "hours" | "h" | "hr" | "hrs" => IntervalField::Hour,
            "minute" | "minutes" | "m" | "min" | "mins" => IntervalField::Minute,
            "second" | "seconds" | "s" | "sec" | "secs" => IntervalField::Second,
            "millisecond" | "milliseconds" | "ms" | "msec" | "msecs" | "mseconds" => {
                IntervalField::Millisecond
            }
            "microsecond" | "microseconds" | "us" | "usec" | "usecs" | "useconds" => {
                IntervalField::Microsecond
            }
            "epoch" => IntervalField::Epoch,
            _ => return Err(NumericError::InvalidInput),
        };
        Ok(field)
    }
}

// ============================================================================
// Field Results
// ============================================================================

/// Declared SQL-level type of an extraction result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// 32-bit integer
    Int,
    /// 64-bit integer
    BigInt,
    /// Exact fixed-point decimal
    Decimal { precision: u8, scale: u8 },
}

/// The value of one extracted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Int(i32),
    BigInt(i64),
    /// decimal(18, 6)
    Seconds(Seconds),
    /// decimal(18, 3)
    Millis(Millis),
}

impl FieldValue {
    pub const fn data_type(&self) -> FieldType {
        match self {
            FieldValue::Int(_) => FieldType::Int,
            FieldValue::BigInt(_) => FieldType::BigInt,
            FieldValue::Seconds(_) => FieldType::Decimal {
                precision: Seconds::PRECISION,
                scale: 6,
            },
            FieldValue::Millis(_) => FieldType::Decimal {
                precision: Millis::PRECISION,
                scale: 3,
            },
        }
    }

    /// Integer value, if this is an integer result.
    pub const fn as_i64(&self) -> Option<i64> {
        match *self {
            FieldValue::Int(v) => Some(v as i64),
            FieldValue::BigInt(v) => Some(v),
            FieldValue::Seconds(_) | FieldValue::Millis(_) => None,
        }
    }

    /// Exact conversion to `rust_decimal::Decimal`, keeping the scale.
    pub fn to_decimal(&self) -> Decimal {
        match *self {
            FieldValue::Int(v) => Decimal::from(v),
            FieldValue::BigInt(v) => Decimal::from(v),
            FieldValue::Seconds(v) => v.to_decimal(),
            FieldValue::Millis(v) => v.to_decimal(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::BigInt(v) => write!(f, "{}", v),
            FieldValue::Seconds(v) => write!(f, "{}", v),
            FieldValue::Millis(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for field in IntervalField::ALL {
            assert_eq!(field.name().parse::<IntervalField>().unwrap(), field);
            assert_eq!(
                field.name().to_uppercase().parse::<IntervalField>().unwrap(),
                field
            );
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("YRS".parse::<IntervalField>(), Ok(IntervalField::Year));
        assert_eq!("millennia".parse::<IntervalField>(), Ok(IntervalField::Millennium));
        assert_eq!(" mins ".parse::<IntervalField>(), Ok(IntervalField::Minute));
        assert_eq!("us".parse::<IntervalField>(), Ok(IntervalField::Microsecond));
        assert_eq!("ms".parse::<IntervalField>(), Ok(IntervalField::Millisecond));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "fortnight".parse::<IntervalField>(),
            Err(NumericError::InvalidInput)
        );
        assert_eq!("".parse::<IntervalField>(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_result_types() {
        assert_eq!(IntervalField::Year.result_type(), FieldType::Int);
        assert_eq!(IntervalField::Day.result_type(), FieldType::BigInt);
        assert_eq!(
            IntervalField::Epoch.result_type(),
            FieldType::Decimal {
                precision: 18,
                scale: 6
            }
        );
        assert_eq!(
            IntervalField::Millisecond.result_type(),
            FieldType::Decimal {
                precision: 18,
                scale: 3
            }
        );
    }

    #[test]
    fn test_field_value_conversions() {
        let secs = FieldValue::Seconds(Seconds::from_parts(1, 500_000).unwrap());
        assert_eq!(secs.as_i64(), None);
        assert_eq!(secs.to_decimal(), Decimal::new(1_500_000, 6));
        assert_eq!(secs.to_string(), "1.500000");

        let hours = FieldValue::BigInt(11);
        assert_eq!(hours.as_i64(), Some(11));
        assert_eq!(hours.data_type(), FieldType::BigInt);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&IntervalField::Epoch).unwrap(),
            r#""epoch""#
        );
        for field in IntervalField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.name()));
            let back: IntervalField = serde_json::from_str(&json).unwrap();
            assert_eq!(back, field);
        }
        assert!(serde_json::from_str::<IntervalField>(r#""Epoch""#).is_err());
    }
}
