//! Guessing what period a bare pay figure was quoted over.

use tracing::debug;
use crate::convert::PayQuote;
use crate::units::TimeUnit;

/// Largest figure still read as an hourly wage.
pub const HOURLY_CEILING: f64 = 120.0;

/// Largest figure still read as a monthly salary.
pub const MONTHLY_CEILING: f64 = 12000.0;

/// Pick the most plausible unit for a value given without one.
///
/// Values in `[0, 120]` are hourly wages, `(120, 12000]` monthly salaries and
/// anything else, negatives and NaN included, is treated as yearly.
pub fn infer_unit(value: f64) -> TimeUnit {
    if value >= 0.0 && value <= HOURLY_CEILING {
        TimeUnit::Hour
    } else if value > HOURLY_CEILING && value <= MONTHLY_CEILING {
        TimeUnit::Month
    } else {
        TimeUnit::Year
    }
}

/// Build a quote from a value and an optional explicit unit, inferring the
/// unit when none was given.
pub fn quote(value: f64, unit: Option<TimeUnit>) -> PayQuote {
    match unit {
        Some(unit) => PayQuote::new(value, unit),
        None => {
            let unit = infer_unit(value);

            debug!(value, unit = %unit, "inferred unit for unqualified value");

            PayQuote::new(value, unit)
        }
    }
}
