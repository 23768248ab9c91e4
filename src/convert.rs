//! Pay rate conversion between time units.
//!
//! Every conversion passes through the hourly rate: the quoted amount is
//! normalized to an hourly figure using the working schedule, then expanded
//! back out to each supported unit.

use std::ops::Index;
use tracing::debug;
use crate::schedule::{Schedule, WEEKS_PER_MONTH, MONTHS_PER_YEAR};
use crate::units::{self, TimeUnit};

/// A pay amount together with the period it was quoted over.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PayQuote {
    pub value: f64,
    pub unit: TimeUnit,
}

impl PayQuote {
    pub fn new(value: f64, unit: TimeUnit) -> Self {
        PayQuote { value, unit }
    }
}

/// Equivalent amounts of one quote in every supported unit.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ConversionResult {
    pub hour: f64,
    pub week: f64,
    pub month: f64,
    pub year: f64,
}

impl ConversionResult {
    /// Expand an hourly rate out to all units.
    pub fn from_hourly(hourly: f64, schedule: &Schedule) -> Self {
        ConversionResult {
            hour: hourly,
            week: hourly * schedule.weekly_hours,
            month: hourly * schedule.weekly_hours * WEEKS_PER_MONTH,
            year: hourly * MONTHS_PER_YEAR * schedule.weekly_hours * WEEKS_PER_MONTH,
        }
    }

    /// Iterate over `(unit, amount)` pairs, hour first.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (TimeUnit, f64)> + 'a {
        TimeUnit::ALL.iter().map(move |unit| (*unit, self[*unit]))
    }
}

impl Index<TimeUnit> for ConversionResult {
    type Output = f64;

    fn index(&self, unit: TimeUnit) -> &f64 {
        match unit {
            TimeUnit::Hour => &self.hour,
            TimeUnit::Week => &self.week,
            TimeUnit::Month => &self.month,
            TimeUnit::Year => &self.year
        }
    }
}

/// Normalize a quote to the equivalent hourly rate.
pub fn hourly_rate(quote: &PayQuote, schedule: &Schedule) -> f64 {
    match quote.unit {
        TimeUnit::Hour => quote.value,
        TimeUnit::Week => quote.value / schedule.weekly_hours,
        TimeUnit::Month => quote.value / schedule.hours_per_month(),
        TimeUnit::Year => quote.value / MONTHS_PER_YEAR / schedule.hours_per_month()
    }
}

/// Convert a quote into every supported unit.
pub fn convert(quote: &PayQuote, schedule: &Schedule) -> ConversionResult {
    let hourly = hourly_rate(quote, schedule);

    debug!(value = quote.value, unit = %quote.unit, weekly_hours = schedule.weekly_hours, hourly, "normalized pay quote");

    ConversionResult::from_hourly(hourly, schedule)
}

/// Convert a value whose unit is still user text.
///
/// The unit is parsed first; an unrecognized unit fails before any arithmetic
/// is done.
pub fn convert_str(value: f64, unit: &str, schedule: &Schedule) -> units::Result<ConversionResult> {
    let unit : TimeUnit = unit.parse()?;

    Ok(convert(&PayQuote::new(value, unit), schedule))
}
