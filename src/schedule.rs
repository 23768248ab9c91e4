//! Calendar constants and the working-hours knob conversions depend on.

/// A 365-day year: 52 full weeks plus one spare day.
pub const WEEKS_PER_YEAR: f64 = 52.0 + 1.0 / 7.0;

pub const WEEKS_PER_MONTH: f64 = WEEKS_PER_YEAR / 12.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Schedule {
    pub weekly_hours: f64,
}

impl Schedule {
    pub fn new(weekly_hours: f64) -> Self {
        Schedule {
            weekly_hours
        }
    }

    /// Whether the schedule can be divided by without producing infinities.
    pub fn is_valid(&self) -> bool {
        self.weekly_hours.is_finite() && self.weekly_hours > 0.0
    }

    pub fn hours_per_month(&self) -> f64 {
        self.weekly_hours * WEEKS_PER_MONTH
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule {
            weekly_hours: 40.0, //Standard full-time week
        }
    }
}
