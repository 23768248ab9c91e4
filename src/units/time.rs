use std::{error, fmt, io, result};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The period a pay amount is quoted over.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum TimeUnit {
    Hour,
    Week,
    Month,
    Year
}

use self::TimeUnit::*;

impl TimeUnit {
    /// Every supported unit, smallest period first.
    pub const ALL: [TimeUnit; 4] = [Hour, Week, Month, Year];

    /// Match a single unit letter. Case-sensitive: only `h`, `w`, `m`, `y`.
    pub fn from_letter(letter: char) -> Result<TimeUnit> {
        match letter {
            'h' => Ok(Hour),
            'w' => Ok(Week),
            'm' => Ok(Month),
            'y' => Ok(Year),
            other => Err(UnitError::InvalidTimeUnit(other.to_string()))
        }
    }

    pub fn letter(self) -> char {
        match self {
            Hour => 'h',
            Week => 'w',
            Month => 'm',
            Year => 'y'
        }
    }

    /// Singular noun, as in "$20.00 per hour".
    pub fn name(self) -> &'static str {
        match self {
            Hour => "hour",
            Week => "week",
            Month => "month",
            Year => "year"
        }
    }

    /// Adjective used for report labels.
    pub fn adjective(self) -> &'static str {
        match self {
            Hour => "Hourly",
            Week => "Weekly",
            Month => "Monthly",
            Year => "Yearly"
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a unit from user input.
///
/// Only the first character is significant, so `h`, `hour` and `hourly` all
/// select `Hour`. Anything else, including an empty string, is rejected with
/// the whole input echoed back in the error.
impl FromStr for TimeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<TimeUnit> {
        match s.chars().next() {
            Some(letter) => TimeUnit::from_letter(letter).map_err(|_| UnitError::InvalidTimeUnit(s.to_string())),
            None => Err(UnitError::InvalidTimeUnit(s.to_string()))
        }
    }
}

/// Parse a run of unit letters such as `hy` into a list of units.
///
/// Duplicates are dropped; the first occurrence fixes the position.
pub fn parse_unit_list(s: &str) -> Result<Vec<TimeUnit>> {
    let mut units = Vec::new();

    for letter in s.chars() {
        let unit = TimeUnit::from_letter(letter)?;

        if !units.contains(&unit) {
            units.push(unit);
        }
    }

    if units.is_empty() {
        return Err(UnitError::InvalidTimeUnit(s.to_string()));
    }

    Ok(units)
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum UnitError {
    InvalidTimeUnit(String)
}

impl Display for UnitError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            UnitError::InvalidTimeUnit(unit) => write!(f, "Invalid time unit {:?}, expected one of h, w, m, y", unit)
        }
    }
}

impl error::Error for UnitError {}

impl From<UnitError> for io::Error {
    fn from(error: UnitError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, error)
    }
}

pub type Result<T> = result::Result<T, UnitError>;
