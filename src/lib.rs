//! French display labels for a portfolio timeline.
//!
//! Dates in the timeline data are only known to a year, a month or a day.
//! [`PartialDate`] keeps that precision as a tag, and the formatting
//! functions turn one or two of them into labels such as
//! `"mai 2020 - septembre 2023"`, `"depuis mai 2020"` or `"1 an et 6 mois"`.
//! Anything that depends on "today" takes the date as a parameter; see
//! [`clock`] for the boundary that supplies it.

mod consts;
mod prelude;
mod range;
mod types;

pub mod availability;
pub mod clock;
pub mod duration;
pub mod format;
pub mod locale;
pub mod timeline;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod logging;

#[cfg(test)]
mod test_utils;

pub use availability::{availability_date_with, compute_availability_date};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use duration::{format_duration, format_duration_months, months_between};
pub use format::{format_date, format_date_range};
pub use range::TimelineSpan;
pub use types::{Day, Month, Year};

use crate::prelude::*;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::str::FromStr;

/// A calendar date known only to the year, the month or the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PartialDate {
    /// Full date with day, month, and year
    #[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
    Day { year: Year, month: Month, day: Day },
    /// Month and year only
    #[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
    Month { year: Year, month: Month },
    /// Year only
    #[display(fmt = "{:04}", "year.get()")]
    Year { year: Year },
}

/// Granularity at which a date is known and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Precision {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input is not `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    #[error("Invalid date format: {0:?} (expected YYYY, YYYY-MM or YYYY-MM-DD)")]
    InvalidDateFormat(String),
    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    /// Calendar arithmetic left the representable range.
    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

impl PartialDate {
    pub const fn precision(&self) -> Precision {
        match self {
            Self::Day { .. } => Precision::Day,
            Self::Month { .. } => Precision::Month,
            Self::Year { .. } => Precision::Year,
        }
    }

    /// Returns the year component (always present)
    pub const fn year(&self) -> u16 {
        match self {
            Self::Day { year, .. } | Self::Month { year, .. } | Self::Year { year } => year.get(),
        }
    }

    /// Returns the month component if present
    pub const fn month(&self) -> Option<u8> {
        match self {
            Self::Day { month, .. } | Self::Month { month, .. } => Some(month.get()),
            Self::Year { .. } => None,
        }
    }

    /// Returns the day component if present
    pub const fn day(&self) -> Option<u8> {
        match self {
            Self::Day { day, .. } => Some(day.get()),
            Self::Month { .. } | Self::Year { .. } => None,
        }
    }

    /// Earliest concrete (year, month, day) represented by this value.
    pub const fn lower_bound(&self) -> (u16, u8, u8) {
        match *self {
            Self::Day { year, month, day } => (year.get(), month.get(), day.get()),
            Self::Month { year, month } => (year.get(), month.get(), MIN_DAY),
            Self::Year { year } => (year.get(), JANUARY, MIN_DAY),
        }
    }

    /// Months since year 0 of the lower bound; a missing month counts as January.
    pub fn month_ordinal(&self) -> i32 {
        let (year, month, _) = self.lower_bound();
        i32::from(year) * MONTHS_PER_YEAR + i32::from(month) - 1
    }

    /// Resolves to the earliest calendar day this value covers.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if chrono cannot represent the day.
    pub fn to_naive_date(&self) -> Result<NaiveDate, DateError> {
        let (year, month, day) = self.lower_bound();
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .ok_or_else(|| DateError::OutOfRange(self.to_string()))
    }

    /// Less precise comes first when two values share a lower bound.
    #[inline]
    const fn precision_rank(&self) -> u8 {
        match self.precision() {
            Precision::Year => 0,
            Precision::Month => 1,
            Precision::Day => 2,
        }
    }
}

impl FromStr for PartialDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed = || DateError::InvalidDateFormat(s.to_owned());

        let well_formed = matches!(trimmed.len(), YEAR_FORMAT_LEN | MONTH_FORMAT_LEN | DAY_FORMAT_LEN)
            && trimmed.char_indices().all(|(i, c)| match i {
                4 | 7 => c == DATE_SEPARATOR,
                _ => c.is_ascii_digit(),
            });
        if !well_formed {
            return Err(malformed());
        }

        // Every character is ASCII at this point, so byte slicing is safe.
        let year = Year::new(trimmed[0..4].parse().map_err(|_| malformed())?)?;
        if trimmed.len() == YEAR_FORMAT_LEN {
            return Ok(Self::Year { year });
        }

        let month = Month::new(trimmed[5..7].parse().map_err(|_| malformed())?)?;
        if trimmed.len() == MONTH_FORMAT_LEN {
            return Ok(Self::Month { year, month });
        }

        let day = Day::new(trimmed[8..10].parse().map_err(|_| malformed())?, year, month)?;
        Ok(Self::Day { year, month, day })
    }
}

impl PartialOrd for PartialDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PartialDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.lower_bound().cmp(&other.lower_bound()) {
            Ordering::Equal => self.precision_rank().cmp(&other.precision_rank()),
            ord => ord,
        }
    }
}

impl serde::Serialize for PartialDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PartialDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
