//! Where "today" comes from.
//!
//! Formatting functions take the reference date as a plain [`NaiveDate`].
//! A [`Clock`] is only consulted at the outermost call site.

use chrono::{Local, NaiveDate};

use crate::prelude::*;

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::from(ymd(2024, 11, 15));
        assert_eq!(clock.today(), ymd(2024, 11, 15));
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn test_clock_through_reference() {
        fn read(clock: impl Clock) -> NaiveDate {
            clock.today()
        }
        let clock = FixedClock(ymd(2020, 2, 29));
        assert_eq!(read(&clock), ymd(2020, 2, 29));
    }
}
