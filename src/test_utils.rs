//! Shorthand constructors for tests. Panics on invalid input.

use crate::{Month, PartialDate, Year};
use chrono::NaiveDate;

pub fn year(value: u16) -> Year {
    Year::new(value).expect("valid test year")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("valid test month")
}

pub fn partial(value: &str) -> PartialDate {
    value.parse().expect("valid test partial date")
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test calendar date")
}
