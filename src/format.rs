//! Date and date-range labels.

use chrono::Datelike;

use crate::{DateError, Precision, TimelineSpan, locale};

/// Renders a calendar date at the given precision with French month names.
///
/// ```
/// use chrono::NaiveDate;
/// use timeline_dates::{Precision, format_date};
///
/// let date = NaiveDate::from_ymd_opt(2023, 8, 4).unwrap();
/// assert_eq!(format_date(&date, Precision::Day), "4 août 2023");
/// assert_eq!(format_date(&date, Precision::Month), "août 2023");
/// assert_eq!(format_date(&date, Precision::Year), "2023");
/// ```
pub fn format_date<D: Datelike>(date: &D, precision: Precision) -> String {
    let month = locale::month_name(date.month());
    match precision {
        Precision::Day => format!("{} {month} {}", date.day(), date.year()),
        Precision::Month => format!("{month} {}", date.year()),
        Precision::Year => date.year().to_string(),
    }
}

/// Range label for optional `YYYY[-MM[-DD]]` strings.
///
/// Blank strings count as absent. See [`TimelineSpan::format_range`].
///
/// # Errors
/// Returns a [`DateError`] if either present string is not a valid partial date.
pub fn format_date_range(start: Option<&str>, end: Option<&str>) -> Result<String, DateError> {
    TimelineSpan::parse(start, end)?.format_range()
}
