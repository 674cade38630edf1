//! Elapsed-duration labels such as "2 ans et 1 mois".
//!
//! Durations are whole calendar months. Days are ignored on both ends, so
//! 31 January to 1 February counts as one month.

use chrono::{Datelike, NaiveDate};

use crate::{DURATION_JOINER, DateError, MONTHS_PER_YEAR, PartialDate, TimelineSpan, locale};

/// Calendar months from `start` to `end`; negative if `end` comes first.
pub fn months_between(start: &PartialDate, end: &PartialDate) -> i32 {
    end.month_ordinal() - start.month_ordinal()
}

/// Calendar months from `start` to the month containing `today`.
pub fn months_until(start: &PartialDate, today: NaiveDate) -> i32 {
    let today_ordinal = today.year() * MONTHS_PER_YEAR + today.month0().cast_signed();
    today_ordinal - start.month_ordinal()
}

/// Splits a month count into years and months.
///
/// Zero and negative counts give an empty label rather than "0 mois".
///
/// ```
/// use timeline_dates::format_duration_months;
///
/// assert_eq!(format_duration_months(13), "1 an et 1 mois");
/// assert_eq!(format_duration_months(24), "2 ans");
/// assert_eq!(format_duration_months(0), "");
/// ```
pub fn format_duration_months(months: i32) -> String {
    let years = months / MONTHS_PER_YEAR;
    let rest = months % MONTHS_PER_YEAR;
    let years_label = || format!("{years} {}", locale::years_word(years));
    let months_label = || format!("{rest} {}", locale::MONTHS_WORD);

    match (years > 0, rest > 0) {
        (true, true) => format!("{}{DURATION_JOINER}{}", years_label(), months_label()),
        (true, false) => years_label(),
        (false, true) => months_label(),
        (false, false) => String::new(),
    }
}

/// Duration label for optional `YYYY[-MM[-DD]]` strings, measuring an open
/// span up to `today`. See [`TimelineSpan::format_duration`].
///
/// # Errors
/// Returns a [`DateError`] if either present string is not a valid partial date.
pub fn format_duration(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> Result<String, DateError> {
    Ok(TimelineSpan::parse(start, end)?.format_duration(today))
}
