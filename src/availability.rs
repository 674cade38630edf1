//! "Disponible à partir de février 2025" style label.

use chrono::{Datelike, Months, NaiveDate};

use crate::{AVAILABILITY_OFFSET_MONTHS, Clock, DateError, locale};

/// Month and year `AVAILABILITY_OFFSET_MONTHS` calendar months after
/// `reference`, preceded by the matching form of "de".
///
/// Month lengths are handled by chrono: 30 November plus three months is
/// 28 (or 29) February, never early March.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the shifted date is past chrono's maximum.
pub fn compute_availability_date(reference: NaiveDate) -> Result<String, DateError> {
    let available = reference
        .checked_add_months(Months::new(AVAILABILITY_OFFSET_MONTHS))
        .ok_or_else(|| DateError::OutOfRange(format!("{reference} + {AVAILABILITY_OFFSET_MONTHS} months")))?;

    let month = locale::month_name(available.month());
    Ok(format!("{}{month} {}", locale::de_preposition(month), available.year()))
}

/// Same as [`compute_availability_date`], reading "today" from `clock`.
///
/// # Errors
/// See [`compute_availability_date`].
pub fn availability_date_with(clock: &impl Clock) -> Result<String, DateError> {
    compute_availability_date(clock.today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use crate::test_utils::ymd;
    use rstest::rstest;

    #[rstest]
    #[case(ymd(2024, 11, 15), "de février 2025")]
    #[case(ymd(2024, 8, 1), "de novembre 2024")]
    #[case(ymd(2024, 1, 10), "d'avril 2024")]
    #[case(ymd(2024, 5, 31), "d'août 2024")]
    #[case(ymd(2024, 7, 1), "d'octobre 2024")]
    #[case(ymd(2024, 10, 1), "de janvier 2025")]
    #[case(ymd(2024, 12, 31), "de mars 2025")]
    #[case(ymd(2024, 2, 29), "de mai 2024")]
    fn test_compute_availability_date(#[case] reference: NaiveDate, #[case] expected: &str) {
        let label = compute_availability_date(reference).expect("reference date well within range");
        assert_eq!(label, expected);
    }

    #[test]
    fn test_end_of_month_does_not_drift() {
        // 30 November + 3 months clamps to the end of February.
        assert_eq!(
            compute_availability_date(ymd(2023, 11, 30)).expect("valid reference"),
            "de février 2024"
        );
        assert_eq!(
            compute_availability_date(ymd(2024, 11, 30)).expect("valid reference"),
            "de février 2025"
        );
    }

    #[test]
    fn test_overflow_is_an_error() {
        let result = compute_availability_date(NaiveDate::MAX);
        assert!(matches!(result, Err(DateError::OutOfRange(_))));
    }

    #[test]
    fn test_with_clock_is_deterministic() {
        let clock = FixedClock(ymd(2024, 11, 15));
        let first = availability_date_with(&clock).expect("valid reference");
        let second = availability_date_with(&clock).expect("valid reference");
        assert_eq!(first, "de février 2025");
        assert_eq!(first, second);
    }
}
