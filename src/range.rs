use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    Clock, DateError, PartialDate, Precision, RANGE_JOINER, SINCE_PREFIX, duration, format_date,
};

/// The dates of one timeline entry. Either end may be missing.
///
/// A missing end means the period is still ongoing; a missing start only
/// happens for entries that carry a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimelineSpan {
    #[serde(
        default,
        rename = "startDate",
        deserialize_with = "deserialize_end",
        skip_serializing_if = "Option::is_none"
    )]
    start: Option<PartialDate>,
    #[serde(
        default,
        rename = "endDate",
        deserialize_with = "deserialize_end",
        skip_serializing_if = "Option::is_none"
    )]
    end:   Option<PartialDate>,
}

impl TimelineSpan {
    pub const fn new(start: Option<PartialDate>, end: Option<PartialDate>) -> Self {
        Self { start, end }
    }

    /// Parses both ends; `None`, empty and whitespace-only strings are absent.
    ///
    /// # Errors
    /// Returns the [`DateError`] of the first end that fails to parse.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, DateError> {
        Ok(Self::new(parse_end(start)?, parse_end(end)?))
    }

    pub const fn start(&self) -> Option<PartialDate> {
        self.start
    }

    pub const fn end(&self) -> Option<PartialDate> {
        self.end
    }

    /// Precision both ends are rendered at: the start's when known, else the end's.
    pub fn precision(&self) -> Option<Precision> {
        self.start.or(self.end).map(|date| date.precision())
    }

    /// `false` only when both ends are present and the end comes first.
    /// Ties at different precisions count as ordered ("2020" then "2020-01").
    pub fn is_chronological(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }

    /// Display label for the span.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if a date cannot be resolved to a calendar day.
    pub fn format_range(&self) -> Result<String, DateError> {
        let Some(precision) = self.precision() else {
            return Ok(String::new());
        };
        let render = |date: PartialDate| -> Result<String, DateError> {
            Ok(format_date(&date.to_naive_date()?, precision))
        };

        Ok(match (self.start, self.end) {
            (Some(start), Some(end)) => format!("{}{RANGE_JOINER}{}", render(start)?, render(end)?),
            (Some(start), None) => format!("{SINCE_PREFIX}{}", render(start)?),
            (None, Some(end)) => render(end)?,
            (None, None) => String::new(),
        })
    }

    /// Calendar months covered, measuring an open span up to `today`.
    /// `None` when the span has no start.
    pub fn elapsed_months(&self, today: NaiveDate) -> Option<i32> {
        let start = self.start?;
        let months = match self.end {
            Some(end) => duration::months_between(&start, &end),
            None => duration::months_until(&start, today),
        };
        if !self.is_chronological() {
            tracing::warn!(span = %self, months, "span ends before it starts");
        }
        Some(months)
    }

    /// Duration label, measuring an open span up to `today`.
    ///
    /// A span with only an end yields that end's year; this mirrors the labels
    /// already published for single-date entries.
    pub fn format_duration(&self, today: NaiveDate) -> String {
        match (self.elapsed_months(today), self.end) {
            (Some(months), _) => duration::format_duration_months(months),
            // TODO: decide with the content owner whether end-only entries should show a duration at all.
            (None, Some(end)) => end.year().to_string(),
            (None, None) => String::new(),
        }
    }

    /// Same as [`Self::format_duration`], reading "today" from `clock`.
    pub fn format_duration_with(&self, clock: &impl Clock) -> String {
        self.format_duration(clock.today())
    }
}

impl std::fmt::Display for TimelineSpan {
    /// ISO 8601-2 interval notation, `..` standing for an open end.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let end_text = |date: Option<PartialDate>| date.map_or_else(|| "..".to_owned(), |d| d.to_string());
        write!(f, "{}/{}", end_text(self.start), end_text(self.end))
    }
}

fn parse_end(value: Option<&str>) -> Result<Option<PartialDate>, DateError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(|err| {
            tracing::debug!(input = text, %err, "rejected partial date");
            err
        }),
    }
}

/// Blank strings in the JSON count as absent, as in [`TimelineSpan::parse`].
fn deserialize_end<'de, D>(deserializer: D) -> Result<Option<PartialDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    parse_end(value.as_deref()).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use crate::test_utils::{partial, ymd};

    fn span(start: Option<&str>, end: Option<&str>) -> TimelineSpan {
        TimelineSpan::parse(start, end).expect("valid test span")
    }

    #[test]
    fn test_parse_treats_blank_as_absent() {
        assert_eq!(span(Some(""), Some("   ")), TimelineSpan::default());
        assert_eq!(span(None, Some("2021")).start(), None);
        assert_eq!(span(Some(" 2020-05 "), None).start(), Some(partial("2020-05")));
    }

    #[test]
    fn test_parse_reports_first_error() {
        let result = TimelineSpan::parse(Some("2020-5"), Some("2020-13"));
        assert!(matches!(result, Err(DateError::InvalidDateFormat(_))));
    }

    #[test]
    fn test_precision_follows_start() {
        assert_eq!(span(Some("2020-05"), Some("2023")).precision(), Some(Precision::Month));
        assert_eq!(span(None, Some("2023-09-01")).precision(), Some(Precision::Day));
        assert_eq!(span(None, None).precision(), None);
    }

    #[test]
    fn test_is_chronological() {
        assert!(span(Some("2020"), Some("2021")).is_chronological());
        assert!(span(Some("2020-05"), Some("2020-05")).is_chronological());
        assert!(!span(Some("2021"), Some("2020-12")).is_chronological());
        assert!(span(Some("2021"), None).is_chronological());
        assert!(span(Some("2020"), Some("2020-01")).is_chronological());
        assert!(!span(Some("2020-05-20"), Some("2020-05-10")).is_chronological());
    }

    #[test]
    fn test_elapsed_months() {
        let today = ymd(2024, 3, 31);
        assert_eq!(span(Some("2020-01"), Some("2021-07")).elapsed_months(today), Some(18));
        assert_eq!(span(Some("2023-01-31"), None).elapsed_months(today), Some(14));
        assert_eq!(span(Some("2020"), Some("2020-12-31")).elapsed_months(today), Some(11));
        assert_eq!(span(None, Some("2021")).elapsed_months(today), None);
    }

    #[test]
    fn test_format_duration_branches() {
        let today = ymd(2024, 3, 1);
        assert_eq!(span(Some("2020-01"), Some("2020-01")).format_duration(today), "");
        assert_eq!(span(Some("2020-01"), Some("2021-07")).format_duration(today), "1 an et 6 mois");
        assert_eq!(span(Some("2022-01"), None).format_duration(today), "2 ans et 2 mois");
        assert_eq!(span(None, Some("2019-06")).format_duration(today), "2019");
        assert_eq!(span(None, None).format_duration(today), "");
    }

    #[test]
    fn test_format_duration_backwards_span_is_blank() {
        assert_eq!(span(Some("2023"), Some("2021")).format_duration(ymd(2024, 1, 1)), "");
    }

    #[test]
    fn test_format_duration_with_clock() {
        let clock = FixedClock(ymd(2025, 5, 20));
        let ongoing = span(Some("2024-05"), None);
        assert_eq!(ongoing.format_duration_with(&clock), "1 an");
        assert_eq!(ongoing.format_duration_with(&clock), ongoing.format_duration_with(&clock));
    }

    #[test]
    fn test_display() {
        assert_eq!(span(Some("2020-05"), Some("2023")).to_string(), "2020-05/2023");
        assert_eq!(span(Some("2020-05"), None).to_string(), "2020-05/..");
        assert_eq!(span(None, None).to_string(), "../..");
    }

    #[test]
    fn test_serde_camel_case_fields() {
        let json = r#"{"startDate":"2020-05","endDate":"2023-09-14"}"#;
        let parsed: TimelineSpan = serde_json::from_str(json).expect("deserialize span");
        assert_eq!(parsed, span(Some("2020-05"), Some("2023-09-14")));
        assert_eq!(serde_json::to_string(&parsed).expect("serialize span"), json);

        let open: TimelineSpan = serde_json::from_str(r#"{"startDate":"2020"}"#).expect("deserialize open span");
        assert_eq!(open.end(), None);
        assert_eq!(serde_json::to_string(&open).expect("serialize open span"), r#"{"startDate":"2020"}"#);
    }

    #[test]
    fn test_serde_blank_dates_are_absent() {
        let parsed: TimelineSpan =
            serde_json::from_str(r#"{"startDate":"","endDate":"2021"}"#).expect("blank start is absent");
        assert_eq!(parsed, span(Some(""), Some("2021")));
        assert_eq!(parsed.start(), None);

        let parsed: TimelineSpan =
            serde_json::from_str(r#"{"startDate":" 2020-05 ","endDate":"   "}"#).expect("blank end is absent");
        assert_eq!(parsed, TimelineSpan::new(Some(partial("2020-05")), None));

        let parsed: TimelineSpan = serde_json::from_str(r#"{"startDate":null}"#).expect("null start is absent");
        assert_eq!(parsed, TimelineSpan::default());

        let result: Result<TimelineSpan, _> = serde_json::from_str(r#"{"startDate":"2020-5"}"#);
        assert!(result.is_err());
    }
}
