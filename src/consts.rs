/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used when a partial date is resolved
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;

/// Months in a calendar year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Months added to the reference date for the availability label
pub const AVAILABILITY_OFFSET_MONTHS: u32 = 3;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Lengths of the accepted `YYYY`, `YYYY-MM` and `YYYY-MM-DD` forms
pub const YEAR_FORMAT_LEN: usize = 4;
pub const MONTH_FORMAT_LEN: usize = 7;
pub const DAY_FORMAT_LEN: usize = 10;

/// Joins the two ends of a closed range: "mai 2020 - septembre 2023"
pub const RANGE_JOINER: &str = " - ";
/// Prefix of an open-ended range: "depuis mai 2020"
pub const SINCE_PREFIX: &str = "depuis ";
/// Joins years and months in a duration: "1 an et 6 mois"
pub const DURATION_JOINER: &str = " et ";
