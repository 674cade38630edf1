//! French wording shared by every formatter.
//!
//! The month table lives here rather than in the host locale so that the
//! range labels and the availability label always agree.

/// Lowercase French month names, January first.
pub const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Letters that trigger elision of "de" into "d'".
const ELISION_INITIALS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// French name of a 1-based month number; empty for anything outside `1..=12`.
pub fn month_name(month: u32) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|index| FRENCH_MONTHS.get(index))
        .copied()
        .unwrap_or_default()
}

/// Returns `"d'"` before a word starting with a vowel or `y`, `"de "` otherwise.
pub fn de_preposition(word: &str) -> &'static str {
    let elides = word
        .chars()
        .next()
        .is_some_and(|c| ELISION_INITIALS.contains(&c.to_ascii_lowercase()));
    if elides { "d'" } else { "de " }
}

/// "an" or "ans"
pub const fn years_word(years: i32) -> &'static str {
    if years > 1 { "ans" } else { "an" }
}

/// "mois" is invariant in the plural.
pub const MONTHS_WORD: &str = "mois";
