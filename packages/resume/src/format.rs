//! Display helpers shared by the preview renderer and the editors.
//!
//! None of these functions fail: input that cannot be interpreted is shown as
//! typed.

use chrono::NaiveDate;

/// Shown as the end of a date range for an ongoing position.
pub const PRESENT: &str = "Present";

/// Avatar initials when no name has been entered.
pub const PLACEHOLDER_INITIALS: &str = "YN";

/// `"2023-06"` → `"Jun 2023"`. Empty or malformed input comes back unchanged.
pub fn format_month(value: &str) -> String {
    parse_month(value).unwrap_or_else(|| value.to_string())
}

/// Accepts exactly `YYYY-M` or `YYYY-MM`.
fn parse_month(value: &str) -> Option<String> {
    let (year, month) = value.split_once('-')?;
    if year.len() != 4 || !(1..=2).contains(&month.len()) {
        return None;
    }
    if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?;
    Some(date.format("%b %Y").to_string())
}

/// `"Jan 2020 - Present"`, `"Jan 2020 - Mar 2022"`.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current {
        PRESENT.to_string()
    } else {
        format_month(end)
    };
    format!("{} - {}", format_month(start), end)
}

/// Two-letter avatar initials derived from a full name.
///
/// A single word gives its first two letters, several words give the first
/// letter of the first and last word.
pub fn initials(full_name: &str) -> String {
    let words: Vec<&str> = full_name.split_whitespace().collect();
    let initials: String = match words.as_slice() {
        [] => return PLACEHOLDER_INITIALS.to_string(),
        [only] => only.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };
    initials.to_uppercase()
}

/// Navigation target for a user-entered link. Adds `https://` when no scheme
/// is present; the stored value is left as typed.
pub fn link_href(value: &str) -> String {
    let value = value.trim();
    if value.contains("://") || value.starts_with("mailto:") {
        value.to_string()
    } else {
        format!("https://{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2023-06"), "Jun 2023");
        assert_eq!(format_month("1999-12"), "Dec 1999");
        assert_eq!(format_month("2023-6"), "Jun 2023");
    }

    #[test]
    fn test_format_month_passes_through_bad_input() {
        assert_eq!(format_month(""), "");
        assert_eq!(format_month("not-a-date"), "not-a-date");
        assert_eq!(format_month("2023"), "2023");
        assert_eq!(format_month("2023-13"), "2023-13");
        assert_eq!(format_month("2023-00"), "2023-00");
    }

    #[test]
    fn test_format_month_rejects_partial_matches() {
        assert_eq!(format_month("2023-06abc"), "2023-06abc");
        assert_eq!(format_month("2023-06-99x"), "2023-06-99x");
        assert_eq!(format_month("2021-02-15"), "2021-02-15");
        assert_eq!(format_month("20-06"), "20-06");
        assert_eq!(format_month(" 2023-06"), " 2023-06");
        assert_eq!(format_month("2023-006"), "2023-006");
        assert_eq!(format_month("+023-06"), "+023-06");
    }

    #[test]
    fn test_date_range() {
        assert_eq!(date_range("2020-01", "2022-03", false), "Jan 2020 - Mar 2022");
        assert_eq!(date_range("2020-01", "", true), "Jan 2020 - Present");
        assert_eq!(date_range("2020-01", "2022-03", true), "Jan 2020 - Present");
        assert_eq!(date_range("", "", false), " - ");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("Grace Brewster Murray Hopper"), "GH");
        assert_eq!(initials("plato"), "PL");
        assert_eq!(initials("  "), "YN");
        assert_eq!(initials(""), "YN");
        assert_eq!(initials("X"), "X");
    }

    #[test]
    fn test_link_href() {
        assert_eq!(link_href("linkedin.com/in/ada"), "https://linkedin.com/in/ada");
        assert_eq!(link_href("http://ada.dev"), "http://ada.dev");
        assert_eq!(link_href("https://ada.dev"), "https://ada.dev");
        assert_eq!(link_href(" ada.dev "), "https://ada.dev");
    }
}
