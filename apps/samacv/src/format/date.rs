//! Date display in the fixed fr-FR locale ("juin 2023").
//!
//! Dates are free-form strings typed by the user. Recognized shapes are parsed
//! with chrono; anything else is shown as typed.

use chrono::{DateTime, Datelike, NaiveDate};
use tracing::debug;

use crate::errors::FormatError;

/// Shown in place of an empty date: the entry is still running.
pub const ONGOING: &str = "En cours";

/// Abbreviated month names, as the browser's fr-FR `Intl` formatter prints them.
const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Formats a raw date for display.
///
/// Empty input yields [`ONGOING`]. Unrecognized input is returned trimmed and
/// otherwise untouched.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ONGOING.to_string();
    }
    match parse_date(trimmed) {
        Ok(date) => format!("{} {}", MONTHS_FR[date.month0() as usize], date.year()),
        Err(e) => {
            debug!(error = %e, "date shown as typed");
            trimmed.to_string()
        }
    }
}

/// `"{start} - {end}"`, both sides through [`format_date`].
pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, `DD/MM/YYYY` and RFC 3339 timestamps.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, FormatError> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        return Ok(d);
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01-01"), "%Y-%m-%d") {
            return Ok(d);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    Err(FormatError::UnrecognizedDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_date_is_ongoing() {
        assert_eq!(format_date(""), ONGOING);
        assert_eq!(format_date("   "), ONGOING);
    }

    #[test]
    fn test_iso_date_formats_french_abbreviation() {
        assert_eq!(format_date("2023-06-01"), "juin 2023");
        assert_eq!(format_date("2019-02-14"), "févr. 2019");
        assert_eq!(format_date("2020-12-31"), "déc. 2020");
    }

    #[test]
    fn test_month_input_shape() {
        assert_eq!(format_date("2021-09"), "sept. 2021");
    }

    #[test]
    fn test_year_only() {
        assert_eq!(format_date("2018"), "janv. 2018");
    }

    #[test]
    fn test_french_day_first_shape() {
        assert_eq!(format_date("15/08/2022"), "août 2022");
    }

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(format_date("2024-04-10T08:30:00Z"), "avr. 2024");
    }

    #[test]
    fn test_unparsable_date_falls_back_to_raw() {
        assert_eq!(format_date(" printemps 2020 "), "printemps 2020");
        assert_eq!(format_date("2023-13-01"), "2023-13-01");
    }

    #[test]
    fn test_parse_date_reports_format_error() {
        assert_eq!(
            parse_date("hier"),
            Err(FormatError::UnrecognizedDate("hier".to_string()))
        );
    }

    #[test]
    fn test_range_with_open_end() {
        assert_eq!(
            format_date_range("2022-03-01", ""),
            "mars 2022 - En cours"
        );
    }

    #[test]
    fn test_every_month_has_a_label() {
        for m in 1..=12 {
            let formatted = format_date(&format!("2020-{m:02}-01"));
            assert!(formatted.ends_with(" 2020"), "month {m}: {formatted}");
            assert!(!formatted.starts_with("2020"), "month {m} not localized");
        }
    }
}
