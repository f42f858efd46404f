use crate::document::Section;
use crate::extraction::Diagnostics;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Date-time formats tried in order, most common vendor output first
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d-%b-%Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %H:%M:%S",
    "%Y%m%d%H%M%S",
];

/// Date-only formats; these resolve to midnight
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%b-%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%Y%m%d",
];

/// Extracts the digitization timestamp from the image section
///
/// Scanner software writes the acquisition date in whatever format the
/// machine's locale produced, so parsing is permissive: RFC 3339 first,
/// then an ordered list of date-time and date-only formats. The raw text
/// is bound before any parse attempt and quoted in the diagnostic when
/// every format fails.
pub fn extract_digitization_date(image: &Section, log: &mut Diagnostics) -> Option<NaiveDateTime> {
    let raw = match image.text("acquisitiondateandtime") {
        Some(t) => t,
        None => {
            log.push("no acquisition date and time field");
            return None;
        }
    };

    match parse_permissive(raw) {
        Some(dt) => Some(dt),
        None => {
            log.push(format!("unparseable acquisition date and time '{}'", raw));
            None
        }
    }
}

/// Parses a date-time from any of the accepted textual formats
pub fn parse_permissive(raw: &str) -> Option<NaiveDateTime> {
    let s = WHITESPACE.replace_all(raw.trim(), " ");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Some(dt.naive_local());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&s, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&s, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn image_with(raw: &str) -> Section {
        let mut s = Section::default();
        s.record("acquisitiondateandtime", raw.to_string());
        s
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[rstest]
    #[case("2017-03-14T10:30:00", at(2017, 3, 14, 10, 30, 0))]
    #[case("2017-03-14T10:30:00+02:00", at(2017, 3, 14, 10, 30, 0))]
    #[case("2017-03-14 10:30:00", at(2017, 3, 14, 10, 30, 0))]
    #[case("2017/03/14 10:30:00", at(2017, 3, 14, 10, 30, 0))]
    #[case("3/14/2017 10:30:00 AM", at(2017, 3, 14, 10, 30, 0))]
    #[case("3/14/2017 22:30", at(2017, 3, 14, 22, 30, 0))]
    #[case("14-Mar-2017 10:30:00", at(2017, 3, 14, 10, 30, 0))]
    #[case("March 14, 2017 10:30:00", at(2017, 3, 14, 10, 30, 0))]
    #[case("20170314103000", at(2017, 3, 14, 10, 30, 0))]
    #[case("2017-03-14", at(2017, 3, 14, 0, 0, 0))]
    #[case("March 14, 2017", at(2017, 3, 14, 0, 0, 0))]
    fn test_accepted_formats(#[case] raw: &str, #[case] expected: NaiveDateTime) {
        assert_eq!(parse_permissive(raw), Some(expected));
    }

    #[test]
    fn test_interior_whitespace_collapsed() {
        assert_eq!(
            parse_permissive("  March  14,   2017 "),
            Some(at(2017, 3, 14, 0, 0, 0))
        );
    }

    #[test]
    fn test_rejects_nonsense() {
        assert_eq!(parse_permissive("not a date"), None);
        assert_eq!(parse_permissive(""), None);
    }

    #[test]
    fn test_missing_field_diagnostic() {
        let mut log = Diagnostics::new();
        assert_eq!(extract_digitization_date(&Section::default(), &mut log), None);
        assert!(log.to_string().contains("acquisition date and time"));
    }

    #[test]
    fn test_unparseable_text_is_quoted() {
        let mut log = Diagnostics::new();
        let image = image_with("yesterday-ish");
        assert_eq!(extract_digitization_date(&image, &mut log), None);
        assert!(log.to_string().contains("'yesterday-ish'"));
    }

    #[test]
    fn test_field_extraction() {
        let mut log = Diagnostics::new();
        let image = image_with("2017-03-14T10:30:00");
        assert_eq!(
            extract_digitization_date(&image, &mut log),
            Some(at(2017, 3, 14, 10, 30, 0))
        );
        assert!(log.is_empty());
    }
}
