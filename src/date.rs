use chrono::{NaiveDate, Utc};
use log::warn;

pub(crate) const DATE_KEY_FORMAT: &str = "%Y%m%d";
const DISPLAY_FORMAT: &str = "%B %d, %Y";
const LINK_FORMAT: &str = "%Y.%m.%d";

/// Parses a post date key. A key that does not match `format` falls back to
/// the current UTC date.
pub(crate) fn parse_date(date_key: &str, format: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_key, format).unwrap_or_else(|e| {
        warn!("Invalid date key {date_key:?} ({e}). using today instead");
        Utc::now().date_naive()
    })
}

pub(crate) fn format_for_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub(crate) fn format_for_link(date: NaiveDate, docroot: &str) -> String {
    format!("{docroot}/posts/{}.post.html", date.format(LINK_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_keys() {
        assert_eq!(
            parse_date("20230615", DATE_KEY_FORMAT),
            NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
        );
    }

    #[test]
    fn malformed_key_falls_back_to_today() {
        let before = Utc::now().date_naive();
        let parsed = parse_date("2023-13-45", DATE_KEY_FORMAT);
        let after = Utc::now().date_naive();
        assert!(parsed == before || parsed == after);
    }

    #[test]
    fn display_uses_long_month() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(format_for_display(date), "January 01, 2023");
    }

    #[test]
    fn links_are_distinct_per_date() {
        let a = parse_date("20230101", DATE_KEY_FORMAT);
        let b = parse_date("20230110", DATE_KEY_FORMAT);
        assert_eq!(format_for_link(a, ".."), "../posts/2023.01.01.post.html");
        assert_eq!(format_for_link(b, ""), "/posts/2023.01.10.post.html");
        assert_ne!(format_for_link(a, ".."), format_for_link(b, ".."));
    }
}
