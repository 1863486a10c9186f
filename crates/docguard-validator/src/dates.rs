//! Date parsing for policy periods

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use docguard_domain::{DateInput, Diagnostics};

/// Normalize a date input to midnight of its calendar day
///
/// Returns `None` for absent input, empty text, and text that is not a
/// zero-padded `YYYY-MM-DD` date. Non-empty text that fails to parse is
/// noted in `diagnostics` under `field`.
pub fn parse_date(
    input: Option<&DateInput>,
    field: &'static str,
    diagnostics: &mut Diagnostics,
) -> Option<NaiveDateTime> {
    let date = match input? {
        DateInput::Date(date) => *date,
        DateInput::DateTime(datetime) => datetime.date(),
        DateInput::Text(text) if text.is_empty() => return None,
        DateInput::Text(text) => match parse_iso_date(text.trim()) {
            Some(date) => date,
            None => {
                diagnostics.push(field, format!("Failed to parse date: {:?}", text));
                return None;
            }
        },
    };

    Some(date.and_time(NaiveTime::MIN))
}

/// Strict `YYYY-MM-DD` parser
///
/// chrono's `%m`/`%d` accept single digits, so the layout is checked by hand
/// before building the date.
fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    // Years start at 0001
    let year = text[0..4].parse::<i32>().ok().filter(|y| *y >= 1)?;
    let month = text[5..7].parse::<u32>().ok()?;
    let day = text[8..10].parse::<u32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: Option<DateInput>) -> (Option<NaiveDateTime>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let parsed = parse_date(input.as_ref(), "policy_start_date", &mut diagnostics);
        (parsed, diagnostics)
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_absent_and_empty_are_silent() {
        let (parsed, diagnostics) = parse(None);
        assert!(parsed.is_none());
        assert!(diagnostics.is_empty());

        let (parsed, diagnostics) = parse(Some(DateInput::text("")));
        assert!(parsed.is_none());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_valid_text_is_trimmed() {
        let (parsed, diagnostics) = parse(Some(DateInput::text("  2025-11-01\n")));
        assert_eq!(parsed, Some(midnight(2025, 11, 1)));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_structured_inputs_normalize_to_midnight() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        let (parsed, _) = parse(Some(DateInput::Date(date)));
        assert_eq!(parsed, Some(midnight(2026, 2, 28)));

        let datetime = date.and_hms_opt(17, 45, 3).unwrap();
        let (parsed, _) = parse(Some(DateInput::DateTime(datetime)));
        assert_eq!(parsed, Some(midnight(2026, 2, 28)));
    }

    #[test]
    fn test_malformed_text_is_rejected_and_noted() {
        let bad = [
            "2025/11/01",
            "25-11-01",
            "2025-1-01",
            "2025-11-1",
            "2025-13-01",
            "2025-02-30",
            "2025-00-10",
            "01-11-2025",
            "November 1, 2025",
            "2025-11-01T00:00:00",
            "+202-11-01",
            "0000-01-01",
            "   ",
        ];

        for text in bad {
            let (parsed, diagnostics) = parse(Some(DateInput::text(text)));
            assert!(parsed.is_none(), "{:?} should not parse", text);
            assert_eq!(diagnostics.entries().len(), 1, "{:?} should be noted", text);
            assert_eq!(diagnostics.entries()[0].field, "policy_start_date");
        }
    }

    #[test]
    fn test_earliest_year() {
        let (parsed, _) = parse(Some(DateInput::text("0001-01-01")));
        assert_eq!(parsed, Some(midnight(1, 1, 1)));
    }

    #[test]
    fn test_leap_day() {
        let (parsed, _) = parse(Some(DateInput::text("2024-02-29")));
        assert_eq!(parsed, Some(midnight(2024, 2, 29)));

        let (parsed, _) = parse(Some(DateInput::text("2023-02-29")));
        assert!(parsed.is_none());
    }
}
