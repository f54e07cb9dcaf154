//! Display dates for invoice headers.

use core::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// Render `t` as `"<day> <MonthName> <year>"`, e.g. `"5 March 2024"`.
///
/// The calendar date is taken in the zone carried by `t`; convert before
/// calling to render in a different zone.
pub fn format_date<Tz>(t: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    t.format("%-d %B %Y").to_string()
}

/// Today's date in the host's local time zone.
pub fn today() -> String {
    format_date(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn day_is_not_zero_padded() {
        let t = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        assert_eq!(format_date(&t), "5 March 2024");
    }

    #[test]
    fn uses_full_english_month_names() {
        let t = Utc.with_ymd_and_hms(2023, 12, 31, 8, 30, 0).unwrap();
        assert_eq!(format_date(&t), "31 December 2023");
    }

    #[test]
    fn calendar_day_follows_the_supplied_zone() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap();
        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(format_date(&utc), "31 January 2024");
        assert_eq!(format_date(&utc.with_timezone(&jakarta)), "1 February 2024");
    }

    #[test]
    fn today_is_not_empty() {
        assert!(!today().is_empty());
    }
}
