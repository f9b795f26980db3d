use chrono::{Datelike, Days, Local, NaiveDateTime};

use crate::utils::section;

/// `yyyy-MM-dd HH:mm:ss`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The current wall-clock time in the local zone, without the offset.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_timestamp(moment: &NaiveDateTime) -> String {
    moment.format(TIMESTAMP_FORMAT).to_string()
}

/// Full month name in upper case, e.g. `OCTOBER`.
pub fn month_name(moment: &NaiveDateTime) -> String {
    moment.format("%B").to_string().to_uppercase()
}

/// Full weekday name in upper case, e.g. `SUNDAY`.
pub fn weekday_name(moment: &NaiveDateTime) -> String {
    moment.format("%A").to_string().to_uppercase()
}

/// `moment` shifted forward by whole calendar days, keeping the time of day.
/// `None` only past the end of the representable range.
pub fn days_later(moment: &NaiveDateTime, days: u64) -> Option<NaiveDateTime> {
    moment.checked_add_days(Days::new(days))
}

pub fn run() {
    section("⏰ Date and time");

    let current = now();
    println!("Now: {}", format_timestamp(&current));
    println!("Year: {}", current.year());
    println!("Month: {}", month_name(&current));
    println!("Weekday: {}", weekday_name(&current));

    match days_later(&current, 30) {
        Some(future) => println!("30 days later: {}", format_timestamp(&future)),
        None => println!("30 days later: out of range"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn formats_with_zero_padding() {
        let moment = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        assert_eq!(format_timestamp(&moment), "2024-03-05 07:08:09");
    }

    #[test]
    fn thirty_days_crosses_the_month() {
        let later = days_later(&at(2024, 1, 15), 30).unwrap();
        assert_eq!(format_timestamp(&later), "2024-02-14 10:00:00");
    }

    #[test]
    fn thirty_days_respects_leap_years() {
        let later = days_later(&at(2024, 2, 15), 30).unwrap();
        assert_eq!(later, at(2024, 3, 16));
    }

    #[test]
    fn names_month_and_weekday() {
        let moment = at(2026, 10, 18);
        assert_eq!(month_name(&moment), "OCTOBER");
        assert_eq!(weekday_name(&moment), "SUNDAY");
    }
}
