//! Jalali (Persian solar Hijri) calendar conversion.
//!
//! Day arithmetic is delegated to `icu_calendar`'s Persian calendar. Precision is one
//! second; times of day are carried through unchanged, so conversion never shifts time zones.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use icu_calendar::Date;
use icu_calendar::cal::Persian;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Wall-clock date and time in the Jalali calendar.
///
/// Invariant: the date exists in the Jalali calendar (month `1..=12`, day within the
/// month, Esfand 30 only in leap years).
pub struct JalaliDateTime {
    year: i32,
    month: u32,
    day: u32,
    time: NaiveTime,
}

impl JalaliDateTime {
    /// Build a Jalali date-time, returning `None` for dates that do not exist.
    pub fn new(year: i32, month: u32, day: u32, time: NaiveTime) -> Option<Self> {
        persian_date(year, month, day)?;
        Some(Self {
            year,
            month,
            day,
            time,
        })
    }

    /// Convert a Gregorian date-time into the Jalali calendar.
    pub fn from_gregorian(value: NaiveDateTime) -> Option<Self> {
        let date = value.date();
        let iso = Date::try_new_iso(
            date.year(),
            u8::try_from(date.month()).ok()?,
            u8::try_from(date.day()).ok()?,
        )
        .ok()?;
        let persian = iso.to_calendar(Persian::new());

        Self::new(
            persian.extended_year(),
            u32::from(persian.month().ordinal),
            u32::from(persian.day_of_month().0),
            value.time(),
        )
    }

    /// Convert back into the Gregorian calendar.
    pub fn to_gregorian(&self) -> Option<NaiveDateTime> {
        let iso = persian_date(self.year, self.month, self.day)?.to_iso();
        let date = NaiveDate::from_ymd_opt(
            iso.extended_year(),
            u32::from(iso.month().ordinal),
            u32::from(iso.day_of_month().0),
        )?;
        Some(date.and_time(self.time))
    }

    /// Parse the format used by the API in responses: `YYYY/MM/DD HH:MM:SS`.
    pub fn parse_api(input: &str) -> Option<Self> {
        let (date, time) = input.trim().split_once(' ')?;
        let mut parts = date.split('/');
        let year = parse_number(parts.next()?, 4)?;
        let month = parse_number(parts.next()?, 2)?;
        let day = parse_number(parts.next()?, 2)?;
        if parts.next().is_some() {
            return None;
        }
        let time = NaiveTime::parse_from_str(time, "%H:%M:%S").ok()?;
        Self::new(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?, time)
    }

    /// Format for request query parameters: `YYYY-MM-DD HH:MM:SS`.
    pub fn format_query(&self) -> String {
        format!(
            "{:04}-{:02}-{:02} {}",
            self.year,
            self.month,
            self.day,
            self.time.format("%H:%M:%S")
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

impl fmt::Display for JalaliDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02} {}",
            self.year,
            self.month,
            self.day,
            self.time.format("%H:%M:%S")
        )
    }
}

/// Whether `year` is a leap year in the Jalali calendar.
pub fn is_leap_year(year: i32) -> bool {
    persian_date(year, 1, 1).is_some_and(|date| date.is_in_leap_year())
}

fn persian_date(year: i32, month: u32, day: u32) -> Option<Date<Persian>> {
    Date::try_new_persian(year, u8::try_from(month).ok()?, u8::try_from(day).ok()?).ok()
}

fn parse_number(input: &str, width: usize) -> Option<i32> {
    if input.len() != width || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}
