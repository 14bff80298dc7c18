// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Calendar helpers shared by period expansion and label formatting.
//!
//! Report boundaries speak `"DD Mon YYYY"` (for example `"05 Feb 2025"`),
//! three-letter English month abbreviations, weeks aligned to Sunday.

use time::{Date, Duration, Month};

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const DATE_LAYOUT: &str = "DD Mon YYYY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    InvalidLayout(String),
    UnknownMonth(String),
    OutOfRange(String),
}

impl std::fmt::Display for DateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLayout(input) => {
                write!(f, "invalid date {input:?}; expected layout {DATE_LAYOUT}")
            }
            Self::UnknownMonth(month) => {
                write!(f, "unknown month abbreviation {month:?}")
            }
            Self::OutOfRange(input) => {
                write!(f, "date {input:?} does not exist on the calendar")
            }
        }
    }
}

impl std::error::Error for DateParseError {}

pub type DateParseResult<T> = std::result::Result<T, DateParseError>;

/// Parses a `"DD Mon YYYY"` boundary literal. No recovery, no guessing.
pub fn parse_report_date(input: &str) -> DateParseResult<Date> {
    let trimmed = input.trim();
    let parts = trimmed.split_whitespace().collect::<Vec<_>>();
    let [day, month, year] = parts.as_slice() else {
        return Err(DateParseError::InvalidLayout(input.to_owned()));
    };

    let day = day
        .parse::<u8>()
        .map_err(|_| DateParseError::InvalidLayout(input.to_owned()))?;
    let year = year
        .parse::<i32>()
        .map_err(|_| DateParseError::InvalidLayout(input.to_owned()))?;
    let month_index = MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| abbr == month)
        .ok_or_else(|| DateParseError::UnknownMonth((*month).to_owned()))?;
    let month = Month::try_from(month_index as u8 + 1).expect("table index maps to a month");

    Date::from_calendar_date(year, month, day)
        .map_err(|_| DateParseError::OutOfRange(input.to_owned()))
}

/// Formats a date as a `"DD Mon YYYY"` boundary literal.
pub fn format_report_date(date: Date) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        month_abbreviation(date.month()),
        date.year(),
    )
}

pub fn month_abbreviation(month: Month) -> &'static str {
    MONTH_ABBREVIATIONS[month as usize - 1]
}

pub fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[month as usize - 1]
}

pub fn weekday_name(date: Date) -> &'static str {
    WEEKDAY_NAMES[date.weekday().number_days_from_sunday() as usize]
}

pub fn is_weekend(date: Date) -> bool {
    let index = date.weekday().number_days_from_sunday();
    index == 0 || index == 6
}

/// Number of calendar days in the inclusive span `[start, end]`.
/// Zero when the span is inverted.
pub fn days_inclusive(start: Date, end: Date) -> i64 {
    if end < start {
        return 0;
    }
    (end - start).whole_days() + 1
}

/// Days shared by `[range_start, range_end]` and `[window_start, window_end]`,
/// both inclusive. Zero when they do not overlap.
pub fn overlap_days(
    range_start: Date,
    range_end: Date,
    window_start: Date,
    window_end: Date,
) -> i64 {
    let start = range_start.max(window_start);
    let end = range_end.min(window_end);
    days_inclusive(start, end)
}

/// The Sunday on or before `date`.
pub fn week_start_sunday(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_sunday()))
}

pub fn first_of_month(date: Date) -> Date {
    Date::from_calendar_date(date.year(), date.month(), 1).expect("day 1 exists in every month")
}

pub fn last_of_month(date: Date) -> Date {
    let day = days_in_month(date.year(), date.month());
    Date::from_calendar_date(date.year(), date.month(), day).expect("derived day is valid")
}

pub fn days_in_month(year: i32, month: Month) -> u8 {
    let (next_year, next_month) = if month == Month::December {
        (year + 1, Month::January)
    } else {
        (
            year,
            Month::try_from(month as u8 + 1).expect("next month exists"),
        )
    };
    let first_next = Date::from_calendar_date(next_year, next_month, 1).expect("valid date");
    let last = first_next.previous_day().expect("previous day exists");
    last.day()
}

/// First day of the month after the one containing `date`.
pub fn next_month_start(date: Date) -> Date {
    let (year, month) = if date.month() == Month::December {
        (date.year() + 1, Month::January)
    } else {
        (
            date.year(),
            Month::try_from(date.month() as u8 + 1).expect("next month exists"),
        )
    };
    Date::from_calendar_date(year, month, 1).expect("day 1 exists in every month")
}

/// Iterates every date in `[start, end]` inclusive. Empty when inverted.
pub fn each_day(start: Date, end: Date) -> impl Iterator<Item = Date> {
    std::iter::successors(
        if start <= end { Some(start) } else { None },
        move |&date| {
            let next = date.next_day()?;
            (next <= end).then_some(next)
        },
    )
}

/// Serde adapter so boundary dates serialize in the report layout.
pub mod serde_report_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_report_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_report_date(&raw).map_err(D::Error::custom)
    }
}
