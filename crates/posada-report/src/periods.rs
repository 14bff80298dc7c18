// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::{Date, Duration};

use crate::calendar::{
    days_in_month, days_inclusive, each_day, first_of_month, format_report_date, last_of_month,
    month_name, next_month_start, overlap_days, week_start_sunday,
};
use crate::model::{Granularity, Period};

/// Expands a date range into ordered period buckets. Inverted ranges
/// produce no periods; they are not an error.
pub fn expand(from: Date, to: Date, granularity: Granularity) -> Vec<Period> {
    match granularity {
        Granularity::Day => expand_days(from, to),
        Granularity::Week => expand_weeks(from, to),
        Granularity::Month => expand_months(from, to),
    }
}

fn expand_days(from: Date, to: Date) -> Vec<Period> {
    each_day(from, to)
        .map(|date| Period {
            label: format_report_date(date),
            start: date,
            end: date,
            granularity: Granularity::Day,
        })
        .collect()
}

/// Consecutive 7-day windows anchored on the Sunday on or before `from`.
/// Windows keep their full span; the label notes how many days overlap the
/// requested range when the window is clipped.
fn expand_weeks(from: Date, to: Date) -> Vec<Period> {
    let mut periods = Vec::new();
    let mut window_start = week_start_sunday(from);

    while window_start <= to {
        let window_end = window_start + Duration::days(6);
        let overlap = overlap_days(from, to, window_start, window_end);
        if overlap > 0 {
            let span = format!(
                "{} - {}",
                format_report_date(window_start),
                format_report_date(window_end),
            );
            let label = if overlap < 7 {
                format!("{span} ({overlap} days)")
            } else {
                span
            };
            periods.push(Period {
                label,
                start: window_start,
                end: window_end,
                granularity: Granularity::Week,
            });
        }
        window_start += Duration::days(7);
    }

    periods
}

/// Calendar months from the month containing `from` through the month
/// containing `to`, each clipped to the requested range.
fn expand_months(from: Date, to: Date) -> Vec<Period> {
    let mut periods = Vec::new();
    let mut month_first = first_of_month(from);

    while month_first <= to {
        let month_last = last_of_month(month_first);
        let clipped_start = from.max(month_first);
        let clipped_end = to.min(month_last);
        let overlap = days_inclusive(clipped_start, clipped_end);

        if overlap > 0 {
            let full_month = i64::from(days_in_month(month_first.year(), month_first.month()));
            let name = format!("{} {}", month_name(month_first.month()), month_first.year());
            let label = if overlap < full_month {
                format!("{name} ({overlap} days)")
            } else {
                name
            };
            periods.push(Period {
                label,
                start: clipped_start,
                end: clipped_end,
                granularity: Granularity::Month,
            });
        }

        month_first = next_month_start(month_first);
    }

    periods
}
