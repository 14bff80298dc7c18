// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Per-period availability, occupancy, pricing, and revenue.
//!
//! Seasonal tables and rates carry the property's historical calibration;
//! changing any entry changes synthesized reports for every caller.

use time::Date;

use crate::calendar::{days_inclusive, each_day, is_weekend, overlap_days};
use crate::closures::ClosedRoomIndex;
use crate::model::{Period, PeriodMetrics, ReportRequest, RoomTypeFilter};
use crate::rng::{MONTHLY_SEED_BASE, SeededSequence};
use crate::roster::{self, NamePool};

const DAILY_WEEKEND_RATE: f64 = 220.0;
const DAILY_WEEKDAY_RATE: f64 = 189.0;
/// Each room-type tier above Standard adds 15% to the daily rate.
const DAILY_TIER_STEP: f64 = 0.15;

const WEEKLY_BASE_OCCUPANCY: [f64; 5] = [0.72, 0.78, 0.68, 0.82, 0.75];
const WEEKLY_OCCUPANCY_JITTER: f64 = 0.05;
const OCCUPANCY_FLOOR: f64 = 0.5;
const OCCUPANCY_CEILING: f64 = 0.95;

const WEEKLY_BASE_ADR: f64 = 250.0;
const DEMAND_SURCHARGE: f64 = 15.0;
const DEMAND_THRESHOLD: f64 = 0.8;

const MONTHLY_OCCUPANCY: [f64; 12] = [
    0.65, 0.775, 0.71, 0.68, 0.72, 0.82, 0.88, 0.90, 0.76, 0.69, 0.72, 0.88,
];
const MONTHLY_ADR: [f64; 12] = [
    230.50, 257.66, 245.80, 235.20, 252.50, 275.30, 290.80, 298.50, 268.75, 245.90, 252.40, 310.25,
];

const GUESTS_PER_SOLD_NIGHT: f64 = 1.6;
const WEEKLY_ROSTER_CAP: i64 = 20;
const MONTHLY_ROSTER_CAP: i64 = 30;

const TAX_MULTIPLIER: f64 = 1.1;

fn tax_multiplier(request: &ReportRequest) -> f64 {
    if request.revenue_includes_tax {
        TAX_MULTIPLIER
    } else {
        1.0
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn unavailable_nights(
    request: &ReportRequest,
    index: &ClosedRoomIndex<'_>,
    span_start: Date,
    span_end: Date,
    clip: Option<(Date, Date)>,
) -> i64 {
    if !request.include_closed_rooms {
        return 0;
    }
    each_day(span_start, span_end)
        .filter(|day| clip.is_none_or(|(from, to)| *day >= from && *day <= to))
        .map(|day| index.count_unavailable(day, request.room_type))
        .sum()
}

/// One day: availability after closures, a uniform sold draw, and the
/// weekend/weekday rate ladder.
pub(crate) fn build_daily(
    request: &ReportRequest,
    index: &ClosedRoomIndex<'_>,
    period: Period,
    day_index: usize,
    rng: &mut SeededSequence,
) -> PeriodMetrics {
    let date = period.start;
    let unavailable = unavailable_nights(request, index, date, date, None);
    let available = request.room_type.capacity() - unavailable;

    let draw = rng.next_fraction();
    let sold = if available > 0 {
        (draw * (available + 1) as f64) as i64
    } else {
        0
    };

    let mut roster = Vec::with_capacity(sold as usize);
    let mut guest_count = 0;
    for slot in 0..sold {
        let record = roster::daily_room(
            rng,
            request.room_type,
            date,
            format!("guest-{day_index}-{slot}"),
        );
        guest_count += record.occupants.len() as i64;
        roster.push(record);
    }

    let base_rate = if is_weekend(date) {
        DAILY_WEEKEND_RATE
    } else {
        DAILY_WEEKDAY_RATE
    };
    let rate = match request.room_type {
        RoomTypeFilter::Only(room_type) => {
            base_rate * (1.0 + room_type.tier_index() as f64 * DAILY_TIER_STEP)
        }
        RoomTypeFilter::All => base_rate,
    };
    let revenue = rate * sold as f64 * tax_multiplier(request);

    PeriodMetrics {
        occupancy_pct: ratio(sold as f64 * 100.0, available as f64),
        rev_par: ratio(revenue, available as f64),
        adr: ratio(revenue, sold as f64),
        period,
        available_rooms: available,
        sold_rooms: sold,
        guest_count,
        revenue,
        unavailable_rooms: unavailable,
        roster,
    }
}

/// One Sunday-aligned week window: room-nights after closures, the
/// five-week occupancy cycle with jitter, and the cyclical ADR schedule.
pub(crate) fn build_weekly(
    request: &ReportRequest,
    index: &ClosedRoomIndex<'_>,
    period: Period,
    week_index: usize,
    from: Date,
    to: Date,
    rng: &mut SeededSequence,
) -> PeriodMetrics {
    let days_in_range = overlap_days(from, to, period.start, period.end);
    let unavailable = unavailable_nights(
        request,
        index,
        period.start,
        period.end,
        Some((from, to)),
    );

    let capacity = request.room_type.capacity();
    let average_unavailable = unavailable as f64 / days_in_range as f64;
    let available_nights = (capacity as f64 - average_unavailable) * days_in_range as f64;

    let jitter = rng.next_fraction() * WEEKLY_OCCUPANCY_JITTER * 2.0 - WEEKLY_OCCUPANCY_JITTER;
    let base = WEEKLY_BASE_OCCUPANCY[week_index % WEEKLY_BASE_OCCUPANCY.len()];
    let occupancy_rate = (base + jitter).clamp(OCCUPANCY_FLOOR, OCCUPANCY_CEILING);

    let sold_nights = (available_nights * occupancy_rate).round() as i64;
    let guest_count = (sold_nights as f64 * GUESTS_PER_SOLD_NIGHT).floor() as i64;

    let adjustment = match week_index % 4 {
        1 => 20.0,
        2 => -15.0,
        _ => 5.0,
    };
    let surcharge = if occupancy_rate > DEMAND_THRESHOLD {
        DEMAND_SURCHARGE
    } else {
        0.0
    };
    let adr_rate = WEEKLY_BASE_ADR + adjustment + surcharge;
    let revenue = (adr_rate * sold_nights as f64).round() * tax_multiplier(request);

    let sample_size = guest_count.min(WEEKLY_ROSTER_CAP);
    let mut roster = Vec::with_capacity(sample_size.max(0) as usize);
    for slot in 0..sample_size {
        roster.push(roster::period_guest(
            rng,
            request.room_type,
            period.start,
            days_in_range,
            5,
            NamePool::Compact,
            format!("week-guest-{week_index}-{slot}"),
        ));
    }

    PeriodMetrics {
        occupancy_pct: ratio(sold_nights as f64 * 100.0, available_nights),
        rev_par: ratio(revenue, available_nights),
        adr: ratio(revenue, sold_nights as f64),
        period,
        available_rooms: available_nights.round() as i64,
        sold_rooms: sold_nights,
        guest_count,
        revenue,
        unavailable_rooms: unavailable,
        roster,
    }
}

/// One clipped calendar month: seasonal occupancy and ADR lookups, with a
/// dedicated roster stream per calendar month.
pub(crate) fn build_monthly(
    request: &ReportRequest,
    index: &ClosedRoomIndex<'_>,
    period: Period,
) -> PeriodMetrics {
    let days = days_inclusive(period.start, period.end);
    let unavailable = unavailable_nights(request, index, period.start, period.end, None);

    let capacity = request.room_type.capacity();
    let available_nights = (capacity * days - unavailable) as f64;

    let month_index = period.start.month() as usize - 1;
    let occupancy_rate = MONTHLY_OCCUPANCY[month_index];
    let sold_nights = (available_nights * occupancy_rate).round() as i64;
    let guest_count = (sold_nights as f64 * GUESTS_PER_SOLD_NIGHT).floor() as i64;

    let adr_rate = MONTHLY_ADR[month_index];
    let revenue = adr_rate * sold_nights as f64 * tax_multiplier(request);

    let mut rng = SeededSequence::new(MONTHLY_SEED_BASE + month_index as u64);
    let sample_size = guest_count.min(MONTHLY_ROSTER_CAP);
    let mut roster = Vec::with_capacity(sample_size.max(0) as usize);
    for slot in 0..sample_size {
        roster.push(roster::period_guest(
            &mut rng,
            request.room_type,
            period.start,
            days,
            7,
            NamePool::Extended,
            format!("month-guest-{month_index}-{slot}"),
        ));
    }

    PeriodMetrics {
        occupancy_pct: ratio(sold_nights as f64 * 100.0, available_nights),
        rev_par: ratio(revenue, available_nights),
        adr: ratio(revenue, sold_nights as f64),
        period,
        available_rooms: available_nights.round() as i64,
        sold_rooms: sold_nights,
        guest_count,
        revenue,
        unavailable_rooms: unavailable,
        roster,
    }
}
