// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Report entry points. One invocation computes one full report from its
//! request; nothing is shared or retained between invocations.

use tracing::debug;

use crate::closures::ClosedRoomIndex;
use crate::metrics;
use crate::model::{Granularity, GuestRecord, PeriodMetrics, ReportRequest, SummaryMetrics};
use crate::periods;
use crate::rng::{DAILY_SEED, SeededSequence, WEEKLY_SEED};

/// Synthesizes one period row per bucket of the requested range. Returns
/// an empty report when either range endpoint is absent; an inverted range
/// simply expands to zero periods.
pub fn generate_report(request: &ReportRequest) -> Vec<PeriodMetrics> {
    let (Some(from), Some(to)) = (request.from, request.to) else {
        return Vec::new();
    };

    let expanded = periods::expand(from, to, request.granularity);
    debug!(
        granularity = request.granularity.as_str(),
        room_type = request.room_type.as_str(),
        periods = expanded.len(),
        "generating report"
    );

    let index = ClosedRoomIndex::new(&request.closed_rooms);
    match request.granularity {
        Granularity::Day => {
            let mut rng = SeededSequence::new(DAILY_SEED);
            expanded
                .into_iter()
                .enumerate()
                .map(|(day_index, period)| {
                    metrics::build_daily(request, &index, period, day_index, &mut rng)
                })
                .collect()
        }
        Granularity::Week => {
            let mut rng = SeededSequence::new(WEEKLY_SEED);
            expanded
                .into_iter()
                .enumerate()
                .map(|(week_index, period)| {
                    metrics::build_weekly(request, &index, period, week_index, from, to, &mut rng)
                })
                .collect()
        }
        Granularity::Month => expanded
            .into_iter()
            .map(|period| metrics::build_monthly(request, &index, period))
            .collect(),
    }
}

/// Folds period rows into the totals row. Every ratio is recomputed from
/// the summed totals; averaging per-period percentages would overweight
/// short periods.
pub fn summarize(periods: &[PeriodMetrics]) -> SummaryMetrics {
    let available: i64 = periods.iter().map(|p| p.available_rooms).sum();
    let occupied: i64 = periods.iter().map(|p| p.sold_rooms).sum();
    let guests: i64 = periods.iter().map(|p| p.guest_count).sum();
    let unavailable_rooms: i64 = periods.iter().map(|p| p.unavailable_rooms).sum();
    let revenue: f64 = periods.iter().map(|p| p.revenue).sum();

    let occupancy_pct = if available > 0 {
        occupied as f64 / available as f64 * 100.0
    } else {
        0.0
    };
    let rev_par = if available > 0 {
        revenue / available as f64
    } else {
        0.0
    };
    let adr = if occupied > 0 {
        revenue / occupied as f64
    } else {
        0.0
    };

    SummaryMetrics {
        available,
        occupied,
        guests,
        unavailable_rooms,
        occupancy_pct,
        rev_par,
        adr,
        revenue,
    }
}

/// Guest roster for the period whose display label matches exactly.
/// Unknown labels yield an empty roster, not an error.
pub fn find_roster<'a>(periods: &'a [PeriodMetrics], label: &str) -> &'a [GuestRecord] {
    periods
        .iter()
        .find(|metrics| metrics.period.label == label)
        .map(|metrics| metrics.roster.as_slice())
        .unwrap_or(&[])
}
