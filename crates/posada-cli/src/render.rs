// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use posada_report::{
    Granularity, GuestRecord, PeriodMetrics, RoomType, SummaryMetrics, calendar,
};
use serde::Serialize;
use std::fmt::Write as _;

/// Percentages render to one decimal, currency to two. Rounding happens
/// here and nowhere earlier; the engine carries raw values.
fn pct(value: f64) -> String {
    format!("{value:.1}")
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

pub fn render_report(
    periods: &[PeriodMetrics],
    summary: &SummaryMetrics,
    granularity: Granularity,
) -> String {
    let mut out = String::new();
    let daily = granularity == Granularity::Day;
    let period_heading = if daily { "Date" } else { "Period" };
    let day_heading = if daily { "Day" } else { "" };

    let _ = writeln!(
        out,
        "{period_heading:<34} {day_heading:<10} {:>9} {:>6} {:>7} {:>7} {:>9} {:>9} {:>12} {:>7}",
        "Available", "Sold", "Guests", "Occ %", "RevPAR", "ADR", "Revenue", "Closed",
    );

    for metrics in periods {
        let day = if daily {
            calendar::weekday_name(metrics.period.start)
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{:<34} {day:<10} {:>9} {:>6} {:>7} {:>7} {:>9} {:>9} {:>12} {:>7}",
            metrics.period.label,
            metrics.available_rooms,
            metrics.sold_rooms,
            metrics.guest_count,
            pct(metrics.occupancy_pct),
            money(metrics.rev_par),
            money(metrics.adr),
            money(metrics.revenue),
            metrics.unavailable_rooms,
        );
    }

    let _ = writeln!(
        out,
        "{:<34} {:<10} {:>9} {:>6} {:>7} {:>7} {:>9} {:>9} {:>12} {:>7}",
        "Total",
        "",
        summary.available,
        summary.occupied,
        summary.guests,
        pct(summary.occupancy_pct),
        money(summary.rev_par),
        money(summary.adr),
        money(summary.revenue),
        summary.unavailable_rooms,
    );

    out
}

pub fn render_roster(label: &str, roster: &[GuestRecord], guest_count: i64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Guest list for {label}");

    if roster.is_empty() {
        let _ = writeln!(out, "  no guests for this period");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<6} {:<10} {:<22} {:>5} {:<12} {:<12} {:<16} Notes",
        "Room", "Type", "Primary Guest", "Party", "Check-in", "Check-out", "Phone",
    );
    for record in roster {
        let _ = writeln!(
            out,
            "{:<6} {:<10} {:<22} {:>5} {:<12} {:<12} {:<16} {}",
            record.room,
            record.room_type.as_str(),
            record.primary_guest,
            record.occupants.len(),
            calendar::format_report_date(record.check_in),
            calendar::format_report_date(record.check_out),
            record.phone,
            record.notes.as_deref().unwrap_or("-"),
        );
    }
    let _ = writeln!(
        out,
        "{} guests in period, {} sampled",
        guest_count,
        roster.len()
    );

    out
}

pub fn render_room_types() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>6} {:>7} {:>7} {:>10} {:>7}",
        "Room Type", "Rooms", "Min", "Max", "Base Rate", "Floor",
    );
    for room_type in RoomType::ALL {
        let config = room_type.config();
        let _ = writeln!(
            out,
            "{:<12} {:>6} {:>7} {:>7} {:>10} {:>7}",
            room_type.as_str(),
            config.rooms,
            config.min_guests,
            config.max_guests,
            money(config.base_rate),
            config.floor_start,
        );
    }
    let total: i64 = RoomType::ALL.iter().map(|rt| rt.config().rooms).sum();
    let _ = writeln!(out, "{total} rooms in total");
    out
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    periods: &'a [PeriodMetrics],
    summary: &'a SummaryMetrics,
}

pub fn report_json(periods: &[PeriodMetrics], summary: &SummaryMetrics) -> Result<String> {
    let document = ReportDocument { periods, summary };
    Ok(serde_json::to_string_pretty(&document)?)
}

#[derive(Serialize)]
struct RosterDocument<'a> {
    period: &'a str,
    guest_count: i64,
    roster: &'a [GuestRecord],
}

pub fn roster_json(label: &str, roster: &[GuestRecord], guest_count: i64) -> Result<String> {
    let document = RosterDocument {
        period: label,
        guest_count,
        roster,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
