// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Shared fixtures for report tests: the canonical closed-room dataset and
//! request builders around the February 2025 reporting window.

use posada_report::{
    ClosedRoomInterval, Granularity, PeriodMetrics, ReportRequest, RoomType, RoomTypeFilter,
    parse_report_date,
};
use time::Date;

/// Parses a `"DD Mon YYYY"` literal, panicking on typos in test input.
pub fn report_date(input: &str) -> Date {
    parse_report_date(input).expect("fixture date should parse")
}

/// The property's seeded closure dataset: three rooms withdrawn across
/// February 2025 for maintenance, renovation, and water damage.
pub fn february_closures() -> Vec<ClosedRoomInterval> {
    vec![
        ClosedRoomInterval {
            room_id: 5,
            room_type: RoomType::Standard,
            reason: "Maintenance".to_owned(),
            start: report_date("01 Feb 2025"),
            end: report_date("10 Feb 2025"),
        },
        ClosedRoomInterval {
            room_id: 12,
            room_type: RoomType::Deluxe,
            reason: "Renovation".to_owned(),
            start: report_date("05 Feb 2025"),
            end: report_date("20 Feb 2025"),
        },
        ClosedRoomInterval {
            room_id: 17,
            room_type: RoomType::Suite,
            reason: "Water Damage".to_owned(),
            start: report_date("15 Feb 2025"),
            end: report_date("28 Feb 2025"),
        },
    ]
}

/// A request over `[from, to]` with every other knob at its default.
pub fn range_request(from: &str, to: &str, granularity: Granularity) -> ReportRequest {
    ReportRequest {
        from: Some(report_date(from)),
        to: Some(report_date(to)),
        granularity,
        ..ReportRequest::default()
    }
}

/// February 2025 in full, with the seeded closures attached and counted.
pub fn february_request(granularity: Granularity) -> ReportRequest {
    ReportRequest {
        include_closed_rooms: true,
        closed_rooms: february_closures(),
        ..range_request("01 Feb 2025", "28 Feb 2025", granularity)
    }
}

/// Narrows a request to a single room type.
pub fn filtered(request: ReportRequest, room_type: RoomType) -> ReportRequest {
    ReportRequest {
        room_type: RoomTypeFilter::Only(room_type),
        ..request
    }
}

/// Total occupants across a period's sampled roster.
pub fn roster_occupants(metrics: &PeriodMetrics) -> i64 {
    metrics
        .roster
        .iter()
        .map(|record| record.occupants.len() as i64)
        .sum()
}
