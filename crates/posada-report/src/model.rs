// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::Serialize;
use time::Date;

use crate::calendar::serde_report_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "daily",
            Self::Week => "weekly",
            Self::Month => "monthly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Day),
            "weekly" => Some(Self::Week),
            "monthly" => Some(Self::Month),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Executive,
    Family,
}

/// Static inventory configuration for one room type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomTypeConfig {
    pub min_guests: i64,
    pub max_guests: i64,
    pub base_rate: f64,
    pub floor_start: i64,
    pub rooms: i64,
}

impl RoomType {
    pub const ALL: [Self; 5] = [
        Self::Standard,
        Self::Deluxe,
        Self::Suite,
        Self::Executive,
        Self::Family,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Deluxe => "Deluxe",
            Self::Suite => "Suite",
            Self::Executive => "Executive",
            Self::Family => "Family",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "deluxe" => Some(Self::Deluxe),
            "suite" => Some(Self::Suite),
            "executive" => Some(Self::Executive),
            "family" => Some(Self::Family),
            _ => None,
        }
    }

    pub const fn config(self) -> RoomTypeConfig {
        match self {
            Self::Standard => RoomTypeConfig {
                min_guests: 1,
                max_guests: 2,
                base_rate: 189.0,
                floor_start: 1,
                rooms: 4,
            },
            Self::Deluxe => RoomTypeConfig {
                min_guests: 1,
                max_guests: 3,
                base_rate: 229.0,
                floor_start: 2,
                rooms: 4,
            },
            Self::Suite => RoomTypeConfig {
                min_guests: 2,
                max_guests: 4,
                base_rate: 299.0,
                floor_start: 3,
                rooms: 4,
            },
            Self::Executive => RoomTypeConfig {
                min_guests: 2,
                max_guests: 4,
                base_rate: 359.0,
                floor_start: 4,
                rooms: 4,
            },
            Self::Family => RoomTypeConfig {
                min_guests: 2,
                max_guests: 6,
                base_rate: 399.0,
                floor_start: 5,
                rooms: 4,
            },
        }
    }

    /// Position in the pricing ladder: each tier adds 15% to the daily rate.
    pub fn tier_index(self) -> usize {
        Self::ALL
            .iter()
            .position(|candidate| *candidate == self)
            .expect("every room type is in the ladder")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomTypeFilter {
    All,
    Only(RoomType),
}

impl RoomTypeFilter {
    /// Accepts `"all"` or any room type name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        RoomType::parse(value).map(Self::Only)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(room_type) => room_type.as_str(),
        }
    }

    pub fn matches(self, room_type: RoomType) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == room_type,
        }
    }

    /// Rooms covered by the filter: the full property or one type's floor.
    pub fn capacity(self) -> i64 {
        match self {
            Self::All => RoomType::ALL.iter().map(|rt| rt.config().rooms).sum(),
            Self::Only(room_type) => room_type.config().rooms,
        }
    }
}

/// A room withdrawn from inventory for the inclusive interval `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedRoomInterval {
    pub room_id: i64,
    pub room_type: RoomType,
    pub reason: String,
    pub start: Date,
    pub end: Date,
}

/// Immutable description of one report invocation. The engine holds no
/// state between calls; everything it needs arrives here.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub from: Option<Date>,
    pub to: Option<Date>,
    pub granularity: Granularity,
    pub room_type: RoomTypeFilter,
    pub include_closed_rooms: bool,
    pub revenue_includes_tax: bool,
    pub closed_rooms: Vec<ClosedRoomInterval>,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            granularity: Granularity::Day,
            room_type: RoomTypeFilter::All,
            include_closed_rooms: false,
            revenue_includes_tax: false,
            closed_rooms: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuestKind {
    Adult,
    Child,
}

impl GuestKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "adult",
            Self::Child => "child",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occupant {
    pub name: String,
    pub age: i64,
    pub kind: GuestKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestRecord {
    pub id: String,
    pub room: i64,
    pub room_type: RoomType,
    pub primary_guest: String,
    pub occupants: Vec<Occupant>,
    #[serde(with = "serde_report_date")]
    pub check_in: Date,
    #[serde(with = "serde_report_date")]
    pub check_out: Date,
    pub phone: String,
    pub notes: Option<String>,
}

/// One bucket of the report. For `Day`, `start == end`. Week periods keep
/// the full Sunday-to-Saturday window; month periods keep the clipped span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Period {
    pub label: String,
    #[serde(with = "serde_report_date")]
    pub start: Date,
    #[serde(with = "serde_report_date")]
    pub end: Date,
    pub granularity: Granularity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodMetrics {
    pub period: Period,
    /// Rooms (daily) or rounded room-nights (weekly/monthly) on offer.
    pub available_rooms: i64,
    pub sold_rooms: i64,
    pub guest_count: i64,
    pub occupancy_pct: f64,
    pub rev_par: f64,
    pub adr: f64,
    pub revenue: f64,
    /// Closed-room count for the day, or room-nights over the period.
    pub unavailable_rooms: i64,
    pub roster: Vec<GuestRecord>,
}

/// Totals row. Ratios are recomputed from the summed totals, never
/// averaged from per-period percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub available: i64,
    pub occupied: i64,
    pub guests: i64,
    pub unavailable_rooms: i64,
    pub occupancy_pct: f64,
    pub rev_par: f64,
    pub adr: f64,
    pub revenue: f64,
}
