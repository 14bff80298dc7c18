// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;
use tracing::debug;

use crate::model::{ClosedRoomInterval, RoomTypeFilter};

/// Read-only view over the closed-room intervals of one report request.
#[derive(Debug, Clone, Copy)]
pub struct ClosedRoomIndex<'a> {
    intervals: &'a [ClosedRoomInterval],
}

impl<'a> ClosedRoomIndex<'a> {
    pub fn new(intervals: &'a [ClosedRoomInterval]) -> Self {
        Self { intervals }
    }

    /// Rooms closed on `date` that the filter covers. Interval bounds are
    /// inclusive on both ends.
    pub fn count_unavailable(&self, date: Date, filter: RoomTypeFilter) -> i64 {
        let count = self
            .intervals
            .iter()
            .filter(|interval| {
                interval.start <= date && date <= interval.end && filter.matches(interval.room_type)
            })
            .count() as i64;
        if count > 0 {
            debug!(
                date = %crate::calendar::format_report_date(date),
                filter = filter.as_str(),
                count,
                "closed rooms overlap date"
            );
        }
        count
    }
}
