// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod calendar;
pub mod closures;
mod metrics;
pub mod model;
pub mod periods;
pub mod report;
pub mod rng;
mod roster;

pub use calendar::{DateParseError, format_report_date, parse_report_date};
pub use closures::ClosedRoomIndex;
pub use model::*;
pub use report::{find_roster, generate_report, summarize};
pub use rng::SeededSequence;
