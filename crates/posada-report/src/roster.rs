// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Guest roster synthesis. Draw order is part of the determinism contract:
//! reordering any draw changes every downstream value in the stream.

use time::{Date, Duration};

use crate::model::{GuestKind, GuestRecord, Occupant, RoomType, RoomTypeFilter};
use crate::rng::SeededSequence;

const FIRST_NAMES: [&str; 8] = [
    "John", "Jane", "Michael", "Emma", "David", "Sarah", "Robert", "Lisa",
];
const LAST_NAMES: [&str; 7] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis",
];
const FIRST_NAMES_EXTENDED: [&str; 10] = [
    "John", "Jane", "Michael", "Emma", "David", "Sarah", "Robert", "Lisa", "Thomas", "Emily",
];
const LAST_NAMES_EXTENDED: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Wilson", "Taylor",
    "Clark",
];

const NOTES: [&str; 4] = [
    "Allergic to nuts",
    "Requires extra pillows",
    "Prefers high floor",
    "Celebrating anniversary",
];
const NOTES_EXTENDED: [&str; 6] = [
    "Allergic to nuts",
    "Requires extra pillows",
    "Prefers high floor",
    "Celebrating anniversary",
    "Business traveler",
    "Frequent guest",
];

/// Monthly rosters draw from the larger name/note pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NamePool {
    Compact,
    Extended,
}

impl NamePool {
    fn first_names(self) -> &'static [&'static str] {
        match self {
            Self::Compact => &FIRST_NAMES,
            Self::Extended => &FIRST_NAMES_EXTENDED,
        }
    }

    fn last_names(self) -> &'static [&'static str] {
        match self {
            Self::Compact => &LAST_NAMES,
            Self::Extended => &LAST_NAMES_EXTENDED,
        }
    }

    fn notes(self) -> &'static [&'static str] {
        match self {
            Self::Compact => &NOTES,
            Self::Extended => &NOTES_EXTENDED,
        }
    }
}

/// One sold room on a daily report: stay anchored on the report date,
/// checking in up to two days earlier, staying one to five nights.
pub(crate) fn daily_room(
    rng: &mut SeededSequence,
    filter: RoomTypeFilter,
    day: Date,
    id: String,
) -> GuestRecord {
    let (room_type, room) = draw_room(rng, filter);
    let config = room_type.config();
    let party_size = rng.int_range(config.min_guests, config.max_guests);
    let check_in = day - Duration::days(rng.int_below(3));
    let check_out = check_in + Duration::days(rng.int_range(1, 5));
    let primary_guest = draw_full_name(rng, NamePool::Compact);
    let occupants = fill_party(rng, party_size, primary_guest.clone(), NamePool::Compact);
    let notes = draw_note(rng, NamePool::Compact);
    let phone = draw_phone(rng);

    GuestRecord {
        id,
        room,
        room_type,
        primary_guest,
        occupants,
        check_in,
        check_out,
        phone,
        notes,
    }
}

/// One sampled roster record for a week or month bucket: the stay starts
/// somewhere inside the span and runs up to `max_stay` nights.
pub(crate) fn period_guest(
    rng: &mut SeededSequence,
    filter: RoomTypeFilter,
    span_start: Date,
    span_days: i64,
    max_stay: i64,
    pool: NamePool,
    id: String,
) -> GuestRecord {
    let (room_type, room) = draw_room(rng, filter);
    let config = room_type.config();
    let check_in = span_start + Duration::days(rng.int_below(span_days));
    let check_out = check_in + Duration::days(rng.int_range(1, max_stay));
    let primary_guest = draw_full_name(rng, pool);
    let party_size = rng.int_range(config.min_guests, config.max_guests);
    let occupants = fill_party(rng, party_size, primary_guest.clone(), pool);
    let notes = draw_note(rng, pool);
    let phone = draw_phone(rng);

    GuestRecord {
        id,
        room,
        room_type,
        primary_guest,
        occupants,
        check_in,
        check_out,
        phone,
        notes,
    }
}

fn draw_room(rng: &mut SeededSequence, filter: RoomTypeFilter) -> (RoomType, i64) {
    let room_type = match filter {
        RoomTypeFilter::Only(room_type) => room_type,
        RoomTypeFilter::All => RoomType::ALL[rng.int_below(RoomType::ALL.len() as i64) as usize],
    };
    let config = room_type.config();
    let room = config.floor_start * 100 + rng.int_below(config.rooms) + 1;
    (room_type, room)
}

fn draw_full_name(rng: &mut SeededSequence, pool: NamePool) -> String {
    let first = rng.pick(pool.first_names());
    let last = rng.pick(pool.last_names());
    format!("{first} {last}")
}

/// The primary guest is always an adult. Remaining slots become children
/// with probability 0.3 only while more than one slot remains, so a party
/// never ends up all-children past the primary.
fn fill_party(
    rng: &mut SeededSequence,
    party_size: i64,
    primary_guest: String,
    pool: NamePool,
) -> Vec<Occupant> {
    let mut occupants = Vec::with_capacity(party_size.max(1) as usize);
    occupants.push(Occupant {
        name: primary_guest,
        age: rng.int_range(25, 64),
        kind: GuestKind::Adult,
    });

    let mut remaining = party_size - 1;
    while remaining > 0 {
        let is_child = remaining > 1 && rng.next_fraction() > 0.7;
        let name = draw_full_name(rng, pool);
        let (age, kind) = if is_child {
            (rng.int_range(1, 17), GuestKind::Child)
        } else {
            (rng.int_range(25, 64), GuestKind::Adult)
        };
        occupants.push(Occupant { name, age, kind });
        remaining -= 1;
    }

    occupants
}

fn draw_note(rng: &mut SeededSequence, pool: NamePool) -> Option<String> {
    (rng.next_fraction() > 0.7).then(|| rng.pick(pool.notes()).to_owned())
}

fn draw_phone(rng: &mut SeededSequence) -> String {
    format!(
        "+1 {}-{}-{}",
        rng.int_range(100, 999),
        rng.int_range(100, 999),
        rng.int_range(1000, 9999),
    )
}

#[cfg(test)]
mod tests {
    use super::{NamePool, daily_room, period_guest};
    use crate::calendar::parse_report_date;
    use crate::model::{GuestKind, RoomType, RoomTypeFilter};
    use crate::rng::SeededSequence;
    use time::Date;

    fn date(input: &str) -> Date {
        parse_report_date(input).expect("valid test date")
    }

    #[test]
    fn identical_streams_synthesize_identical_records() {
        let mut left = SeededSequence::new(123);
        let mut right = SeededSequence::new(123);
        let day = date("05 Feb 2025");

        let a = daily_room(&mut left, RoomTypeFilter::All, day, "guest-0-0".to_owned());
        let b = daily_room(&mut right, RoomTypeFilter::All, day, "guest-0-0".to_owned());
        assert_eq!(a, b);
    }

    #[test]
    fn party_size_respects_room_type_limits() {
        let mut rng = SeededSequence::new(42);
        for index in 0..50 {
            let record = daily_room(
                &mut rng,
                RoomTypeFilter::All,
                date("05 Feb 2025"),
                format!("guest-0-{index}"),
            );
            let config = record.room_type.config();
            let size = record.occupants.len() as i64;
            assert!(
                (config.min_guests..=config.max_guests).contains(&size),
                "type {} party {size}",
                record.room_type.as_str()
            );
        }
    }

    #[test]
    fn primary_occupant_is_always_an_adult() {
        let mut rng = SeededSequence::new(7);
        for index in 0..50 {
            let record = period_guest(
                &mut rng,
                RoomTypeFilter::All,
                date("01 Feb 2025"),
                28,
                7,
                NamePool::Extended,
                format!("month-guest-1-{index}"),
            );
            let primary = &record.occupants[0];
            assert_eq!(primary.kind, GuestKind::Adult);
            assert_eq!(primary.name, record.primary_guest);
            assert!((25..=64).contains(&primary.age), "age {}", primary.age);
        }
    }

    #[test]
    fn two_guest_parties_never_contain_children() {
        // With a single non-primary slot remaining the child branch is
        // unreachable, so Standard rooms (max 2) host adults only.
        let mut rng = SeededSequence::new(9);
        for index in 0..50 {
            let record = daily_room(
                &mut rng,
                RoomTypeFilter::Only(RoomType::Standard),
                date("05 Feb 2025"),
                format!("guest-0-{index}"),
            );
            for occupant in &record.occupants {
                assert_eq!(occupant.kind, GuestKind::Adult, "index {index}");
            }
        }
    }

    #[test]
    fn child_ages_stay_in_child_range() {
        let mut rng = SeededSequence::new(11);
        let mut children = 0;
        for index in 0..200 {
            let record = daily_room(
                &mut rng,
                RoomTypeFilter::Only(RoomType::Family),
                date("05 Feb 2025"),
                format!("guest-0-{index}"),
            );
            for occupant in &record.occupants {
                match occupant.kind {
                    GuestKind::Child => {
                        children += 1;
                        assert!((1..=17).contains(&occupant.age), "age {}", occupant.age);
                    }
                    GuestKind::Adult => {
                        assert!((25..=64).contains(&occupant.age), "age {}", occupant.age);
                    }
                }
            }
        }
        assert!(children > 0, "family rooms should eventually host children");
    }

    #[test]
    fn room_numbers_sit_on_the_type_floor() {
        let mut rng = SeededSequence::new(21);
        for index in 0..50 {
            let record = daily_room(
                &mut rng,
                RoomTypeFilter::All,
                date("05 Feb 2025"),
                format!("guest-0-{index}"),
            );
            let config = record.room_type.config();
            let first = config.floor_start * 100 + 1;
            let last = config.floor_start * 100 + config.rooms;
            assert!(
                (first..=last).contains(&record.room),
                "room {} for {}",
                record.room,
                record.room_type.as_str()
            );
        }
    }

    #[test]
    fn filtered_rooms_keep_the_requested_type() {
        let mut rng = SeededSequence::new(33);
        for index in 0..20 {
            let record = period_guest(
                &mut rng,
                RoomTypeFilter::Only(RoomType::Suite),
                date("02 Feb 2025"),
                7,
                5,
                NamePool::Compact,
                format!("week-guest-0-{index}"),
            );
            assert_eq!(record.room_type, RoomType::Suite);
        }
    }

    #[test]
    fn daily_stays_check_in_at_most_two_days_early() {
        let mut rng = SeededSequence::new(5);
        let day = date("10 Feb 2025");
        for index in 0..100 {
            let record = daily_room(&mut rng, RoomTypeFilter::All, day, format!("guest-0-{index}"));
            let lead = (day - record.check_in).whole_days();
            assert!((0..=2).contains(&lead), "lead {lead}");
            let stay = (record.check_out - record.check_in).whole_days();
            assert!((1..=5).contains(&stay), "stay {stay}");
        }
    }

    #[test]
    fn period_stays_start_inside_the_span() {
        let mut rng = SeededSequence::new(790);
        let span_start = date("01 Feb 2025");
        for index in 0..100 {
            let record = period_guest(
                &mut rng,
                RoomTypeFilter::All,
                span_start,
                28,
                7,
                NamePool::Extended,
                format!("month-guest-1-{index}"),
            );
            let offset = (record.check_in - span_start).whole_days();
            assert!((0..28).contains(&offset), "offset {offset}");
            let stay = (record.check_out - record.check_in).whole_days();
            assert!((1..=7).contains(&stay), "stay {stay}");
        }
    }

    #[test]
    fn phone_numbers_follow_the_fixed_pattern() {
        let mut rng = SeededSequence::new(64);
        let record = daily_room(
            &mut rng,
            RoomTypeFilter::All,
            date("05 Feb 2025"),
            "guest-0-0".to_owned(),
        );
        let rest = record.phone.strip_prefix("+1 ").expect("country prefix");
        let parts = rest.split('-').collect::<Vec<_>>();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 3);
        assert_eq!(parts[1].len(), 3);
        assert_eq!(parts[2].len(), 4);
        for part in parts {
            assert!(part.bytes().all(|byte| byte.is_ascii_digit()), "{part}");
        }
    }

    #[test]
    fn notes_come_from_the_fixed_vocabulary() {
        let mut rng = SeededSequence::new(99);
        let mut with_notes = 0;
        let mut without_notes = 0;
        for index in 0..200 {
            let record = daily_room(
                &mut rng,
                RoomTypeFilter::All,
                date("05 Feb 2025"),
                format!("guest-0-{index}"),
            );
            match record.notes.as_deref() {
                Some(note) => {
                    with_notes += 1;
                    assert!(super::NOTES.contains(&note), "note {note:?}");
                }
                None => without_notes += 1,
            }
        }
        assert!(with_notes > 0 && without_notes > 0);
    }
}
