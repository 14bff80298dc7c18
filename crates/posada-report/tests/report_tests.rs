// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use posada_report::{
    Granularity, GuestKind, ReportRequest, RoomType, RoomTypeFilter, find_roster, generate_report,
    summarize,
};
use posada_testkit::{
    february_closures, february_request, filtered, range_request, report_date, roster_occupants,
};

#[test]
fn identical_requests_reproduce_identical_reports() {
    for granularity in [Granularity::Day, Granularity::Week, Granularity::Month] {
        let mut request = february_request(granularity);
        request.revenue_includes_tax = true;

        let first = generate_report(&request);
        let second = generate_report(&request);
        assert_eq!(first, second, "granularity {granularity:?}");
        assert_eq!(summarize(&first), summarize(&second));
    }
}

#[test]
fn sold_rooms_never_exceed_available_rooms() {
    let filters = [
        RoomTypeFilter::All,
        RoomTypeFilter::Only(RoomType::Standard),
        RoomTypeFilter::Only(RoomType::Family),
    ];
    for granularity in [Granularity::Day, Granularity::Week, Granularity::Month] {
        for filter in filters {
            let mut request = february_request(granularity);
            request.room_type = filter;
            for metrics in generate_report(&request) {
                assert!(metrics.sold_rooms >= 0, "period {}", metrics.period.label);
                assert!(
                    metrics.sold_rooms <= metrics.available_rooms,
                    "period {} sold {} available {}",
                    metrics.period.label,
                    metrics.sold_rooms,
                    metrics.available_rooms
                );
                assert!(
                    (0.0..=100.0).contains(&metrics.occupancy_pct),
                    "period {} occupancy {}",
                    metrics.period.label,
                    metrics.occupancy_pct
                );
            }
        }
    }
}

#[test]
fn summary_sums_periods_and_recomputes_ratios() {
    let request = february_request(Granularity::Day);
    let periods = generate_report(&request);
    let summary = summarize(&periods);

    let available: i64 = periods.iter().map(|p| p.available_rooms).sum();
    let occupied: i64 = periods.iter().map(|p| p.sold_rooms).sum();
    let guests: i64 = periods.iter().map(|p| p.guest_count).sum();
    let unavailable: i64 = periods.iter().map(|p| p.unavailable_rooms).sum();
    let revenue: f64 = periods.iter().map(|p| p.revenue).sum();

    assert_eq!(summary.available, available);
    assert_eq!(summary.occupied, occupied);
    assert_eq!(summary.guests, guests);
    assert_eq!(summary.unavailable_rooms, unavailable);
    assert!((summary.revenue - revenue).abs() < 1e-9);

    let expected_pct = occupied as f64 / available as f64 * 100.0;
    assert!((summary.occupancy_pct - expected_pct).abs() < 1e-9);
    assert!((summary.rev_par - revenue / available as f64).abs() < 1e-9);
    assert!((summary.adr - revenue / occupied as f64).abs() < 1e-9);
}

#[test]
fn summary_ratio_is_not_an_average_of_period_percentages() {
    // Week buckets have unequal room-night denominators (clipped head and
    // tail weeks), so the totals-based figure and the naive average differ.
    let request = range_request("01 Feb 2025", "28 Feb 2025", Granularity::Week);
    let periods = generate_report(&request);
    let summary = summarize(&periods);

    let average: f64 =
        periods.iter().map(|p| p.occupancy_pct).sum::<f64>() / periods.len() as f64;
    assert!(
        (summary.occupancy_pct - average).abs() > 1e-6,
        "totals {} vs average {}",
        summary.occupancy_pct,
        average
    );
}

#[test]
fn closed_room_intervals_are_inclusive_on_both_ends() {
    let mut request = range_request("01 Feb 2025", "11 Feb 2025", Granularity::Day);
    request.include_closed_rooms = true;
    request.closed_rooms = february_closures();

    let periods = generate_report(&request);
    assert_eq!(periods.len(), 11);

    // Room 5 is closed 01-10 Feb, room 12 from 05 Feb onward.
    let expected_unavailable = [1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 1];
    for (metrics, expected) in periods.iter().zip(expected_unavailable) {
        assert_eq!(
            metrics.unavailable_rooms, expected,
            "date {}",
            metrics.period.label
        );
        assert_eq!(metrics.available_rooms, 20 - expected);
    }
}

#[test]
fn closed_rooms_are_ignored_when_the_flag_is_off() {
    let mut request = range_request("01 Feb 2025", "11 Feb 2025", Granularity::Day);
    request.closed_rooms = february_closures();

    for metrics in generate_report(&request) {
        assert_eq!(metrics.unavailable_rooms, 0);
        assert_eq!(metrics.available_rooms, 20);
    }
}

#[test]
fn closed_room_filter_narrows_to_the_room_type() {
    let mut request = filtered(
        range_request("05 Feb 2025", "05 Feb 2025", Granularity::Day),
        RoomType::Standard,
    );
    request.include_closed_rooms = true;
    request.closed_rooms = february_closures();

    let periods = generate_report(&request);
    // Only the Standard closure counts against the four Standard rooms.
    assert_eq!(periods[0].unavailable_rooms, 1);
    assert_eq!(periods[0].available_rooms, 3);
}

#[test]
fn single_day_week_aligns_to_the_previous_sunday() {
    // 03 Feb 2025 is a Monday.
    let request = range_request("03 Feb 2025", "03 Feb 2025", Granularity::Week);
    let periods = generate_report(&request);

    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].period.start, report_date("02 Feb 2025"));
    assert_eq!(periods[0].period.label, "02 Feb 2025 - 08 Feb 2025 (1 days)");
}

#[test]
fn months_clip_to_the_requested_range() {
    let request = range_request("15 Mar 2025", "10 Apr 2025", Granularity::Month);
    let periods = generate_report(&request);

    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].period.label, "March 2025 (17 days)");
    assert_eq!(periods[0].period.start, report_date("15 Mar 2025"));
    assert_eq!(periods[0].period.end, report_date("31 Mar 2025"));
    assert_eq!(periods[1].period.label, "April 2025 (10 days)");
    assert_eq!(periods[1].period.start, report_date("01 Apr 2025"));
    assert_eq!(periods[1].period.end, report_date("10 Apr 2025"));
}

#[test]
fn two_day_february_report_is_fully_deterministic() {
    let request = range_request("01 Feb 2025", "02 Feb 2025", Granularity::Day);
    let periods = generate_report(&request);
    assert_eq!(periods.len(), 2);

    // 01 Feb 2025 is a Saturday: weekend rate, first draw sells 2 rooms.
    let saturday = &periods[0];
    assert_eq!(saturday.period.label, "01 Feb 2025");
    assert_eq!(saturday.available_rooms, 20);
    assert_eq!(saturday.sold_rooms, 2);
    assert_eq!(saturday.guest_count, 4);
    assert_eq!(saturday.guest_count, roster_occupants(saturday));
    assert!((saturday.revenue - 440.0).abs() < 1e-9);
    assert!((saturday.occupancy_pct - 10.0).abs() < 1e-9);
    assert!((saturday.rev_par - 22.0).abs() < 1e-9);
    assert!((saturday.adr - 220.0).abs() < 1e-9);

    let first = &saturday.roster[0];
    assert_eq!(first.id, "guest-0-0");
    assert_eq!(first.room_type, RoomType::Suite);
    assert_eq!(first.room, 302);
    assert_eq!(first.primary_guest, "Emma Davis");
    assert_eq!(first.occupants.len(), 2);
    assert_eq!(first.occupants[0].age, 55);
    assert_eq!(first.occupants[1].name, "Michael Davis");
    assert_eq!(first.occupants[1].age, 47);
    assert_eq!(first.check_in, report_date("01 Feb 2025"));
    assert_eq!(first.check_out, report_date("06 Feb 2025"));
    assert_eq!(first.phone, "+1 915-713-6046");
    assert_eq!(first.notes, None);

    let sunday = &periods[1];
    assert_eq!(sunday.sold_rooms, 5);
    assert_eq!(sunday.guest_count, 10);
    assert_eq!(sunday.guest_count, roster_occupants(sunday));
    assert!((sunday.revenue - 1100.0).abs() < 1e-9);

    let noted = &sunday.roster[3];
    assert_eq!(noted.id, "guest-1-3");
    assert_eq!(noted.room_type, RoomType::Deluxe);
    assert_eq!(noted.room, 204);
    assert_eq!(noted.notes.as_deref(), Some("Allergic to nuts"));

    let family = &sunday.roster[4];
    assert_eq!(family.occupants.len(), 4);
    assert_eq!(family.occupants[1].kind, GuestKind::Child);
    assert_eq!(family.occupants[1].age, 9);
}

#[test]
fn weekly_february_follows_the_seasonal_schedule() {
    let request = range_request("01 Feb 2025", "28 Feb 2025", Granularity::Week);
    let periods = generate_report(&request);

    let labels: Vec<&str> = periods.iter().map(|p| p.period.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "26 Jan 2025 - 01 Feb 2025 (1 days)",
            "02 Feb 2025 - 08 Feb 2025",
            "09 Feb 2025 - 15 Feb 2025",
            "16 Feb 2025 - 22 Feb 2025",
            "23 Feb 2025 - 01 Mar 2025 (6 days)",
        ]
    );

    let available: Vec<i64> = periods.iter().map(|p| p.available_rooms).collect();
    assert_eq!(available, [20, 140, 140, 140, 120]);

    let sold: Vec<i64> = periods.iter().map(|p| p.sold_rooms).collect();
    assert_eq!(sold, [14, 110, 93, 118, 95]);

    let guests: Vec<i64> = periods.iter().map(|p| p.guest_count).collect();
    assert_eq!(guests, [22, 176, 148, 188, 152]);

    let revenue: Vec<f64> = periods.iter().map(|p| p.revenue).collect();
    assert_eq!(revenue, [3570.0, 29700.0, 21855.0, 31860.0, 24225.0]);

    // Sampled rosters stay capped while the guest figure keeps the formula.
    for metrics in &periods {
        assert_eq!(metrics.roster.len() as i64, metrics.guest_count.min(20));
        assert_eq!(
            metrics.guest_count,
            (metrics.sold_rooms as f64 * 1.6).floor() as i64
        );
    }

    let first = &periods[0].roster[0];
    assert_eq!(first.id, "week-guest-0-0");
    assert_eq!(first.room_type, RoomType::Family);
    assert_eq!(first.room, 502);
    assert_eq!(first.primary_guest, "Lisa Jones");
    assert_eq!(first.occupants.len(), 6);
    assert_eq!(first.check_in, report_date("26 Jan 2025"));
    assert_eq!(first.check_out, report_date("28 Jan 2025"));
}

#[test]
fn monthly_february_uses_the_seasonal_tables() {
    let request = range_request("01 Feb 2025", "28 Feb 2025", Granularity::Month);
    let periods = generate_report(&request);
    assert_eq!(periods.len(), 1);

    let february = &periods[0];
    assert_eq!(february.period.label, "February 2025");
    assert_eq!(february.available_rooms, 560);
    assert_eq!(february.sold_rooms, 434);
    assert_eq!(february.guest_count, 694);
    assert!((february.revenue - 257.66 * 434.0).abs() < 1e-6);
    assert_eq!(february.roster.len(), 30);

    let first = &february.roster[0];
    assert_eq!(first.id, "month-guest-1-0");
    assert_eq!(first.room_type, RoomType::Executive);
    assert_eq!(first.room, 401);
    assert_eq!(first.primary_guest, "Emma Smith");
    assert_eq!(first.occupants.len(), 3);
    assert_eq!(first.check_in, report_date("01 Feb 2025"));
    assert_eq!(first.check_out, report_date("06 Feb 2025"));
}

#[test]
fn tax_flag_scales_revenue_by_ten_percent() {
    let plain = range_request("01 Feb 2025", "28 Feb 2025", Granularity::Month);
    let mut taxed = plain.clone();
    taxed.revenue_includes_tax = true;

    let untaxed_periods = generate_report(&plain);
    let taxed_periods = generate_report(&taxed);

    for (untaxed, taxed) in untaxed_periods.iter().zip(&taxed_periods) {
        assert_eq!(untaxed.sold_rooms, taxed.sold_rooms);
        assert!((taxed.revenue - untaxed.revenue * 1.1).abs() < 1e-6);
    }
}

#[test]
fn roster_lookup_by_period_label() {
    let request = february_request(Granularity::Week);
    let periods = generate_report(&request);

    let label = periods[1].period.label.clone();
    let roster = find_roster(&periods, &label);
    assert_eq!(roster, periods[1].roster.as_slice());

    assert!(find_roster(&periods, "no such period").is_empty());
    assert!(find_roster(&[], "02 Feb 2025 - 08 Feb 2025").is_empty());
}

#[test]
fn missing_range_endpoints_yield_an_empty_report() {
    let request = ReportRequest::default();
    assert!(generate_report(&request).is_empty());

    let half = ReportRequest {
        from: Some(report_date("01 Feb 2025")),
        ..ReportRequest::default()
    };
    assert!(generate_report(&half).is_empty());
}
