//! Engine-level tests for the work-hours reconciliation pass.

use chrono::{DateTime, Utc};
use kronos::core::reconcile::{annotate_hours, reconcile, reconcile_all, total_paired_hours};
use kronos::core::report::WorkHoursReport;
use kronos::models::attendance::AttendanceEvent;
use kronos::models::event_type::EventType;
use kronos::utils::time::parse_timestamp;

fn ts(s: &str) -> DateTime<Utc> {
    parse_timestamp(s).expect("valid test timestamp")
}

fn ev(user: i64, kind: EventType, at: &str) -> AttendanceEvent {
    AttendanceEvent::new(user, kind, ts(at), None, None)
}

fn ev_in(at: &str) -> AttendanceEvent {
    ev(1, EventType::In, at)
}

fn ev_out(at: &str) -> AttendanceEvent {
    ev(1, EventType::Out, at)
}

const EPS: f64 = 1e-9;

#[test]
fn test_empty_stream_yields_empty_ledger() {
    let ledger = reconcile(&[], ts("2026-03-10 12:00"));
    assert!(ledger.days.is_empty());
    assert!(ledger.weekly_total.abs() < EPS);
}

#[test]
fn test_lone_in_is_incomplete_with_zero_hours() {
    let ledger = reconcile(&[ev_in("2026-03-09 09:00")], ts("2026-03-10 12:00"));

    assert_eq!(ledger.days.len(), 1);
    let day = &ledger.days[0];
    assert!(day.incomplete);
    assert!(day.total_hours.abs() < EPS);
    assert!(day.clock_in.is_some());
    assert!(day.clock_out.is_none());
}

#[test]
fn test_single_pair_half_hour_precision() {
    let ledger = reconcile(
        &[ev_in("2026-03-09 09:00"), ev_out("2026-03-09 17:30")],
        ts("2026-03-10 12:00"),
    );

    assert_eq!(ledger.days.len(), 1);
    let day = &ledger.days[0];
    assert!(!day.incomplete);
    assert!((day.total_hours - 8.5).abs() < EPS);
    assert!((ledger.weekly_total - 8.5).abs() < EPS);
}

#[test]
fn test_two_pairs_same_day_sum_and_last_out_wins() {
    let ledger = reconcile(
        &[
            ev_in("2026-03-09 09:00"),
            ev_out("2026-03-09 12:00"),
            ev_in("2026-03-09 13:00"),
            ev_out("2026-03-09 17:00"),
        ],
        ts("2026-03-10 12:00"),
    );

    assert_eq!(ledger.days.len(), 1);
    let day = &ledger.days[0];
    assert!(!day.incomplete);
    assert!((day.total_hours - 7.0).abs() < EPS);
    // first IN and last OUT win the display
    assert_eq!(day.clock_in.unwrap().format("%H:%M").to_string(), "09:00");
    assert_eq!(day.clock_out.unwrap().format("%H:%M").to_string(), "17:00");
}

#[test]
fn test_leading_orphan_out_is_skipped() {
    let ledger = reconcile(
        &[
            ev_out("2026-03-09 08:00"),
            ev_in("2026-03-09 09:00"),
            ev_out("2026-03-09 17:00"),
        ],
        ts("2026-03-10 12:00"),
    );

    assert_eq!(ledger.days.len(), 1);
    let day = &ledger.days[0];
    assert!(!day.incomplete);
    assert!((day.total_hours - 8.0).abs() < EPS);
}

#[test]
fn test_double_in_marks_day_incomplete_but_keeps_paired_hours() {
    // IN, IN, OUT: the first IN never matches, the second one pairs.
    let ledger = reconcile(
        &[
            ev_in("2026-03-09 08:00"),
            ev_in("2026-03-09 13:00"),
            ev_out("2026-03-09 17:00"),
        ],
        ts("2026-03-10 12:00"),
    );

    assert_eq!(ledger.days.len(), 1);
    let day = &ledger.days[0];
    assert!(day.incomplete);
    assert!((day.total_hours - 4.0).abs() < EPS);
    assert_eq!(day.clock_in.unwrap().format("%H:%M").to_string(), "08:00");
}

#[test]
fn test_days_sorted_descending_and_weekly_window() {
    // now = 2026-03-10 12:00 → window starts 2026-03-03 12:00, so the
    // 2026-03-03 day midnight falls outside and 2026-03-04 inside.
    let now = ts("2026-03-10 12:00");
    let ledger = reconcile(
        &[
            ev_in("2026-03-01 09:00"),
            ev_out("2026-03-01 17:00"),
            ev_in("2026-03-03 09:00"),
            ev_out("2026-03-03 17:00"),
            ev_in("2026-03-04 09:00"),
            ev_out("2026-03-04 13:00"),
            ev_in("2026-03-09 09:00"),
            ev_out("2026-03-09 12:00"),
        ],
        now,
    );

    let dates: Vec<String> = ledger.days.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(
        dates,
        vec!["2026-03-09", "2026-03-04", "2026-03-03", "2026-03-01"]
    );

    // 4h on the 4th + 3h on the 9th; the 1st and 3rd are out of window.
    assert!((ledger.weekly_total - 7.0).abs() < EPS);
}

#[test]
fn test_weekly_total_includes_partial_incomplete_day() {
    let now = ts("2026-03-10 12:00");
    let ledger = reconcile(
        &[
            ev_in("2026-03-09 09:00"),
            ev_out("2026-03-09 13:00"),
            ev_in("2026-03-09 14:00"), // still open
        ],
        now,
    );

    assert!(ledger.days[0].incomplete);
    assert!((ledger.weekly_total - 4.0).abs() < EPS);
}

#[test]
fn test_reconcile_is_pure() {
    let events = vec![ev_in("2026-03-09 09:00"), ev_out("2026-03-09 17:00")];
    let now = ts("2026-03-10 12:00");

    let a = reconcile(&events, now);
    let b = reconcile(&events, now);

    assert_eq!(a.days.len(), b.days.len());
    assert!((a.weekly_total - b.weekly_total).abs() < EPS);
    assert!(a.days.iter().all(|d| d.total_hours >= 0.0));
}

#[test]
fn test_reconcile_all_keeps_employees_independent() {
    // Ordered by (user_id, recorded_at), as the loader returns them.
    let events = vec![
        ev(1, EventType::In, "2026-03-09 09:00"),
        ev(1, EventType::Out, "2026-03-09 17:00"),
        ev(2, EventType::In, "2026-03-09 10:00"),
        // employee 2 never clocks out
    ];

    let ledgers = reconcile_all(&events, ts("2026-03-10 12:00"));
    assert_eq!(ledgers.len(), 2);

    let (uid1, l1) = &ledgers[0];
    assert_eq!(*uid1, 1);
    assert!((l1.days[0].total_hours - 8.0).abs() < EPS);
    assert!(!l1.days[0].incomplete);

    let (uid2, l2) = &ledgers[1];
    assert_eq!(*uid2, 2);
    assert!(l2.days[0].incomplete);
    assert!(l2.days[0].total_hours.abs() < EPS);
}

#[test]
fn test_reconcile_all_second_in_orphans_pending_across_days() {
    let events = vec![
        ev(1, EventType::In, "2026-03-08 09:00"),
        ev(1, EventType::In, "2026-03-09 09:00"),
        ev(1, EventType::Out, "2026-03-09 17:00"),
    ];

    let ledgers = reconcile_all(&events, ts("2026-03-10 12:00"));
    let (_, ledger) = &ledgers[0];

    assert_eq!(ledger.days.len(), 2);
    // descending order: the 9th first
    assert!(!ledger.days[0].incomplete);
    assert!((ledger.days[0].total_hours - 8.0).abs() < EPS);
    assert!(ledger.days[1].incomplete);
    assert!(ledger.days[1].total_hours.abs() < EPS);
}

#[test]
fn test_annotate_hours_marks_only_closing_outs() {
    let events = vec![
        ev(1, EventType::In, "2026-03-09 09:00"),
        ev(1, EventType::Out, "2026-03-09 13:00"),
        ev(1, EventType::Out, "2026-03-09 14:00"), // orphan
    ];

    let hours = annotate_hours(&events);
    assert_eq!(hours.len(), 3);
    assert!(hours[0].is_none());
    assert!((hours[1].unwrap() - 4.0).abs() < EPS);
    assert!(hours[2].is_none());
}

#[test]
fn test_report_placeholders_and_rounding() {
    let ledger = reconcile(
        &[
            ev_in("2026-03-09 09:00"),
            ev_out("2026-03-09 17:20"), // 8h20m = 8.3333... → 8.33
            ev_in("2026-03-10 09:00"),
        ],
        ts("2026-03-10 12:00"),
    );

    let report = WorkHoursReport::build(1, &ledger);
    assert_eq!(report.employee_id, 1);

    let open_day = &report.days[0];
    assert_eq!(open_day.clock_out, "-");
    assert!(open_day.incomplete);

    let full_day = &report.days[1];
    assert_eq!(full_day.clock_in, "09:00");
    assert_eq!(full_day.clock_out, "17:20");
    assert!((full_day.total_hours - 8.33).abs() < EPS);
}

#[test]
fn test_total_paired_hours_sums_pairs_across_days() {
    let events = vec![
        ev_in("2026-03-09 09:00"),
        ev_out("2026-03-09 13:00"),
        ev_in("2026-03-10 09:00"),
        ev_out("2026-03-10 12:30"),
    ];

    assert!((total_paired_hours(&events) - 7.5).abs() < EPS);
}

#[test]
fn test_total_paired_hours_ignores_orphans() {
    let events = vec![
        ev_out("2026-03-09 08:00"), // orphan OUT
        ev_in("2026-03-09 09:00"),
        ev_in("2026-03-09 10:00"), // replaces the pending IN
        ev_out("2026-03-09 14:00"),
        ev_in("2026-03-09 18:00"), // never closed
    ];

    assert!((total_paired_hours(&events) - 4.0).abs() < EPS);
    assert!((total_paired_hours(&[]) - 0.0).abs() < EPS);
}
