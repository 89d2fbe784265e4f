//! Work-hours reconciliation engine.
//!
//! Pure, synchronous transform from an ordered attendance event stream into
//! a per-day ledger plus a trailing-7-day total. Recomputed from scratch on
//! every call; no state survives between invocations.
//!
//! Day boundary policy: timestamps are truncated to the calendar date in
//! UTC, consistently for grouping and display.

use crate::models::attendance::AttendanceEvent;
use crate::models::day_summary::DaySummary;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::HashMap;

/// Derived view over one employee's event history.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Day summaries, most recent date first.
    pub days: Vec<DaySummary>,
    /// Sum of `total_hours` over the trailing 7-day window ending at `now`.
    /// Incomplete days contribute their partial total: a partially worked
    /// day still represents real worked time.
    pub weekly_total: f64,
}

fn calendar_date(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// Reconcile one employee's events (ascending by `recorded_at`) into a
/// daily ledger and weekly total.
///
/// Single forward pass, O(n), no backtracking:
/// - an OUT with no preceding unmatched IN is orphaned and skipped;
/// - an IN immediately followed by an OUT forms a matched pair and both
///   events are consumed;
/// - an IN followed by nothing, or by another IN, is unmatched: it marks
///   its day incomplete and only the IN is consumed.
///
/// Malformed sequences are normal input, never an error.
pub fn reconcile(events: &[AttendanceEvent], now: DateTime<Utc>) -> Ledger {
    let mut days: HashMap<NaiveDate, DaySummary> = HashMap::new();

    let mut i = 0;
    while i < events.len() {
        let ev = &events[i];

        if ev.kind.is_out() {
            // Orphaned OUT: no pending IN in the scan. Skip it.
            i += 1;
            continue;
        }

        let day = calendar_date(ev.recorded_at);
        let entry = days
            .entry(day)
            .or_insert_with(|| DaySummary::empty(day));

        // First IN of the day wins the displayed clock-in; duplicate INs
        // later in the day do not overwrite it.
        if entry.clock_in.is_none() {
            entry.clock_in = Some(ev.recorded_at.time());
        }

        match events.get(i + 1) {
            Some(next) if next.kind.is_out() => {
                // Matched pair. Full-precision timestamps feed the
                // arithmetic; rounding happens only at the report boundary.
                let secs = (next.recorded_at - ev.recorded_at).num_seconds();
                entry.total_hours += secs as f64 / 3600.0;
                // Last matched OUT of the day wins the display.
                entry.clock_out = Some(next.recorded_at.time());
                i += 2;
            }
            _ => {
                // Unmatched IN (end of stream, or the next event is
                // another IN which will open its own iteration).
                entry.incomplete = true;
                i += 1;
            }
        }
    }

    finish(days, now)
}

/// Pending-IN cursor for the multi-employee scan. Owned by the call, one
/// entry per employee, never module-level state.
struct PendingIn {
    day: NaiveDate,
    recorded_at: DateTime<Utc>,
}

/// Multi-employee variant: events ordered by `(user_id, recorded_at)`.
/// Same pairing and day-grouping rules, with the unmatched-IN cursor
/// tracked per employee, so interleaved streams reconcile independently.
pub fn reconcile_all(
    events: &[AttendanceEvent],
    now: DateTime<Utc>,
) -> Vec<(i64, Ledger)> {
    let mut days: HashMap<i64, HashMap<NaiveDate, DaySummary>> = HashMap::new();
    let mut pending: HashMap<i64, PendingIn> = HashMap::new();

    for ev in events {
        let user_days = days.entry(ev.user_id).or_default();

        if ev.kind.is_in() {
            let day = calendar_date(ev.recorded_at);
            let entry = user_days
                .entry(day)
                .or_insert_with(|| DaySummary::empty(day));
            if entry.clock_in.is_none() {
                entry.clock_in = Some(ev.recorded_at.time());
            }

            // A second IN orphans the one still pending: its day stays
            // incomplete and contributes nothing to the total.
            if let Some(prev) = pending.insert(
                ev.user_id,
                PendingIn {
                    day,
                    recorded_at: ev.recorded_at,
                },
            ) {
                if let Some(d) = user_days.get_mut(&prev.day) {
                    d.incomplete = true;
                }
            }
        } else if let Some(open) = pending.remove(&ev.user_id) {
            // Pair closes on the day the IN opened it.
            let secs = (ev.recorded_at - open.recorded_at).num_seconds();
            if let Some(d) = user_days.get_mut(&open.day) {
                d.total_hours += secs as f64 / 3600.0;
                d.clock_out = Some(ev.recorded_at.time());
            }
        }
        // OUT with no pending IN for this employee: orphaned, skipped.
    }

    // INs still pending at the end of the scan leave their day incomplete.
    for (user_id, open) in pending {
        if let Some(d) = days.get_mut(&user_id).and_then(|m| m.get_mut(&open.day)) {
            d.incomplete = true;
        }
    }

    let mut out: Vec<(i64, Ledger)> = days
        .into_iter()
        .map(|(user_id, per_day)| (user_id, finish(per_day, now)))
        .collect();
    out.sort_by_key(|(user_id, _)| *user_id);
    out
}

/// Flatten the day map, sort descending and compute the weekly window sum.
fn finish(days: HashMap<NaiveDate, DaySummary>, now: DateTime<Utc>) -> Ledger {
    let week_ago = now - Duration::days(7);

    let mut list: Vec<DaySummary> = days.into_values().collect();
    list.sort_by(|a, b| b.date.cmp(&a.date));

    let weekly_total = list
        .iter()
        .filter(|d| {
            let midnight = d.date.and_hms_opt(0, 0, 0).expect("valid midnight").and_utc();
            midnight >= week_ago && midnight <= now
        })
        .map(|d| d.total_hours)
        .sum();

    Ledger {
        days: list,
        weekly_total,
    }
}

/// Scalar total of paired hours over one employee's events, ascending by
/// `recorded_at` and already filtered to the period of interest.
///
/// Pairing is the pending-IN form: an IN opens (a later IN replaces it),
/// an OUT closes the open IN and adds the duration, an orphan OUT is
/// skipped. No day grouping, no incompleteness flags, just the sum.
pub fn total_paired_hours(events: &[AttendanceEvent]) -> f64 {
    let mut pending: Option<DateTime<Utc>> = None;
    let mut total = 0.0;

    for ev in events {
        if ev.kind.is_in() {
            pending = Some(ev.recorded_at);
        } else if let Some(opened) = pending.take() {
            let secs = (ev.recorded_at - opened).num_seconds();
            total += secs as f64 / 3600.0;
        }
    }

    total
}

/// Annotate a chronological listing with the hours closed by each OUT.
///
/// Display-only helper for the attendance views: an OUT that closes a
/// pending IN of the same employee carries the duration of that pair,
/// every other row carries `None`.
pub fn annotate_hours(events: &[AttendanceEvent]) -> Vec<Option<f64>> {
    let mut pending: HashMap<i64, DateTime<Utc>> = HashMap::new();
    let mut out = Vec::with_capacity(events.len());

    for ev in events {
        if ev.kind.is_in() {
            pending.insert(ev.user_id, ev.recorded_at);
            out.push(None);
        } else if let Some(opened) = pending.remove(&ev.user_id) {
            let secs = (ev.recorded_at - opened).num_seconds();
            out.push(Some(secs as f64 / 3600.0));
        } else {
            out.push(None);
        }
    }

    out
}
