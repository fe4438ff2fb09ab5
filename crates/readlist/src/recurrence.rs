//! Occurrence computation for schedule entries.
//!
//! This module implements the recurrence engine: pure predicates and
//! closed-form searches over [`ScheduleEntry`] values. All functions are
//! stateless and free of clock reads; the reference date is always an
//! explicit argument supplied by the caller.
//!
//! Two rules shape every function here:
//!
//! - Arithmetic happens on calendar dates, never instants, so a day count
//!   is always a whole number regardless of daylight-saving transitions.
//! - A monthly entry anchored on a day its target month doesn't have comes
//!   due on that month's last day. January 31st recurs on February 29th in
//!   a leap year and never rolls into March.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use readlist::{
//!   recurrence,
//!   schedule::{Cadence, ScheduleEntry},
//! };
//!
//! let anchor = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let entry = ScheduleEntry::repeating("monthly-digest", anchor, Cadence::Monthly);
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
//! let next = recurrence::next_occurrence_on_or_after(&entry, reference);
//! assert_eq!(next, NaiveDate::from_ymd_opt(2024, 2, 29));
//! ```

use super::*;

/// Whether `entry` has an occurrence on the calendar date `target`.
///
/// Membership is decided at date granularity; any time of day attached to
/// the entry is ignored. Per cadence:
///
/// - `Once`: true only for the anchor date itself
/// - `Daily`: true for every date on or after the anchor
/// - `Weekly`: true when a whole non-negative multiple of seven days
///   separates `target` from the anchor
/// - `Monthly`: true when `target` is the anchor's day of month, clamped to
///   the length of `target`'s month
pub fn occurs_on(entry: &ScheduleEntry, target: NaiveDate) -> bool {
  match entry.cadence {
    Cadence::Once => target == entry.anchor,
    Cadence::Daily => target >= entry.anchor,
    Cadence::Weekly => target >= entry.anchor && (target - entry.anchor).num_days() % 7 == 0,
    Cadence::Monthly =>
      target >= entry.anchor
        && target.day() == clamped_day(entry.anchor.day(), target.year(), target.month()),
  }
}

/// The earliest occurrence of `entry` on or after `reference`.
///
/// Returns `None` only for a one-time entry whose single occurrence has
/// already passed. Every cadence is resolved in closed form; nothing scans
/// forward day by day, so the distance between anchor and reference can be
/// arbitrarily large.
pub fn next_occurrence_on_or_after(
  entry: &ScheduleEntry,
  reference: NaiveDate,
) -> Option<NaiveDate> {
  match entry.cadence {
    Cadence::Once => (entry.anchor >= reference).then_some(entry.anchor),
    Cadence::Daily => Some(max(entry.anchor, reference)),
    Cadence::Weekly => {
      let elapsed = (reference - entry.anchor).num_days();
      if elapsed <= 0 {
        return Some(entry.anchor);
      }
      let strides = elapsed.div_euclid(7) + i64::from(elapsed % 7 != 0);
      Some(entry.anchor + TimeDelta::days(7 * strides))
    },
    Cadence::Monthly => {
      if reference <= entry.anchor {
        return Some(entry.anchor);
      }
      // The clamped candidate in the reference month either lies on or
      // after the reference, or the next month's candidate does.
      let (mut year, mut month) = (reference.year(), reference.month());
      let mut candidate = monthly_occurrence(entry.anchor.day(), year, month);
      if candidate < reference {
        (year, month) = next_month(year, month);
        candidate = monthly_occurrence(entry.anchor.day(), year, month);
      }
      Some(candidate)
    },
  }
}

/// Whether `entry` has at least one occurrence inside `window`.
///
/// Resolved as a closed-form search for the first occurrence on or after
/// the window start; the window itself is never iterated, so it can span
/// years without cost.
pub fn occurs_in_window(entry: &ScheduleEntry, window: &DateWindow) -> bool {
  next_occurrence_on_or_after(entry, window.start()).is_some_and(|date| date <= window.end())
}

/// Every occurrence of `entry` inside `window`, in ascending order.
///
/// Enumeration is bounded by the window end; unbounded cadences are never
/// materialized past it. Useful for calendar-style views that need the full
/// set of due dates in a visible range.
pub fn occurrences_in_window(entry: &ScheduleEntry, window: &DateWindow) -> Vec<NaiveDate> {
  let mut occurrences = Vec::new();
  let mut cursor = window.start();
  while let Some(date) = next_occurrence_on_or_after(entry, cursor) {
    if date > window.end() {
      break;
    }
    occurrences.push(date);
    let Some(next) = date.succ_opt() else { break };
    cursor = next;
  }
  occurrences
}

/// The anchor's day of month clamped to the length of the target month.
fn clamped_day(anchor_day: u32, year: i32, month: u32) -> u32 {
  anchor_day.min(days_in_month(year, month))
}

/// The occurrence date of a monthly entry in the given month.
fn monthly_occurrence(anchor_day: u32, year: i32, month: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, clamped_day(anchor_day, year, month))
    .expect("clamped day exists in its month")
}

/// The month following `(year, month)`.
fn next_month(year: i32, month: u32) -> (i32, u32) {
  if month == 12 {
    (year + 1, 1)
  } else {
    (year, month + 1)
  }
}

/// Number of days in the given month.
fn days_in_month(year: i32, month: u32) -> u32 {
  let (next_year, next_month) = next_month(year, month);
  NaiveDate::from_ymd_opt(next_year, next_month, 1)
    .and_then(|first| first.pred_opt())
    .expect("every valid month has a last day")
    .day()
}
