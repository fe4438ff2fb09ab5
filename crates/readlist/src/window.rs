//! Inclusive calendar-date windows used for occurrence queries.

use super::*;

/// First day of the week used when no explicit convention is given.
///
/// The week convention is deliberately a single engine-level constant
/// rather than a per-call argument scattered across call sites. Callers
/// with a locale-aware week start override it once via
/// [`crate::classify::Classifier::new`].
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// An inclusive range of calendar dates.
///
/// Both endpoints are part of the window. Windows are the query currency of
/// the recurrence engine: "does this entry come due this week" is a window
/// query over the week containing the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
  /// First date inside the window.
  start: NaiveDate,
  /// Last date inside the window.
  end:   NaiveDate,
}

impl DateWindow {
  /// Creates a window spanning `[start, end]`, both inclusive.
  ///
  /// # Errors
  ///
  /// Returns [`ReadlistError::InvalidWindow`] if `start` is after `end`.
  pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
    if start > end {
      return Err(ReadlistError::InvalidWindow { start, end });
    }
    Ok(Self { start, end })
  }

  /// Creates a window containing exactly one date.
  pub fn single(date: NaiveDate) -> Self { Self { start: date, end: date } }

  /// Creates the week window containing `date` for the given first day of
  /// week.
  pub fn week_of(date: NaiveDate, week_start: Weekday) -> Self {
    let week = date.week(week_start);
    Self { start: week.first_day(), end: week.last_day() }
  }

  /// First date inside the window.
  pub fn start(&self) -> NaiveDate { self.start }

  /// Last date inside the window.
  pub fn end(&self) -> NaiveDate { self.end }

  /// Whether `date` falls inside the window.
  pub fn contains(&self, date: NaiveDate) -> bool { self.start <= date && date <= self.end }
}
