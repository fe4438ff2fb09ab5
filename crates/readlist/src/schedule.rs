//! Core schedule entry types for reading-list management.
//!
//! This module provides the fundamental types describing when a paper is
//! meant to be read. It handles:
//!
//! - Schedule entry construction and validation
//! - Repeat cadence parsing and formatting
//! - Serialization for the external persistence layer
//!
//! An entry pairs an anchor date (the first occurrence) with a cadence
//! describing how the entry repeats afterwards. Occurrence computation over
//! entries lives in [`crate::recurrence`]; entries themselves are plain
//! data.
//!
//! # Examples
//!
//! Building entries for different reading habits:
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use readlist::schedule::{Cadence, ScheduleEntry};
//!
//! let anchor = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//!
//! // A one-shot reading slot.
//! let once = ScheduleEntry::once("attention-is-all-you-need", anchor);
//!
//! // A weekly reading-group paper, 45 minutes at 9am.
//! let weekly = ScheduleEntry::repeating("reading-group", anchor, Cadence::Weekly)
//!   .with_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
//!   .with_duration(45);
//! assert_eq!(weekly.duration_minutes, Some(45));
//! ```

use super::*;

/// A paper's slot in the reading schedule.
///
/// This struct is the unit the recurrence engine operates on. It is
/// constructed by the surrounding application (typically from a persistence
/// row) and passed by reference into the occurrence queries; the engine
/// never retains or mutates it.
///
/// The anchor is a calendar date. An optional time of day can be attached
/// for display and within-day ordering, but occurrence membership is always
/// decided at date granularity and ignores it.
///
/// # Examples
///
/// ```
/// use readlist::schedule::{Cadence, ScheduleEntry};
///
/// let entry = ScheduleEntry::from_ymd("deep-work", 2024, 1, 15, Cadence::Daily).unwrap();
/// assert_eq!(entry.cadence, Cadence::Daily);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
  /// Opaque stable identifier supplied by the caller.
  pub id:               String,
  /// Calendar date of the first/original occurrence.
  pub anchor:           NaiveDate,
  /// Optional time of day attached to the anchor. Ignored by occurrence
  /// computation, which works at date granularity.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub anchor_time:      Option<NaiveTime>,
  /// How the entry repeats after its anchor.
  pub cadence:          Cadence,
  /// Estimated minutes to finish reading. Never affects occurrence
  /// computation.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub duration_minutes: Option<u32>,
}

/// Repeat cadence of a schedule entry.
///
/// A closed set: an entry either occurs exactly once or repeats at one of
/// three calendar rhythms anchored on its first occurrence. The external
/// persistence layer stores cadences as lowercase labels; `"none"` is
/// accepted as a legacy spelling of [`Cadence::Once`] on the way in.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
///
/// use readlist::schedule::Cadence;
///
/// let weekly = Cadence::from_str("weekly").unwrap();
/// let once = Cadence::from_str("none").unwrap();
/// assert_eq!(once, Cadence::Once);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
  /// A single occurrence on the anchor date, nothing afterwards.
  #[serde(alias = "none")]
  Once,
  /// An occurrence on every date from the anchor onwards.
  Daily,
  /// An occurrence every seventh day from the anchor onwards.
  Weekly,
  /// An occurrence each month on the anchor's day of month, clamped to the
  /// last day of months too short to hold it.
  Monthly,
}

impl ScheduleEntry {
  /// Creates a one-time entry occurring only on `anchor`.
  pub fn once(id: impl Into<String>, anchor: NaiveDate) -> Self {
    Self::repeating(id, anchor, Cadence::Once)
  }

  /// Creates an entry with the given cadence anchored on `anchor`.
  pub fn repeating(id: impl Into<String>, anchor: NaiveDate, cadence: Cadence) -> Self {
    Self { id: id.into(), anchor, anchor_time: None, cadence, duration_minutes: None }
  }

  /// Creates an entry from raw year/month/day numbers.
  ///
  /// This is the validating entry point for callers holding unchecked
  /// numeric dates (form input, persistence rows).
  ///
  /// # Errors
  ///
  /// Returns [`ReadlistError::InvalidDate`] if the triple doesn't name a
  /// real calendar date.
  pub fn from_ymd(
    id: impl Into<String>,
    year: i32,
    month: u32,
    day: u32,
    cadence: Cadence,
  ) -> Result<Self> {
    let anchor = NaiveDate::from_ymd_opt(year, month, day)
      .ok_or(ReadlistError::InvalidDate { year, month, day })?;
    Ok(Self::repeating(id, anchor, cadence))
  }

  /// Attaches a time of day to the anchor.
  pub fn with_time(mut self, time: NaiveTime) -> Self {
    self.anchor_time = Some(time);
    self
  }

  /// Sets the estimated reading duration in minutes.
  pub fn with_duration(mut self, minutes: u32) -> Self {
    self.duration_minutes = Some(minutes);
    self
  }
}

impl Display for Cadence {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Cadence::Once => write!(f, "once"),
      Cadence::Daily => write!(f, "daily"),
      Cadence::Weekly => write!(f, "weekly"),
      Cadence::Monthly => write!(f, "monthly"),
    }
  }
}

impl FromStr for Cadence {
  type Err = ReadlistError;

  fn from_str(s: &str) -> Result<Self> {
    match &s.to_lowercase() as &str {
      "once" | "none" => Ok(Cadence::Once),
      "daily" => Ok(Cadence::Daily),
      "weekly" => Ok(Cadence::Weekly),
      "monthly" => Ok(Cadence::Monthly),
      s => Err(ReadlistError::InvalidCadence(s.to_owned())),
    }
  }
}
