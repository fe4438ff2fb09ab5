//! Reading-schedule recurrence core for research paper collections.
//!
//! `readlist` is the scheduling heart of a paper reading-list application,
//! providing:
//!
//! - Occurrence computation for one-time and repeating schedule entries
//! - Calendar-window queries (does this entry come due this week?)
//! - Today / this-week / upcoming bucketing for reading-list views
//! - Deterministic, clock-free classification for reproducible results
//!
//! # Features
//!
//! - **Pure calendar arithmetic**: every computation works on calendar dates
//!   (`chrono::NaiveDate`), never on instants, so daylight-saving shifts can
//!   never skew a day count
//! - **Explicit reference dates**: "today" is always a parameter, never a
//!   hidden clock read, so classification is reproducible in tests
//! - **Clamped monthly cadence**: an entry anchored on the 31st comes due on
//!   the last day of short months instead of rolling into the next one
//! - **Non-exclusive buckets**: an entry due today is also part of this
//!   week, and membership is reported as a set
//!
//! # Getting Started
//!
//! ```
//! use chrono::NaiveDate;
//! use readlist::{
//!   classify::Classifier,
//!   schedule::{Cadence, ScheduleEntry},
//! };
//!
//! let anchor = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let entry = ScheduleEntry::repeating("survey-paper", anchor, Cadence::Monthly);
//!
//! // 2024 is a leap year, so the January 31st anchor lands on February 29th.
//! let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
//! let buckets = Classifier::default().partition(&[entry], today);
//! assert_eq!(buckets.today.len(), 1);
//! assert_eq!(buckets.upcoming[0].occurrence, today);
//! ```
//!
//! # Module Organization
//!
//! - [`schedule`]: Schedule entry types and cadence handling
//! - [`recurrence`]: Occurrence predicates and enumeration
//! - [`window`]: Inclusive calendar-date windows and week derivation
//! - [`classify`]: Reading-list bucketing
//! - [`error`]: Error types for the crate
//!
//! # Design Philosophy
//!
//! This library emphasizes:
//! - Stateless, side-effect-free operations safe to call from any thread
//! - Validation at construction boundaries, total functions past them
//! - Closed-form occurrence math rather than day-by-day scanning
//! - Clear error handling and propagation

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{cmp::max, collections::BTreeSet, fmt::Display, str::FromStr};

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

pub mod classify;
pub mod error;
pub mod recurrence;
pub mod schedule;
pub mod window;

use crate::{error::*, schedule::*, window::*};

/// Common traits and types for ergonomic imports.
///
/// This module provides a convenient way to import frequently used types
/// with a single glob import.
///
/// # Usage
///
/// ```
/// use chrono::NaiveDate;
/// use readlist::prelude::*;
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let entry = ScheduleEntry::repeating("weekly-club", anchor, Cadence::Weekly);
/// let buckets = Classifier::default().partition(&[entry], anchor);
/// assert_eq!(buckets.this_week.len(), 1);
/// ```
pub mod prelude {
  pub use crate::{
    classify::{Bucket, BucketedEntry, Classifier, ReadingBuckets},
    error::{ReadlistError, Result},
    schedule::{Cadence, ScheduleEntry},
    window::{DateWindow, DEFAULT_WEEK_START},
  };
}
