//! Error types for the readlist library.
//!
//! This module provides the error type covering the failure modes of
//! schedule handling:
//! - Cadence labels from the persistence layer that don't name a cadence
//! - Malformed calendar dates handed to validating constructors
//! - Inverted window bounds
//!
//! All of these are caller precondition violations surfaced at construction
//! or parse boundaries; once values are constructed, the occurrence
//! computations themselves are total and cannot fail.
//!
//! # Examples
//!
//! ```
//! use std::str::FromStr;
//!
//! use readlist::{error::ReadlistError, schedule::Cadence};
//! // or `use readlist::prelude::*` to bring in the error type
//!
//! match Cadence::from_str("fortnightly") {
//!   Err(ReadlistError::InvalidCadence(label)) => assert_eq!(label, "fortnightly"),
//!   other => panic!("expected an invalid cadence, got {other:?}"),
//! }
//! ```

use chrono::NaiveDate;
use thiserror::Error;

/// Error type alias used for the [`readlist`](crate) crate.
pub type Result<T> = core::result::Result<T, ReadlistError>;

/// Errors that can occur when constructing schedule values.
///
/// Every variant is a local precondition violation reported immediately to
/// the caller. There is no I/O anywhere in this crate, so there are no
/// retryable or partial-failure cases.
#[derive(Error, Debug)]
pub enum ReadlistError {
  /// The provided cadence label couldn't be parsed.
  ///
  /// This typically occurs when reading entries back from the persistence
  /// layer and the stored label doesn't match any known cadence.
  ///
  /// The string parameter contains the invalid label for debugging.
  #[error("Invalid cadence label, see `readlist::schedule::Cadence`")]
  InvalidCadence(String),

  /// The provided year/month/day triple doesn't name a real calendar date.
  ///
  /// This can occur when:
  /// - The month is outside `1..=12`
  /// - The day overflows the month (e.g. February 30th)
  /// - The year is outside the supported calendar range
  #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
  InvalidDate {
    /// Year as supplied by the caller.
    year:  i32,
    /// Month as supplied by the caller.
    month: u32,
    /// Day of month as supplied by the caller.
    day:   u32,
  },

  /// A window was constructed with its start after its end.
  ///
  /// Windows are inclusive date ranges; an empty range has no valid
  /// representation and is rejected at construction instead of silently
  /// matching nothing.
  #[error("Window start {start} is after its end {end}")]
  InvalidWindow {
    /// Requested window start.
    start: NaiveDate,
    /// Requested window end.
    end:   NaiveDate,
  },
}
