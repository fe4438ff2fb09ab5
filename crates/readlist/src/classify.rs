//! Reading-list bucketing of schedule entries.
//!
//! This module partitions a collection of schedule entries into the three
//! groupings a reading-list view renders: due today, due some time in the
//! current week, and due at some point from today onward. Buckets are not
//! exclusive — an entry due today is also due this week — so membership is
//! reported per bucket and, for a single entry, as a tagged set.
//!
//! The only configuration is the first day of the week, held once by the
//! [`Classifier`] instead of being re-decided at every call site.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use readlist::{
//!   classify::{Bucket, Classifier},
//!   schedule::{Cadence, ScheduleEntry},
//! };
//!
//! let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let entry = ScheduleEntry::repeating("daily-arxiv", anchor, Cadence::Daily);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
//! let memberships = Classifier::default().memberships(&entry, today);
//! assert!(memberships.contains(&Bucket::Today));
//! assert!(memberships.contains(&Bucket::ThisWeek));
//! assert!(memberships.contains(&Bucket::Upcoming));
//! ```

use super::*;

/// A reading-list grouping an entry may belong to.
///
/// Membership is non-exclusive; see [`Classifier::memberships`] for the
/// set view of a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
  /// The entry has an occurrence on the reference date itself.
  Today,
  /// The entry has an occurrence inside the week containing the reference
  /// date.
  ThisWeek,
  /// The entry has at least one occurrence on or after the reference date.
  Upcoming,
}

/// An entry placed in a bucket, tagged with the occurrence date that put it
/// there.
///
/// The occurrence date is what bucket ordering is defined over: within a
/// bucket, elements sort ascending by occurrence and ties break on the
/// entry id so repeated classification is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketedEntry {
  /// The occurrence date relevant to the bucket: the reference date for
  /// today, the first in-week occurrence for this week, the next
  /// occurrence for upcoming.
  pub occurrence: NaiveDate,
  /// The scheduled entry itself.
  pub entry:      ScheduleEntry,
}

/// The three reading-list buckets for one reference date.
///
/// Produced by [`Classifier::partition`]. An entry may appear in several
/// buckets at once; each appearance carries its own occurrence date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingBuckets {
  /// Entries with an occurrence on the reference date.
  pub today:     Vec<BucketedEntry>,
  /// Entries with an occurrence inside the reference date's week.
  pub this_week: Vec<BucketedEntry>,
  /// Entries with any occurrence on or after the reference date.
  pub upcoming:  Vec<BucketedEntry>,
}

/// Partitions schedule entries into reading-list buckets.
///
/// Holds the week-start convention as its only state; everything else is a
/// pure function of the entries and the reference date handed to each call.
/// Cheap to copy and safe to share across threads.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use readlist::classify::Classifier;
///
/// // ISO-style weeks starting on Monday instead of the default Sunday.
/// let classifier = Classifier::new(Weekday::Mon);
/// assert_eq!(classifier.week_start(), Weekday::Mon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
  /// First day of the week used to derive the this-week window.
  week_start: Weekday,
}

impl Default for Classifier {
  fn default() -> Self { Self { week_start: DEFAULT_WEEK_START } }
}

impl Classifier {
  /// Creates a classifier with an explicit first day of the week.
  pub fn new(week_start: Weekday) -> Self { Self { week_start } }

  /// The first day of the week this classifier buckets against.
  pub fn week_start(&self) -> Weekday { self.week_start }

  /// Partitions `entries` into today / this-week / upcoming buckets
  /// relative to `today`.
  ///
  /// Buckets are non-exclusive. Within each bucket, elements are ordered
  /// ascending by their occurrence date with ties broken by entry id, so
  /// identical inputs always produce identical output.
  #[instrument(
      skip(self, entries),
      fields(
          entry_count = entries.len(),
          today = %today,
          week_start = ?self.week_start
      ),
      level = "debug"
  )]
  pub fn partition(&self, entries: &[ScheduleEntry], today: NaiveDate) -> ReadingBuckets {
    let week = DateWindow::week_of(today, self.week_start);
    let mut buckets = ReadingBuckets::default();

    for entry in entries {
      if recurrence::occurs_on(entry, today) {
        buckets.today.push(BucketedEntry { occurrence: today, entry: entry.clone() });
      }

      if let Some(occurrence) = recurrence::next_occurrence_on_or_after(entry, week.start())
        .filter(|date| *date <= week.end())
      {
        buckets.this_week.push(BucketedEntry { occurrence, entry: entry.clone() });
      }

      match recurrence::next_occurrence_on_or_after(entry, today) {
        Some(occurrence) =>
          buckets.upcoming.push(BucketedEntry { occurrence, entry: entry.clone() }),
        None => trace!(id = %entry.id, "entry has no occurrence on or after today"),
      }
    }

    for bucket in [&mut buckets.today, &mut buckets.this_week, &mut buckets.upcoming] {
      bucket.sort_by(|a, b| (a.occurrence, &a.entry.id).cmp(&(b.occurrence, &b.entry.id)));
    }

    debug!(
      today = buckets.today.len(),
      this_week = buckets.this_week.len(),
      upcoming = buckets.upcoming.len(),
      "partitioned reading schedule"
    );
    buckets
  }

  /// The set of buckets a single entry belongs to relative to `today`.
  ///
  /// The same predicates as [`Classifier::partition`], reported as a tagged
  /// set for callers that render one entry's status rather than a whole
  /// list.
  pub fn memberships(&self, entry: &ScheduleEntry, today: NaiveDate) -> BTreeSet<Bucket> {
    let week = DateWindow::week_of(today, self.week_start);
    let mut memberships = BTreeSet::new();
    if recurrence::occurs_on(entry, today) {
      memberships.insert(Bucket::Today);
    }
    if recurrence::occurs_in_window(entry, &week) {
      memberships.insert(Bucket::ThisWeek);
    }
    if recurrence::next_occurrence_on_or_after(entry, today).is_some() {
      memberships.insert(Bucket::Upcoming);
    }
    memberships
  }
}
