//! Groups work intervals into per-period, per-client buckets.

use crate::libs::error::TimelogError;
use crate::libs::parser::WorkInterval;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Report granularity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Day,
    Week,
    Month,
}

impl FromStr for Grouping {
    type Err = TimelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(TimelogError::InvalidGrouping(other.to_string())),
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Grouping {
    fn key_for(&self, date: NaiveDate) -> BucketKey {
        match self {
            Self::Day => BucketKey::Day(date),
            Self::Week => BucketKey::Week(date.iso_week().week()),
            Self::Month => BucketKey::Month(date.month()),
        }
    }
}

/// Bucket key for one granularity value. One report uses one granularity,
/// so keys within a report always order consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BucketKey {
    Day(NaiveDate),
    Week(u32),
    Month(u32),
}

impl BucketKey {
    /// The value shown in bucket headers: day of month, ISO week number or
    /// month number.
    pub fn label(&self) -> String {
        match self {
            Self::Day(date) => date.day().to_string(),
            Self::Week(week) => week.to_string(),
            Self::Month(month) => month.to_string(),
        }
    }
}

/// Merged record for one client within one bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTotal {
    pub duration: Duration,
    pub tasks: BTreeSet<String>,
}

/// Aggregated report data: bucket key, then client label, in ascending order.
pub type Buckets = BTreeMap<BucketKey, BTreeMap<String, ClientTotal>>;

/// Buckets the intervals by the chosen granularity, merging same-bucket
/// same-client records by summing durations and unioning task sets.
///
/// An empty interval list yields an empty map; the caller treats that as
/// "nothing to report".
pub fn aggregate(intervals: &[WorkInterval], grouping: Grouping) -> Buckets {
    let mut buckets = Buckets::new();

    for interval in intervals {
        let clients = buckets.entry(grouping.key_for(interval.date)).or_default();
        match clients.get_mut(&interval.client) {
            Some(total) => {
                total.duration = total.duration + interval.duration;
                total.tasks.extend(interval.tasks.iter().cloned());
            }
            None => {
                clients.insert(
                    interval.client.clone(),
                    ClientTotal {
                        duration: interval.duration,
                        tasks: interval.tasks.clone(),
                    },
                );
            }
        }
    }

    buckets
}
