//! Client rate lookup for priced reports.
//!
//! The rate file is line-oriented, `label:unit:rate` per line, where `unit`
//! is `hour` or `day`. The first line matching the client wins; malformed
//! lines are skipped like any other log noise.

use crate::libs::dateutils::as_hours;
use crate::libs::error::TimelogError;
use chrono::Duration;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;

/// A day rate covers this many worked hours.
const HOURS_PER_DAY: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateUnit {
    Hour,
    Day,
}

impl FromStr for RateUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            _ => Err(()),
        }
    }
}

/// Rate table backed by the client rate file.
#[derive(Debug, Clone)]
pub struct Rates {
    path: PathBuf,
}

impl Rates {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the amount owed for `worked` time by `client`, rounded to two
    /// decimal places, or `None` when the client has no rate line.
    ///
    /// The scan is O(file size) per call; the file is small and read once
    /// per priced report.
    pub fn amount_for(&self, client: &str, worked: &Duration) -> Result<Option<f64>, TimelogError> {
        let file = File::open(&self.path).map_err(|source| TimelogError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;

        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| TimelogError::SourceUnavailable {
                path: self.path.clone(),
                source,
            })?;

            let mut fields = line.trim_end().splitn(3, ':');
            let (label, unit, rate) = match (fields.next(), fields.next(), fields.next()) {
                (Some(label), Some(unit), Some(rate)) => (label, unit, rate),
                _ => continue,
            };
            if label != client {
                continue;
            }
            let unit = match unit.parse::<RateUnit>() {
                Ok(unit) => unit,
                Err(_) => continue,
            };
            let rate = match rate.parse::<f64>() {
                Ok(rate) => rate,
                Err(_) => continue,
            };

            let amount = match unit {
                RateUnit::Hour => as_hours(worked) * rate,
                RateUnit::Day => as_hours(worked) / HOURS_PER_DAY * rate,
            };
            return Ok(Some((amount * 100.0).round() / 100.0));
        }

        Ok(None)
    }
}
