//! The log parsing engine.
//!
//! Reads the timelog file line by line and reconstructs discrete work
//! intervals from consecutive timestamp entries. A line is either a timed
//! entry (`YYYY-MM-DD HH:MM: label`), a checklist task line (`* [X] ...`)
//! that attaches to the next timed entry, or noise, which is ignored. An
//! entry whose label ends in `**` is slack: it never produces an interval
//! but still anchors the timeline.
//!
//! Duration attribution: a slot's duration is the elapsed time between the
//! entry's timestamp and the previous accepted timestamp, and only when both
//! fall on the same calendar day. A fresh day starts a fresh clock.

use crate::libs::dateutils::{parse_timestamp, slot_duration};
use crate::libs::error::TimelogError;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

/// Separator between the timestamp and the label of a timed entry.
const ENTRY_SEPARATOR: &str = ": ";

/// Checklist task line marker: `* [` followed by one of `.`, `o`, `O`, `X`.
static TASK_FORMAT: OnceLock<Regex> = OnceLock::new();
/// Labels that end in `**` after a word character are not counted as work.
static SLACK_FORMAT: OnceLock<Regex> = OnceLock::new();

fn task_format() -> &'static Regex {
    TASK_FORMAT.get_or_init(|| Regex::new(r"^\* \[[.oOX]\]").expect("valid task pattern"))
}

fn slack_format() -> &'static Regex {
    SLACK_FORMAT.get_or_init(|| Regex::new(r"\w\*\*$").expect("valid slack pattern"))
}

/// One reconstructed slot of work: a client label, the day it happened,
/// the attributed duration and the task notes logged since the previous
/// timed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkInterval {
    pub date: NaiveDate,
    pub client: String,
    pub duration: Duration,
    pub tasks: BTreeSet<String>,
}

/// Running accumulator threaded through the line loop.
#[derive(Debug, Default)]
struct ParserState {
    /// Timestamp of the most recent accepted entry, if any.
    anchor: Option<NaiveDateTime>,
    /// Task lines seen since the previous timed entry.
    pending: BTreeSet<String>,
}

/// Line-oriented parser producing [`WorkInterval`]s for one report run.
#[derive(Debug, Clone)]
pub struct LogParser {
    start: NaiveDateTime,
    end: NaiveDateTime,
    client: Option<String>,
    strip_markers: bool,
}

impl LogParser {
    /// `start` and `end` bound the report range, both inclusive. With a
    /// `client` filter only exactly matching labels are emitted. With
    /// `strip_markers` set, the checklist prefix is removed from task text.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, client: Option<String>, strip_markers: bool) -> Self {
        Self {
            start,
            end,
            client,
            strip_markers,
        }
    }

    /// Parses the log file into chronological work intervals.
    ///
    /// Malformed lines are skipped; a missing or unreadable file aborts the
    /// run with [`TimelogError::SourceUnavailable`].
    pub fn parse(&self, path: &Path) -> Result<Vec<WorkInterval>, TimelogError> {
        let file = File::open(path).map_err(|source| TimelogError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let mut state = ParserState::default();
        let mut intervals = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| TimelogError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
            self.feed(&line, &mut state, &mut intervals);
        }
        Ok(intervals)
    }

    /// Processes a single line, updating the running state and appending an
    /// interval when the line is an accepted, in-range, non-slack entry.
    fn feed(&self, line: &str, state: &mut ParserState, intervals: &mut Vec<WorkInterval>) {
        let entry = line
            .split_once(ENTRY_SEPARATOR)
            .and_then(|(time, label)| parse_timestamp(time).ok().map(|timestamp| (timestamp, label)));

        let (timestamp, label) = match entry {
            Some(entry) => entry,
            None => {
                // Not a timed entry: collect it as a task note or drop it.
                if let Some(task) = self.task_text(line) {
                    state.pending.insert(task);
                }
                return;
            }
        };

        if timestamp < self.start || timestamp > self.end {
            // Out-of-range entries still anchor the timeline, so neither
            // their elapsed time nor stale task notes leak into the next
            // in-range slot.
            state.anchor = Some(timestamp);
            state.pending.clear();
            return;
        }

        let wanted = self.client.as_deref().map_or(true, |client| client == label);
        if !slack_format().is_match(label) && wanted {
            intervals.push(WorkInterval {
                date: timestamp.date(),
                client: label.to_string(),
                duration: slot_duration(timestamp, state.anchor),
                tasks: state.pending.clone(),
            });
        }

        state.anchor = Some(timestamp);
        state.pending.clear();
    }

    fn task_text(&self, line: &str) -> Option<String> {
        if !task_format().is_match(line) {
            return None;
        }
        let text = line.trim_end_matches(['\n', '\r']);
        if self.strip_markers {
            Some(task_format().replace(text, "").into_owned())
        } else {
            Some(text.to_string())
        }
    }
}
