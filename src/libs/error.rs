//! Error taxonomy for the report pipeline.
//!
//! Malformed lines inside the log are swallowed by the parser; everything
//! here propagates to the top level and is rendered as plain error text,
//! never as a partial report.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelogError {
    /// A date or timestamp string did not match its pattern, or named an
    /// impossible calendar value. Recoverable inside the parser (the line is
    /// skipped); fatal when it comes from the user-supplied report dates.
    #[error("bad date time: {0}")]
    MalformedInput(String),

    /// The timelog or client rate file is missing or unreadable.
    #[error("cannot read {}: {}", path.display(), source)]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The parser produced zero intervals for the requested range.
    #[error("There are no entries")]
    NoEntries,

    /// The grouping value is not one of day, week or month.
    #[error("unknown grouping '{0}': expected day, week or month")]
    InvalidGrouping(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
