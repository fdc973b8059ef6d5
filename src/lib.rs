//! # Timelog - report generator for plain-text work logs
//!
//! A command-line utility that parses gtimelog-style activity logs and
//! produces aggregated time reports.
//!
//! ## Features
//!
//! - **Log Parsing**: Reconstructs work intervals from timestamped entries
//! - **Task Notes**: Checklist lines attach to the entry that follows them
//! - **Aggregation**: Per-client totals grouped by day, ISO week or month
//! - **Pricing**: Amounts from a client rate file (hourly or daily rates)
//! - **HTML Export**: Static bar-chart page per client and month
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timelog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
