//! Core library modules for the timelog application.
//!
//! The report pipeline lives here: `parser` turns the raw log into work
//! intervals, `aggregate` groups them into per-period buckets, and `report`
//! renders the result (or hands it to `export` for the HTML page). The
//! remaining modules are supporting infrastructure: configuration, date
//! helpers, the client rate lookup, the error taxonomy and user-facing
//! messages.

pub mod aggregate;
pub mod config;
pub mod data_storage;
pub mod dateutils;
pub mod error;
pub mod export;
pub mod messages;
pub mod parser;
pub mod rates;
pub mod report;
