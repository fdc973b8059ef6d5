//! Report orchestration and text rendering.
//!
//! [`TimelogReport`] owns one report run: parse the log, refuse an empty
//! range, aggregate, optionally write the HTML page, then render the text
//! report. Rendering walks the buckets in ascending key order and emits the
//! block format the tests pin down: a header per bucket, one padded line per
//! client, optional task notes, a bucket total, an optional priced amount
//! and a final grand total.

use crate::libs::aggregate::{aggregate, Buckets, Grouping};
use crate::libs::config::Config;
use crate::libs::dateutils::format_duration;
use crate::libs::error::TimelogError;
use crate::libs::export::HtmlExporter;
use crate::libs::messages::Message;
use crate::libs::parser::LogParser;
use crate::libs::rates::Rates;
use crate::{msg_debug, msg_success};
use chrono::{Datelike, Duration, NaiveDateTime};

/// Label column width in the rendered report.
const COLUMN_WIDTH: usize = 20;
const TOTAL_LABEL: &str = "Total time";

/// Everything one run needs besides the configured paths.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Inclusive start of the report range.
    pub start: NaiveDateTime,
    /// Inclusive end of the report range.
    pub end: NaiveDateTime,
    pub grouping: Grouping,
    /// Restrict the report to this client label, matched exactly.
    pub client: Option<String>,
    /// Include task notes under each client line.
    pub with_tasks: bool,
    /// Add a priced total per bucket; requires a client filter.
    pub with_price: bool,
    /// Write the HTML bar-chart page as well.
    pub html: bool,
}

/// A single report run over the configured timelog.
#[derive(Debug, Clone)]
pub struct TimelogReport {
    config: Config,
    options: ReportOptions,
}

impl TimelogReport {
    pub fn new(config: Config, options: ReportOptions) -> Self {
        Self { config, options }
    }

    /// Runs the full pipeline and returns the rendered report text.
    pub fn run(&self) -> Result<String, TimelogError> {
        // HTML pages show task notes without their checklist markers
        let parser = LogParser::new(self.options.start, self.options.end, self.options.client.clone(), self.options.html);
        let intervals = parser.parse(&self.config.timelog_path)?;
        msg_debug!(format!("parsed {} intervals from {}", intervals.len(), self.config.timelog_path.display()));
        if intervals.is_empty() {
            return Err(TimelogError::NoEntries);
        }

        let buckets = aggregate(&intervals, self.options.grouping);

        if self.options.html {
            let exporter = HtmlExporter::new(self.config.site_path.clone(), self.options.client.clone());
            let page = exporter.export(&buckets, self.options.start.date().month())?;
            msg_success!(Message::HtmlReportWritten(page.display().to_string()));
        }

        self.render(&buckets)
    }

    fn render(&self, buckets: &Buckets) -> Result<String, TimelogError> {
        let rates = self.options.with_price.then(|| Rates::new(&self.config.clients_path));
        let mut lines: Vec<String> = Vec::new();
        let mut grand_total = Duration::zero();

        for (key, clients) in buckets {
            lines.push(format!("\n====== {} {} =======\n", self.options.grouping, key.label()));

            let mut bucket_total = Duration::zero();
            for (client, total) in clients {
                bucket_total = bucket_total + total.duration;
                lines.push(format!(
                    "{}:{}{}",
                    capitalize(client),
                    column_pad(client.len()),
                    format_duration(&total.duration)
                ));
                if self.options.with_tasks && !total.tasks.is_empty() {
                    let notes: String = total.tasks.iter().map(String::as_str).collect();
                    lines.push(format!("\n{}", notes));
                }
            }
            grand_total = grand_total + bucket_total;
            lines.push(format!("\n{}:{}{}", TOTAL_LABEL, column_pad(TOTAL_LABEL.len()), format_duration(&bucket_total)));

            if let (Some(rates), Some(client)) = (&rates, &self.options.client) {
                let worked = clients.get(client).map(|total| total.duration).unwrap_or_else(Duration::zero);
                let amount = rates.amount_for(client, &worked)?.unwrap_or(0.0);
                lines.push(format!("\nTotal amount: {:.2}", amount));
            }
        }

        lines.push(format!("\nTOTAL: {}", format_duration(&grand_total)));
        Ok(lines.join("\n"))
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn column_pad(used: usize) -> String {
    " ".repeat(COLUMN_WIDTH.saturating_sub(used))
}
