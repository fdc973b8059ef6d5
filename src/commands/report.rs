//! The report command: parse the log, aggregate and print.

use crate::libs::{
    config::Config,
    dateutils::parse_date,
    messages::Message,
    report::{ReportOptions, TimelogReport},
};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long, help = "Start date of the report, DD/MM/YYYY")]
    start_date: String,
    #[arg(long, help = "End date of the report, DD/MM/YYYY (inclusive)")]
    end_date: String,
    #[arg(long, default_value = "day", help = "Group entries by day, week or month")]
    group_by: String,
    #[arg(long, help = "Limit the report to a single client")]
    client: Option<String>,
    #[arg(long, help = "Add the amount owed, from the client rate file")]
    price: bool,
    #[arg(long, help = "Include the task notes attached to each entry")]
    tasks: bool,
    #[arg(long, help = "Write an HTML page with the stats")]
    html: bool,
    #[arg(long, help = "Timelog file to read instead of the configured one")]
    source: Option<PathBuf>,
    #[arg(long, help = "Client rate file to read instead of the configured one")]
    clients_file: Option<PathBuf>,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    let mut config = Config::read()?;
    if let Some(source) = report_args.source {
        config.timelog_path = source;
    }
    if let Some(clients_file) = report_args.clients_file {
        config.clients_path = clients_file;
    }

    if report_args.price && report_args.client.is_none() {
        // Multi-client pricing is undefined; the rate lookup needs one label
        msg_warning!(Message::PriceNeedsClient);
    }

    let options = ReportOptions {
        start: parse_date(&report_args.start_date)?,
        end: parse_date(&report_args.end_date)?,
        grouping: report_args.group_by.parse()?,
        client: report_args.client,
        with_tasks: report_args.tasks,
        with_price: report_args.price,
        html: report_args.html,
    };

    let result = TimelogReport::new(config, options).run()?;
    msg_print!(result);

    Ok(())
}
