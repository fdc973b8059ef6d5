//! HTML export: one static bar-chart page per client and month.
//!
//! The aggregated buckets become one JSON series per client; each point is
//! `{x, y, size, id}` where `y` is worked hours and `size` the number of
//! task notes. The series are substituted into an embedded page template and
//! written to `<site>/<client-or-admin>/<month>.html`.

use crate::libs::aggregate::Buckets;
use crate::libs::dateutils::as_hours;
use crate::libs::error::TimelogError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Directory used when no client filter is active.
const ADMIN_DIRECTORY: &str = "admin";

#[derive(Debug, Serialize)]
struct SeriesPoint {
    x: String,
    y: f64,
    size: usize,
    id: String,
}

#[derive(Debug, Serialize)]
struct Series {
    key: String,
    values: Vec<SeriesPoint>,
}

/// Writes the static report page for one run.
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    site: PathBuf,
    client: Option<String>,
}

impl HtmlExporter {
    pub fn new(site: PathBuf, client: Option<String>) -> Self {
        Self { site, client }
    }

    /// Serializes the buckets and writes `<site>/<client-or-admin>/<month>.html`.
    ///
    /// The output directory is created idempotently; a pre-existing
    /// directory is not an error.
    pub fn export(&self, buckets: &Buckets, month: u32) -> Result<PathBuf, TimelogError> {
        let data = serde_json::to_string(&self.series(buckets))?;
        let directory = self.site.join(self.client.as_deref().unwrap_or(ADMIN_DIRECTORY));
        fs::create_dir_all(&directory)?;
        let path = directory.join(format!("{}.html", month));

        let total = match &self.client {
            Some(client) => format!("{:.2}", client_hours(buckets, client)),
            None => String::new(),
        };
        let page = PAGE_TEMPLATE
            .replace("{{client}}", self.client.as_deref().unwrap_or(ADMIN_DIRECTORY))
            .replace("{{total}}", &total)
            .replace("{{data}}", &data);
        fs::write(&path, page)?;
        Ok(path)
    }

    /// One series per client; a client filter narrows the output to a single
    /// series.
    fn series(&self, buckets: &Buckets) -> Vec<Series> {
        let mut per_client: BTreeMap<String, Vec<SeriesPoint>> = BTreeMap::new();
        for (key, clients) in buckets {
            for (client, total) in clients {
                if self.client.as_deref().is_some_and(|filter| filter != client.as_str()) {
                    continue;
                }
                per_client.entry(client.clone()).or_default().push(SeriesPoint {
                    x: key.label(),
                    y: as_hours(&total.duration),
                    size: total.tasks.len(),
                    id: format!("id-{}", key.label()),
                });
            }
        }
        per_client.into_iter().map(|(key, values)| Series { key, values }).collect()
    }
}

fn client_hours(buckets: &Buckets, client: &str) -> f64 {
    buckets
        .values()
        .filter_map(|clients| clients.get(client))
        .map(|total| as_hours(&total.duration))
        .sum()
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Timelog report - {{client}}</title>
<style>
  body { font-family: sans-serif; margin: 2em; }
  h1 { font-size: 1.3em; }
  h2 { font-size: 1.1em; margin-bottom: 0.3em; }
  .chart { display: flex; align-items: flex-end; height: 240px; gap: 6px; }
  .bar { background: #4a90d9; width: 28px; position: relative; }
  .bar span { position: absolute; top: -1.4em; font-size: 11px; width: 100%; text-align: center; }
  .label { font-size: 11px; text-align: center; width: 28px; }
</style>
</head>
<body>
<h1>Report for {{client}}</h1>
<p>Total hours: {{total}}</p>
<div id="charts"></div>
<script>
var series = {{data}};
var charts = document.getElementById("charts");
series.forEach(function (group) {
  var heading = document.createElement("h2");
  heading.textContent = group.key;
  charts.appendChild(heading);
  var chart = document.createElement("div");
  chart.className = "chart";
  var max = Math.max.apply(null, group.values.map(function (point) { return point.y; })) || 1;
  group.values.forEach(function (point) {
    var column = document.createElement("div");
    var bar = document.createElement("div");
    bar.className = "bar";
    bar.style.height = (point.y / max * 200) + "px";
    bar.id = point.id;
    bar.innerHTML = "<span>" + point.y.toFixed(1) + "</span>";
    var label = document.createElement("div");
    label.className = "label";
    label.textContent = point.x;
    column.appendChild(bar);
    column.appendChild(label);
    chart.appendChild(column);
  });
  charts.appendChild(chart);
});
</script>
</body>
</html>
"#;
