#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use std::fs;
    use timelog::libs::aggregate::{aggregate, Grouping};
    use timelog::libs::export::HtmlExporter;
    use timelog::libs::parser::WorkInterval;

    fn interval(day: u32, client: &str, minutes: i64, tasks: &[&str]) -> WorkInterval {
        WorkInterval {
            date: NaiveDate::from_ymd_opt(2013, 4, day).unwrap(),
            client: client.to_string(),
            duration: Duration::minutes(minutes),
            tasks: tasks.iter().map(|task| task.to_string()).collect(),
        }
    }

    #[test]
    fn test_export_writes_client_page() {
        let dir = tempfile::tempdir().unwrap();
        let buckets = aggregate(
            &[
                interval(24, "project1", 360, &["Task completed"]),
                interval(25, "project1", 90, &[]),
            ],
            Grouping::Day,
        );

        let exporter = HtmlExporter::new(dir.path().join("reports"), Some("project1".to_string()));
        let path = exporter.export(&buckets, 4).unwrap();

        assert_eq!(path, dir.path().join("reports").join("project1").join("4.html"));
        let page = fs::read_to_string(&path).unwrap();
        assert!(page.contains("Report for project1"));
        // 6h + 1.5h over the range
        assert!(page.contains("Total hours: 7.50"));
        assert!(page.contains(r#"{"key":"project1","values":"#));
        assert!(page.contains(r#"{"x":"24","y":6.0,"size":1,"id":"id-24"}"#));
        assert!(page.contains(r#"{"x":"25","y":1.5,"size":0,"id":"id-25"}"#));
    }

    #[test]
    fn test_export_without_client_goes_to_admin() {
        let dir = tempfile::tempdir().unwrap();
        let buckets = aggregate(
            &[interval(24, "project1", 60, &[]), interval(24, "project2", 30, &[])],
            Grouping::Day,
        );

        let exporter = HtmlExporter::new(dir.path().join("reports"), None);
        let path = exporter.export(&buckets, 4).unwrap();

        assert_eq!(path, dir.path().join("reports").join("admin").join("4.html"));
        let page = fs::read_to_string(&path).unwrap();
        // One series per client
        assert!(page.contains(r#""key":"project1""#));
        assert!(page.contains(r#""key":"project2""#));
    }

    #[test]
    fn test_export_tolerates_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let site = dir.path().join("reports");
        fs::create_dir_all(site.join("project1")).unwrap();

        let buckets = aggregate(&[interval(24, "project1", 60, &[])], Grouping::Day);
        let exporter = HtmlExporter::new(site.clone(), Some("project1".to_string()));

        // Two consecutive runs write the same path without complaint
        exporter.export(&buckets, 4).unwrap();
        let path = exporter.export(&buckets, 4).unwrap();
        assert!(path.exists());
    }
}
