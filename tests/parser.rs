#[cfg(test)]
mod tests {
    use chrono::Duration;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use timelog::libs::dateutils::parse_date;
    use timelog::libs::error::TimelogError;
    use timelog::libs::parser::LogParser;

    fn write_log(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("timelog.txt");
        fs::write(&path, contents).unwrap();
        path
    }

    fn parser(start: &str, end: &str) -> LogParser {
        LogParser::new(parse_date(start).unwrap(), parse_date(end).unwrap(), None, false)
    }

    #[test]
    fn test_consecutive_entries_same_day() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "2013-04-24 08:30: arrived**\n\
             2013-04-24 11:30: project1\n\
             2013-04-24 12:15: project2\n",
        );

        let intervals = parser("24/4/2013", "25/4/2013").parse(&path).unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].client, "project1");
        assert_eq!(intervals[0].duration, Duration::hours(3));
        assert_eq!(intervals[1].client, "project2");
        assert_eq!(intervals[1].duration, Duration::minutes(45));
    }

    #[test]
    fn test_day_boundary_resets_the_clock() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "2013-04-24 22:00: project1\n\
             2013-04-25 01:00: project1\n",
        );

        let intervals = parser("24/4/2013", "26/4/2013").parse(&path).unwrap();
        assert_eq!(intervals.len(), 2);
        // The first entry of a run has no same-day anchor
        assert_eq!(intervals[0].duration, Duration::zero());
        // Neither does the first entry of a new day, whatever the gap
        assert_eq!(intervals[1].duration, Duration::zero());
    }

    #[test]
    fn test_slack_entries_are_excluded_but_anchor() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "2013-04-24 08:30: arrived**\n\
             2013-04-24 11:30: project1\n\
             2013-04-24 14:00: lunch**\n\
             2013-04-24 17:00: project1\n",
        );

        let intervals = parser("24/4/2013", "25/4/2013").parse(&path).unwrap();
        assert_eq!(intervals.len(), 2);
        assert!(intervals.iter().all(|interval| !interval.client.ends_with("**")));
        // 08:30 -> 11:30, then 14:00 -> 17:00; the slack slots are dropped
        assert_eq!(intervals[0].duration, Duration::hours(3));
        assert_eq!(intervals[1].duration, Duration::hours(3));
    }

    #[test]
    fn test_task_lines_attach_to_the_next_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "2013-04-24 08:30: arrived**\n\
             * [X] Task completed\n\
             * [.] Task in progress\n\
             * [X] Task completed\n\
             2013-04-24 11:30: project1\n\
             2013-04-24 12:00: project2\n",
        );

        let intervals = parser("24/4/2013", "25/4/2013").parse(&path).unwrap();
        assert_eq!(intervals.len(), 2);
        // Duplicates collapse; the set belongs to the entry that ends the slot
        let tasks: Vec<&str> = intervals[0].tasks.iter().map(String::as_str).collect();
        assert_eq!(tasks, vec!["* [.] Task in progress", "* [X] Task completed"]);
        // Pending tasks are cleared once attached
        assert!(intervals[1].tasks.is_empty());
    }

    #[test]
    fn test_task_marker_stripping() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "* [X] Task completed\n\
             2013-04-24 11:30: project1\n",
        );

        let stripping = LogParser::new(parse_date("24/4/2013").unwrap(), parse_date("25/4/2013").unwrap(), None, true);
        let intervals = stripping.parse(&path).unwrap();
        assert_eq!(intervals.len(), 1);
        let tasks: Vec<&str> = intervals[0].tasks.iter().map(String::as_str).collect();
        assert_eq!(tasks, vec![" Task completed"]);
    }

    #[test]
    fn test_noise_lines_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "just a stray note\n\
             \n\
             2013-99-99 11:30: broken timestamp\n\
             -- [X] not a task marker\n\
             2013-04-24 08:30: arrived**\n\
             2013-04-24 11:30: project1\n",
        );

        let intervals = parser("24/4/2013", "25/4/2013").parse(&path).unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].client, "project1");
        assert!(intervals[0].tasks.is_empty());
        assert_eq!(intervals[0].duration, Duration::hours(3));
    }

    #[test]
    fn test_client_filter_matches_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "2013-04-24 08:30: arrived**\n\
             2013-04-24 11:30: project1\n\
             2013-04-24 12:00: project10\n\
             2013-04-24 13:00: project1\n",
        );

        let filtered = LogParser::new(
            parse_date("24/4/2013").unwrap(),
            parse_date("25/4/2013").unwrap(),
            Some("project1".to_string()),
            false,
        );
        let intervals = filtered.parse(&path).unwrap();
        assert_eq!(intervals.len(), 2);
        assert!(intervals.iter().all(|interval| interval.client == "project1"));
        // The filtered-out entry still anchors the timeline
        assert_eq!(intervals[1].duration, Duration::hours(1));
    }

    #[test]
    fn test_out_of_range_entries_anchor_and_clear_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "* [X] Stale note\n\
             2013-04-23 09:00: project1\n\
             2013-04-24 08:30: arrived**\n\
             2013-04-24 11:30: project1\n",
        );

        let intervals = parser("24/4/2013", "25/4/2013").parse(&path).unwrap();
        assert_eq!(intervals.len(), 1);
        // The note attached to the out-of-range 23/4 entry, not to this one
        assert!(intervals[0].tasks.is_empty());
        assert_eq!(intervals[0].duration, Duration::hours(3));
    }

    #[test]
    fn test_out_of_range_entry_becomes_the_anchor() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "2013-04-24 08:00: project1\n\
             2013-04-24 10:00: project2\n\
             2013-04-24 14:00: project1\n",
        );

        // Range starts mid-day: the 10:00 entry is rejected but still anchors,
        // so the 14:00 slot measures from the nearest timeline event
        let mid_day = LogParser::new(
            parse_date("24/4/2013").unwrap() + Duration::hours(12),
            parse_date("25/4/2013").unwrap(),
            None,
            false,
        );
        let intervals = mid_day.parse(&path).unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].client, "project1");
        assert_eq!(intervals[0].duration, Duration::hours(4));
    }

    #[test]
    fn test_missing_source_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.txt");
        let result = parser("24/4/2013", "25/4/2013").parse(&path);
        assert!(matches!(result, Err(TimelogError::SourceUnavailable { .. })));
    }
}
