#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::shared::DomainError;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_add_activity() {
        let mut log = ActivityLog::new();

        log.add_activity(d(2025, 7, 14), "Workout for 30 minutes").unwrap();
        log.add_activity(d(2025, 7, 14), "Grade assignments").unwrap();

        assert_eq!(
            log.activities_on(d(2025, 7, 14)),
            &["Workout for 30 minutes", "Grade assignments"]
        );
        assert_eq!(log.total_activity_days(), 1);
    }

    #[test]
    fn test_add_activity_trims_whitespace() {
        let mut log = ActivityLog::new();

        log.add_activity(d(2025, 7, 14), "  Lecture prep  ").unwrap();

        assert_eq!(log.activities_on(d(2025, 7, 14)), &["Lecture prep"]);
    }

    #[test]
    fn test_add_empty_activity_fails() {
        let mut log = ActivityLog::new();

        let result = log.add_activity(d(2025, 7, 14), "   ");

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(log.is_empty());
    }

    #[test]
    fn test_activity_dates_sorted_ascending() {
        let mut log = ActivityLog::new();
        log.add_activity(d(2025, 7, 16), "c").unwrap();
        log.add_activity(d(2025, 7, 10), "a").unwrap();
        log.add_activity(d(2025, 7, 14), "b").unwrap();

        assert_eq!(
            log.activity_dates(),
            vec![d(2025, 7, 10), d(2025, 7, 14), d(2025, 7, 16)]
        );
    }

    #[test]
    fn test_remove_activity_drops_emptied_date() {
        let mut log = ActivityLog::new();
        log.add_activity(d(2025, 7, 14), "only one").unwrap();

        log.remove_activity(d(2025, 7, 14), 0).unwrap();

        assert!(log.activity_dates().is_empty());
        assert!(log.activities_on(d(2025, 7, 14)).is_empty());
    }

    #[test]
    fn test_remove_activity_unknown_date_fails() {
        let mut log = ActivityLog::new();

        let result = log.remove_activity(d(2025, 7, 14), 0);

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_remove_activity_out_of_range_fails() {
        let mut log = ActivityLog::new();
        log.add_activity(d(2025, 7, 14), "a").unwrap();

        let result = log.remove_activity(d(2025, 7, 14), 3);

        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert_eq!(log.activities_on(d(2025, 7, 14)), &["a"]);
    }

    #[test]
    fn test_empty_list_entries_are_not_activity_dates() {
        // A hand-edited snapshot can contain a date mapped to an empty list;
        // it must behave exactly like an absent date.
        let json = r#"{"entries":{"2025-07-14":[],"2025-07-15":["Seminar"]}}"#;
        let log: ActivityLog = serde_json::from_str(json).unwrap();

        assert_eq!(log.activity_dates(), vec![d(2025, 7, 15)]);
        assert_eq!(log.total_activity_days(), 1);
        assert!(!log.is_empty());
    }
}
