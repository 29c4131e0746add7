#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use duelist::commands::Session;
    use duelist::libs::clock::{FixedClock, SharedClock};
    use duelist::libs::config::Config;
    use duelist::libs::notification::Severity;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
        data_file: PathBuf,
        clock: SharedClock,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let data_file = temp_dir.path().join("tasks.json");
            let clock: SharedClock = Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
            SessionTestContext {
                _temp_dir: temp_dir,
                data_file,
                clock,
            }
        }
    }

    impl SessionTestContext {
        fn config(&self, auto_save: bool) -> Config {
            Config {
                data_file: self.data_file.clone(),
                auto_save,
                ..Config::default()
            }
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_first_start_creates_file(ctx: &mut SessionTestContext) {
        let session = Session::start(ctx.config(true), ctx.clock.clone()).unwrap();
        assert!(ctx.data_file.exists());
        let notices: Vec<_> = session.notifications.iter().collect();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Info);
        assert!(notices[0].message.starts_with("Created tasks file"));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_start_without_auto_save_is_quiet(ctx: &mut SessionTestContext) {
        let session = Session::start(ctx.config(false), ctx.clock.clone()).unwrap();
        assert!(!ctx.data_file.exists());
        assert!(session.notifications.is_empty());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_corrupt_file_is_reported(ctx: &mut SessionTestContext) {
        fs::write(&ctx.data_file, "{{{").unwrap();
        let session = Session::start(ctx.config(true), ctx.clock.clone()).unwrap();

        assert!(session.store.is_empty());
        let severities: Vec<Severity> = session.notifications.iter().map(|n| n.severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Info]);
        assert!(session.notifications.iter().any(|n| n.message.contains("tasks.json.bak")));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_existing_file_loads_silently(ctx: &mut SessionTestContext) {
        fs::write(&ctx.data_file, r#"[{"name": "Stretch", "due_date": "2024-03-15", "completed": false}]"#).unwrap();
        let session = Session::start(ctx.config(true), ctx.clock.clone()).unwrap();
        assert_eq!(session.store.len(), 1);
        assert!(session.notifications.is_empty());
        assert_eq!(session.store.counts(), [0, 1, 0]);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_unsaved_reminder(ctx: &mut SessionTestContext) {
        let mut session = Session::start(ctx.config(false), ctx.clock.clone()).unwrap();
        session.note_unsaved();
        assert_eq!(session.notifications.len(), 1);
        assert_eq!(session.notifications.iter().next().unwrap().severity, Severity::Warning);
    }
}
