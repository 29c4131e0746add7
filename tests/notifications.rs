#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use duelist::libs::clock::{Clock, FixedClock};
    use duelist::libs::notification::{NotificationLog, Severity, DEFAULT_DURATION_SECS};
    use std::sync::Arc;

    fn setup() -> (Arc<FixedClock>, NotificationLog) {
        let clock = Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        let log = NotificationLog::new(clock.clone());
        (clock, log)
    }

    #[test]
    fn test_post_uses_default_duration() {
        let (clock, mut log) = setup();
        log.post("Added task", Severity::Success);

        let entry = log.iter().next().unwrap();
        assert_eq!(entry.message, "Added task");
        assert_eq!(entry.severity, Severity::Success);
        assert_eq!(entry.created_at, clock.now());
        assert_eq!(entry.duration, Duration::seconds(DEFAULT_DURATION_SECS));
    }

    #[test]
    fn test_sweep_removes_expired_entries() {
        let (clock, mut log) = setup();
        log.post("short", Severity::Info);
        clock.advance(Duration::seconds(2));
        log.post_for("long", Severity::Warning, Duration::seconds(10));

        clock.advance(Duration::milliseconds(1500));
        assert_eq!(log.sweep(clock.now()), 1);
        let messages: Vec<&str> = log.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["long"]);
    }

    #[test]
    fn test_entry_at_exact_duration_is_still_live() {
        let (clock, mut log) = setup();
        log.post("edge", Severity::Info);
        clock.advance(Duration::seconds(DEFAULT_DURATION_SECS));
        assert_eq!(log.sweep_now(), 0);
        clock.advance(Duration::milliseconds(1));
        assert_eq!(log.sweep_now(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn test_remaining_counts_down() {
        let (clock, mut log) = setup();
        log.post_for("wait", Severity::Info, Duration::seconds(5));
        clock.advance(Duration::seconds(2));

        let entry = log.iter().next().unwrap();
        assert_eq!(entry.remaining(clock.now()), 3);
        assert!(!entry.is_expired(clock.now()));
        assert_eq!(entry.remaining(clock.now() + Duration::seconds(60)), 0);
    }

    #[test]
    fn test_visible_limits_oldest_first() {
        let (_clock, mut log) = setup();
        for i in 0..5 {
            log.post(format!("n{}", i), Severity::Info);
        }
        let visible: Vec<&str> = log.visible(3).iter().map(|n| n.message.as_str()).collect();
        assert_eq!(visible, vec!["n0", "n1", "n2"]);
        assert_eq!(log.visible(10).len(), 5);
        assert!(log.visible(0).is_empty());
    }

    #[test]
    fn test_drain_empties_log() {
        let (_clock, mut log) = setup();
        log.post("a", Severity::Error);
        log.post("b", Severity::Info);
        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(log.len(), 0);
    }
}
