#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use duelist::libs::dates::{add_one_month, format_date, parse_due, shift_days, shift_months, shift_weeks};
    use duelist::libs::error::ValidationError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shift_days_and_weeks() {
        assert_eq!(shift_days(date(2024, 2, 28), 1), Some(date(2024, 2, 29)));
        assert_eq!(shift_days(date(2024, 1, 1), -1), Some(date(2023, 12, 31)));
        assert_eq!(shift_weeks(date(2024, 1, 1), 2), Some(date(2024, 1, 15)));
        assert_eq!(shift_weeks(date(2024, 1, 1), -1), Some(date(2023, 12, 25)));
    }

    #[test]
    fn test_add_one_month_clamps_to_month_end() {
        assert_eq!(add_one_month(date(2024, 1, 31)), Some(date(2024, 2, 29)));
        assert_eq!(add_one_month(date(2023, 1, 31)), Some(date(2023, 2, 28)));
        assert_eq!(add_one_month(date(2024, 3, 31)), Some(date(2024, 4, 30)));
        assert_eq!(add_one_month(date(2024, 5, 15)), Some(date(2024, 6, 15)));
    }

    #[test]
    fn test_add_one_month_rolls_into_next_year() {
        assert_eq!(add_one_month(date(2024, 12, 31)), Some(date(2025, 1, 31)));
        assert_eq!(add_one_month(date(2024, 12, 1)), Some(date(2025, 1, 1)));
    }

    #[test]
    fn test_shift_months_backwards() {
        assert_eq!(shift_months(date(2024, 3, 31), -1), Some(date(2024, 2, 29)));
        assert_eq!(shift_months(date(2024, 1, 15), -2), Some(date(2023, 11, 15)));
    }

    #[test]
    fn test_parse_due_keywords() {
        let today = date(2024, 3, 15);
        assert_eq!(parse_due("today", today).unwrap(), today);
        assert_eq!(parse_due("T", today).unwrap(), today);
        assert_eq!(parse_due("tomorrow", today).unwrap(), date(2024, 3, 16));
        assert_eq!(parse_due(" yesterday ", today).unwrap(), date(2024, 3, 14));
    }

    #[test]
    fn test_parse_due_relative_offsets() {
        let today = date(2024, 1, 31);
        assert_eq!(parse_due("+3", today).unwrap(), date(2024, 2, 3));
        assert_eq!(parse_due("-2d", today).unwrap(), date(2024, 1, 29));
        assert_eq!(parse_due("+1w", today).unwrap(), date(2024, 2, 7));
        assert_eq!(parse_due("+1m", today).unwrap(), date(2024, 2, 29));
        assert_eq!(parse_due("-1M", today).unwrap(), date(2023, 12, 31));
        assert_eq!(parse_due("+0", today).unwrap(), today);
    }

    #[test]
    fn test_parse_due_absolute() {
        let today = date(2024, 3, 15);
        assert_eq!(parse_due("2025-07-04", today).unwrap(), date(2025, 7, 4));
    }

    #[test]
    fn test_parse_due_rejects_garbage() {
        let today = date(2024, 3, 15);
        for bad in ["", "+", "-w", "+1y", "+1.5", "next week", "2024-02-30", "2024-3-1", "+99999999999999999999"] {
            assert!(
                matches!(parse_due(bad, today), Err(ValidationError::InvalidDate(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_format_date_is_canonical() {
        assert_eq!(format_date(date(2024, 1, 5)), "2024-01-05");
    }
}
