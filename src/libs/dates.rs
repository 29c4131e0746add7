//! Due date arithmetic and input parsing.
//!
//! Besides plain `YYYY-MM-DD`, due dates may be entered relative to today:
//!
//! | input              | meaning                   |
//! |--------------------|---------------------------|
//! | `today`, `t`       | today                     |
//! | `tomorrow`         | today + 1 day             |
//! | `yesterday`        | today - 1 day             |
//! | `+3`, `-2`, `+3d`  | days from today           |
//! | `+1w`, `-2w`       | weeks from today          |
//! | `+1m`, `-1m`       | calendar months from today |
//!
//! Month steps keep the day of month where possible and otherwise land on the
//! last day of the target month, so `2024-01-31` plus one month is
//! `2024-02-29`.

use super::error::ValidationError;
use super::task::{parse_date, DATE_FORMAT};
use chrono::{Duration, Months, NaiveDate};

pub fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

pub fn shift_weeks(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    shift_days(date, weeks.checked_mul(7)?)
}

pub fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let step = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    }
}

pub fn add_one_month(date: NaiveDate) -> Option<NaiveDate> {
    shift_months(date, 1)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Resolves user input to a due date.
pub fn parse_due(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(input.to_string());
    let text = input.trim().to_ascii_lowercase();

    match text.as_str() {
        "today" | "t" => return Ok(today),
        "tomorrow" => return shift_days(today, 1).ok_or_else(invalid),
        "yesterday" => return shift_days(today, -1).ok_or_else(invalid),
        _ => {}
    }

    let sign = match text.chars().next() {
        Some('+') => 1,
        Some('-') => -1,
        _ => return parse_date(input.trim()),
    };

    let body = &text[1..];
    let (digits, unit) = match body.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => (&body[..body.len() - 1], c),
        _ => (body, 'd'),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let amount: i64 = digits.parse().map_err(|_| invalid())?;
    let amount = sign * amount;

    let shifted = match unit {
        'd' => shift_days(today, amount),
        'w' => shift_weeks(today, amount),
        'm' => shift_months(today, amount),
        _ => None,
    };
    shifted.ok_or_else(invalid)
}
