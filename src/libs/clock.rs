//! Time source abstraction.
//!
//! Everything in the core that needs "today" or "now" asks a [`Clock`]
//! instead of reading the system time directly. The binary uses
//! [`SystemClock`]; tests pin the calendar with [`FixedClock`].
//!
//! ```rust
//! use chrono::NaiveDate;
//! use duelist::libs::clock::{Clock, FixedClock};
//!
//! let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
//! assert_eq!(clock.today().to_string(), "2024-03-01");
//! ```

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use std::sync::{Arc, Mutex};

pub trait Clock: Send + Sync {
    /// Current instant in local time.
    fn now(&self) -> DateTime<Local>;

    /// Current calendar date in local time.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Shared handle used by the store and the notification log.
pub type SharedClock = Arc<dyn Clock>;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn shared() -> SharedClock {
        Arc::new(SystemClock)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now: Mutex::new(now) }
    }

    /// Noon on the given date, which keeps DST transitions out of the way.
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        let now = Local
            .from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&noon));
        Self::new(now)
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }

    pub fn set(&self, to: DateTime<Local>) {
        if let Ok(mut now) = self.now.lock() {
            *now = to;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
