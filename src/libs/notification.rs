//! Short-lived feedback messages.
//!
//! The log collects notices such as "Added task" or "Tasks file is corrupted"
//! for the presentation layer to show. Entries expire after their duration;
//! the log never schedules anything itself, the caller runs
//! [`NotificationLog::sweep`] once per render cycle. Nothing here touches the
//! backing file.

use super::clock::SharedClock;
use chrono::{DateTime, Duration, Local};
use std::fmt;

/// How long a notification stays visible unless told otherwise.
pub const DEFAULT_DURATION_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "INFO",
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Local>,
    pub duration: Duration,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now - self.created_at > self.duration
    }

    /// Whole seconds left before expiry, never negative.
    pub fn remaining(&self, now: DateTime<Local>) -> i64 {
        (self.duration - (now - self.created_at)).num_seconds().max(0)
    }
}

pub struct NotificationLog {
    clock: SharedClock,
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new(clock: SharedClock) -> Self {
        Self { clock, entries: Vec::new() }
    }

    pub fn post(&mut self, message: impl Into<String>, severity: Severity) {
        self.post_for(message, severity, Duration::seconds(DEFAULT_DURATION_SECS));
    }

    pub fn post_for(&mut self, message: impl Into<String>, severity: Severity, duration: Duration) {
        let notification = Notification {
            message: message.into(),
            severity,
            created_at: self.clock.now(),
            duration,
        };
        tracing::debug!(severity = %notification.severity, message = %notification.message, "notification posted");
        self.entries.push(notification);
    }

    /// Drops every entry that has expired as of `now`. Returns how many went.
    pub fn sweep(&mut self, now: DateTime<Local>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| !n.is_expired(now));
        before - self.entries.len()
    }

    /// [`sweep`](Self::sweep) against the log's own clock.
    pub fn sweep_now(&mut self) -> usize {
        let now = self.clock.now();
        self.sweep(now)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// The first `n` live entries, oldest first.
    pub fn visible(&self, n: usize) -> &[Notification] {
        &self.entries[..self.entries.len().min(n)]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.entries)
    }
}
