//! The task entity.
//!
//! A [`Task`] is a validated value: its name and due date are checked when it
//! is built and every time they change, so a `Task` in hand is always one
//! that can be written to disk and read back. Name and date edits produce a
//! new `Task`; completion, priority and tags change in place because they
//! have no invalid states worth guarding.
//!
//! ## Dates
//!
//! Due dates are kept in the canonical `YYYY-MM-DD` text form. Because the
//! form is zero-padded, comparing two dates as strings gives the same answer
//! as comparing them on the calendar, which is what [`Task::classify`] relies
//! on. Input that names a real date but is not in canonical form (`2024-1-5`)
//! is rejected rather than rewritten.
//!
//! ## Persistence
//!
//! [`TaskRecord`] is the flat shape written to the backing file. Converting a
//! record back into a task runs the full validation again.
//!
//! ```rust
//! use duelist::libs::task::{Priority, Task};
//!
//! let mut task = Task::new("Renew passport", "2024-06-01")?
//!     .with_priority(Priority::High);
//! task.add_tag("admin")?;
//! task.toggle_completion();
//!
//! let record = task.to_record();
//! assert_eq!(Task::from_record(record)?, task);
//! # Ok::<(), duelist::libs::error::ValidationError>(())
//! ```

use super::category::Category;
use super::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on the trimmed task name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// The canonical due date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Task priority.
///
/// The numeric rank drives view ordering and nothing else; how a priority is
/// drawn on screen lives in the view layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort rank. LOW < MEDIUM < HIGH.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    /// Name as written to the backing file.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" | "L" => Ok(Priority::Low),
            "MEDIUM" | "MED" | "M" => Ok(Priority::Medium),
            "HIGH" | "H" => Ok(Priority::High),
            _ => Err(ValidationError::InvalidPriority(s.to_string())),
        }
    }
}

/// On-disk shape of a task.
///
/// `priority` and `tags` may be absent in older files and then take their
/// defaults. The other fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: String,
    pub due_date: String,
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    due_date: String,
    completed: bool,
    priority: Priority,
    tags: Vec<String>,
}

impl Task {
    /// Builds an open, medium priority task with no tags.
    pub fn new(name: &str, due_date: &str) -> Result<Self, ValidationError> {
        Ok(Task {
            name: validate_name(name)?,
            due_date: validate_due_date(due_date)?,
            completed: false,
            priority: Priority::default(),
            tags: Vec::new(),
        })
    }

    /// Builds a task with every field given.
    ///
    /// Duplicate tags are dropped, keeping the first occurrence.
    pub fn construct(name: &str, due_date: &str, completed: bool, priority: Priority, tags: &[String]) -> Result<Self, ValidationError> {
        let mut task = Task::new(name, due_date)?;
        task.completed = completed;
        task.priority = priority;
        for tag in tags {
            task.add_tag(tag)?;
        }
        Ok(task)
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.add_tag(tag.as_ref())?;
        }
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Due date in canonical `YYYY-MM-DD` form.
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag.trim())
    }

    pub fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Adds a tag unless it is already present. Returns whether it was added.
    pub fn add_tag(&mut self, tag: &str) -> Result<bool, ValidationError> {
        let tag = validate_tag(tag)?;
        if self.tags.contains(&tag) {
            return Ok(false);
        }
        self.tags.push(tag);
        Ok(true)
    }

    /// Removes a tag if present. Returns whether it was removed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag.trim());
        self.tags.len() != before
    }

    /// Places the task relative to `today`.
    pub fn classify(&self, today: NaiveDate) -> Category {
        let today = today.format(DATE_FORMAT).to_string();
        match self.due_date.as_str().cmp(today.as_str()) {
            std::cmp::Ordering::Less => Category::Past,
            std::cmp::Ordering::Equal => Category::Present,
            std::cmp::Ordering::Greater => Category::Future,
        }
    }

    /// Returns a copy with a new name and due date, keeping completion,
    /// priority and tags.
    pub fn edit(&self, name: &str, due_date: &str) -> Result<Task, ValidationError> {
        Ok(Task {
            name: validate_name(name)?,
            due_date: validate_due_date(due_date)?,
            completed: self.completed,
            priority: self.priority,
            tags: self.tags.clone(),
        })
    }

    pub fn rename(&self, name: &str) -> Result<Task, ValidationError> {
        self.edit(name, &self.due_date)
    }

    pub fn reschedule(&self, due_date: &str) -> Result<Task, ValidationError> {
        self.edit(&self.name, due_date)
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            name: self.name.clone(),
            due_date: self.due_date.clone(),
            completed: self.completed,
            priority: self.priority,
            tags: self.tags.clone(),
        }
    }

    /// Rebuilds a task from its record.
    ///
    /// Loading normalises rather than rejects: the name and tags are trimmed,
    /// blank tags are dropped and repeated tags are kept once, in first
    /// occurrence order. Saving such a task writes the normalised form.
    pub fn from_record(record: TaskRecord) -> Result<Task, ValidationError> {
        let mut task = Task::new(&record.name, &record.due_date)?;
        task.completed = record.completed;
        task.priority = record.priority;
        for tag in record.tags.iter().filter(|tag| !tag.trim().is_empty()) {
            task.add_tag(tag)?;
        }
        Ok(task)
    }

    /// Rebuilds a task from one element of the backing file's array.
    pub fn from_json(value: serde_json::Value) -> Result<Task, ValidationError> {
        let record: TaskRecord = serde_json::from_value(value).map_err(|e| ValidationError::MalformedRecord(e.to_string()))?;
        Task::from_record(record)
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name
            || self.due_date != other.due_date
            || self.completed != other.completed
            || self.priority != other.priority
            || self.tags.len() != other.tags.len()
        {
            return false;
        }
        // Tags are a set; their order does not matter.
        self.tags.iter().all(|tag| other.tags.contains(tag))
    }
}

impl Eq for Task {}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong { len, max: MAX_NAME_LEN });
    }
    Ok(name.to_string())
}

fn validate_due_date(due_date: &str) -> Result<String, ValidationError> {
    parse_date(due_date).map(|date| date.format(DATE_FORMAT).to_string())
}

fn validate_tag(tag: &str) -> Result<String, ValidationError> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(ValidationError::InvalidTag(tag.to_string()));
    }
    Ok(tag.to_string())
}

/// Parses a date in canonical `YYYY-MM-DD` form only.
pub fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(text.to_string());
    if text.len() != 10 {
        return Err(invalid());
    }
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())?;
    // chrono accepts unpadded fields; canonical form must survive a round trip.
    if date.format(DATE_FORMAT).to_string() != text {
        return Err(invalid());
    }
    Ok(date)
}
