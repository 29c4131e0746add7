//! Error taxonomy of the task core.
//!
//! - [`ValidationError`]: a task field is unacceptable. Recoverable; the
//!   caller re-prompts or rejects the mutation.
//! - [`StoreError::Corrupt`]: the backing file could not be understood. The
//!   store has already backed the file up and continued empty.
//! - [`StoreError::Persistence`]: an I/O failure while reading or writing.
//!   The in-memory task list is left as it was so the caller may retry.
//!
//! None of these are fatal; the presentation layer decides what to do.

use super::store::TaskId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task name cannot be empty")]
    EmptyName,
    #[error("Task name cannot exceed {max} characters (got {len})")]
    NameTooLong { len: usize, max: usize },
    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Unknown priority '{0}'. Use low, medium or high")]
    InvalidPriority(String),
    #[error("Invalid tag '{0}'")]
    InvalidTag(String),
    #[error("Malformed task record: {0}")]
    MalformedRecord(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Tasks file {} is corrupted ({reason})", path.display())]
    Corrupt {
        path: PathBuf,
        /// Where the unreadable file was copied to, if the copy succeeded.
        backup: Option<PathBuf>,
        reason: String,
    },
    #[error("Could not {action} {}: {source}", path.display())]
    Persistence {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Task #{0} not found")]
    NotFound(TaskId),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StoreError {
    pub(crate) fn persistence(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Persistence {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}
