//! Display implementation for duelist messages.
//!
//! Every user-facing sentence lives here, in one `match`, so wording stays
//! consistent across commands and the rest of the code only deals in typed
//! [`Message`] values.
//!
//! ```rust
//! use duelist::libs::messages::Message;
//!
//! let message = Message::TaskAdded(3, "Water plants".to_string());
//! assert_eq!(message.to_string(), "Added task #3: Water plants");
//! ```

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id, name) => format!("Added task #{}: {}", id, name),
            Message::TaskUpdated(name) => format!("Updated task: {}", name),
            Message::TaskDeleted(name) => format!("Deleted task: {}", name),
            Message::TaskCompleted(name) => format!("Task completed: {}", name),
            Message::TaskReopened(name) => format!("Task reopened: {}", name),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskPriorityChanged(name, priority) => format!("Priority of '{}' set to {}", name, priority),
            Message::TaskDeleteCancelled => "Deletion cancelled.".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}'?", name),
            Message::TaskEditPreview => "Task after editing:".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::EditingTask(name) => format!("Editing task: {}", name),

            // === TAG MESSAGES ===
            Message::TagAdded(tag, name) => format!("Tagged '{}' with #{}", name, tag),
            Message::TagAlreadyPresent(tag, name) => format!("'{}' is already tagged #{}", name, tag),
            Message::TagRemoved(tag, name) => format!("Removed #{} from '{}'", tag, name),
            Message::TagNotPresent(tag, name) => format!("'{}' has no tag #{}", name, tag),

            // === LIST MESSAGES ===
            Message::CategoryTabs(tabs) => tabs.clone(),
            Message::NoTasksInCategory(category) => format!("No {} tasks.", category.to_lowercase()),
            Message::PageIndicator(current, total) => format!("Page {}/{}", current, total),
            Message::PageOutOfRange(requested, total) => format!("Page {} does not exist, there are {} page(s).", requested, total),

            // === STORAGE MESSAGES ===
            Message::TasksLoaded(count) => format!("Loaded {} tasks", count),
            Message::TasksFileCreated(path) => format!("Created tasks file at {}", path),
            Message::TasksFileCorrupted(path) => format!("Tasks file {} is corrupted, starting with an empty list", path),
            Message::BackupCreated(path) => format!("Created backup at {}", path),
            Message::BackupFailed => "Could not create a backup of the corrupted tasks file".to_string(),
            Message::AutoSaveDisabled => "Auto-save is disabled, changes were not written to disk".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigExists(path) => format!("Configuration already exists at {}", path),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigFallbackToDefault => "Using default configuration".to_string(),
            Message::ConfigWizardHeader => "Configure duelist".to_string(),

            // === VALIDATION MESSAGES ===
            Message::PageSizeTooSmall => "Page size must be at least 1".to_string(),

            // === PROMPTS ===
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD, today, +1, +1w, +1m)".to_string(),
            Message::PromptDataFile => "Tasks file".to_string(),
            Message::PromptAutoSave => "Save after every change?".to_string(),
            Message::PromptPageSize => "Tasks per page".to_string(),
        };
        write!(f, "{}", s)
    }
}
