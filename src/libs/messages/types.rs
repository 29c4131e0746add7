#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(u64, String),              // id, name
    TaskUpdated(String),                 // name
    TaskDeleted(String),                 // name
    TaskCompleted(String),               // name
    TaskReopened(String),                // name
    TaskNotFoundWithId(u64),             // id
    TaskPriorityChanged(String, String), // name, priority
    TaskDeleteCancelled,
    ConfirmDeleteTask(String), // name
    TaskEditPreview,
    NoChangesDetected,
    EditingTask(String), // name

    // === TAG MESSAGES ===
    TagAdded(String, String),          // tag, task name
    TagAlreadyPresent(String, String), // tag, task name
    TagRemoved(String, String),        // tag, task name
    TagNotPresent(String, String),     // tag, task name

    // === LIST MESSAGES ===
    CategoryTabs(String),         // rendered tab strip
    NoTasksInCategory(String),    // category label
    PageIndicator(usize, usize),  // current, total
    PageOutOfRange(usize, usize), // requested, total

    // === STORAGE MESSAGES ===
    TasksLoaded(usize),
    TasksFileCreated(String),   // path
    TasksFileCorrupted(String), // path
    BackupCreated(String),      // path
    BackupFailed,
    AutoSaveDisabled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),      // path
    ConfigExists(String),     // path
    ConfigParseError(String), // path
    ConfigFallbackToDefault,
    ConfigWizardHeader,

    // === VALIDATION MESSAGES ===
    PageSizeTooSmall,

    // === PROMPTS ===
    PromptTaskName,
    PromptTaskDueDate,
    PromptDataFile,
    PromptAutoSave,
    PromptPageSize,
}
