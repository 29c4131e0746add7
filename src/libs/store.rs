//! In-memory task list backed by a JSON file.
//!
//! [`TaskStore`] owns the backing file and is its only writer. It keeps tasks
//! in the order they were loaded or added and hands out a [`TaskId`] for each
//! one, so callers refer to tasks by identity rather than by their position
//! in whatever view happens to be on screen.
//!
//! ## File handling
//!
//! - A missing file is treated as an empty list and written out immediately.
//! - A file that is not a JSON array of valid task records is copied to
//!   `<file>.bak`, the store continues empty and [`StoreError::Corrupt`] is
//!   returned so the caller can tell the user.
//! - Writes go to `<file>.tmp` first and are renamed over the target, so the
//!   target is never left half written.
//!
//! With auto-save disabled, [`TaskStore::save`] does nothing and the file is
//! left as it was at load.
//!
//! ```rust,no_run
//! use duelist::libs::clock::SystemClock;
//! use duelist::libs::store::TaskStore;
//! use duelist::libs::task::Task;
//!
//! let mut store = TaskStore::open("tasks.json", true, SystemClock::shared());
//! store.load()?;
//! let id = store.add(Task::new("Water plants", "2024-05-01")?)?;
//! store.toggle(id)?;
//! # Ok::<(), duelist::libs::error::StoreError>(())
//! ```

use super::category::{self, Category};
use super::clock::SharedClock;
use super::config::Config;
use super::error::StoreError;
use super::task::{Priority, Task, TaskRecord};
use chrono::NaiveDate;
use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Session-scoped task handle.
///
/// Assigned in file order on load starting at 1 and never reused while the
/// store lives. Not written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(TaskId)
    }
}

pub struct TaskStore {
    path: PathBuf,
    auto_save: bool,
    clock: SharedClock,
    entries: Vec<(TaskId, Task)>,
    next_id: u64,
}

impl TaskStore {
    /// Creates an empty store for `path`. Nothing is read until [`load`](Self::load).
    pub fn open(path: impl Into<PathBuf>, auto_save: bool, clock: SharedClock) -> Self {
        TaskStore {
            path: path.into(),
            auto_save,
            clock,
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn from_config(config: &Config, clock: SharedClock) -> anyhow::Result<Self> {
        Ok(Self::open(config.data_path()?, config.auto_save, clock))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn auto_save(&self) -> bool {
        self.auto_save
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Replaces the in-memory list with the contents of the backing file.
    ///
    /// Returns the number of tasks loaded. On [`StoreError::Corrupt`] and
    /// [`StoreError::Persistence`] the store is left empty and usable.
    pub fn load(&mut self) -> Result<usize, StoreError> {
        self.entries.clear();

        if !self.path.exists() {
            info!(path = %self.path.display(), "tasks file not found, starting empty");
            self.save()?;
            return Ok(0);
        }

        let bytes = fs::read(&self.path).map_err(|e| StoreError::persistence("read", &self.path, e))?;
        match parse_tasks(&bytes) {
            Ok(tasks) => {
                for task in tasks {
                    self.insert(task);
                }
                info!(count = self.entries.len(), path = %self.path.display(), "loaded tasks");
                Ok(self.entries.len())
            }
            Err(reason) => {
                warn!(path = %self.path.display(), %reason, "tasks file is corrupted");
                let backup = self.back_up();
                Err(StoreError::Corrupt {
                    path: self.path.clone(),
                    backup,
                    reason,
                })
            }
        }
    }

    /// Writes the full task list to the backing file when auto-save is on.
    pub fn save(&self) -> Result<(), StoreError> {
        if !self.auto_save {
            debug!("auto-save disabled, skipping write");
            return Ok(());
        }
        self.write_file()?;
        debug!(count = self.entries.len(), path = %self.path.display(), "saved tasks");
        Ok(())
    }

    fn write_file(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| StoreError::persistence("create directory", dir, e))?;
        }

        let records: Vec<TaskRecord> = self.entries.iter().map(|(_, task)| task.to_record()).collect();
        let tmp = sibling(&self.path, "tmp");

        let written = serde_json::to_vec_pretty(&records)
            .map_err(io::Error::from)
            .and_then(|json| {
                let mut file = File::create(&tmp)?;
                file.write_all(&json)?;
                file.write_all(b"\n")?;
                file.sync_all()
            })
            .map_err(|e| StoreError::persistence("write", &tmp, e));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StoreError::persistence("replace", &self.path, e)
        })
    }

    /// Copies the current backing file to `<file>.bak`.
    fn back_up(&self) -> Option<PathBuf> {
        let backup = sibling(&self.path, "bak");
        match fs::copy(&self.path, &backup) {
            Ok(_) => {
                info!(backup = %backup.display(), "created backup of corrupted tasks file");
                Some(backup)
            }
            Err(e) => {
                warn!(error = %e, "could not back up corrupted tasks file");
                None
            }
        }
    }

    // === Sequence operations (no persistence) ===

    /// Appends a task and returns its new id.
    pub fn insert(&mut self, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, task));
        id
    }

    /// Removes and returns the task with `id`.
    pub fn take(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.entries.remove(index).1)
    }

    /// Puts `task` in place of the task with `id`, returning the old one.
    pub fn swap(&mut self, id: TaskId, task: Task) -> Option<Task> {
        let index = self.position(id)?;
        Some(std::mem::replace(&mut self.entries[index].1, task))
    }

    // === Mutations (persisted) ===

    pub fn add(&mut self, task: Task) -> Result<TaskId, StoreError> {
        info!(name = task.name(), due = task.due_date(), "adding task");
        let id = self.insert(task);
        self.save()?;
        Ok(id)
    }

    pub fn remove(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let task = self.take(id).ok_or(StoreError::NotFound(id))?;
        info!(%id, name = task.name(), "deleted task");
        self.save()?;
        Ok(task)
    }

    pub fn replace(&mut self, id: TaskId, task: Task) -> Result<Task, StoreError> {
        let old = self.swap(id, task).ok_or(StoreError::NotFound(id))?;
        self.save()?;
        Ok(old)
    }

    /// Changes name and due date. The task keeps its id, completion,
    /// priority and tags.
    pub fn edit(&mut self, id: TaskId, name: &str, due_date: &str) -> Result<&Task, StoreError> {
        let edited = self.require(id)?.edit(name, due_date)?;
        let old = self.replace(id, edited)?;
        info!(%id, from = old.name(), "edited task");
        self.require(id)
    }

    /// Flips completion and returns the new state.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let task = self.require_mut(id)?;
        task.toggle_completion();
        let completed = task.is_completed();
        info!(%id, completed, "toggled task");
        self.save()?;
        Ok(completed)
    }

    pub fn set_priority(&mut self, id: TaskId, priority: Priority) -> Result<(), StoreError> {
        self.require_mut(id)?.set_priority(priority);
        self.save()
    }

    /// Returns whether the tag was new.
    pub fn add_tag(&mut self, id: TaskId, tag: &str) -> Result<bool, StoreError> {
        let added = self.require_mut(id)?.add_tag(tag)?;
        if added {
            self.save()?;
        }
        Ok(added)
    }

    /// Returns whether the tag was present.
    pub fn remove_tag(&mut self, id: TaskId, tag: &str) -> Result<bool, StoreError> {
        let removed = self.require_mut(id)?.remove_tag(tag);
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    // === Queries ===

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.entries.iter().find(|(eid, _)| *eid == id).map(|(_, task)| task)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &Task)> {
        self.entries.iter().map(|(id, task)| (*id, task))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sorted view of one category as of the store's clock.
    pub fn tasks_in(&self, category: Category) -> Vec<(TaskId, &Task)> {
        category::tasks_in(self.iter(), category, self.today())
    }

    /// Task counts per category, in [`Category::ALL`] order.
    pub fn counts(&self) -> [usize; 3] {
        category::counts(self.entries.iter().map(|(_, task)| task), self.today())
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.entries.iter().position(|(eid, _)| *eid == id)
    }

    fn require(&self, id: TaskId) -> Result<&Task, StoreError> {
        self.get(id).ok_or(StoreError::NotFound(id))
    }

    fn require_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.entries
            .iter_mut()
            .find(|(eid, _)| *eid == id)
            .map(|(_, task)| task)
            .ok_or(StoreError::NotFound(id))
    }
}

/// Parses the backing file. The error is a human readable reason.
fn parse_tasks(bytes: &[u8]) -> Result<Vec<Task>, String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).map_err(|e| format!("invalid JSON: {}", e))?;
    let serde_json::Value::Array(items) = value else {
        return Err("top-level value is not an array".to_string());
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Task::from_json(item).map_err(|e| format!("record {}: {}", index, e)))
        .collect()
}

/// `tasks.json` + `bak` -> `tasks.json.bak`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_else(|| OsString::from("tasks"));
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
