//! Configuration management for duelist.
//!
//! The configuration is a small JSON document kept next to the task data in
//! the platform data directory:
//!
//! ```json
//! {
//!   "data_file": "tasks.json",
//!   "auto_save": true,
//!   "page_size": 10
//! }
//! ```
//!
//! - **`data_file`**: where tasks live. Relative paths are resolved against
//!   the data directory.
//! - **`auto_save`**: write the task file after every change. When off, the
//!   file is only read.
//! - **`page_size`**: rows per page in `list`. Only the presentation layer
//!   reads it.
//!
//! Any field missing from the file takes its default, so a hand-written
//! config only needs the keys it wants to change.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\duelist\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/duelist/config.json`
//! - **Linux**: `~/.local/share/lacodda/duelist/config.json`
//!
//! `DUELIST_HOME` replaces the directory on every platform.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use duelist::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.page_size = 20;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_DATA_FILE: &str = "tasks.json";
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Application settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Backing file for tasks.
    pub data_file: PathBuf,

    /// Persist after every mutation.
    pub auto_save: bool,

    /// Rows per page when listing tasks.
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            auto_save: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Path of the configuration file in the data directory.
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Reads the configuration, falling back to defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    /// Reads the configuration from an explicit location.
    pub fn read_from(path: &Path) -> Result<Config> {
        // If no configuration file exists, run with defaults
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError(path.display().to_string()))?;

        if config.page_size == 0 {
            tracing::warn!("page_size must be at least 1, using {}", DEFAULT_PAGE_SIZE);
            config.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(config)
    }

    /// Saves the configuration to the data directory as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let config_file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Absolute location of the task file.
    ///
    /// A relative `data_file` is taken relative to the data directory.
    pub fn data_path(&self) -> Result<PathBuf> {
        if self.data_file.is_absolute() {
            return Ok(self.data_file.clone());
        }
        Ok(DataStorage::new().get_path(&self.data_file)?)
    }

    /// Runs an interactive setup wizard seeded with the current values.
    ///
    /// The returned configuration is not saved.
    pub fn init() -> Result<Self> {
        // Start from what is on disk so the wizard shows current values
        let current = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigWizardHeader, true);

        let data_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDataFile.to_string())
            .default(current.data_file.display().to_string())
            .interact_text()?;

        let auto_save = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAutoSave.to_string())
            .default(current.auto_save)
            .interact()?;

        let page_size: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPageSize.to_string())
            .default(current.page_size)
            .validate_with(|size: &usize| -> Result<(), String> {
                if *size == 0 {
                    Err(Message::PageSizeTooSmall.to_string())
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        Ok(Config {
            data_file: PathBuf::from(data_file),
            auto_save,
            page_size,
        })
    }
}
