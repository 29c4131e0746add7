pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod priority;
pub mod tag;
pub mod toggle;

use crate::libs::clock::{SharedClock, SystemClock};
use crate::libs::config::Config;
use crate::libs::error::StoreError;
use crate::libs::messages::{self, Message};
use crate::libs::notification::{NotificationLog, Severity};
use crate::libs::store::{TaskId, TaskStore};
use crate::libs::task::Task;
use crate::{msg_error_anyhow, msg_info, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks by due date category")]
    List(list::ListArgs),
    #[command(about = "Change the name or due date of a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Mark a task done, or open again")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Set the priority of a task")]
    Priority(priority::PriorityArgs),
    #[command(about = "Add or remove task tags")]
    Tag(tag::TagArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        let command = match cli.command {
            Commands::Init(args) => return init::cmd(args),
            command => command,
        };

        let config = match Config::read() {
            Ok(config) => config,
            Err(e) => {
                msg_warning!(format!("{:#}", e));
                msg_info!(Message::ConfigFallbackToDefault);
                Config::default()
            }
        };

        let mut session = Session::start(config, SystemClock::shared())?;
        let result = match command {
            Commands::Add(args) => add::cmd(&mut session, args),
            Commands::List(args) => list::cmd(&mut session, args),
            Commands::Edit(args) => edit::cmd(&mut session, args),
            Commands::Delete(args) => delete::cmd(&mut session, args),
            Commands::Toggle(args) => toggle::cmd(&mut session, args),
            Commands::Priority(args) => priority::cmd(&mut session, args),
            Commands::Tag(args) => tag::cmd(&mut session, args),
            Commands::Init(_) => Ok(()),
        };
        session.finish();
        result
    }
}

/// Everything a command needs: settings, the loaded task list and the
/// notification log that is flushed to the terminal when the command ends.
pub struct Session {
    pub config: Config,
    pub store: TaskStore,
    pub notifications: NotificationLog,
}

impl Session {
    /// Opens and loads the configured task file.
    ///
    /// A corrupted or unreadable file does not stop the session; the problem
    /// is reported through the notification log and the list starts empty.
    pub fn start(config: Config, clock: SharedClock) -> Result<Self> {
        let mut store = TaskStore::from_config(&config, clock.clone())?;
        let mut notifications = NotificationLog::new(clock);
        let existed = store.path().exists();

        match store.load() {
            Ok(count) if existed => tracing::debug!("{}", Message::TasksLoaded(count)),
            Ok(_) => {
                if store.auto_save() {
                    notifications.post(Message::TasksFileCreated(store.path().display().to_string()).to_string(), Severity::Info);
                }
            }
            Err(StoreError::Corrupt { path, backup, .. }) => {
                notifications.post(Message::TasksFileCorrupted(path.display().to_string()).to_string(), Severity::Error);
                match backup {
                    Some(backup) => notifications.post(Message::BackupCreated(backup.display().to_string()).to_string(), Severity::Info),
                    None => notifications.post(Message::BackupFailed.to_string(), Severity::Warning),
                }
            }
            Err(e) => notifications.post(e.to_string(), Severity::Error),
        }

        Ok(Session { config, store, notifications })
    }

    pub fn notify(&mut self, message: Message, severity: Severity) {
        self.notifications.post(message.to_string(), severity);
    }

    /// Looks a task up or fails with a user-facing message.
    pub fn task(&self, id: TaskId) -> Result<&Task> {
        self.store.get(id).ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(id.get())))
    }

    /// Posts a reminder after a mutation that was not written.
    pub fn note_unsaved(&mut self) {
        if !self.store.auto_save() {
            self.notify(Message::AutoSaveDisabled, Severity::Warning);
        }
    }

    /// Drops expired notifications and prints the rest.
    pub fn finish(mut self) {
        self.notifications.sweep_now();
        for notification in self.notifications.drain() {
            messages::show(&notification);
        }
    }
}
