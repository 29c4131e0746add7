//! Core library modules for duelist.
//!
//! - **Task model**: [`task`] (validated entity), [`category`] (past, present
//!   and future views), [`dates`] (due date arithmetic)
//! - **Persistence**: [`store`] (JSON backed task list), [`config`],
//!   [`data_storage`]
//! - **Feedback**: [`notification`] (expiring notices), [`messages`]
//!   (user-facing text and output macros), [`view`] (tables)
//! - **Plumbing**: [`clock`], [`error`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use duelist::libs::category::Category;
//! use duelist::libs::clock::SystemClock;
//! use duelist::libs::store::TaskStore;
//! use duelist::libs::task::Task;
//!
//! let mut store = TaskStore::open("tasks.json", true, SystemClock::shared());
//! store.load()?;
//! store.add(Task::new("Implement feature", "2024-05-01")?)?;
//! for (id, task) in store.tasks_in(Category::Present) {
//!     println!("{} {}", id, task.name());
//! }
//! # Ok::<(), duelist::libs::error::StoreError>(())
//! ```

pub mod category;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod dates;
pub mod error;
pub mod messages;
pub mod notification;
pub mod store;
pub mod task;
pub mod view;
