//! # Duelist - due-date task list
//!
//! A command-line utility for keeping personal tasks in a flat JSON file and
//! reviewing them by due date.
//!
//! ## Features
//!
//! - **Validated Tasks**: Names and canonical `YYYY-MM-DD` dates are checked on every change
//! - **Three Views**: Past, present and future, sorted by priority then date
//! - **Safe Storage**: Atomic file replacement, automatic backup of corrupted files
//! - **Tags and Priorities**: Lightweight organisation without a database
//! - **Notifications**: Expiring feedback messages for the presentation layer
//!
//! ## Usage
//!
//! ```rust,no_run
//! use duelist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
