//! Configuration initialization command.
//!
//! Runs the interactive setup wizard, or with `--default` writes the default
//! configuration if none exists yet.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write the default configuration without prompting
    ///
    /// An existing configuration file is left untouched.
    #[arg(short, long)]
    default: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let path = Config::path()?;

    if init_args.default {
        if path.exists() {
            msg_info!(Message::ConfigExists(path.display().to_string()));
            return Ok(());
        }
        Config::default().save_to(&path)?;
    } else {
        Config::init()?.save_to(&path)?;
    }

    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}
