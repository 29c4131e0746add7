use super::Session;
use crate::libs::messages::Message;
use crate::libs::notification::Severity;
use crate::libs::store::TaskId;
use crate::msg_info;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID as shown by `list`
    id: TaskId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(session: &mut Session, args: DeleteArgs) -> Result<()> {
    let name = session.task(args.id)?.name().to_string();

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::TaskDeleteCancelled);
            return Ok(());
        }
    }

    session.store.remove(args.id)?;
    session.notify(Message::TaskDeleted(name), Severity::Info);
    session.note_unsaved();
    Ok(())
}
