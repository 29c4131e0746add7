use super::Session;
use crate::libs::messages::Message;
use crate::libs::notification::Severity;
use crate::libs::store::TaskId;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task ID as shown by `list`
    id: TaskId,
}

pub fn cmd(session: &mut Session, args: ToggleArgs) -> Result<()> {
    let name = session.task(args.id)?.name().to_string();
    let message = if session.store.toggle(args.id)? {
        Message::TaskCompleted(name)
    } else {
        Message::TaskReopened(name)
    };

    session.notify(message, Severity::Info);
    session.note_unsaved();
    Ok(())
}
