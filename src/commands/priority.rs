use super::Session;
use crate::libs::messages::Message;
use crate::libs::notification::Severity;
use crate::libs::store::TaskId;
use crate::libs::task::Priority;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PriorityArgs {
    /// Task ID as shown by `list`
    id: TaskId,

    /// low, medium or high
    priority: Priority,
}

pub fn cmd(session: &mut Session, args: PriorityArgs) -> Result<()> {
    let name = session.task(args.id)?.name().to_string();
    session.store.set_priority(args.id, args.priority)?;

    session.notify(Message::TaskPriorityChanged(name, args.priority.to_string()), Severity::Success);
    session.note_unsaved();
    Ok(())
}
