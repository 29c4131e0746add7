use super::Session;
use crate::libs::messages::Message;
use crate::libs::notification::Severity;
use crate::libs::store::TaskId;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    command: TagCommand,
}

#[derive(Debug, Subcommand)]
enum TagCommand {
    /// Attach a tag to a task
    Add {
        /// Task ID
        id: TaskId,
        /// Tag name
        tag: String,
    },
    /// Detach a tag from a task
    Remove {
        /// Task ID
        id: TaskId,
        /// Tag name
        tag: String,
    },
}

pub fn cmd(session: &mut Session, args: TagArgs) -> Result<()> {
    match args.command {
        TagCommand::Add { id, tag } => handle_add(session, id, tag),
        TagCommand::Remove { id, tag } => handle_remove(session, id, tag),
    }
}

fn handle_add(session: &mut Session, id: TaskId, tag: String) -> Result<()> {
    let name = session.task(id)?.name().to_string();
    let tag = tag.trim().to_string();

    if session.store.add_tag(id, &tag)? {
        session.notify(Message::TagAdded(tag, name), Severity::Success);
        session.note_unsaved();
    } else {
        session.notify(Message::TagAlreadyPresent(tag, name), Severity::Info);
    }
    Ok(())
}

fn handle_remove(session: &mut Session, id: TaskId, tag: String) -> Result<()> {
    let name = session.task(id)?.name().to_string();
    let tag = tag.trim().to_string();

    if session.store.remove_tag(id, &tag)? {
        session.notify(Message::TagRemoved(tag, name), Severity::Success);
        session.note_unsaved();
    } else {
        session.notify(Message::TagNotPresent(tag, name), Severity::Info);
    }
    Ok(())
}
