use super::Session;
use crate::libs::dates::{format_date, parse_due};
use crate::libs::messages::Message;
use crate::libs::notification::Severity;
use crate::libs::task::{Priority, Task};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name
    #[arg(required = true)]
    name: String,

    /// Due date: YYYY-MM-DD, today, tomorrow, +3, +1w or +1m
    #[arg(short, long, default_value = "today")]
    due: String,

    /// low, medium or high
    #[arg(short, long, default_value = "medium")]
    priority: Priority,

    /// Tag to attach, may be repeated
    #[arg(short, long = "tag")]
    tags: Vec<String>,
}

pub fn cmd(session: &mut Session, args: AddArgs) -> Result<()> {
    let due = parse_due(&args.due, session.store.today())?;
    let task = Task::new(&args.name, &format_date(due))?
        .with_priority(args.priority)
        .with_tags(&args.tags)?;

    let name = task.name().to_string();
    let id = session.store.add(task)?;

    session.notify(Message::TaskAdded(id.get(), name), Severity::Success);
    session.note_unsaved();
    Ok(())
}
