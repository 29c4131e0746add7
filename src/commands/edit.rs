use super::Session;
use crate::libs::dates::{format_date, parse_due};
use crate::libs::messages::Message;
use crate::libs::notification::Severity;
use crate::libs::store::TaskId;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID as shown by `list`
    id: TaskId,

    /// New name
    #[arg(short, long)]
    name: Option<String>,

    /// New due date: YYYY-MM-DD, today, tomorrow, +3, +1w or +1m
    #[arg(short, long)]
    due: Option<String>,
}

pub fn cmd(session: &mut Session, args: EditArgs) -> Result<()> {
    let task = session.task(args.id)?;
    let (old_name, old_due) = (task.name().to_string(), task.due_date().to_string());

    // Without flags, prompt for both fields with the current values filled in
    let (name, due) = if args.name.is_none() && args.due.is_none() {
        msg_print!(Message::EditingTask(old_name.clone()), true);
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName.to_string())
            .default(old_name.clone())
            .interact_text()?;
        let due: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDueDate.to_string())
            .default(old_due.clone())
            .interact_text()?;
        (name, due)
    } else {
        (args.name.unwrap_or_else(|| old_name.clone()), args.due.unwrap_or_else(|| old_due.clone()))
    };

    let due = format_date(parse_due(&due, session.store.today())?);
    if name.trim() == old_name && due == old_due {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let edited = session.store.edit(args.id, &name, &due)?;
    let new_name = edited.name().to_string();

    msg_print!(Message::TaskEditPreview);
    View::tasks(&[(args.id, edited)]);

    session.notify(Message::TaskUpdated(new_name), Severity::Success);
    session.note_unsaved();
    Ok(())
}
