use super::Session;
use crate::libs::category::Category;
use crate::libs::messages::Message;
use crate::libs::view::{paginate, View};
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// past, present or future
    #[arg(short, long, default_value = "present")]
    category: Category,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Show every category, one after another
    #[arg(short, long)]
    all: bool,
}

pub fn cmd(session: &mut Session, args: ListArgs) -> Result<()> {
    let counts = session.store.counts();
    let categories: Vec<Category> = if args.all { Category::ALL.to_vec() } else { vec![args.category] };

    for category in categories {
        msg_print!(Message::CategoryTabs(View::tabs(category, counts)), true);

        let view = session.store.tasks_in(category);
        if view.is_empty() {
            msg_info!(Message::NoTasksInCategory(category.label().to_string()));
            continue;
        }

        let page_size = session.config.page_size.max(1);
        match paginate(&view, args.page, page_size) {
            Some(page) => {
                View::tasks(page.items);
                if page.total > 1 {
                    msg_print!(Message::PageIndicator(page.number, page.total));
                }
            }
            None => {
                let total = view.len().div_ceil(page_size);
                msg_warning!(Message::PageOutOfRange(args.page, total));
            }
        }
    }
    Ok(())
}
