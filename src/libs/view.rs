use super::category::Category;
use super::store::TaskId;
use super::task::{Priority, Task};
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[(TaskId, &Task)]) {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["ID", "", "P", "NAME", "DUE", "TAGS"]);
        for (id, task) in tasks {
            table.add_row(row![
                r->id,
                status_mark(task),
                priority_icon(task.priority()),
                task.name(),
                task.due_date(),
                tag_list(task)
            ]);
        }
        table.printstd();
    }

    /// One line with all three categories, the active one bracketed.
    pub fn tabs(active: Category, counts: [usize; 3]) -> String {
        Category::ALL
            .iter()
            .zip(counts)
            .map(|(category, count)| {
                if *category == active {
                    format!("[{} ({})]", category.label(), count)
                } else {
                    format!(" {} ({}) ", category.label(), count)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

pub fn status_mark(task: &Task) -> &'static str {
    if task.is_completed() {
        "[✓]"
    } else {
        "[ ]"
    }
}

pub fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "⌄",
        Priority::Medium => "⚬",
        Priority::High => "⌃",
    }
}

pub fn tag_list(task: &Task) -> String {
    task.tags().iter().map(|tag| format!("#{}", tag)).collect::<Vec<_>>().join(" ")
}

/// A slice of rows for one page.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based.
    pub number: usize,
    pub total: usize,
}

/// Cuts page `number` (1-based) of `page_size` rows out of `items`.
///
/// An empty list has a single empty page. Returns `None` for a page past the
/// end or a zero page number or size.
pub fn paginate<T>(items: &[T], number: usize, page_size: usize) -> Option<Page<'_, T>> {
    if number == 0 || page_size == 0 {
        return None;
    }
    let total = items.len().div_ceil(page_size).max(1);
    if number > total {
        return None;
    }
    let start = (number - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Some(Page {
        items: &items[start..end],
        number,
        total,
    })
}
