//! Past / present / future views over the task list.
//!
//! A view is a pure function of the task list and today's date. Within a view
//! tasks are ordered by priority rank and then by due date, ascending. Since
//! LOW has the smallest rank, low priority work is listed before high
//! priority work on the same day. That is the established ordering of the
//! tool and is kept as is.

use super::task::Task;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Past,
    Present,
    Future,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Past, Category::Present, Category::Future];

    pub fn label(self) -> &'static str {
        match self {
            Category::Past => "PAST",
            Category::Present => "PRESENT",
            Category::Future => "FUTURE",
        }
    }

    /// The tab to the right, wrapping around.
    pub fn next(self) -> Category {
        match self {
            Category::Past => Category::Present,
            Category::Present => Category::Future,
            Category::Future => Category::Past,
        }
    }

    /// The tab to the left, wrapping around.
    pub fn prev(self) -> Category {
        match self {
            Category::Past => Category::Future,
            Category::Present => Category::Past,
            Category::Future => Category::Present,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "past" | "overdue" => Ok(Category::Past),
            "present" | "today" => Ok(Category::Present),
            "future" | "upcoming" => Ok(Category::Future),
            other => Err(format!("unknown category '{}', expected past, present or future", other)),
        }
    }
}

/// Tasks from `entries` that fall in `category`, in view order.
///
/// The sort is stable, so tasks with equal priority and date keep the order
/// in which they appear in `entries`.
pub fn tasks_in<'a, K, I>(entries: I, category: Category, today: NaiveDate) -> Vec<(K, &'a Task)>
where
    I: IntoIterator<Item = (K, &'a Task)>,
{
    let mut view: Vec<(K, &Task)> = entries.into_iter().filter(|(_, task)| task.classify(today) == category).collect();
    view.sort_by(|(_, a), (_, b)| a.priority().rank().cmp(&b.priority().rank()).then_with(|| a.due_date().cmp(b.due_date())));
    view
}

/// Number of tasks in each category, in [`Category::ALL`] order.
pub fn counts<'a, I>(tasks: I, today: NaiveDate) -> [usize; 3]
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut counts = [0; 3];
    for task in tasks {
        let slot = match task.classify(today) {
            Category::Past => 0,
            Category::Present => 1,
            Category::Future => 2,
        };
        counts[slot] += 1;
    }
    counts
}
