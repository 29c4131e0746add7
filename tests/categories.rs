#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use duelist::libs::category::{self, Category};
    use duelist::libs::task::{Priority, Task};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn task(name: &str, due: &str, priority: Priority) -> Task {
        Task::new(name, due).unwrap().with_priority(priority)
    }

    fn names<K>(view: &[(K, &Task)]) -> Vec<String> {
        view.iter().map(|(_, task)| task.name().to_string()).collect()
    }

    #[test]
    fn test_view_sorts_by_rank_then_date() {
        let tasks = vec![
            task("high", "2024-01-01", Priority::High),
            task("low", "2024-01-01", Priority::Low),
            task("medium later", "2024-01-02", Priority::Medium),
        ];
        let before = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let view = category::tasks_in(tasks.iter().enumerate(), Category::Future, before);
        assert_eq!(names(&view), vec!["low", "high", "medium later"]);
    }

    #[test]
    fn test_view_is_stable_for_ties() {
        let tasks = vec![
            task("first", "2024-01-01", Priority::Medium),
            task("second", "2024-01-01", Priority::Medium),
            task("third", "2024-01-01", Priority::Medium),
        ];
        let view = category::tasks_in(tasks.iter().enumerate(), Category::Present, today());
        assert_eq!(names(&view), vec!["first", "second", "third"]);
        let keys: Vec<usize> = view.iter().map(|(index, _)| *index).collect();
        assert_eq!(keys, vec![0, 1, 2]);
    }

    #[test]
    fn test_date_orders_within_a_priority() {
        let tasks = vec![
            task("c", "2023-12-30", Priority::High),
            task("a", "2023-11-01", Priority::High),
            task("b", "2023-12-01", Priority::High),
        ];
        let view = category::tasks_in(tasks.iter().enumerate(), Category::Past, today());
        assert_eq!(names(&view), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_every_task_lands_in_exactly_one_view() {
        let tasks = vec![
            task("yesterday", "2023-12-31", Priority::Low),
            task("today", "2024-01-01", Priority::High),
            task("tomorrow", "2024-01-02", Priority::Medium),
            task("next year", "2025-01-01", Priority::Low),
        ];
        let total: usize = Category::ALL
            .iter()
            .map(|c| category::tasks_in(tasks.iter().enumerate(), *c, today()).len())
            .sum();
        assert_eq!(total, tasks.len());
        assert_eq!(category::counts(tasks.iter(), today()), [1, 1, 2]);
    }

    #[test]
    fn test_completed_tasks_stay_in_their_view() {
        let mut done = task("done", "2023-12-01", Priority::Medium);
        done.toggle_completion();
        let tasks = vec![done];
        let view = category::tasks_in(tasks.iter().enumerate(), Category::Past, today());
        assert_eq!(names(&view), vec!["done"]);
    }

    #[test]
    fn test_empty_view() {
        let tasks: Vec<Task> = Vec::new();
        assert!(category::tasks_in(tasks.iter().enumerate(), Category::Present, today()).is_empty());
        assert_eq!(category::counts(tasks.iter(), today()), [0, 0, 0]);
    }

    #[test]
    fn test_tab_navigation_wraps() {
        assert_eq!(Category::Present.next(), Category::Future);
        assert_eq!(Category::Future.next(), Category::Past);
        assert_eq!(Category::Past.prev(), Category::Future);
        for category in Category::ALL {
            assert_eq!(category.next().prev(), category);
        }
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("past".parse::<Category>().unwrap(), Category::Past);
        assert_eq!("Today".parse::<Category>().unwrap(), Category::Present);
        assert_eq!("upcoming".parse::<Category>().unwrap(), Category::Future);
        assert!("someday".parse::<Category>().is_err());
        assert_eq!(Category::Present.to_string(), "PRESENT");
    }
}
