//! # Statistics Service
//!
//! Read-only aggregation over a `list_all()` snapshot: completion
//! percentage, priority and category breakdowns, and the overdue count.

use chrono::Local;

use crate::model::Priority;
use crate::store::TodoStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionStats {
    pub total: usize,
    pub completed: usize,
    pub incomplete: usize,
    pub percentage: f64,
}

/// Counts per priority level. Every bucket is always present, zero or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub none: usize,
}

/// Label used for todos without a category in the category breakdown.
pub const UNCATEGORIZED: &str = "Uncategorized";

pub struct StatsService<'a> {
    store: &'a TodoStore,
}

impl<'a> StatsService<'a> {
    pub fn new(store: &'a TodoStore) -> Self {
        Self { store }
    }

    /// Completion counts and percentage. An empty store yields 0.0 percent
    /// rather than a division error.
    pub fn completion_stats(&self) -> CompletionStats {
        let todos = self.store.list_all();
        let total = todos.len();
        let completed = todos.iter().filter(|t| t.completed).count();
        let incomplete = total - completed;
        let percentage = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        CompletionStats {
            total,
            completed,
            incomplete,
            percentage,
        }
    }

    pub fn priority_breakdown(&self) -> PriorityBreakdown {
        let mut breakdown = PriorityBreakdown::default();
        for todo in self.store.list_all() {
            match todo.priority {
                Some(Priority::High) => breakdown.high += 1,
                Some(Priority::Medium) => breakdown.medium += 1,
                Some(Priority::Low) => breakdown.low += 1,
                None => breakdown.none += 1,
            }
        }
        breakdown
    }

    /// Category names with counts, descending by count. Absent categories
    /// pool under [`UNCATEGORIZED`]. Ties keep first-seen (ascending id)
    /// order, via a stable sort over the insertion-ordered accumulation.
    pub fn category_breakdown(&self) -> Vec<(String, usize)> {
        let mut breakdown: Vec<(String, usize)> = Vec::new();
        for todo in self.store.list_all() {
            let name = todo.category.as_deref().unwrap_or(UNCATEGORIZED);
            match breakdown.iter_mut().find(|(existing, _)| existing == name) {
                Some((_, count)) => *count += 1,
                None => breakdown.push((name.to_string(), 1)),
            }
        }
        breakdown.sort_by(|a, b| b.1.cmp(&a.1));
        breakdown
    }

    /// Incomplete todos whose due date is strictly before today. A
    /// completed todo never counts, however overdue.
    pub fn overdue_count(&self) -> usize {
        let today = Local::now().date_naive();
        self.store
            .list_all()
            .iter()
            .filter(|t| !t.completed && t.due_date.is_some_and(|d| d < today))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn completion_stats_on_empty_store() {
        let store = TodoStore::new();
        let stats = StatsService::new(&store).completion_stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.incomplete, 0);
        assert_eq!(stats.percentage, 0.0);
    }

    #[test]
    fn completion_percentage() {
        let mut store = TodoStore::new();
        for i in 0..5 {
            store.add(&format!("Task {i}")).unwrap();
        }
        store.complete(1).unwrap();
        store.complete(2).unwrap();

        let stats = StatsService::new(&store).completion_stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.incomplete, 3);
        assert!((stats.percentage - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn priority_breakdown_has_all_buckets() {
        let mut store = TodoStore::new();
        store.add("A").unwrap();
        store.add("B").unwrap();
        store.add("C").unwrap();
        store.set_priority(1, Some(Priority::High)).unwrap();
        store.set_priority(2, Some(Priority::High)).unwrap();

        let breakdown = StatsService::new(&store).priority_breakdown();
        assert_eq!(breakdown.high, 2);
        assert_eq!(breakdown.medium, 0);
        assert_eq!(breakdown.low, 0);
        assert_eq!(breakdown.none, 1);
    }

    #[test]
    fn category_breakdown_descending_with_first_seen_ties() {
        let mut store = TodoStore::new();
        store.add("A").unwrap();
        store.add("B").unwrap();
        store.add("C").unwrap();
        store.add("D").unwrap();
        store.set_category(1, Some("Personal".into())).unwrap();
        store.set_category(2, Some("Work".into())).unwrap();
        store.set_category(3, Some("Work".into())).unwrap();

        let breakdown = StatsService::new(&store).category_breakdown();
        assert_eq!(breakdown[0], ("Work".to_string(), 2));
        // Personal and Uncategorized tie at 1; Personal was seen first.
        assert_eq!(breakdown[1], ("Personal".to_string(), 1));
        assert_eq!(breakdown[2], (UNCATEGORIZED.to_string(), 1));
    }

    #[test]
    fn overdue_ignores_completed_todos() {
        let today = Local::now().date_naive();
        let mut store = TodoStore::new();
        store.add("Late").unwrap();
        store.add("Late but done").unwrap();
        store.add("Future").unwrap();
        store.add("Dateless").unwrap();
        store
            .set_due_date(1, Some(today - Duration::days(3)))
            .unwrap();
        store
            .set_due_date(2, Some(today - Duration::days(3)))
            .unwrap();
        store
            .set_due_date(3, Some(today + Duration::days(3)))
            .unwrap();
        store.complete(2).unwrap();

        assert_eq!(StatsService::new(&store).overdue_count(), 1);
    }
}
