//! # Query / Filter / Sort Service
//!
//! [`QueryService`] provides stateless read-only operations over the
//! store. Every method reads a fresh `list_all()` snapshot and returns a
//! new `Vec<Todo>`; nothing here mutates storage.
//!
//! String-typed filter literals from the front-ends cross into the core
//! through `FromStr` on the selector enums ([`StatusFilter`],
//! [`PriorityFilter`], [`DueRange`]), which is where unrecognized values
//! are rejected.
//!
//! The sort helpers are free functions: they operate on a slice the caller
//! already holds, use stable sorts, and leave the input untouched.

use std::str::FromStr;

use chrono::{Duration, Local, NaiveDate};

use crate::error::{Result, TuduError};
use crate::model::{Priority, Todo};
use crate::store::TodoStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Completed,
    Incomplete,
    All,
}

impl StatusFilter {
    fn matches(self, todo: &Todo) -> bool {
        match self {
            StatusFilter::Completed => todo.completed,
            StatusFilter::Incomplete => !todo.completed,
            StatusFilter::All => true,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TuduError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(StatusFilter::Completed),
            "incomplete" => Ok(StatusFilter::Incomplete),
            "all" => Ok(StatusFilter::All),
            other => Err(TuduError::InvalidFilter(format!(
                "Status must be one of completed, incomplete, all. Got: {other}"
            ))),
        }
    }
}

/// Priority selector for filtering. Unlike [`Priority`] itself this has a
/// `None` variant: todos without a priority are a filterable bucket of
/// their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    High,
    Medium,
    Low,
    None,
}

impl PriorityFilter {
    fn matches(self, priority: Option<Priority>) -> bool {
        match self {
            PriorityFilter::High => priority == Some(Priority::High),
            PriorityFilter::Medium => priority == Some(Priority::Medium),
            PriorityFilter::Low => priority == Some(Priority::Low),
            PriorityFilter::None => priority.is_none(),
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = TuduError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(PriorityFilter::High),
            "medium" => Ok(PriorityFilter::Medium),
            "low" => Ok(PriorityFilter::Low),
            "none" => Ok(PriorityFilter::None),
            other => Err(TuduError::InvalidFilter(format!(
                "Priority must be one of High, Medium, Low, None. Got: {other}"
            ))),
        }
    }
}

/// Due-date range selector.
///
/// `Week` and `Month` are not pure forward-looking windows: they match any
/// dated todo due at or before the horizon, which folds overdue items in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueRange {
    Overdue,
    Today,
    Week,
    Month,
    None,
}

impl DueRange {
    fn matches(self, due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
        match self {
            DueRange::None => due_date.is_none(),
            DueRange::Overdue => due_date.is_some_and(|d| d < today),
            DueRange::Today => due_date == Some(today),
            DueRange::Week => due_date.is_some_and(|d| d <= today + Duration::days(7)),
            DueRange::Month => due_date.is_some_and(|d| d <= today + Duration::days(30)),
        }
    }
}

impl FromStr for DueRange {
    type Err = TuduError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "overdue" => Ok(DueRange::Overdue),
            "today" => Ok(DueRange::Today),
            "week" => Ok(DueRange::Week),
            "month" => Ok(DueRange::Month),
            "none" => Ok(DueRange::None),
            other => Err(TuduError::InvalidFilter(format!(
                "Range must be one of overdue, today, week, month, none. Got: {other}"
            ))),
        }
    }
}

/// Category selector: a named category or the uncategorized bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Named(String),
    Uncategorized,
}

impl CategoryFilter {
    fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::Named(name) => category == Some(name.as_str()),
            CategoryFilter::Uncategorized => category.is_none(),
        }
    }
}

/// Criteria for [`QueryService::apply_combined_filters`]. Absent fields
/// impose no constraint; present fields combine with logical AND.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub status: Option<StatusFilter>,
    pub priority: Option<PriorityFilter>,
    pub category: Option<CategoryFilter>,
    pub tag: Option<String>,
    pub due_range: Option<DueRange>,
}

pub struct QueryService<'a> {
    store: &'a TodoStore,
}

impl<'a> QueryService<'a> {
    pub fn new(store: &'a TodoStore) -> Self {
        Self { store }
    }

    /// Case-insensitive substring search against titles.
    pub fn search(&self, query: &str) -> Result<Vec<Todo>> {
        if query.trim().is_empty() {
            return Err(TuduError::InvalidFilter(
                "Search query cannot be empty".into(),
            ));
        }
        let needle = query.to_lowercase();
        Ok(self
            .store
            .list_all()
            .into_iter()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .collect())
    }

    pub fn filter_by_status(&self, status: StatusFilter) -> Vec<Todo> {
        self.store
            .list_all()
            .into_iter()
            .filter(|t| status.matches(t))
            .collect()
    }

    pub fn filter_by_priority(&self, priority: PriorityFilter) -> Vec<Todo> {
        self.store
            .list_all()
            .into_iter()
            .filter(|t| priority.matches(t.priority))
            .collect()
    }

    /// Exact category match. `None` selects todos with no category; an
    /// empty or whitespace-only name is rejected as distinct from "absent".
    pub fn filter_by_category(&self, category: Option<&str>) -> Result<Vec<Todo>> {
        let filter = match category {
            Some(name) if name.trim().is_empty() => {
                return Err(TuduError::InvalidFilter("Category cannot be empty".into()))
            }
            Some(name) => CategoryFilter::Named(name.to_string()),
            None => CategoryFilter::Uncategorized,
        };
        Ok(self
            .store
            .list_all()
            .into_iter()
            .filter(|t| filter.matches(t.category.as_deref()))
            .collect())
    }

    /// Exact membership test against the tag list, no substring matching.
    pub fn filter_by_tag(&self, tag: &str) -> Result<Vec<Todo>> {
        if tag.trim().is_empty() {
            return Err(TuduError::InvalidFilter("Tag cannot be empty".into()));
        }
        Ok(self
            .store
            .list_all()
            .into_iter()
            .filter(|t| t.tags.iter().any(|candidate| candidate == tag))
            .collect())
    }

    pub fn filter_by_due_date_range(&self, range: DueRange) -> Vec<Todo> {
        let today = today();
        self.store
            .list_all()
            .into_iter()
            .filter(|t| range.matches(t.due_date, today))
            .collect()
    }

    /// Apply every present criterion with AND logic, each narrowing the
    /// previous result set: status, priority, category, tag, due range.
    pub fn apply_combined_filters(&self, criteria: &FilterCriteria) -> Vec<Todo> {
        let today = today();
        let mut todos = self.store.list_all();

        if let Some(status) = criteria.status {
            todos.retain(|t| status.matches(t));
        }
        if let Some(priority) = criteria.priority {
            todos.retain(|t| priority.matches(t.priority));
        }
        if let Some(ref category) = criteria.category {
            todos.retain(|t| category.matches(t.category.as_deref()));
        }
        if let Some(ref tag) = criteria.tag {
            todos.retain(|t| t.tags.iter().any(|candidate| candidate == tag));
        }
        if let Some(range) = criteria.due_range {
            todos.retain(|t| range.matches(t.due_date, today));
        }

        todos
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Stable sort: High, Medium, Low, then todos without a priority.
pub fn sort_by_priority(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_key(|t| t.priority.map_or(4, Priority::rank));
    sorted
}

/// Stable sort: overdue, due today, upcoming, then todos without a due
/// date. Dated buckets are in ascending date order.
pub fn sort_by_due_date(todos: &[Todo]) -> Vec<Todo> {
    let today = today();
    let mut sorted = todos.to_vec();
    sorted.sort_by_key(|t| match t.due_date {
        Some(d) if d < today => (0u8, d),
        Some(d) if d == today => (1, d),
        Some(d) => (2, d),
        None => (3, NaiveDate::MAX),
    });
    sorted
}

/// Stable sort by creation timestamp, oldest first unless `reverse`.
pub fn sort_by_created_date(todos: &[Todo], reverse: bool) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    if reverse {
        // Stable sort with an inverted comparator, not sort-then-reverse:
        // ties must keep their original relative order.
        sorted.sort_by(|a, b| b.created_date.cmp(&a.created_date));
    } else {
        sorted.sort_by_key(|t| t.created_date);
    }
    sorted
}

/// Stable case-insensitive alphabetical sort.
pub fn sort_by_title(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_key(|t| t.title.to_lowercase());
    sorted
}
