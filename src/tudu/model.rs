//! # Domain Model: Todos and Field Validation
//!
//! This module defines the [`Todo`] entity and the [`Priority`] level.
//!
//! Validation runs when a todo is constructed ([`Todo::new`] and the
//! builder-style field attachers), and again when the store rebuilds a todo
//! on title update. Direct field mutation through the store's helper
//! methods (toggling `completed`, swapping a priority) deliberately skips
//! revalidation; the typed fields make most invalid states unrepresentable
//! anyway.
//!
//! ## Field Constraints
//!
//! - `title`: non-empty after trimming, at most 200 characters (raw length).
//! - `category`: at most 50 characters.
//! - `tags`: each at most 30 characters; order and duplicates preserved.
//! - `created_date` / `updated_date`: both taken from the same clock read,
//!   so a freshly created todo has identical timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TuduError};

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_CATEGORY_LEN: usize = 50;
pub const MAX_TAG_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: High before Medium before Low. An absent priority ranks
    /// after all three (see `query::sort_by_priority`).
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TuduError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(TuduError::Validation(format!(
                "Priority must be 'High', 'Medium', or 'Low'. Got: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Todo {
    /// Construct a validated todo. The id comes from the store; everything
    /// optional starts empty and is attached with the `with_*` builders.
    pub fn new(id: u32, title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;
        let now = Utc::now();
        Ok(Self {
            id,
            title,
            completed: false,
            priority: None,
            due_date: None,
            category: None,
            tags: Vec::new(),
            created_date: now,
            updated_date: now,
        })
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Result<Self> {
        let category = category.into();
        validate_category(&category)?;
        self.category = Some(category);
        Ok(self)
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Result<Self> {
        validate_tags(&tags)?;
        self.tags = tags;
        Ok(self)
    }
}

pub(crate) fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TuduError::Validation("Title cannot be empty".into()));
    }
    // Raw length: surrounding whitespace counts toward the limit.
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(TuduError::Validation(format!(
            "Title cannot exceed {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

pub(crate) fn validate_category(category: &str) -> Result<()> {
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(TuduError::Validation(format!(
            "category cannot exceed {MAX_CATEGORY_LEN} characters"
        )));
    }
    Ok(())
}

pub(crate) fn validate_tags(tags: &[String]) -> Result<()> {
    for tag in tags {
        if tag.chars().count() > MAX_TAG_LEN {
            return Err(TuduError::Validation(format!(
                "Tag '{tag}' exceeds {MAX_TAG_LEN} characters"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_has_defaults() {
        let todo = Todo::new(1, "Fix bug").unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Fix bug");
        assert!(!todo.completed);
        assert!(todo.priority.is_none());
        assert!(todo.due_date.is_none());
        assert!(todo.category.is_none());
        assert!(todo.tags.is_empty());
    }

    #[test]
    fn timestamps_are_equal_on_creation() {
        let todo = Todo::new(1, "Fix bug").unwrap();
        assert_eq!(todo.created_date, todo.updated_date);
    }

    #[test]
    fn empty_title_rejected() {
        assert!(matches!(Todo::new(1, ""), Err(TuduError::Validation(_))));
        assert!(matches!(
            Todo::new(1, "   \t "),
            Err(TuduError::Validation(_))
        ));
    }

    #[test]
    fn title_length_boundary() {
        let max = "a".repeat(MAX_TITLE_LEN);
        assert!(Todo::new(1, max).is_ok());

        let over = "a".repeat(MAX_TITLE_LEN + 1);
        assert!(matches!(Todo::new(1, over), Err(TuduError::Validation(_))));
    }

    #[test]
    fn raw_title_length_counts_whitespace() {
        // 199 chars + 2 spaces of padding exceeds the limit even though the
        // trimmed title would fit.
        let padded = format!(" {} ", "a".repeat(199));
        assert!(matches!(
            Todo::new(1, padded),
            Err(TuduError::Validation(_))
        ));
    }

    #[test]
    fn category_length_enforced() {
        let todo = Todo::new(1, "T").unwrap();
        assert!(todo.clone().with_category("Work").is_ok());

        let over = "c".repeat(MAX_CATEGORY_LEN + 1);
        assert!(matches!(
            todo.with_category(over),
            Err(TuduError::Validation(_))
        ));
    }

    #[test]
    fn tag_length_enforced() {
        let todo = Todo::new(1, "T").unwrap();
        let ok = vec!["urgent".to_string(), "bug-fix".to_string()];
        assert!(todo.clone().with_tags(ok).is_ok());

        let over = vec!["t".repeat(MAX_TAG_LEN + 1)];
        assert!(matches!(
            todo.with_tags(over),
            Err(TuduError::Validation(_))
        ));
    }

    #[test]
    fn tags_preserve_order_and_duplicates() {
        let tags = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let todo = Todo::new(1, "T").unwrap().with_tags(tags.clone()).unwrap();
        assert_eq!(todo.tags, tags);
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("LOW".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_rank_orders_high_first() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }
}
