//! # Single-Level Undo
//!
//! [`UndoManager`] holds at most one [`ActionSnapshot`] — a register, not
//! a stack. Front-ends call [`UndoManager::record_action`] immediately
//! before each mutating store call they want reversible; recording again
//! overwrites whatever was there.
//!
//! Snapshots are owned deep copies (`Todo` owns its strings and tag list),
//! so later mutation of the live entity can't bleed into a pending
//! snapshot.
//!
//! A successful [`UndoManager::undo`] clears the register; a failed one
//! leaves it in place so the caller could retry after fixing the cause.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::{Result, TuduError};
use crate::model::Todo;
use crate::store::TodoStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Add,
    Delete,
    Update,
    Complete,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Add => "add",
            ActionKind::Delete => "delete",
            ActionKind::Update => "update",
            ActionKind::Complete => "complete",
        };
        f.write_str(name)
    }
}

impl FromStr for ActionKind {
    type Err = TuduError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(ActionKind::Add),
            "delete" => Ok(ActionKind::Delete),
            "update" => Ok(ActionKind::Update),
            "complete" => Ok(ActionKind::Complete),
            other => Err(TuduError::InvalidInput(format!(
                "Action must be one of add, delete, update, complete. Got: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActionSnapshot {
    pub kind: ActionKind,
    pub todo_id: u32,
    /// The todo as it existed right before the action. `None` for `Add`
    /// (nothing existed yet).
    pub previous_state: Option<Todo>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct UndoManager {
    last_action: Option<ActionSnapshot>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self { last_action: None }
    }

    /// Capture the pre-action state of `todo_id`. Call this before the
    /// mutating store operation, not after.
    pub fn record_action(&mut self, kind: ActionKind, todo_id: u32, store: &TodoStore) {
        let previous_state = match kind {
            ActionKind::Add => None,
            // Defensive: a missing id snapshots as None rather than failing
            // the recording.
            _ => store.get(todo_id).ok().cloned(),
        };
        self.last_action = Some(ActionSnapshot {
            kind,
            todo_id,
            previous_state,
            timestamp: Utc::now(),
        });
    }

    pub fn can_undo(&self) -> bool {
        self.last_action.is_some()
    }

    /// Human-readable preview of what `undo` would do.
    pub fn undo_description(&self) -> Option<String> {
        let snap = self.last_action.as_ref()?;
        let text = match (snap.kind, &snap.previous_state) {
            (ActionKind::Add, _) => format!("Undo add of todo (ID: {})", snap.todo_id),
            (ActionKind::Delete, Some(prev)) => {
                format!("Undo delete of '{}' (ID: {})", prev.title, snap.todo_id)
            }
            (ActionKind::Update, Some(prev)) => {
                format!("Undo update of '{}' (ID: {})", prev.title, snap.todo_id)
            }
            (ActionKind::Complete, Some(prev)) => {
                format!("Undo completion of '{}' (ID: {})", prev.title, snap.todo_id)
            }
            (kind, None) => format!("Undo {} (ID: {})", kind, snap.todo_id),
        };
        Some(text)
    }

    /// Reverse the recorded action and clear the register. Every failure
    /// path returns before the register is cleared, so a failed undo can
    /// be retried.
    pub fn undo(&mut self, store: &mut TodoStore) -> Result<String> {
        let snap = self
            .last_action
            .as_ref()
            .ok_or_else(|| TuduError::Undo("No action to undo".into()))?;

        let message = match snap.kind {
            ActionKind::Add => {
                store
                    .delete(snap.todo_id)
                    .map_err(|e| TuduError::Undo(e.to_string()))?;
                format!("Undone: Removed todo (ID: {})", snap.todo_id)
            }
            ActionKind::Delete => {
                let prev = snap.previous_state.clone().ok_or_else(|| {
                    TuduError::Undo("Cannot undo delete: no previous state".into())
                })?;
                let title = prev.title.clone();
                store.restore(prev);
                format!("Undone: Restored '{}' (ID: {})", title, snap.todo_id)
            }
            ActionKind::Update => {
                let prev = snap.previous_state.clone().ok_or_else(|| {
                    TuduError::Undo("Cannot undo update: no previous state".into())
                })?;
                let title = prev.title.clone();
                store.restore(prev);
                format!("Undone: Reverted '{}' (ID: {})", title, snap.todo_id)
            }
            ActionKind::Complete => {
                let todo = store.get_mut(snap.todo_id).map_err(|_| {
                    TuduError::Undo(format!("Cannot undo: todo {} not found", snap.todo_id))
                })?;
                todo.completed = false;
                format!("Undone: Marked incomplete (ID: {})", snap.todo_id)
            }
        };

        self.last_action = None;
        Ok(message)
    }
}
