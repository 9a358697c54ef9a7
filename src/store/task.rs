//! Task record and filter types.
//!
//! This module contains the durable task record persisted to the data file,
//! the view filter, and the transient edit session kept outside the record.

use serde::{Deserialize, Serialize};

/// A single to-do item as persisted to the data file.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub key: u64,
    pub title: String,
    pub active: bool, // true means "not yet completed"
}

impl Task {
    /// Return a new task with the given key and title, not yet completed.
    ///
    pub fn new(key: u64, title: String) -> Task {
        Task {
            key,
            title,
            active: true,
        }
    }
}

/// Specifying the user-selected view filter.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    /// Return the display label for the filter.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Return the next filter in cycling order.
    ///
    pub fn next(&self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }
}

/// An in-progress title edit for a single task. At most one exists at a time;
/// the buffer is never persisted.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub key: u64,
    pub buffer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let task = Task::new(42, "Buy milk".to_string());
        assert_eq!(task.key, 42);
        assert_eq!(task.title, "Buy milk");
        assert!(task.active);
    }

    #[test]
    fn test_task_serialized_form() {
        let task = Task::new(7, "Water plants".to_string());
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"key":7,"title":"Water plants","active":true}"#);
    }

    #[test]
    fn test_task_deserializes_legacy_is_editing_field() {
        // Older data files persisted the transient isEditing flag alongside
        // the durable fields; unknown fields are ignored on load.
        let json = r#"{"key":1,"title":"Old","active":false,"isEditing":true}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.key, 1);
        assert_eq!(task.title, "Old");
        assert!(!task.active);
    }

    #[test]
    fn test_filter_label() {
        assert_eq!(Filter::All.label(), "All");
        assert_eq!(Filter::Active.label(), "Active");
        assert_eq!(Filter::Completed.label(), "Completed");
    }

    #[test]
    fn test_filter_next_cycles() {
        assert_eq!(Filter::All.next(), Filter::Active);
        assert_eq!(Filter::Active.next(), Filter::Completed);
        assert_eq!(Filter::Completed.next(), Filter::All);
    }
}
