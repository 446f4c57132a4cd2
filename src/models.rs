//! Entity types shared between the store and the TUI.
//!
//! These mirror the SQLite schema one-to-one. Timestamps are kept in UTC and
//! converted for display only at the rendering boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project groups tasks and notes. Archived projects are hidden from the
/// active project list but keep their data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A work item belonging to a project. Tasks form a forest per project via
/// `parent_task_id`; a parent always belongs to the same project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub parent_task_id: Option<i64>,
    pub title: String,
    /// 0 = None, 1 = Low, 2 = Medium, 3 = High, 4 = Urgent.
    pub priority: i64,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Free-text attached to exactly one of a project or a task. At most one note
/// per task carries `is_description` and acts as that task's description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub project_id: Option<i64>,
    pub task_id: Option<i64>,
    pub content: String,
    pub is_description: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Format a task priority for display.
pub fn format_priority(priority: i64) -> &'static str {
    match priority {
        0 => "None",
        1 => "Low",
        2 => "Medium",
        3 => "High",
        4 => "Urgent",
        _ => "Unknown",
    }
}

/// Parse a priority entered as text. Values outside 0-4 are rejected.
pub fn parse_priority(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok().filter(|p| (0..=4).contains(p))
}
