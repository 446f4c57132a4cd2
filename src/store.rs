//! SQLite-backed entity store for projects, tasks, and notes.
//!
//! The store owns a single connection behind a mutex and exposes blocking
//! request/response operations. Callers that need concurrency run these on
//! worker threads; the store itself serializes access.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{params, Connection, Row};
use thiserror::Error;

use crate::models::{Note, Project, Task};

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("not found")]
    NotFound,
}

const PROJECT_COLUMNS: &str =
    "id, name, description, due_date, archived, created_at, updated_at";
const TASK_COLUMNS: &str =
    "id, project_id, parent_task_id, title, priority, completed, created_at, updated_at";
const NOTE_COLUMNS: &str =
    "id, project_id, task_id, content, is_description, created_at, updated_at";

/// The shared database handle. Cheap to share via `Arc`; every method takes
/// `&self` and locks internally.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Open (or create) the database at `path` and apply the schema.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Store {
            conn: Mutex::new(conn),
        };
        store.migrate()?;
        Ok(store)
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("store connection lock poisoned")
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn().execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            PRAGMA foreign_keys=ON;

            CREATE TABLE IF NOT EXISTS projects (
              id INTEGER PRIMARY KEY,
              name TEXT NOT NULL,
              description TEXT,
              due_date TEXT,
              archived INTEGER NOT NULL DEFAULT 0,
              created_at TEXT NOT NULL,
              updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS tasks (
              id INTEGER PRIMARY KEY,
              project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
              parent_task_id INTEGER REFERENCES tasks(id) ON DELETE CASCADE,
              title TEXT NOT NULL,
              priority INTEGER NOT NULL DEFAULT 0,
              completed INTEGER NOT NULL DEFAULT 0,
              created_at TEXT NOT NULL,
              updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS notes (
              id INTEGER PRIMARY KEY,
              project_id INTEGER REFERENCES projects(id) ON DELETE CASCADE,
              task_id INTEGER REFERENCES tasks(id) ON DELETE CASCADE,
              content TEXT NOT NULL,
              is_description INTEGER NOT NULL DEFAULT 0,
              created_at TEXT NOT NULL,
              updated_at TEXT NOT NULL,
              CHECK ((project_id IS NULL) != (task_id IS NULL))
            );

            CREATE INDEX IF NOT EXISTS idx_tasks_project ON tasks(project_id);
            CREATE INDEX IF NOT EXISTS idx_notes_project ON notes(project_id);
            CREATE INDEX IF NOT EXISTS idx_notes_task ON notes(task_id);
            "#,
        )?;
        Ok(())
    }

    // Projects

    pub fn create_project(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Project, StoreError> {
        let conn = self.conn();
        let now = Utc::now();
        conn.execute(
            "INSERT INTO projects (name, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)",
            params![name, description, now],
        )?;
        let id = conn.last_insert_rowid();
        fetch_project(&conn, id)
    }

    pub fn update_project(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<Project, StoreError> {
        let conn = self.conn();
        let changed = conn.execute(
            "UPDATE projects SET name = ?1, description = ?2, updated_at = ?3 WHERE id = ?4",
            params![name, description, Utc::now(), id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        fetch_project(&conn, id)
    }

    pub fn delete_project(&self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn()
            .execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    pub fn set_project_archived(&self, id: i64, archived: bool) -> Result<(), StoreError> {
        let changed = self.conn().execute(
            "UPDATE projects SET archived = ?1, updated_at = ?2 WHERE id = ?3",
            params![archived, Utc::now(), id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// All non-archived projects, newest first.
    pub fn active_projects(&self) -> Result<Vec<Project>, StoreError> {
        let conn = self.conn();
        let sql = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE archived = 0 ORDER BY created_at DESC"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], project_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn all_projects(&self) -> Result<Vec<Project>, StoreError> {
        let conn = self.conn();
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], project_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    // Tasks

    /// Create a task, plus its description note when a non-empty description
    /// is supplied, in one transaction.
    pub fn create_task(
        &self,
        project_id: i64,
        parent_task_id: Option<i64>,
        title: &str,
        description: Option<&str>,
        priority: i64,
    ) -> Result<Task, StoreError> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        let now = Utc::now();
        tx.execute(
            "INSERT INTO tasks (project_id, parent_task_id, title, priority, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            params![project_id, parent_task_id, title, priority, now],
        )?;
        let id = tx.last_insert_rowid();
        if let Some(desc) = description.filter(|d| !d.is_empty()) {
            tx.execute(
                "INSERT INTO notes (task_id, content, is_description, created_at, updated_at)
                 VALUES (?1, ?2, 1, ?3, ?3)",
                params![id, desc, now],
            )?;
        }
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
        let task = tx.query_row(&sql, params![id], task_from_row)?;
        tx.commit()?;
        Ok(task)
    }

    pub fn update_task(
        &self,
        id: i64,
        title: &str,
        priority: i64,
        completed: bool,
    ) -> Result<Task, StoreError> {
        let conn = self.conn();
        let changed = conn.execute(
            "UPDATE tasks SET title = ?1, priority = ?2, completed = ?3, updated_at = ?4
             WHERE id = ?5",
            params![title, priority, completed, Utc::now(), id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
        Ok(conn.query_row(&sql, params![id], task_from_row)?)
    }

    pub fn delete_task(&self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn()
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// All tasks for one project, highest priority first, then newest first.
    pub fn tasks_by_project(&self, project_id: i64) -> Result<Vec<Task>, StoreError> {
        let conn = self.conn();
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE project_id = ?1
             ORDER BY priority DESC, created_at DESC"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![project_id], task_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn all_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let conn = self.conn();
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY project_id, id");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], task_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    // Notes

    pub fn create_note_for_project(
        &self,
        project_id: i64,
        content: &str,
    ) -> Result<Note, StoreError> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO notes (project_id, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)",
            params![project_id, content, Utc::now()],
        )?;
        fetch_note(&conn, conn.last_insert_rowid())
    }

    pub fn create_note_for_task(&self, task_id: i64, content: &str) -> Result<Note, StoreError> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO notes (task_id, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)",
            params![task_id, content, Utc::now()],
        )?;
        fetch_note(&conn, conn.last_insert_rowid())
    }

    /// Notes attached to a project, newest first.
    pub fn notes_by_project(&self, project_id: i64) -> Result<Vec<Note>, StoreError> {
        let conn = self.conn();
        let sql = format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE project_id = ?1 ORDER BY created_at DESC"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![project_id], note_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Notes attached to a task, the description note first, then newest first.
    pub fn notes_by_task(&self, task_id: i64) -> Result<Vec<Note>, StoreError> {
        let conn = self.conn();
        let sql = format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE task_id = ?1
             ORDER BY is_description DESC, created_at DESC"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![task_id], note_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn all_notes(&self) -> Result<Vec<Note>, StoreError> {
        let conn = self.conn();
        let sql = format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY id");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], note_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Update a task's description note, creating it when the task has none.
    pub fn upsert_task_description(&self, task_id: i64, content: &str) -> Result<(), StoreError> {
        let conn = self.conn();
        let now = Utc::now();
        let changed = conn.execute(
            "UPDATE notes SET content = ?1, updated_at = ?2
             WHERE task_id = ?3 AND is_description = 1",
            params![content, now, task_id],
        )?;
        if changed == 0 {
            conn.execute(
                "INSERT INTO notes (task_id, content, is_description, created_at, updated_at)
                 VALUES (?1, ?2, 1, ?3, ?3)",
                params![task_id, content, now],
            )?;
        }
        Ok(())
    }
}

fn fetch_project(conn: &Connection, id: i64) -> Result<Project, StoreError> {
    let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1");
    Ok(conn.query_row(&sql, params![id], project_from_row)?)
}

fn fetch_note(conn: &Connection, id: i64) -> Result<Note, StoreError> {
    let sql = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1");
    Ok(conn.query_row(&sql, params![id], note_from_row)?)
}

fn project_from_row(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        due_date: row.get(3)?,
        archived: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        project_id: row.get(1)?,
        parent_task_id: row.get(2)?,
        title: row.get(3)?,
        priority: row.get(4)?,
        completed: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

fn note_from_row(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        project_id: row.get(1)?,
        task_id: row.get(2)?,
        content: row.get(3)?,
        is_description: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}
