//! Asynchronous store commands and their dispatcher.
//!
//! The state machine never touches the store directly; it returns `Command`
//! values and the dispatcher runs each one on a blocking worker. Every
//! command sends exactly one result message back onto the shared event queue,
//! store failures included. Commands dispatched together may complete in any
//! order; there is no cancellation and no retry.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::store::Store;
use crate::tui::flatten::flatten_tasks;
use crate::tui::message::{Message, NoteContext};

/// Which entity a new note attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTarget {
    Project(i64),
    Task(i64),
}

/// A unit of store work issued by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadProjects,
    LoadTasks {
        project_id: i64,
    },
    LoadProjectNotes {
        project_id: i64,
    },
    LoadTaskNotes {
        task_id: i64,
    },
    CreateProject {
        name: String,
        description: Option<String>,
    },
    UpdateProject {
        id: i64,
        name: String,
        description: Option<String>,
    },
    DeleteProject {
        id: i64,
    },
    ArchiveProject {
        id: i64,
    },
    CreateTask {
        project_id: i64,
        parent_task_id: Option<i64>,
        title: String,
        description: Option<String>,
        priority: i64,
    },
    UpdateTask {
        id: i64,
        title: String,
        priority: i64,
        completed: bool,
        /// When present, the task's description note is updated or created
        /// after the task row itself.
        description: Option<String>,
    },
    DeleteTask {
        id: i64,
    },
    CreateNote {
        target: NoteTarget,
        content: String,
    },
}

impl Command {
    /// Run the command against the store and produce its single result
    /// message. Store errors never escape: loads fall back to empty lists,
    /// mutations to `None`/`false` payloads.
    pub fn execute(self, store: &Store) -> Message {
        match self {
            Command::LoadProjects => {
                Message::ProjectsLoaded(store.active_projects().unwrap_or_default())
            }
            Command::LoadTasks { project_id } => Message::TasksLoaded(flatten_tasks(
                store.tasks_by_project(project_id).unwrap_or_default(),
            )),
            Command::LoadProjectNotes { project_id } => Message::NotesLoaded {
                notes: store.notes_by_project(project_id).unwrap_or_default(),
                context: NoteContext::Project,
            },
            Command::LoadTaskNotes { task_id } => Message::NotesLoaded {
                notes: store.notes_by_task(task_id).unwrap_or_default(),
                context: NoteContext::Task,
            },
            Command::CreateProject { name, description } => {
                Message::ProjectSaved(store.create_project(&name, description.as_deref()).ok())
            }
            Command::UpdateProject {
                id,
                name,
                description,
            } => Message::ProjectSaved(
                store
                    .update_project(id, &name, description.as_deref())
                    .ok(),
            ),
            Command::DeleteProject { id } => {
                Message::ProjectDeleted(store.delete_project(id).is_ok())
            }
            Command::ArchiveProject { id } => {
                Message::ProjectArchived(store.set_project_archived(id, true).is_ok())
            }
            Command::CreateTask {
                project_id,
                parent_task_id,
                title,
                description,
                priority,
            } => Message::TaskSaved(
                store
                    .create_task(
                        project_id,
                        parent_task_id,
                        &title,
                        description.as_deref(),
                        priority,
                    )
                    .ok(),
            ),
            Command::UpdateTask {
                id,
                title,
                priority,
                completed,
                description,
            } => {
                let task = store.update_task(id, &title, priority, completed).ok();
                if task.is_some() {
                    if let Some(desc) = description {
                        let _ = store.upsert_task_description(id, &desc);
                    }
                }
                Message::TaskSaved(task)
            }
            Command::DeleteTask { id } => Message::TaskDeleted(store.delete_task(id).is_ok()),
            Command::CreateNote { target, content } => Message::NoteSaved(match target {
                NoteTarget::Project(id) => store.create_note_for_project(id, &content).ok(),
                NoteTarget::Task(id) => store.create_note_for_task(id, &content).ok(),
            }),
        }
    }
}

/// Hand a command to a blocking worker. The worker delivers exactly one
/// result message into `events`; a closed queue just drops the result.
pub fn dispatch(store: &Arc<Store>, events: &UnboundedSender<Message>, command: Command) {
    let store = Arc::clone(store);
    let events = events.clone();
    tokio::task::spawn_blocking(move || {
        let _ = events.send(command.execute(&store));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(&dir.path().join("trellis.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn load_tasks_delivers_flattened_order() {
        let (_dir, store) = open_temp();
        let p = store.create_project("P", None).unwrap();
        let root = store.create_task(p.id, None, "root", None, 0).unwrap();
        store
            .create_task(p.id, Some(root.id), "child", None, 0)
            .unwrap();

        let msg = Command::LoadTasks { project_id: p.id }.execute(&store);
        let Message::TasksLoaded(entries) = msg else {
            panic!("expected TasksLoaded");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].task.title, "root");
        assert_eq!(entries[0].depth, 0);
        assert_eq!(entries[1].task.title, "child");
        assert_eq!(entries[1].depth, 1);
    }

    #[test]
    fn note_loads_tag_their_context() {
        let (_dir, store) = open_temp();
        let p = store.create_project("P", None).unwrap();
        let t = store.create_task(p.id, None, "T", None, 0).unwrap();

        let msg = Command::LoadProjectNotes { project_id: p.id }.execute(&store);
        assert!(matches!(
            msg,
            Message::NotesLoaded {
                context: NoteContext::Project,
                ..
            }
        ));
        let msg = Command::LoadTaskNotes { task_id: t.id }.execute(&store);
        assert!(matches!(
            msg,
            Message::NotesLoaded {
                context: NoteContext::Task,
                ..
            }
        ));
    }

    #[test]
    fn failed_mutation_resolves_to_failure_payload() {
        let (_dir, store) = open_temp();
        let msg = Command::DeleteProject { id: 404 }.execute(&store);
        assert!(matches!(msg, Message::ProjectDeleted(false)));

        let msg = Command::UpdateTask {
            id: 404,
            title: "x".into(),
            priority: 0,
            completed: false,
            description: None,
        }
        .execute(&store);
        assert!(matches!(msg, Message::TaskSaved(None)));
    }

    #[test]
    fn update_task_with_description_upserts_the_note() {
        let (_dir, store) = open_temp();
        let p = store.create_project("P", None).unwrap();
        let t = store.create_task(p.id, None, "T", None, 0).unwrap();

        let msg = Command::UpdateTask {
            id: t.id,
            title: "T".into(),
            priority: 0,
            completed: false,
            description: Some("added later".into()),
        }
        .execute(&store);
        assert!(matches!(msg, Message::TaskSaved(Some(_))));

        let notes = store.notes_by_task(t.id).unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].is_description);
        assert_eq!(notes[0].content, "added later");
    }
}
