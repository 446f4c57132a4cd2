//! Messages consumed by the application state machine.
//!
//! Everything that advances the state arrives here: terminal input, resizes,
//! and the results of asynchronous store commands. The event loop drains one
//! queue of these serially, so no two state transitions ever overlap.

use crossterm::event::KeyEvent;

use crate::models::{Note, Project, Task};
use crate::tui::flatten::DisplayTask;

/// Whose notes the notes panel is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteContext {
    Project,
    Task,
}

/// One unit of input for the state machine.
///
/// Mutation results carry `Option`/`bool` payloads: the failure shape (`None`,
/// `false`) means the store call failed and the state machine leaves things
/// as they were. Load results degrade to empty lists on failure, so every
/// command resolves to a renderable state.
#[derive(Debug, Clone)]
pub enum Message {
    Key(KeyEvent),
    Resize(u16, u16),
    ProjectsLoaded(Vec<Project>),
    /// Tasks arrive already flattened into display order.
    TasksLoaded(Vec<DisplayTask>),
    NotesLoaded {
        notes: Vec<Note>,
        /// Set by whichever load-notes variant issued the command.
        context: NoteContext,
    },
    /// A project create or update finished.
    ProjectSaved(Option<Project>),
    ProjectDeleted(bool),
    ProjectArchived(bool),
    /// A task create or update finished.
    TaskSaved(Option<Task>),
    TaskDeleted(bool),
    NoteSaved(Option<Note>),
}
