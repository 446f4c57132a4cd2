//! The application state machine.
//!
//! `App` is the single source of truth for the running session. It advances
//! one message at a time: `update` mutates the state and returns the store
//! commands to dispatch next. It never performs I/O itself and never blocks,
//! so it is fully exercisable in tests with synthetic messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{parse_priority, Note, Project};
use crate::tui::command::{Command, NoteTarget};
use crate::tui::flatten::DisplayTask;
use crate::tui::form::{
    FormKind, FormSession, NOTE_CONTENT, PROJECT_DESCRIPTION, PROJECT_NAME, TASK_DESCRIPTION,
    TASK_PRIORITY, TASK_TITLE,
};
use crate::tui::message::{Message, NoteContext};

/// The five UI regions that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Projects,
    Tasks,
    Notes,
    Details,
    Drafts,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Projects,
        Panel::Tasks,
        Panel::Notes,
        Panel::Details,
        Panel::Drafts,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Projects => "Projects",
            Panel::Tasks => "Tasks",
            Panel::Notes => "Notes",
            Panel::Details => "Details",
            Panel::Drafts => "Drafts",
        }
    }

    pub fn index(self) -> usize {
        Panel::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Panel {
        Panel::ALL[(self.index() + 1) % Panel::ALL.len()]
    }

    pub fn prev(self) -> Panel {
        Panel::ALL[(self.index() + Panel::ALL.len() - 1) % Panel::ALL.len()]
    }

    fn from_digit(c: char) -> Option<Panel> {
        match c {
            '1' => Some(Panel::Projects),
            '2' => Some(Panel::Tasks),
            '3' => Some(Panel::Notes),
            '4' => Some(Panel::Details),
            '5' => Some(Panel::Drafts),
            _ => None,
        }
    }
}

/// What the keyboard currently drives.
#[derive(Debug, Clone)]
pub enum Mode {
    Normal,
    Help,
    Form(FormSession),
}

/// The whole mutable application state.
pub struct App {
    pub width: u16,
    pub height: u16,
    pub projects: Vec<Project>,
    pub selected_project: usize,
    pub tasks: Vec<DisplayTask>,
    pub selected_task: usize,
    pub notes: Vec<Note>,
    pub note_context: NoteContext,
    pub panel: Panel,
    pub mode: Mode,
    /// Set while a subtask create form is open; the new task's parent.
    pub pending_parent: Option<i64>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            width: 0,
            height: 0,
            projects: Vec::new(),
            selected_project: 0,
            tasks: Vec::new(),
            selected_task: 0,
            notes: Vec::new(),
            note_context: NoteContext::Project,
            panel: Panel::Projects,
            mode: Mode::Normal,
            pending_parent: None,
            should_quit: false,
        }
    }

    /// Commands to dispatch before the first message arrives.
    pub fn init_commands(&self) -> Vec<Command> {
        vec![Command::LoadProjects]
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected_project)
    }

    pub fn selected_task(&self) -> Option<&DisplayTask> {
        self.tasks.get(self.selected_task)
    }

    /// Advance the state machine by one message, returning the follow-up
    /// commands to dispatch.
    pub fn update(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::ProjectsLoaded(projects) => {
                self.projects = projects;
                self.selected_project = 0;
                if let Some(project) = self.selected_project() {
                    let id = project.id;
                    vec![
                        Command::LoadTasks { project_id: id },
                        Command::LoadProjectNotes { project_id: id },
                    ]
                } else {
                    self.tasks.clear();
                    self.selected_task = 0;
                    self.notes.clear();
                    Vec::new()
                }
            }
            Message::TasksLoaded(tasks) => {
                self.tasks = tasks;
                self.selected_task = 0;
                if let Some(entry) = self.selected_task() {
                    vec![Command::LoadTaskNotes {
                        task_id: entry.task.id,
                    }]
                } else {
                    self.notes.clear();
                    Vec::new()
                }
            }
            Message::NotesLoaded { notes, context } => {
                self.notes = notes;
                self.note_context = context;
                Vec::new()
            }
            Message::ProjectSaved(Some(_)) => {
                self.mode = Mode::Normal;
                vec![Command::LoadProjects]
            }
            Message::TaskSaved(Some(_)) => {
                self.mode = Mode::Normal;
                self.pending_parent = None;
                self.reload_tasks()
            }
            Message::ProjectDeleted(true) => {
                self.selected_project = 0;
                vec![Command::LoadProjects]
            }
            Message::ProjectArchived(true) => vec![Command::LoadProjects],
            Message::TaskDeleted(true) => {
                self.selected_task = 0;
                self.reload_tasks()
            }
            Message::NoteSaved(Some(_)) => {
                self.mode = Mode::Normal;
                self.reload_notes()
            }
            // Failed mutations: leave everything untouched, open forms included.
            Message::ProjectSaved(None)
            | Message::TaskSaved(None)
            | Message::NoteSaved(None)
            | Message::ProjectDeleted(false)
            | Message::ProjectArchived(false)
            | Message::TaskDeleted(false) => Vec::new(),
            Message::Resize(width, height) => {
                self.width = width;
                self.height = height;
                Vec::new()
            }
            Message::Key(key) => self.handle_key(key),
        }
    }

    fn reload_tasks(&self) -> Vec<Command> {
        match self.selected_project() {
            Some(project) => vec![Command::LoadTasks {
                project_id: project.id,
            }],
            None => Vec::new(),
        }
    }

    fn reload_notes(&self) -> Vec<Command> {
        match self.note_context {
            NoteContext::Project => match self.selected_project() {
                Some(project) => vec![Command::LoadProjectNotes {
                    project_id: project.id,
                }],
                None => Vec::new(),
            },
            NoteContext::Task => match self.selected_task() {
                Some(entry) => vec![Command::LoadTaskNotes {
                    task_id: entry.task.id,
                }],
                None => Vec::new(),
            },
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match &self.mode {
            Mode::Help => {
                // Any key dismisses help.
                self.mode = Mode::Normal;
                Vec::new()
            }
            Mode::Form(_) => self.handle_form_key(key),
            Mode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.pending_parent = None;
                Vec::new()
            }
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => {
                if let Mode::Form(form) = &mut self.mode {
                    form.focus_next();
                }
                Vec::new()
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Mode::Form(form) = &mut self.mode {
                    form.focus_prev();
                }
                Vec::new()
            }
            code => {
                if let Mode::Form(form) = &mut self.mode {
                    form.handle_key(code);
                }
                Vec::new()
            }
        }
    }

    /// Build the submit command for the open form. Validation failures (blank
    /// required field, missing selection) issue nothing and leave the form
    /// open; the form also stays open on success until the result message
    /// lands.
    fn submit_form(&mut self) -> Vec<Command> {
        let Mode::Form(form) = &self.mode else {
            return Vec::new();
        };
        match form.kind {
            FormKind::CreateProject => {
                let Some(name) = form.optional_value(PROJECT_NAME) else {
                    return Vec::new();
                };
                vec![Command::CreateProject {
                    name: name.to_string(),
                    description: form.optional_value(PROJECT_DESCRIPTION).map(String::from),
                }]
            }
            FormKind::EditProject(id) => {
                let Some(name) = form.optional_value(PROJECT_NAME) else {
                    return Vec::new();
                };
                vec![Command::UpdateProject {
                    id,
                    name: name.to_string(),
                    description: form.optional_value(PROJECT_DESCRIPTION).map(String::from),
                }]
            }
            FormKind::CreateTask => {
                let Some(project) = self.selected_project() else {
                    return Vec::new();
                };
                let Some(title) = form.optional_value(TASK_TITLE) else {
                    return Vec::new();
                };
                vec![Command::CreateTask {
                    project_id: project.id,
                    parent_task_id: self.pending_parent,
                    title: title.to_string(),
                    description: form.optional_value(TASK_DESCRIPTION).map(String::from),
                    priority: parse_priority(form.value(TASK_PRIORITY)).unwrap_or(0),
                }]
            }
            FormKind::EditTask(id) => {
                let Some(title) = form.optional_value(TASK_TITLE) else {
                    return Vec::new();
                };
                let Some(entry) = self.tasks.iter().find(|e| e.task.id == id) else {
                    return Vec::new();
                };
                vec![Command::UpdateTask {
                    id,
                    title: title.to_string(),
                    // Unparsable priority text keeps the task's current value.
                    priority: parse_priority(form.value(TASK_PRIORITY))
                        .unwrap_or(entry.task.priority),
                    completed: entry.task.completed,
                    description: form.optional_value(TASK_DESCRIPTION).map(String::from),
                }]
            }
            FormKind::CreateNote => {
                let Some(content) = form.optional_value(NOTE_CONTENT) else {
                    return Vec::new();
                };
                let target = match self.note_context {
                    NoteContext::Project => {
                        self.selected_project().map(|p| NoteTarget::Project(p.id))
                    }
                    NoteContext::Task => self.selected_task().map(|e| NoteTarget::Task(e.task.id)),
                };
                let Some(target) = target else {
                    return Vec::new();
                };
                vec![Command::CreateNote {
                    target,
                    content: content.to_string(),
                }]
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Vec::new();
        }
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Tab => {
                self.panel = self.panel.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                self.panel = self.panel.prev();
                Vec::new()
            }
            KeyCode::Char('n') => {
                self.open_create_form();
                Vec::new()
            }
            KeyCode::Char('e') => {
                self.open_edit_form();
                Vec::new()
            }
            KeyCode::Char('d') => self.delete_selection(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_completion(),
            KeyCode::Char('s') => {
                // Subtask of the selected task.
                if self.panel == Panel::Tasks {
                    if let Some(entry) = self.selected_task() {
                        self.pending_parent = Some(entry.task.id);
                        self.mode = Mode::Form(FormSession::create_task());
                    }
                }
                Vec::new()
            }
            KeyCode::Char('a') => {
                if self.panel == Panel::Projects {
                    if let Some(project) = self.selected_project() {
                        return vec![Command::ArchiveProject { id: project.id }];
                    }
                }
                Vec::new()
            }
            KeyCode::Char('?') => {
                self.mode = Mode::Help;
                Vec::new()
            }
            KeyCode::Char(c) => {
                if let Some(panel) = Panel::from_digit(c) {
                    self.panel = panel;
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Move the selection in the active navigable panel, clamped at the list
    /// edges. A move in Projects reloads that project's tasks and notes; a
    /// move in Tasks reloads that task's notes.
    fn move_selection(&mut self, delta: i64) -> Vec<Command> {
        match self.panel {
            Panel::Projects => {
                if step(&mut self.selected_project, delta, self.projects.len()) {
                    if let Some(project) = self.selected_project() {
                        let id = project.id;
                        return vec![
                            Command::LoadTasks { project_id: id },
                            Command::LoadProjectNotes { project_id: id },
                        ];
                    }
                }
                Vec::new()
            }
            Panel::Tasks => {
                if step(&mut self.selected_task, delta, self.tasks.len()) {
                    if let Some(entry) = self.selected_task() {
                        return vec![Command::LoadTaskNotes {
                            task_id: entry.task.id,
                        }];
                    }
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn open_create_form(&mut self) {
        match self.panel {
            Panel::Projects => {
                self.mode = Mode::Form(FormSession::create_project());
            }
            Panel::Tasks => {
                if self.selected_project().is_some() {
                    self.pending_parent = None;
                    self.mode = Mode::Form(FormSession::create_task());
                }
            }
            Panel::Notes => {
                // Attach to whatever the notes panel currently shows.
                let valid = match self.note_context {
                    NoteContext::Project => self.selected_project().is_some(),
                    NoteContext::Task => self.selected_task().is_some(),
                };
                if valid {
                    self.mode = Mode::Form(FormSession::create_note());
                }
            }
            Panel::Details | Panel::Drafts => {}
        }
    }

    fn open_edit_form(&mut self) {
        match self.panel {
            Panel::Projects => {
                if let Some(project) = self.selected_project() {
                    self.mode = Mode::Form(FormSession::edit_project(project));
                }
            }
            Panel::Tasks => {
                if let Some(entry) = self.selected_task() {
                    self.mode = Mode::Form(FormSession::edit_task(&entry.task, &self.notes));
                }
            }
            _ => {}
        }
    }

    fn delete_selection(&mut self) -> Vec<Command> {
        match self.panel {
            Panel::Projects => match self.selected_project() {
                Some(project) => vec![Command::DeleteProject { id: project.id }],
                None => Vec::new(),
            },
            Panel::Tasks => match self.selected_task() {
                Some(entry) => vec![Command::DeleteTask { id: entry.task.id }],
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Flip the selected task's completed flag, keeping title and priority.
    fn toggle_completion(&self) -> Vec<Command> {
        if self.panel != Panel::Tasks {
            return Vec::new();
        }
        match self.selected_task() {
            Some(entry) => vec![Command::UpdateTask {
                id: entry.task.id,
                title: entry.task.title.clone(),
                priority: entry.task.priority,
                completed: !entry.task.completed,
                description: None,
            }],
            None => Vec::new(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

/// Clamped selection step. Returns whether the index changed.
fn step(index: &mut usize, delta: i64, len: usize) -> bool {
    if len == 0 {
        return false;
    }
    let current = (*index).min(len - 1);
    let next = if delta < 0 {
        current.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        (current + delta as usize).min(len - 1)
    };
    *index = next;
    next != current
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use crate::models::Task;

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn project(id: i64, name: &str) -> Project {
        let now = Utc::now();
        Project {
            id,
            name: name.into(),
            description: None,
            due_date: None,
            archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn entry(id: i64, title: &str, depth: usize) -> DisplayTask {
        let now = Utc::now();
        DisplayTask {
            task: Task {
                id,
                project_id: 1,
                parent_task_id: None,
                title: title.into(),
                priority: 2,
                completed: false,
                created_at: now,
                updated_at: now,
            },
            depth,
        }
    }

    fn app_with_projects(projects: Vec<Project>) -> App {
        let mut app = App::new();
        app.update(Message::ProjectsLoaded(projects));
        app
    }

    #[test]
    fn projects_loaded_selects_first_and_loads_dependents() {
        let mut app = App::new();
        let commands = app.update(Message::ProjectsLoaded(vec![
            project(1, "A"),
            project(2, "B"),
        ]));
        assert_eq!(app.selected_project, 0);
        assert_eq!(
            commands,
            vec![
                Command::LoadTasks { project_id: 1 },
                Command::LoadProjectNotes { project_id: 1 },
            ]
        );
    }

    #[test]
    fn empty_projects_load_clears_dependents() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        app.update(Message::TasksLoaded(vec![entry(10, "t", 0)]));
        let commands = app.update(Message::ProjectsLoaded(Vec::new()));
        assert!(commands.is_empty());
        assert!(app.tasks.is_empty());
        assert!(app.notes.is_empty());
        assert_eq!(app.selected_project, 0);
        assert_eq!(app.selected_task, 0);
    }

    #[test]
    fn selecting_next_project_issues_one_task_and_one_note_load() {
        let mut app = app_with_projects(vec![project(1, "A"), project(2, "B")]);
        let commands = app.update(key(KeyCode::Down));
        assert_eq!(
            commands,
            vec![
                Command::LoadTasks { project_id: 2 },
                Command::LoadProjectNotes { project_id: 2 },
            ]
        );
        // Task selection resets when the new list lands.
        app.update(Message::TasksLoaded(vec![entry(10, "t", 0)]));
        assert_eq!(app.selected_task, 0);
    }

    #[test]
    fn selection_clamps_at_list_edges() {
        let mut app = app_with_projects(vec![project(1, "A"), project(2, "B")]);
        assert!(app.update(key(KeyCode::Up)).is_empty());
        app.update(key(KeyCode::Down));
        assert!(app.update(key(KeyCode::Down)).is_empty());
        assert_eq!(app.selected_project, 1);
    }

    #[test]
    fn tasks_loaded_selects_first_and_loads_its_notes() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        let commands = app.update(Message::TasksLoaded(vec![
            entry(10, "a", 0),
            entry(11, "b", 1),
        ]));
        assert_eq!(app.selected_task, 0);
        assert_eq!(commands, vec![Command::LoadTaskNotes { task_id: 10 }]);
    }

    #[test]
    fn empty_tasks_load_clears_notes_without_a_note_load() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        app.update(Message::NotesLoaded {
            notes: Vec::new(),
            context: NoteContext::Project,
        });
        let commands = app.update(Message::TasksLoaded(Vec::new()));
        assert!(commands.is_empty());
        assert!(app.notes.is_empty());
    }

    #[test]
    fn toggle_preserves_title_and_priority() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        app.update(Message::TasksLoaded(vec![entry(10, "keep me", 0)]));
        app.panel = Panel::Tasks;
        let commands = app.update(key(KeyCode::Char(' ')));
        assert_eq!(
            commands,
            vec![Command::UpdateTask {
                id: 10,
                title: "keep me".into(),
                priority: 2,
                completed: true,
                description: None,
            }]
        );
    }

    #[test]
    fn toggle_outside_tasks_panel_is_a_no_op() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        app.update(Message::TasksLoaded(vec![entry(10, "t", 0)]));
        assert!(app.update(key(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn form_escape_issues_nothing_and_returns_to_normal() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        app.update(key(KeyCode::Char('n')));
        assert!(matches!(app.mode, Mode::Form(_)));
        let commands = app.update(key(KeyCode::Esc));
        assert!(commands.is_empty());
        assert!(matches!(app.mode, Mode::Normal));
    }

    #[test]
    fn empty_title_submit_issues_nothing_and_stays_active() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        app.panel = Panel::Tasks;
        app.update(key(KeyCode::Char('n')));
        let commands = app.update(key(KeyCode::Enter));
        assert!(commands.is_empty());
        assert!(matches!(app.mode, Mode::Form(_)));
    }

    #[test]
    fn create_task_form_submits_with_typed_title() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        app.panel = Panel::Tasks;
        app.update(key(KeyCode::Char('n')));
        for c in "fix".chars() {
            app.update(key(KeyCode::Char(c)));
        }
        let commands = app.update(key(KeyCode::Enter));
        assert_eq!(
            commands,
            vec![Command::CreateTask {
                project_id: 1,
                parent_task_id: None,
                title: "fix".into(),
                description: None,
                priority: 0,
            }]
        );
        // Form stays open until the result message arrives.
        assert!(matches!(app.mode, Mode::Form(_)));
        let follow_up = app.update(Message::TaskSaved(Some(entry(10, "fix", 0).task)));
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(follow_up, vec![Command::LoadTasks { project_id: 1 }]);
    }

    #[test]
    fn subtask_form_records_selected_task_as_parent() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        app.update(Message::TasksLoaded(vec![entry(10, "parent", 0)]));
        app.panel = Panel::Tasks;
        app.update(key(KeyCode::Char('s')));
        assert_eq!(app.pending_parent, Some(10));
        app.update(key(KeyCode::Char('x')));
        let commands = app.update(key(KeyCode::Enter));
        assert_eq!(
            commands,
            vec![Command::CreateTask {
                project_id: 1,
                parent_task_id: Some(10),
                title: "x".into(),
                description: None,
                priority: 0,
            }]
        );
    }

    #[test]
    fn deleting_the_only_project_clears_everything() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        app.update(Message::TasksLoaded(vec![entry(10, "t", 0)]));
        let commands = app.update(key(KeyCode::Char('d')));
        assert_eq!(commands, vec![Command::DeleteProject { id: 1 }]);
        let commands = app.update(Message::ProjectDeleted(true));
        assert_eq!(commands, vec![Command::LoadProjects]);
        app.update(Message::ProjectsLoaded(Vec::new()));
        assert!(app.projects.is_empty());
        assert!(app.tasks.is_empty());
        assert!(app.notes.is_empty());
        assert_eq!(app.selected_project, 0);
    }

    #[test]
    fn failed_mutation_changes_nothing() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        app.update(key(KeyCode::Char('n')));
        assert!(app.update(Message::ProjectSaved(None)).is_empty());
        assert!(matches!(app.mode, Mode::Form(_)));
    }

    #[test]
    fn panel_cycling_wraps_both_ways() {
        let mut app = App::new();
        app.update(key(KeyCode::BackTab));
        assert_eq!(app.panel, Panel::Drafts);
        app.update(key(KeyCode::Tab));
        assert_eq!(app.panel, Panel::Projects);
    }

    #[test]
    fn digit_keys_jump_to_panels() {
        let mut app = App::new();
        app.update(key(KeyCode::Char('4')));
        assert_eq!(app.panel, Panel::Details);
        app.update(key(KeyCode::Char('1')));
        assert_eq!(app.panel, Panel::Projects);
    }

    #[test]
    fn any_key_dismisses_help() {
        let mut app = App::new();
        app.update(key(KeyCode::Char('?')));
        assert!(matches!(app.mode, Mode::Help));
        app.update(key(KeyCode::Char('z')));
        assert!(matches!(app.mode, Mode::Normal));
    }

    #[test]
    fn note_created_reloads_current_context() {
        let mut app = app_with_projects(vec![project(1, "A")]);
        app.update(Message::TasksLoaded(vec![entry(10, "t", 0)]));
        app.update(Message::NotesLoaded {
            notes: Vec::new(),
            context: NoteContext::Task,
        });
        let note = Note {
            id: 1,
            project_id: None,
            task_id: Some(10),
            content: "n".into(),
            is_description: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let commands = app.update(Message::NoteSaved(Some(note)));
        assert_eq!(commands, vec![Command::LoadTaskNotes { task_id: 10 }]);
    }

    #[test]
    fn quit_keys_set_the_flag() {
        let mut app = App::new();
        app.update(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new();
        app.update(Message::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn archive_key_targets_selected_project() {
        let mut app = app_with_projects(vec![project(1, "A"), project(2, "B")]);
        app.update(key(KeyCode::Down));
        let commands = app.update(key(KeyCode::Char('a')));
        assert_eq!(commands, vec![Command::ArchiveProject { id: 2 }]);
        let commands = app.update(Message::ProjectArchived(true));
        assert_eq!(commands, vec![Command::LoadProjects]);
    }

    #[test]
    fn resize_updates_dimensions_only() {
        let mut app = App::new();
        assert!(app.update(Message::Resize(120, 40)).is_empty());
        assert_eq!((app.width, app.height), (120, 40));
    }
}
