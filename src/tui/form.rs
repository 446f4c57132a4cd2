//! Modal form sessions for creating and editing projects, tasks, and notes.
//!
//! A session is a fixed, ordered list of labeled text fields with one focused
//! field. Field focus cycles with tab/shift-tab; every other keystroke goes to
//! the focused field's editor. Submit/cancel live in the state machine, not
//! here.

use crossterm::event::KeyCode;

use crate::models::{Note, Project, Task};
use crate::tui::input::InputField;

/// Field order for project forms.
pub const PROJECT_NAME: usize = 0;
pub const PROJECT_DESCRIPTION: usize = 1;

/// Field order for task forms.
pub const TASK_TITLE: usize = 0;
pub const TASK_DESCRIPTION: usize = 1;
pub const TASK_PRIORITY: usize = 2;

/// Field order for note forms.
pub const NOTE_CONTENT: usize = 0;

/// Which create/edit interaction this session drives. Edit variants carry the
/// id of the entity being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    CreateProject,
    EditProject(i64),
    CreateTask,
    EditTask(i64),
    CreateNote,
}

/// One labeled text field.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: InputField,
}

impl FormField {
    fn empty(label: &'static str, placeholder: &'static str) -> Self {
        FormField {
            label,
            placeholder,
            input: InputField::new(),
        }
    }

    fn prefilled(label: &'static str, placeholder: &'static str, value: &str) -> Self {
        FormField {
            label,
            placeholder,
            input: InputField::with_value(value),
        }
    }
}

/// An in-progress create/edit interaction.
#[derive(Debug, Clone)]
pub struct FormSession {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl FormSession {
    pub fn create_project() -> Self {
        FormSession {
            kind: FormKind::CreateProject,
            fields: vec![
                FormField::empty("Name:", "Project name"),
                FormField::empty("Description:", "Description (optional)"),
            ],
            focused: 0,
        }
    }

    pub fn edit_project(project: &Project) -> Self {
        FormSession {
            kind: FormKind::EditProject(project.id),
            fields: vec![
                FormField::prefilled("Name:", "Project name", &project.name),
                FormField::prefilled(
                    "Description:",
                    "Description (optional)",
                    project.description.as_deref().unwrap_or(""),
                ),
            ],
            focused: 0,
        }
    }

    /// Create-task form, used for both top-level tasks and subtasks; the
    /// pending parent lives on the application state.
    pub fn create_task() -> Self {
        FormSession {
            kind: FormKind::CreateTask,
            fields: vec![
                FormField::empty("Title:", "Task title"),
                FormField::empty("Description:", "Description (optional)"),
                FormField::prefilled("Priority:", "0=None 1=Low 2=Medium 3=High 4=Urgent", "0"),
            ],
            focused: 0,
        }
    }

    /// Edit form pre-filled from the task; the description comes from the
    /// task's description-flagged note when one is loaded.
    pub fn edit_task(task: &Task, notes: &[Note]) -> Self {
        let description = notes
            .iter()
            .find(|n| n.is_description)
            .map(|n| n.content.as_str())
            .unwrap_or("");
        FormSession {
            kind: FormKind::EditTask(task.id),
            fields: vec![
                FormField::prefilled("Title:", "Task title", &task.title),
                FormField::prefilled("Description:", "Description (optional)", description),
                FormField::prefilled(
                    "Priority:",
                    "0=None 1=Low 2=Medium 3=High 4=Urgent",
                    &task.priority.to_string(),
                ),
            ],
            focused: 0,
        }
    }

    pub fn create_note() -> Self {
        FormSession {
            kind: FormKind::CreateNote,
            fields: vec![FormField::empty("Content:", "Note content")],
            focused: 0,
        }
    }

    /// Focus the next field, wrapping past the end.
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    /// Focus the previous field, wrapping past the start.
    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    /// Forward an editing keystroke to the focused field.
    pub fn handle_key(&mut self, code: KeyCode) {
        self.fields[self.focused].input.handle_key(code);
    }

    /// Trimmed text of field `index`.
    pub fn value(&self, index: usize) -> &str {
        self.fields[index].input.value.trim()
    }

    /// Trimmed text of field `index`, or `None` when blank.
    pub fn optional_value(&self, index: usize) -> Option<&str> {
        let v = self.value(index);
        (!v.is_empty()).then_some(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_task() -> Task {
        let now = Utc::now();
        Task {
            id: 7,
            project_id: 1,
            parent_task_id: None,
            title: "Ship it".into(),
            priority: 3,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn description_note(content: &str) -> Note {
        let now = Utc::now();
        Note {
            id: 1,
            project_id: None,
            task_id: Some(7),
            content: content.into(),
            is_description: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn focus_cycles_in_both_directions() {
        let mut form = FormSession::create_task();
        assert_eq!(form.focused, 0);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused, TASK_PRIORITY);
        form.focus_next();
        assert_eq!(form.focused, TASK_TITLE);
        form.focus_prev();
        assert_eq!(form.focused, TASK_PRIORITY);
    }

    #[test]
    fn edit_task_prefills_title_priority_and_description_note() {
        let notes = vec![description_note("why we do this")];
        let form = FormSession::edit_task(&sample_task(), &notes);
        assert_eq!(form.value(TASK_TITLE), "Ship it");
        assert_eq!(form.value(TASK_DESCRIPTION), "why we do this");
        assert_eq!(form.value(TASK_PRIORITY), "3");
    }

    #[test]
    fn edit_task_without_description_note_leaves_field_empty() {
        let form = FormSession::edit_task(&sample_task(), &[]);
        assert_eq!(form.optional_value(TASK_DESCRIPTION), None);
    }

    #[test]
    fn keystrokes_land_in_the_focused_field() {
        let mut form = FormSession::create_project();
        form.handle_key(KeyCode::Char('a'));
        form.focus_next();
        form.handle_key(KeyCode::Char('b'));
        assert_eq!(form.value(PROJECT_NAME), "a");
        assert_eq!(form.value(PROJECT_DESCRIPTION), "b");
    }
}
