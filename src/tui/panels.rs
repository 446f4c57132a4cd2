//! The five-panel grid and its list renderers.
//!
//! Left column stacks Projects, Tasks, and Notes; the middle shows details
//! for whichever of those the user is focused on; the right column holds the
//! drafts scratch area. Rendering reads the application state and never
//! mutates it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::models::format_priority;
use crate::tui::app::{App, Mode, Panel};
use crate::tui::colors::{priority_color, ACCENT, DARK_PURPLE};
use crate::tui::message::NoteContext;
use crate::tui::overlay;

/// Draw one full frame: the grid, the status bar, and any active overlay.
pub fn render(app: &App, f: &mut Frame) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let [projects, tasks, notes, details, drafts] = grid_areas(outer[0]);
    render_projects(app, f, projects);
    render_tasks(app, f, tasks);
    render_notes(app, f, notes);
    render_details(app, f, details);
    render_drafts(app, f, drafts);
    overlay::render_status_bar(app, f, outer[1]);

    match &app.mode {
        Mode::Help => overlay::render_help(f),
        Mode::Form(form) => overlay::render_form(form, f),
        Mode::Normal => {}
    }
}

/// Panel rects in `Panel::ALL` order: 40% left column split 30/40/30 into
/// Projects/Tasks/Notes, 40% Details, remainder Drafts.
fn grid_areas(area: Rect) -> [Rect; 5] {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Min(0),
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(columns[0]);

    [left[0], left[1], left[2], columns[1], columns[2]]
}

/// Bordered block for a panel, accented when focused.
fn panel_block(app: &App, panel: Panel) -> Block<'static> {
    let title = format!(" {} [{}] ", panel.title(), panel.index() + 1);
    let border = if app.panel == panel {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn selected_list_state(index: usize, len: usize) -> ListState {
    let mut state = ListState::default();
    if len > 0 {
        state.select(Some(index.min(len - 1)));
    }
    state
}

fn subtle(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn render_projects(app: &App, f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .projects
        .iter()
        .map(|p| ListItem::new(p.name.clone()))
        .collect();
    let list = List::new(items)
        .block(panel_block(app, Panel::Projects))
        .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
        .highlight_symbol(">> ");
    let mut state = selected_list_state(app.selected_project, app.projects.len());
    f.render_stateful_widget(list, area, &mut state);
}

fn render_tasks(app: &App, f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .map(|entry| {
            let check = if entry.task.completed { "[✓]" } else { "[ ]" };
            let indent = if entry.depth == 0 {
                String::new()
            } else {
                format!("{}└─ ", "  ".repeat(entry.depth - 1))
            };
            let style = if entry.task.completed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(priority_color(entry.task.priority))
            };
            ListItem::new(format!("{indent}{check} {}", entry.task.title)).style(style)
        })
        .collect();
    let list = List::new(items)
        .block(panel_block(app, Panel::Tasks))
        .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
        .highlight_symbol(">> ");
    let mut state = selected_list_state(app.selected_task, app.tasks.len());
    f.render_stateful_widget(list, area, &mut state);
}

fn render_notes(app: &App, f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .notes
        .iter()
        .map(|note| {
            let style = if note.is_description {
                Style::default().fg(DARK_PURPLE).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("• {}", note.content)).style(style)
        })
        .collect();
    let context = match app.note_context {
        NoteContext::Project => "project",
        NoteContext::Task => "task",
    };
    let list = List::new(items).block(
        panel_block(app, Panel::Notes).title_bottom(Line::from(format!(" {context} notes "))),
    );
    f.render_widget(list, area);
}

/// Details follow the focused panel: project details while Projects is
/// active, task details while Tasks is active, a hint otherwise.
fn render_details(app: &App, f: &mut Frame, area: Rect) {
    let lines = match app.panel {
        Panel::Projects => project_detail_lines(app),
        Panel::Tasks => task_detail_lines(app),
        _ => vec![subtle("Select a project or task to view details")],
    };
    let detail = Paragraph::new(lines)
        .block(panel_block(app, Panel::Details))
        .wrap(Wrap { trim: false });
    f.render_widget(detail, area);
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
}

fn project_detail_lines(app: &App) -> Vec<Line<'static>> {
    let Some(project) = app.selected_project() else {
        return vec![subtle("No project selected")];
    };
    let mut lines = vec![
        Line::from(Span::styled(
            project.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    if let Some(description) = &project.description {
        lines.push(Line::from(label("Description:")));
        lines.push(Line::from(description.clone()));
        lines.push(Line::default());
    }
    if let Some(due) = project.due_date {
        lines.push(Line::from(vec![
            label("Due Date: "),
            Span::raw(due.format("%Y-%m-%d").to_string()),
        ]));
    }
    lines.push(Line::from(vec![
        label("Status: "),
        if project.archived {
            Span::styled("Archived", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled("Active", Style::default().fg(Color::Green))
        },
    ]));
    lines.push(Line::from(vec![
        label("Created: "),
        Span::raw(project.created_at.format("%Y-%m-%d").to_string()),
    ]));
    lines
}

fn task_detail_lines(app: &App) -> Vec<Line<'static>> {
    let Some(entry) = app.selected_task() else {
        return vec![subtle("No task selected")];
    };
    let task = &entry.task;
    let mut lines = vec![
        Line::from(Span::styled(
            task.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            label("Status: "),
            if task.completed {
                Span::styled("[✓] Completed", Style::default().fg(Color::Green))
            } else {
                Span::raw("[ ] Incomplete")
            },
        ]),
        Line::from(vec![
            label("Priority: "),
            Span::styled(
                format_priority(task.priority),
                Style::default().fg(priority_color(task.priority)),
            ),
        ]),
    ];
    // Notes in state only belong to this task once a task-note load landed.
    if app.note_context == NoteContext::Task {
        if let Some(description) = app.notes.iter().find(|n| n.is_description) {
            lines.push(Line::default());
            lines.push(Line::from(label("Description:")));
            lines.push(Line::from(description.content.clone()));
        }
        let extra: Vec<&crate::models::Note> =
            app.notes.iter().filter(|n| !n.is_description).collect();
        if !extra.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Notes ({}):", extra.len()),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for note in extra {
                lines.push(Line::from(format!("• {}", note.content)));
            }
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        label("Created: "),
        Span::raw(task.created_at.format("%Y-%m-%d").to_string()),
    ]));
    lines
}

fn render_drafts(app: &App, f: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new(Span::styled(
        "Scratch space",
        Style::default().fg(Color::DarkGray),
    ))
    .block(panel_block(app, Panel::Drafts));
    f.render_widget(placeholder, area);
}
