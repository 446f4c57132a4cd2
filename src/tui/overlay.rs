//! Status bar and the modal overlays (help, forms).

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::{App, Mode, Panel};
use crate::tui::colors::ACCENT;
use crate::tui::form::{FormKind, FormSession};
use crate::tui::utils::centered_rect;

/// One-line bar at the bottom: focused panel, context key hints, help chip.
pub fn render_status_bar(app: &App, f: &mut Frame, area: Rect) {
    let hints = match &app.mode {
        Mode::Form(_) => "Editing...",
        Mode::Help => "Press any key to close",
        Mode::Normal => match app.panel {
            Panel::Projects => "n:New  e:Edit  d:Delete  a:Archive  ↑↓:Navigate  Tab:Switch",
            Panel::Tasks => "n:New  s:Subtask  e:Edit  d:Delete  Space:Toggle  ↑↓:Navigate",
            Panel::Notes => "n:New Note  Tab:Switch Sections",
            _ => "Tab:Switch Sections  ?:Help  q:Quit",
        },
    };
    let bar = Line::from(vec![
        Span::styled(
            format!(" {} ", app.panel.title()),
            Style::default()
                .bg(ACCENT)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(" ? Help ", Style::default().bg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(bar), area);
}

/// Full keybinding reference, shown over the grid until any key is pressed.
pub fn render_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
    };
    let lines = vec![
        section("Navigation"),
        Line::from("  ↑/k ↓/j     Move selection"),
        Line::from("  Tab/S-Tab   Cycle panels"),
        Line::from("  1-5         Jump to panel"),
        Line::default(),
        section("Projects"),
        Line::from("  n  New project    e  Edit    d  Delete    a  Archive"),
        Line::default(),
        section("Tasks"),
        Line::from("  n  New task       s  New subtask"),
        Line::from("  e  Edit           d  Delete"),
        Line::from("  Space/Enter  Toggle completion"),
        Line::default(),
        section("Notes"),
        Line::from("  n  New note for the current project or task"),
        Line::default(),
        section("General"),
        Line::from("  ?  Help    q / Ctrl+C  Quit"),
        Line::default(),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Help "),
    );
    f.render_widget(help, area);
}

fn form_title(kind: FormKind) -> &'static str {
    match kind {
        FormKind::CreateProject => " Create New Project ",
        FormKind::EditProject(_) => " Edit Project ",
        FormKind::CreateTask => " Create New Task ",
        FormKind::EditTask(_) => " Edit Task ",
        FormKind::CreateNote => " Create New Note ",
    }
}

/// The active form, drawn centered over the grid with one box per field.
pub fn render_form(form: &FormSession, f: &mut Frame) {
    let frame_area = f.area();
    let height = (form.fields.len() as u16 * 3 + 4).min(frame_area.height);
    let horizontal = centered_rect(60, 100, frame_area);
    let area = Rect {
        x: horizontal.x,
        y: frame_area.y + frame_area.height.saturating_sub(height) / 2,
        width: horizontal.width,
        height,
    };
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(form_title(form.kind));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form.fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focused;
        let border = if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text = if field.input.value.is_empty() && !focused {
            Span::styled(field.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(field.input.value.as_str())
        };
        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(field.label),
        );
        f.render_widget(input, rows[i]);
        if focused {
            f.set_cursor_position((cursor_x(rows[i], field.input.cursor), rows[i].y + 1));
        }
    }

    let hint = Paragraph::new(Span::styled(
        "Tab/Shift+Tab: Switch fields • Enter: Submit • Esc: Cancel",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(hint, rows[form.fields.len()]);
}

/// Screen column for the cursor inside a bordered field box, clamped to the
/// box so a value longer than the box cannot push the cursor outside it.
fn cursor_x(area: Rect, cursor: usize) -> u16 {
    let x = area.x as usize + 1 + cursor;
    let max = area.right().saturating_sub(2) as usize;
    x.min(max).max(area.x as usize) as u16
}
