//! Color constants for the terminal user interface.

use ratatui::style::Color;

// These brand the panels and the priority ladder; selection and completed
// styling reuse ratatui's named colors.

/// Border of the focused panel.
pub const ACCENT: Color = Color::Cyan;
/// Used for Low priority.
pub const DARK_GREEN: Color = Color::Rgb(0, 80, 0);
/// Used for High priority.
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Used for Urgent priority.
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
/// Used for description notes.
pub const DARK_PURPLE: Color = Color::Rgb(86, 60, 92);

/// Color for a task priority level.
pub fn priority_color(priority: i64) -> Color {
    match priority {
        1 => DARK_GREEN,
        2 => Color::Blue,
        3 => GOLD,
        4 => DARK_RED,
        _ => Color::DarkGray,
    }
}
