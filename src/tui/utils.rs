//! Small layout helpers shared by the renderers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A rect centered in `r`, sized as percentages of it. Used for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_the_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, parent);
        assert!(inner.x >= parent.x && inner.y >= parent.y);
        assert!(inner.right() <= parent.right());
        assert!(inner.bottom() <= parent.bottom());
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
    }
}
