//! Layout definitions for the TUI
//!
//! The app uses a single-column layout in the shape of the phone screens
//! it reproduces: header, content, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Screen title header
    pub header: Rect,
    /// Main content area
    pub content: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from the available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            content: vertical[1],
            status_bar: vertical[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_tile_the_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.content.height, 20);
        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.content.y, 3);
        assert_eq!(layout.status_bar.y, 23);
    }
}
