use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    hint_bar_height: u16,
    status_bar_height: u16,
}

impl AppLayout {
    pub fn new() -> Self {
        Self {
            hint_bar_height: 3,
            status_bar_height: 3,
        }
    }

    /// Split the frame vertically into [terminal, hint bar, status bar].
    /// The hint bar chunk collapses to zero height when hidden.
    pub fn calculate_layout(&self, area: Rect, show_hint_bar: bool) -> Vec<Rect> {
        let hint_height = if show_hint_bar { self.hint_bar_height } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(hint_height),
                Constraint::Length(self.status_bar_height),
            ])
            .split(area);

        chunks.to_vec()
    }
}

impl Default for AppLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_takes_the_remaining_height() {
        let layout = AppLayout::new();
        let chunks = layout.calculate_layout(Rect::new(0, 0, 80, 30), true);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].height, 24);
        assert_eq!(chunks[1].height, 3);
        assert_eq!(chunks[2].height, 3);
    }

    #[test]
    fn hidden_hint_bar_collapses() {
        let layout = AppLayout::new();
        let chunks = layout.calculate_layout(Rect::new(0, 0, 80, 30), false);
        assert_eq!(chunks[0].height, 27);
        assert_eq!(chunks[1].height, 0);
    }
}
