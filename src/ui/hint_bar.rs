use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::profile;
use crate::theme::Theme;

/// The quick-command badge row under the terminal: the same commands
/// the portfolio site offers as clickable chips.
pub struct HintBar {
    commands: Vec<&'static str>,
    selected: usize,
}

impl HintBar {
    pub fn new() -> Self {
        Self {
            commands: profile::QUICK_COMMANDS.to_vec(),
            selected: 0,
        }
    }

    pub fn selected_command(&self) -> &'static str {
        self.commands[self.selected]
    }

    pub fn next_badge(&mut self) {
        self.selected = (self.selected + 1) % self.commands.len();
    }

    pub fn previous_badge(&mut self) {
        if self.selected == 0 {
            self.selected = self.commands.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        if area.height == 0 {
            return;
        }

        // One bordered chip per command, sized to its label.
        let constraints: Vec<Constraint> = self
            .commands
            .iter()
            .map(|cmd| Constraint::Length(cmd.len() as u16 + 4))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (i, command) in self.commands.iter().enumerate() {
            let selected = focused && i == self.selected;
            let badge = Paragraph::new(format!(" {} ", command))
                .style(theme.hint_badge_style(selected))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.hint_border_style(selected)),
                );
            frame.render_widget(badge, chunks[i]);
        }
    }
}

impl Default for HintBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_first_badge() {
        let bar = HintBar::new();
        assert_eq!(bar.selected_command(), "help");
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut bar = HintBar::new();
        let count = profile::QUICK_COMMANDS.len();

        for _ in 0..count {
            bar.next_badge();
        }
        assert_eq!(bar.selected_command(), "help");

        bar.previous_badge();
        assert_eq!(bar.selected_command(), "clear");
    }
}
