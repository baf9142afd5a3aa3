use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::time::{Duration, Instant};

use crate::shell::Session;
use crate::theme::Theme;

const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// The transcript pane: scrollback history, the prompt line with the
/// live input buffer, and the window chrome from the portfolio site
/// (traffic dots, `skills.terminal`, `bash`).
pub struct TerminalView {
    prompt_label: String,
    scroll_offset: usize,
    cursor_visible: bool,
    last_blink: Instant,
    blink_enabled: bool,
}

impl TerminalView {
    pub fn new(prompt_label: String, blink_enabled: bool) -> Self {
        Self {
            prompt_label,
            scroll_offset: 0,
            cursor_visible: true,
            last_blink: Instant::now(),
            blink_enabled,
        }
    }

    /// Toggle the block cursor on the blink cadence. With blinking
    /// disabled the cursor stays solid.
    pub fn advance_blink(&mut self, now: Instant) {
        if !self.blink_enabled {
            self.cursor_visible = true;
            return;
        }
        if now.duration_since(self.last_blink) >= CURSOR_BLINK_INTERVAL {
            self.cursor_visible = !self.cursor_visible;
            self.last_blink = now;
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Jump back to the live tail of the transcript.
    pub fn snap_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        session: &Session,
        theme: &Theme,
        focused: bool,
    ) {
        let chrome = Line::from(vec![
            Span::styled("● ", Style::default().fg(theme.colors.palette.error)),
            Span::styled("● ", Style::default().fg(theme.colors.palette.warning)),
            Span::styled("● ", Style::default().fg(theme.colors.palette.success)),
            Span::styled(" skills.terminal ", theme.chrome_title_style()),
            Span::styled("· bash ", theme.chrome_title_style()),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused))
            .title(chrome);

        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let mut lines: Vec<Line> = session
            .scrollback()
            .iter()
            .map(|text| Line::from(Span::styled(text.clone(), theme.scrollback_line_style(text))))
            .collect();
        lines.push(self.prompt_line(session, theme));

        // Window the transcript so the tail stays visible, minus any
        // manual scroll offset.
        let height = inner.height as usize;
        let max_offset = lines.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
        let start = lines.len().saturating_sub(height + self.scroll_offset);
        let end = lines.len() - self.scroll_offset;
        let visible: Vec<Line> = lines[start..end].to_vec();

        frame.render_widget(Paragraph::new(visible), inner);
    }

    fn prompt_line(&self, session: &Session, theme: &Theme) -> Line<'static> {
        let cursor = if self.cursor_visible {
            Span::styled(" ", theme.cursor_style())
        } else {
            Span::raw(" ")
        };

        Line::from(vec![
            Span::styled(self.prompt_label.clone(), theme.prompt_style()),
            Span::raw(" "),
            Span::styled(session.input().to_string(), theme.input_style()),
            cursor,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blink_toggles_on_the_interval() {
        let mut view = TerminalView::new("$".to_string(), true);
        assert!(view.cursor_visible);

        // Not yet due.
        view.advance_blink(Instant::now());
        assert!(view.cursor_visible);

        view.advance_blink(Instant::now() + CURSOR_BLINK_INTERVAL);
        assert!(!view.cursor_visible);
    }

    #[test]
    fn reduce_motion_pins_the_cursor_on() {
        let mut view = TerminalView::new("$".to_string(), false);
        view.advance_blink(Instant::now() + CURSOR_BLINK_INTERVAL * 3);
        assert!(view.cursor_visible);
    }

    #[test]
    fn scrolling_never_underflows() {
        let mut view = TerminalView::new("$".to_string(), true);
        view.scroll_down(5);
        assert_eq!(view.scroll_offset, 0);
        view.scroll_up(3);
        view.snap_to_bottom();
        assert_eq!(view.scroll_offset, 0);
    }
}
