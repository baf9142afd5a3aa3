use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::Theme;
use crate::ui::FocusedPane;

/// Trait for status bar segments that can be rendered
pub trait StatusSegment {
    /// Get the content to display in this segment
    fn content(&self) -> String;

    /// Get the minimum width required for this segment
    fn min_width(&self) -> u16 {
        self.content().len() as u16
    }

    /// Get the priority of this segment (higher = more important)
    fn priority(&self) -> u8;

    /// Whether this segment should be visible
    fn is_visible(&self) -> bool {
        true
    }
}

/// Shell activity: commands run, transcript length, pending clear.
#[derive(Debug, Clone)]
pub struct ShellStatusSegment {
    pub commands_run: usize,
    pub scrollback_lines: usize,
    pub clear_pending: bool,
}

impl StatusSegment for ShellStatusSegment {
    fn content(&self) -> String {
        let mut content = format!(
            "{} commands · {} lines",
            self.commands_run, self.scrollback_lines
        );
        if self.clear_pending {
            content.push_str(" · ⟳ clearing");
        }
        content
    }

    fn priority(&self) -> u8 {
        200
    }
}

/// Key hints for the currently focused pane.
#[derive(Debug, Clone)]
pub struct NavigationHintsSegment {
    pub focused: FocusedPane,
}

impl StatusSegment for NavigationHintsSegment {
    fn content(&self) -> String {
        match self.focused {
            FocusedPane::Terminal => "Enter run · Tab badges · Esc quit".to_string(),
            FocusedPane::HintBar => "←/→ select · Enter run · Tab terminal".to_string(),
        }
    }

    fn priority(&self) -> u8 {
        100
    }
}

/// Local wall-clock time.
#[derive(Debug, Clone)]
pub struct ClockSegment;

impl StatusSegment for ClockSegment {
    fn content(&self) -> String {
        chrono::Local::now().format("%H:%M").to_string()
    }

    fn priority(&self) -> u8 {
        150
    }
}

/// The bottom bar. Segments are dropped lowest-priority-first when the
/// frame is too narrow for all of them.
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        segments: &[&dyn StatusSegment],
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let contents = Self::fit_segments(segments, inner.width);

        let mut spans: Vec<Span> = Vec::new();
        for (i, content) in contents.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", theme.status_separator_style()));
            }
            spans.push(Span::styled(content.clone(), theme.status_bar_style()));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(theme.status_bar_style()),
            inner,
        );
    }

    /// Keep segments in declaration order, dropping the lowest-priority
    /// ones until the remainder fits.
    fn fit_segments(segments: &[&dyn StatusSegment], width: u16) -> Vec<String> {
        const SEPARATOR_WIDTH: u16 = 3;

        let mut kept: Vec<&&dyn StatusSegment> =
            segments.iter().filter(|s| s.is_visible()).collect();

        loop {
            let total: u16 = kept.iter().map(|s| s.min_width()).sum::<u16>()
                + SEPARATOR_WIDTH * kept.len().saturating_sub(1) as u16;
            if total <= width || kept.len() <= 1 {
                break;
            }
            if let Some(pos) = kept
                .iter()
                .enumerate()
                .min_by_key(|(_, s)| s.priority())
                .map(|(pos, _)| pos)
            {
                kept.remove(pos);
            }
        }

        kept.iter().map(|s| s.content()).collect()
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
