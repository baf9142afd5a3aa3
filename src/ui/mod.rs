pub mod hint_bar;
pub mod layout;
pub mod status_bar;
pub mod terminal_view;

use ratatui::{widgets::Block, Frame};

use crate::profile;
use crate::shell::Session;
use crate::theme::{ThemeConfig, ThemeManager};

use self::{
    hint_bar::HintBar,
    layout::AppLayout,
    status_bar::{ClockSegment, NavigationHintsSegment, ShellStatusSegment, StatusBar, StatusSegment},
    terminal_view::TerminalView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Terminal,
    HintBar,
}

pub struct UI {
    focused_pane: FocusedPane,
    terminal_view: TerminalView,
    hint_bar: HintBar,
    status_bar: StatusBar,
    layout: AppLayout,
    theme_manager: ThemeManager,
}

impl UI {
    pub fn new() -> Self {
        Self::from_config(&ThemeConfig::default())
    }

    /// Build the UI with the persisted theme selection and preferences
    /// applied.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme_manager = ThemeManager::new();
        theme_manager.load_preferences(config);

        let preferences = theme_manager.preferences();
        let prompt_label = preferences
            .prompt_override
            .clone()
            .unwrap_or_else(|| profile::PROMPT_LABEL.to_string());
        let terminal_view = TerminalView::new(prompt_label, !preferences.reduce_motion);

        Self {
            focused_pane: FocusedPane::Terminal,
            terminal_view,
            hint_bar: HintBar::new(),
            status_bar: StatusBar::new(),
            layout: AppLayout::new(),
            theme_manager,
        }
    }

    pub fn focused_pane(&self) -> FocusedPane {
        self.focused_pane
    }

    pub fn focus_terminal(&mut self) {
        self.focused_pane = FocusedPane::Terminal;
    }

    /// Cycle focus. With the hint bar hidden the terminal keeps focus.
    pub fn next_pane(&mut self) {
        if !self.theme_manager.preferences().show_hint_bar {
            self.focused_pane = FocusedPane::Terminal;
            return;
        }
        self.focused_pane = match self.focused_pane {
            FocusedPane::Terminal => FocusedPane::HintBar,
            FocusedPane::HintBar => FocusedPane::Terminal,
        };
    }

    pub fn previous_pane(&mut self) {
        // Two panes, so backwards is the same hop.
        self.next_pane();
    }

    pub fn terminal_view(&self) -> &TerminalView {
        &self.terminal_view
    }

    pub fn terminal_view_mut(&mut self) -> &mut TerminalView {
        &mut self.terminal_view
    }

    pub fn hint_bar(&self) -> &HintBar {
        &self.hint_bar
    }

    pub fn hint_bar_mut(&mut self) -> &mut HintBar {
        &mut self.hint_bar
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn theme_manager_mut(&mut self) -> &mut ThemeManager {
        &mut self.theme_manager
    }

    pub fn render(&mut self, frame: &mut Frame, session: &Session) {
        let show_hint_bar = self.theme_manager.preferences().show_hint_bar;
        let theme = self.theme_manager.current_theme();
        let chunks = self.layout.calculate_layout(frame.size(), show_hint_bar);

        frame.render_widget(Block::default().style(theme.background_style()), frame.size());

        self.terminal_view.render(
            frame,
            chunks[0],
            session,
            theme,
            self.focused_pane == FocusedPane::Terminal,
        );

        if show_hint_bar {
            self.hint_bar.render(
                frame,
                chunks[1],
                theme,
                self.focused_pane == FocusedPane::HintBar,
            );
        }

        let shell_segment = ShellStatusSegment {
            commands_run: session.commands_run(),
            scrollback_lines: session.scrollback().len(),
            clear_pending: session.clear_pending(),
        };
        let clock_segment = ClockSegment;
        let nav_segment = NavigationHintsSegment {
            focused: self.focused_pane,
        };
        let segments: Vec<&dyn StatusSegment> = vec![&shell_segment, &clock_segment, &nav_segment];
        self.status_bar.render(frame, chunks[2], theme, &segments);
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}
