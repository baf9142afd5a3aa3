pub mod color;
pub mod config;

use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub use color::{ColorPalette, HintBarColors, StatusBarColors, TerminalColors, ThemeColors};
pub use config::{ConfigError, ThemeConfig, UserPreferences};

use crate::shell::PROMPT_MARKER;

/// Main theme structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// The portfolio site's dark zinc-and-emerald look (default)
    pub fn portfolio_dark() -> Self {
        Self {
            name: "Portfolio Dark".to_string(),
            description: "Dark zinc theme with an emerald prompt".to_string(),
            colors: ThemeColors::portfolio_dark(),
        }
    }

    /// Light variant with the same accent
    pub fn portfolio_light() -> Self {
        Self {
            name: "Portfolio Light".to_string(),
            description: "Light zinc theme with an emerald prompt".to_string(),
            colors: ThemeColors::portfolio_light(),
        }
    }

    /// High contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            name: "High Contrast".to_string(),
            description: "High contrast theme for better accessibility".to_string(),
            colors: ThemeColors::high_contrast(),
        }
    }

    /// Style for one scrollback line. Echoed input (prompt-marker
    /// prefix) and handler output are distinguished by the leading
    /// string on the line itself.
    pub fn scrollback_line_style(&self, line: &str) -> Style {
        if line.starts_with(PROMPT_MARKER.trim_end()) {
            Style::default().fg(self.colors.terminal.echoed_input)
        } else {
            Style::default().fg(self.colors.terminal.output)
        }
    }

    pub fn prompt_style(&self) -> Style {
        Style::default()
            .fg(self.colors.terminal.prompt)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_style(&self) -> Style {
        Style::default().fg(self.colors.palette.text_primary)
    }

    /// Block cursor: inverse cell in the cursor color.
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.colors.palette.background)
            .bg(self.colors.terminal.cursor)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.palette.border_focused)
        } else {
            Style::default().fg(self.colors.palette.border)
        }
    }

    pub fn chrome_title_style(&self) -> Style {
        Style::default().fg(self.colors.terminal.chrome_title)
    }

    pub fn hint_badge_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.colors.hint_bar.selected_text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.hint_bar.text)
        }
    }

    pub fn hint_border_style(&self, selected: bool) -> Style {
        if selected {
            Style::default().fg(self.colors.hint_bar.selected_border)
        } else {
            Style::default().fg(self.colors.hint_bar.border)
        }
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default()
            .fg(self.colors.status_bar.text)
            .bg(self.colors.status_bar.background)
    }

    pub fn status_separator_style(&self) -> Style {
        Style::default().fg(self.colors.status_bar.separator)
    }

    pub fn background_style(&self) -> Style {
        Style::default().bg(self.colors.palette.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::portfolio_dark()
    }
}

/// Theme manager for handling the built-in themes and user preferences
#[derive(Debug)]
pub struct ThemeManager {
    themes: Vec<Theme>,
    current_theme: String,
    user_preferences: UserPreferences,
}

impl ThemeManager {
    pub fn new() -> Self {
        let themes = vec![
            Theme::portfolio_dark(),
            Theme::portfolio_light(),
            Theme::high_contrast(),
        ];

        Self {
            current_theme: themes[0].name.clone(),
            themes,
            user_preferences: UserPreferences::default(),
        }
    }

    /// Get the currently active theme
    pub fn current_theme(&self) -> &Theme {
        self.themes
            .iter()
            .find(|t| t.name == self.current_theme)
            .unwrap_or(&self.themes[0])
    }

    /// Switch to a different theme
    pub fn set_theme(&mut self, theme_name: &str) -> Result<(), String> {
        if self.themes.iter().any(|t| t.name == theme_name) {
            self.current_theme = theme_name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", theme_name))
        }
    }

    /// Get list of available themes
    pub fn available_themes(&self) -> Vec<&Theme> {
        self.themes.iter().collect()
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.user_preferences
    }

    /// Load user preferences from configuration
    pub fn load_preferences(&mut self, config: &ThemeConfig) {
        self.user_preferences = config.user_preferences.clone();
        if let Some(theme_name) = &config.current_theme {
            if let Err(e) = self.set_theme(theme_name) {
                tracing::warn!("{}, keeping '{}'", e, self.current_theme);
            }
        }
    }

    /// Snapshot the current selection and preferences for saving
    pub fn save_config(&self) -> ThemeConfig {
        ThemeConfig {
            current_theme: Some(self.current_theme.clone()),
            user_preferences: self.user_preferences.clone(),
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
