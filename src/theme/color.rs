use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Base color palette shared by every component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub selection_text: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Special purpose colors
    pub accent: Color,
}

/// Complete theme color scheme: the palette plus per-component colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub palette: ColorPalette,

    // Component-specific colors
    pub terminal: TerminalColors,
    pub hint_bar: HintBarColors,
    pub status_bar: StatusBarColors,
}

/// Colors for the terminal transcript and input line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalColors {
    pub prompt: Color,
    pub echoed_input: Color,
    pub output: Color,
    pub cursor: Color,
    pub chrome_title: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintBarColors {
    pub text: Color,
    pub border: Color,
    pub selected_text: Color,
    pub selected_border: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarColors {
    pub background: Color,
    pub text: Color,
    pub separator: Color,
}

impl ThemeColors {
    /// The portfolio site's dark look: zinc grays with an emerald prompt.
    pub fn portfolio_dark() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(24, 24, 27),
            foreground: Color::Rgb(212, 212, 216),
            surface: Color::Rgb(9, 9, 11),

            text_primary: Color::Rgb(212, 212, 216),
            text_secondary: Color::Rgb(161, 161, 170),
            text_muted: Color::Rgb(113, 113, 122),

            border: Color::Rgb(39, 39, 42),
            border_focused: Color::Rgb(16, 185, 129),
            selection: Color::Rgb(16, 185, 129),
            selection_text: Color::Rgb(9, 9, 11),

            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(234, 179, 8),
            error: Color::Rgb(239, 68, 68),

            accent: Color::Rgb(16, 185, 129),
        };

        Self {
            terminal: TerminalColors {
                prompt: palette.accent,
                echoed_input: palette.accent,
                output: palette.text_primary,
                cursor: palette.text_primary,
                chrome_title: palette.text_muted,
            },
            hint_bar: HintBarColors {
                text: palette.text_secondary,
                border: Color::Rgb(63, 63, 70),
                selected_text: palette.accent,
                selected_border: palette.accent,
            },
            status_bar: StatusBarColors {
                background: palette.surface,
                text: palette.text_secondary,
                separator: palette.text_muted,
            },
            palette,
        }
    }

    /// Light counterpart with the same emerald accent.
    pub fn portfolio_light() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(39, 39, 42),
            surface: Color::Rgb(228, 228, 231),

            text_primary: Color::Rgb(39, 39, 42),
            text_secondary: Color::Rgb(82, 82, 91),
            text_muted: Color::Rgb(161, 161, 170),

            border: Color::Rgb(212, 212, 216),
            border_focused: Color::Rgb(5, 150, 105),
            selection: Color::Rgb(5, 150, 105),
            selection_text: Color::Rgb(250, 250, 250),

            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(220, 38, 38),

            accent: Color::Rgb(5, 150, 105),
        };

        Self {
            terminal: TerminalColors {
                prompt: palette.accent,
                echoed_input: palette.accent,
                output: palette.text_primary,
                cursor: palette.text_primary,
                chrome_title: palette.text_muted,
            },
            hint_bar: HintBarColors {
                text: palette.text_secondary,
                border: Color::Rgb(161, 161, 170),
                selected_text: palette.accent,
                selected_border: palette.accent,
            },
            status_bar: StatusBarColors {
                background: palette.surface,
                text: palette.text_secondary,
                separator: palette.text_muted,
            },
            palette,
        }
    }

    /// Pure black and white with maximum separation.
    pub fn high_contrast() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(0, 0, 0),
            foreground: Color::Rgb(255, 255, 255),
            surface: Color::Rgb(0, 0, 0),

            text_primary: Color::Rgb(255, 255, 255),
            text_secondary: Color::Rgb(255, 255, 255),
            text_muted: Color::Rgb(192, 192, 192),

            border: Color::Rgb(255, 255, 255),
            border_focused: Color::Rgb(0, 255, 0),
            selection: Color::Rgb(255, 255, 0),
            selection_text: Color::Rgb(0, 0, 0),

            success: Color::Rgb(0, 255, 0),
            warning: Color::Rgb(255, 255, 0),
            error: Color::Rgb(255, 0, 0),

            accent: Color::Rgb(0, 255, 0),
        };

        Self {
            terminal: TerminalColors {
                prompt: palette.accent,
                echoed_input: palette.accent,
                output: palette.text_primary,
                cursor: palette.text_primary,
                chrome_title: palette.text_primary,
            },
            hint_bar: HintBarColors {
                text: palette.text_primary,
                border: palette.border,
                selected_text: palette.selection,
                selected_border: palette.selection,
            },
            status_bar: StatusBarColors {
                background: palette.surface,
                text: palette.text_primary,
                separator: palette.text_primary,
            },
            palette,
        }
    }
}
