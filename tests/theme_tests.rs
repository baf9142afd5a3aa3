use folioterm::shell::PROMPT_MARKER;
use folioterm::theme::{Theme, ThemeConfig, ThemeManager, UserPreferences};

#[test]
fn test_theme_creation() {
    let dark = Theme::portfolio_dark();
    assert_eq!(dark.name, "Portfolio Dark");
    assert!(!dark.description.is_empty());

    let light = Theme::portfolio_light();
    assert_eq!(light.name, "Portfolio Light");

    let high_contrast = Theme::high_contrast();
    assert_eq!(high_contrast.name, "High Contrast");
}

#[test]
fn test_default_theme_is_portfolio_dark() {
    assert_eq!(Theme::default().name, "Portfolio Dark");
    assert_eq!(ThemeManager::new().current_theme().name, "Portfolio Dark");
}

#[test]
fn test_theme_manager_switching() {
    let mut manager = ThemeManager::new();

    assert!(manager.set_theme("Portfolio Light").is_ok());
    assert_eq!(manager.current_theme().name, "Portfolio Light");

    let err = manager.set_theme("Neon Jungle").unwrap_err();
    assert!(err.contains("Neon Jungle"));
    assert_eq!(manager.current_theme().name, "Portfolio Light");
}

#[test]
fn test_available_themes() {
    let manager = ThemeManager::new();
    let names: Vec<&str> = manager
        .available_themes()
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Portfolio Dark", "Portfolio Light", "High Contrast"]
    );
}

#[test]
fn test_echoed_lines_style_differently_from_output() {
    let theme = Theme::portfolio_dark();
    let echoed = theme.scrollback_line_style(&format!("{}skills", PROMPT_MARKER));
    let output = theme.scrollback_line_style("Skill categories:");
    assert_ne!(echoed, output);

    // The marker convention lives on the line itself; a bare ">" counts.
    let bare = theme.scrollback_line_style("> pasted text");
    assert_eq!(bare, echoed);
}

#[test]
fn test_preferences_round_trip_through_manager() {
    let config = ThemeConfig {
        current_theme: Some("High Contrast".to_string()),
        user_preferences: UserPreferences {
            reduce_motion: true,
            show_hint_bar: false,
            prompt_override: Some("visitor:~$".to_string()),
        },
    };

    let mut manager = ThemeManager::new();
    manager.load_preferences(&config);
    assert_eq!(manager.current_theme().name, "High Contrast");
    assert!(manager.preferences().reduce_motion);

    let saved = manager.save_config();
    assert_eq!(saved.current_theme.as_deref(), Some("High Contrast"));
    assert!(!saved.user_preferences.show_hint_bar);
    assert_eq!(
        saved.user_preferences.prompt_override.as_deref(),
        Some("visitor:~$")
    );
}

#[test]
fn test_unknown_configured_theme_keeps_the_default() {
    let config = ThemeConfig {
        current_theme: Some("Missing Theme".to_string()),
        user_preferences: UserPreferences::default(),
    };

    let mut manager = ThemeManager::new();
    manager.load_preferences(&config);
    assert_eq!(manager.current_theme().name, "Portfolio Dark");
}
