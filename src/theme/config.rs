use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,

    #[error("failed to read theme config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize theme config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Theme configuration persisted between runs.
///
/// Only the selection and preferences are saved; terminal session state
/// never is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub current_theme: Option<String>,
    #[serde(default)]
    pub user_preferences: UserPreferences,
}

/// User preferences for the interactive terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Disable the blinking input cursor.
    #[serde(default)]
    pub reduce_motion: bool,

    /// Show the quick-command badge row under the terminal.
    #[serde(default = "default_true")]
    pub show_hint_bar: bool,

    /// Replace the default `guest@portfolio:~$` prompt label.
    #[serde(default)]
    pub prompt_override: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            show_hint_bar: true,
            prompt_override: None,
        }
    }
}

impl ThemeConfig {
    /// Load the config from disk. A missing file is the defaults, not
    /// an error.
    pub fn load(config_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let path = Self::config_file_path(config_dir)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        let config = toml::from_str(&contents)?;
        tracing::debug!("loaded theme config from {}", path.display());
        Ok(config)
    }

    /// Save the config, creating the directory if needed.
    pub fn save(&self, config_dir: Option<&Path>) -> Result<(), ConfigError> {
        let path = Self::config_file_path(config_dir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        tracing::debug!("saved theme config to {}", path.display());
        Ok(())
    }

    fn config_file_path(config_dir: Option<&Path>) -> Result<PathBuf, ConfigError> {
        let base = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::config_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join("folioterm"),
        };
        Ok(base.join("theme.toml"))
    }
}
