use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tokio::time::Instant;

use crate::shell::{Session, CLEAR_DELAY};
use crate::theme::{ThemeConfig, ThemeManager};

/// Folioterm - interactive portfolio terminal
#[derive(Parser)]
#[command(name = "folioterm")]
#[command(about = "An interactive portfolio terminal for the console")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Theme to use for this run
    #[arg(long, global = true)]
    pub theme: Option<String>,
}

impl Cli {
    /// Load the persisted theme config, applying CLI overrides. Load
    /// failures fall back to defaults; a broken config file must not
    /// keep the terminal from starting.
    pub fn theme_config(&self) -> ThemeConfig {
        let mut config = match ThemeConfig::load(self.config_dir.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("using default theme config: {}", e);
                ThemeConfig::default()
            }
        };
        if let Some(theme) = &self.theme {
            config.current_theme = Some(theme.clone());
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run command lines headlessly and print the transcript
    Exec(ExecArgs),

    /// List the built-in themes
    Themes,
}

#[derive(Args)]
pub struct ExecArgs {
    /// Command lines to submit, in order
    #[arg(required = true)]
    pub lines: Vec<String>,

    /// Start from the interactive welcome banner
    #[arg(long)]
    pub banner: bool,
}

/// Run command lines through a fresh session and print the transcript
/// to stdout. This is the same dispatch path the TUI uses.
pub async fn run_exec(args: &ExecArgs) -> Result<()> {
    let mut session = if args.banner {
        Session::new()
    } else {
        Session::headless()
    };

    for line in &args.lines {
        session.submit(line, Instant::now());
    }

    // Let a trailing `clear` land before printing.
    if session.clear_pending() {
        tokio::time::sleep(CLEAR_DELAY).await;
        session.tick(Instant::now());
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", session.transcript())?;
    Ok(())
}

/// List the built-in themes, marking the configured selection.
pub fn run_themes(config: &ThemeConfig) -> Result<()> {
    let mut manager = ThemeManager::new();
    manager.load_preferences(config);
    let current = manager.current_theme().name.clone();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for theme in manager.available_themes() {
        let marker = if theme.name == current { "*" } else { " " };
        writeln!(handle, "{} {} - {}", marker, theme.name, theme.description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn exec_requires_at_least_one_line() {
        assert!(Cli::try_parse_from(["folioterm", "exec"]).is_err());
        let cli = Cli::try_parse_from(["folioterm", "exec", "skills Design"]).unwrap();
        match cli.command {
            Some(Commands::Exec(args)) => assert_eq!(args.lines, vec!["skills Design"]),
            _ => panic!("expected exec subcommand"),
        }
    }

    #[test]
    fn theme_flag_overrides_the_config_selection() {
        let cli = Cli::try_parse_from(["folioterm", "--theme", "High Contrast"]).unwrap();
        // Point at an empty config dir so the on-disk config is not read.
        let cli = Cli {
            config_dir: Some(std::env::temp_dir().join("folioterm-nonexistent-config")),
            ..cli
        };
        let config = cli.theme_config();
        assert_eq!(config.current_theme.as_deref(), Some("High Contrast"));
    }
}
