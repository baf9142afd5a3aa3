use anyhow::Result;
use clap::Parser;
use folioterm::app::App;
use folioterm::cli::{run_exec, run_themes, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr so the TUI and exec output stay clean
    let max_level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.theme_config();

    match &cli.command {
        Some(Commands::Exec(args)) => run_exec(args).await,
        Some(Commands::Themes) => run_themes(&config),
        None => {
            let mut app = App::new(&config);
            app.run().await
        }
    }
}
