use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::time::{Duration, Instant};

use crate::clipboard::ClipboardManager;
use crate::events::{EventHandler, EventResult};
use crate::shell::Session;
use crate::theme::ThemeConfig;
use crate::ui::UI;

pub struct App {
    session: Session,
    ui: UI,
    event_handler: EventHandler,
    clipboard: ClipboardManager,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            session: Session::new(),
            ui: UI::from_config(config),
            event_handler: EventHandler::new(),
            clipboard: ClipboardManager::new(),
            tick_rate: Duration::from_millis(50),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "Folioterm requires a proper terminal (TTY) to run. Use 'folioterm exec' for non-interactive output."
            ));
        }

        // Setup terminal
        enable_raw_mode().map_err(|e| {
            anyhow::anyhow!(
                "Failed to enable raw mode: {}. Make sure you're running in a proper terminal.",
                e
            )
        })?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(|e| anyhow::anyhow!("Failed to setup terminal: {}", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal =
            Terminal::new(backend).map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        // Run the main loop
        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            let now = Instant::now();

            // Fire a due deferred clear before drawing, so the wiped
            // transcript and the snapped view land in the same frame.
            if self.session.tick(now) {
                self.ui.terminal_view_mut().snap_to_bottom();
            }
            self.ui.terminal_view_mut().advance_blink(now);

            // Draw UI
            terminal.draw(|f| self.ui.render(f, &self.session))?;

            // Handle events with the remaining tick budget
            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    let result = self.event_handler.handle_key_event(
                        key,
                        &mut self.session,
                        &mut self.ui,
                        &mut self.clipboard,
                    );
                    if let EventResult::Submitted(line) = result {
                        tracing::debug!("submitted command line: {:?}", line);
                    }
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                last_tick = Instant::now();
            }

            if self.event_handler.should_quit() {
                return Ok(());
            }
        }
    }
}
