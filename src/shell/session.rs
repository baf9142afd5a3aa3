use tokio::time::Instant;

use crate::profile;
use crate::shell::command::{Command, Effect};
use crate::shell::deferred::DeferredClear;

/// Prefix that marks an echoed input line in the scrollback. Rendering
/// keys off this leading string to style echoed input differently from
/// handler output.
pub const PROMPT_MARKER: &str = "> ";

/// The single line left in the scrollback after a clear fires.
pub const CLEAR_NOTICE: &str = "Terminal cleared.";

/// Externally visible dispatch state. `Dispatching` only lasts for the
/// duration of a `submit` call; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Dispatching,
}

/// One terminal session: the scrollback transcript, the un-submitted
/// input line, and the deferred-clear schedule.
///
/// State lives only for the life of the value; nothing is persisted.
pub struct Session {
    scrollback: Vec<String>,
    input: String,
    state: SessionState,
    deferred_clear: DeferredClear,
    commands_run: usize,
}

impl Session {
    /// An interactive session, seeded with the welcome banner.
    pub fn new() -> Self {
        Self {
            scrollback: profile::WELCOME_BANNER
                .iter()
                .map(|line| line.to_string())
                .collect(),
            input: String::new(),
            state: SessionState::Idle,
            deferred_clear: DeferredClear::new(),
            commands_run: 0,
        }
    }

    /// A session with an empty transcript, for headless `exec` runs.
    pub fn headless() -> Self {
        Self {
            scrollback: Vec::new(),
            ..Self::new()
        }
    }

    pub fn scrollback(&self) -> &[String] {
        &self.scrollback
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn commands_run(&self) -> usize {
        self.commands_run
    }

    pub fn clear_pending(&self) -> bool {
        self.deferred_clear.is_pending()
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Insert pasted text into the input buffer. Only the first line is
    /// taken; the submit contract is single-line.
    pub fn paste(&mut self, text: &str) {
        let first_line = text.lines().next().unwrap_or("");
        self.input.push_str(first_line.trim_end_matches('\r'));
    }

    /// Submit the current input buffer, resetting it to empty.
    pub fn submit_input(&mut self, now: Instant) {
        let line = std::mem::take(&mut self.input);
        self.submit(&line, now);
    }

    /// Submit one raw input line.
    ///
    /// The line is treated as opaque text: prompt-marker prefixes,
    /// quotes, and control characters are echoed back as-is. Nothing
    /// here can fail; unknown commands become transcript lines.
    pub fn submit(&mut self, line: &str, now: Instant) {
        self.state = SessionState::Dispatching;

        let trimmed = line.trim();
        let mut tokens = trimmed.split_whitespace();
        match tokens.next() {
            None => {
                // Empty or whitespace-only input keeps the rhythm of a
                // real shell: one blank line, no handler.
                self.scrollback.push(String::new());
            }
            Some(name) => {
                let args: Vec<&str> = tokens.collect();
                self.scrollback.push(format!("{}{}", PROMPT_MARKER, trimmed));

                match Command::from_name(name) {
                    Some(command) => {
                        tracing::debug!("dispatching '{}' with {} args", command.name(), args.len());
                        let output = command.run(&args);
                        self.scrollback.extend(output.lines);
                        if let Some(Effect::ScheduleClear) = output.effect {
                            self.deferred_clear.schedule(now);
                        }
                        self.commands_run += 1;
                    }
                    None => {
                        tracing::debug!("unknown command '{}'", name);
                        self.scrollback.push(format!(
                            "Command not found: {}. Type 'help' for available commands.",
                            name
                        ));
                    }
                }
            }
        }

        self.state = SessionState::Idle;
    }

    /// Arm the deferred clear directly (the Ctrl+L path). Same
    /// last-scheduled-wins schedule as the `clear` command.
    pub fn schedule_clear(&mut self, now: Instant) {
        self.deferred_clear.schedule(now);
    }

    /// Fire a due deferred clear. Returns true when the scrollback was
    /// replaced, so the caller can snap the view to the new tail.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.deferred_clear.fire_due(now) {
            self.scrollback = vec![CLEAR_NOTICE.to_string()];
            true
        } else {
            false
        }
    }

    /// The transcript as one newline-joined string.
    pub fn transcript(&self) -> String {
        self.scrollback.join("\n")
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Duration;

    fn grown_by(session: &Session, before: usize) -> &[String] {
        &session.scrollback()[before..]
    }

    #[test]
    fn starts_with_the_welcome_banner() {
        let session = Session::new();
        assert_eq!(session.scrollback()[0], "Welcome to my interactive terminal!");
        assert_eq!(session.scrollback().len(), 3);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn headless_session_starts_empty() {
        let session = Session::headless();
        assert!(session.scrollback().is_empty());
    }

    #[test]
    fn echoes_input_before_handler_output() {
        let mut session = Session::headless();
        session.submit("skills", Instant::now());
        assert_eq!(session.scrollback()[0], "> skills");
        assert_eq!(session.scrollback()[1], "Skill categories:");
        assert_eq!(session.commands_run(), 1);
    }

    #[test]
    fn trims_the_echoed_line() {
        let mut session = Session::headless();
        session.submit("   about   ", Instant::now());
        assert_eq!(session.scrollback()[0], "> about");
    }

    #[test]
    fn blank_submissions_append_one_empty_line() {
        let mut session = Session::headless();
        let before = session.scrollback().len();
        session.submit("", Instant::now());
        session.submit("   ", Instant::now());
        assert_eq!(grown_by(&session, before), &["", ""]);
        assert_eq!(session.commands_run(), 0);
    }

    #[test]
    fn unknown_commands_are_reported_inline() {
        let mut session = Session::headless();
        session.submit("foo bar", Instant::now());
        assert_eq!(
            session.scrollback(),
            &[
                "> foo bar",
                "Command not found: foo. Type 'help' for available commands.",
            ]
        );
    }

    #[test]
    fn input_buffer_editing() {
        let mut session = Session::headless();
        session.push_char('e');
        session.push_char('c');
        session.push_char('x');
        session.backspace();
        session.push_char('h');
        session.push_char('o');
        assert_eq!(session.input(), "echo");

        session.submit_input(Instant::now());
        assert_eq!(session.input(), "");
        assert_eq!(session.scrollback(), &["> echo", ""]);
    }

    #[test]
    fn paste_takes_only_the_first_line() {
        let mut session = Session::headless();
        session.paste("skills Design\r\necho sneaky");
        assert_eq!(session.input(), "skills Design");
    }

    #[test]
    fn clear_wipes_history_after_the_delay() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.submit("help", t0);
        session.submit("clear", t0);
        assert!(session.clear_pending());

        // Not yet due: transcript intact, echo included.
        assert!(!session.tick(t0 + Duration::from_millis(50)));
        assert!(session.transcript().contains("> clear"));

        assert!(session.tick(t0 + Duration::from_millis(150)));
        assert_eq!(session.scrollback(), &[CLEAR_NOTICE]);
        assert!(!session.clear_pending());
    }

    #[test]
    fn racing_clears_fire_once_last_wins() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.submit("clear", t0);
        session.submit("clear", t0 + Duration::from_millis(60));

        // First deadline passes without effect; commands typed in the
        // window survive until the surviving clear fires.
        session.submit("echo still here", t0 + Duration::from_millis(90));
        assert!(!session.tick(t0 + Duration::from_millis(110)));
        assert!(session.transcript().contains("still here"));

        assert!(session.tick(t0 + Duration::from_millis(170)));
        assert_eq!(session.scrollback(), &[CLEAR_NOTICE]);
    }

    #[test]
    fn adversarial_input_is_opaque_text() {
        let mut session = Session::headless();
        session.submit("> pretend echo", Instant::now());
        session.submit("echo \"quoted\" \u{7}text", Instant::now());
        assert_eq!(session.scrollback()[0], "> > pretend echo");
        assert!(session.scrollback()[1].starts_with("Command not found: >."));
        assert_eq!(session.scrollback()[3], "\"quoted\" \u{7}text");
    }
}
