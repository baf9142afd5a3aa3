use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::time::Instant;

use crate::clipboard::ClipboardManager;
use crate::shell::Session;
use crate::ui::{FocusedPane, UI};

/// Result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    /// A command line was submitted to the session (the line, trimmed).
    Submitted(String),
}

pub struct EventHandler {
    should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self { should_quit: false }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route one key event to the session and UI.
    pub fn handle_key_event(
        &mut self,
        key: KeyEvent,
        session: &mut Session,
        ui: &mut UI,
        clipboard: &mut ClipboardManager,
    ) -> EventResult {
        // Global shortcuts first; they work regardless of focus.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.should_quit = true;
                    return EventResult::Continue;
                }
                KeyCode::Char('l') => {
                    session.schedule_clear(Instant::now());
                    return EventResult::Continue;
                }
                KeyCode::Char('v') => {
                    if let Some(text) = clipboard.paste_line() {
                        session.paste(&text);
                        ui.focus_terminal();
                    }
                    return EventResult::Continue;
                }
                KeyCode::Char('t') => {
                    clipboard.copy(&session.transcript());
                    return EventResult::Continue;
                }
                _ => return EventResult::Continue,
            }
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                EventResult::Continue
            }
            KeyCode::Tab => {
                ui.next_pane();
                EventResult::Continue
            }
            KeyCode::BackTab => {
                ui.previous_pane();
                EventResult::Continue
            }
            KeyCode::Up => {
                ui.terminal_view_mut().scroll_up(1);
                EventResult::Continue
            }
            KeyCode::Down => {
                ui.terminal_view_mut().scroll_down(1);
                EventResult::Continue
            }
            KeyCode::PageUp => {
                ui.terminal_view_mut().scroll_up(10);
                EventResult::Continue
            }
            KeyCode::PageDown => {
                ui.terminal_view_mut().scroll_down(10);
                EventResult::Continue
            }
            _ => match ui.focused_pane() {
                FocusedPane::Terminal => self.handle_terminal_keys(key, session, ui),
                FocusedPane::HintBar => self.handle_hint_bar_keys(key, session, ui),
            },
        }
    }

    fn handle_terminal_keys(
        &mut self,
        key: KeyEvent,
        session: &mut Session,
        ui: &mut UI,
    ) -> EventResult {
        match key.code {
            KeyCode::Char(c) => {
                session.push_char(c);
                EventResult::Continue
            }
            KeyCode::Backspace => {
                session.backspace();
                EventResult::Continue
            }
            KeyCode::Enter => {
                let line = session.input().trim().to_string();
                session.submit_input(Instant::now());
                ui.terminal_view_mut().snap_to_bottom();
                EventResult::Submitted(line)
            }
            _ => EventResult::Continue,
        }
    }

    fn handle_hint_bar_keys(
        &mut self,
        key: KeyEvent,
        session: &mut Session,
        ui: &mut UI,
    ) -> EventResult {
        match key.code {
            KeyCode::Left => {
                ui.hint_bar_mut().previous_badge();
                EventResult::Continue
            }
            KeyCode::Right => {
                ui.hint_bar_mut().next_badge();
                EventResult::Continue
            }
            KeyCode::Enter => {
                let line = ui.hint_bar().selected_command().to_string();
                session.submit(&line, Instant::now());
                ui.terminal_view_mut().snap_to_bottom();
                EventResult::Submitted(line)
            }
            KeyCode::Char(c) => {
                // Typing anywhere goes to the input buffer.
                ui.focus_terminal();
                session.push_char(c);
                EventResult::Continue
            }
            _ => EventResult::Continue,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn fixture() -> (EventHandler, Session, UI, ClipboardManager) {
        (
            EventHandler::new(),
            Session::headless(),
            UI::new(),
            ClipboardManager::unavailable(),
        )
    }

    #[test]
    fn typing_and_submitting_runs_the_command() {
        let (mut handler, mut session, mut ui, mut clipboard) = fixture();

        for c in "echo hi".chars() {
            handler.handle_key_event(key(KeyCode::Char(c)), &mut session, &mut ui, &mut clipboard);
        }
        let result =
            handler.handle_key_event(key(KeyCode::Enter), &mut session, &mut ui, &mut clipboard);

        assert_eq!(result, EventResult::Submitted("echo hi".to_string()));
        assert_eq!(session.scrollback(), &["> echo hi", "hi"]);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let (mut handler, mut session, mut ui, mut clipboard) = fixture();
        handler.handle_key_event(key(KeyCode::Esc), &mut session, &mut ui, &mut clipboard);
        assert!(handler.should_quit());

        let (mut handler, mut session, mut ui, mut clipboard) = fixture();
        handler.handle_key_event(ctrl('c'), &mut session, &mut ui, &mut clipboard);
        assert!(handler.should_quit());
    }

    #[test]
    fn plain_q_is_just_a_character() {
        let (mut handler, mut session, mut ui, mut clipboard) = fixture();
        handler.handle_key_event(key(KeyCode::Char('q')), &mut session, &mut ui, &mut clipboard);
        assert!(!handler.should_quit());
        assert_eq!(session.input(), "q");
    }

    #[test]
    fn ctrl_l_schedules_a_clear() {
        let (mut handler, mut session, mut ui, mut clipboard) = fixture();
        handler.handle_key_event(ctrl('l'), &mut session, &mut ui, &mut clipboard);
        assert!(session.clear_pending());
    }

    #[test]
    fn hint_bar_enter_submits_the_selected_badge() {
        let (mut handler, mut session, mut ui, mut clipboard) = fixture();
        handler.handle_key_event(key(KeyCode::Tab), &mut session, &mut ui, &mut clipboard);
        assert_eq!(ui.focused_pane(), FocusedPane::HintBar);

        handler.handle_key_event(key(KeyCode::Right), &mut session, &mut ui, &mut clipboard);
        let result =
            handler.handle_key_event(key(KeyCode::Enter), &mut session, &mut ui, &mut clipboard);

        assert_eq!(result, EventResult::Submitted("skills".to_string()));
        assert_eq!(session.scrollback()[0], "> skills");
    }

    #[test]
    fn typing_refocuses_the_terminal_from_the_hint_bar() {
        let (mut handler, mut session, mut ui, mut clipboard) = fixture();
        handler.handle_key_event(key(KeyCode::Tab), &mut session, &mut ui, &mut clipboard);
        handler.handle_key_event(key(KeyCode::Char('h')), &mut session, &mut ui, &mut clipboard);

        assert_eq!(ui.focused_pane(), FocusedPane::Terminal);
        assert_eq!(session.input(), "h");
    }
}
