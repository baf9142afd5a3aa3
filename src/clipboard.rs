use arboard::Clipboard;

/// System clipboard access for the terminal: paste into the input
/// buffer, copy the transcript out.
///
/// Headless environments have no clipboard; everything degrades to a
/// no-op there instead of failing.
pub struct ClipboardManager {
    clipboard: Option<Clipboard>,
}

impl ClipboardManager {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                tracing::warn!("clipboard unavailable: {}", e);
                None
            }
        };
        Self { clipboard }
    }

    /// A manager with no backing clipboard, for tests and headless runs.
    pub fn unavailable() -> Self {
        Self { clipboard: None }
    }

    pub fn is_available(&self) -> bool {
        self.clipboard.is_some()
    }

    /// First line of the clipboard contents, if any.
    pub fn paste_line(&mut self) -> Option<String> {
        let clipboard = self.clipboard.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => text.lines().next().map(|line| line.to_string()),
            Err(e) => {
                tracing::debug!("clipboard paste failed: {}", e);
                None
            }
        }
    }

    /// Copy text to the clipboard, logging instead of failing.
    pub fn copy(&mut self, text: &str) {
        let Some(clipboard) = self.clipboard.as_mut() else {
            return;
        };
        match clipboard.set_text(text.to_string()) {
            Ok(()) => tracing::debug!("copied {} characters to clipboard", text.len()),
            Err(e) => tracing::warn!("clipboard copy failed: {}", e),
        }
    }
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}
