//! System clipboard access for the copy-output command.
//!
//! Self-contained wrapper around `arboard`; no coupling to UI or
//! application state.

/// Errors that can occur when writing to the clipboard.
#[derive(Debug)]
pub enum ClipboardError {
    /// Clipboard access failed (no display server, denied, etc.).
    Unavailable(String),
    /// The write itself failed.
    WriteFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::WriteFailed(msg) => write!(f, "Clipboard write failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Put text on the OS clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}
