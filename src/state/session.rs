//! Current-file session state.
//!
//! Owns the file identity ("which name does Ctrl+S target") and the
//! dirty flag. All document replacement goes through these methods;
//! nothing else writes to the editor wholesale, which is what keeps a
//! failed load or a superseded save from corrupting the session.

use crate::state::output::OutputState;
use crate::widgets::editor::EditorInput;

/// Seed document shown on first launch.
pub const SAMPLE_DOCUMENT: &str = r#"# Welcome to the Python workbench!
# This sample runs on the backend; press Ctrl+R to try it.

import numpy as np
import matplotlib.pyplot as plt

x = np.linspace(0, 10, 100)
y = np.sin(x)

plt.figure(figsize=(8, 6))
plt.plot(x, y, 'b-', linewidth=2)
plt.title('Sine Wave')
plt.xlabel('X axis')
plt.ylabel('Y axis')
plt.grid(True)
plt.show()

print("Hello, World!")
print("NumPy version:", np.__version__)
"#;

/// Document placed in the editor by the new-file command.
pub const NEW_FILE_TEMPLATE: &str = "# New Python file\n\n";

/// Name shown in the title when no file is current.
pub const UNSAVED_TITLE: &str = "Code Editor";

/// The identity and dirty status of the current file.
#[derive(Debug, Default)]
pub struct FileSession {
    current: Option<String>,
    dirty: bool,
}

impl FileSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the current file, if one has been loaded or saved.
    pub fn current_file(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Title-bar name: the file name, or a fixed label when unsaved.
    pub fn display_name(&self) -> &str {
        self.current.as_deref().unwrap_or(UNSAVED_TITLE)
    }

    /// Whether the document has unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record an edit made directly in the editor.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Reset to a fresh unsaved document (after user confirmation).
    pub fn new_document(&mut self, editor: &mut EditorInput, output: &mut OutputState) {
        editor.set_content(NEW_FILE_TEMPLATE);
        output.clear();
        self.current = None;
        self.dirty = false;
    }

    /// Seed the editor with the sample document at startup. Leaves the
    /// session unsaved and clean.
    pub fn seed_sample(&mut self, editor: &mut EditorInput) {
        editor.set_content(SAMPLE_DOCUMENT);
        self.current = None;
        self.dirty = false;
    }

    /// Apply a successful load: replace the document wholesale, clear
    /// output, and make `name` current.
    pub fn load_document(
        &mut self,
        editor: &mut EditorInput,
        output: &mut OutputState,
        name: &str,
        code: &str,
    ) {
        editor.set_content(code);
        output.clear();
        self.current = Some(name.to_string());
        self.dirty = false;
    }

    /// Record a successful save. Saving always adopts the saved name,
    /// so "save as" is implicit in every save.
    pub fn record_saved(&mut self, name: &str) {
        self.current = Some(name.to_string());
        self.dirty = false;
    }

    /// Replace the document in place (formatter result). The identity
    /// stays; the new text has not been saved yet.
    pub fn replace_document(&mut self, editor: &mut EditorInput, code: &str) {
        editor.set_content(code);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_unsaved_and_clean() {
        let session = FileSession::new();
        assert!(session.current_file().is_none());
        assert_eq!(session.display_name(), UNSAVED_TITLE);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_load_document_sets_identity_and_content() {
        let mut session = FileSession::new();
        let mut editor = EditorInput::new();
        let mut output = OutputState::new();
        output.set_error_text("leftover");

        session.load_document(&mut editor, &mut output, "bar.py", "print('hi')\n");

        assert_eq!(session.current_file(), Some("bar.py"));
        assert_eq!(editor.content(), "print('hi')\n");
        assert!(output.stderr.is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_new_document_resets_to_template() {
        let mut session = FileSession::new();
        let mut editor = EditorInput::new();
        let mut output = OutputState::new();
        session.load_document(&mut editor, &mut output, "a.py", "x = 1\n");
        session.mark_dirty();

        session.new_document(&mut editor, &mut output);

        assert!(session.current_file().is_none());
        assert!(!session.is_dirty());
        assert_eq!(editor.content(), NEW_FILE_TEMPLATE);
    }

    #[test]
    fn test_record_saved_adopts_name() {
        let mut session = FileSession::new();
        session.mark_dirty();
        session.record_saved("renamed.py");
        assert_eq!(session.current_file(), Some("renamed.py"));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_replace_document_keeps_identity_and_marks_dirty() {
        let mut session = FileSession::new();
        let mut editor = EditorInput::new();
        let mut output = OutputState::new();
        session.load_document(&mut editor, &mut output, "fmt.py", "x=1");

        session.replace_document(&mut editor, "x = 1\n");

        assert_eq!(session.current_file(), Some("fmt.py"));
        assert!(session.is_dirty());
        assert_eq!(editor.content(), "x = 1\n");
    }
}
