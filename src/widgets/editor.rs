//! Editing surface: a wrapper that adapts tui-textarea to what the
//! workbench needs.
//!
//! The wrapper owns three concerns the raw widget does not:
//! - whole-document get/set (the session manager replaces content
//!   wholesale on new/load/format),
//! - lint line flags, replaced as a set on every lint so stale
//!   annotations never accumulate,
//! - a mirrored viewport top row, so the flag gutter next to the
//!   textarea stays aligned with what the widget scrolled to.

use crossterm::event::KeyEvent;
use ratatui::style::{Color, Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::config::Theme;

/// The text-editing surface for the current document.
#[derive(Debug, Clone)]
pub struct EditorInput {
    textarea: TextArea<'static>,
    /// 1-based line numbers flagged by the last lint, sorted.
    flagged: Vec<usize>,
    /// Mirrored viewport top row (see `update_viewport`).
    top_row: usize,
}

impl Default for EditorInput {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorInput {
    /// Create an empty editor with workbench defaults: 4-space soft
    /// tabs and the dark palette.
    pub fn new() -> Self {
        let mut editor = Self {
            textarea: TextArea::default(),
            flagged: Vec::new(),
            top_row: 0,
        };
        editor.configure();
        editor.apply_theme(Theme::Dark);
        editor
    }

    fn configure(&mut self) {
        self.textarea.set_tab_length(4);
        // Tab inserts spaces, matching the document convention.
        self.textarea.set_hard_tab_indent(false);
    }

    /// The whole document as one string.
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the whole document. Clears lint flags (their line
    /// numbers refer to the old text) and resets the viewport.
    pub fn set_content(&mut self, content: &str) {
        let lines: Vec<String> = content.split('\n').map(String::from).collect();
        let mut textarea = TextArea::new(lines);
        std::mem::swap(&mut self.textarea, &mut textarea);
        // TextArea::new resets styling, so re-apply ours.
        self.configure();
        self.textarea.set_style(textarea.style());
        self.textarea.set_cursor_style(textarea.cursor_style());
        self.textarea
            .set_cursor_line_style(textarea.cursor_line_style());
        if let Some(style) = textarea.line_number_style() {
            self.textarea.set_line_number_style(style);
        }
        self.textarea.move_cursor(CursorMove::Top);
        self.textarea.move_cursor(CursorMove::Head);
        self.flagged.clear();
        self.top_row = 0;
    }

    /// Forward a key event to the widget. Returns `true` when the text
    /// changed (drives the dirty flag).
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// Replace the flagged-line set (1-based). The previous set is
    /// dropped; flags never accumulate across lints.
    pub fn set_flagged_lines(&mut self, mut lines: Vec<usize>) {
        lines.sort_unstable();
        lines.dedup();
        self.flagged = lines;
    }

    pub fn clear_flagged_lines(&mut self) {
        self.flagged.clear();
    }

    pub fn flagged_lines(&self) -> &[usize] {
        &self.flagged
    }

    /// Whether a 1-based line carries a lint flag.
    pub fn is_flagged(&self, line: usize) -> bool {
        self.flagged.binary_search(&line).is_ok()
    }

    /// 0-based cursor row.
    pub fn cursor_row(&self) -> usize {
        self.textarea.cursor().0
    }

    pub fn line_count(&self) -> usize {
        self.textarea.lines().len()
    }

    /// Mirror the widget's minimal scroll-to-cursor behavior and
    /// return the viewport top row for the given height. Called once
    /// per render so the flag gutter lines up with the text.
    pub fn update_viewport(&mut self, height: usize) -> usize {
        if height == 0 {
            return self.top_row;
        }
        let cursor = self.cursor_row();
        if cursor < self.top_row {
            self.top_row = cursor;
        } else if cursor >= self.top_row + height {
            self.top_row = cursor + 1 - height;
        }
        let max_top = self.line_count().saturating_sub(1);
        if self.top_row > max_top {
            self.top_row = max_top;
        }
        self.top_row
    }

    /// Switch the widget's rendering mode between palettes.
    pub fn apply_theme(&mut self, theme: Theme) {
        match theme {
            Theme::Dark => {
                self.textarea.set_style(Style::default().fg(Color::White));
                self.textarea
                    .set_cursor_style(Style::default().fg(Color::Black).bg(Color::White));
                self.textarea.set_cursor_line_style(
                    Style::default().add_modifier(Modifier::UNDERLINED),
                );
                self.textarea
                    .set_line_number_style(Style::default().fg(Color::DarkGray));
            }
            Theme::Light => {
                self.textarea
                    .set_style(Style::default().fg(Color::Black).bg(Color::White));
                self.textarea
                    .set_cursor_style(Style::default().fg(Color::White).bg(Color::Black));
                self.textarea.set_cursor_line_style(
                    Style::default().add_modifier(Modifier::UNDERLINED),
                );
                self.textarea
                    .set_line_number_style(Style::default().fg(Color::Gray).bg(Color::White));
            }
        }
    }

    /// The underlying widget, for rendering.
    pub fn inner(&self) -> &TextArea<'static> {
        &self.textarea
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_content_round_trip_preserves_trailing_newline() {
        let mut editor = EditorInput::new();
        editor.set_content("# New Python file\n\n");
        assert_eq!(editor.content(), "# New Python file\n\n");
    }

    #[test]
    fn test_set_content_clears_flags() {
        let mut editor = EditorInput::new();
        editor.set_flagged_lines(vec![1, 2]);
        editor.set_content("x = 1\n");
        assert!(editor.flagged_lines().is_empty());
    }

    #[test]
    fn test_flagged_lines_replace_not_accumulate() {
        let mut editor = EditorInput::new();
        editor.set_flagged_lines(vec![3, 1, 3]);
        assert_eq!(editor.flagged_lines(), &[1, 3]);
        assert!(editor.is_flagged(3));

        editor.set_flagged_lines(vec![7]);
        assert_eq!(editor.flagged_lines(), &[7]);
        assert!(!editor.is_flagged(3));
    }

    #[test]
    fn test_input_reports_modification() {
        let mut editor = EditorInput::new();
        let modified = editor.input(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(modified);
        assert_eq!(editor.content(), "a");

        let moved = editor.input(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert!(!moved);
    }

    #[test]
    fn test_update_viewport_follows_cursor() {
        let mut editor = EditorInput::new();
        let doc: String = (0..40).map(|i| format!("line {}\n", i)).collect();
        editor.set_content(&doc);
        assert_eq!(editor.update_viewport(10), 0);

        // Jump the cursor to the bottom of the document.
        for _ in 0..45 {
            editor.input(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }
        let top = editor.update_viewport(10);
        assert_eq!(top, editor.cursor_row() + 1 - 10);

        // And back up.
        for _ in 0..45 {
            editor.input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        }
        assert_eq!(editor.update_viewport(10), 0);
    }
}
