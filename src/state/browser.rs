//! File listing and open-dialog state.
//!
//! The sidebar shows every file the backend knows about plus a derived
//! "Examples" group; the open dialog is a modal list with live
//! substring filtering. Both are fed from the same `list` endpoint but
//! refreshed independently (the dialog always fetches fresh).

/// Maximum visible rows in the open-dialog viewport.
pub const MAX_VISIBLE_ROWS: usize = 10;

/// An entry in the derived Examples group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleEntry {
    /// Backend file name, used for loading.
    pub name: String,
    /// Cleaned-up display name shown in the sidebar.
    pub display: String,
}

/// Whether a file belongs to the Examples group.
fn is_example(name: &str) -> bool {
    name.starts_with("examples/") || name.contains("example")
}

/// Derive the display name for an example: strip the directory prefix
/// and extension, then turn snake_case into Title Case.
pub fn example_display_name(name: &str) -> String {
    let stripped = name
        .strip_prefix("examples/")
        .unwrap_or(name)
        .strip_suffix(".py")
        .map(str::to_string)
        .unwrap_or_else(|| name.strip_prefix("examples/").unwrap_or(name).to_string());

    stripped
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sidebar view of the backend's file listing.
#[derive(Debug, Default)]
pub struct FileBrowser {
    /// All files, in backend order.
    pub files: Vec<String>,
    /// Derived Examples group.
    pub examples: Vec<ExampleEntry>,
    /// Cursor position when the sidebar has focus; spans the file rows
    /// first, then the Examples rows.
    pub selected: usize,
    /// Whether at least one listing has been fetched.
    pub loaded: bool,
}

impl FileBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the listing (refresh semantics: nothing is cached beyond
    /// the last fetch).
    pub fn set_files(&mut self, files: Vec<String>) {
        self.examples = files
            .iter()
            .filter(|name| is_example(name))
            .map(|name| ExampleEntry {
                name: name.clone(),
                display: example_display_name(name),
            })
            .collect();
        self.files = files;
        self.loaded = true;
        if self.selected >= self.entry_count() {
            self.selected = self.entry_count().saturating_sub(1);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of selectable rows: every file plus every Examples entry.
    pub fn entry_count(&self) -> usize {
        self.files.len() + self.examples.len()
    }

    /// Backend name under the cursor. Examples rows resolve to the
    /// backend name behind their display name.
    pub fn selected_file(&self) -> Option<&str> {
        if self.selected < self.files.len() {
            self.files.get(self.selected).map(String::as_str)
        } else {
            self.examples
                .get(self.selected - self.files.len())
                .map(|entry| entry.name.as_str())
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.entry_count() {
            self.selected += 1;
        }
    }
}

/// State of the modal open-file dialog.
#[derive(Debug, Default)]
pub struct OpenDialog {
    pub visible: bool,
    /// Live filter query.
    pub query: String,
    /// Entries as fetched when the dialog opened.
    pub entries: Vec<String>,
    /// Entries matching the current query.
    pub filtered: Vec<String>,
    /// Cursor position in `filtered`.
    pub selected_index: usize,
    /// First visible row of the viewport.
    pub scroll_offset: usize,
    /// Whether the fresh listing is still being fetched.
    pub loading: bool,
    /// Error message if the fetch failed.
    pub error: Option<String>,
}

impl OpenDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog in its loading state; entries arrive when the
    /// fresh listing completes.
    pub fn open(&mut self) {
        self.visible = true;
        self.query.clear();
        self.entries.clear();
        self.filtered.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.loading = true;
        self.error = None;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.query.clear();
        self.entries.clear();
        self.filtered.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.loading = false;
        self.error = None;
    }

    /// Install the fetched listing.
    pub fn set_entries(&mut self, entries: Vec<String>) {
        self.entries = entries;
        self.loading = false;
        self.error = None;
        self.apply_filter();
    }

    pub fn set_error(&mut self, error: String) {
        self.loading = false;
        self.error = Some(error);
        self.entries.clear();
        self.filtered.clear();
    }

    /// Append a character to the filter query.
    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.apply_filter();
    }

    /// Remove the last character of the filter query.
    pub fn pop_query(&mut self) {
        self.query.pop();
        self.apply_filter();
    }

    /// Case-insensitive substring filter over the fetched entries.
    fn apply_filter(&mut self) {
        if self.query.is_empty() {
            self.filtered = self.entries.clone();
        } else {
            let needle = self.query.to_lowercase();
            self.filtered = self
                .entries
                .iter()
                .filter(|entry| entry.to_lowercase().contains(&needle))
                .cloned()
                .collect();
        }
        if self.selected_index >= self.filtered.len() {
            self.selected_index = self.filtered.len().saturating_sub(1);
        }
        self.ensure_visible();
    }

    pub fn selected_entry(&self) -> Option<&str> {
        self.filtered.get(self.selected_index).map(String::as_str)
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.ensure_visible();
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.filtered.len() {
            self.selected_index += 1;
            self.ensure_visible();
        }
    }

    fn ensure_visible(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        if self.selected_index >= self.scroll_offset + MAX_VISIBLE_ROWS {
            self.scroll_offset = self.selected_index.saturating_sub(MAX_VISIBLE_ROWS - 1);
        }
    }

    /// Entries visible in the current viewport.
    pub fn visible_entries(&self) -> &[String] {
        let start = self.scroll_offset;
        let end = (self.scroll_offset + MAX_VISIBLE_ROWS).min(self.filtered.len());
        if start < self.filtered.len() {
            &self.filtered[start..end]
        } else {
            &[]
        }
    }

    pub fn has_more_above(&self) -> bool {
        self.scroll_offset > 0
    }

    pub fn has_more_below(&self) -> bool {
        self.scroll_offset + MAX_VISIBLE_ROWS < self.filtered.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<String> {
        vec![
            "scratch.py".to_string(),
            "examples/data_analysis.py".to_string(),
            "examples/web_scraping.py".to_string(),
            "my_example_notes.py".to_string(),
        ]
    }

    #[test]
    fn test_set_files_derives_examples() {
        let mut browser = FileBrowser::new();
        browser.set_files(listing());

        assert_eq!(browser.files.len(), 4);
        let names: Vec<&str> = browser.examples.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "examples/data_analysis.py",
                "examples/web_scraping.py",
                "my_example_notes.py"
            ]
        );
    }

    #[test]
    fn test_example_display_name() {
        assert_eq!(
            example_display_name("examples/data_analysis.py"),
            "Data Analysis"
        );
        assert_eq!(
            example_display_name("examples/machine_learning.py"),
            "Machine Learning"
        );
        assert_eq!(example_display_name("my_example_notes.py"), "My Example Notes");
    }

    #[test]
    fn test_sidebar_navigation_clamps() {
        let mut browser = FileBrowser::new();
        browser.set_files(vec!["a.py".into(), "b.py".into()]);

        browser.move_up();
        assert_eq!(browser.selected, 0);
        browser.move_down();
        browser.move_down();
        assert_eq!(browser.selected, 1);
        assert_eq!(browser.selected_file(), Some("b.py"));
    }

    #[test]
    fn test_cursor_reaches_example_entries() {
        let mut browser = FileBrowser::new();
        browser.set_files(listing());

        // Past the four file rows the cursor enters the Examples group,
        // which still resolves to backend names for loading.
        for _ in 0..4 {
            browser.move_down();
        }
        assert_eq!(browser.selected_file(), Some("examples/data_analysis.py"));

        for _ in 0..10 {
            browser.move_down();
        }
        assert_eq!(browser.selected, browser.entry_count() - 1);
        assert_eq!(browser.selected_file(), Some("my_example_notes.py"));
    }

    #[test]
    fn test_refresh_clamps_selection() {
        let mut browser = FileBrowser::new();
        browser.set_files(listing());
        browser.selected = 3;
        browser.set_files(vec!["only.py".into()]);
        assert_eq!(browser.selected, 0);
    }

    #[test]
    fn test_dialog_open_starts_loading() {
        let mut dialog = OpenDialog::new();
        dialog.open();
        assert!(dialog.visible);
        assert!(dialog.loading);
        assert!(dialog.entries.is_empty());
    }

    #[test]
    fn test_dialog_filter_is_case_insensitive_substring() {
        let mut dialog = OpenDialog::new();
        dialog.open();
        dialog.set_entries(listing());

        for c in "WEB".chars() {
            dialog.push_query(c);
        }
        assert_eq!(dialog.filtered, vec!["examples/web_scraping.py".to_string()]);

        dialog.pop_query();
        dialog.pop_query();
        dialog.pop_query();
        assert_eq!(dialog.filtered.len(), 4);
    }

    #[test]
    fn test_dialog_filter_clamps_selection() {
        let mut dialog = OpenDialog::new();
        dialog.open();
        dialog.set_entries(listing());
        dialog.move_down();
        dialog.move_down();
        dialog.move_down();
        assert_eq!(dialog.selected_index, 3);

        dialog.push_query('w');
        assert!(dialog.selected_index < dialog.filtered.len());
    }

    #[test]
    fn test_dialog_scroll_window() {
        let mut dialog = OpenDialog::new();
        dialog.open();
        dialog.set_entries((0..25).map(|i| format!("file{:02}.py", i)).collect());

        assert!(!dialog.has_more_above());
        assert!(dialog.has_more_below());
        assert_eq!(dialog.visible_entries().len(), MAX_VISIBLE_ROWS);

        for _ in 0..24 {
            dialog.move_down();
        }
        assert!(dialog.has_more_above());
        assert!(!dialog.has_more_below());
        assert_eq!(dialog.selected_entry(), Some("file24.py"));
    }

    #[test]
    fn test_dialog_error_state() {
        let mut dialog = OpenDialog::new();
        dialog.open();
        dialog.set_error("connection refused".into());
        assert!(!dialog.loading);
        assert_eq!(dialog.error.as_deref(), Some("connection refused"));
    }
}
