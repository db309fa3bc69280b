//! Result-panel state.
//!
//! Holds what the three panels (Output / Errors / Visuals) display and
//! which one is active. Always reflects the most recently *completed*
//! run; ordering between overlapping runs is enforced upstream by the
//! request tracker.

use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use image::GenericImageView;

use crate::backend::{LintIssue, RunResponse};

/// Placeholder shown when a run produced no stdout.
pub const NO_OUTPUT: &str = "No output";
/// Placeholder shown when a run produced no stderr.
pub const NO_ERRORS: &str = "No errors";

/// The three result panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Output,
    Errors,
    Visuals,
}

impl Panel {
    pub fn title(self) -> &'static str {
        match self {
            Panel::Output => "Output",
            Panel::Errors => "Errors",
            Panel::Visuals => "Visuals",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Panel::Output => Panel::Errors,
            Panel::Errors => Panel::Visuals,
            Panel::Visuals => Panel::Output,
        }
    }
}

/// One figure from a run, decoded enough to describe and locate it.
#[derive(Debug, Clone)]
pub struct FigureEntry {
    /// Position within the run, 0-based.
    pub index: usize,
    /// Pixel dimensions, when the payload decoded as a PNG.
    pub dimensions: Option<(u32, u32)>,
    /// Decoded payload size in bytes.
    pub byte_size: usize,
    /// Where the PNG was written on disk, when that succeeded.
    pub path: Option<PathBuf>,
    /// Raw PNG bytes, kept for clipboard/export use.
    pub bytes: Vec<u8>,
}

/// Decode one base64 figure payload into an entry.
///
/// A payload that fails to decode still yields an entry (one entry per
/// figure, in order) with no dimensions, so the count stays truthful.
pub fn decode_figure(index: usize, payload: &str) -> FigureEntry {
    let bytes = match BASE64.decode(payload.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Figure {} is not valid base64: {}", index + 1, e);
            return FigureEntry {
                index,
                dimensions: None,
                byte_size: 0,
                path: None,
                bytes: Vec::new(),
            };
        }
    };

    let dimensions = match image::load_from_memory(&bytes) {
        Ok(img) => Some(img.dimensions()),
        Err(e) => {
            tracing::warn!("Figure {} did not decode as an image: {}", index + 1, e);
            None
        }
    };

    FigureEntry {
        index,
        dimensions,
        byte_size: bytes.len(),
        path: None,
        bytes,
    }
}

/// Format lint issues the way the Errors panel shows them: one line
/// per issue, in input order.
pub fn format_lint_report(issues: &[LintIssue]) -> String {
    let mut report = String::from("Linting issues found:\n\n");
    for issue in issues {
        report.push_str(&format!(
            "Line {}, Column {}: {} ({})\n",
            issue.line, issue.column, issue.message, issue.symbol
        ));
    }
    report
}

/// What the three panels display.
#[derive(Debug, Default)]
pub struct OutputState {
    pub stdout: String,
    pub stderr: String,
    pub figures: Vec<FigureEntry>,
    pub active: Panel,
}

impl OutputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty all three panels.
    pub fn clear(&mut self) {
        self.stdout.clear();
        self.stderr.clear();
        self.figures.clear();
    }

    /// Display a completed run and auto-select the most relevant panel:
    /// figures beat stderr beats the default output panel.
    pub fn present(&mut self, response: &RunResponse, figures: Vec<FigureEntry>) {
        self.stdout = if response.stdout.is_empty() {
            NO_OUTPUT.to_string()
        } else {
            response.stdout.clone()
        };
        self.stderr = if response.stderr.is_empty() {
            NO_ERRORS.to_string()
        } else {
            response.stderr.clone()
        };
        self.figures = figures;

        self.active = if !self.figures.is_empty() {
            Panel::Visuals
        } else if !response.stderr.trim().is_empty() {
            Panel::Errors
        } else {
            Panel::Output
        };
    }

    /// Put an error message in the Errors panel and select it. Used for
    /// transport failures and backend-flagged errors.
    pub fn set_error_text(&mut self, message: impl Into<String>) {
        self.stderr = message.into();
        self.active = Panel::Errors;
    }

    /// Display a lint report (or the all-clear line) and select the
    /// Errors panel, as the lint command always does.
    pub fn present_lint_issues(&mut self, issues: &[LintIssue]) {
        self.stderr = if issues.is_empty() {
            "No linting issues found".to_string()
        } else {
            format_lint_report(issues)
        };
        self.active = Panel::Errors;
    }

    pub fn select(&mut self, panel: Panel) {
        self.active = panel;
    }

    pub fn select_next_panel(&mut self) {
        self.active = self.active.next();
    }

    /// Text of the active panel for the copy command. `None` for the
    /// Visuals panel, which has no text representation.
    pub fn active_text(&self) -> Option<&str> {
        match self.active {
            Panel::Output => Some(&self.stdout),
            Panel::Errors => Some(&self.stderr),
            Panel::Visuals => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_response(stdout: &str, stderr: &str, figures: Vec<String>) -> RunResponse {
        serde_json::from_value(serde_json::json!({
            "stdout": stdout,
            "stderr": stderr,
            "figures": figures,
        }))
        .unwrap()
    }

    fn fake_figure(index: usize) -> FigureEntry {
        FigureEntry {
            index,
            dimensions: Some((640, 480)),
            byte_size: 1024,
            path: None,
            bytes: Vec::new(),
        }
    }

    #[test]
    fn test_present_empty_run_uses_sentinels() {
        let mut output = OutputState::new();
        output.present(&run_response("", "", vec![]), vec![]);

        assert_eq!(output.stdout, NO_OUTPUT);
        assert_eq!(output.stderr, NO_ERRORS);
        assert_eq!(output.active, Panel::Output);
    }

    #[test]
    fn test_present_with_figures_selects_visuals() {
        let mut output = OutputState::new();
        let response = run_response("hi", "warning: deprecated", vec!["Zm9v".into()]);
        output.present(&response, vec![fake_figure(0)]);

        // Figures win even when stderr is non-empty.
        assert_eq!(output.active, Panel::Visuals);
        assert_eq!(output.figures.len(), 1);
    }

    #[test]
    fn test_present_with_stderr_selects_errors() {
        let mut output = OutputState::new();
        output.present(&run_response("hi", "Traceback: boom", vec![]), vec![]);
        assert_eq!(output.active, Panel::Errors);
        assert_eq!(output.stderr, "Traceback: boom");
    }

    #[test]
    fn test_present_default_selects_output() {
        let mut output = OutputState::new();
        output.present(&run_response("hello\n", "", vec![]), vec![]);
        assert_eq!(output.active, Panel::Output);
        assert_eq!(output.stdout, "hello\n");
    }

    #[test]
    fn test_whitespace_only_stderr_is_not_an_error() {
        let mut output = OutputState::new();
        output.present(&run_response("hello", "  \n", vec![]), vec![]);
        assert_eq!(output.active, Panel::Output);
    }

    #[test]
    fn test_present_replaces_previous_run_wholesale() {
        let mut output = OutputState::new();
        output.present(
            &run_response("first", "err", vec!["Zm9v".into()]),
            vec![fake_figure(0)],
        );
        output.present(&run_response("second", "", vec![]), vec![]);

        assert_eq!(output.stdout, "second");
        assert_eq!(output.stderr, NO_ERRORS);
        assert!(output.figures.is_empty());
    }

    #[test]
    fn test_format_lint_report_line_shape() {
        let issues = vec![
            LintIssue {
                line: 3,
                column: 1,
                message: "undefined variable 'x'".into(),
                symbol: "undefined-variable".into(),
            },
            LintIssue {
                line: 7,
                column: 5,
                message: "unused import 'os'".into(),
                symbol: "unused-import".into(),
            },
        ];
        let report = format_lint_report(&issues);
        let lines: Vec<&str> = report.lines().filter(|l| !l.is_empty()).collect();

        assert_eq!(lines[0], "Linting issues found:");
        assert_eq!(lines[1], "Line 3, Column 1: undefined variable 'x' (undefined-variable)");
        assert_eq!(lines[2], "Line 7, Column 5: unused import 'os' (unused-import)");
    }

    #[test]
    fn test_present_lint_issues_orders_and_selects_errors() {
        let issues = vec![
            LintIssue { line: 9, column: 2, message: "b".into(), symbol: "s2".into() },
            LintIssue { line: 1, column: 1, message: "a".into(), symbol: "s1".into() },
        ];
        let mut output = OutputState::new();
        output.present_lint_issues(&issues);

        assert_eq!(output.active, Panel::Errors);
        // Input order is preserved, not sorted.
        let first = output.stderr.lines().nth(2).unwrap();
        assert!(first.starts_with("Line 9"));
    }

    #[test]
    fn test_present_lint_issues_empty_all_clear() {
        let mut output = OutputState::new();
        output.present_lint_issues(&[]);
        assert_eq!(output.stderr, "No linting issues found");
        assert_eq!(output.active, Panel::Errors);
    }

    #[test]
    fn test_active_text_per_panel() {
        let mut output = OutputState::new();
        output.stdout = "out".into();
        output.stderr = "err".into();

        output.select(Panel::Output);
        assert_eq!(output.active_text(), Some("out"));
        output.select(Panel::Errors);
        assert_eq!(output.active_text(), Some("err"));
        output.select(Panel::Visuals);
        assert_eq!(output.active_text(), None);
    }

    #[test]
    fn test_decode_figure_bad_base64_still_counts() {
        let entry = decode_figure(0, "not-base64!!!");
        assert_eq!(entry.index, 0);
        assert!(entry.dimensions.is_none());
        assert_eq!(entry.byte_size, 0);
    }

    #[test]
    fn test_decode_figure_valid_base64_invalid_png() {
        let payload = BASE64.encode(b"plain text, not an image");
        let entry = decode_figure(1, &payload);
        assert!(entry.dimensions.is_none());
        assert_eq!(entry.byte_size, 24);
    }

    #[test]
    fn test_panel_cycle() {
        assert_eq!(Panel::Output.next(), Panel::Errors);
        assert_eq!(Panel::Errors.next(), Panel::Visuals);
        assert_eq!(Panel::Visuals.next(), Panel::Output);
    }
}
