//! Request orchestration.
//!
//! Every operation follows the same shape: validate preconditions,
//! mark the operation kind busy, spawn exactly one request task, and
//! when its completion message arrives, apply it only if it is still
//! the latest for that kind, restore the ready state, and emit exactly
//! one toast. Transport failures and backend-flagged errors surface
//! identically to the user but are logged with their distinct kinds.

use super::{App, AppMessage, Dialog, ListPurpose};
use crate::backend::{
    BackendError, FormatResponse, LintResponse, ListResponse, LoadResponse, RunResponse,
    SaveResponse,
};
use crate::state::output::{decode_figure, FigureEntry};
use crate::state::{OpKind, Severity};
use crate::{clipboard, storage};

impl App {
    /// Submit the document for execution.
    pub fn run_code(&mut self) {
        // Previous results are stale the moment a run is issued.
        self.output.clear();

        let seq = self.ops.begin(OpKind::Run);
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        let code = self.editor.content();

        let handle = tokio::spawn(async move {
            let result = client.run(&code).await;
            let _ = tx.send(AppMessage::RunFinished { seq, result });
        });
        self.ops.attach(OpKind::Run, handle);
    }

    /// Submit the document for formatting.
    pub fn format_code(&mut self) {
        let seq = self.ops.begin(OpKind::Format);
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        let code = self.editor.content();

        let handle = tokio::spawn(async move {
            let result = client.format(&code).await;
            let _ = tx.send(AppMessage::FormatFinished { seq, result });
        });
        self.ops.attach(OpKind::Format, handle);
    }

    /// Submit the document for linting.
    pub fn lint_code(&mut self) {
        let seq = self.ops.begin(OpKind::Lint);
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        let code = self.editor.content();

        let handle = tokio::spawn(async move {
            let result = client.lint(&code).await;
            let _ = tx.send(AppMessage::LintFinished { seq, result });
        });
        self.ops.attach(OpKind::Lint, handle);
    }

    /// Save under the current name, or open the save-as prompt when
    /// the document has no identity yet.
    pub fn save_current_or_prompt(&mut self) {
        match self.session.current_file() {
            Some(name) => {
                let name = name.to_string();
                self.save_as(&name);
            }
            None => {
                self.save_name.clear();
                self.dialog = Dialog::SaveAs;
            }
        }
    }

    /// Save the document under `filename`.
    ///
    /// An empty name is a client-side validation failure: one warning
    /// toast, zero network calls.
    pub fn save_as(&mut self, filename: &str) {
        if filename.trim().is_empty() {
            self.toast.notify("Please enter a file name", Severity::Warning);
            return;
        }

        let seq = self.ops.begin(OpKind::Save);
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        let filename = filename.to_string();
        let code = self.editor.content();

        let handle = tokio::spawn(async move {
            let result = client.save(&filename, &code).await;
            let _ = tx.send(AppMessage::SaveFinished { seq, filename, result });
        });
        self.ops.attach(OpKind::Save, handle);
    }

    /// Load a named file into the editor.
    pub fn load_into(&mut self, filename: &str) {
        let seq = self.ops.begin(OpKind::Load);
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        let filename = filename.to_string();

        let handle = tokio::spawn(async move {
            let result = client.load(&filename).await;
            let _ = tx.send(AppMessage::LoadFinished { seq, filename, result });
        });
        self.ops.attach(OpKind::Load, handle);
    }

    /// Refresh the sidebar file listing.
    pub fn refresh_files(&mut self) {
        self.request_listing(ListPurpose::Sidebar);
    }

    /// Open the file dialog and fetch a fresh listing for it.
    pub fn open_file_dialog(&mut self) {
        self.open_dialog.open();
        self.dialog = Dialog::OpenFile;
        self.request_listing(ListPurpose::OpenDialog);
    }

    fn request_listing(&mut self, purpose: ListPurpose) {
        let seq = self.ops.begin(OpKind::List);
        let client = self.client.clone();
        let tx = self.message_tx.clone();

        let handle = tokio::spawn(async move {
            let result = client.list().await;
            let _ = tx.send(AppMessage::ListFinished { seq, purpose, result });
        });
        self.ops.attach(OpKind::List, handle);
    }

    /// Copy the active panel's text to the clipboard.
    pub fn copy_panel(&mut self) {
        let Some(text) = self.output.active_text() else {
            self.toast
                .notify("Cannot copy visualizations directly", Severity::Info);
            return;
        };
        if text.trim().is_empty() {
            self.toast.notify("Nothing to copy", Severity::Info);
            return;
        }
        match clipboard::copy_text(text) {
            Ok(()) => self.toast.notify("Copied to clipboard", Severity::Success),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {}", e);
                self.toast
                    .notify("Failed to copy to clipboard", Severity::Error);
            }
        }
    }

    /// Apply a completion message from a request task.
    ///
    /// Completions whose sequence number has been superseded are
    /// dropped wholesale: no state change, no toast, no busy-flag
    /// change (the flag tracks the latest request of the kind).
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::RunFinished { seq, result } => {
                if !self.ops.finish(OpKind::Run, seq) {
                    tracing::debug!("Discarding superseded run completion (seq {})", seq);
                    return;
                }
                self.apply_run(seq, result);
            }
            AppMessage::FormatFinished { seq, result } => {
                if !self.ops.finish(OpKind::Format, seq) {
                    tracing::debug!("Discarding superseded format completion (seq {})", seq);
                    return;
                }
                self.apply_format(result);
            }
            AppMessage::LintFinished { seq, result } => {
                if !self.ops.finish(OpKind::Lint, seq) {
                    tracing::debug!("Discarding superseded lint completion (seq {})", seq);
                    return;
                }
                self.apply_lint(result);
            }
            AppMessage::SaveFinished { seq, filename, result } => {
                if !self.ops.finish(OpKind::Save, seq) {
                    tracing::debug!("Discarding superseded save completion (seq {})", seq);
                    return;
                }
                self.apply_save(&filename, result);
            }
            AppMessage::LoadFinished { seq, filename, result } => {
                if !self.ops.finish(OpKind::Load, seq) {
                    tracing::debug!("Discarding superseded load completion (seq {})", seq);
                    return;
                }
                self.apply_load(&filename, result);
            }
            AppMessage::ListFinished { seq, purpose, result } => {
                if !self.ops.finish(OpKind::List, seq) {
                    tracing::debug!("Discarding superseded list completion (seq {})", seq);
                    return;
                }
                self.apply_list(purpose, result);
            }
        }
    }

    fn apply_run(&mut self, seq: u64, result: Result<RunResponse, BackendError>) {
        match result {
            Ok(response) => {
                let figures = decode_run_figures(seq, &response);
                self.output.present(&response, figures);
                self.toast
                    .notify("Code executed successfully", Severity::Success);
            }
            Err(e) => {
                tracing::error!("Run request failed: {}", e);
                self.output.set_error_text(format!("Error: {}", e));
                self.toast.notify("Error executing code", Severity::Error);
            }
        }
    }

    fn apply_format(&mut self, result: Result<FormatResponse, BackendError>) {
        match result {
            Ok(FormatResponse { error: Some(error), .. }) => {
                self.output
                    .set_error_text(format!("Formatting error: {}", error));
                self.toast.notify("Error formatting code", Severity::Error);
            }
            Ok(FormatResponse { code: Some(code), .. }) => {
                self.session.replace_document(&mut self.editor, &code);
                self.toast
                    .notify("Code formatted successfully", Severity::Success);
            }
            Ok(FormatResponse { code: None, error: None }) => {
                self.output
                    .set_error_text("Formatting error: backend returned no code");
                self.toast.notify("Error formatting code", Severity::Error);
            }
            Err(e) => {
                tracing::error!("Format request failed: {}", e);
                self.output.set_error_text(format!("Error: {}", e));
                self.toast.notify(format!("Error: {}", e), Severity::Error);
            }
        }
    }

    fn apply_lint(&mut self, result: Result<LintResponse, BackendError>) {
        match result {
            Ok(LintResponse { error: Some(error), .. }) => {
                self.output.set_error_text(format!("Linting error: {}", error));
                self.toast.notify("Linting error", Severity::Error);
            }
            Ok(LintResponse { issues, .. }) => {
                let issues = issues.unwrap_or_default();
                self.output.present_lint_issues(&issues);
                self.editor
                    .set_flagged_lines(issues.iter().map(|i| i.line as usize).collect());
                if issues.is_empty() {
                    self.toast
                        .notify("No linting issues found", Severity::Success);
                } else {
                    self.toast.notify(
                        format!("Found {} linting issues", issues.len()),
                        Severity::Warning,
                    );
                }
            }
            Err(e) => {
                tracing::error!("Lint request failed: {}", e);
                self.output.set_error_text(format!("Error: {}", e));
                self.toast.notify(format!("Error: {}", e), Severity::Error);
            }
        }
    }

    fn apply_save(&mut self, filename: &str, result: Result<SaveResponse, BackendError>) {
        match result {
            Ok(SaveResponse { success: true, .. }) => {
                if self.dialog == Dialog::SaveAs {
                    self.dialog = Dialog::None;
                }
                self.session.record_saved(filename);
                self.toast
                    .notify(format!("File \"{}\" saved", filename), Severity::Success);
                // Keep the sidebar in sync with the new file.
                self.refresh_files();
            }
            Ok(SaveResponse { error, .. }) => {
                let error = error.unwrap_or_else(|| "save failed".to_string());
                self.toast.notify(format!("Error: {}", error), Severity::Error);
            }
            Err(e) => {
                tracing::error!("Save request failed: {}", e);
                self.toast
                    .notify(format!("Error saving file: {}", e), Severity::Error);
            }
        }
    }

    fn apply_load(&mut self, filename: &str, result: Result<LoadResponse, BackendError>) {
        match result {
            Ok(LoadResponse { success: true, code, .. }) => {
                let code = code.unwrap_or_default();
                self.session
                    .load_document(&mut self.editor, &mut self.output, filename, &code);
                self.toast
                    .notify(format!("File \"{}\" loaded", filename), Severity::Success);
            }
            Ok(LoadResponse { error, .. }) => {
                let error = error.unwrap_or_else(|| "load failed".to_string());
                self.toast.notify(format!("Error: {}", error), Severity::Error);
            }
            Err(e) => {
                tracing::error!("Load request failed: {}", e);
                self.toast
                    .notify(format!("Error loading file: {}", e), Severity::Error);
            }
        }
    }

    fn apply_list(&mut self, purpose: ListPurpose, result: Result<ListResponse, BackendError>) {
        match result {
            Ok(ListResponse { files }) => {
                // Any fresh listing is good for the sidebar too.
                self.browser.set_files(files.clone());
                if purpose == ListPurpose::OpenDialog && self.dialog == Dialog::OpenFile {
                    self.open_dialog.set_entries(files);
                }
            }
            Err(e) => {
                tracing::error!("List request failed: {}", e);
                if purpose == ListPurpose::OpenDialog && self.dialog == Dialog::OpenFile {
                    self.open_dialog.set_error(e.to_string());
                }
                self.toast
                    .notify(format!("Error loading files: {}", e), Severity::Error);
            }
        }
    }
}

/// Decode the run's figure payloads and write them to the data
/// directory so they can be opened in an external viewer.
fn decode_run_figures(run_seq: u64, response: &RunResponse) -> Vec<FigureEntry> {
    response
        .figures
        .iter()
        .enumerate()
        .map(|(index, payload)| {
            let mut entry = decode_figure(index, payload);
            if !entry.bytes.is_empty() {
                match storage::save_figure(run_seq, index, &entry.bytes) {
                    Ok(path) => entry.path = Some(path),
                    Err(e) => tracing::warn!("Failed to write figure {}: {}", index + 1, e),
                }
            }
            entry
        })
        .collect()
}
