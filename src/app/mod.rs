//! Application state and logic for the workbench TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - which pane receives plain key input
//! - [`Dialog`] - which modal, if any, is open
//! - [`AppMessage`] - completion messages from request tasks
//! - [`Command`] - the dispatch table shared by all trigger paths

mod commands;
mod handlers;
mod messages;
mod ops;

pub use commands::{command_for_key, status_hints, Command};
pub use messages::{AppMessage, ListPurpose};

use tokio::sync::mpsc;

use crate::backend::BackendClient;
use crate::config::{Settings, SettingsManager, Theme};
use crate::state::{FileBrowser, FileSession, OpTracker, OpenDialog, OutputState, ToastSlot};
use crate::widgets::editor::EditorInput;

/// Which pane receives plain (non-command) key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Editor,
    Output,
    Files,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Editor => Focus::Output,
            Focus::Output => Focus::Files,
            Focus::Files => Focus::Editor,
        }
    }
}

/// Which modal dialog is open, if any. Dialogs capture all key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    None,
    /// Open-file picker with live filtering.
    OpenFile,
    /// Save-as name prompt.
    SaveAs,
    /// "Create a new file?" confirmation.
    ConfirmNew,
    /// "Quit with unsaved changes?" confirmation.
    ConfirmQuit,
}

/// Main application state.
pub struct App {
    /// The editing surface holding the current document.
    pub editor: EditorInput,
    /// Current file identity and dirty flag.
    pub session: FileSession,
    /// The three result panels.
    pub output: OutputState,
    /// Sidebar file listing.
    pub browser: FileBrowser,
    /// Modal open-file dialog state.
    pub open_dialog: OpenDialog,
    /// Single-slot toast notifications.
    pub toast: ToastSlot,
    /// In-flight request tracking and sequencing.
    pub ops: OpTracker,
    /// Active theme.
    pub theme: Theme,
    /// Which pane has focus.
    pub focus: Focus,
    /// Which modal dialog is open.
    pub dialog: Dialog,
    /// Name being typed in the save-as prompt.
    pub save_name: String,
    /// Flag to track if the app should quit.
    pub should_quit: bool,
    /// Backend API client (cloned into request tasks).
    pub client: BackendClient,
    /// Sender side of the completion channel (cloned into tasks).
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver side, taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Settings value mirrored from disk.
    settings: Settings,
    /// Settings persistence, absent when no config dir exists.
    settings_manager: Option<SettingsManager>,
}

impl App {
    /// Create the app with a seeded sample document and the persisted
    /// theme already applied.
    pub fn new(client: BackendClient, settings: Settings, manager: Option<SettingsManager>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut editor = EditorInput::new();
        let mut session = FileSession::new();
        session.seed_sample(&mut editor);

        let theme = settings.theme;
        editor.apply_theme(theme);

        Self {
            editor,
            session,
            output: OutputState::new(),
            browser: FileBrowser::new(),
            open_dialog: OpenDialog::new(),
            toast: ToastSlot::new(),
            ops: OpTracker::new(),
            theme,
            focus: Focus::default(),
            dialog: Dialog::default(),
            save_name: String::new(),
            should_quit: false,
            client,
            message_tx,
            message_rx: Some(message_rx),
            settings,
            settings_manager: manager,
        }
    }

    /// Work done once at startup, before the first frame is useful:
    /// kick off the initial sidebar listing.
    pub fn bootstrap(&mut self) {
        self.refresh_files();
    }

    /// Periodic tick from the event loop.
    pub fn on_tick(&mut self) {
        self.toast.tick(std::time::Instant::now());
    }

    /// Flip the theme, re-style the editor, and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.editor.apply_theme(self.theme);
        self.settings.theme = self.theme;
        if let Some(manager) = &self.settings_manager {
            if let Err(e) = manager.save(&self.settings) {
                tracing::warn!("Failed to persist theme: {}", e);
            }
        }
        tracing::info!("Theme switched to {}", self.theme.label());
    }

    /// Begin shutdown: abort in-flight requests and leave the loop.
    pub fn quit(&mut self) {
        self.ops.abort_all();
        self.should_quit = true;
    }
}
