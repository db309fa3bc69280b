//! Key-event handling.
//!
//! Routing order is fixed: an open dialog captures everything, then the
//! command table, then the focused pane. Plain typing therefore never
//! reaches the editor while a dialog is up, and accelerators behave the
//! same regardless of focus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{command_for_key, App, Command, Dialog, Focus};

impl App {
    /// Handle one key event from the terminal.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match self.dialog {
            Dialog::OpenFile => self.handle_open_dialog_key(key),
            Dialog::SaveAs => self.handle_save_dialog_key(key),
            Dialog::ConfirmNew => {
                if confirm_accepted(&key) {
                    self.dialog = Dialog::None;
                    self.session.new_document(&mut self.editor, &mut self.output);
                } else if confirm_declined(&key) {
                    self.dialog = Dialog::None;
                }
            }
            Dialog::ConfirmQuit => {
                if confirm_accepted(&key) {
                    self.quit();
                } else if confirm_declined(&key) {
                    self.dialog = Dialog::None;
                }
            }
            Dialog::None => {
                if let Some(command) = command_for_key(&key) {
                    self.dispatch(command);
                } else {
                    self.handle_focused_key(key);
                }
            }
        }
    }

    /// Execute a workbench command. Every trigger path funnels here.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Run => self.run_code(),
            Command::SaveOrPrompt => self.save_current_or_prompt(),
            Command::NewFile => self.request_new_file(),
            Command::OpenFile => self.open_file_dialog(),
            Command::Format => self.format_code(),
            Command::Lint => self.lint_code(),
            Command::ToggleTheme => self.toggle_theme(),
            Command::ClearOutput => self.output.clear(),
            Command::CopyPanel => self.copy_panel(),
            Command::RefreshFiles => self.refresh_files(),
            Command::CycleFocus => self.focus = self.focus.next(),
            Command::Quit => self.request_quit(),
        }
    }

    /// Start a new document, asking first when edits would be lost.
    pub fn request_new_file(&mut self) {
        if self.session.is_dirty() {
            self.dialog = Dialog::ConfirmNew;
        } else {
            self.session.new_document(&mut self.editor, &mut self.output);
        }
    }

    /// Quit, asking first when edits would be lost.
    pub fn request_quit(&mut self) {
        if self.session.is_dirty() {
            self.dialog = Dialog::ConfirmQuit;
        } else {
            self.quit();
        }
    }

    fn handle_open_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.open_dialog.close();
                self.dialog = Dialog::None;
            }
            KeyCode::Up => self.open_dialog.move_up(),
            KeyCode::Down => self.open_dialog.move_down(),
            KeyCode::Enter => {
                if let Some(name) = self.open_dialog.selected_entry().map(String::from) {
                    self.open_dialog.close();
                    self.dialog = Dialog::None;
                    self.load_into(&name);
                }
            }
            KeyCode::Backspace => self.open_dialog.pop_query(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.open_dialog.push_query(c);
            }
            _ => {}
        }
    }

    fn handle_save_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.save_name.clear();
                self.dialog = Dialog::None;
            }
            KeyCode::Enter => {
                // The dialog stays open until the save succeeds (or the
                // name was empty, which only warns).
                let name = self.save_name.clone();
                self.save_as(&name);
            }
            KeyCode::Backspace => {
                self.save_name.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.save_name.push(c);
            }
            _ => {}
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Editor => {
                if self.editor.input(key) {
                    self.session.mark_dirty();
                }
            }
            Focus::Output => match key.code {
                KeyCode::Tab | KeyCode::Right => self.output.select_next_panel(),
                _ => {}
            },
            Focus::Files => match key.code {
                KeyCode::Up => self.browser.move_up(),
                KeyCode::Down => self.browser.move_down(),
                KeyCode::Enter => {
                    if let Some(name) = self.browser.selected_file().map(String::from) {
                        self.load_into(&name);
                    }
                }
                _ => {}
            },
        }
    }
}

/// y / Y / Enter accept a confirmation prompt.
fn confirm_accepted(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter)
}

/// n / N / Esc decline it.
fn confirm_declined(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc)
}
