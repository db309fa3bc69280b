//! Command dispatch table.
//!
//! One table maps key chords to workbench commands, so every trigger
//! path (primary accelerator, alternate accelerator, on-screen hint)
//! goes through the same dispatch and cannot diverge in behavior.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User-facing workbench commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Run,
    SaveOrPrompt,
    NewFile,
    OpenFile,
    Format,
    Lint,
    ToggleTheme,
    ClearOutput,
    CopyPanel,
    RefreshFiles,
    CycleFocus,
    Quit,
}

/// Key chord → command bindings. `Run` intentionally has two triggers.
const BINDINGS: &[(KeyCode, KeyModifiers, Command)] = &[
    (KeyCode::Char('r'), KeyModifiers::CONTROL, Command::Run),
    (KeyCode::F(5), KeyModifiers::NONE, Command::Run),
    (KeyCode::Char('s'), KeyModifiers::CONTROL, Command::SaveOrPrompt),
    (KeyCode::Char('n'), KeyModifiers::CONTROL, Command::NewFile),
    (KeyCode::Char('o'), KeyModifiers::CONTROL, Command::OpenFile),
    (KeyCode::Char('f'), KeyModifiers::CONTROL, Command::Format),
    (KeyCode::Char('l'), KeyModifiers::CONTROL, Command::Lint),
    (KeyCode::Char('t'), KeyModifiers::CONTROL, Command::ToggleTheme),
    (KeyCode::Char('k'), KeyModifiers::CONTROL, Command::ClearOutput),
    (KeyCode::Char('y'), KeyModifiers::CONTROL, Command::CopyPanel),
    (KeyCode::F(3), KeyModifiers::NONE, Command::RefreshFiles),
    (KeyCode::F(2), KeyModifiers::NONE, Command::CycleFocus),
    (KeyCode::Char('q'), KeyModifiers::CONTROL, Command::Quit),
];

/// Look up the command bound to a key event, if any.
pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    BINDINGS
        .iter()
        .find(|(code, modifiers, _)| *code == key.code && *modifiers == key.modifiers)
        .map(|(_, _, command)| *command)
}

/// Hint text for the status line.
pub fn status_hints() -> &'static str {
    "^R run  ^S save  ^O open  ^N new  ^F format  ^L lint  ^T theme  ^Y copy  F2 focus  ^Q quit"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_primary_and_alternate_run_triggers_agree() {
        let primary = command_for_key(&key(KeyCode::Char('r'), KeyModifiers::CONTROL));
        let alternate = command_for_key(&key(KeyCode::F(5), KeyModifiers::NONE));
        assert_eq!(primary, Some(Command::Run));
        assert_eq!(alternate, Some(Command::Run));
    }

    #[test]
    fn test_save_accelerator() {
        assert_eq!(
            command_for_key(&key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Command::SaveOrPrompt)
        );
    }

    #[test]
    fn test_plain_characters_are_not_commands() {
        assert_eq!(command_for_key(&key(KeyCode::Char('r'), KeyModifiers::NONE)), None);
        assert_eq!(command_for_key(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_every_binding_resolves_to_itself() {
        for (code, modifiers, command) in super::BINDINGS {
            assert_eq!(command_for_key(&key(*code, *modifiers)), Some(*command));
        }
    }
}
