use crossterm::event::KeyEvent;
use smak_core::action::Action;
use smak_core::config::{Command, KeysConfig};
use smak_core::state::BrowserState;

/// Resolve a key event into an Action through the key map of the current mode
pub fn resolve_action(key: KeyEvent, state: &BrowserState, keys: &KeysConfig) -> Option<Action> {
    let key = smak_core::KeyEvent::from_crossterm(key)?;
    let keymap = keys.keymap_for_mode(&state.mode);
    command_to_action(keymap.get(&key)?)
}

fn command_to_action(command: &Command) -> Option<Action> {
    let action = match command {
        Command::Noop => return None,
        Command::Quit => Action::Quit,
        Command::Confirm => Action::Confirm,
        Command::Cancel => Action::Cancel,
        Command::ToggleDelete => Action::ToggleDelete,
        Command::StartMerge => Action::StartMerge,
        Command::MoveUp => Action::MoveUp,
        Command::MoveDown => Action::MoveDown,
        Command::HalfPageUp => Action::HalfPageUp,
        Command::HalfPageDown => Action::HalfPageDown,
        Command::PageUp => Action::PageUp,
        Command::PageDown => Action::PageDown,
        Command::MoveTop => Action::MoveTop,
        Command::MoveBottom => Action::MoveBottom,
    };
    Some(action)
}
