//! Mapping from terminal events to session actions.

use crate::types::LifeAction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map any terminal event to an action.
///
/// Only key presses count; repeats and releases are ignored so a held key does
/// not reseed every frame on terminals that report them.
pub fn map_event(event: &Event) -> Option<LifeAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        Event::Resize(w, h) => Some(LifeAction::Resize(*w, *h)),
        _ => None,
    }
}

/// Map keyboard input to actions.
pub fn handle_key_event(key: KeyEvent) -> Option<LifeAction> {
    if should_quit(key) {
        return Some(LifeAction::Quit);
    }

    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(LifeAction::Reseed),
        _ => None,
    }
}

/// Escape or Ctrl+C.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
