use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Handled internally.
    None,
    /// Reload config and fetch the feed again.
    Reload,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('r') => return InputAction::Reload,
        KeyCode::Left | KeyCode::Char('h') => app.move_item(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_item(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_section(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_section(1),
        _ => {}
    }
    InputAction::None
}
