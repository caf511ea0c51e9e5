use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_classes_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Enter | KeyCode::Char('f') | KeyCode::Char('F') => app.focus_at_cursor(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            if let Some(id) = app.cursor_entry().map(|e| e.id.clone()) {
                enqueue_action(action_tx, Action::RemoveClass { id });
            }
        }
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_add_dialog(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.open_notes_editor(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::RefreshActive);
        }
        KeyCode::Esc => app.clear_selection(),
        _ => {}
    }
}
