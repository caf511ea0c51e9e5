use crate::app::{App, View};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod add_class;
mod classes;
mod notes;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // An open alert swallows the key that dismisses it.
    if app.alert.is_some() {
        app.dismiss_alert();
        return;
    }

    app.clear_status();
    match app.current_view {
        View::Classes => classes::handle_classes_key(key, app, action_tx),
        View::AddClass => add_class::handle_add_class_key(key, app, action_tx),
        View::EditNotes => notes::handle_notes_key(key, app, action_tx),
    }
}
