use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_notes_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            enqueue_action(action_tx, Action::SaveNotes);
        }
        KeyCode::Char('x') | KeyCode::Char('X')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.notes_input.clear();
        }
        KeyCode::Esc => app.close_notes_editor(),
        KeyCode::Enter => app.notes_input.insert('\n'),
        KeyCode::Backspace => app.notes_input.backspace(),
        KeyCode::Left => app.notes_input.move_left(),
        KeyCode::Right => app.notes_input.move_right(),
        KeyCode::Home => app.notes_input.home(),
        KeyCode::End => app.notes_input.end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.notes_input.insert(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::runtime::action_queue::channel;
    use crate::runtime::actions::run_action;
    use noterom_core::{ClassStore, FixedClock, MemorySlot};
    use time::macros::datetime;

    const STORED: &str = r#"[{"id":"a","name":"Art","date":"2026-10-19","start":"08:00","end":"09:00","notes":"old"}]"#;

    fn notes_app() -> App {
        let mut app = App::new(
            ClassStore::open(Box::new(MemorySlot::with_content(STORED))),
            Box::new(FixedClock(datetime!(2026-10-19 12:00 UTC))),
        );
        app.focus_at_cursor();
        app.open_notes_editor();
        app
    }

    #[test]
    fn ctrl_s_saves_typed_notes() {
        let mut app = notes_app();
        let (tx, mut rx) = channel();
        assert_eq!(app.notes_input.value, "old");

        handle_notes_key(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );
        for c in "<b>hi</b>".chars() {
            handle_notes_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), &mut app, &tx);
        }
        handle_notes_key(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );

        let action = rx.try_recv().expect("save should be queued");
        assert_eq!(action, Action::SaveNotes);
        run_action(action, &mut app);
        assert_eq!(app.store.entries()[0].notes, "<b>hi</b>");
    }

    #[test]
    fn escape_drops_unsaved_edits() {
        let mut app = notes_app();
        let (tx, mut rx) = channel();
        handle_notes_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut app, &tx);
        assert_eq!(app.notes_input.value, "old\n");

        handle_notes_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &mut app, &tx);
        assert_eq!(app.current_view, View::Classes);
        assert_eq!(app.notes_input.value, "old");
        assert_eq!(app.store.entries()[0].notes, "old");
        assert!(rx.try_recv().is_err());
    }
}
