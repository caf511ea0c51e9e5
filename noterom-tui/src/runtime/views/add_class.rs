use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_add_class_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Esc => app.close_add_dialog(),
        KeyCode::Char('s') | KeyCode::Char('S')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            enqueue_action(action_tx, Action::SubmitNewClass);
        }
        KeyCode::Char('x') | KeyCode::Char('X')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.dialog.focused_input().clear();
        }
        KeyCode::Enter => {
            if app.dialog.is_last_field() {
                enqueue_action(action_tx, Action::SubmitNewClass);
            } else {
                app.dialog.next_field();
            }
        }
        KeyCode::Tab | KeyCode::Down => app.dialog.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.dialog.previous_field(),
        KeyCode::Left => app.dialog.focused_input().move_left(),
        KeyCode::Right => app.dialog.focused_input().move_right(),
        KeyCode::Home => app.dialog.focused_input().home(),
        KeyCode::End => app.dialog.focused_input().end(),
        KeyCode::Backspace => app.dialog.focused_input().backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dialog.focused_input().insert(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{DialogField, View};
    use crate::runtime::action_queue::channel;
    use crate::runtime::actions::run_action;
    use noterom_core::{ClassStore, FixedClock, MemorySlot};
    use time::macros::datetime;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, tx: &ActionTx, s: &str) {
        for c in s.chars() {
            handle_add_class_key(key(KeyCode::Char(c)), app, tx);
        }
    }

    fn dialog_app() -> App {
        let mut app = App::new(
            ClassStore::open(Box::new(MemorySlot::new())),
            Box::new(FixedClock(datetime!(2026-10-19 09:00 UTC))),
        );
        app.open_add_dialog();
        app
    }

    #[test]
    fn typing_through_the_form_submits_on_last_field() {
        let mut app = dialog_app();
        let (tx, mut rx) = channel();

        type_str(&mut app, &tx, "Algebra");
        handle_add_class_key(key(KeyCode::Enter), &mut app, &tx); // -> date (pre-filled)
        handle_add_class_key(key(KeyCode::Enter), &mut app, &tx); // -> start
        type_str(&mut app, &tx, "09:00");
        handle_add_class_key(key(KeyCode::Enter), &mut app, &tx); // -> end
        handle_add_class_key(key(KeyCode::Enter), &mut app, &tx); // -> duration
        type_str(&mut app, &tx, "01:30");
        assert_eq!(app.dialog.focused_field, DialogField::Duration);
        handle_add_class_key(key(KeyCode::Enter), &mut app, &tx);

        let action = rx.try_recv().expect("submit should be queued");
        assert_eq!(action, Action::SubmitNewClass);
        run_action(action, &mut app);

        assert_eq!(app.current_view, View::Classes);
        let entry = &app.store.entries()[0];
        assert_eq!(entry.name, "Algebra");
        assert_eq!(entry.date, "2026-10-19");
        assert_eq!(entry.end, "10:30");
    }

    #[test]
    fn escape_discards_the_form() {
        let mut app = dialog_app();
        let (tx, mut rx) = channel();
        type_str(&mut app, &tx, "Draft");
        handle_add_class_key(key(KeyCode::Esc), &mut app, &tx);

        assert_eq!(app.current_view, View::Classes);
        assert_eq!(app.dialog.name.value, "");
        assert!(rx.try_recv().is_err());
        assert!(app.store.is_empty());
    }

    #[test]
    fn ctrl_x_clears_only_the_focused_field() {
        let mut app = dialog_app();
        let (tx, _rx) = channel();
        type_str(&mut app, &tx, "Bio");
        handle_add_class_key(key(KeyCode::Tab), &mut app, &tx);
        handle_add_class_key(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );
        assert_eq!(app.dialog.date.value, "");
        assert_eq!(app.dialog.name.value, "Bio");
    }
}
