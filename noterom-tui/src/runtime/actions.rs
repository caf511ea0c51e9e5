use crate::app::App;

use super::action_queue::Action;

/// Apply one queued action. Every mutation is followed by an active/focused
/// recompute inside the `App` methods it calls.
pub(super) fn run_action(action: Action, app: &mut App) {
    match action {
        Action::SubmitNewClass => app.submit_new_class(),
        Action::RemoveClass { id } => app.remove_class(&id),
        Action::SaveNotes => app.save_notes(),
        Action::RefreshActive => app.refresh_active(),
    }
}
