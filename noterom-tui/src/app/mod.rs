use noterom_core::resolver::{self, ActiveSnapshot};
use noterom_core::time_utils::{clock_display, today_date_string};
use noterom_core::{ClassEntry, ClassStore, Clock, ScheduleError, UpdateNotesError};

mod navigation;
mod state;
pub use state::{ClassDialog, DialogField, TextInput, View};

pub struct App {
    pub running: bool,
    pub store: ClassStore,
    clock: Box<dyn Clock>,
    pub current_view: View,

    // Class list
    pub list_cursor: usize,

    // Result of the last active/focused recompute
    pub snapshot: ActiveSnapshot,
    pub clock_text: String,

    pub status_message: Option<String>,
    /// Blocking message; any key dismisses it.
    pub alert: Option<String>,

    pub dialog: ClassDialog,
    pub notes_input: TextInput,
}

impl App {
    pub fn new(store: ClassStore, clock: Box<dyn Clock>) -> Self {
        let today = today_date_string(clock.as_ref());
        let mut app = Self {
            running: true,
            store,
            clock,
            current_view: View::Classes,
            list_cursor: 0,
            snapshot: ActiveSnapshot::default(),
            clock_text: String::new(),
            status_message: None,
            alert: None,
            dialog: ClassDialog::new(&today),
            notes_input: TextInput::new(),
        };
        app.tick_clock();
        app.refresh_active();
        app
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Alert: {}", message);
        self.alert = Some(message);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn today(&self) -> String {
        today_date_string(self.clock.as_ref())
    }

    /// Refresh the live clock text.
    pub fn tick_clock(&mut self) {
        self.clock_text = clock_display(self.clock.as_ref());
    }

    /// Re-evaluate which class is active and which one is focused, and
    /// reload the notes buffer from the focused class unless it is being
    /// edited.
    pub fn refresh_active(&mut self) {
        self.snapshot = resolver::snapshot(
            self.store.entries(),
            self.store.selected_id(),
            self.clock.now(),
        );
        if self.current_view != View::EditNotes {
            self.reload_notes_input();
        }
    }

    pub fn focused_entry(&self) -> Option<&ClassEntry> {
        self.snapshot
            .focused_id
            .as_deref()
            .and_then(|id| self.store.get(id))
    }

    fn reload_notes_input(&mut self) {
        let notes = self
            .focused_entry()
            .map(|e| e.notes.clone())
            .unwrap_or_default();
        self.notes_input = TextInput::from_str(&notes);
    }

    /// Open the creation dialog, unless the schedule is already full.
    pub fn open_add_dialog(&mut self) {
        if self.store.is_full() {
            self.show_alert(ScheduleError::CapacityReached.to_string());
            return;
        }
        self.dialog = ClassDialog::new(&self.today());
        self.navigate_to(View::AddClass);
    }

    /// Close the creation dialog and reset the form.
    pub fn close_add_dialog(&mut self) {
        self.dialog = ClassDialog::new(&self.today());
        self.navigate_to(View::Classes);
    }

    /// Validate the dialog and add the class.
    ///
    /// A missing name or start time keeps the dialog open with a hint, the
    /// way a required form field would; other validation failures raise an
    /// alert. Nothing changes unless validation passes.
    pub fn submit_new_class(&mut self) {
        let draft = self.dialog.to_new_class();
        let entry = match draft.into_entry(self.store.len(), self.clock.as_ref()) {
            Ok(entry) => entry,
            Err(e @ (ScheduleError::MissingName | ScheduleError::MissingStart)) => {
                self.dialog.focused_field = if matches!(e, ScheduleError::MissingName) {
                    DialogField::Name
                } else {
                    DialogField::Start
                };
                self.set_status(e.to_string());
                return;
            }
            Err(e) => {
                self.show_alert(e.to_string());
                return;
            }
        };

        let name = entry.name.clone();
        let result = self.store.add(entry);
        self.list_cursor = self.store.len().saturating_sub(1);
        self.close_add_dialog();
        self.refresh_active();
        match result {
            Ok(()) => self.set_status(format!("Added {}", name)),
            Err(e) => self.show_alert(format!("Could not save classes: {}", e)),
        }
    }

    /// Make the class under the cursor the selected one.
    pub fn focus_at_cursor(&mut self) {
        let Some(id) = self.cursor_entry().map(|e| e.id.clone()) else {
            return;
        };
        self.store.select(&id);
        self.refresh_active();
    }

    pub fn remove_class(&mut self, id: &str) {
        let name = self.store.get(id).map(|e| e.name.clone());
        let result = self.store.remove(id);
        self.clamp_cursor();
        self.refresh_active();
        match (result, name) {
            (Err(e), _) => self.show_alert(format!("Could not save classes: {}", e)),
            (Ok(()), Some(name)) => self.set_status(format!("Removed {}", name)),
            (Ok(()), None) => {}
        }
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
        self.refresh_active();
    }

    pub fn open_notes_editor(&mut self) {
        self.reload_notes_input();
        self.navigate_to(View::EditNotes);
    }

    /// Leave the editor without saving; the buffer goes back to the
    /// focused class's stored notes.
    pub fn close_notes_editor(&mut self) {
        self.navigate_to(View::Classes);
        self.reload_notes_input();
    }

    /// Save the editor buffer as notes of the selected class.
    pub fn save_notes(&mut self) {
        let html = self.notes_input.value.clone();
        match self.store.update_notes(&html) {
            Ok(()) => {
                self.set_status("Notes saved");
                self.refresh_active();
            }
            Err(UpdateNotesError::Validation(e)) => self.show_alert(e.to_string()),
            Err(UpdateNotesError::Storage(e)) => {
                self.show_alert(format!("Could not save notes: {}", e))
            }
        }
    }

    /// Text for the status bar: a pending message, else the resolver's line.
    pub fn status_text(&self) -> &str {
        self.status_message
            .as_deref()
            .unwrap_or(&self.snapshot.status_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noterom_core::storage::load_classes;
    use noterom_core::{FileSlot, FixedClock, MemorySlot, MAX_CLASSES};
    use time::macros::datetime;

    fn clock() -> Box<dyn Clock> {
        Box::new(FixedClock(datetime!(2026-10-19 09:45 UTC)))
    }

    fn memory_app() -> App {
        App::new(ClassStore::open(Box::new(MemorySlot::new())), clock())
    }

    fn fill_dialog(app: &mut App, name: &str, start: &str, end: &str, duration: &str) {
        app.open_add_dialog();
        app.dialog.name = TextInput::from_str(name);
        app.dialog.start = TextInput::from_str(start);
        app.dialog.end = TextInput::from_str(end);
        app.dialog.duration = TextInput::from_str(duration);
    }

    #[test]
    fn create_select_and_save_notes_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.json");
        let mut app = App::new(ClassStore::open(Box::new(FileSlot::new(&path))), clock());

        fill_dialog(&mut app, "Algebra", "09:00", "", "01:30");
        app.submit_new_class();

        assert_eq!(app.current_view, View::Classes);
        let stored = load_classes(&FileSlot::new(&path));
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].end, "10:30");
        assert_eq!(stored[0].date, "2026-10-19");

        app.focus_at_cursor();
        app.open_notes_editor();
        app.notes_input = TextInput::from_str("<b>hi</b>");
        app.save_notes();

        let stored = load_classes(&FileSlot::new(&path));
        assert_eq!(stored[0].notes, "<b>hi</b>");
        assert!(app.alert.is_none());
    }

    #[test]
    fn new_class_is_selected_and_active() {
        let mut app = memory_app();
        fill_dialog(&mut app, "Algebra", "09:00", "", "01:30");
        app.submit_new_class();

        let id = app.store.entries()[0].id.clone();
        assert_eq!(app.store.selected_id(), Some(id.as_str()));
        assert_eq!(app.snapshot.active_id.as_deref(), Some(id.as_str()));
        assert_eq!(app.snapshot.status_line, "Active: Algebra (09:00 → 10:30)");
    }

    #[test]
    fn dialog_refuses_to_open_when_full() {
        let mut app = memory_app();
        for i in 0..MAX_CLASSES {
            fill_dialog(&mut app, &format!("Class {i}"), "08:00", "08:30", "");
            app.submit_new_class();
        }
        assert_eq!(app.store.len(), MAX_CLASSES);

        app.open_add_dialog();
        assert_eq!(app.current_view, View::Classes);
        assert_eq!(app.alert.as_deref(), Some("Only 8 classes are allowed."));
        assert_eq!(app.store.len(), MAX_CLASSES);
    }

    #[test]
    fn missing_end_alerts_without_adding() {
        let mut app = memory_app();
        fill_dialog(&mut app, "Art", "13:00", "", "");
        app.submit_new_class();

        assert_eq!(
            app.alert.as_deref(),
            Some("Please provide an end time or a duration.")
        );
        assert!(app.store.is_empty());
        assert_eq!(app.current_view, View::AddClass);
    }

    #[test]
    fn missing_name_keeps_dialog_open_without_alert() {
        let mut app = memory_app();
        fill_dialog(&mut app, "", "13:00", "14:00", "");
        app.dialog.focused_field = DialogField::End;
        app.submit_new_class();

        assert!(app.alert.is_none());
        assert_eq!(app.current_view, View::AddClass);
        assert_eq!(app.dialog.focused_field, DialogField::Name);
        assert!(app.store.is_empty());
    }

    #[test]
    fn saving_notes_without_selection_alerts() {
        let mut app = memory_app();
        fill_dialog(&mut app, "Art", "13:00", "14:00", "");
        app.submit_new_class();
        app.clear_selection();

        app.notes_input = TextInput::from_str("draft");
        app.save_notes();

        assert_eq!(app.alert.as_deref(), Some("Select a class to save notes."));
        assert_eq!(app.store.entries()[0].notes, "");
    }

    #[test]
    fn removing_selected_class_clears_focus() {
        let mut app = memory_app();
        fill_dialog(&mut app, "Art", "13:00", "14:00", "");
        app.submit_new_class();
        let id = app.store.entries()[0].id.clone();

        app.remove_class(&id);

        assert!(app.store.is_empty());
        assert_eq!(app.store.selected_id(), None);
        assert_eq!(app.snapshot.focused_id, None);
        assert_eq!(app.list_cursor, 0);
    }

    #[test]
    fn refresh_does_not_clobber_notes_being_edited() {
        let mut app = memory_app();
        fill_dialog(&mut app, "Art", "09:00", "10:00", "");
        app.submit_new_class();
        app.open_notes_editor();
        app.notes_input.insert('x');

        app.refresh_active();
        assert_eq!(app.notes_input.value, "x");

        app.close_notes_editor();
        assert_eq!(app.notes_input.value, "");
    }
}
