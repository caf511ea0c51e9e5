use super::*;

impl App {
    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();
    }

    pub fn cursor_entry(&self) -> Option<&ClassEntry> {
        self.store.entries().get(self.list_cursor)
    }

    /// Move the list cursor down (j / Down)
    pub fn cursor_down(&mut self) {
        if self.list_cursor + 1 < self.store.len() {
            self.list_cursor += 1;
        }
    }

    /// Move the list cursor up (k / Up)
    pub fn cursor_up(&mut self) {
        self.list_cursor = self.list_cursor.saturating_sub(1);
    }

    pub(super) fn clamp_cursor(&mut self) {
        self.list_cursor = self.list_cursor.min(self.store.len().saturating_sub(1));
    }
}
