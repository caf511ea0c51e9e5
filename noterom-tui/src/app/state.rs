use noterom_core::NewClass;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Classes,
    AddClass,
    EditNotes,
}

/// Single text buffer with a byte-offset cursor that always sits on a char
/// boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// (before cursor, after cursor)
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogField {
    Name,
    Date,
    Start,
    End,
    Duration,
}

impl DialogField {
    pub const ALL: [DialogField; 5] = [
        DialogField::Name,
        DialogField::Date,
        DialogField::Start,
        DialogField::End,
        DialogField::Duration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DialogField::Name => "Class name",
            DialogField::Date => "Date",
            DialogField::Start => "Start",
            DialogField::End => "End",
            DialogField::Duration => "Duration",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            DialogField::Name => "required",
            DialogField::Date => "YYYY-MM-DD",
            DialogField::Start => "HH:MM",
            DialogField::End => "HH:MM (or use duration)",
            DialogField::Duration => "HH:MM",
        }
    }

    fn next(self) -> Self {
        match self {
            DialogField::Name => DialogField::Date,
            DialogField::Date => DialogField::Start,
            DialogField::Start => DialogField::End,
            DialogField::End => DialogField::Duration,
            DialogField::Duration => DialogField::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            DialogField::Name => DialogField::Duration,
            DialogField::Date => DialogField::Name,
            DialogField::Start => DialogField::Date,
            DialogField::End => DialogField::Start,
            DialogField::Duration => DialogField::End,
        }
    }
}

/// The "add class" form.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDialog {
    pub name: TextInput,
    pub date: TextInput,
    pub start: TextInput,
    pub end: TextInput,
    pub duration: TextInput,
    pub focused_field: DialogField,
}

impl ClassDialog {
    /// Empty form with the date pre-filled.
    pub fn new(today: &str) -> Self {
        Self {
            name: TextInput::new(),
            date: TextInput::from_str(today),
            start: TextInput::new(),
            end: TextInput::new(),
            duration: TextInput::new(),
            focused_field: DialogField::Name,
        }
    }

    pub fn field(&self, field: DialogField) -> &TextInput {
        match field {
            DialogField::Name => &self.name,
            DialogField::Date => &self.date,
            DialogField::Start => &self.start,
            DialogField::End => &self.end,
            DialogField::Duration => &self.duration,
        }
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            DialogField::Name => &mut self.name,
            DialogField::Date => &mut self.date,
            DialogField::Start => &mut self.start,
            DialogField::End => &mut self.end,
            DialogField::Duration => &mut self.duration,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn previous_field(&mut self) {
        self.focused_field = self.focused_field.previous();
    }

    pub fn is_last_field(&self) -> bool {
        self.focused_field == DialogField::Duration
    }

    pub fn to_new_class(&self) -> NewClass {
        NewClass {
            name: self.name.value.clone(),
            date: self.date.value.clone(),
            start: self.start.value.clone(),
            end: self.end.value.clone(),
            duration: self.duration.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backspace_respects_multibyte_chars() {
        let mut input = TextInput::from_str("café");
        input.backspace();
        assert_eq!(input.value, "caf");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = TextInput::from_str("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value, "abc");
        assert_eq!(input.split_at_cursor(), ("ab", "c"));
    }

    #[test]
    fn cursor_stops_at_edges() {
        let mut input = TextInput::from_str("é");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.home();
        input.move_left();
        input.backspace();
        assert_eq!(input.cursor, 0);
        assert_eq!(input.value, "é");
    }

    #[test]
    fn dialog_fields_cycle() {
        let mut dialog = ClassDialog::new("2026-10-19");
        for _ in 0..DialogField::ALL.len() {
            dialog.next_field();
        }
        assert_eq!(dialog.focused_field, DialogField::Name);
        dialog.previous_field();
        assert!(dialog.is_last_field());
    }

    #[test]
    fn dialog_prefills_date() {
        let dialog = ClassDialog::new("2026-10-19");
        assert_eq!(dialog.to_new_class().date, "2026-10-19");
        assert_eq!(dialog.focused_field, DialogField::Name);
    }
}
