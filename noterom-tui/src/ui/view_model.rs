//! Plain data the renderers draw from. Everything here is a pure function
//! of the class list, the selection and the active class.

use noterom_core::notes::notes_preview;
use noterom_core::time_utils::format_time_range;
use noterom_core::ClassEntry;

pub const EMPTY_HINT: &str = "No classes scheduled yet.";
pub const PLACEHOLDER_TITLE: &str = "Active Class";
pub const PLACEHOLDER_BODY: &str = "Select a class or wait for the scheduled time.";

#[derive(Debug, Clone, PartialEq)]
pub struct ClassCard {
    pub id: String,
    pub title: String,
    /// `"{date} · {start} → {end}"`
    pub meta: String,
    pub is_selected: bool,
    pub is_active: bool,
}

pub fn class_meta(entry: &ClassEntry) -> String {
    format!("{} · {}", entry.date, format_time_range(entry))
}

pub fn class_cards(
    entries: &[ClassEntry],
    selected_id: Option<&str>,
    active_id: Option<&str>,
) -> Vec<ClassCard> {
    entries
        .iter()
        .map(|entry| ClassCard {
            id: entry.id.clone(),
            title: entry.name.clone(),
            meta: class_meta(entry),
            is_selected: selected_id == Some(entry.id.as_str()),
            is_active: active_id == Some(entry.id.as_str()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub subtitle: String,
    pub notes_preview: Option<String>,
}

pub fn detail_view(focused: Option<&ClassEntry>) -> DetailView {
    match focused {
        Some(entry) => DetailView {
            title: entry.name.clone(),
            subtitle: class_meta(entry),
            notes_preview: Some(notes_preview(&entry.notes)),
        },
        None => DetailView {
            title: PLACEHOLDER_TITLE.to_string(),
            subtitle: PLACEHOLDER_BODY.to_string(),
            notes_preview: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> ClassEntry {
        ClassEntry {
            id: id.to_string(),
            name: name.to_string(),
            date: "2026-10-19".to_string(),
            start: "10:00".to_string(),
            end: "10:30".to_string(),
            notes: "<b>hi</b>".to_string(),
        }
    }

    #[test]
    fn cards_keep_list_order_and_marks() {
        let entries = vec![entry("1", "Algebra"), entry("2", "Biology")];
        let cards = class_cards(&entries, Some("2"), Some("1"));

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Algebra");
        assert_eq!(cards[0].meta, "2026-10-19 · 10:00 → 10:30");
        assert!(cards[0].is_active && !cards[0].is_selected);
        assert!(cards[1].is_selected && !cards[1].is_active);
    }

    #[test]
    fn no_entries_no_cards() {
        assert!(class_cards(&[], None, None).is_empty());
    }

    #[test]
    fn detail_without_focus_shows_placeholder() {
        let view = detail_view(None);
        assert_eq!(view.title, PLACEHOLDER_TITLE);
        assert_eq!(view.subtitle, PLACEHOLDER_BODY);
        assert_eq!(view.notes_preview, None);
    }

    #[test]
    fn detail_renders_notes_as_text() {
        let e = entry("1", "Algebra");
        let view = detail_view(Some(&e));
        assert_eq!(view.title, "Algebra");
        assert!(view.notes_preview.unwrap().contains("hi"));
    }
}
