use crate::entry::{ClassEntry, MAX_CLASSES};
use crate::error::{ScheduleError, StorageError};
use crate::storage::{load_classes, save_classes, StorageSlot};

/// In-memory class list plus the current selection, persisted to a slot
/// after every mutation.
pub struct ClassStore {
    entries: Vec<ClassEntry>,
    selected_id: Option<String>,
    slot: Box<dyn StorageSlot>,
}

impl ClassStore {
    pub fn open(slot: Box<dyn StorageSlot>) -> Self {
        let entries = load_classes(slot.as_ref());
        tracing::debug!("Loaded {} classes from {}", entries.len(), slot.describe());
        Self {
            entries,
            selected_id: None,
            slot,
        }
    }

    pub fn entries(&self) -> &[ClassEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_CLASSES
    }

    pub fn get(&self, id: &str) -> Option<&ClassEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected(&self) -> Option<&ClassEntry> {
        self.selected_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn storage_location(&self) -> String {
        self.slot.describe()
    }

    /// Append an entry, select it and persist. Validation is the caller's job.
    pub fn add(&mut self, entry: ClassEntry) -> Result<(), StorageError> {
        tracing::debug!("Adding class {} ({})", entry.name, entry.id);
        self.selected_id = Some(entry.id.clone());
        self.entries.push(entry);
        self.persist()
    }

    /// Remove an entry by id, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: &str) -> Result<(), StorageError> {
        tracing::debug!("Removing class {}", id);
        self.entries.retain(|e| e.id != id);
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        self.persist()
    }

    /// Select an existing entry. Returns `false` for unknown ids.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected_id = Some(id.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Replace the notes of the selected entry and persist.
    pub fn update_notes(&mut self, html: &str) -> Result<(), UpdateNotesError> {
        let id = self
            .selected_id
            .clone()
            .ok_or(UpdateNotesError::Validation(ScheduleError::NoSelection))?;
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.notes = html.to_string(),
            None => return Err(UpdateNotesError::Validation(ScheduleError::NoSelection)),
        }
        tracing::debug!("Saved notes for class {}", id);
        self.persist().map_err(UpdateNotesError::Storage)
    }

    fn persist(&self) -> Result<(), StorageError> {
        save_classes(self.slot.as_ref(), &self.entries).inspect_err(|e| {
            tracing::error!("Failed to persist classes: {}", e);
        })
    }
}

/// Either the notes could not be attached or they could not be written.
#[derive(Debug, thiserror::Error)]
pub enum UpdateNotesError {
    #[error(transparent)]
    Validation(#[from] ScheduleError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
