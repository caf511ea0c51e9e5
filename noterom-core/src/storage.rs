use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::ClassEntry;
use crate::error::StorageError;

/// The single durable key-value slot holding the whole class list.
pub trait StorageSlot {
    /// Current slot content, `None` when nothing has been stored yet.
    fn read(&self) -> io::Result<Option<String>>;
    /// Overwrite the slot.
    fn write(&self, value: &str) -> io::Result<()>;
    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;
}

/// Slot backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, value: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, value)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-process slot. Content lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: RefCell<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(raw: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(raw.into())),
        }
    }

    pub fn content(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn write(&self, value: &str) -> io::Result<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory slot".to_string()
    }
}

/// Load the stored class list.
///
/// Absent, unreadable or unparseable data all yield an empty list; the
/// failure is logged and never surfaced.
pub fn load_classes(slot: &dyn StorageSlot) -> Vec<ClassEntry> {
    let raw = match slot.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", slot.describe(), e);
            return Vec::new();
        }
    };

    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<ClassEntry>>(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                "Discarding unparseable class list in {}: {}",
                slot.describe(),
                e
            );
            Vec::new()
        }
    }
}

/// Serialize the full list and overwrite the slot.
pub fn save_classes(slot: &dyn StorageSlot, entries: &[ClassEntry]) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(entries)?;
    slot.write(&json).map_err(|source| StorageError::Write {
        target: slot.describe(),
        source,
    })
}
