//! Class schedule model: entries, their storage slot, the in-memory store
//! and the active-class resolver.

pub mod entry;
pub mod error;
pub mod notes;
pub mod resolver;
pub mod storage;
pub mod store;
pub mod time_utils;

pub use entry::{ClassEntry, NewClass, MAX_CLASSES};
pub use error::{ScheduleError, StorageError};
pub use resolver::ActiveSnapshot;
pub use storage::{FileSlot, MemorySlot, StorageSlot};
pub use store::{ClassStore, UpdateNotesError};
pub use time_utils::{Clock, FixedClock, SystemClock};
