use noterom_core::storage::save_classes;
use noterom_core::time_utils::{format_clock, today_date_string};
use noterom_core::{ClassEntry, Clock, MemorySlot, StorageError};

/// An in-memory slot holding a few demo classes for today, one of them
/// running right now.
pub fn seeded_slot(clock: &dyn Clock) -> Result<MemorySlot, StorageError> {
    let now = clock.now();
    let minutes = u32::from(now.hour()) * 60 + u32::from(now.minute());
    let today = today_date_string(clock);

    let class = |id: &str, name: &str, start: u32, end: u32, notes: &str| ClassEntry {
        id: id.to_string(),
        name: name.to_string(),
        date: today.clone(),
        start: format_clock(start),
        end: format_clock(end),
        notes: notes.to_string(),
    };

    // Windows are clamped to today so the running class never wraps
    let classes = vec![
        class(
            "dev-1",
            "Linear Algebra",
            minutes.saturating_sub(120),
            minutes.saturating_sub(60),
            "<p>Eigenvalues, <b>problem set 3</b> due Friday.</p>",
        ),
        class(
            "dev-2",
            "Operating Systems",
            minutes.saturating_sub(15),
            (minutes + 45).min(23 * 60 + 59),
            "",
        ),
        class(
            "dev-3",
            "Compilers",
            (minutes + 90).min(23 * 60 + 58),
            (minutes + 180).min(23 * 60 + 59),
            "<ul><li>Read the parsing chapter</li></ul>",
        ),
    ];

    let slot = MemorySlot::new();
    save_classes(&slot, &classes)?;
    Ok(slot)
}
