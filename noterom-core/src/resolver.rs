use time::OffsetDateTime;

use crate::entry::ClassEntry;
use crate::time_utils::{format_date, format_time_range, parse_clock};

pub const NO_CLASS_ACTIVE: &str = "No class active";

/// Which entries are active and focused at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveSnapshot {
    pub active_id: Option<String>,
    pub focused_id: Option<String>,
    pub status_line: String,
}

impl ActiveSnapshot {
    pub fn is_active(&self) -> bool {
        self.active_id.is_some()
    }
}

/// Whether `entry` is scheduled today and its window contains `now`.
/// Both window ends are inclusive, at minute precision.
pub fn is_active_at(entry: &ClassEntry, now: OffsetDateTime) -> bool {
    if entry.date != format_date(now.date()) {
        return false;
    }
    let (Some(start), Some(end)) = (parse_clock(&entry.start), parse_clock(&entry.end)) else {
        return false;
    };
    let current = u32::from(now.hour()) * 60 + u32::from(now.minute());
    start <= current && current <= end
}

/// The first entry in list order that is active at `now`.
pub fn resolve_active(entries: &[ClassEntry], now: OffsetDateTime) -> Option<&ClassEntry> {
    entries.iter().find(|entry| is_active_at(entry, now))
}

/// The explicitly selected entry, falling back to the active one.
pub fn resolve_focused<'a>(
    entries: &'a [ClassEntry],
    selected_id: Option<&str>,
    active: Option<&'a ClassEntry>,
) -> Option<&'a ClassEntry> {
    selected_id
        .and_then(|id| entries.iter().find(|e| e.id == id))
        .or(active)
}

pub fn status_line(active: Option<&ClassEntry>) -> String {
    match active {
        Some(entry) => format!("Active: {} ({})", entry.name, format_time_range(entry)),
        None => NO_CLASS_ACTIVE.to_string(),
    }
}

pub fn snapshot(
    entries: &[ClassEntry],
    selected_id: Option<&str>,
    now: OffsetDateTime,
) -> ActiveSnapshot {
    let active = resolve_active(entries, now);
    let focused = resolve_focused(entries, selected_id, active);
    ActiveSnapshot {
        active_id: active.map(|e| e.id.clone()),
        focused_id: focused.map(|e| e.id.clone()),
        status_line: status_line(active),
    }
}
