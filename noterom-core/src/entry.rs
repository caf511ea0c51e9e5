use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScheduleError;
use crate::time_utils::{
    compute_end_from_duration, format_clock, parse_clock, parse_date, today_date_string, Clock,
};

/// Upper bound on the number of classes kept in the schedule.
pub const MAX_CLASSES: usize = 8;

/// One scheduled class occupying a time window on a given day.
///
/// Serialized as `{id, name, date, start, end, notes}`; every field is a
/// plain string so the stored shape round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub id: String,
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub start: String,
    /// `HH:MM`, 24-hour
    pub end: String,
    /// HTML-capable free text
    #[serde(default)]
    pub notes: String,
}

/// Raw values from the creation form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClass {
    pub name: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: String,
}

impl NewClass {
    /// Validate the form and turn it into an entry with a fresh id.
    ///
    /// `existing` is the number of classes already scheduled. The end time
    /// comes from `start + duration` when the duration parses, otherwise
    /// from the explicit end field.
    pub fn into_entry(
        self,
        existing: usize,
        clock: &dyn Clock,
    ) -> Result<ClassEntry, ScheduleError> {
        if existing >= MAX_CLASSES {
            return Err(ScheduleError::CapacityReached);
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(ScheduleError::MissingName);
        }

        let start = self.start.trim();
        if start.is_empty() {
            return Err(ScheduleError::MissingStart);
        }
        let start_minutes =
            parse_clock(start).ok_or_else(|| ScheduleError::InvalidTime(start.to_string()))?;

        let date = match self.date.trim() {
            "" => today_date_string(clock),
            raw => {
                parse_date(raw).ok_or_else(|| ScheduleError::InvalidDate(raw.to_string()))?;
                raw.to_string()
            }
        };

        let end = match compute_end_from_duration(start, &self.duration) {
            Some(computed) => computed,
            None => {
                let explicit = self.end.trim();
                if explicit.is_empty() {
                    return Err(ScheduleError::MissingEnd);
                }
                let minutes = parse_clock(explicit)
                    .ok_or_else(|| ScheduleError::InvalidTime(explicit.to_string()))?;
                format_clock(minutes)
            }
        };

        Ok(ClassEntry {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            date,
            start: format_clock(start_minutes),
            end,
            notes: String::new(),
        })
    }
}
