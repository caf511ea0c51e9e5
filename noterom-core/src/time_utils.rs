use time::{macros::format_description, Date, OffsetDateTime, UtcOffset};

use crate::entry::ClassEntry;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Source of the current local date and time.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Reads the system clock, converted to the local offset when it can be
/// determined.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        to_local_time(OffsetDateTime::now_utc())
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

pub fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

/// Split an `HH:MM` string into its numeric parts without range checks.
fn split_hours_minutes(s: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = s.trim().split_once(':')?;
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hours) || !all_digits(minutes) {
        return None;
    }
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

/// Minutes since midnight for a valid 24-hour `HH:MM` clock time.
pub fn parse_clock(s: &str) -> Option<u32> {
    let (hours, minutes) = split_hours_minutes(s)?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Format minutes since midnight as zero-padded `HH:MM`, wrapping past 24h.
pub fn format_clock(total_minutes: u32) -> String {
    let wrapped = total_minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// End time for a class starting at `start` that lasts `duration`.
///
/// Returns `None` when `duration` is empty (the explicit end should be used
/// instead) or when either value is not a number pair.
pub fn compute_end_from_duration(start: &str, duration: &str) -> Option<String> {
    if duration.trim().is_empty() {
        return None;
    }
    let (start_hours, start_minutes) = split_hours_minutes(start)?;
    let (dur_hours, dur_minutes) = split_hours_minutes(duration)?;
    let total = u64::from(start_hours) * 60
        + u64::from(start_minutes)
        + u64::from(dur_hours) * 60
        + u64::from(dur_minutes);
    let wrapped = (total % u64::from(MINUTES_PER_DAY)) as u32;
    Some(format_clock(wrapped))
}

pub fn format_time_range(entry: &ClassEntry) -> String {
    format!("{} → {}", entry.start, entry.end)
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Option<Date> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]")).ok()
}

pub fn today_date_string(clock: &dyn Clock) -> String {
    format_date(clock.now().date())
}

/// Current local time truncated to the minute, `HH:MM`.
pub fn current_time_string(clock: &dyn Clock) -> String {
    let now = clock.now();
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// Live clock text, `HH:MM:SS`.
pub fn clock_display(clock: &dyn Clock) -> String {
    let now = clock.now();
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}
