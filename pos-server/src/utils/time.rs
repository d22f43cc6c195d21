//! Time helpers - business timezone conversion
//!
//! Date-to-timestamp conversion happens at the API handler layer;
//! repositories only ever see `i64` Unix millis. Each request captures a
//! single "now" in the business timezone and derives everything (today,
//! window bounds, SQL grouping offset) from it, so one response is always
//! internally consistent.

use chrono::{DateTime, NaiveDate, Offset, Utc};
use chrono_tz::Tz;

/// Capture the current instant in the business timezone.
pub fn business_now(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// Date start (00:00:00) in the business timezone, as Unix millis.
///
/// DST gap fallback: when local midnight does not exist, fall back to UTC.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_time(chrono::NaiveTime::MIN);
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// SQLite date modifier for the business timezone offset at `now`,
/// e.g. `"420 minutes"` for UTC+7.
///
/// Applied to `date(created_at/1000, 'unixepoch', ?)` so grouped rows
/// bucket on local calendar dates. The offset is fixed for the whole
/// request; windows straddling a DST change attribute the shifted hour to
/// the neighboring day.
pub fn sqlite_tz_modifier(now: &DateTime<Tz>) -> String {
    let minutes = now.offset().fix().local_minus_utc() / 60;
    format!("{minutes} minutes")
}
