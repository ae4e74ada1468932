//! Utilities for date and time formatting
//!
//! Chat messages carry UTC timestamps; the transcript shows them in the
//! browser's local time.

use chrono::{DateTime, Local, Utc};

/// Format a timestamp as "HH:MM" in local time
pub fn format_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}
