//! Display formatting for plan values.
//!
//! One formatter per semantic type: durations and times of day look the
//! same on screen but must never share a code path.

use crate::plan::types::{Minutes, TimeOfDay};

/// Format a duration as zero-padded `HH:MM` of the total length.
pub fn format_duration(duration: Minutes) -> String {
    let sign = if duration.0 < 0.0 { "-" } else { "" };
    let total = duration.0.abs().round() as u64;
    format!("{}{:02}:{:02}", sign, total / 60, total % 60)
}

/// Format a time of day as zero-padded wall-clock `HH:MM`.
pub fn format_time_of_day(time: TimeOfDay) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
