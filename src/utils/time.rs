//! Time utilities: clock formatting, weekly totals, wall-clock elapsed math.

use chrono::Utc;

pub const MILLISECONDS_IN_SECOND: i64 = 1000;
pub const SECONDS_IN_MINUTE: i64 = 60;
pub const SECONDS_IN_HOUR: i64 = 3600;

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Whole seconds elapsed since `started_ms`, floored, never negative.
pub fn elapsed_secs(now_ms: i64, started_ms: i64) -> i64 {
    ((now_ms - started_ms) / MILLISECONDS_IN_SECOND).max(0)
}

/// Format seconds as a zero-padded clock string, e.g. 3661 -> "01:01:01".
/// Hours grow past two digits instead of wrapping.
pub fn format_time(total_seconds: i64) -> String {
    let hours = total_seconds / SECONDS_IN_HOUR;
    let minutes = (total_seconds % SECONDS_IN_HOUR) / SECONDS_IN_MINUTE;
    let seconds = total_seconds % SECONDS_IN_MINUTE;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format seconds as a weekly total, e.g. 3659 -> "1h 00min".
/// Leftover seconds below a full minute are truncated.
pub fn format_weekly_time(seconds: i64) -> String {
    let hours = seconds / SECONDS_IN_HOUR;
    let minutes = (seconds % SECONDS_IN_HOUR) / SECONDS_IN_MINUTE;
    format!("{}h {:02}min", hours, minutes)
}
