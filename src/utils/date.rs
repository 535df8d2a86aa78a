use chrono::{DateTime, Days, Local, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Label for a day `days_ago` before `today`: "Today", "Yesterday",
/// then the full weekday name.
pub fn day_label_for(days_ago: u64, today: NaiveDate) -> String {
    match days_ago {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        _ => {
            let date = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);
            date.format("%A").to_string()
        }
    }
}

pub fn day_label(days_ago: u64) -> String {
    day_label_for(days_ago, today())
}

/// Parse a persisted ISO-8601 creation timestamp into local time.
/// Timestamps are written in UTC ("Z" suffix); day bucketing is local.
pub fn parse_created_at(s: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}

/// Current time as the ISO-8601 UTC string stored in `createdAt` fields.
pub fn created_at_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
