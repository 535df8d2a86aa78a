//! Weekly activity aggregation: a pure derived view over the tracker list.

use crate::models::day_stats::{DAYS_IN_WEEK, DayStats, HOURS_IN_DAY};
use crate::models::tracker::Tracker;
use crate::utils::date::day_label_for;
use chrono::{Days, NaiveDate, Timelike};

/// Aggregate the trailing 7 calendar days (today first, local-midnight
/// boundaries). Each tracker contributes its full time both to the day
/// it was created on and to the hour-of-day bucket it was created in.
/// Days without trackers yield all-zero buckets; the result always has
/// exactly 7 entries.
pub fn weekly_stats(trackers: &[Tracker], today: NaiveDate) -> Vec<DayStats> {
    let mut stats = Vec::with_capacity(DAYS_IN_WEEK);

    for days_ago in 0..DAYS_IN_WEEK as u64 {
        let mut day_stats = DayStats::empty(day_label_for(days_ago, today));

        if let Some(day) = today.checked_sub_days(Days::new(days_ago)) {
            for tracker in trackers {
                let Some(created) = tracker.created_local() else {
                    continue;
                };
                if created.date_naive() != day {
                    continue;
                }
                day_stats.total_seconds += tracker.time;
                let hour = created.hour() as usize;
                if hour < HOURS_IN_DAY {
                    day_stats.hourly_activity[hour] += tracker.time;
                }
            }
        }

        stats.push(day_stats);
    }

    stats
}
