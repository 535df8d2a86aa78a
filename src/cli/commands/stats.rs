use crate::config::Config;
use crate::core::weekly::weekly_stats;
use crate::errors::AppResult;
use crate::models::day_stats::HOURS_IN_DAY;
use crate::store::Store;
use crate::ui::messages::header;
use crate::utils::colors::colorize_empty;
use crate::utils::date;
use crate::utils::formatting::pad_right;
use crate::utils::time::format_weekly_time;

const BAR_GLYPHS: [char; 5] = ['▁', '▂', '▄', '▆', '█'];

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::open(cfg);
    let stats = weekly_stats(&store.state().trackers, date::today());

    header("Last 7 days");

    for day in &stats {
        let total = if day.total_seconds > 0 {
            format_weekly_time(day.total_seconds)
        } else {
            "--".to_string()
        };

        println!(
            "{} {}  {}",
            pad_right(&day.label, 10),
            render_bar(&day.hourly_activity),
            colorize_empty(&total)
        );
    }

    Ok(())
}

/// One character per hour of the day; height scaled to the day's busiest
/// hour. Hours with no activity render as a dim dot so the 24-slot ruler
/// stays visible on empty days.
fn render_bar(hours: &[i64; HOURS_IN_DAY]) -> String {
    let max = hours.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return "·".repeat(HOURS_IN_DAY);
    }

    hours
        .iter()
        .map(|&v| {
            if v == 0 {
                '·'
            } else {
                let idx = ((v * BAR_GLYPHS.len() as i64 - 1) / max).min(BAR_GLYPHS.len() as i64 - 1)
                    as usize;
                BAR_GLYPHS[idx]
            }
        })
        .collect()
}
