use crate::cli::parser::TrackerAction;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::tracker::{Tracker, TrackerUpdate};
use crate::store::Store;
use crate::ui::messages::{success, warning};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;

pub fn handle(action: &TrackerAction, cfg: &Config) -> AppResult<()> {
    let mut store = Store::open(cfg);

    match action {
        TrackerAction::List => print_list(&store, cfg),

        TrackerAction::Rename { id, name } => {
            if name.trim().is_empty() {
                warning("Tracker name must not be empty.");
            } else if store.update_tracker(*id, TrackerUpdate::name(name)) {
                success(format!("Tracker {} renamed to '{}'", id, name.trim()));
            } else {
                warning(format!("No tracker with id {id}"));
            }
        }

        TrackerAction::SetTime { id, seconds } => {
            if *seconds < 0 {
                return Err(AppError::InvalidSeconds(seconds.to_string()));
            }
            if store.update_tracker(*id, TrackerUpdate::time(*seconds)) {
                success(format!("Tracker {} set to {}", id, format_time(*seconds)));
            } else {
                warning(format!("No tracker with id {id}"));
            }
        }

        TrackerAction::Del { id } => {
            if store.delete_tracker(*id) {
                success(format!("Tracker {id} deleted."));
            } else {
                warning(format!("No tracker with id {id}"));
            }
        }

        TrackerAction::Clear { yes } => {
            if !*yes {
                warning("This deletes every saved tracker. Re-run with --yes to confirm.");
            } else {
                store.clear_all_trackers();
                success("All trackers deleted.");
            }
        }
    }

    Ok(())
}

fn format_created(t: &Tracker, show_weekday: &str) -> String {
    match t.created_local() {
        Some(dt) => {
            let fmt = match show_weekday {
                "short" => "%Y-%m-%d %H:%M %a",
                "full" => "%Y-%m-%d %H:%M %A",
                _ => "%Y-%m-%d %H:%M",
            };
            dt.format(fmt).to_string()
        }
        None => t.created_at.clone(),
    }
}

fn print_list(store: &Store, cfg: &Config) {
    let state = store.state();

    if state.trackers.is_empty() {
        println!("No saved trackers yet. Add one with 'timer save <name>'.");
        return;
    }

    let mut table = Table::new(vec![
        Column {
            header: String::new(),
            width: 1,
        },
        Column {
            header: "ID".to_string(),
            width: 13,
        },
        Column {
            header: "NAME".to_string(),
            width: 24,
        },
        Column {
            header: "TIME".to_string(),
            width: 9,
        },
        Column {
            header: "CREATED".to_string(),
            width: 22,
        },
    ]);

    for t in &state.trackers {
        // the tracker currently loaded in the timer is starred
        let marker = if state.timer.active_tracker_id == Some(t.id) {
            "*"
        } else {
            " "
        };
        table.add_row(vec![
            marker.to_string(),
            t.id.to_string(),
            t.name.clone(),
            format_time(t.time),
            format_created(t, &cfg.show_weekday),
        ]);
    }

    print!("{}", table.render());
}
