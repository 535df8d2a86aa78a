use crate::cli::parser::TimerAction;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::formatting::bold;
use crate::utils::time::format_time;
use std::io::Write;
use std::thread;
use std::time::Duration;

pub fn handle(action: &TimerAction, cfg: &Config) -> AppResult<()> {
    let mut store = Store::open(cfg);

    match action {
        TimerAction::Status => print_status(&store),

        TimerAction::Play => {
            if store.play() {
                success(format!(
                    "Timer running from {}",
                    format_time(store.state().timer.current_time)
                ));
            } else {
                info("Timer is already running.");
            }
        }

        TimerAction::Pause => {
            if store.pause() {
                success(format!(
                    "Paused at {}",
                    format_time(store.state().timer.current_time)
                ));
            } else {
                info("Timer is not running.");
            }
        }

        TimerAction::Reset => {
            store.reset_timer();
            if store.state().timer.is_running {
                success("Timer reset to 00:00:00 (still running).");
            } else {
                success("Timer reset to 00:00:00.");
            }
        }

        TimerAction::Save { name } => {
            if store.save_tracker(name) {
                success(format!("Tracker '{}' saved.", name.trim()));
            } else {
                warning("Tracker name must not be empty.");
            }
        }

        TimerAction::Use { id, new } => {
            let target = if *new {
                None
            } else {
                match id {
                    Some(i) => Some(*i),
                    None => {
                        return Err(AppError::Other(
                            "Provide a tracker id, or --new for a fresh timer".to_string(),
                        ));
                    }
                }
            };
            if store.set_active_tracker(target) {
                match target {
                    Some(i) => success(format!(
                        "Now editing tracker {} ('{}') at {}",
                        i,
                        store.state().timer.active_tracker_name,
                        format_time(store.state().timer.current_time)
                    )),
                    None => success("Switched to a fresh timer."),
                }
            } else {
                warning(format!("No tracker with id {}", id.unwrap_or_default()));
            }
        }

        TimerAction::Name { name } => {
            store.set_active_tracker_name(name);
            success(format!("Tracker name set to '{}'", name));
        }

        TimerAction::Set { seconds } => {
            if *seconds < 0 {
                return Err(AppError::InvalidSeconds(seconds.to_string()));
            }
            store.set_current_time(*seconds);
            success(format!("Timer set to {}", format_time(*seconds)));
        }

        TimerAction::Watch { seconds } => watch(&store, *seconds),
    }

    Ok(())
}

fn print_status(store: &Store) {
    let state = store.state();
    let display = format_time(store.display_seconds());

    let run_label = if state.timer.is_running {
        format!("{GREEN}running{RESET}")
    } else {
        format!("{GREY}paused{RESET}")
    };

    header("Timer");
    println!("{}  [{}]", bold(&display), run_label);

    match state.timer.active_tracker_id {
        Some(id) => println!(
            "Editing tracker {} ('{}')",
            id, state.timer.active_tracker_name
        ),
        None => {
            if state.timer.active_tracker_name.is_empty() {
                println!("Unsaved timer");
            } else {
                println!("Unsaved timer ('{}')", state.timer.active_tracker_name);
            }
        }
    }
}

/// Live display loop. Recomputes the shown value from the start stamp on
/// every refresh; the committed seconds are never touched here. A paused
/// timer prints once and returns instead of looping.
fn watch(store: &Store, limit: Option<u64>) {
    if !store.state().timer.is_running {
        println!("{}", format_time(store.display_seconds()));
        return;
    }

    let mut ticks: u64 = 0;
    loop {
        let display = format_time(store.display_seconds());

        // Keep the terminal title in sync; informational only.
        print!("\x1b]0;{display} - ticktrack\x07");
        print!("\r{display}");
        std::io::stdout().flush().ok();

        ticks += 1;
        if let Some(limit) = limit
            && ticks >= limit
        {
            break;
        }

        thread::sleep(Duration::from_secs(1));
    }
    println!();
}
