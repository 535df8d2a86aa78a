use crate::db::log::load_entries;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color per operation kind
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "save" | "play" => Colour::Green,
        "del" | "clear" => Colour::Red,
        "edit" | "pause" | "stop" => Colour::Yellow,
        "reset" | "prefs" => Colour::Purple,
        "switch" | "name" | "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_entries(&pool.conn)?;

        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.len()
                } else {
                    e.operation.len() + e.target.len() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(60);

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);

            let mut colored = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                colored.push_str(&format!(" ({})", e.target));
            }

            // truncate on visible length, keeping the ANSI-colored op word
            let visible = strip_ansi(&colored);
            if visible.len() > 60 {
                let cut: String = visible.chars().take(57).collect();
                colored = if let Some((op_word, rest)) = cut.split_once(' ') {
                    format!("{} {}...", color.paint(op_word), rest)
                } else {
                    format!("{}...", color.paint(cut.as_str()))
                };
            }

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
