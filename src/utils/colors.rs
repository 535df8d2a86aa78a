/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Returns formatting for an "empty" display value.
///
/// Example: `colorize_empty("--")` → "<grey>--<reset>"
pub fn colorize_empty(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" || value.trim() == "0h 00min" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
