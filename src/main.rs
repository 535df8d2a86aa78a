//! ticktrack main entrypoint.

use ticktrack::run;
use ticktrack::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
