use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::prefs::Theme;
use crate::store::Store;
use crate::ui::messages::{header, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Prefs {
        theme,
        dot_color,
        print,
    } = cmd
    {
        let mut store = Store::open(cfg);

        if let Some(code) = theme {
            let parsed =
                Theme::from_code(code).ok_or_else(|| AppError::InvalidTheme(code.clone()))?;
            store.set_theme(parsed);
            success(format!("Theme set to '{}'", parsed.as_str()));
        }

        if let Some(color) = dot_color {
            store.set_dot_color(color);
            success(format!("Dot color set to '{color}'"));
        }

        if *print || (theme.is_none() && dot_color.is_none()) {
            let state = store.state();
            header("Preferences");
            println!("theme:     {}", state.theme.as_str());
            println!("dot color: {}", state.dot_color);
        }
    }

    Ok(())
}
