use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{missing_keys, run_config_migration};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        check,
        migrate,
    } = cmd
    {
        let conf_path = Config::config_file();

        // ---- PRINT PATH ----
        if *path {
            println!("{}", conf_path.display());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg).map_err(|e| AppError::Config(e.to_string()))?
            );
        }

        // ---- CHECK ----
        if *check {
            let missing = missing_keys()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in &missing {
                    warning(format!("Missing config field: {key}"));
                }
                info("Run 'config --migrate' to fill in the defaults.");
            }
        }

        // ---- MIGRATE ----
        if *migrate && !run_config_migration()? {
            info("Configuration already up to date.");
        }
    }

    Ok(())
}
