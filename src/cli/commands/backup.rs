use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let final_path = BackupLogic::backup(cfg, file, *compress, *force)?;
        success(format!("Backup created: {}", final_path.display()));
    }

    Ok(())
}
