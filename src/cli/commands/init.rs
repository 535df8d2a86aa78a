use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log as oplog;
use crate::errors::AppResult;
use crate::ui::messages;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    // --db overrides whatever the config file says; in test mode the
    // config file is never written at all.
    let db_path = match &cli.db {
        Some(custom) => custom.clone(),
        None => Config::load().database,
    };

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    messages::success(format!("Database initialized at {}", &db_path));

    // Internal log write is non-blocking
    if let Err(e) = oplog::record(&conn, "init", &db_path, "Database initialized") {
        messages::warning(format!("Failed to write internal log: {e}"));
    }

    Ok(())
}
