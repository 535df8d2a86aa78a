use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{integrity_check, run_pending_migrations, vacuum};
use crate::db::pool::DbPool;
use crate::db::queries::load_snapshot;
use crate::errors::AppResult;
use crate::store::merge_snapshot;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum: do_vacuum,
        info,
    } = cmd
    {
        let mut pool: Option<DbPool> = None;

        fn get_pool<'a>(pool: &'a mut Option<DbPool>, db_path: &str) -> AppResult<&'a mut DbPool> {
            if pool.is_none() {
                *pool = Some(DbPool::new(db_path)?);
            }
            Ok(pool.as_mut().expect("pool was just set"))
        }

        //
        // 1) MIGRATE
        //
        if *migrate {
            let pool = get_pool(&mut pool, &cfg.database)?;
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&pool.conn)?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            let pool = get_pool(&mut pool, &cfg.database)?;
            print_db_info(pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            let pool = get_pool(&mut pool, &cfg.database)?;

            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            if integrity_check(&pool.conn)? {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed.{}\n", RED, RESET);
            }
        }

        //
        // 4) VACUUM
        //
        if *do_vacuum {
            let pool = get_pool(&mut pool, &cfg.database)?;
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);

            vacuum(&pool.conn)?;

            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}

fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    let size = std::fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    println!("🗄️  Database: {db_path}");
    println!("    size:     {size} bytes");

    match load_snapshot(&pool.conn)? {
        Some(raw) => {
            let state = merge_snapshot(&raw);
            println!("    trackers: {}", state.trackers.len());
            println!("    notes:    {}", state.notes.len());
        }
        None => println!("    snapshot: none (fresh store)"),
    }

    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("    log rows: {log_rows}");

    Ok(())
}
