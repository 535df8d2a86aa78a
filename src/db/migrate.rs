use rusqlite::{Connection, Result};

/// Ensure that the `store` table exists.
///
/// The snapshot store is a single-key value table: one row, keyed by the
/// fixed store name, holding the JSON snapshot.
fn ensure_store_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS store (
            name  TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Run all pending schema migrations. Safe to call on every open;
/// every step is idempotent.
///
/// Snapshot-level migrations (e.g. notes persisted without a `type`
/// discriminant) are applied at load time in `store::merge`, not here;
/// the table layout itself has never changed shape.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_store_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}

/// PRAGMA integrity_check; true when SQLite reports "ok".
pub fn integrity_check(conn: &Connection) -> Result<bool> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result == "ok")
}

/// Optimize the database file.
pub fn vacuum(conn: &Connection) -> Result<()> {
    conn.execute_batch("VACUUM;")?;
    Ok(())
}
