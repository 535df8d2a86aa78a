use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

/// The fixed key under which the whole snapshot is persisted.
pub const STORE_NAME: &str = "ticktrack-storage";

/// Load the persisted JSON snapshot, if any.
pub fn load_snapshot(conn: &Connection) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM store WHERE name = ?1")?;
    let value: Option<String> = stmt.query_row([STORE_NAME], |row| row.get(0)).optional()?;
    Ok(value)
}

/// Write the JSON snapshot under the fixed store key, replacing any
/// previous value. Called after every mutation.
pub fn save_snapshot(conn: &Connection, json: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO store (name, value) VALUES (?1, ?2)
         ON CONFLICT(name) DO UPDATE SET value = excluded.value",
        params![STORE_NAME, json],
    )?;
    Ok(())
}
