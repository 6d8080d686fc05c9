use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema. Idempotent: safe to run on every open.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clock_ins (
            day      TEXT NOT NULL,
            shift    TEXT NOT NULL,
            page     TEXT NOT NULL,
            name     TEXT NOT NULL,
            is_cover INTEGER NOT NULL DEFAULT 0,
            ts       TEXT NOT NULL,
            PRIMARY KEY (day, shift, page, name, is_cover)
        );

        CREATE TABLE IF NOT EXISTS meta (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

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
