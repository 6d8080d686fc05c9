//! SQLite connection wrapper (lightweight, single-connection).

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // Bounded wait on a locked database; storage is never worth
        // blocking a reply on.
        conn.busy_timeout(Duration::from_secs(2))?;
        Ok(Self { conn })
    }
}
