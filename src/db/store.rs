//! Durable clock-in storage.
//!
//! The in-memory ledger is a cache of exactly one attendance day; this table
//! is the source of truth across restarts and rollovers. Records are keyed
//! by `(day, shift, page, name, is_cover)` with last-write-wins semantics on
//! the timestamp, mirroring the ledger's own idempotence.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attendance_day::AttendanceDay;
use crate::models::shift::Shift;
use crate::utils::time;
use chrono::DateTime;
use chrono_tz::Tz;
use rusqlite::{Row, params};

/// One persisted clock-in record.
#[derive(Debug, Clone)]
pub struct StoredClockIn {
    pub shift: Shift,
    pub page: String,
    pub name: String,
    pub is_cover: bool,
    pub ts: String,
}

impl StoredClockIn {
    pub fn timestamp(&self, tz: Tz) -> AppResult<DateTime<Tz>> {
        time::from_db_str(&self.ts, tz)
    }
}

pub struct Store {
    pool: DbPool,
}

impl Store {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }

    /// Insert or update one clock-in record (last write wins).
    pub fn upsert_clock_in(
        &self,
        day: AttendanceDay,
        shift: Shift,
        page: &str,
        name: &str,
        is_cover: bool,
        ts: &DateTime<Tz>,
    ) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO clock_ins (day, shift, page, name, is_cover, ts)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT (day, shift, page, name, is_cover)
             DO UPDATE SET ts = excluded.ts",
            params![
                day.date_str(),
                shift.to_db_str(),
                page,
                name,
                if is_cover { 1 } else { 0 },
                time::to_db_str(ts),
            ],
        )?;
        Ok(())
    }

    /// Load every record of one attendance day.
    pub fn load_day(&self, day: AttendanceDay) -> AppResult<Vec<StoredClockIn>> {
        let mut stmt = self.pool.conn.prepare(
            "SELECT shift, page, name, is_cover, ts FROM clock_ins
             WHERE day = ?1
             ORDER BY shift, page, name",
        )?;

        let rows = stmt.query_map([day.date_str()], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Delete one day's records, or only one shift's.
    pub fn delete_day(&self, day: AttendanceDay, shift: Option<Shift>) -> AppResult<()> {
        match shift {
            Some(s) => {
                self.pool.conn.execute(
                    "DELETE FROM clock_ins WHERE day = ?1 AND shift = ?2",
                    params![day.date_str(), s.to_db_str()],
                )?;
            }
            None => {
                self.pool
                    .conn
                    .execute("DELETE FROM clock_ins WHERE day = ?1", [day.date_str()])?;
            }
        }
        Ok(())
    }

    pub fn get_meta(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT value FROM meta WHERE key = ?1")?;
        let mut rows = stmt.query_map([key], |row| row.get::<_, String>(0))?;

        match rows.next() {
            Some(v) => Ok(Some(v?)),
            None => Ok(None),
        }
    }

    pub fn set_meta(&self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO meta (key, value) VALUES (?1, ?2)
             ON CONFLICT (key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

fn map_row(row: &Row) -> rusqlite::Result<StoredClockIn> {
    let shift_str: String = row.get("shift")?;
    let shift = Shift::from_db_str(&shift_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidShift(shift_str)),
        )
    })?;

    Ok(StoredClockIn {
        shift,
        page: row.get("page")?,
        name: row.get("name")?,
        is_cover: row.get::<_, i32>("is_cover")? == 1,
        ts: row.get("ts")?,
    })
}
