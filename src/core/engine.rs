//! The attendance engine: one ledger, one active day, one lock.
//!
//! Message handlers and the periodic rollover check all funnel through the
//! single `Mutex` around `EngineState`. Storage writes happen inside the
//! same critical section as the in-memory mutation they represent, so a
//! concurrent rollover can never observe the ledger ahead of the database.

use crate::config::Config;
use crate::core::calendar::Calendar;
use crate::core::ledger::{Ledger, LedgerEntry, PageStatus};
use crate::core::parser::{self, ParseOutcome};
use crate::core::registry::PageRegistry;
use crate::db::log::oplog;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::attendance_day::AttendanceDay;
use crate::models::clock_event::ClockEvent;
use crate::models::shift::{Shift, ShiftCatalog};
use crate::ui::messages;
use chrono::DateTime;
use chrono_tz::Tz;
use std::sync::Mutex;

const META_ACTIVE_DAY: &str = "active_day";

/// Outcome of feeding one raw chat message through the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestReply {
    /// Event recorded; the sender gets a confirmation.
    Recorded {
        label: String,
        shift: Shift,
        is_cover: bool,
        day: AttendanceDay,
    },
    /// Not an attendance message, or malformed: ignored without a reply.
    Ignored,
    /// Marker and tags were fine but the page tag is not in the catalog.
    /// Nothing is recorded; the sender gets a hint instead.
    UnknownPage {
        tag: String,
        suggestion: Option<String>,
    },
}

struct EngineState {
    active_day: Option<AttendanceDay>,
    ledger: Ledger,
    /// None when the database could not be opened: the engine keeps working
    /// memory-only and state is lost on restart.
    store: Option<Store>,
}

pub struct Engine {
    registry: PageRegistry,
    shifts: ShiftCatalog,
    calendar: Calendar,
    state: Mutex<EngineState>,
}

impl Engine {
    /// Build the engine from configuration and attach durable storage.
    /// A storage failure is downgraded to a warning: the engine must stay
    /// available even when the database is unusable.
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let registry = PageRegistry::new(&cfg.pages);
        let shifts = ShiftCatalog::from_config(&cfg.shift_cutoffs)?;
        let calendar = Calendar::new(cfg.day_cutoff_hour, &cfg.timezone)?;

        let store = match Store::open(&cfg.database) {
            Ok(s) => Some(s),
            Err(e) => {
                messages::warning(format!(
                    "Storage unavailable ({}), continuing in memory only",
                    e
                ));
                None
            }
        };

        Ok(Self {
            registry,
            shifts,
            calendar,
            state: Mutex::new(EngineState {
                active_day: None,
                ledger: Ledger::new(),
                store,
            }),
        })
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn shifts(&self) -> &ShiftCatalog {
        &self.shifts
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Feed one raw chat message through parser, registry and ledger.
    pub fn ingest(&self, text: &str, sender: &str, ts: DateTime<Tz>) -> AppResult<IngestReply> {
        let parsed = match parser::parse(text) {
            ParseOutcome::Accepted(p) => p,
            ParseOutcome::NotAttendance | ParseOutcome::Malformed => {
                return Ok(IngestReply::Ignored);
            }
        };

        // Unknown page: loud reject with a hint, nothing recorded.
        let Some(label) = self.registry.lookup(&parsed.page_key) else {
            let suggestion = self.registry.suggest(&parsed.page_key).map(str::to_string);
            return Ok(IngestReply::UnknownPage {
                tag: parsed.page_key,
                suggestion,
            });
        };
        let label = label.to_string();

        let event = ClockEvent {
            shift: parsed.shift,
            page_key: parsed.page_key,
            is_cover: parsed.is_cover,
            actor: sender.to_string(),
            timestamp: ts,
            day: self.calendar.resolve_day(ts),
        };

        self.record_event(&event)?;

        Ok(IngestReply::Recorded {
            label,
            shift: event.shift,
            is_cover: event.is_cover,
            day: event.day,
        })
    }

    /// Record an explicit cover clock-in (the `cover` command). Unlike
    /// message ingestion, an unknown page here is an error for the caller.
    pub fn record_cover(
        &self,
        shift: Shift,
        page_tag: &str,
        name: &str,
        ts: DateTime<Tz>,
    ) -> AppResult<String> {
        let key = crate::core::normalize::normalize_tag(page_tag);
        let label = self
            .registry
            .lookup(&key)
            .ok_or_else(|| AppError::UnknownPage(page_tag.to_string()))?
            .to_string();

        let event = ClockEvent {
            shift,
            page_key: key,
            is_cover: true,
            actor: name.to_string(),
            timestamp: ts,
            day: self.calendar.resolve_day(ts),
        };
        self.record_event(&event)?;

        Ok(label)
    }

    fn record_event(&self, event: &ClockEvent) -> AppResult<()> {
        let mut state = self.lock_state();

        ensure_day(&mut state, &self.calendar, event.day)?;

        state.ledger.record(
            event.shift,
            &event.page_key,
            &event.actor,
            event.timestamp,
            event.is_cover,
        );

        // Storage write ordered after the in-memory mutation, under the
        // same lock. Failure downgrades to memory-only.
        if let Some(store) = &state.store {
            let persisted = store.upsert_clock_in(
                event.day,
                event.shift,
                &event.page_key,
                &event.actor,
                event.is_cover,
                &event.timestamp,
            );
            match persisted {
                Ok(()) => {
                    let _ = oplog(
                        store.conn(),
                        "record",
                        &event.page_key,
                        &format!(
                            "{} {} by {} ({})",
                            event.day,
                            event.shift.name(),
                            event.actor,
                            if event.is_cover { "cover" } else { "user" }
                        ),
                    );
                }
                Err(e) => {
                    messages::warning(format!("Storage write failed ({}), kept in memory", e));
                }
            }
        }

        Ok(())
    }

    /// Snapshot of one shift for the attendance day of `now`.
    pub fn snapshot(&self, shift: Shift, now: DateTime<Tz>) -> AppResult<(AttendanceDay, Vec<PageStatus>)> {
        let day = self.calendar.resolve_day(now);
        let mut state = self.lock_state();
        ensure_day(&mut state, &self.calendar, day)?;
        Ok((day, state.ledger.snapshot(&self.registry, shift)))
    }

    /// All non-empty entries of one shift, for the lateness report.
    pub fn entries(
        &self,
        shift: Shift,
        now: DateTime<Tz>,
    ) -> AppResult<(AttendanceDay, Vec<(String, LedgerEntry)>)> {
        let day = self.calendar.resolve_day(now);
        let mut state = self.lock_state();
        ensure_day(&mut state, &self.calendar, day)?;

        let entries = state
            .ledger
            .entries_for(shift)
            .map(|(k, e)| (k.to_string(), e.clone()))
            .collect();
        Ok((day, entries))
    }

    /// Manual reset: clear the active day (one shift or all of it), in
    /// memory and in storage.
    pub fn reset(&self, shift: Option<Shift>, now: DateTime<Tz>) -> AppResult<AttendanceDay> {
        let day = self.calendar.resolve_day(now);
        let mut state = self.lock_state();
        ensure_day(&mut state, &self.calendar, day)?;

        state.ledger.clear(shift);

        if let Some(store) = &state.store {
            if let Err(e) = store.delete_day(day, shift) {
                messages::warning(format!("Storage delete failed ({})", e));
            } else {
                let target = shift.map(|s| s.name()).unwrap_or("all");
                let _ = oplog(store.conn(), "reset", target, &day.date_str());
            }
        }

        Ok(day)
    }

    /// Periodic rollover check. Returns true when a new attendance day was
    /// activated. Idempotent: re-observing the same day is a no-op.
    pub fn tick(&self, now: DateTime<Tz>) -> AppResult<bool> {
        let day = self.calendar.resolve_day(now);
        let mut state = self.lock_state();

        if state.active_day == Some(day) {
            return Ok(false);
        }
        ensure_day(&mut state, &self.calendar, day)?;
        Ok(true)
    }

    /// The day currently held in memory, if any day has been activated yet.
    pub fn active_day(&self) -> Option<AttendanceDay> {
        self.lock_state().active_day
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, EngineState> {
        // A poisoned lock means another handler panicked mid-mutation; the
        // ledger is still the best state we have, so keep serving it.
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }
}

/// Day transition: activate `day`, clear the ledger, reload the day's
/// records from storage, and persist the rollover guard.
fn ensure_day(state: &mut EngineState, calendar: &Calendar, day: AttendanceDay) -> AppResult<()> {
    if state.active_day == Some(day) {
        return Ok(());
    }

    let previous = state.active_day;
    state.active_day = Some(day);
    state.ledger.clear(None);

    if let Some(store) = &state.store {
        match store.load_day(day) {
            Ok(records) => {
                for rec in records {
                    match rec.timestamp(calendar.tz) {
                        Ok(ts) => {
                            state
                                .ledger
                                .record(rec.shift, &rec.page, &rec.name, ts, rec.is_cover);
                        }
                        Err(_) => {
                            messages::warning(format!(
                                "Skipping stored record with bad timestamp: {}",
                                rec.ts
                            ));
                        }
                    }
                }
            }
            Err(e) => {
                messages::warning(format!("Storage reload failed ({}), starting empty", e));
            }
        }

        // Persisted guard: after a restart, activating the same day again
        // is a resume, not a rollover, and is not logged as one.
        let already_rolled = store
            .get_meta(META_ACTIVE_DAY)
            .ok()
            .flatten()
            .as_deref()
            == Some(day.date_str().as_str());

        if let Err(e) = store.set_meta(META_ACTIVE_DAY, &day.date_str()) {
            messages::warning(format!("Failed to persist rollover guard ({})", e));
        } else if !already_rolled {
            let from = previous
                .map(|d| d.date_str())
                .unwrap_or_else(|| "start".to_string());
            let _ = oplog(
                store.conn(),
                "rollover",
                &day.date_str(),
                &format!("from {}", from),
            );
        }
    }

    Ok(())
}
