//! In-memory attendance state for the single active day.

use crate::core::registry::PageRegistry;
use crate::models::shift::Shift;
use chrono::DateTime;
use chrono_tz::Tz;
use std::collections::BTreeMap;

/// Attendance for one page within one shift: who clocked in (and when), and
/// who covered. A name may appear in both maps; re-recording a name
/// overwrites its timestamp.
#[derive(Debug, Clone, Default)]
pub struct LedgerEntry {
    pub users: BTreeMap<String, DateTime<Tz>>,
    pub covers: BTreeMap<String, DateTime<Tz>>,
}

impl LedgerEntry {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.covers.is_empty()
    }
}

/// One row of a ledger snapshot, in catalog order.
#[derive(Debug, Clone)]
pub struct PageStatus {
    pub key: String,
    pub label: String,
    pub user_count: usize,
    pub cover_count: usize,
    pub missing: bool,
}

/// Per-shift, per-page entries for exactly one attendance day. Older days
/// live only in durable storage; the engine clears and reloads this on every
/// day transition.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: BTreeMap<(Shift, String), LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert one clock-in. Idempotent per name: last write wins on the
    /// timestamp, the entry is never duplicated.
    pub fn record(
        &mut self,
        shift: Shift,
        page_key: &str,
        name: &str,
        ts: DateTime<Tz>,
        is_cover: bool,
    ) {
        let entry = self
            .entries
            .entry((shift, page_key.to_string()))
            .or_default();

        if is_cover {
            entry.covers.insert(name.to_string(), ts);
        } else {
            entry.users.insert(name.to_string(), ts);
        }
    }

    pub fn entry(&self, shift: Shift, page_key: &str) -> Option<&LedgerEntry> {
        self.entries.get(&(shift, page_key.to_string()))
    }

    /// All non-empty entries for one shift, in catalog order.
    pub fn entries_for(&self, shift: Shift) -> impl Iterator<Item = (&str, &LedgerEntry)> {
        self.entries
            .iter()
            .filter(move |((s, _), e)| *s == shift && !e.is_empty())
            .map(|((_, k), e)| (k.as_str(), e))
    }

    /// Status of every catalog page for one shift. Iterates the registry,
    /// not the entries, so pages nobody touched still show up as missing and
    /// the order is deterministic across runs.
    pub fn snapshot(&self, registry: &PageRegistry, shift: Shift) -> Vec<PageStatus> {
        registry
            .iter()
            .map(|page| {
                let (users, covers) = match self.entry(shift, &page.key) {
                    Some(e) => (e.users.len(), e.covers.len()),
                    None => (0, 0),
                };
                PageStatus {
                    key: page.key,
                    label: page.label,
                    user_count: users,
                    cover_count: covers,
                    missing: users == 0 && covers == 0,
                }
            })
            .collect()
    }

    /// Clear all entries, or all entries of one shift.
    pub fn clear(&mut self, shift: Option<Shift>) {
        match shift {
            Some(s) => self.entries.retain(|(shift, _), _| *shift != s),
            None => self.entries.clear(),
        }
    }
}
