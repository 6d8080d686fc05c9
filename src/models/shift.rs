use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::Serialize;
use std::collections::BTreeMap;

/// The fixed set of work periods tracked per attendance day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shift {
    Prime,
    Mid,
    Night,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Prime, Shift::Mid, Shift::Night];

    pub fn name(&self) -> &'static str {
        match self {
            Shift::Prime => "prime",
            Shift::Mid => "mid",
            Shift::Night => "night",
        }
    }

    /// The normalized hashtag that selects this shift in a clock-in message.
    pub fn marker_tag(&self) -> &'static str {
        match self {
            Shift::Prime => "clockinprime",
            Shift::Mid => "clockinmid",
            Shift::Night => "clockinnight",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "prime" => Some(Shift::Prime),
            "mid" => Some(Shift::Mid),
            "night" => Some(Shift::Night),
            _ => None,
        }
    }

    /// Match a normalized hashtag against the shift markers.
    pub fn from_marker_tag(tag: &str) -> Option<Self> {
        Shift::ALL.iter().copied().find(|s| s.marker_tag() == tag)
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.name()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Shift::from_name(s)
    }
}

/// Static shift configuration: one late-cutoff time per shift.
#[derive(Debug, Clone)]
pub struct ShiftCatalog {
    cutoffs: BTreeMap<Shift, NaiveTime>,
}

impl ShiftCatalog {
    /// Build the catalog from configured "shift name → HH:MM" pairs.
    /// Every shift must have a cutoff; unknown shift names are rejected.
    pub fn from_config(cutoffs: &BTreeMap<String, String>) -> AppResult<Self> {
        let mut out = BTreeMap::new();

        for (name, time_str) in cutoffs {
            let shift = Shift::from_name(name)
                .ok_or_else(|| AppError::InvalidShift(name.to_string()))?;
            let t = crate::utils::time::parse_time(time_str)
                .ok_or_else(|| AppError::InvalidTime(time_str.to_string()))?;
            out.insert(shift, t);
        }

        for s in Shift::ALL {
            if !out.contains_key(&s) {
                return Err(AppError::Config(format!(
                    "Missing late cutoff for shift '{}'",
                    s.name()
                )));
            }
        }

        Ok(Self { cutoffs: out })
    }

    pub fn late_cutoff(&self, shift: Shift) -> NaiveTime {
        // from_config guarantees every shift is present
        self.cutoffs[&shift]
    }
}
