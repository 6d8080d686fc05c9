//! Canonical catalog of trackable pages, with fuzzy suggestion for
//! near-miss tags.

use crate::core::normalize::normalize_tag;
use crate::models::page::Page;
use std::collections::BTreeMap;

/// Minimum Jaro-Winkler similarity for a "did you mean" hint.
const SUGGEST_THRESHOLD: f64 = 0.7;

/// Static `canonical key → display label` catalog. Built once at startup by
/// normalizing every raw catalog key; iteration order (catalog order) is the
/// sorted key order, stable across runs.
#[derive(Debug, Clone)]
pub struct PageRegistry {
    pages: BTreeMap<String, String>,
}

impl PageRegistry {
    pub fn new(raw: &BTreeMap<String, String>) -> Self {
        let pages = raw
            .iter()
            .map(|(k, v)| (normalize_tag(k), v.clone()))
            .collect();
        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.pages.get(key).map(String::as_str)
    }

    /// Iterate the catalog in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Page> + '_ {
        self.pages.iter().map(|(k, v)| Page {
            key: k.clone(),
            label: v.clone(),
        })
    }

    /// Best approximate match for an unrecognized key, only when similarity
    /// clears the threshold. Used to produce a hint for the sender — never
    /// to silently record an event under the guessed key.
    pub fn suggest(&self, key: &str) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;

        for candidate in self.pages.keys() {
            let score = strsim::jaro_winkler(key, candidate);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((candidate, score)) if score >= SUGGEST_THRESHOLD => Some(candidate),
            _ => None,
        }
    }
}
