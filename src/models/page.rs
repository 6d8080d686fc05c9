use serde::Serialize;

/// One tracked catalog entry. Immutable: pages are loaded from the
/// configuration at startup and never created or destroyed at runtime.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Page {
    /// Normalized, unique lookup key (what users type as a hashtag).
    pub key: String,
    /// Human-readable label shown in reports.
    pub label: String,
}
