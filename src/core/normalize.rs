//! Tag canonicalization.
//!
//! Source tags are typed from memory with inconsistent casing, spacing and
//! joiners ("Kissing_Cousins / X" vs "kissingcousinsx"), so lookups go
//! through a single canonical form.

/// Filler characters stripped from tags. `x` is the word-joiner used in
/// multi-page tags and carries no meaning of its own.
const FILLERS: [char; 5] = [' ', '_', '/', '&', 'x'];

/// Canonicalize a free-text token into a lookup key.
/// Total: never fails, worst case returns an empty string.
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !FILLERS.contains(c))
        .collect()
}
