//! Free-form clock-in message parsing.
//!
//! The accepted convention is deliberately loose so people typing from
//! memory still match: a literal "CLOCK IN" line anywhere, plus hashtags in
//! any order selecting the shift, the page and an optional cover marker.
//!
//! ```text
//! CLOCK IN
//! #clockinprime
//! #islafree
//! ```

use crate::core::normalize::normalize_tag;
use crate::models::shift::Shift;

/// The marker line that makes a message a clock-in at all.
const MARKER_LINE: &str = "CLOCK IN";

/// Hashtag marking a cover clock-in (a stand-in for the page's regular
/// attendee).
const COVER_TAG: &str = "cover";

/// Legacy marker hashtag; skipped so it is never mistaken for a page tag.
const LEGACY_MARKER_TAG: &str = "clockin";

/// Shift, page and cover flag extracted from one message. The page key is
/// still unresolved: the caller checks it against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClockIn {
    pub shift: Shift,
    pub page_key: String,
    pub is_cover: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Accepted(ParsedClockIn),
    /// No "CLOCK IN" line: unrelated chat traffic, ignored silently.
    NotAttendance,
    /// Marker present but no shift or no page tag: also ignored silently.
    Malformed,
}

pub fn parse(text: &str) -> ParseOutcome {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if !lines.iter().any(|l| l.eq_ignore_ascii_case(MARKER_LINE)) {
        return ParseOutcome::NotAttendance;
    }

    let mut shift: Option<Shift> = None;
    let mut page_key: Option<String> = None;
    let mut is_cover = false;

    for line in &lines {
        let Some(raw_tag) = line.strip_prefix('#') else {
            continue;
        };
        let tag = normalize_tag(raw_tag);

        if tag.is_empty() || tag == LEGACY_MARKER_TAG {
            continue;
        }

        if let Some(s) = Shift::from_marker_tag(&tag) {
            shift = Some(s);
        } else if tag == COVER_TAG {
            is_cover = true;
        } else {
            // Any other tag is the page candidate; last one wins.
            page_key = Some(tag);
        }
    }

    match (shift, page_key) {
        (Some(shift), Some(page_key)) => ParseOutcome::Accepted(ParsedClockIn {
            shift,
            page_key,
            is_cover,
        }),
        _ => ParseOutcome::Malformed,
    }
}
