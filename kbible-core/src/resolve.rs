//! Maps a parsed citation onto the book registry and builds the external
//! lookup key plus the human-facing label.

use crate::books;
use crate::citation::ParsedCitation;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    /// Externally-addressable identifier, "{key}/{chapter}:{verseRange}".
    pub lookup_key: String,
    /// Human-facing citation, "{primary alias} {chapter}:{verseRange}".
    pub display_label: String,
}

/// Resolution outcome. An unknown alias never reaches key construction;
/// callers must branch rather than propagate a placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedReference),
    Unresolved,
}

/// No chapter/verse bounds checking happens here: any digit string is
/// forwarded verbatim, and an out-of-canon reference only surfaces as an
/// empty extraction downstream.
pub fn resolve(parsed: &ParsedCitation) -> Resolution {
    match books::lookup(&parsed.book_alias) {
        Some(entry) => Resolution::Resolved(ResolvedReference {
            lookup_key: format!("{}/{}:{}", entry.key, parsed.chapter, parsed.verse_range),
            display_label: format!(
                "{} {}:{}",
                entry.korean_names[0], parsed.chapter, parsed.verse_range
            ),
        }),
        None => Resolution::Unresolved,
    }
}
