//! Suggestion pipeline orchestration shared by both front ends.
//!
//! The session runs raw input through matcher, resolver, fetch and extraction
//! and produces zero or one candidate per invocation. Every failure mode
//! (no-match, unknown book, transport error) degrades to an empty candidate
//! list; autocomplete false triggers happen on most keystrokes and must never
//! surface an error dialog.

use std::fmt;

use crate::citation::citation_match;
use crate::extract::extract_verses;
use crate::format::{format_callout, join_verses};
use crate::resolve::{resolve, Resolution, ResolvedReference};

/// Transport failure reported by a [`VerseSource`].
#[derive(Debug, Clone)]
pub struct FetchError(String);

impl FetchError {
    pub fn new(msg: impl Into<String>) -> Self {
        FetchError(msg.into())
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for FetchError {}

/// The retrieval seam. Implementations own all transport concerns; the
/// session only sees raw markup or a [`FetchError`].
pub trait VerseSource {
    fn fetch(&self, lookup_key: &str) -> Result<String, FetchError>;
}

/// One suggestion. The resolved reference rides along with the text so that
/// selection never depends on session state mutated by an earlier call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Joined verse lines, ready for the callout body. May be empty when the
    /// source returned no matching fragments (e.g. out-of-canon reference).
    pub text: String,
    pub reference: ResolvedReference,
}

/// One suggestion session. Each front end owns its own instance; invocations
/// are numbered so that a result delivered late, after a newer keystroke has
/// started its own invocation, is discarded instead of rendered.
pub struct SuggestionSession<S> {
    source: S,
    latest_started: u64,
}

impl<S: VerseSource> SuggestionSession<S> {
    pub fn new(source: S) -> Self {
        SuggestionSession {
            source,
            latest_started: 0,
        }
    }

    /// Start a new invocation and return its token. Any token issued earlier
    /// is superseded from this point on.
    pub fn begin(&mut self) -> u64 {
        self.latest_started += 1;
        self.latest_started
    }

    /// Whether `token` still belongs to the most recently started invocation.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest_started
    }

    /// Run the full pipeline for one keystroke or query change. Returns zero
    /// or one candidate; a result that has been superseded by a newer
    /// invocation is dropped.
    pub fn suggest(&mut self, query: &str) -> Vec<Candidate> {
        let token = self.begin();
        let candidates = self.run(query);
        if self.is_current(token) {
            candidates
        } else {
            Vec::new()
        }
    }

    fn run(&self, query: &str) -> Vec<Candidate> {
        let Some(parsed) = citation_match(query) else {
            return Vec::new();
        };
        let Resolution::Resolved(reference) = resolve(&parsed) else {
            return Vec::new();
        };
        let markup = match self.source.fetch(&reference.lookup_key) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("[kbible] fetch failed for {}: {}", reference.lookup_key, e);
                return Vec::new();
            }
        };
        let verses = extract_verses(&markup);
        vec![Candidate {
            text: join_verses(&verses),
            reference,
        }]
    }

    /// Format the chosen candidate as the insertable callout block.
    pub fn select(&self, candidate: &Candidate, enable_tagging: bool) -> String {
        format_callout(
            &candidate.text,
            Some(&candidate.reference.display_label),
            enable_tagging,
        )
    }
}

/// Fallback trigger when no prefix is configured.
pub const DEFAULT_TRIGGER: &str = "-+";

/// Replacement span and query for an inline suggestion. Positions are
/// character offsets within the line, editor-style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerInfo {
    /// Always 0: selecting a suggestion replaces the entire line prefix up to
    /// the cursor, not just the trigger+query span.
    pub start: usize,
    pub end: usize,
    pub query: String,
}

/// Inline-trigger detection: the line up to the cursor must begin with the
/// configured trigger (falling back to [`DEFAULT_TRIGGER`]) followed by text
/// the citation matcher recognizes. Anything else means no suggestions.
pub fn on_trigger(line: &str, cursor_ch: usize, prefix_trigger: &str) -> Option<TriggerInfo> {
    let trigger = if prefix_trigger.is_empty() {
        DEFAULT_TRIGGER
    } else {
        prefix_trigger
    };
    let current: String = line.chars().take(cursor_ch).collect();
    let rest = current.strip_prefix(trigger)?;
    let parsed = citation_match(rest)?;
    Some(TriggerInfo {
        start: 0,
        end: cursor_ch,
        query: parsed.matched,
    })
}

/// New cursor position after inserting `inserted` at the start line: the last
/// line of the block, just past its final character.
pub fn cursor_after_insert(start_line: usize, inserted: &str) -> (usize, usize) {
    let lines: Vec<&str> = inserted.split('\n').collect();
    let last_len = lines.last().map(|l| l.chars().count()).unwrap_or(0);
    (start_line + lines.len() - 1, last_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serves canned markup for one lookup key; anything else is an error.
    struct MockSource {
        key: &'static str,
        markup: &'static str,
    }

    impl VerseSource for MockSource {
        fn fetch(&self, lookup_key: &str) -> Result<String, FetchError> {
            if lookup_key == self.key {
                Ok(self.markup.to_string())
            } else {
                Err(FetchError::new(format!("unknown key {}", lookup_key)))
            }
        }
    }

    struct FailingSource;

    impl VerseSource for FailingSource {
        fn fetch(&self, _lookup_key: &str) -> Result<String, FetchError> {
            Err(FetchError::new("HTTP error! status: 502"))
        }
    }

    const JOHN_3: &str = "<body>\
        <small>3:16</small> 하나님이 세상을 이처럼 사랑하사 <br>\
        <small>3:17</small> 하나님이 그 아들을 세상에 보내신 것은 <br>\
        </body>";

    fn john_session() -> SuggestionSession<MockSource> {
        SuggestionSession::new(MockSource {
            key: "john/3:16-17",
            markup: JOHN_3,
        })
    }

    #[test]
    fn end_to_end_single_candidate() {
        let mut session = john_session();
        let candidates = session.suggest("요한복음3:16-17");
        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.reference.lookup_key, "john/3:16-17");
        assert_eq!(c.reference.display_label, "요한복음 3:16-17");
        assert_eq!(
            c.text,
            "16 하나님이 세상을 이처럼 사랑하사\n17 하나님이 그 아들을 세상에 보내신 것은"
        );
    }

    #[test]
    fn selection_formats_from_candidate_reference() {
        let mut session = john_session();
        let candidates = session.suggest("요한복음 3:16-17");
        let block = session.select(&candidates[0], true);
        assert!(block.starts_with("> [!quote]+ #요한복음 3:16-17\n> 16 "));
        let plain = session.select(&candidates[0], false);
        assert!(plain.starts_with("> [!quote]+ 요한복음 3:16-17\n> 16 "));
    }

    #[test]
    fn no_match_yields_empty() {
        let mut session = john_session();
        assert!(session.suggest("just some prose").is_empty());
    }

    #[test]
    fn unknown_book_yields_empty_without_fetch() {
        // The mock errors on any unexpected key; an unresolved alias must
        // never reach it.
        let mut session = john_session();
        assert!(session.suggest("없는책3:16").is_empty());
    }

    #[test]
    fn fetch_failure_yields_empty() {
        let mut session = SuggestionSession::new(FailingSource);
        assert!(session.suggest("요한복음3:16").is_empty());
    }

    #[test]
    fn empty_extraction_still_yields_candidate() {
        let mut session = SuggestionSession::new(MockSource {
            key: "john/99:99",
            markup: "<p>verse not found</p>",
        });
        let candidates = session.suggest("요한복음99:99");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "");
    }

    #[test]
    fn superseded_invocation_is_stale() {
        let mut session = john_session();
        let stale = session.begin();
        // A newer keystroke starts its own invocation.
        let fresh = session.suggest("요한복음3:16-17");
        assert!(!session.is_current(stale));
        assert_eq!(fresh.len(), 1);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let mut session = john_session();
        let a = session.suggest("요한복음3:16-17");
        let b = session.suggest("요한복음3:16-17");
        assert_eq!(a, b);
        assert_eq!(session.select(&a[0], false), session.select(&b[0], false));
    }

    #[test]
    fn trigger_with_default_prefix() {
        let line = "-+요한복음3:16";
        let info = on_trigger(line, line.chars().count(), "").unwrap();
        assert_eq!(info.start, 0);
        assert_eq!(info.end, line.chars().count());
        assert_eq!(info.query, "요한복음3:16");
    }

    #[test]
    fn trigger_with_configured_prefix() {
        let line = "++요한복음3:16";
        let info = on_trigger(line, line.chars().count(), "++").unwrap();
        assert_eq!(info.query, "요한복음3:16");
        // Default no longer applies once a prefix is configured.
        assert!(on_trigger("-+요한복음3:16", 8, "++").is_none());
    }

    #[test]
    fn trigger_lost_when_prefix_missing() {
        assert!(on_trigger("요한복음3:16", 7, "").is_none());
        assert!(on_trigger("- 요한복음3:16", 9, "").is_none());
    }

    #[test]
    fn trigger_requires_citation_after_prefix() {
        assert!(on_trigger("-+hello", 7, "").is_none());
    }

    #[test]
    fn trigger_only_considers_text_before_cursor() {
        let line = "-+요한복음3:16";
        // Cursor sitting right after the trigger: no citation typed yet.
        assert!(on_trigger(line, 2, "").is_none());
        // Cursor before the verse digits: "요한복음3:" does not match.
        assert!(on_trigger(line, 8, "").is_none());
    }

    #[test]
    fn cursor_lands_after_last_line() {
        let block = "> [!quote]+ 요한복음 3:16\n> 16 본문";
        let (line, ch) = cursor_after_insert(4, block);
        assert_eq!(line, 5);
        assert_eq!(ch, "> 16 본문".chars().count());
    }

    #[test]
    fn cursor_for_single_line_insert() {
        assert_eq!(cursor_after_insert(2, "abc"), (2, 3));
    }
}
