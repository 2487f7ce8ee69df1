//! Single-shot citation recognizer.
//!
//! Runs on every keystroke in the inline-trigger path, so it stays O(length):
//! strip whitespace once, apply one compiled pattern, no backtracking
//! ambiguity (the alias class is Hangul-only and stops at the first digit).

use regex::Regex;
use std::sync::OnceLock;

/// A recognized citation, decomposed but not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCitation {
    /// Korean book alias as typed, e.g. 요한복음.
    pub book_alias: String,
    /// Chapter number as text, 1-3 digits.
    pub chapter: String,
    /// Verse token, either "16" or "16-18".
    pub verse_range: String,
    /// The full matched token (whitespace-stripped). The inline trigger uses
    /// this as the suggestion query.
    pub matched: String,
}

fn citation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([\x{AC00}-\x{D7AF}]+)(\d{1,3}):(\d{1,3}(?:-\d{1,3})?)").unwrap()
    })
}

/// Recognize a citation anywhere inside `text`. Whitespace may be interspersed
/// freely; it is removed before matching. Returns `None` for anything that is
/// not `<hangul alias><1-3 digit chapter>:<1-3 digit verse>[-<1-3 digits>]`.
pub fn citation_match(text: &str) -> Option<ParsedCitation> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let caps = citation_re().captures(&cleaned)?;
    Some(ParsedCitation {
        book_alias: caps[1].to_string(),
        chapter: caps[2].to_string(),
        verse_range: caps[3].to_string(),
        matched: caps[0].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_plain_citation() {
        let p = citation_match("요한복음3:16").unwrap();
        assert_eq!(p.book_alias, "요한복음");
        assert_eq!(p.chapter, "3");
        assert_eq!(p.verse_range, "16");
        assert_eq!(p.matched, "요한복음3:16");
    }

    #[test]
    fn whitespace_is_ignored() {
        let p = citation_match("요한복음 3 : 16 - 18").unwrap();
        assert_eq!(p.book_alias, "요한복음");
        assert_eq!(p.chapter, "3");
        assert_eq!(p.verse_range, "16-18");
    }

    #[test]
    fn matches_inside_surrounding_text() {
        let p = citation_match("오늘의 말씀은 창세기1:1 입니다").unwrap();
        // The greedy Hangul class absorbs the text running into the alias;
        // it stops at the first digit.
        assert!(p.book_alias.ends_with("창세기"));
        assert_eq!(p.chapter, "1");
        assert_eq!(p.verse_range, "1");
    }

    #[test]
    fn verse_range_token() {
        let p = citation_match("시편119:105-112").unwrap();
        assert_eq!(p.chapter, "119");
        assert_eq!(p.verse_range, "105-112");
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(citation_match("요한복음316").is_none());
    }

    #[test]
    fn rejects_non_hangul_alias() {
        assert!(citation_match("XYZ3:16").is_none());
        assert!(citation_match("John3:16").is_none());
    }

    #[test]
    fn rejects_digitless_fields() {
        assert!(citation_match("요한복음:16").is_none());
        assert!(citation_match("요한복음3:").is_none());
    }

    #[test]
    fn four_digit_chapter_is_clamped_by_pattern() {
        // 1234 cannot be a chapter; the first three digits satisfy the
        // pattern only if a separator follows, which it does not here.
        assert!(citation_match("요한복음1234").is_none());
    }
}
