//! Renders extracted verse fragments into the quotation callout block.

use crate::extract::VerseFragment;

/// Placeholder header when no citation label is available. 구절 = "verse".
pub const FALLBACK_LABEL: &str = "구절";

/// Per fragment, drop the chapter prefix of the label (everything up to and
/// including the first ':'), emit "{verse} {text}", and join with newlines.
/// A label without a colon is kept whole.
pub fn join_verses(fragments: &[VerseFragment]) -> String {
    fragments
        .iter()
        .map(|f| {
            let number = f
                .verse_label
                .split_once(':')
                .map(|(_, suffix)| suffix)
                .unwrap_or(f.verse_label.as_str());
            format!("{} {}", number, f.verse_text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap the joined verse body into a Markdown callout. With `tag_book` the
/// label is prefixed with '#' so the book name becomes a tag.
///
/// Only the first content line carries the "> " marker; newlines inside a
/// multi-verse body stay within the same quoted paragraph. This mirrors the
/// original output format exactly.
pub fn format_callout(body: &str, label: Option<&str>, tag_book: bool) -> String {
    format!(
        "> [!quote]+ {}{}\n> {}",
        if tag_book { "#" } else { "" },
        label.unwrap_or(FALLBACK_LABEL),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(label: &str, text: &str) -> VerseFragment {
        VerseFragment {
            verse_label: label.to_string(),
            verse_text: text.to_string(),
        }
    }

    #[test]
    fn keeps_verse_number_suffix() {
        let body = join_verses(&[fragment("3:16", "For God so loved...")]);
        assert_eq!(body, "16 For God so loved...");
    }

    #[test]
    fn joins_multiple_verses_with_newlines() {
        let body = join_verses(&[fragment("3:16", "첫째"), fragment("3:17", "둘째")]);
        assert_eq!(body, "16 첫째\n17 둘째");
    }

    #[test]
    fn colonless_label_is_kept_whole() {
        assert_eq!(join_verses(&[fragment("16", "text")]), "16 text");
    }

    #[test]
    fn empty_fragments_format_to_empty_body() {
        assert_eq!(join_verses(&[]), "");
        let block = format_callout("", Some("요한복음 99:99"), false);
        assert_eq!(block, "> [!quote]+ 요한복음 99:99\n> ");
    }

    #[test]
    fn callout_header_with_and_without_tag() {
        let tagged = format_callout("16 본문", Some("요한복음 3:16"), true);
        assert!(tagged.starts_with("> [!quote]+ #요한복음 3:16"));
        let plain = format_callout("16 본문", Some("요한복음 3:16"), false);
        assert!(plain.starts_with("> [!quote]+ 요한복음 3:16"));
    }

    #[test]
    fn missing_label_uses_placeholder() {
        let block = format_callout("16 본문", None, false);
        assert_eq!(block, "> [!quote]+ 구절\n> 16 본문");
    }

    #[test]
    fn multi_verse_body_is_single_quoted_paragraph() {
        let body = join_verses(&[fragment("3:16", "첫째"), fragment("3:17", "둘째")]);
        let block = format_callout(&body, Some("요한복음 3:16-17"), false);
        // The second verse line intentionally has no "> " prefix.
        assert_eq!(block, "> [!quote]+ 요한복음 3:16-17\n> 16 첫째\n17 둘째");
    }
}
