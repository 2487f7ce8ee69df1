//! Pulls (label, text) verse pairs out of the retrieved quote page.
//!
//! The source markup places each verse's "chapter:verse" label inside a
//! `<small>` element, followed by plain text nodes up to a `<br>`. One pass
//! over the document, in document order; markup without any `<small>`
//! elements yields an empty list rather than an error.

use scraper::{Html, Node, Selector};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VerseFragment {
    /// Raw label as emitted by the source, e.g. "3:16".
    pub verse_label: String,
    /// Concatenated verse text, each node trimmed before joining.
    pub verse_text: String,
}

pub fn extract_verses(html: &str) -> Vec<VerseFragment> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("small").unwrap();
    let mut out: Vec<VerseFragment> = Vec::new();
    for small in doc.select(&sel) {
        let verse_label = small.text().collect::<String>().trim().to_string();
        let mut verse_text = String::new();
        for sibling in small.next_siblings() {
            match sibling.value() {
                Node::Element(el) if el.name() == "br" => break,
                Node::Text(t) => verse_text.push_str(t.trim()),
                _ => {}
            }
        }
        out.push(VerseFragment {
            verse_label,
            verse_text,
        });
    }
    out
}
