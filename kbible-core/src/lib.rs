//! Korean Bible citation recognition, resolution and formatting.
//!
//! The pipeline runs strictly left to right: raw text → [`citation`] →
//! [`resolve`] → fetch (through [`session::VerseSource`]) → [`extract`] →
//! [`format`]. [`session`] orchestrates it for both the modal and the
//! inline-trigger front end.

pub mod books;
pub mod citation;
pub mod extract;
pub mod format;
pub mod resolve;
pub mod session;
pub mod settings;

pub use books::{lookup, by_index, BookEntry, BOOKS};
pub use citation::{citation_match, ParsedCitation};
pub use extract::{extract_verses, VerseFragment};
pub use format::{format_callout, join_verses, FALLBACK_LABEL};
pub use resolve::{resolve, Resolution, ResolvedReference};
pub use session::{
    cursor_after_insert, on_trigger, Candidate, FetchError, SuggestionSession, TriggerInfo,
    VerseSource, DEFAULT_TRIGGER,
};
pub use settings::{load_settings, save_settings, settings_path, Settings};
