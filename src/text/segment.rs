//! The classifiable unit of card text.

use crate::patterns::{TIMESTAMP, WHITESPACE_NORMALIZE};

/// One fragment of a card line after noise removal and splitting.
///
/// `raw` is reproduced verbatim in output. `text` is the detection form
/// (timestamp-free, trimmed, original case) that classified fields are
/// reported from, and `key` is its lowercase, whitespace-collapsed form used
/// for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    raw: String,
    text: String,
    key: String,
    blank: bool,
}

impl Segment {
    /// A paragraph separator taken from a blank source line.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            raw: String::new(),
            text: String::new(),
            key: String::new(),
            blank: true,
        }
    }

    /// Build a segment from a line fragment.
    #[must_use]
    pub fn from_fragment(raw: &str) -> Self {
        let text = detection_text(raw);
        let key = detection_key(&text);
        Self {
            raw: raw.to_string(),
            text,
            key,
            blank: false,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.blank
    }
}

/// Detection form of a fragment: zero-width spaces and player timestamps
/// removed, then trimmed.
#[must_use]
pub fn detection_text(raw: &str) -> String {
    let without_zwsp = raw.replace('\u{200B}', "");
    TIMESTAMP.replace_all(&without_zwsp, "").trim().to_string()
}

/// Lowercase, whitespace-collapsed form of a detection text.
#[must_use]
pub fn detection_key(text: &str) -> String {
    WHITESPACE_NORMALIZE
        .replace_all(text.trim(), " ")
        .to_lowercase()
}
