//! Serialized card input.

use serde::{Deserialize, Serialize};

use crate::brand::BrandSignals;
use crate::error::Result;
use crate::layout::TextBlock;
use crate::media::MediaCandidate;
use crate::options::Options;

/// Everything scraped from one ad card.
///
/// Every field is optional in JSON; a missing field is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardInput {
    /// Visible text of the card, one DOM line per `\n`.
    pub raw_text: String,

    /// Brand name known to the caller, used when no better signal exists.
    pub brand_hint: String,

    /// Structural brand evidence, when the scraper collected it.
    pub brand_signals: BrandSignals,

    pub media: Vec<MediaCandidate>,

    /// Positioned text nodes. When present they replace `raw_text` as the
    /// text source.
    pub text_blocks: Vec<TextBlock>,

    /// Per-card option overrides, used by the stdin binary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

impl CardInput {
    /// Input with text, hint and media only.
    #[must_use]
    pub fn new(
        raw_text: impl Into<String>,
        brand_hint: impl Into<String>,
        media: Vec<MediaCandidate>,
    ) -> Self {
        Self {
            raw_text: raw_text.into(),
            brand_hint: brand_hint.into(),
            media,
            ..Self::default()
        }
    }

    /// Decode a card from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] when the JSON is malformed or
    /// has fields of the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Brand signals with the top-level hint filled in when the signals
    /// carry none of their own.
    #[must_use]
    pub fn resolved_signals(&self) -> BrandSignals {
        let mut signals = self.brand_signals.clone();
        if signals.hint.trim().is_empty() {
            signals.hint.clone_from(&self.brand_hint);
        }
        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::media::MediaKind;

    #[test]
    fn minimal_json_uses_defaults() {
        let input = match CardInput::from_json(r#"{"rawText": "Hello"}"#) {
            Ok(input) => input,
            Err(err) => panic!("expected input to parse, got {err:?}"),
        };
        assert_eq!(input.raw_text, "Hello");
        assert!(input.media.is_empty());
        assert!(input.options.is_none());
    }

    #[test]
    fn media_and_options_decode() {
        let json = r#"{
            "rawText": "Copy",
            "media": [{"sourceUrl": "https://cdn.example.com/v.mp4", "width": 640, "height": 360, "kind": "video"}],
            "options": {"minMediaDimension": 100}
        }"#;
        let input = match CardInput::from_json(json) {
            Ok(input) => input,
            Err(err) => panic!("expected input to parse, got {err:?}"),
        };
        assert_eq!(input.media[0].kind, MediaKind::Video);
        assert_eq!(input.options.map(|o| o.min_media_dimension), Some(100));
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        assert!(matches!(CardInput::from_json("{"), Err(Error::InvalidInput(_))));
        assert!(matches!(
            CardInput::from_json(r#"{"media": "nope"}"#),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn hint_fills_empty_signal_hint_only() {
        let mut input = CardInput::new("", "Acme", Vec::new());
        assert_eq!(input.resolved_signals().hint, "Acme");

        input.brand_signals.hint = "Acme Outdoors".to_string();
        assert_eq!(input.resolved_signals().hint, "Acme Outdoors");
    }
}
