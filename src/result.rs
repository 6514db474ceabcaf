//! Result types for extraction output.
//!
//! This module defines the structured creative produced for one ad card.
//! Field names serialize in camelCase for the browser-side consumer.

use serde::{Deserialize, Serialize};

/// Brand identity inferred for an ad card.
///
/// An empty `name` means "unknown"; consumers should surface that state
/// rather than substitute a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInfo {
    /// Advertiser display name. Never the literal "sponsored".
    pub name: String,

    /// Absolute URL of the advertiser's profile picture or logo.
    pub logo_url: Option<String>,
}

impl BrandInfo {
    /// Build a brand, clearing names that are really the "Sponsored" marker.
    #[must_use]
    pub fn new(name: impl Into<String>, logo_url: Option<String>) -> Self {
        let name = name.into();
        let name = if name.trim().eq_ignore_ascii_case("sponsored") {
            String::new()
        } else {
            name.trim().to_string()
        };
        Self { name, logo_url }
    }

    /// True when no brand name could be determined.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.name.is_empty()
    }
}

/// Structured advertisement record extracted from one card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedCreative {
    /// Main ad copy. Paragraph breaks preserved, at most one blank line in a row.
    pub primary_text: String,

    /// Landing-page domain from the link card, as displayed.
    pub domain: String,

    /// Link-card headline.
    pub headline: String,

    /// Link-card description line following the headline and domain.
    pub description: String,

    /// Call-to-action button label, e.g. "Shop Now".
    pub cta_label: String,

    /// Advertiser identity.
    pub brand: BrandInfo,

    /// Image URLs, best creative first.
    pub ranked_images: Vec<String>,

    /// Video URLs, best creative first.
    pub ranked_videos: Vec<String>,

    /// Width / height of the leading media, rounded to four decimals.
    pub aspect_ratio: Option<f64>,

    /// Non-fatal issues encountered during extraction, such as unusable
    /// media sources.
    pub warnings: Vec<String>,
}

impl CapturedCreative {
    /// The single most representative media URL: the top video when one
    /// exists, else the top image.
    #[must_use]
    pub fn primary_media(&self) -> Option<&str> {
        self.ranked_videos
            .first()
            .or_else(|| self.ranked_images.first())
            .map(String::as_str)
    }

    /// True when nothing beyond raw copy was decisively detected: the brand
    /// is unknown and no link-card field was classified.
    #[must_use]
    pub fn is_low_confidence(&self) -> bool {
        self.brand.is_unknown()
            && self.domain.is_empty()
            && self.headline.is_empty()
            && self.description.is_empty()
            && self.cta_label.is_empty()
    }

    /// True when the card yielded neither text nor media.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary_text.is_empty()
            && self.ranked_images.is_empty()
            && self.ranked_videos.is_empty()
    }
}
