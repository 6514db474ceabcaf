//! # creative-extract
//!
//! Structured ad-creative extraction from scraped social-feed ad cards.
//!
//! Given the visible text of one ad card, an optional brand hint and the
//! media elements found in it, this library recovers the parts of the ad a
//! human would recognise: the primary copy, the link card (domain, headline,
//! description), the call-to-action label, the advertiser, and the creative
//! media ordered best first.
//!
//! ## Quick Start
//!
//! ```rust
//! use creative_extract::{extract_creative, MediaCandidate};
//!
//! let text = "Acme Sponsored\n\
//!             Our lightest trail shoe yet. Built for mud.\n\
//!             acme.io\n\
//!             Trail Runner Pro\n\
//!             Shop Now";
//! let media = vec![MediaCandidate::image("https://cdn.example.com/shoe.jpg", 1080, 1080)];
//!
//! let creative = extract_creative(text, "Acme", &media);
//! assert_eq!(creative.primary_text, "Our lightest trail shoe yet. Built for mud.");
//! assert_eq!(creative.domain, "acme.io");
//! assert_eq!(creative.headline, "Trail Runner Pro");
//! assert_eq!(creative.cta_label, "Shop Now");
//! assert_eq!(creative.brand.name, "Acme");
//! assert_eq!(creative.ranked_images, vec!["https://cdn.example.com/shoe.jpg"]);
//! ```
//!
//! ## Features
//!
//! - **Noise Removal**: Drops reaction bars, player counters and ad-library labels
//! - **Link-Card Recovery**: Splits merged lines and classifies domain, headline, description and CTA
//! - **Brand Identification**: Uses "Sponsored" neighbours, headings and logo heuristics
//! - **Media Ranking**: Filters icons, prefers the largest creative and picks the best `srcset` variant
//!
//! Extraction never fails: unrecognised text stays in the primary copy, and
//! unusable media sources are reported in [`CapturedCreative::warnings`].

mod error;
mod extract;
mod input;
mod options;
mod patterns;
mod result;

/// Brand name and logo identification.
pub mod brand;

/// Geometry-aware text ordering.
pub mod layout;

/// Media candidates and ranking.
pub mod media;

/// Noise filtering, line splitting, truncation collapsing and classification.
pub mod text;

/// URL utilities for validation, resolution and `srcset` selection.
pub mod url_utils;

// Public API - re-exports
pub use brand::BrandSignals;
pub use error::{Error, Result};
pub use input::CardInput;
pub use layout::{Rect, TextBlock};
pub use media::{MediaCandidate, MediaKind, Measurements};
pub use options::Options;
pub use patterns::is_ad_copy_noise;
pub use result::{BrandInfo, CapturedCreative};

/// Extracts a creative from card text, a brand hint and media candidates
/// using default options.
///
/// # Example
///
/// ```rust
/// use creative_extract::extract_creative;
///
/// let creative = extract_creative("", "", &[]);
/// assert!(creative.is_empty());
/// assert!(creative.is_low_confidence());
/// ```
#[must_use]
pub fn extract_creative(
    raw_text: &str,
    brand_hint: &str,
    media: &[MediaCandidate],
) -> CapturedCreative {
    extract_creative_with_options(raw_text, brand_hint, media, &Options::default())
}

/// Extracts a creative with custom options.
///
/// # Example
///
/// ```rust
/// use creative_extract::{extract_creative_with_options, Options};
///
/// let options = Options {
///     extra_cta_labels: vec!["Get Tickets".to_string()],
///     ..Options::default()
/// };
/// let text = "Live this Friday night!\nGet Tickets";
/// let creative = extract_creative_with_options(text, "", &[], &options);
/// assert_eq!(creative.cta_label, "Get Tickets");
/// ```
#[must_use]
pub fn extract_creative_with_options(
    raw_text: &str,
    brand_hint: &str,
    media: &[MediaCandidate],
    options: &Options,
) -> CapturedCreative {
    let input = CardInput::new(raw_text, brand_hint, media.to_vec());
    extract::extract_card_content(&input, options)
}

/// Extracts a creative from a fully scraped card, including structural
/// brand signals and positioned text blocks.
///
/// # Example
///
/// ```rust
/// use creative_extract::{extract_card, CardInput, Options};
///
/// let input = CardInput::from_json(r#"{
///     "rawText": "Fresh roast, delivered.\nbeanbox.example.com\nSubscribe",
///     "brandSignals": {"sponsoredNeighbors": [{"text": "Bean Box"}]}
/// }"#)?;
/// let creative = extract_card(&input, &Options::default());
/// assert_eq!(creative.brand.name, "Bean Box");
/// assert_eq!(creative.domain, "beanbox.example.com");
/// assert_eq!(creative.cta_label, "Subscribe");
/// # Ok::<(), creative_extract::Error>(())
/// ```
#[must_use]
pub fn extract_card(input: &CardInput, options: &Options) -> CapturedCreative {
    extract::extract_card_content(input, options)
}
