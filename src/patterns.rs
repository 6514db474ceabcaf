//! Compiled regex patterns and lexicons for creative extraction.
//!
//! All patterns are compiled once using `LazyLock`. They are immutable, so
//! sharing them across concurrent extractions is safe.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Noise Patterns
// =============================================================================

/// Line-level denylist of UI chrome, engagement counters and ad-library labels.
///
/// Matched against the trimmed, timestamp-free form of a line or fragment.
pub static AD_COPY_NOISE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^active$",
        r"(?i)^activelibrary id",
        r"(?i)^library id",
        r"(?i)^started running",
        r"(?i)^platforms?",
        r"(?i)^\d+\s+ads use this creative",
        r"(?i)^open dropdown",
        r"(?i)^see ad details",
        r"(?i)^see summary details",
        r"(?i)^this ad has multiple versions$",
        r"(?i)^see translation",
        r"(?i)^sponsored$",
        r"(?i)^facebook ad library",
        r"(?i)^ad library\b",
        r"(?i)^landing page\b",
        r"(?i)^saved \d+",
        r"(?i)^show more$",
        r"(?i)^show less$",
        r"(?i)^facebook$",
        r"(?i)^like$",
        r"(?i)^comment$",
        r"(?i)^share$",
        r"(?i)^\d+ comments$",
        r"(?i)^\d+ shares$",
        r"(?i)^\d+ likes$",
        r"(?i)^write a comment",
        r"(?i)^press enter to post",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("AD_COPY_NOISE regex"))
    .collect()
});

/// Labels that, when found before the word "sponsored", mark the prefix as
/// concatenated ad-library metadata rather than copy.
pub static METADATA_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(activelibrary id|library id|see ad details|open dropdown|summary details|total active time|platforms?)",
    )
    .expect("METADATA_PREFIX regex")
});

/// The literal "sponsored" marker, any case.
pub static SPONSORED_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)sponsored").expect("SPONSORED_TOKEN regex"));

/// "Sponsored" as a standalone word, for header text where it may also sit
/// inside a name.
pub static SPONSORED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsponsored\b").expect("SPONSORED_WORD regex"));

/// Engagement counters such as "12 likes" (applied to lowercase keys).
pub static ENGAGEMENT_COUNTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\s+(likes|comments|shares)$").expect("ENGAGEMENT_COUNTER regex")
});

/// Exact lowercase keys the classifier treats as leftover chrome.
pub const NOISE_TOKENS: &[&str] = &[
    "like",
    "comment",
    "share",
    "facebook",
    "sponsored",
    "ad library",
    "write a comment",
    "press enter to post",
];

/// Fragments made only of digits and punctuation.
pub static SYMBOL_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\W]+$").expect("SYMBOL_ONLY regex"));

// =============================================================================
// Detection Patterns
// =============================================================================

/// Video player position counters, e.g. "0:03 / 0:30".
pub static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,2}:\d{2}\s*/\s*\d{1,2}:\d{2}\b").expect("TIMESTAMP regex")
});

/// Trailing ellipsis, either the single glyph or three dots.
pub static TRAILING_ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(…|\.\.\.)\s*$").expect("TRAILING_ELLIPSIS regex"));

/// A whole string that looks like a bare domain.
pub static DOMAIN_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9][a-z0-9.-]*\.[a-z]{2,}$").expect("DOMAIN_ONLY regex")
});

/// A domain-looking token anywhere in a line.
pub static DOMAIN_INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z0-9][a-z0-9.-]*\.[a-z]{2,}").expect("DOMAIN_INLINE regex")
});

/// Leading URL scheme.
pub static HTTP_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("HTTP_SCHEME regex"));

// =============================================================================
// Call-To-Action Lexicon
// =============================================================================

/// Button labels recognised as calls to action.
pub const CTA_LABELS: &[&str] = &[
    "Shop Now",
    "Learn More",
    "Sign Up",
    "Order Now",
    "Subscribe",
    "Get Offer",
    "Contact Us",
    "Apply Now",
    "Download",
    "Install Now",
    "Watch More",
    "Book Now",
    "Get Quote",
    "See Menu",
    "Donate Now",
    "View Details",
];

/// Any of [`CTA_LABELS`] as a whole-word match.
pub static CTA_INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&cta_alternation(CTA_LABELS.iter().copied())).expect("CTA_INLINE regex")
});

/// Builds the case-insensitive, word-bounded alternation used for CTA splitting.
pub(crate) fn cta_alternation<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let alternatives: Vec<String> = labels.map(regex::escape).collect();
    format!(r"(?i)\b({})\b", alternatives.join("|"))
}

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Matches runs of two or more blank lines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

// =============================================================================
// Brand Patterns
// =============================================================================

/// The possessive suffix Facebook appends to shared-post headers.
pub static POSSESSIVE_POST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)['’]s\s+post\s*$").expect("POSSESSIVE_POST regex"));

/// Logo hints in image alt text.
pub static LOGO_ALT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(profile|logo)").expect("LOGO_ALT regex"));

/// Returns true if the text matches any line-level noise pattern.
#[must_use]
pub fn is_ad_copy_noise(text: &str) -> bool {
    AD_COPY_NOISE.iter().any(|pattern| pattern.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_matches_counters_and_labels() {
        assert!(is_ad_copy_noise("12 likes"));
        assert!(is_ad_copy_noise("Sponsored"));
        assert!(is_ad_copy_noise("Library ID: 123456"));
        assert!(is_ad_copy_noise("Show more"));
        assert!(!is_ad_copy_noise("Show more shoes this weekend"));
        assert!(!is_ad_copy_noise("Likeable socks for everyone"));
    }

    #[test]
    fn domain_patterns() {
        assert!(DOMAIN_ONLY.is_match("acme.io"));
        assert!(DOMAIN_ONLY.is_match("SHOP.Example.COM"));
        assert!(!DOMAIN_ONLY.is_match("acme.io/path"));
        assert!(!DOMAIN_ONLY.is_match("Save 3.99 today"));
        assert_eq!(
            DOMAIN_INLINE.find("Visit acme.io now").map(|m| m.as_str()),
            Some("acme.io")
        );
    }

    #[test]
    fn cta_inline_is_word_bounded() {
        assert!(CTA_INLINE.is_match("then shop now"));
        assert!(!CTA_INLINE.is_match("Downloadable content"));
    }

    #[test]
    fn sponsored_word_ignores_embedded_matches() {
        assert!(SPONSORED_WORD.is_match("Acme · Sponsored"));
        assert!(!SPONSORED_WORD.is_match("Unsponsored Coffee"));
        assert!(SPONSORED_TOKEN.is_match("OutdoorsSponsoredWinter"));
    }

    #[test]
    fn timestamp_matches_player_counter() {
        assert_eq!(TIMESTAMP.replace("0:03 / 0:30", ""), "");
        assert!(!TIMESTAMP.is_match("Opens at 9:00"));
    }

    #[test]
    fn whitespace_normalize_collapses_spaces() {
        let result = WHITESPACE_NORMALIZE.replace_all("hello   world", " ");
        assert_eq!(result, "hello world");
    }
}
