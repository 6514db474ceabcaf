//! Line-level noise removal.
//!
//! Only known chrome is removed. Anything the filter does not recognise
//! passes through unchanged.

use regex::Regex;

use crate::patterns::{is_ad_copy_noise, METADATA_PREFIX, SPONSORED_TOKEN, SYMBOL_ONLY};
use crate::text::segment::{detection_key, detection_text};

/// Outcome of cleaning one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanLine {
    /// The source line was blank; kept as a paragraph break.
    Blank,
    /// Remaining content of the line.
    Text(String),
}

/// Noise filter bound to one card's brand name.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    brand_sponsored: Option<Regex>,
    brand_bare: Option<Regex>,
    brand_key: String,
}

impl NoiseFilter {
    /// Create a filter for the given brand; an empty brand disables prefix
    /// stripping and brand-echo removal.
    #[must_use]
    pub fn new(brand: &str) -> Self {
        let brand = brand.trim();
        if brand.is_empty() {
            return Self {
                brand_sponsored: None,
                brand_bare: None,
                brand_key: String::new(),
            };
        }

        let escaped = regex::escape(brand);
        Self {
            brand_sponsored: Regex::new(&format!(r"(?i)^{escaped}\s*Sponsored\s*")).ok(),
            brand_bare: Regex::new(&format!(r"(?i)^{escaped}\b")).ok(),
            brand_key: detection_key(brand),
        }
    }

    /// Clean every line of a normalized card text.
    #[must_use]
    pub fn clean_lines(&self, text: &str) -> Vec<CleanLine> {
        text.split('\n').filter_map(|line| self.clean_line(line)).collect()
    }

    /// Clean one line. `None` means the line carried only noise.
    #[must_use]
    pub fn clean_line(&self, line: &str) -> Option<CleanLine> {
        if line.trim().is_empty() {
            return Some(CleanLine::Blank);
        }

        let without_brand = self.strip_brand_prefix(line);
        let cleaned = strip_metadata_prefix(without_brand);

        if cleaned.trim().is_empty() || is_ad_copy_noise(&detection_text(cleaned)) {
            return None;
        }

        Some(CleanLine::Text(cleaned.to_string()))
    }

    /// Remove a leading "{brand} Sponsored" or bare "{brand}".
    #[must_use]
    pub fn strip_brand_prefix<'a>(&self, line: &'a str) -> &'a str {
        for pattern in [&self.brand_sponsored, &self.brand_bare].into_iter().flatten() {
            if let Some(found) = pattern.find(line) {
                return &line[found.end()..];
            }
        }
        line
    }

    /// True if the fragment is just the brand name repeated.
    #[must_use]
    pub fn is_brand_echo(&self, text: &str) -> bool {
        !self.brand_key.is_empty() && detection_key(text) == self.brand_key
    }
}

/// Drop concatenated ad-library labels that precede the last "sponsored".
///
/// DOM-to-text conversion glues labels such as "Library ID: 123" and
/// "See ad details" onto the "Sponsored" header with no separator. The
/// prefix is only removed when it contains one of those labels.
#[must_use]
pub fn strip_metadata_prefix(line: &str) -> &str {
    let Some(marker) = SPONSORED_TOKEN.find_iter(line).last() else {
        return line;
    };
    if METADATA_PREFIX.is_match(&line[..marker.start()]) {
        &line[marker.end()..]
    } else {
        line
    }
}

/// True for fragments with no lexical content: a lone character other than
/// "a"/"I", or only digits and punctuation.
#[must_use]
pub fn is_contentless(text: &str) -> bool {
    let mut chars = text.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        return !matches!(only, 'a' | 'A' | 'i' | 'I');
    }
    SYMBOL_ONLY.is_match(text)
}

/// Normalize line endings and strip zero-width spaces.
#[must_use]
pub fn normalize_input(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n").replace('\u{200B}', "")
}
