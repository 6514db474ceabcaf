//! Segment classification.
//!
//! A single forward pass assigns each segment to the primary copy or to one
//! slot of the link card. Document order follows visual order on ad cards
//! (header, body, link card, button), so the first candidate for each slot
//! wins and nothing is revisited.

use std::ops::RangeInclusive;

use crate::options::Options;
use crate::patterns::{
    DOMAIN_ONLY, ENGAGEMENT_COUNTER, HTTP_SCHEME, MULTIPLE_NEWLINES, NOISE_TOKENS,
    WHITESPACE_NORMALIZE,
};
use crate::text::cta::CtaLexicon;
use crate::text::segment::Segment;

/// Link-card slots filled so far. Domain and headline may arrive in either
/// order; the description is only taken once both are known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum LinkCard {
    #[default]
    Open,
    Domain(String),
    Headline(String),
    AwaitingDescription {
        domain: String,
        headline: String,
    },
    Described {
        domain: String,
        headline: String,
        description: String,
    },
}

impl LinkCard {
    fn has_domain(&self) -> bool {
        !matches!(self, Self::Open | Self::Headline(_))
    }

    fn has_headline(&self) -> bool {
        !matches!(self, Self::Open | Self::Domain(_))
    }

    fn with_domain(self, domain: String) -> Self {
        match self {
            Self::Open => Self::Domain(domain),
            Self::Headline(headline) => Self::AwaitingDescription { domain, headline },
            filled => filled,
        }
    }

    fn with_headline(self, headline: String) -> Self {
        match self {
            Self::Open => Self::Headline(headline),
            Self::Domain(domain) => Self::AwaitingDescription { domain, headline },
            filled => filled,
        }
    }

    fn with_description(self, description: String) -> Self {
        match self {
            Self::AwaitingDescription { domain, headline } => Self::Described {
                domain,
                headline,
                description,
            },
            other => other,
        }
    }

    fn into_parts(self) -> (String, String, String) {
        match self {
            Self::Open => (String::new(), String::new(), String::new()),
            Self::Domain(domain) => (domain, String::new(), String::new()),
            Self::Headline(headline) => (String::new(), headline, String::new()),
            Self::AwaitingDescription { domain, headline } => (domain, headline, String::new()),
            Self::Described {
                domain,
                headline,
                description,
            } => (domain, headline, description),
        }
    }
}

/// Text fields recovered from a card's segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub primary_text: String,
    pub domain: String,
    pub headline: String,
    pub description: String,
    pub cta_label: String,
}

impl Classification {
    /// Replace an empty primary text with the cleaned card text, or with the
    /// tidied source when cleaning left nothing either.
    #[must_use]
    pub fn with_fallback(mut self, cleaned: &str, source: &str) -> Self {
        if !self.primary_text.is_empty() {
            return self;
        }
        let cleaned = tidy_paragraphs(cleaned);
        self.primary_text = if cleaned.is_empty() {
            tidy_paragraphs(source)
        } else {
            cleaned
        };
        self
    }
}

/// Single-pass greedy classifier.
#[derive(Debug, Clone)]
pub struct SegmentClassifier<'a> {
    cta: &'a CtaLexicon,
    headline_chars: RangeInclusive<usize>,
}

impl<'a> SegmentClassifier<'a> {
    #[must_use]
    pub fn new(cta: &'a CtaLexicon, options: &Options) -> Self {
        Self {
            cta,
            headline_chars: options.headline_min_chars..=options.headline_max_chars,
        }
    }

    /// Classify segments in document order.
    #[must_use]
    pub fn classify(&self, segments: &[Segment]) -> Classification {
        let mut primary: Vec<&str> = Vec::new();
        let mut card = LinkCard::Open;
        let mut cta_label: Option<String> = None;

        for segment in segments {
            if segment.is_blank() {
                primary.push("");
                continue;
            }

            let key = segment.key();
            if key.is_empty() || is_leftover_chrome(key) {
                continue;
            }

            if cta_label.is_none() && self.cta.is_label(key) {
                cta_label = Some(segment.text().to_string());
                continue;
            }

            if !card.has_domain() && is_domain(segment.text()) {
                card = card.with_domain(segment.text().to_string());
                continue;
            }

            if !card.has_headline() && self.is_headline(segment.text()) {
                card = card.with_headline(segment.text().to_string());
                continue;
            }

            if matches!(card, LinkCard::AwaitingDescription { .. }) {
                card = card.with_description(segment.text().to_string());
                continue;
            }

            primary.push(segment.raw());
        }

        let (domain, headline, description) = card.into_parts();

        Classification {
            primary_text: tidy_paragraphs(&primary.join("\n")),
            domain,
            headline,
            description,
            cta_label: cta_label.unwrap_or_default(),
        }
    }

    /// Short, single-line, sentence-free text: how link headlines read.
    fn is_headline(&self, text: &str) -> bool {
        self.headline_chars.contains(&text.chars().count())
            && !text.contains('\n')
            && !text.contains('.')
            && WHITESPACE_NORMALIZE.replace_all(text, " ").trim() == text
    }
}

pub(crate) fn is_leftover_chrome(key: &str) -> bool {
    NOISE_TOKENS.contains(&key) || ENGAGEMENT_COUNTER.is_match(key)
}

fn is_domain(text: &str) -> bool {
    DOMAIN_ONLY.is_match(&HTTP_SCHEME.replace(text, ""))
}

/// Right-trim lines, collapse runs of blank lines to one, trim the result.
#[must_use]
pub fn tidy_paragraphs(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').map(str::trim_end).collect();
    MULTIPLE_NEWLINES
        .replace_all(&lines.join("\n"), "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(fragments: &[&str]) -> Classification {
        let lexicon = CtaLexicon::default();
        let segments: Vec<Segment> = fragments
            .iter()
            .map(|f| {
                if f.is_empty() {
                    Segment::blank()
                } else {
                    Segment::from_fragment(f)
                }
            })
            .collect();
        SegmentClassifier::new(&lexicon, &Options::default()).classify(&segments)
    }

    #[test]
    fn link_card_fields_are_assigned() {
        let result = classify(&[
            "Our new trail shoe is here. Built for mud.",
            "acme.io",
            "Trail Runner Pro",
            "Free shipping over $50",
            "Shop Now",
        ]);
        assert_eq!(result.primary_text, "Our new trail shoe is here. Built for mud.");
        assert_eq!(result.domain, "acme.io");
        assert_eq!(result.headline, "Trail Runner Pro");
        assert_eq!(result.description, "Free shipping over $50");
        assert_eq!(result.cta_label, "Shop Now");
    }

    #[test]
    fn first_domain_wins() {
        let result = classify(&["acme.io", "https://other.com", "Second domain is copy."]);
        assert_eq!(result.domain, "acme.io");
        assert_eq!(result.primary_text, "https://other.com\nSecond domain is copy.");
    }

    #[test]
    fn scheme_prefixed_domain_keeps_display_form() {
        let result = classify(&["HTTPS://ACME.IO"]);
        assert_eq!(result.domain, "HTTPS://ACME.IO");
    }

    #[test]
    fn headline_may_precede_domain() {
        let result = classify(&["Trail Runner Pro", "acme.io", "Lightweight and tough"]);
        assert_eq!(result.headline, "Trail Runner Pro");
        assert_eq!(result.domain, "acme.io");
        assert_eq!(result.description, "Lightweight and tough");
    }

    #[test]
    fn description_needs_domain_and_headline() {
        let result = classify(&["Trail Runner Pro", "Lightweight and tough"]);
        assert_eq!(result.headline, "Trail Runner Pro");
        assert_eq!(result.description, "");
        assert_eq!(result.primary_text, "Lightweight and tough");
    }

    #[test]
    fn only_one_description_is_taken() {
        let result = classify(&["acme.io", "Trail Runner Pro", "First desc", "Second desc"]);
        assert_eq!(result.description, "First desc");
        assert_eq!(result.primary_text, "Second desc");
    }

    #[test]
    fn headline_length_bounds() {
        assert_eq!(classify(&["Ten chars!"]).headline, "");
        assert_eq!(classify(&["Eleven char"]).headline, "Eleven char");
        let long = "x".repeat(99);
        assert_eq!(classify(&[long.as_str()]).headline, long);
        let too_long = "x".repeat(100);
        assert_eq!(classify(&[too_long.as_str()]).headline, "");
    }

    #[test]
    fn sentences_and_spaced_text_are_not_headlines() {
        assert_eq!(classify(&["Buy one. Get one."]).headline, "");
        assert_eq!(classify(&["Wide   spaced words"]).headline, "");
    }

    #[test]
    fn chrome_tokens_are_skipped() {
        let result = classify(&["Like", "3 comments", "Ad Library", "Real copy here."]);
        assert_eq!(result.primary_text, "Real copy here.");
    }

    #[test]
    fn blank_segments_become_single_paragraph_breaks() {
        let result = classify(&["First paragraph.", "", "", "", "Second paragraph."]);
        assert_eq!(result.primary_text, "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn only_first_cta_is_kept() {
        let result = classify(&["Shop Now", "Learn More"]);
        assert_eq!(result.cta_label, "Shop Now");
        assert_eq!(result.primary_text, "Learn More");
    }

    #[test]
    fn fallback_applies_only_when_primary_is_empty() {
        let result = classify(&["acme.io"]).with_fallback("acme.io", "Sponsored\nacme.io");
        assert_eq!(result.primary_text, "acme.io");
        assert_eq!(result.domain, "acme.io");

        let kept = classify(&["Copy stays."]).with_fallback("cleaned", "source");
        assert_eq!(kept.primary_text, "Copy stays.");

        let source_only = classify(&[]).with_fallback(" \n ", "Sponsored\n12 likes ");
        assert_eq!(source_only.primary_text, "Sponsored\n12 likes");

        let empty = classify(&[]).with_fallback("", "   ");
        assert_eq!(empty.primary_text, "");
    }

    #[test]
    fn tidy_paragraphs_trims_and_collapses() {
        assert_eq!(tidy_paragraphs("a  \n\n\n\nb \n"), "a\n\nb");
        assert_eq!(tidy_paragraphs(""), "");
    }
}
