//! Card text pipeline.
//!
//! Raw card text flows through four stages:
//!
//! 1. [`noise`] drops UI chrome and brand prefixes line by line
//! 2. [`split`] breaks merged lines apart on domains and CTA labels
//! 3. [`truncation`] removes "…" previews that are repeated in full later
//! 4. [`classify`] assigns each remaining segment to a creative field

pub mod classify;
pub mod cta;
pub mod noise;
pub mod segment;
pub mod split;
pub mod truncation;

pub use classify::{tidy_paragraphs, Classification, SegmentClassifier};
pub use cta::CtaLexicon;
pub use noise::{normalize_input, CleanLine, NoiseFilter};
pub use segment::Segment;

use crate::options::Options;
use crate::patterns::is_ad_copy_noise;

/// Turn normalized card text into classifiable segments.
///
/// `brand` is the name whose prefixes and echoes are removed; pass an empty
/// string when no brand is known.
#[must_use]
pub fn segment_text(text: &str, brand: &str, options: &Options, cta: &CtaLexicon) -> Vec<Segment> {
    let filter = NoiseFilter::new(brand);
    let mut segments = Vec::new();

    for line in filter.clean_lines(text) {
        let line = match line {
            CleanLine::Blank => {
                segments.push(Segment::blank());
                continue;
            }
            CleanLine::Text(line) => line,
        };

        for fragment in split::split_line(&line, cta.pattern()) {
            let segment = Segment::from_fragment(fragment);
            if segment.text().is_empty()
                || is_ad_copy_noise(segment.text())
                || filter.is_brand_echo(segment.text())
                || noise::is_contentless(segment.text())
            {
                continue;
            }
            segments.push(segment);
        }
    }

    if options.collapse_truncated_previews {
        truncation::collapse_truncated(segments)
    } else {
        segments
    }
}

/// Card text as it stands after cleaning: the raw form of every kept
/// segment, blank segments as paragraph breaks. Chrome the classifier skips
/// is left out here too.
#[must_use]
pub fn cleaned_text(segments: &[Segment]) -> String {
    let lines: Vec<&str> = segments
        .iter()
        .filter(|segment| segment.is_blank() || !classify::is_leftover_chrome(segment.key()))
        .map(Segment::raw)
        .collect();
    tidy_paragraphs(&lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(Segment::text).collect()
    }

    #[test]
    fn merged_line_is_split_without_brand() {
        let segments = segment_text(
            "Acme acme.io Shop Now",
            "",
            &Options::default(),
            &CtaLexicon::default(),
        );
        assert_eq!(texts(&segments), vec!["Acme", "acme.io", "Shop Now"]);
    }

    #[test]
    fn brand_prefix_and_echo_are_removed() {
        let segments = segment_text(
            "Big news\nOutdoor Co acme.io Shop Now\nacme.io Outdoor Co Learn More",
            "Outdoor Co",
            &Options::default(),
            &CtaLexicon::default(),
        );
        assert_eq!(
            texts(&segments),
            vec!["Big news", "acme.io", "Shop Now", "acme.io", "Learn More"]
        );
    }

    #[test]
    fn contentless_fragments_are_dropped() {
        let segments = segment_text(
            "Fresh copy · 12,345",
            "",
            &Options::default(),
            &CtaLexicon::default(),
        );
        assert_eq!(texts(&segments), vec!["Fresh copy · 12,345"]);

        let segments = segment_text(
            "·\n42\n0:03 / 0:30\nReal",
            "",
            &Options::default(),
            &CtaLexicon::default(),
        );
        assert_eq!(texts(&segments), vec!["Real"]);
    }

    #[test]
    fn blank_lines_survive_as_markers() {
        let segments = segment_text("One\n\nTwo", "", &Options::default(), &CtaLexicon::default());
        assert_eq!(segments.len(), 3);
        assert!(segments[1].is_blank());
    }

    #[test]
    fn cleaned_text_omits_noise_and_previews() {
        let segments = segment_text(
            "Sponsored\nGreat deal on shoes…\n\n\n12  likes\nGreat deal on shoes this weekend only\nacme.io",
            "",
            &Options::default(),
            &CtaLexicon::default(),
        );
        assert_eq!(
            cleaned_text(&segments),
            "Great deal on shoes this weekend only\nacme.io"
        );
    }

    #[test]
    fn truncation_can_be_disabled() {
        let text = "Great deal on shoes…\nGreat deal on shoes this weekend only";
        let lexicon = CtaLexicon::default();

        let collapsed = segment_text(text, "", &Options::default(), &lexicon);
        assert_eq!(collapsed.len(), 1);

        let options = Options {
            collapse_truncated_previews: false,
            ..Options::default()
        };
        assert_eq!(segment_text(text, "", &options, &lexicon).len(), 2);
    }
}
