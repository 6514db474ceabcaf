//! Creative extraction pipeline.
//!
//! Resolves the brand first so its name can be stripped from the copy, then
//! runs the text pipeline and media ranking and merges everything into one
//! [`CapturedCreative`].

use tracing::debug;

use crate::brand::identify_brand;
use crate::input::CardInput;
use crate::layout::{visual_text, Rect};
use crate::media::{rank_media, MediaCandidate};
use crate::options::Options;
use crate::result::CapturedCreative;
use crate::text::{cleaned_text, normalize_input, segment_text, CtaLexicon, SegmentClassifier};

/// Main entry point for one card.
pub(crate) fn extract_card_content(input: &CardInput, options: &Options) -> CapturedCreative {
    let source = card_text(input, options);
    let text = normalize_input(&source);

    let brand = identify_brand(&input.resolved_signals(), options);
    let strip_name = if brand.is_unknown() {
        input.brand_hint.trim()
    } else {
        brand.name.as_str()
    };

    let lexicon = CtaLexicon::new(&options.extra_cta_labels);
    let segments = segment_text(&text, strip_name, options, &lexicon);
    let classification = SegmentClassifier::new(&lexicon, options)
        .classify(&segments)
        .with_fallback(&cleaned_text(&segments), &text);

    let media = rank_media(&input.media, options);

    debug!(
        segments = segments.len(),
        brand = %brand.name,
        domain = %classification.domain,
        cta = %classification.cta_label,
        "extracted creative"
    );

    CapturedCreative {
        primary_text: classification.primary_text,
        domain: classification.domain,
        headline: classification.headline,
        description: classification.description,
        cta_label: classification.cta_label,
        brand,
        ranked_images: media.images,
        ranked_videos: media.videos,
        aspect_ratio: media.aspect_ratio,
        warnings: media.warnings,
    }
}

/// Text source for the card: positioned blocks when the scraper supplied
/// them, else the raw text.
fn card_text(input: &CardInput, options: &Options) -> String {
    if input.text_blocks.is_empty() {
        return input.raw_text.clone();
    }
    visual_text(&input.text_blocks, creative_bounds(&input.media, options))
}

/// On-screen box of the largest creative-sized candidate.
fn creative_bounds<'a>(media: &'a [MediaCandidate], options: &Options) -> Option<&'a Rect> {
    media
        .iter()
        .filter(|candidate| candidate.is_large_enough(options.min_media_dimension))
        .filter_map(|candidate| candidate.bounds.as_ref().map(|bounds| (candidate.area(), bounds)))
        .max_by_key(|(area, _)| *area)
        .map(|(_, bounds)| bounds)
}
