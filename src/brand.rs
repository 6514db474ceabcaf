//! Brand name and logo inference.
//!
//! Ad cards announce the advertiser in a header next to a "Sponsored" label,
//! with a small avatar beside it. The scraping layer reports the text nodes
//! around that label, the card's heading-like nodes and its small images;
//! this module picks the most plausible name and logo from them.

use serde::{Deserialize, Serialize};
use tracing::trace;
use url::Url;

use crate::layout::{Rect, TextBlock};
use crate::media::MediaCandidate;
use crate::options::Options;
use crate::patterns::{LOGO_ALT, POSSESSIVE_POST, SPONSORED_WORD, WHITESPACE_NORMALIZE};
use crate::result::BrandInfo;
use crate::url_utils::parse_url;

/// Brand evidence collected from one card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandSignals {
    /// Brand name already known to the caller, possibly empty.
    pub hint: String,

    /// Text nodes preceding or sibling to the "Sponsored" marker, nearest first.
    pub sponsored_neighbors: Vec<TextBlock>,

    /// Heading-like text nodes (strong, h3, h4, role=heading) in document order.
    pub headings: Vec<TextBlock>,

    /// Small images that may be the advertiser's avatar.
    pub logos: Vec<MediaCandidate>,
}

impl BrandSignals {
    /// Signals consisting of a caller-provided name only.
    #[must_use]
    pub fn from_hint(hint: impl Into<String>) -> Self {
        Self {
            hint: hint.into(),
            ..Self::default()
        }
    }
}

/// Clean a raw header string down to the advertiser name.
///
/// Cuts at the `•` separator and at the word "Sponsored", removes a trailing
/// "'s Post" and collapses whitespace. Returns an empty string when nothing
/// but the marker remains.
///
/// # Examples
/// ```
/// use creative_extract::brand::sanitize_brand_name;
///
/// assert_eq!(sanitize_brand_name("Acme Outdoors • Follow"), "Acme Outdoors");
/// assert_eq!(sanitize_brand_name("Acme Sponsored · 2h"), "Acme");
/// assert_eq!(sanitize_brand_name("Acme's Post"), "Acme");
/// assert_eq!(sanitize_brand_name("Sponsored"), "");
/// ```
#[must_use]
pub fn sanitize_brand_name(raw: &str) -> String {
    let name = raw.split('•').next().unwrap_or_default();
    let name = match SPONSORED_WORD.find(name) {
        Some(marker) => &name[..marker.start()],
        None => name,
    };
    let name = POSSESSIVE_POST.replace(name, "");
    let name = WHITESPACE_NORMALIZE.replace_all(name.trim(), " ");
    let name = name.trim_end_matches(['·', '|', '-', ':']).trim();

    if name.eq_ignore_ascii_case("sponsored") {
        String::new()
    } else {
        name.to_string()
    }
}

/// Infer the advertiser name and logo.
///
/// Name candidates are tried in order: text next to the "Sponsored" marker,
/// heading-like nodes, then the caller's hint. The logo search looks near the
/// chosen name element first and then anywhere in the card.
#[must_use]
pub fn identify_brand(signals: &BrandSignals, options: &Options) -> BrandInfo {
    let (name, anchor) = resolve_name(signals);
    let base = options.base_url.as_deref().and_then(parse_url);
    let logo_url = resolve_logo(&signals.logos, anchor.as_ref(), base.as_ref(), options);

    trace!(name = %name, has_logo = logo_url.is_some(), "identified brand");

    BrandInfo::new(name, logo_url)
}

fn resolve_name(signals: &BrandSignals) -> (String, Option<Rect>) {
    signals
        .sponsored_neighbors
        .iter()
        .chain(signals.headings.iter())
        .find_map(|block| {
            let name = sanitize_brand_name(&block.text);
            (!name.is_empty()).then_some((name, block.bounds))
        })
        .unwrap_or_else(|| (sanitize_brand_name(&signals.hint), None))
}

fn resolve_logo(
    logos: &[MediaCandidate],
    anchor: Option<&Rect>,
    base: Option<&Url>,
    options: &Options,
) -> Option<String> {
    let qualifying = |candidate: &&MediaCandidate| is_logo_like(candidate, options);

    if let Some(anchor) = anchor {
        let mut nearby: Vec<(f64, &MediaCandidate)> = logos
            .iter()
            .filter(qualifying)
            .filter_map(|c| c.bounds.map(|b| (anchor.gap_to(&b), c)))
            .filter(|(gap, _)| *gap <= options.logo_search_radius)
            .collect();
        nearby.sort_by(|a, b| a.0.total_cmp(&b.0));

        if let Some(url) = nearby.iter().find_map(|(_, c)| c.resolved_url(base)) {
            return Some(url);
        }
    }

    logos
        .iter()
        .filter(qualifying)
        .find_map(|c| c.resolved_url(base))
}

fn is_logo_like(candidate: &MediaCandidate, options: &Options) -> bool {
    let (width, height) = (candidate.width, candidate.height);
    if width == 0 || height == 0 {
        return false;
    }
    if width > options.logo_max_dimension || height > options.logo_max_dimension {
        return false;
    }
    if candidate.alt.as_deref().is_some_and(|alt| LOGO_ALT.is_match(alt)) {
        return true;
    }

    let shorter = f64::from(width.min(height));
    let approx_square = f64::from(width.abs_diff(height)) <= shorter * options.logo_square_tolerance;
    let side_range = options.logo_min_square_side..=options.logo_max_square_side;

    approx_square && side_range.contains(&width) && side_range.contains(&height)
}
