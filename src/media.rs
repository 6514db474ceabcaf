//! Media candidate ranking.
//!
//! Ad cards contain the creative itself alongside avatars, reaction icons
//! and tracking pixels. Ranking keeps the candidates big enough to be the
//! creative, orders them by area and removes duplicates that only differ in
//! how the scraper found them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::layout::Rect;
use crate::options::Options;
use crate::url_utils::{best_srcset_candidate, resolve_media_url};

/// Kind of media element a candidate was scraped from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// One image or video element found in the card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaCandidate {
    /// Source as scraped; may be relative.
    pub source_url: String,

    /// Best-effort width in CSS pixels, `0` when unknown.
    pub width: u32,

    /// Best-effort height in CSS pixels, `0` when unknown.
    pub height: u32,

    pub kind: MediaKind,

    /// Responsive `srcset` declaration, if the element had one.
    pub srcset: Option<String>,

    /// Alt text, used for logo detection.
    pub alt: Option<String>,

    /// On-screen box, used for logo proximity and layout.
    pub bounds: Option<Rect>,
}

impl MediaCandidate {
    #[must_use]
    pub fn image(source_url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source_url: source_url.into(),
            width,
            height,
            kind: MediaKind::Image,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn video(source_url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source_url: source_url.into(),
            width,
            height,
            kind: MediaKind::Video,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_srcset(mut self, srcset: impl Into<String>) -> Self {
        self.srcset = Some(srcset.into());
        self
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Pixel area; zero when either dimension is unknown.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[must_use]
    pub fn has_dimensions(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether the candidate is large enough to be the creative rather than
    /// decoration.
    #[must_use]
    pub fn is_large_enough(&self, min_dimension: u32) -> bool {
        if !self.has_dimensions() {
            return false;
        }
        if self.width.max(self.height) >= min_dimension {
            return true;
        }
        self.area() >= u64::from(min_dimension) * u64::from(min_dimension)
    }

    /// Absolute URL of the best declared variant, or `None` when unusable.
    #[must_use]
    pub fn resolved_url(&self, base: Option<&Url>) -> Option<String> {
        self.srcset
            .as_deref()
            .and_then(best_srcset_candidate)
            .and_then(|variant| resolve_media_url(&variant, base))
            .or_else(|| resolve_media_url(&self.source_url, base))
    }
}

/// Raw size readings for one element, in the order scrapers can obtain them.
///
/// Each dimension falls back independently: rendered box first, then
/// intrinsic (natural/video) size, then client size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurements {
    pub rendered: (f64, f64),
    pub intrinsic: (u32, u32),
    pub client: (u32, u32),
}

impl Measurements {
    /// Resolve to `(width, height)`, `0` where nothing is known.
    #[must_use]
    pub fn resolve(&self) -> (u32, u32) {
        (
            first_known(self.rendered.0, self.intrinsic.0, self.client.0),
            first_known(self.rendered.1, self.intrinsic.1, self.client.1),
        )
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn first_known(rendered: f64, intrinsic: u32, client: u32) -> u32 {
    let rendered = if rendered.is_finite() && rendered > 0.0 {
        rendered.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    };
    [rendered, intrinsic, client]
        .into_iter()
        .find(|value| *value > 0)
        .unwrap_or(0)
}

/// Ranked media for one card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedMedia {
    pub images: Vec<String>,
    pub videos: Vec<String>,

    /// Width / height of the top video with known size, else the top image.
    pub aspect_ratio: Option<f64>,

    pub warnings: Vec<String>,
}

struct Usable<'a> {
    url: String,
    candidate: &'a MediaCandidate,
}

/// Rank image and video candidates separately.
#[must_use]
pub fn rank_media(candidates: &[MediaCandidate], options: &Options) -> RankedMedia {
    let mut warnings = Vec::new();

    let base = options.base_url.as_deref().and_then(|raw| {
        let parsed = crate::url_utils::parse_url(raw);
        if parsed.is_none() {
            warnings.push(format!("Ignoring unparseable base URL: {raw}"));
        }
        parsed
    });

    let videos = rank_kind(candidates, MediaKind::Video, base.as_ref(), options, &mut warnings);
    let images = rank_kind(candidates, MediaKind::Image, base.as_ref(), options, &mut warnings);

    let aspect_ratio = videos
        .iter()
        .chain(images.iter())
        .map(|usable| usable.candidate)
        .find(|candidate| candidate.has_dimensions())
        .map(|candidate| {
            let ratio = f64::from(candidate.width) / f64::from(candidate.height);
            (ratio * 10_000.0).round() / 10_000.0
        });

    let ranked = RankedMedia {
        images: dedup_urls(images),
        videos: dedup_urls(videos),
        aspect_ratio,
        warnings,
    };

    debug!(
        candidates = candidates.len(),
        images = ranked.images.len(),
        videos = ranked.videos.len(),
        "ranked media candidates"
    );

    ranked
}

fn rank_kind<'a>(
    candidates: &'a [MediaCandidate],
    kind: MediaKind,
    base: Option<&Url>,
    options: &Options,
    warnings: &mut Vec<String>,
) -> Vec<Usable<'a>> {
    let mut usable: Vec<Usable<'a>> = Vec::new();

    for candidate in candidates.iter().filter(|c| c.kind == kind) {
        match candidate.resolved_url(base) {
            Some(url) => usable.push(Usable { url, candidate }),
            None if candidate.source_url.trim().is_empty() => {}
            None => warnings.push(format!(
                "Skipped unusable {} source: {}",
                kind_label(kind),
                candidate.source_url.trim()
            )),
        }
    }

    let (mut large, rest): (Vec<_>, Vec<_>) = usable
        .into_iter()
        .partition(|u| u.candidate.is_large_enough(options.min_media_dimension));

    if large.is_empty() {
        large = rest;
    }

    // Stable sort: equal areas keep input order, unknown sizes sink to the end.
    large.sort_by(|a, b| b.candidate.area().cmp(&a.candidate.area()));
    large
}

fn dedup_urls(ranked: Vec<Usable<'_>>) -> Vec<String> {
    let mut seen = HashSet::new();
    ranked
        .into_iter()
        .filter_map(|usable| seen.insert(usable.url.clone()).then_some(usable.url))
        .collect()
}

fn kind_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "image",
        MediaKind::Video => "video",
    }
}
