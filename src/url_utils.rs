//! URL Utility Functions
//!
//! Validation and resolution of media source URLs, plus selection of the
//! richest variant from a responsive `srcset` declaration.

use url::Url;

/// Schemes that never point at a fetchable creative.
const INERT_SCHEMES: &[&str] = &["data:", "blob:", "javascript:", "about:"];

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Parse a URL string into a Url object.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    let (is_abs, parsed) = is_absolute_url(url_str);
    if is_abs {
        parsed
    } else {
        None
    }
}

/// Returns true for `data:`, `blob:` and similar non-fetchable sources.
#[must_use]
pub fn is_inert_source(url_str: &str) -> bool {
    let lower = url_str.trim_start().to_ascii_lowercase();
    INERT_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// Resolve a media source to an absolute http(s) URL.
///
/// # Arguments
/// * `url_str` - The source as scraped (absolute, relative or protocol-relative)
/// * `base` - Optional page URL for relative resolution
///
/// # Returns
/// * The serialized absolute URL, or `None` if the source is unusable
#[must_use]
pub fn resolve_media_url(url_str: &str, base: Option<&Url>) -> Option<String> {
    let url_str = url_str.trim();

    if url_str.is_empty() || is_inert_source(url_str) {
        return None;
    }

    if let Some(url) = parse_url(url_str) {
        return Some(url.to_string());
    }

    let resolved = base?.join(url_str).ok()?;
    if matches!(resolved.scheme(), "http" | "https") && resolved.host().is_some() {
        Some(resolved.to_string())
    } else {
        None
    }
}

/// Pick the highest-resolution source from a `srcset` attribute value.
///
/// Width descriptors (`800w`) are compared directly and density descriptors
/// (`2x`) are scaled by 1000 onto the same axis. Entries without a
/// descriptor count as `1x`. Ties keep declaration order.
///
/// # Examples
/// ```
/// use creative_extract::url_utils::best_srcset_candidate;
///
/// let srcset = "small.jpg 320w, large.jpg 1280w, medium.jpg 640w";
/// assert_eq!(best_srcset_candidate(srcset), Some("large.jpg".to_string()));
/// assert_eq!(best_srcset_candidate(""), None);
/// ```
#[must_use]
pub fn best_srcset_candidate(srcset: &str) -> Option<String> {
    let mut best: Option<(u64, &str)> = None;

    for part in srcset.split(',') {
        let mut bits = part.split_whitespace();
        let Some(candidate) = bits.next() else {
            continue;
        };
        let score = bits.next().map_or(1000, descriptor_score);

        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, url)| url.to_string())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn descriptor_score(descriptor: &str) -> u64 {
    let descriptor = descriptor.trim().to_ascii_lowercase();
    if let Some(width) = descriptor.strip_suffix('w') {
        return width.parse::<u64>().unwrap_or(0);
    }
    if let Some(density) = descriptor.strip_suffix('x') {
        return density
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite() && *d > 0.0)
            .map_or(0, |d| (d * 1000.0) as u64);
    }
    0
}
