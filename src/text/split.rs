//! Splitting of visually merged lines.
//!
//! A single DOM line can run the advertiser name, the landing domain and the
//! button label together ("Acme acme.io Shop Now"). Splitting on domains and
//! then on CTA labels turns such a line into separately classifiable parts.

use regex::Regex;

use crate::patterns::DOMAIN_INLINE;

/// Split `segment` around every match of `pattern`, keeping the matches as
/// their own fragments. Whitespace-only fragments are discarded.
#[must_use]
pub fn split_by_pattern<'a>(segment: &'a str, pattern: &Regex) -> Vec<&'a str> {
    let mut fragments = Vec::new();
    let mut cursor = 0;

    for found in pattern.find_iter(segment) {
        fragments.push(&segment[cursor..found.start()]);
        fragments.push(found.as_str());
        cursor = found.end();
    }
    fragments.push(&segment[cursor..]);

    fragments.retain(|fragment| !fragment.trim().is_empty());
    fragments
}

/// Split one cleaned line on inline domains, then on CTA labels.
#[must_use]
pub fn split_line<'a>(line: &'a str, cta: &Regex) -> Vec<&'a str> {
    split_by_pattern(line, &DOMAIN_INLINE)
        .into_iter()
        .flat_map(|fragment| split_by_pattern(fragment, cta))
        .collect()
}
