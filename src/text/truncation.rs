//! Removal of truncated preview lines.
//!
//! Social feeds render a clipped "…" preview of the copy and, further down
//! the same card, the expanded text. Keeping both would duplicate the copy.

use crate::patterns::TRAILING_ELLIPSIS;
use crate::text::segment::{detection_key, Segment};

/// Drop segments that end in an ellipsis and are a prefix of a later
/// segment, as well as segments that are nothing but an ellipsis.
#[must_use]
pub fn collapse_truncated(segments: Vec<Segment>) -> Vec<Segment> {
    let keep: Vec<bool> = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| !is_truncated_preview(segment, &segments[index + 1..]))
        .collect();

    segments
        .into_iter()
        .zip(keep)
        .filter_map(|(segment, keep)| keep.then_some(segment))
        .collect()
}

fn is_truncated_preview(segment: &Segment, later: &[Segment]) -> bool {
    if segment.text().is_empty() || !TRAILING_ELLIPSIS.is_match(segment.text()) {
        return false;
    }

    let base = detection_key(&TRAILING_ELLIPSIS.replace(segment.text(), ""));
    if base.is_empty() {
        return true;
    }

    later
        .iter()
        .filter(|next| !next.key().is_empty())
        .any(|next| next.key().starts_with(&base))
}
