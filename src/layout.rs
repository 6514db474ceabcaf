//! Geometry-aware text ordering.
//!
//! When the scraping layer can report on-screen boxes for text nodes, the
//! card text is rebuilt in visual order instead of DOM order, and the copy
//! rendered above the primary media is separated from the link card below
//! it by a paragraph break. The result feeds the same text pipeline as plain
//! scraped text.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// An axis-aligned box in CSS pixels, origin top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Shortest distance between the edges of two boxes; zero when they touch
    /// or overlap.
    #[must_use]
    pub fn gap_to(&self, other: &Rect) -> f64 {
        let dx = (other.x - self.right()).max(self.x - other.right()).max(0.0);
        let dy = (other.y - self.bottom()).max(self.y - other.bottom()).max(0.0);
        dx.hypot(dy)
    }
}

/// A scraped text node with its optional on-screen box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBlock {
    pub text: String,
    pub bounds: Option<Rect>,
}

impl TextBlock {
    #[must_use]
    pub fn new(text: impl Into<String>, bounds: Option<Rect>) -> Self {
        Self {
            text: text.into(),
            bounds,
        }
    }
}

/// Rebuild card text in reading order.
///
/// Positioned blocks are ordered top-to-bottom, then left-to-right. Blocks
/// without bounds follow in their original order. With `media` known, blocks
/// whose vertical center lies above the media center come first, then a
/// blank line, then the rest.
#[must_use]
pub fn visual_text(blocks: &[TextBlock], media: Option<&Rect>) -> String {
    let mut positioned: Vec<(&TextBlock, Rect)> = Vec::new();
    let mut floating: Vec<&TextBlock> = Vec::new();

    for block in blocks {
        if block.text.trim().is_empty() {
            continue;
        }
        match block.bounds {
            Some(rect) if rect.y.is_finite() && rect.x.is_finite() => {
                positioned.push((block, rect));
            }
            _ => floating.push(block),
        }
    }

    // sort_by is stable, so equal boxes keep document order
    positioned.sort_by(|(_, a), (_, b)| reading_order(a, b));

    let (above, below): (Vec<_>, Vec<_>) = match media {
        Some(media) => positioned
            .into_iter()
            .partition(|(_, rect)| rect.center_y() < media.center_y()),
        None => (positioned, Vec::new()),
    };

    let mut lines: Vec<&str> = above.iter().map(|(block, _)| block.text.as_str()).collect();
    if !lines.is_empty() && !below.is_empty() {
        lines.push("");
    }
    lines.extend(below.iter().map(|(block, _)| block.text.as_str()));
    lines.extend(floating.iter().map(|block| block.text.as_str()));

    lines.join("\n")
}

fn reading_order(a: &Rect, b: &Rect) -> Ordering {
    a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x))
}
