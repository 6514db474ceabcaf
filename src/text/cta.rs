//! Call-to-action vocabulary.

use std::collections::HashSet;

use regex::Regex;
use tracing::warn;

use crate::patterns::{cta_alternation, CTA_INLINE, CTA_LABELS, WHITESPACE_NORMALIZE};
use crate::text::segment::detection_key;

/// The set of button labels recognised as calls to action, plus the inline
/// pattern used to split them out of merged lines.
#[derive(Debug, Clone)]
pub struct CtaLexicon {
    labels: HashSet<String>,
    pattern: Regex,
}

impl CtaLexicon {
    /// Built-in labels extended with `extra`. Extra labels are compared the
    /// way segment keys are, so inner whitespace runs count as one space.
    #[must_use]
    pub fn new(extra: &[String]) -> Self {
        let extra: Vec<String> = extra
            .iter()
            .map(|label| WHITESPACE_NORMALIZE.replace_all(label.trim(), " ").into_owned())
            .filter(|label| !label.is_empty())
            .collect();

        let labels = CTA_LABELS
            .iter()
            .copied()
            .chain(extra.iter().map(String::as_str))
            .map(detection_key)
            .collect();

        if extra.is_empty() {
            return Self {
                labels,
                pattern: CTA_INLINE.clone(),
            };
        }

        let all_labels = CTA_LABELS.iter().copied().chain(extra.iter().map(String::as_str));
        let pattern = Regex::new(&cta_alternation(all_labels)).unwrap_or_else(|err| {
            warn!(error = %err, "custom CTA labels rejected; using built-in set");
            CTA_INLINE.clone()
        });

        Self { labels, pattern }
    }

    /// True if the lowercase key is exactly a known label.
    #[must_use]
    pub fn is_label(&self, key: &str) -> bool {
        self.labels.contains(key)
    }

    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl Default for CtaLexicon {
    fn default() -> Self {
        Self::new(&[])
    }
}
