//! Configuration options for creative extraction.
//!
//! The `Options` struct exposes the thresholds the heuristics were tuned
//! with. Defaults reproduce the observed behavior and should rarely need
//! changing.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration options for creative extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use creative_extract::Options;
///
/// let options = Options {
///     base_url: Some("https://www.facebook.com/".to_string()),
///     extra_cta_labels: vec!["Get Tickets".to_string()],
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Minimum side (or square-equivalent area) for a media candidate to be
    /// treated as creative rather than decoration.
    ///
    /// Default: `140`
    pub min_media_dimension: u32,

    /// Largest side an image may have to be considered a brand logo.
    ///
    /// Default: `160`
    pub logo_max_dimension: u32,

    /// Smallest side of an unlabelled, approximately square logo.
    ///
    /// Default: `20`
    pub logo_min_square_side: u32,

    /// Largest side of an unlabelled, approximately square logo.
    ///
    /// Default: `120`
    pub logo_max_square_side: u32,

    /// Allowed side difference, as a fraction of the shorter side, for an
    /// image to count as approximately square.
    ///
    /// Default: `0.4`
    pub logo_square_tolerance: f64,

    /// Distance in CSS pixels within which a logo counts as adjacent to the
    /// brand name element.
    ///
    /// Default: `200.0`
    pub logo_search_radius: f64,

    /// Shortest text (in characters) that may be classified as a headline.
    ///
    /// Default: `11`
    pub headline_min_chars: usize,

    /// Longest text (in characters) that may be classified as a headline.
    ///
    /// Default: `99`
    pub headline_max_chars: usize,

    /// Additional call-to-action labels recognised on top of the built-in set.
    ///
    /// Default: empty
    pub extra_cta_labels: Vec<String>,

    /// Page URL used to resolve relative media sources.
    ///
    /// Without it, relative sources are unusable and dropped.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Drop "See more…" preview lines that duplicate a fuller later line.
    ///
    /// Default: `true`
    pub collapse_truncated_previews: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_media_dimension: 140,
            logo_max_dimension: 160,
            logo_min_square_side: 20,
            logo_max_square_side: 120,
            logo_square_tolerance: 0.4,
            logo_search_radius: 200.0,
            headline_min_chars: 11,
            headline_max_chars: 99,
            extra_cta_labels: Vec::new(),
            base_url: None,
            collapse_truncated_previews: true,
        }
    }
}

impl Options {
    /// Checks that the thresholds describe non-empty ranges.
    ///
    /// Extraction never calls this; it tolerates any option values. Callers
    /// that load options from user input should validate them first.
    pub fn validate(&self) -> Result<()> {
        if self.headline_min_chars > self.headline_max_chars {
            return Err(Error::InvalidOptions(format!(
                "headline_min_chars ({}) exceeds headline_max_chars ({})",
                self.headline_min_chars, self.headline_max_chars
            )));
        }
        if self.logo_min_square_side > self.logo_max_square_side {
            return Err(Error::InvalidOptions(format!(
                "logo_min_square_side ({}) exceeds logo_max_square_side ({})",
                self.logo_min_square_side, self.logo_max_square_side
            )));
        }
        let negative = |value: f64| value.is_nan() || value < 0.0;
        if negative(self.logo_square_tolerance) || negative(self.logo_search_radius) {
            return Err(Error::InvalidOptions(
                "logo tolerances must be non-negative".to_string(),
            ));
        }
        if let Some(base) = &self.base_url {
            if crate::url_utils::parse_url(base).is_none() {
                return Err(Error::InvalidOptions(format!(
                    "base_url is not an absolute http(s) URL: {base}"
                )));
            }
        }
        Ok(())
    }
}
