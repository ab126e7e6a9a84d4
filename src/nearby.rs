//! Nearby low-integer ratios around a dimension pair.
//!
//! Walks every width/height pair inside a margin window around the source,
//! reduces each to lowest terms, and keeps the ones whose projected height
//! stays within a variance tolerance of the target height.
//!
//! ```
//! use aspratio::nearby::NearbySearch;
//! use aspratio::ratio::Fraction;
//!
//! let found = NearbySearch::new(16.0, 9.0)
//!     .count(9)
//!     .target(1080.0, 607.5)
//!     .search()
//!     .unwrap();
//!
//! assert_eq!(found[0].fraction, Fraction::new(2, 1));
//! assert!(found.iter().any(|n| n.fraction == Fraction::new(17, 10)));
//! ```

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::RatioError;
use crate::projection::{project_height, variance_ratio};
use crate::ratio::{Fraction, is_positive, whole_ratio};

/// Window pair count above which a search logs a warning. The search itself
/// is not capped: cost grows with the square of the margin.
pub const LARGE_WINDOW_PAIRS: u64 = 1_000_000;

/// Fraction of each dimension searched on either side of it.
pub const DEFAULT_NEAR_MARGIN: f64 = 0.06;

/// Maximum nearby ratios returned.
pub const DEFAULT_NEAR_COUNT: usize = 10;

/// Largest accepted `|variance ratio|` for a nearby candidate.
pub const DEFAULT_MAX_VARIANCE_RATIO: f64 = 0.2;

/// A nearby ratio and its height variance relative to the target height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearbyRatio {
    /// Candidate ratio in lowest terms.
    pub fraction: Fraction,
    /// Rounded height difference at the target width, over the target height.
    pub variance_ratio: f64,
}

/// Search parameters for nearby ratios.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearbySearch {
    pub width: f64,
    pub height: f64,
    pub count: usize,
    pub margin: f64,
    pub max_variance_ratio: f64,
    pub target_width: f64,
    pub target_height: f64,
}

impl NearbySearch {
    /// Search around `width`×`height` with default tuning, scored at the
    /// source dimensions themselves.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            count: DEFAULT_NEAR_COUNT,
            margin: DEFAULT_NEAR_MARGIN,
            max_variance_ratio: DEFAULT_MAX_VARIANCE_RATIO,
            target_width: width,
            target_height: height,
        }
    }

    /// Maximum number of ratios to return.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Search window as a fraction of each dimension.
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Largest accepted `|variance ratio|`.
    pub fn max_variance_ratio(mut self, ratio: f64) -> Self {
        self.max_variance_ratio = ratio;
        self
    }

    /// Dimensions candidates are scored against.
    pub fn target(mut self, width: f64, height: f64) -> Self {
        self.target_width = width;
        self.target_height = height;
        self
    }

    /// Number of width/height pairs the window spans, before skipping
    /// non-positive terms.
    pub fn window_pairs(&self) -> u64 {
        let span = |dimension: f64| {
            (window(dimension, self.margin) as u64)
                .saturating_mul(2)
                .saturating_add(1)
        };
        span(self.width).saturating_mul(span(self.height))
    }

    /// Run the search.
    ///
    /// Results are distinct, ordered by ascending numerator and then by
    /// ascending `|variance_ratio|`, and hold at most `count` entries. When
    /// two window pairs reduce to the same fraction the first one visited
    /// (width outer, height inner, both ascending) is kept.
    pub fn search(&self) -> Result<Vec<NearbyRatio>, RatioError> {
        if !is_positive(self.width) || !is_positive(self.height) {
            return Err(RatioError::InvalidDimensions);
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(RatioError::InvalidMargin);
        }
        if !is_positive(self.target_width) {
            return Err(RatioError::InvalidWidth);
        }
        if !is_positive(self.target_height) {
            return Err(RatioError::InvalidDimensions);
        }

        let width_variant = window(self.width, self.margin);
        let height_variant = window(self.height, self.margin);
        let pairs = self.window_pairs();
        if pairs > LARGE_WINDOW_PAIRS {
            log::warn!(
                "nearby search {}x{} at margin {} spans {} pairs",
                self.width,
                self.height,
                self.margin,
                pairs
            );
        }

        let mut seen = BTreeSet::new();
        let mut accepted = Vec::new();
        let mut evaluated = 0usize;

        for dx in -width_variant..=width_variant {
            let cw = self.width + dx as f64;
            if cw <= 0.0 {
                continue;
            }
            for dy in -height_variant..=height_variant {
                let ch = self.height + dy as f64;
                if ch <= 0.0 {
                    continue;
                }
                evaluated += 1;

                let fraction = whole_ratio(cw, ch)?;
                let implied = project_height(
                    fraction.numerator as f64,
                    fraction.denominator as f64,
                    self.target_width,
                )?;
                let variance_ratio = variance_ratio(implied, self.target_height);

                let within = variance_ratio.abs() <= self.max_variance_ratio;
                if !within {
                    log::trace!("nearby {fraction} rejected: variance ratio {variance_ratio}");
                    continue;
                }
                if !seen.insert(fraction) {
                    log::trace!("nearby {fraction} already found");
                    continue;
                }
                accepted.push(NearbyRatio {
                    fraction,
                    variance_ratio,
                });
            }
        }

        let distinct = accepted.len();
        accepted.sort_by(|a, b| {
            a.fraction
                .numerator
                .cmp(&b.fraction.numerator)
                .then_with(|| a.variance_ratio.abs().total_cmp(&b.variance_ratio.abs()))
        });
        accepted.truncate(self.count);

        log::debug!(
            "nearby search {}x{} (±{}, ±{}): evaluated {}, accepted {}, returning {}",
            self.width,
            self.height,
            width_variant,
            height_variant,
            evaluated,
            distinct,
            accepted.len()
        );
        Ok(accepted)
    }
}

/// Half-width of the search window for one dimension, at least 1.
fn window(dimension: f64, margin: f64) -> i64 {
    (dimension * margin).round().max(1.0) as i64
}
