//! Candidate assembly for one dimension pair.
//!
//! Builds the original, whole, decimal, golden and nearby families, projects
//! each onto the target width, and measures how far its height lands from the
//! original proportions.
//!
//! # Example
//!
//! ```
//! use aspratio::{CatalogConfig, RatioKind, compute_catalog};
//!
//! let config = CatalogConfig::default().target_width(1080.0).near_count(9);
//! let records = compute_catalog(16.0, 9.0, &config).unwrap();
//!
//! assert_eq!(records[0].kind, RatioKind::Original);
//! assert_eq!(records[0].height, 607.5);
//!
//! let near = records
//!     .iter()
//!     .find(|r| r.kind == RatioKind::Nearby && r.ratio_x == 17.0 && r.ratio_y == 10.0)
//!     .unwrap();
//! assert_eq!(near.difference_y, 28.0);
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::error::RatioError;
use crate::nearby::{
    DEFAULT_MAX_VARIANCE_RATIO, DEFAULT_NEAR_COUNT, DEFAULT_NEAR_MARGIN, NearbySearch,
};
use crate::projection::{GOLDEN_RATIO, height_variance, project_height, project_ratio, round_to};
use crate::rank::{RatioRecord, rank};
use crate::ratio::{Ratio, is_positive, whole_ratio};

/// Decimal digits kept by the decimal and golden candidates.
pub const DEFAULT_PRECISION: u32 = 3;

/// Which family a candidate belongs to.
///
/// Declaration order is assembly order, which breaks ranking ties.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum RatioKind {
    /// The input dimensions, unreduced.
    Original,
    /// The input dimensions in lowest terms.
    Whole,
    /// `width / height` rounded to the configured precision, over 1.
    Decimal,
    /// The golden ratio rounded to the configured precision, over 1.
    Golden,
    /// A low-integer ratio found near the input dimensions.
    Nearby,
}

impl RatioKind {
    /// Lowercase family name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Whole => "whole",
            Self::Decimal => "decimal",
            Self::Golden => "golden",
            Self::Nearby => "nearby",
        }
    }
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tuning for one catalog query.
///
/// A plain value: every setter returns an updated copy, so a config can be
/// shared between threads and reused across queries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CatalogConfig {
    /// Width every candidate is projected onto. `None` = the source width.
    pub target_width: Option<f64>,
    /// Decimal digits for the decimal and golden candidates.
    pub precision: u32,
    /// Maximum nearby candidates.
    pub near_count: usize,
    /// Nearby search window as a fraction of each dimension.
    pub near_margin: f64,
    /// Largest `|variance ratio|` accepted for nearby candidates.
    pub max_variance_ratio: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            target_width: None,
            precision: DEFAULT_PRECISION,
            near_count: DEFAULT_NEAR_COUNT,
            near_margin: DEFAULT_NEAR_MARGIN,
            max_variance_ratio: DEFAULT_MAX_VARIANCE_RATIO,
        }
    }
}

impl CatalogConfig {
    /// Project candidates onto `width` instead of the source width.
    pub fn target_width(mut self, width: f64) -> Self {
        self.target_width = Some(width);
        self
    }

    /// Decimal digits for the decimal and golden candidates.
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Maximum nearby candidates.
    pub fn near_count(mut self, count: usize) -> Self {
        self.near_count = count;
        self
    }

    /// Nearby search window as a fraction of each dimension.
    ///
    /// The search visits `(2·round(width·margin)+1)·(2·round(height·margin)+1)`
    /// pairs, so large margins on large dimensions get slow; searches past
    /// [`LARGE_WINDOW_PAIRS`](crate::nearby::LARGE_WINDOW_PAIRS) log a warning.
    pub fn near_margin(mut self, margin: f64) -> Self {
        self.near_margin = margin;
        self
    }

    /// Largest `|variance ratio|` accepted for nearby candidates.
    pub fn max_variance_ratio(mut self, ratio: f64) -> Self {
        self.max_variance_ratio = ratio;
        self
    }

    /// Target width for a source of the given width.
    pub fn resolved_target_width(&self, source_width: f64) -> f64 {
        self.target_width.unwrap_or(source_width)
    }
}

/// Copy of `config` with a new target width. `config` is left untouched.
pub fn set_target_width(config: &CatalogConfig, width: f64) -> CatalogConfig {
    config.target_width(width)
}

/// One candidate ratio projected onto the target width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RatioCandidate {
    pub kind: RatioKind,
    pub ratio: Ratio,
    /// Always the target width.
    pub projected_width: f64,
    /// Height implied by `ratio` at the target width.
    pub projected_height: f64,
    /// Whole-pixel difference from the original projected height.
    pub variance_y: f64,
    /// `variance_y` over the original projected height.
    pub variance_y_ratio: f64,
}

impl RatioCandidate {
    fn project(
        kind: RatioKind,
        ratio: Ratio,
        target_width: f64,
        original_height: f64,
    ) -> Result<Self, RatioError> {
        let projected_height = project_ratio(ratio, target_width)?;
        let variance_y = height_variance(projected_height, original_height);
        Ok(Self {
            kind,
            ratio,
            projected_width: target_width,
            projected_height,
            variance_y,
            variance_y_ratio: variance_y / original_height,
        })
    }
}

/// Height of the source proportions at `target_width`.
///
/// Exactly `height` when the target width is the source width.
pub fn original_projected_height(
    width: f64,
    height: f64,
    target_width: f64,
) -> Result<f64, RatioError> {
    if target_width == width {
        return Ok(height);
    }
    project_height(width, height, target_width)
}

/// Build every candidate family in assembly order, unranked.
pub fn assemble(
    width: f64,
    height: f64,
    config: &CatalogConfig,
) -> Result<Vec<RatioCandidate>, RatioError> {
    if !is_positive(width) || !is_positive(height) {
        return Err(RatioError::InvalidDimensions);
    }
    let config = *config;
    let target_width = config.resolved_target_width(width);
    if !is_positive(target_width) {
        return Err(RatioError::InvalidWidth);
    }
    let original_height = original_projected_height(width, height, target_width)?;

    let whole = whole_ratio(width, height)?;
    let nearby = NearbySearch::new(width, height)
        .count(config.near_count)
        .margin(config.near_margin)
        .max_variance_ratio(config.max_variance_ratio)
        .target(target_width, original_height)
        .search()?;

    let families = [
        (RatioKind::Original, Ratio::new(width, height)),
        (RatioKind::Whole, Ratio::from(whole)),
        (
            RatioKind::Decimal,
            Ratio::decimal(round_to(width / height, config.precision)),
        ),
        (
            RatioKind::Golden,
            Ratio::decimal(round_to(GOLDEN_RATIO, config.precision)),
        ),
    ];

    let mut candidates = Vec::with_capacity(families.len() + nearby.len());
    for (kind, ratio) in families {
        candidates.push(RatioCandidate::project(
            kind,
            ratio,
            target_width,
            original_height,
        )?);
    }
    for near in &nearby {
        candidates.push(RatioCandidate::project(
            RatioKind::Nearby,
            Ratio::from(near.fraction),
            target_width,
            original_height,
        )?);
    }

    log::debug!(
        "catalog {}x{} at width {}: {} candidates ({} nearby)",
        width,
        height,
        target_width,
        candidates.len(),
        nearby.len()
    );
    Ok(candidates)
}

/// Assemble and rank the full catalog for `width`×`height`.
///
/// Records are ordered by ascending `|difference_y_ratio|`; ties keep
/// assembly order (original, whole, decimal, golden, then nearby).
pub fn compute_catalog(
    width: f64,
    height: f64,
    config: &CatalogConfig,
) -> Result<Vec<RatioRecord>, RatioError> {
    Ok(rank(assemble(width, height, config)?))
}
