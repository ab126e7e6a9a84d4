//! Height projection and the rounding policy shared by every candidate.
//!
//! Rounding is half-away-from-zero (`f64::round`) throughout.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::RatioError;
use crate::ratio::{Ratio, is_positive};

/// The golden ratio, `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Digits beyond this are already below `f64` resolution for typical ratios.
pub const MAX_PRECISION: u32 = 15;

/// Height implied by `ratio_x:ratio_y` at `target_width`.
///
/// ```
/// use aspratio::projection::project_height;
///
/// assert_eq!(project_height(16.0, 9.0, 1080.0).unwrap(), 607.5);
/// ```
pub fn project_height(ratio_x: f64, ratio_y: f64, target_width: f64) -> Result<f64, RatioError> {
    if !is_positive(ratio_x) || !is_positive(ratio_y) {
        return Err(RatioError::InvalidRatio);
    }
    if !is_positive(target_width) {
        return Err(RatioError::InvalidWidth);
    }
    Ok(target_width * (ratio_y / ratio_x))
}

/// [`project_height`] for a [`Ratio`].
pub fn project_ratio(ratio: Ratio, target_width: f64) -> Result<f64, RatioError> {
    project_height(ratio.x, ratio.y, target_width)
}

/// Round to `precision` decimal digits.
///
/// Precision is capped at [`MAX_PRECISION`].
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

/// Whole-pixel difference between `height` and `reference`.
///
/// Never returns `-0.0`.
pub fn height_variance(height: f64, reference: f64) -> f64 {
    let v = (height - reference).round();
    if v == 0.0 { 0.0 } else { v }
}

/// [`height_variance`] relative to `reference`.
pub fn variance_ratio(height: f64, reference: f64) -> f64 {
    height_variance(height, reference) / reference
}
