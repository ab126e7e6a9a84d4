//! Final ordering and labeling of catalog candidates.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::catalog::{RatioCandidate, RatioKind};

/// Significant digits printed by [`format_percent`].
pub const PERCENT_SIGNIFICANT_DIGITS: usize = 12;

/// One ranked catalog entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RatioRecord {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: RatioKind,
    pub ratio_x: f64,
    pub ratio_y: f64,
    /// Target width.
    pub width: f64,
    /// Height implied by the ratio at the target width.
    pub height: f64,
    /// Whole-pixel height difference from the original proportions.
    pub difference_y: f64,
    /// `difference_y` over the original projected height. Ranking key.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub difference_y_ratio: f64,
    /// `difference_y_ratio` as a percentage string, e.g. `"-5.26748971193%"`.
    pub difference_y_percent: String,
}

impl From<RatioCandidate> for RatioRecord {
    fn from(c: RatioCandidate) -> Self {
        Self {
            kind: c.kind,
            ratio_x: c.ratio.x,
            ratio_y: c.ratio.y,
            width: c.projected_width,
            height: c.projected_height,
            difference_y: c.variance_y,
            difference_y_ratio: c.variance_y_ratio,
            difference_y_percent: format_percent(c.variance_y_ratio),
        }
    }
}

/// Order candidates by ascending `|variance_y_ratio|` and label them.
///
/// The sort is stable: equal variances keep their assembly order.
pub fn rank(mut candidates: Vec<RatioCandidate>) -> Vec<RatioRecord> {
    candidates.sort_by(|a, b| a.variance_y_ratio.abs().total_cmp(&b.variance_y_ratio.abs()));
    candidates.into_iter().map(RatioRecord::from).collect()
}

/// Format a ratio as a percentage with 12 significant digits.
///
/// Trailing zeros are dropped and zero prints as `0%`.
///
/// ```
/// use aspratio::rank::format_percent;
///
/// assert_eq!(format_percent(0.0), "0%");
/// assert_eq!(format_percent(1.0 / 634.0), "0.157728706625%");
/// assert_eq!(format_percent(-32.0 / 607.5), "-5.26748971193%");
/// ```
pub fn format_percent(ratio: f64) -> String {
    let percent = ratio * 100.0;
    if percent == 0.0 {
        return String::from("0%");
    }
    if !percent.is_finite() {
        return format!("{percent}%");
    }

    let exponent = decimal_exponent(percent);
    let decimals = (PERCENT_SIGNIFICANT_DIGITS as i32 - 1 - exponent).max(0) as usize;
    let mut s = format!("{percent:.decimals$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s.push('%');
    s
}

/// Power of ten of the leading significant digit, after rounding to
/// [`PERCENT_SIGNIFICANT_DIGITS`] (so `9.9999999999996` counts as `1e1`).
fn decimal_exponent(v: f64) -> i32 {
    let sci = format!("{:.*e}", PERCENT_SIGNIFICANT_DIGITS - 1, v);
    sci.rsplit_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0)
}
