//! Ratio value types and exact fraction reduction.
//!
//! Dimensions arrive as `f64` because `ASPECT:RATIO` input such as `4.63:1`
//! is legal. Reduction first scales the pair by powers of ten until both
//! terms are whole, then divides out the greatest common divisor.
//!
//! ```
//! use aspratio::ratio::{Fraction, whole_ratio};
//!
//! assert_eq!(whole_ratio(768.0, 634.0).unwrap(), Fraction::new(384, 317));
//! assert_eq!(whole_ratio(4.63, 1.0).unwrap(), Fraction::new(463, 100));
//! ```

use core::fmt;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::RatioError;

/// Maximum number of ×10 scalings tried by [`ensure_integer_pair`].
pub const MAX_SCALE_STEPS: u32 = 15;

/// Distance from the nearest integer still treated as integral, in units of
/// `f64::EPSILON` relative to the value.
const INTEGRAL_ULPS: f64 = 4.0;

/// Scaled terms above this magnitude are no longer trusted to be exact.
const MAX_SCALED_MAGNITUDE: f64 = 1e12;

/// Largest whole term accepted unscaled: every integer up to 2^53 is exact.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Ratio as a pair of positive terms, `x:y`.
///
/// Whole and nearby ratios carry integer terms; decimal and golden ratios
/// carry a rounded decimal over `1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ratio {
    /// Width term.
    pub x: f64,
    /// Height term. Always > 0 for ratios built by this crate.
    pub y: f64,
}

impl Ratio {
    /// Create a ratio from raw terms.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A decimal ratio `value:1`.
    pub const fn decimal(value: f64) -> Self {
        Self { x: value, y: 1.0 }
    }

    /// Width divided by height.
    pub fn value(&self) -> f64 {
        self.x / self.y
    }
}

impl From<Fraction> for Ratio {
    fn from(f: Fraction) -> Self {
        Self {
            x: f.numerator as f64,
            y: f.denominator as f64,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// Integer ratio in lowest terms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fraction {
    pub numerator: u64,
    pub denominator: u64,
}

impl Fraction {
    /// Create a fraction without reducing it.
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

/// Scale a dimension pair by powers of ten until both terms are whole.
///
/// `(4.63, 1.0)` becomes `(463, 100)`. A pair that is already whole passes
/// through unchanged up to 2^53. Gives up with
/// [`RatioError::PrecisionExceeded`] after [`MAX_SCALE_STEPS`] scalings, or as
/// soon as a scaled term passes `1e12`.
pub fn ensure_integer_pair(width: f64, height: f64) -> Result<(u64, u64), RatioError> {
    if !is_positive(width) || !is_positive(height) {
        return Err(RatioError::InvalidDimensions);
    }

    // Powers of ten are exact in f64 up to 1e22, so each probe rounds once.
    let mut scale = 1.0;
    for step in 0..=MAX_SCALE_STEPS {
        let (w, h) = (width * scale, height * scale);
        let limit = if step == 0 {
            MAX_EXACT_INTEGER
        } else {
            MAX_SCALED_MAGNITUDE
        };
        if w > limit || h > limit {
            break;
        }
        if is_integral(w) && is_integral(h) {
            return Ok((w.round() as u64, h.round() as u64));
        }
        scale *= 10.0;
    }
    Err(RatioError::PrecisionExceeded)
}

/// Reduce an integer pair to lowest terms.
///
/// The result is clamped to `numerator <= width` and `denominator <= height`.
pub fn reduce_to_lowest_terms(width: u64, height: u64) -> Result<Fraction, RatioError> {
    if width == 0 || height == 0 {
        return Err(RatioError::InvalidDimensions);
    }
    let divisor = gcd(width, height);
    Ok(Fraction {
        numerator: (width / divisor).min(width),
        denominator: (height / divisor).min(height),
    })
}

/// Lowest-terms ratio of a possibly fractional dimension pair.
pub fn whole_ratio(width: f64, height: f64) -> Result<Fraction, RatioError> {
    let (w, h) = ensure_integer_pair(width, height)?;
    reduce_to_lowest_terms(w, h)
}

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

pub(crate) fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn is_integral(v: f64) -> bool {
    (v - v.round()).abs() <= INTEGRAL_ULPS * f64::EPSILON * v.abs().max(1.0)
}
