//! Error type shared by every ratio computation.

use core::fmt;

/// Ratio computation error.
///
/// Every failure aborts the current query; no partial catalog is produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RatioError {
    /// Width or height is zero, negative, or not finite.
    InvalidDimensions,
    /// A ratio term handed to the projector is zero, negative, or not finite.
    InvalidRatio,
    /// Target width is zero, negative, or not finite.
    InvalidWidth,
    /// Nearby search margin is negative or not finite.
    InvalidMargin,
    /// No power-of-ten scaling turned the pair into integers.
    PrecisionExceeded,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidDimensions => "width and height must be positive",
            Self::InvalidRatio => "ratio terms must be positive",
            Self::InvalidWidth => "target width must be positive",
            Self::InvalidMargin => "near margin must be a non-negative fraction",
            Self::PrecisionExceeded => "dimensions cannot be scaled to whole numbers",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for RatioError {}
