//! Dimension token parsing: `WIDTHxHEIGHT` or `ASPECT:RATIO`.
//!
//! ```
//! use aspratio::input::{Dimensions, parse_dimensions};
//!
//! assert_eq!(parse_dimensions("768x634"), Ok(Dimensions::new(768.0, 634.0)));
//! assert_eq!(parse_dimensions("4.63:1"), Ok(Dimensions::new(4.63, 1.0)));
//! ```

use core::fmt;

use crate::ratio::is_positive;

/// Message shown when a dimension token cannot be understood.
pub const USAGE: &str =
    "Argument must be width height in one of these formats: \"WIDTHxHEIGHT\" or \"ASPECT:RATIO\"";

/// A parsed width/height pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Dimension token error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputError {
    /// No token given.
    Empty,
    /// Token is not `WIDTHxHEIGHT` or `ASPECT:RATIO`.
    Malformed,
    /// A term is zero, negative, or not finite.
    NonPositive,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty | Self::Malformed => f.write_str(USAGE),
            Self::NonPositive => f.write_str("width and height must be positive numbers"),
        }
    }
}

impl core::error::Error for InputError {}

/// Parse `WIDTHxHEIGHT` (`x` or `X`) or `ASPECT:RATIO`.
///
/// Surrounding whitespace is ignored. Both terms must be positive and finite;
/// fractional terms are allowed.
pub fn parse_dimensions(token: &str) -> Result<Dimensions, InputError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(InputError::Empty);
    }
    let (w, h) = token
        .split_once(':')
        .or_else(|| token.split_once(['x', 'X']))
        .ok_or(InputError::Malformed)?;
    Ok(Dimensions {
        width: parse_term(w)?,
        height: parse_term(h)?,
    })
}

fn parse_term(s: &str) -> Result<f64, InputError> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::Malformed)?;
    if !is_positive(v) {
        return Err(InputError::NonPositive);
    }
    Ok(v)
}
