//! Aspect ratio discovery for image crop and resize tooling.
//!
//! Given a width/height pair, builds a ranked catalog of "nice" ratios (the
//! exact reduced fraction, a rounded decimal, the golden ratio, and nearby
//! low-integer ratios) and projects each onto a target width, reporting the
//! implied height and how far it strays from the original proportions.
//!
//! Pure arithmetic: no I/O, `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`ratio`]: Ratio types, integer scaling, lowest-terms reduction
//! - [`projection`]: Height projection and rounding policy
//! - [`nearby`]: Nearby low-integer ratio search
//! - [`catalog`]: Candidate families, query configuration, catalog assembly
//! - [`rank`]: Ranking and output records
//! - [`input`]: `WIDTHxHEIGHT` / `ASPECT:RATIO` token parsing
//!
//! # Example
//!
//! ```
//! use aspratio::{CatalogConfig, RatioKind, compute_catalog};
//!
//! let records = compute_catalog(768.0, 634.0, &CatalogConfig::default()).unwrap();
//!
//! assert_eq!(records[1].kind, RatioKind::Whole);
//! assert_eq!((records[1].ratio_x, records[1].ratio_y), (384.0, 317.0));
//! assert_eq!(records[3].kind, RatioKind::Nearby);
//! assert_eq!((records[3].ratio_x, records[3].ratio_y), (6.0, 5.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod catalog;
pub mod error;
pub mod input;
pub mod nearby;
pub mod projection;
pub mod rank;
pub mod ratio;

pub use catalog::{
    CatalogConfig, RatioCandidate, RatioKind, assemble, compute_catalog, set_target_width,
};
pub use error::RatioError;
pub use input::{Dimensions, InputError, parse_dimensions};
pub use nearby::{NearbyRatio, NearbySearch};
pub use projection::{GOLDEN_RATIO, project_height};
pub use rank::{RatioRecord, format_percent, rank};
pub use ratio::{Fraction, Ratio, ensure_integer_pair, reduce_to_lowest_terms, whole_ratio};
