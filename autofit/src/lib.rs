// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-fitting text.
//!
//! Given some text, the area it must be drawn into and a range of candidate
//! font sizes, this crate finds the largest size at which the laid out text
//! satisfies a caller supplied [`FitPredicate`].
//!
//! The search descends linearly from the largest candidate. Text layout is not
//! guaranteed to be monotonic in font size across fonts and scripts, so a
//! binary search could skip past the largest fitting size. When no candidate
//! fits, the range's minimum is used.
//!
//! Measuring is delegated to a [`TextMeasurer`]. The `parley` feature (on by
//! default) provides `ParleyMeasurer`, which shapes text with system fonts.
//! [`HeuristicMeasurer`] needs no fonts at all.
//!
//! ## Example
//!
//! ```
//! use autofit::{fit, predicate, Area, FontSizeRange, HeuristicMeasurer, TextStyle};
//!
//! let range = FontSizeRange::new(16.0, 40.0, 2.0).unwrap();
//! let mut measurer = HeuristicMeasurer::default();
//! let size = fit(
//!     &mut measurer,
//!     "Chocolate chip cookies",
//!     &TextStyle::default(),
//!     Area::new(200.0, 60.0),
//!     range,
//!     &predicate::overflow(),
//! );
//! assert!(size < 40.0);
//! ```
//!
//! ## Features
//!
//! - `parley` (enabled by default): `ParleyMeasurer`, a measurer backed by
//!   [Parley](https://docs.rs/parley).
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod ellipsis;
mod fit;
mod label;
mod measure;
#[cfg(feature = "parley")]
mod parley_measure;
pub mod predicate;
mod probe;
mod range;

pub use ellipsis::{ellipsize, ELLIPSIS};
pub use fit::{fit, fit_outcome, FitOutcome};
pub use label::AutoFitText;
pub use measure::{HeuristicMeasurer, TextMeasurer};
#[cfg(feature = "parley")]
pub use parley_measure::{probe_layout, ParleyMeasurer};
pub use predicate::FitPredicate;
pub use probe::{Area, LayoutProbe, TextOverflow, TextStyle};
pub use range::{Candidates, FontSizeRange, InvalidFontSizeRange, InvalidFontSizeRangeKind};

#[cfg(feature = "parley")]
pub use parley;
