// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recipe screen.
//!
//! A [`Recipe`] is turned into an immutable screen tree by [`recipe_screen`],
//! which [`layout()`] then resolves into a flat [`DisplayList`] for a given
//! screen size. The title is an auto-fit label: it is drawn at the largest size
//! in [`ScreenConfig::title_sizes`] that keeps it within three lines over the
//! hero image.
//!
//! ## Example
//!
//! ```
//! use autofit::HeuristicMeasurer;
//! use peniko::kurbo::Size;
//! use recipe::{layout, recipe_screen, Recipe, ScreenConfig};
//!
//! let screen = recipe_screen(&Recipe::sample(), &ScreenConfig::default());
//! let list = layout(&screen, Size::new(411.0, 891.0), &mut HeuristicMeasurer::default());
//! let (_, title) = list.find_text("Cookies").unwrap();
//! assert_eq!(title.font_size, 40.0);
//! ```
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

mod display;
mod layout;
mod model;
mod screen;
mod source;
pub mod tree;

pub use display::{DisplayList, DrawItem};
pub use layout::layout;
pub use model::{CookingTime, Ingredient, Recipe, ReviewSummary};
pub use screen::{recipe_screen, title_predicate, ScreenConfig, TITLE_FONT_SIZES};
pub use source::{JsonRecipe, LoadRecipeError, LoadRecipeErrorKind, RecipeSource, StaticRecipe};
pub use tree::{IconKind, Node};
