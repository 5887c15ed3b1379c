// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `autofit` and `recipe`.
//!
//! - The `util` module holds the measurer and helpers shared between topics.
//! - Tests are grouped by topic: fitting, the cached label, the recipe screen
//!   and recipe sources. Put the topic at the start of a test name, e.g.
//!   `screen_cook_button_spans_bottom` rather than `cook_button_on_screen`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::float_cmp, reason = "fitted sizes are exact lattice values")]

mod fit;
mod screen;
mod util;
