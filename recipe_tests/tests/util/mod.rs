// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use autofit::{Area, HeuristicMeasurer, LayoutProbe, TextMeasurer, TextStyle};
use peniko::kurbo::{Rect, Size};
use recipe::{layout, recipe_screen, DisplayList, DrawItem, IconKind, Recipe, ScreenConfig};

/// The screen size of a typical phone, in logical pixels.
pub(crate) const PHONE: Size = Size::new(411.0, 891.0);

/// A title long enough to wrap at every size in the title range.
pub(crate) const LONG_TITLE: &str = "Double chocolate chip cookies with sea salt and toasted pecans";

/// Wraps [`HeuristicMeasurer`] and remembers each size it measured.
#[derive(Default)]
pub(crate) struct TestEnv {
    measurer: HeuristicMeasurer,
    pub(crate) measured: Vec<f32>,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Lay out the recipe screen for `recipe` at `size`.
    pub(crate) fn screen(&mut self, recipe: &Recipe, size: Size) -> DisplayList {
        let screen = recipe_screen(recipe, &ScreenConfig::default());
        layout(&screen, size, self)
    }
}

impl TextMeasurer for TestEnv {
    fn measure(&mut self, text: &str, style: &TextStyle, area: Area) -> LayoutProbe {
        self.measured.push(style.font_size);
        self.measurer.measure(text, style, area)
    }
}

/// The rectangle of the only image on the screen.
pub(crate) fn image_rect(list: &DisplayList) -> Rect {
    let mut images = list.items().iter().filter_map(|item| match item {
        DrawItem::Image { rect, .. } => Some(*rect),
        _ => None,
    });
    let rect = images.next().expect("screen has an image");
    assert!(images.next().is_none(), "screen has more than one image");
    rect
}

/// The rectangle of the first icon of `kind`.
pub(crate) fn icon_rect(list: &DisplayList, kind: IconKind) -> Rect {
    list.items()
        .iter()
        .find_map(|item| match item {
            DrawItem::Icon { rect, icon, .. } if *icon == kind => Some(*rect),
            _ => None,
        })
        .unwrap_or_else(|| panic!("screen has no {kind:?} icon"))
}

pub(crate) fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{what}: expected {expected}, got {actual}"
    );
}
