// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use autofit::TextStyle;
use peniko::kurbo::{Point, Rect};
use peniko::Color;

use crate::IconKind;

/// One drawing operation, in logical pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawItem {
    /// A solid, optionally rounded, rectangle.
    Fill {
        /// Area to fill.
        rect: Rect,
        /// Corner radius; zero for square corners.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// A top-to-bottom gradient.
    VerticalGradient {
        /// Area to fill.
        rect: Rect,
        /// Offsets in `0..=1` with their colors, in increasing offset order.
        stops: Vec<(f32, Color)>,
    },
    /// An image slot. Images are not fetched, so renderers draw a placeholder.
    Image {
        /// Area the image is cropped to.
        rect: Rect,
        /// Where the image would be loaded from.
        url: String,
        /// Accessible description.
        description: String,
    },
    /// A text block laid out at `style.font_size`, broken at `width`.
    Text {
        /// Top-left corner of the first line.
        origin: Point,
        /// Line-breaking width.
        width: f64,
        /// Text to draw.
        text: String,
        /// Resolved style, including the fitted size for auto-fit text.
        style: TextStyle,
        /// Text color.
        color: Color,
    },
    /// A symbolic icon.
    Icon {
        /// Square the icon occupies.
        rect: Rect,
        /// Which icon.
        icon: IconKind,
        /// Tint.
        color: Color,
    },
    /// Restrict following items to `rect` until the matching [`DrawItem::PopClip`].
    PushClip(Rect),
    /// End the innermost clip.
    PopClip,
}

/// Draw items in painting order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    items: Vec<DrawItem>,
}

impl DisplayList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item.
    pub fn push(&mut self, item: DrawItem) {
        self.items.push(item);
    }

    /// All items in painting order.
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The text items together with their origin.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, &TextStyle)> + '_ {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Text {
                text,
                origin,
                style,
                ..
            } => Some((text.as_str(), *origin, style)),
            _ => None,
        })
    }

    /// Finds the first text item with exactly this content.
    pub fn find_text(&self, needle: &str) -> Option<(Point, &TextStyle)> {
        self.texts()
            .find(|(text, ..)| *text == needle)
            .map(|(_, origin, style)| (origin, style))
    }
}
