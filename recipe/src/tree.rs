// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An immutable description of a screen, consumed by [`layout`](crate::layout()).

use std::sync::Arc;

use autofit::{FitPredicate, FontSizeRange, TextStyle};
use peniko::kurbo::Insets;
use peniko::Color;

/// A node of the screen tree.
#[derive(Clone, Debug)]
pub enum Node {
    /// Children stacked top to bottom.
    Column(Flex),
    /// Children laid out left to right.
    Row(Flex),
    /// A base node with overlays on top of it.
    Stack(Stack),
    /// Empty space around a child.
    Padding(Insets, Box<Node>),
    /// A raised, rounded surface behind a child.
    Surface(Surface),
    /// A vertical gradient behind a child.
    Gradient(Vec<(f32, Color)>, Box<Node>),
    /// Moves a child to the bottom of the space it is given.
    AlignBottom(Box<Node>),
    /// A height cap; content past it is clipped and would be scrolled.
    Scroll {
        /// The cap, or `None` to clip to whatever height the parent gives.
        max_height: Option<f64>,
        /// Scrolled content.
        child: Box<Node>,
    },
    /// Static text.
    Text(Text),
    /// Text sized to the largest font size that fits.
    AutoFitText(AutoFitText),
    /// An image filling the available width.
    Image(Image),
    /// A square symbolic icon.
    Icon(Icon),
    /// A full-width button with a centered label.
    Button(Button),
}

/// Main-axis distribution of free space in a [`Flex`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MainAxis {
    /// Pack children at the start, separated by the spacing.
    #[default]
    Start,
    /// Pack children in the middle.
    Center,
    /// First and last child touch the edges, free space goes between.
    SpaceBetween,
    /// Equal free space between children and at both edges.
    SpaceEvenly,
    /// Equal free space around each child, halved at the edges.
    SpaceAround,
}

/// Cross-axis placement of children in a [`Flex`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossAxis {
    /// Align to the start edge at their natural size.
    Start,
    /// Center at their natural size.
    Center,
    /// Fill the cross axis.
    #[default]
    Stretch,
}

/// Children of a [`Node::Column`] or [`Node::Row`].
#[derive(Clone, Debug, Default)]
pub struct Flex {
    /// Children in order.
    pub children: Vec<FlexChild>,
    /// Fixed gap between consecutive children.
    pub spacing: f64,
    /// Distribution of leftover main-axis space.
    pub main: MainAxis,
    /// Cross-axis placement.
    pub cross: CrossAxis,
}

impl Flex {
    /// An empty flex with the given gap.
    pub fn new(spacing: f64) -> Self {
        Self {
            spacing,
            ..Self::default()
        }
    }

    /// Set the main-axis distribution.
    #[must_use]
    pub fn main(mut self, main: MainAxis) -> Self {
        self.main = main;
        self
    }

    /// Set the cross-axis placement.
    #[must_use]
    pub fn cross(mut self, cross: CrossAxis) -> Self {
        self.cross = cross;
        self
    }

    /// Append a child at its natural size.
    #[must_use]
    pub fn with_child(mut self, node: Node) -> Self {
        self.children.push(FlexChild { node, weight: None });
        self
    }

    /// Append a child taking a `weight` share of the leftover main-axis space.
    #[must_use]
    pub fn with_flex_child(mut self, node: Node, weight: f64) -> Self {
        self.children.push(FlexChild {
            node,
            weight: Some(weight),
        });
        self
    }
}

/// One child of a [`Flex`].
#[derive(Clone, Debug)]
pub struct FlexChild {
    /// The child.
    pub node: Node,
    /// Share of leftover space, or `None` for natural size.
    pub weight: Option<f64>,
}

/// See [`Node::Stack`].
#[derive(Clone, Debug)]
pub struct Stack {
    /// Determines the size of the stack.
    pub base: Box<Node>,
    /// Drawn over the base, each given the base's full area.
    pub overlays: Vec<Node>,
}

/// See [`Node::Surface`].
#[derive(Clone, Debug)]
pub struct Surface {
    /// Background color.
    pub color: Color,
    /// Corner radius.
    pub radius: f64,
    /// Drop shadow depth; zero draws no shadow.
    pub elevation: f64,
    /// Content.
    pub child: Box<Node>,
}

/// See [`Node::Text`].
#[derive(Clone, Debug)]
pub struct Text {
    /// Content.
    pub text: String,
    /// Style, including size and line limit.
    pub style: TextStyle,
    /// Color.
    pub color: Color,
}

/// See [`Node::AutoFitText`].
#[derive(Clone)]
pub struct AutoFitText {
    /// Content.
    pub text: String,
    /// Style; the font size is replaced by the fitted one.
    pub style: TextStyle,
    /// Candidate sizes.
    pub range: FontSizeRange,
    /// Rejects sizes that do not fit.
    pub predicate: Arc<dyn FitPredicate + Send + Sync>,
    /// Color.
    pub color: Color,
}

impl core::fmt::Debug for AutoFitText {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AutoFitText")
            .field("text", &self.text)
            .field("style", &self.style)
            .field("range", &self.range)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// See [`Node::Image`].
#[derive(Clone, Debug)]
pub struct Image {
    /// Source location.
    pub url: String,
    /// Accessible description.
    pub description: String,
    /// Width divided by height.
    pub aspect_ratio: f64,
}

/// The icons used on the recipe screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Overall cooking time.
    Clock,
    /// Active cooking time.
    Dining,
    /// Preparation time.
    Kitchen,
    /// Number of servings.
    Servings,
    /// A filled review star.
    Star,
    /// Add to favorites.
    Favorite,
    /// Bookmark.
    Bookmark,
    /// Share.
    Share,
}

/// See [`Node::Icon`].
#[derive(Clone, Debug)]
pub struct Icon {
    /// Which icon.
    pub kind: IconKind,
    /// Edge length.
    pub size: f64,
    /// Accessible description, if the icon is not decorative.
    pub description: Option<String>,
    /// Tint.
    pub color: Color,
}

/// See [`Node::Button`].
#[derive(Clone, Debug)]
pub struct Button {
    /// Label.
    pub label: Text,
    /// Fixed height.
    pub height: f64,
    /// Background.
    pub color: Color,
}

impl Node {
    /// A column node.
    pub fn column(flex: Flex) -> Self {
        Self::Column(flex)
    }

    /// A row node.
    pub fn row(flex: Flex) -> Self {
        Self::Row(flex)
    }

    /// Wrap in padding.
    #[must_use]
    pub fn padded(self, insets: Insets) -> Self {
        Self::Padding(insets, Box::new(self))
    }

    /// Text node.
    pub fn text(text: impl Into<String>, style: TextStyle, color: Color) -> Self {
        Self::Text(Text {
            text: text.into(),
            style,
            color,
        })
    }

    /// Icon node.
    pub fn icon(kind: IconKind, size: f64, description: Option<&str>, color: Color) -> Self {
        Self::Icon(Icon {
            kind,
            size,
            description: description.map(str::to_owned),
            color,
        })
    }
}
