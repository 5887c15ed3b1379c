// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use parley::fontique::Blob;
use parley::{
    Alignment, AlignmentOptions, FontContext, FontFamily, FontWeight, GenericFamily, Layout,
    LayoutContext, LineHeight, StyleProperty,
};

use crate::{Area, LayoutProbe, TextMeasurer, TextStyle};

/// Measures text by shaping it with Parley.
///
/// The [`FontContext`] and [`LayoutContext`] are meant to live for as long as
/// the measurer: they hold the caches that keep repeated probes cheap.
pub struct ParleyMeasurer {
    font_cx: FontContext,
    layout_cx: LayoutContext<()>,
    family: Option<String>,
    quantize: bool,
}

impl ParleyMeasurer {
    /// Create a measurer that discovers system fonts and uses the system UI family.
    pub fn new() -> Self {
        Self::from_contexts(FontContext::new(), LayoutContext::new())
    }

    /// Create a measurer from existing contexts.
    pub fn from_contexts(font_cx: FontContext, layout_cx: LayoutContext<()>) -> Self {
        Self {
            font_cx,
            layout_cx,
            family: None,
            quantize: true,
        }
    }

    /// Use the named family instead of the system UI family.
    #[must_use]
    pub fn with_family(mut self, name: impl Into<String>) -> Self {
        self.family = Some(name.into());
        self
    }

    /// Register font data and use its first family for all text.
    ///
    /// Returns the family name, or `None` if the data contained no usable font.
    pub fn register_font(&mut self, data: Vec<u8>) -> Option<String> {
        let families = self
            .font_cx
            .collection
            .register_fonts(Blob::new(Arc::new(data)), None);
        let (id, _) = families.into_iter().next()?;
        let name = self.font_cx.collection.family_name(id)?.to_owned();
        log::debug!("registered font family {name:?}");
        self.family = Some(name.clone());
        Some(name)
    }

    /// The family used for layout, or `None` for the system UI family.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Lay out `text` with `style`, breaking lines at `width`.
    ///
    /// This is the layout to draw once a size has been fitted. `max_lines` is
    /// not applied here; callers drawing the result skip lines past it.
    pub fn layout(&mut self, text: &str, style: &TextStyle, width: f32) -> Layout<()> {
        let Self {
            font_cx,
            layout_cx,
            family,
            quantize,
        } = self;
        let mut builder = layout_cx.ranged_builder(font_cx, text, 1.0, *quantize);
        builder.push_default(StyleProperty::FontSize(style.font_size));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(style.font_weight)));
        builder.push_default(LineHeight::FontSizeRelative(style.line_height));
        match family {
            Some(name) => builder.push_default(FontFamily::Named(name.as_str().into())),
            None => builder.push_default(GenericFamily::SystemUi),
        }

        let mut layout = builder.build(text);
        let max_advance = width.is_finite().then_some(width);
        layout.break_all_lines(max_advance);
        layout.align(max_advance, Alignment::Start, AlignmentOptions::default());
        layout
    }
}

impl Default for ParleyMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ParleyMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyMeasurer")
            .field("family", &self.family)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl TextMeasurer for ParleyMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle, area: Area) -> LayoutProbe {
        let layout = self.layout(text, style, area.width);
        probe_layout(&layout, style, area)
    }
}

/// Derive a probe from a Parley layout that was broken at `area.width`.
pub fn probe_layout<B: parley::Brush>(
    layout: &Layout<B>,
    style: &TextStyle,
    area: Area,
) -> LayoutProbe {
    if layout.is_empty() {
        return LayoutProbe::from_lines(style, area, &[], &[]);
    }
    let (widths, heights): (Vec<f32>, Vec<f32>) = layout
        .lines()
        .map(|line| {
            let metrics = line.metrics();
            (
                metrics.advance - metrics.trailing_whitespace,
                metrics.line_height,
            )
        })
        .unzip();
    LayoutProbe::from_lines(style, area, &widths, &heights)
}
