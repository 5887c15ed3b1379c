// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks.
//!
//! Fitting needs to know how text lays out at a given size. That knowledge
//! lives in the host's text stack, so [`fit`](crate::fit) takes a measurer.
//! Callers plug in a shaping-based backend (see `ParleyMeasurer` behind the
//! `parley` feature), or use [`HeuristicMeasurer`] when no fonts are around.

use crate::{Area, LayoutProbe, TextStyle};

/// Lays out text tentatively and reports how it fits.
///
/// Implementations break lines at `area.width`, keep at most
/// `style.max_lines` lines visible (see [`TextStyle::visible_lines`]) and flag
/// overflow the way [`LayoutProbe::from_lines`] does.
pub trait TextMeasurer {
    /// Measure `text` laid out with `style` inside `area`.
    fn measure(&mut self, text: &str, style: &TextStyle, area: Area) -> LayoutProbe;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    fn measure(&mut self, text: &str, style: &TextStyle, area: Area) -> LayoutProbe {
        (**self).measure(text, style, area)
    }
}

/// A deterministic measurer that needs no fonts.
///
/// Every character advances by `advance` em (widened slightly for heavy
/// weights) and lines are broken greedily at whitespace. Hard line breaks
/// start a new paragraph.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicMeasurer {
    /// Average advance per character, in em.
    pub advance: f32,
}

impl HeuristicMeasurer {
    /// The advance used by [`Default`], roughly that of a proportional UI face.
    pub const DEFAULT_ADVANCE: f32 = 0.6;

    /// Create a measurer with the given per-character advance in em.
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }

    fn char_advance(&self, style: &TextStyle) -> f32 {
        let weight_boost = ((style.font_weight - 400.0) / 5000.0).max(0.0);
        style.font_size * self.advance * (1.0 + weight_boost)
    }

    /// Width of each line once `text` is wrapped at `max_width`.
    pub fn wrap(&self, text: &str, style: &TextStyle, max_width: f32) -> Vec<f32> {
        let char_advance = self.char_advance(style);
        let mut lines = Vec::new();
        if text.is_empty() {
            return lines;
        }
        for paragraph in text.split('\n') {
            let mut current: Option<f32> = None;
            for word in paragraph.split_whitespace() {
                let word_width = word.chars().count() as f32 * char_advance;
                current = Some(match current {
                    None => word_width,
                    Some(width) => {
                        let joined = width + char_advance + word_width;
                        if joined <= max_width {
                            joined
                        } else {
                            lines.push(width);
                            word_width
                        }
                    }
                });
            }
            lines.push(current.unwrap_or(0.0));
        }
        lines
    }
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE)
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle, area: Area) -> LayoutProbe {
        let widths = self.wrap(text, style, area.width);
        let line_height = style.font_size * style.line_height;
        let heights = vec![line_height; widths.len()];
        LayoutProbe::from_lines(style, area, &widths, &heights)
    }
}
