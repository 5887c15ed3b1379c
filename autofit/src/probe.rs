// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Width and height constraints of the region text is drawn into.
///
/// Either dimension may be [`f32::INFINITY`] to leave it unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Area {
    /// Maximum advance available to a line.
    pub width: f32,
    /// Maximum height available to all visible lines.
    pub height: f32,
}

impl Area {
    /// An area with both dimensions bounded.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// An area bounded horizontally only.
    pub const fn unbounded_height(width: f32) -> Self {
        Self {
            width,
            height: f32::INFINITY,
        }
    }

    /// An area with no constraint at all.
    pub const UNBOUNDED: Self = Self {
        width: f32::INFINITY,
        height: f32::INFINITY,
    };
}

/// What happens to text that exceeds its line limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextOverflow {
    /// Lines past the limit are dropped.
    #[default]
    Clip,
    /// Lines past the limit are dropped and the last visible line ends in
    /// [`ELLIPSIS`](crate::ELLIPSIS); see [`ellipsize`](crate::ellipsize).
    Ellipsis,
    /// Nothing is dropped; `max_lines` is ignored.
    Visible,
}

/// Style inputs that influence measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels.
    pub font_size: f32,
    /// Font weight on the usual 1..=1000 scale.
    pub font_weight: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    /// Maximum number of visible lines, if limited.
    pub max_lines: Option<usize>,
    /// Policy for text past `max_lines`.
    pub overflow: TextOverflow,
}

impl TextStyle {
    /// Normal weight text at `font_size` with no line limit.
    pub const fn new(font_size: f32) -> Self {
        Self {
            font_size,
            font_weight: 400.0,
            line_height: 1.2,
            max_lines: None,
            overflow: TextOverflow::Clip,
        }
    }

    /// Returns a copy with the given font size.
    #[must_use]
    pub const fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Returns a copy with the given weight.
    #[must_use]
    pub const fn with_weight(mut self, font_weight: f32) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Returns a copy limited to `max_lines` visible lines.
    #[must_use]
    pub const fn with_max_lines(mut self, max_lines: usize, overflow: TextOverflow) -> Self {
        self.max_lines = Some(max_lines);
        self.overflow = overflow;
        self
    }

    /// The number of lines that stay visible out of `total`.
    pub fn visible_lines(&self, total: usize) -> usize {
        match (self.max_lines, self.overflow) {
            (Some(max), TextOverflow::Clip | TextOverflow::Ellipsis) => total.min(max),
            _ => total,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(14.0)
    }
}

/// The outcome of tentatively laying out text at one candidate size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutProbe {
    /// The size that was probed.
    pub font_size: f32,
    /// Number of visible lines.
    pub line_count: usize,
    /// Number of lines before truncation by `max_lines`.
    pub total_lines: usize,
    /// Width of the widest visible line.
    pub width: f32,
    /// Height of the visible lines.
    pub height: f32,
    /// The widest line does not fit the area's width.
    pub did_overflow_width: bool,
    /// The visible lines do not fit the area's height, or lines were
    /// truncated by `max_lines`.
    pub did_overflow_height: bool,
}

impl LayoutProbe {
    /// Assemble a probe from raw line measurements.
    ///
    /// `line_heights` and `line_widths` cover every line before truncation;
    /// the visible prefix is chosen with [`TextStyle::visible_lines`].
    pub fn from_lines(
        style: &TextStyle,
        area: Area,
        line_widths: &[f32],
        line_heights: &[f32],
    ) -> Self {
        let total_lines = line_heights.len();
        let line_count = style.visible_lines(total_lines);
        let width = line_widths
            .iter()
            .take(line_count)
            .fold(0.0_f32, |acc, w| acc.max(*w));
        let height: f32 = line_heights.iter().take(line_count).sum();
        Self {
            font_size: style.font_size,
            line_count,
            total_lines,
            width,
            height,
            did_overflow_width: width > area.width,
            did_overflow_height: height > area.height || line_count < total_lines,
        }
    }

    /// Either axis overflowed.
    pub fn did_overflow(&self) -> bool {
        self.did_overflow_width || self.did_overflow_height
    }

    /// Lines were dropped by `max_lines`.
    pub fn is_truncated(&self) -> bool {
        self.line_count < self.total_lines
    }
}
