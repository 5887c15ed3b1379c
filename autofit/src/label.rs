// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{fit_outcome, Area, FitOutcome, FitPredicate, FontSizeRange, TextMeasurer, TextStyle};

/// A text label that sizes itself to the largest font size that fits.
///
/// The fitting pass reruns only when the text, style, range or available area
/// changed since the last [`layout`](Self::layout) call.
pub struct AutoFitText {
    text: String,
    style: TextStyle,
    range: FontSizeRange,
    predicate: Box<dyn FitPredicate>,
    cache: Option<(Area, FitOutcome)>,
}

impl AutoFitText {
    /// Create a label.
    ///
    /// The font size in `style` is replaced with the fitted size on each pass.
    pub fn new(
        text: impl Into<String>,
        style: TextStyle,
        range: FontSizeRange,
        predicate: impl FitPredicate + 'static,
    ) -> Self {
        Self {
            text: text.into(),
            style,
            range,
            predicate: Box::new(predicate),
            cache: None,
        }
    }

    /// The label's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, invalidating the last fit if it differs.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.cache = None;
        }
    }

    /// Replace the style, invalidating the last fit if it differs.
    pub fn set_style(&mut self, style: TextStyle) {
        if style != self.style {
            self.style = style;
            self.cache = None;
        }
    }

    /// Replace the candidate range, invalidating the last fit if it differs.
    pub fn set_range(&mut self, range: FontSizeRange) {
        if range != self.range {
            self.range = range;
            self.cache = None;
        }
    }

    /// Fit the text into `area`, reusing the previous outcome if nothing changed.
    pub fn layout<M: TextMeasurer + ?Sized>(&mut self, measurer: &mut M, area: Area) -> FitOutcome {
        if let Some((cached_area, outcome)) = self.cache {
            if cached_area == area {
                return outcome;
            }
        }
        let outcome = fit_outcome(
            measurer,
            &self.text,
            &self.style,
            area,
            self.range,
            &*self.predicate,
        );
        self.cache = Some((area, outcome));
        outcome
    }

    /// The area and outcome of the last pass, if they are still current.
    pub fn last_fit(&self) -> Option<(Area, FitOutcome)> {
        self.cache
    }

    /// The size chosen by the last pass, if it is still current.
    pub fn font_size(&self) -> Option<f32> {
        self.cache.map(|(_, outcome)| outcome.font_size)
    }

    /// The style to draw with: the label's style at the fitted size.
    pub fn resolved_style(&self) -> Option<TextStyle> {
        self.font_size().map(|size| self.style.with_font_size(size))
    }
}

impl core::fmt::Debug for AutoFitText {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AutoFitText")
            .field("text", &self.text)
            .field("style", &self.style)
            .field("range", &self.range)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
