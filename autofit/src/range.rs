// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Bounds and step of the font sizes an auto-fit label may take.
///
/// Sizes are in logical pixels. Candidates form a lattice starting at `max` and
/// stepping down by `step` while staying at or above `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizeRange {
    min: f32,
    max: f32,
    step: f32,
}

impl FontSizeRange {
    /// The most candidates a range may hold. Each one costs a full layout.
    pub const MAX_CANDIDATES: usize = 4096;

    /// Create a range, validating that `min <= max`, `step > 0`, that every
    /// bound is finite and that there are at most [`Self::MAX_CANDIDATES`]
    /// candidates.
    pub fn new(min: f32, max: f32, step: f32) -> Result<Self, InvalidFontSizeRange> {
        let error = |kind| InvalidFontSizeRange {
            kind,
            min,
            max,
            step,
        };
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(error(InvalidFontSizeRangeKind::NotFinite));
        }
        if min <= 0.0 {
            return Err(error(InvalidFontSizeRangeKind::NonPositiveMin));
        }
        if min > max {
            return Err(error(InvalidFontSizeRangeKind::MinAboveMax));
        }
        if step <= 0.0 {
            return Err(error(InvalidFontSizeRangeKind::NonPositiveStep));
        }
        if !within_candidate_limit(min, max, step) {
            return Err(error(InvalidFontSizeRangeKind::TooManyCandidates));
        }
        Ok(Self { min, max, step })
    }

    /// Create a range in a const context.
    ///
    /// # Panics
    ///
    /// Panics if the bounds are rejected by [`FontSizeRange::new`]. In a
    /// `const` item that is a compile error.
    pub const fn new_const(min: f32, max: f32, step: f32) -> Self {
        assert!(
            min.is_finite() && max.is_finite() && step.is_finite(),
            "font size range must be finite"
        );
        assert!(min > 0.0, "minimum font size must be positive");
        assert!(min <= max, "minimum font size is above maximum");
        assert!(step > 0.0, "font size step must be positive");
        assert!(
            within_candidate_limit(min, max, step),
            "font size range has too many candidates"
        );
        Self { min, max, step }
    }

    /// The smallest size, also used as the fallback when nothing fits.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// The largest size, tried first.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// The decrement between two consecutive candidates.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Candidate sizes from largest to smallest.
    ///
    /// Each candidate is computed as `max - i * step` rather than by repeated
    /// subtraction, so long ranges with fractional steps do not drift.
    pub fn candidates(&self) -> Candidates {
        Candidates {
            range: *self,
            index: 0,
            count: self.candidate_count(),
        }
    }

    /// Whether `min` itself is one of the candidates.
    pub fn min_on_lattice(&self) -> bool {
        let last = self.max - self.candidate_count().saturating_sub(1) as f32 * self.step;
        (last - self.min).abs() <= LATTICE_EPSILON
    }

    fn candidate_count(&self) -> usize {
        let steps = step_count(self.min, self.max, self.step);
        // Constructors cap `steps`, the clamp only guards against float edge cases.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "steps is clamped to a small, non-negative whole number"
        )]
        let steps = steps.clamp(0.0, (Self::MAX_CANDIDATES - 1) as f32) as usize;
        steps + 1
    }
}

const LATTICE_EPSILON: f32 = 1e-4;

/// Steps from `max` down to `min`, tolerating float error so that e.g.
/// (16, 40, 2) yields 12 even if (40 - 16) / 2 lands a hair below it.
const fn raw_steps(min: f32, max: f32, step: f32) -> f32 {
    (max - min) / step + LATTICE_EPSILON
}

fn step_count(min: f32, max: f32, step: f32) -> f32 {
    raw_steps(min, max, step).floor()
}

const fn within_candidate_limit(min: f32, max: f32, step: f32) -> bool {
    let steps = raw_steps(min, max, step);
    steps.is_finite() && steps < FontSizeRange::MAX_CANDIDATES as f32
}

/// Iterator over the candidate sizes of a [`FontSizeRange`], largest first.
#[derive(Clone, Debug)]
pub struct Candidates {
    range: FontSizeRange,
    index: usize,
    count: usize,
}

impl Iterator for Candidates {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.index >= self.count {
            return None;
        }
        let size = self.range.max - self.index as f32 * self.range.step;
        self.index += 1;
        // Snap the final candidate onto `min` when float error overshoots it.
        Some(size.max(self.range.min))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Candidates {}

/// Error returned by [`FontSizeRange::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidFontSizeRange {
    kind: InvalidFontSizeRangeKind,
    min: f32,
    max: f32,
    step: f32,
}

impl InvalidFontSizeRange {
    /// What was wrong with the bounds.
    pub fn kind(&self) -> InvalidFontSizeRangeKind {
        self.kind
    }

    /// The rejected `(min, max, step)` triple.
    pub fn bounds(&self) -> (f32, f32, f32) {
        (self.min, self.max, self.step)
    }
}

impl core::fmt::Display for InvalidFontSizeRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (min, max, step) = (self.min, self.max, self.step);
        match self.kind {
            InvalidFontSizeRangeKind::NotFinite => {
                write!(f, "font size range ({min}, {max}, {step}) is not finite")
            }
            InvalidFontSizeRangeKind::NonPositiveMin => {
                write!(f, "minimum font size {min} must be positive")
            }
            InvalidFontSizeRangeKind::MinAboveMax => {
                write!(f, "minimum font size {min} is above maximum {max}")
            }
            InvalidFontSizeRangeKind::NonPositiveStep => {
                write!(f, "font size step {step} must be positive")
            }
            InvalidFontSizeRangeKind::TooManyCandidates => write!(
                f,
                "font size range ({min}, {max}, {step}) has more than {} candidates",
                FontSizeRange::MAX_CANDIDATES
            ),
        }
    }
}

impl core::error::Error for InvalidFontSizeRange {}

/// The category of an [`InvalidFontSizeRange`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidFontSizeRangeKind {
    /// One of the bounds is NaN or infinite.
    NotFinite,

    /// `min` is zero or negative.
    NonPositiveMin,

    /// `min > max`.
    MinAboveMax,

    /// `step` is zero or negative.
    NonPositiveStep,

    /// `step` is so small relative to `max - min` that the range would hold
    /// more than [`FontSizeRange::MAX_CANDIDATES`] sizes.
    TooManyCandidates,
}
