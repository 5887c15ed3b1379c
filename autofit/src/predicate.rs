// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::LayoutProbe;

/// Decides whether a probe counts as overflow, forcing a smaller size.
///
/// Any `Fn(&LayoutProbe) -> bool` is a predicate, so most callers pass a
/// closure:
///
/// ```
/// use autofit::{FitPredicate, LayoutProbe};
///
/// // Shrink while the text is cut off, or while it wraps at a large size.
/// let title = |probe: &LayoutProbe| {
///     probe.did_overflow_height || (probe.line_count > 1 && probe.font_size > 24.0)
/// };
/// # let _ = title.overflows(&LayoutProbe::from_lines(
/// #     &autofit::TextStyle::default(), autofit::Area::UNBOUNDED, &[], &[]));
/// ```
pub trait FitPredicate {
    /// Returns `true` if `probe` does not fit.
    fn overflows(&self, probe: &LayoutProbe) -> bool;

    /// Overflow if either predicate reports overflow.
    fn or<P: FitPredicate>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    /// Overflow only if both predicates report overflow.
    fn and<P: FitPredicate>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
    {
        And(self, other)
    }
}

impl<F> FitPredicate for F
where
    F: Fn(&LayoutProbe) -> bool,
{
    fn overflows(&self, probe: &LayoutProbe) -> bool {
        self(probe)
    }
}

/// See [`FitPredicate::or`].
#[derive(Clone, Copy, Debug)]
pub struct Or<A, B>(A, B);

impl<A: FitPredicate, B: FitPredicate> FitPredicate for Or<A, B> {
    fn overflows(&self, probe: &LayoutProbe) -> bool {
        self.0.overflows(probe) || self.1.overflows(probe)
    }
}

/// See [`FitPredicate::and`].
#[derive(Clone, Copy, Debug)]
pub struct And<A, B>(A, B);

impl<A: FitPredicate, B: FitPredicate> FitPredicate for And<A, B> {
    fn overflows(&self, probe: &LayoutProbe) -> bool {
        self.0.overflows(probe) && self.1.overflows(probe)
    }
}

/// Overflow on either axis.
pub fn overflow() -> impl FitPredicate + Copy {
    |probe: &LayoutProbe| probe.did_overflow()
}

/// Overflow when wrapped onto more than `lines` lines.
///
/// Counts [`LayoutProbe::total_lines`], so lines hidden by
/// [`TextStyle::max_lines`](crate::TextStyle::max_lines) still count; a
/// truncated layout never passes as fitting.
pub fn more_lines_than(lines: usize) -> impl FitPredicate + Copy {
    move |probe: &LayoutProbe| probe.total_lines > lines
}

/// Overflow when the probed size is above `size`.
pub fn larger_than(size: f32) -> impl FitPredicate + Copy {
    move |probe: &LayoutProbe| probe.font_size > size
}
