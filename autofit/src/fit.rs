// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Area, FitPredicate, FontSizeRange, LayoutProbe, TextMeasurer, TextStyle};

/// The result of a fitting pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOutcome {
    /// The selected font size.
    pub font_size: f32,
    /// The measurement taken at `font_size`.
    pub probe: LayoutProbe,
    /// Whether `font_size` satisfied the predicate. `false` means no
    /// candidate did and the range's minimum was used regardless.
    pub fitted: bool,
    /// How many measurements the pass took.
    pub probes: usize,
}

/// Returns the largest candidate size in `range` at which `text` fits `area`.
///
/// Candidates are tried from `range.max()` downwards, and the first one the
/// `predicate` accepts wins. When none is accepted, `range.min()` is returned.
///
/// ```
/// use autofit::{fit, Area, FontSizeRange, HeuristicMeasurer, LayoutProbe, TextStyle};
///
/// let range = FontSizeRange::new(16.0, 40.0, 2.0).unwrap();
/// let size = fit(
///     &mut HeuristicMeasurer::default(),
///     "Cookies",
///     &TextStyle::default(),
///     Area::new(400.0, 200.0),
///     range,
///     &|probe: &LayoutProbe| probe.did_overflow(),
/// );
/// assert_eq!(size, 40.0);
/// ```
pub fn fit<M, P>(
    measurer: &mut M,
    text: &str,
    style: &TextStyle,
    area: Area,
    range: FontSizeRange,
    predicate: &P,
) -> f32
where
    M: TextMeasurer + ?Sized,
    P: FitPredicate + ?Sized,
{
    fit_outcome(measurer, text, style, area, range, predicate).font_size
}

/// Like [`fit`], but also returns the probe at the selected size.
///
/// `style.font_size` is ignored; every probe uses the candidate size instead.
pub fn fit_outcome<M, P>(
    measurer: &mut M,
    text: &str,
    style: &TextStyle,
    area: Area,
    range: FontSizeRange,
    predicate: &P,
) -> FitOutcome
where
    M: TextMeasurer + ?Sized,
    P: FitPredicate + ?Sized,
{
    let mut probes = 0;
    let mut last = None;
    for size in range.candidates() {
        let probe = measurer.measure(text, &style.with_font_size(size), area);
        probes += 1;
        let overflows = predicate.overflows(&probe);
        log::trace!(
            "probe {size}: {} lines, {}x{}, overflow: {overflows}",
            probe.line_count,
            probe.width,
            probe.height,
        );
        if !overflows {
            log::debug!("fitted text at {size} after {probes} probes");
            return FitOutcome {
                font_size: size,
                probe,
                fitted: true,
                probes,
            };
        }
        last = Some(probe);
    }

    // Nothing fitted, so fall back to the floor. Only re-measure when the floor
    // is not a candidate we already probed.
    let min = range.min();
    let probe = match last {
        Some(probe) if range.min_on_lattice() => LayoutProbe {
            font_size: min,
            ..probe
        },
        _ => {
            probes += 1;
            measurer.measure(text, &style.with_font_size(min), area)
        }
    };
    log::debug!("no size in {min}..={} fits, using {min}", range.max());
    FitOutcome {
        font_size: min,
        probe,
        fitted: false,
        probes,
    }
}

#[cfg(test)]
mod tests {
    use super::{fit, fit_outcome};
    use crate::{Area, FontSizeRange, HeuristicMeasurer, LayoutProbe, TextMeasurer, TextStyle};

    /// Records every size it is asked to measure.
    #[derive(Default)]
    struct Recorder {
        sizes: Vec<f32>,
    }

    impl TextMeasurer for Recorder {
        fn measure(&mut self, _text: &str, style: &TextStyle, area: Area) -> LayoutProbe {
            self.sizes.push(style.font_size);
            LayoutProbe::from_lines(style, area, &[10.0], &[style.font_size])
        }
    }

    fn title_range() -> FontSizeRange {
        FontSizeRange::new(16.0, 40.0, 2.0).unwrap()
    }

    #[test]
    fn stops_at_first_fitting_size() {
        let mut recorder = Recorder::default();
        let outcome = fit_outcome(
            &mut recorder,
            "Cookies",
            &TextStyle::default(),
            Area::UNBOUNDED,
            title_range(),
            &|probe: &LayoutProbe| probe.font_size > 20.0,
        );
        assert_eq!(outcome.font_size, 20.0);
        assert!(outcome.fitted);
        assert_eq!(outcome.probes, 11);
        assert_eq!(recorder.sizes.first(), Some(&40.0));
        assert_eq!(recorder.sizes.last(), Some(&20.0));
    }

    #[test]
    fn falls_back_to_min_without_remeasuring() {
        let mut recorder = Recorder::default();
        let outcome = fit_outcome(
            &mut recorder,
            "Cookies",
            &TextStyle::default(),
            Area::UNBOUNDED,
            title_range(),
            &|_: &LayoutProbe| true,
        );
        assert_eq!(outcome.font_size, 16.0);
        assert!(!outcome.fitted);
        assert_eq!(outcome.probes, 13);
        assert_eq!(outcome.probe.font_size, 16.0);
    }

    #[test]
    fn off_lattice_min_is_measured_once_more() {
        let mut recorder = Recorder::default();
        let range = FontSizeRange::new(15.0, 40.0, 2.0).unwrap();
        let outcome = fit_outcome(
            &mut recorder,
            "Cookies",
            &TextStyle::default(),
            Area::UNBOUNDED,
            range,
            &|_: &LayoutProbe| true,
        );
        assert_eq!(outcome.font_size, 15.0);
        assert_eq!(recorder.sizes.last(), Some(&15.0));
        assert_eq!(outcome.probe.font_size, 15.0);
        assert_eq!(outcome.probes, 14);
    }

    #[test]
    fn ignores_style_font_size() {
        let size = fit(
            &mut HeuristicMeasurer::default(),
            "Cookies",
            &TextStyle::new(99.0),
            Area::new(1000.0, 1000.0),
            title_range(),
            &|probe: &LayoutProbe| probe.did_overflow(),
        );
        assert_eq!(size, 40.0);
    }

    #[test]
    fn dyn_measurer_and_predicate() {
        let mut measurer = HeuristicMeasurer::default();
        let measurer: &mut dyn TextMeasurer = &mut measurer;
        let predicate: Box<dyn crate::FitPredicate> =
            Box::new(|probe: &LayoutProbe| probe.did_overflow());
        let size = fit(
            measurer,
            "Cookies",
            &TextStyle::default(),
            Area::new(1000.0, 1000.0),
            title_range(),
            &*predicate,
        );
        assert_eq!(size, 40.0);
    }
}
