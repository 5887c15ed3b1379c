// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use autofit::predicate::{larger_than, more_lines_than, overflow};
use autofit::{fit, fit_outcome, Area, FontSizeRange, LayoutProbe, TextOverflow, TextStyle};
use recipe::TITLE_FONT_SIZES;

use crate::util::{TestEnv, LONG_TITLE};

#[test]
fn fit_roomy_area_takes_max() {
    let mut env = TestEnv::new();
    let size = fit(
        &mut env,
        "Cookies",
        &TextStyle::default(),
        Area::new(400.0, 300.0),
        TITLE_FONT_SIZES,
        &|_: &LayoutProbe| false,
    );
    assert_eq!(size, 40.0);
    assert_eq!(env.measured, [40.0]);
}

#[test]
fn fit_narrow_area_steps_down_to_single_line() {
    // 22 characters at 0.6 em: 264 wide at 20, 290.4 at 22.
    let mut env = TestEnv::new();
    let size = fit(
        &mut env,
        "Chocolate chip cookies",
        &TextStyle::default(),
        Area::new(270.0, 200.0),
        TITLE_FONT_SIZES,
        &more_lines_than(1),
    );
    assert_eq!(size, 20.0);
    assert_eq!(env.measured, [40.0, 38.0, 36.0, 34.0, 32.0, 30.0, 28.0, 26.0, 24.0, 22.0, 20.0]);
}

#[test]
fn fit_first_accepted_size_on_lattice() {
    let size = fit(
        &mut TestEnv::new(),
        LONG_TITLE,
        &TextStyle::default(),
        Area::new(120.0, 40.0),
        TITLE_FONT_SIZES,
        &larger_than(21.0),
    );
    assert_eq!(size, 20.0);
}

#[test]
fn fit_nothing_fits_falls_back_to_min() {
    let text = "Cookies ".repeat(50);
    let mut env = TestEnv::new();
    let outcome = fit_outcome(
        &mut env,
        &text,
        &TextStyle::default(),
        Area::new(40.0, 20.0),
        TITLE_FONT_SIZES,
        &overflow(),
    );
    assert_eq!(outcome.font_size, 16.0);
    assert!(!outcome.fitted);
    assert!(outcome.probe.did_overflow());
    // 16 is on the lattice, so the last probe is reused.
    assert_eq!(env.measured.len(), 13);
}

#[test]
fn fit_off_lattice_min_is_measured() {
    let range = FontSizeRange::new(15.0, 40.0, 2.0).unwrap();
    let mut env = TestEnv::new();
    let outcome = fit_outcome(
        &mut env,
        "Cookies",
        &TextStyle::default(),
        Area::new(10.0, 10.0),
        range,
        &overflow(),
    );
    assert_eq!(outcome.font_size, 15.0);
    assert_eq!(outcome.probe.font_size, 15.0);
    assert_eq!(env.measured.last(), Some(&15.0));
}

#[test]
fn fit_is_idempotent() {
    let style = TextStyle::new(40.0).with_max_lines(3, TextOverflow::Ellipsis);
    let area = Area::new(180.0, 90.0);
    let first = fit_outcome(&mut TestEnv::new(), LONG_TITLE, &style, area, TITLE_FONT_SIZES, &overflow());
    let second = fit_outcome(&mut TestEnv::new(), LONG_TITLE, &style, area, TITLE_FONT_SIZES, &overflow());
    assert_eq!(first, second);
}

#[test]
fn fit_shrinking_area_never_grows_size() {
    let style = TextStyle::new(40.0).with_max_lines(3, TextOverflow::Ellipsis);
    let mut previous = f32::INFINITY;
    for width in [400.0, 320.0, 260.0, 200.0, 150.0, 100.0, 60.0] {
        let size = fit(
            &mut TestEnv::new(),
            LONG_TITLE,
            &style,
            Area::new(width, 120.0),
            TITLE_FONT_SIZES,
            &overflow(),
        );
        assert!(size <= previous, "width {width} chose {size} after {previous}");
        assert!(TITLE_FONT_SIZES.candidates().any(|candidate| candidate == size));
        previous = size;
    }
}

#[test]
fn fit_empty_text_takes_max() {
    let outcome = fit_outcome(
        &mut TestEnv::new(),
        "",
        &TextStyle::default(),
        Area::new(0.0, 0.0),
        TITLE_FONT_SIZES,
        &overflow(),
    );
    assert_eq!(outcome.font_size, 40.0);
    assert_eq!(outcome.probe.line_count, 0);
}
