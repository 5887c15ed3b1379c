// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use autofit::{Area, HeuristicMeasurer, TextMeasurer, ELLIPSIS};
use peniko::kurbo::Size;
use recipe::{DrawItem, IconKind, Recipe, ScreenConfig};

use crate::util::{assert_close, icon_rect, image_rect, TestEnv, LONG_TITLE, PHONE};

#[test]
fn screen_cook_button_spans_bottom() {
    let list = TestEnv::new().screen(&Recipe::sample(), PHONE);
    let primary = ScreenConfig::default().primary;
    let button = list
        .items()
        .iter()
        .find_map(|item| match item {
            DrawItem::Fill { rect, color, .. } if *color == primary => Some(*rect),
            _ => None,
        })
        .expect("screen has a cook button");
    assert_close(button.x0, 0.0, "button left");
    assert_close(button.x1, PHONE.width, "button right");
    assert_close(button.height(), 50.0, "button height");
    assert_close(button.y1, PHONE.height, "button bottom");

    let (origin, _) = list.find_text("COOK").unwrap();
    assert!(origin.y > button.y0 && origin.y < button.y1);
}

#[test]
fn screen_ingredients_absorb_extra_height() {
    let short = TestEnv::new().screen(&Recipe::sample(), PHONE);
    let tall = TestEnv::new().screen(&Recipe::sample(), Size::new(PHONE.width, 1200.0));
    let extra = 1200.0 - PHONE.height;

    // Everything above the ingredients card stays put.
    for text in ["Cookies", "Overall: 90 min", "Ingredients"] {
        let (a, _) = short.find_text(text).unwrap();
        let (b, _) = tall.find_text(text).unwrap();
        assert_close(b.y, a.y, text);
    }
    // Everything below moves down by the extra height.
    let a = icon_rect(&short, IconKind::Favorite);
    let b = icon_rect(&tall, IconKind::Favorite);
    assert_close(b.y0 - a.y0, extra, "favorite icon shift");
}

#[test]
fn screen_title_overlays_image_bottom() {
    let list = TestEnv::new().screen(&Recipe::sample(), PHONE);
    let image = image_rect(&list);
    assert_close(image.width(), PHONE.width, "image width");
    assert_close(image.height(), PHONE.width / 1.5, "image height");

    let scrim = list
        .items()
        .iter()
        .find_map(|item| match item {
            DrawItem::VerticalGradient { rect, .. } => Some(*rect),
            _ => None,
        })
        .expect("title has a scrim");
    assert_close(scrim.y1, image.y1, "scrim bottom");
    assert!(scrim.y0 > image.y0);

    let (origin, style) = list.find_text("Cookies").unwrap();
    assert_eq!(style.font_size, 40.0);
    assert_close(origin.x, 8.0, "title left");
    assert!(origin.y >= scrim.y0 && origin.y < image.y1);
}

#[test]
fn screen_long_title_shrinks() {
    let recipe = Recipe {
        title: LONG_TITLE.to_owned(),
        ..Recipe::sample()
    };
    let list = TestEnv::new().screen(&recipe, PHONE);
    let (_, style) = list.find_text(LONG_TITLE).unwrap();
    assert_eq!(style.font_size, 24.0);
    assert_eq!(style.max_lines, Some(3));
}

#[test]
fn screen_overlong_title_ends_in_ellipsis() {
    let title = format!("{LONG_TITLE} {LONG_TITLE}");
    let recipe = Recipe {
        title: title.clone(),
        ..Recipe::sample()
    };
    let list = TestEnv::new().screen(&recipe, PHONE);
    let (text, style) = list
        .items()
        .iter()
        .find_map(|item| match item {
            DrawItem::Text { text, style, .. } if style.max_lines == Some(3) => Some((text, *style)),
            _ => None,
        })
        .expect("screen has a title");
    assert_eq!(style.font_size, 16.0);
    let kept = text.strip_suffix(ELLIPSIS).expect("title is ellipsized");
    assert!(title.starts_with(kept), "{text:?}");
    assert!(kept.len() < title.len());

    let wrapped = HeuristicMeasurer::default().measure(text, &style, Area::unbounded_height(395.0));
    assert!(!wrapped.is_truncated(), "{wrapped:?}");
}

#[test]
fn screen_description_is_clipped() {
    let recipe = Recipe {
        description: Some("Crunchy on the outside, chewy in the middle. ".repeat(20)),
        ..Recipe::sample()
    };
    let list = TestEnv::new().screen(&recipe, PHONE);
    let clip = list
        .items()
        .iter()
        .find_map(|item| match item {
            DrawItem::PushClip(rect) => Some(*rect),
            _ => None,
        })
        .expect("description scrolls");
    assert!(clip.height() <= 80.0, "clip is {} tall", clip.height());
    let pushes = list.items().iter().filter(|item| matches!(item, DrawItem::PushClip(_))).count();
    let pops = list.items().iter().filter(|item| matches!(item, DrawItem::PopClip)).count();
    assert_eq!(pushes, pops);
}

#[test]
fn screen_without_description_skips_scroll() {
    let recipe = Recipe {
        description: None,
        ..Recipe::sample()
    };
    let with = TestEnv::new().screen(&Recipe::sample(), PHONE);
    let without = TestEnv::new().screen(&recipe, PHONE);
    let clips = |list: &recipe::DisplayList| {
        list.items()
            .iter()
            .filter(|item| matches!(item, DrawItem::PushClip(_)))
            .count()
    };
    assert_eq!(clips(&without) + 1, clips(&with));
}
