// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;
use std::ptr;
use std::sync::Arc;

use autofit::{ellipsize, Area, FitOutcome, FitPredicate, LayoutProbe, TextMeasurer, TextStyle};
use peniko::color::palette;
use peniko::kurbo::{Insets, Point, Rect, Size};
use peniko::Color;

use crate::tree::{AutoFitText, CrossAxis, Flex, MainAxis, Node};
use crate::{DisplayList, DrawItem};

/// Lay out `root` in a screen of `size` and return what to draw.
///
/// Text is measured with `measurer`; drawing the result with a different
/// measurer gives inconsistent line breaks.
pub fn layout<M: TextMeasurer + ?Sized>(root: &Node, size: Size, measurer: &mut M) -> DisplayList {
    let mut cx = LayoutCx {
        measurer,
        list: DisplayList::new(),
        labels: HashMap::new(),
    };
    cx.place(root, size.to_rect());
    log::debug!("laid out {}x{} screen into {} items", size.width, size.height, cx.list.len());
    cx.list
}

struct LayoutCx<'a, M: ?Sized> {
    measurer: &'a mut M,
    list: DisplayList,
    /// One label per auto-fit node, keyed by the node's address in the tree.
    labels: HashMap<*const AutoFitText, autofit::AutoFitText>,
}

impl<M: TextMeasurer + ?Sized> LayoutCx<'_, M> {
    /// The natural size of `node` within `max`.
    fn measure(&mut self, node: &Node, max: Size) -> Size {
        match node {
            Node::Column(flex) => {
                let unbounded = Size::new(max.width, f64::INFINITY);
                let mut width: f64 = 0.0;
                let mut height = gaps(flex);
                for child in &flex.children {
                    let size = self.measure(&child.node, unbounded);
                    width = width.max(size.width);
                    height += size.height;
                }
                if flex.cross == CrossAxis::Stretch && max.width.is_finite() {
                    width = max.width;
                }
                Size::new(width, height)
            }
            Node::Row(flex) => {
                let widths = self.row_widths(flex, max.width);
                let mut height: f64 = 0.0;
                for (child, width) in flex.children.iter().zip(&widths) {
                    height = height.max(self.measure(&child.node, Size::new(*width, max.height)).height);
                }
                let fills = flex.main != MainAxis::Start
                    || flex.children.iter().any(|child| child.weight.is_some());
                let width = if fills && max.width.is_finite() {
                    max.width
                } else {
                    widths.iter().sum::<f64>() + gaps(flex)
                };
                Size::new(width, height)
            }
            Node::Stack(stack) => self.measure(&stack.base, max),
            Node::Padding(insets, child) => {
                let inner = self.measure(child, shrink(max, *insets));
                Size::new(
                    inner.width + insets.x_value(),
                    inner.height + insets.y_value(),
                )
            }
            Node::Surface(surface) => self.measure(&surface.child, max),
            Node::Gradient(_, child) | Node::AlignBottom(child) => self.measure(child, max),
            Node::Scroll { max_height, child } => {
                let content = self.measure(child, Size::new(max.width, f64::INFINITY));
                let cap = max_height.unwrap_or(f64::INFINITY).min(max.height);
                Size::new(content.width, content.height.min(cap))
            }
            Node::Text(text) => {
                let probe = self
                    .measurer
                    .measure(&text.text, &text.style, area(Size::new(max.width, f64::INFINITY)));
                Size::new(f64::from(probe.width).min(max.width), f64::from(probe.height))
            }
            Node::AutoFitText(text) => {
                let outcome = self.fit(text, area(max));
                Size::new(
                    f64::from(outcome.probe.width).min(max.width),
                    f64::from(outcome.probe.height),
                )
            }
            Node::Image(image) => Size::new(max.width, max.width / image.aspect_ratio),
            Node::Icon(icon) => Size::new(icon.size, icon.size),
            Node::Button(button) => Size::new(max.width, button.height),
        }
    }

    /// Fit `text` into `area` through its label, which skips the search when
    /// the area is the one it last fitted.
    fn fit(&mut self, text: &AutoFitText, area: Area) -> FitOutcome {
        let label = self
            .labels
            .entry(ptr::from_ref(text))
            .or_insert_with(|| label_for(text));
        label.layout(&mut *self.measurer, area)
    }

    fn push_text(&mut self, text: &str, style: TextStyle, rect: Rect, color: Color) {
        let text = ellipsize(&mut *self.measurer, text, &style, area(rect.size())).into_owned();
        self.list.push(DrawItem::Text {
            origin: rect.origin(),
            width: rect.width(),
            text,
            style,
            color,
        });
    }

    /// Widths of a row's children: natural for unweighted ones, a weighted
    /// share of what is left for the rest.
    fn row_widths(&mut self, flex: &Flex, width: f64) -> Vec<f64> {
        let unbounded = Size::new(width, f64::INFINITY);
        let mut widths = Vec::with_capacity(flex.children.len());
        let mut used = gaps(flex);
        let mut total_weight = 0.0;
        for child in &flex.children {
            match child.weight {
                Some(weight) if width.is_finite() => {
                    total_weight += weight;
                    widths.push(0.0);
                }
                _ => {
                    let natural = self.measure(&child.node, unbounded).width;
                    used += natural;
                    widths.push(natural);
                }
            }
        }
        if total_weight > 0.0 {
            let free = (width - used).max(0.0);
            for (child, slot) in flex.children.iter().zip(&mut widths) {
                if let Some(weight) = child.weight {
                    *slot = free * weight / total_weight;
                }
            }
        }
        widths
    }

    /// Heights of a column's children: natural for unweighted ones, a
    /// weighted share of what is left for the rest when `height` is bounded.
    fn column_heights(&mut self, flex: &Flex, rect: Rect) -> Vec<f64> {
        let height = rect.height();
        let unbounded = Size::new(rect.width(), f64::INFINITY);
        let mut heights = Vec::with_capacity(flex.children.len());
        let mut used = gaps(flex);
        let mut total_weight = 0.0;
        for child in &flex.children {
            match child.weight {
                Some(weight) if height.is_finite() => {
                    total_weight += weight;
                    heights.push(0.0);
                }
                _ => {
                    let natural = self.measure(&child.node, unbounded).height;
                    used += natural;
                    heights.push(natural);
                }
            }
        }
        if total_weight > 0.0 {
            let free = (height - used).max(0.0);
            for (child, slot) in flex.children.iter().zip(&mut heights) {
                if let Some(weight) = child.weight {
                    *slot = free * weight / total_weight;
                }
            }
        }
        heights
    }

    /// Lay out `node` into `rect`, appending its draw items.
    fn place(&mut self, node: &Node, rect: Rect) {
        match node {
            Node::Column(flex) => {
                let heights = self.column_heights(flex, rect);
                let free = rect.height() - heights.iter().sum::<f64>() - gaps(flex);
                let (mut y, gap) = distribute(flex.main, free, heights.len());
                y += rect.y0;
                for (child, height) in flex.children.iter().zip(heights) {
                    let (x0, x1) = match flex.cross {
                        CrossAxis::Stretch => (rect.x0, rect.x1),
                        cross => {
                            let width = self
                                .measure(&child.node, Size::new(rect.width(), height))
                                .width;
                            let x0 = if cross == CrossAxis::Center {
                                rect.x0 + (rect.width() - width) / 2.0
                            } else {
                                rect.x0
                            };
                            (x0, x0 + width)
                        }
                    };
                    self.place(&child.node, Rect::new(x0, y, x1, y + height));
                    y += height + flex.spacing + gap;
                }
            }
            Node::Row(flex) => {
                let widths = self.row_widths(flex, rect.width());
                let free = rect.width() - widths.iter().sum::<f64>() - gaps(flex);
                let (mut x, gap) = distribute(flex.main, free, widths.len());
                x += rect.x0;
                for (child, width) in flex.children.iter().zip(widths) {
                    let (y0, y1) = match flex.cross {
                        CrossAxis::Stretch => (rect.y0, rect.y1),
                        cross => {
                            let height = self
                                .measure(&child.node, Size::new(width, rect.height()))
                                .height;
                            let y0 = if cross == CrossAxis::Center {
                                rect.y0 + (rect.height() - height) / 2.0
                            } else {
                                rect.y0
                            };
                            (y0, y0 + height)
                        }
                    };
                    self.place(&child.node, Rect::new(x, y0, x + width, y1));
                    x += width + flex.spacing + gap;
                }
            }
            Node::Stack(stack) => {
                self.place(&stack.base, rect);
                for overlay in &stack.overlays {
                    self.place(overlay, rect);
                }
            }
            Node::Padding(insets, child) => {
                let inner = Rect::new(
                    rect.x0 + insets.x0,
                    rect.y0 + insets.y0,
                    (rect.x1 - insets.x1).max(rect.x0 + insets.x0),
                    (rect.y1 - insets.y1).max(rect.y0 + insets.y0),
                );
                self.place(child, inner);
            }
            Node::Surface(surface) => {
                if surface.elevation > 0.0 {
                    self.list.push(DrawItem::Fill {
                        rect: rect + Insets::new(0.0, 0.0, 0.0, surface.elevation),
                        radius: surface.radius,
                        color: palette::css::BLACK.with_alpha(0.12),
                    });
                }
                self.list.push(DrawItem::Fill {
                    rect,
                    radius: surface.radius,
                    color: surface.color,
                });
                self.place(&surface.child, rect);
            }
            Node::Gradient(stops, child) => {
                self.list.push(DrawItem::VerticalGradient {
                    rect,
                    stops: stops.clone(),
                });
                self.place(child, rect);
            }
            Node::AlignBottom(child) => {
                let size = self.measure(child, rect.size());
                let height = size.height.min(rect.height());
                self.place(child, Rect::new(rect.x0, rect.y1 - height, rect.x1, rect.y1));
            }
            Node::Scroll { child, .. } => {
                let content = self.measure(child, Size::new(rect.width(), f64::INFINITY));
                self.list.push(DrawItem::PushClip(rect));
                self.place(
                    child,
                    Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + content.height),
                );
                self.list.push(DrawItem::PopClip);
            }
            Node::Text(text) => self.push_text(&text.text, text.style, rect, text.color),
            Node::AutoFitText(text) => {
                let area = area(rect.size());
                // Keep the size chosen while measuring if the rect holds it.
                let measured = self
                    .labels
                    .get(&ptr::from_ref(text))
                    .and_then(autofit::AutoFitText::last_fit);
                let outcome = match measured {
                    Some((measured_area, outcome))
                        if measured_area.width == area.width
                            && outcome.probe.height <= area.height =>
                    {
                        outcome
                    }
                    _ => self.fit(text, area),
                };
                log::debug!(
                    "fitted {:?} at {} ({} lines, fitted: {})",
                    text.text,
                    outcome.font_size,
                    outcome.probe.line_count,
                    outcome.fitted,
                );
                let style = text.style.with_font_size(outcome.font_size);
                self.push_text(&text.text, style, rect, text.color);
            }
            Node::Image(image) => self.list.push(DrawItem::Image {
                rect,
                url: image.url.clone(),
                description: image.description.clone(),
            }),
            Node::Icon(icon) => {
                let origin = Point::new(
                    rect.x0 + (rect.width() - icon.size) / 2.0,
                    rect.y0 + (rect.height() - icon.size) / 2.0,
                );
                self.list.push(DrawItem::Icon {
                    rect: Rect::from_origin_size(origin, (icon.size, icon.size)),
                    icon: icon.kind,
                    color: icon.color,
                });
            }
            Node::Button(button) => {
                self.list.push(DrawItem::Fill {
                    rect,
                    radius: 0.0,
                    color: button.color,
                });
                let label = &button.label;
                let probe = self
                    .measurer
                    .measure(&label.text, &label.style, area(rect.size()));
                let (width, height) = (f64::from(probe.width), f64::from(probe.height));
                self.list.push(DrawItem::Text {
                    origin: Point::new(
                        rect.x0 + (rect.width() - width) / 2.0,
                        rect.y0 + (rect.height() - height) / 2.0,
                    ),
                    width: width.min(rect.width()),
                    text: label.text.clone(),
                    style: label.style,
                    color: label.color,
                });
            }
        }
    }
}

fn label_for(text: &AutoFitText) -> autofit::AutoFitText {
    let predicate = Arc::clone(&text.predicate);
    autofit::AutoFitText::new(
        text.text.clone(),
        text.style,
        text.range,
        move |probe: &LayoutProbe| predicate.overflows(probe),
    )
}

/// Total fixed spacing between the children of `flex`.
fn gaps(flex: &Flex) -> f64 {
    flex.spacing * flex.children.len().saturating_sub(1) as f64
}

/// Leading offset and extra gap for `count` children sharing `free` space.
fn distribute(main: MainAxis, free: f64, count: usize) -> (f64, f64) {
    let free = if free.is_finite() { free.max(0.0) } else { 0.0 };
    let count = count as f64;
    match main {
        MainAxis::Start => (0.0, 0.0),
        MainAxis::Center => (free / 2.0, 0.0),
        MainAxis::SpaceBetween if count > 1.0 => (0.0, free / (count - 1.0)),
        MainAxis::SpaceBetween => (0.0, 0.0),
        MainAxis::SpaceEvenly => {
            let gap = free / (count + 1.0);
            (gap, gap)
        }
        MainAxis::SpaceAround if count > 0.0 => {
            let gap = free / count;
            (gap / 2.0, gap)
        }
        MainAxis::SpaceAround => (0.0, 0.0),
    }
}

fn shrink(size: Size, insets: Insets) -> Size {
    Size::new(
        (size.width - insets.x_value()).max(0.0),
        (size.height - insets.y_value()).max(0.0),
    )
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "screen coordinates are well within f32 range"
)]
fn area(size: Size) -> Area {
    Area::new(size.width as f32, size.height as f32)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{distribute, layout};
    use crate::tree::{AutoFitText, Flex, MainAxis, Node};
    use crate::{DrawItem, IconKind};
    use autofit::{
        predicate, Area, FontSizeRange, HeuristicMeasurer, LayoutProbe, TextMeasurer,
        TextOverflow, TextStyle,
    };
    use peniko::color::palette;
    use peniko::kurbo::{Rect, Size};

    /// Records the size of every measurement.
    #[derive(Default)]
    struct Recorder {
        sizes: Vec<f32>,
    }

    impl TextMeasurer for Recorder {
        fn measure(&mut self, text: &str, style: &TextStyle, area: Area) -> LayoutProbe {
            self.sizes.push(style.font_size);
            HeuristicMeasurer::default().measure(text, style, area)
        }
    }

    fn auto_fit(text: &str, style: TextStyle) -> Node {
        Node::AutoFitText(AutoFitText {
            text: text.to_owned(),
            style,
            range: FontSizeRange::new(16.0, 40.0, 2.0).unwrap(),
            predicate: Arc::new(predicate::overflow()),
            color: palette::css::BLACK,
        })
    }

    fn icon() -> Node {
        Node::icon(IconKind::Star, 10.0, None, palette::css::BLACK)
    }

    fn icon_rects(root: &Node, size: Size) -> Vec<Rect> {
        layout(root, size, &mut HeuristicMeasurer::default())
            .items()
            .iter()
            .filter_map(|item| match item {
                DrawItem::Icon { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn distribute_space_evenly() {
        assert_eq!(distribute(MainAxis::SpaceEvenly, 40.0, 3), (10.0, 10.0));
        assert_eq!(distribute(MainAxis::SpaceBetween, 40.0, 3), (0.0, 20.0));
        assert_eq!(distribute(MainAxis::SpaceAround, 30.0, 3), (5.0, 10.0));
        assert_eq!(distribute(MainAxis::Center, 30.0, 3), (15.0, 0.0));
        assert_eq!(distribute(MainAxis::Start, -5.0, 3), (0.0, 0.0));
    }

    #[test]
    fn row_spaces_icons_evenly() {
        let row = Node::row(
            Flex::new(0.0)
                .main(MainAxis::SpaceEvenly)
                .with_child(icon())
                .with_child(icon())
                .with_child(icon()),
        );
        let rects = icon_rects(&row, Size::new(70.0, 10.0));
        let xs: Vec<f64> = rects.iter().map(|r| r.x0).collect();
        assert_eq!(xs, vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn weighted_children_share_leftover_height() {
        let column = Node::column(
            Flex::new(10.0)
                .with_child(icon())
                .with_flex_child(icon(), 1.0)
                .with_flex_child(icon(), 3.0),
        );
        let rects = icon_rects(&column, Size::new(10.0, 110.0));
        // 110 - 10 (fixed) - 20 (gaps) = 80 shared 1:3, icons are centered in their slots.
        assert_eq!(rects[1].center().y, 20.0 + 10.0);
        assert_eq!(rects[2].center().y, 20.0 + 20.0 + 10.0 + 30.0);
    }

    #[test]
    fn scroll_clips_to_cap() {
        let scroll = Node::Scroll {
            max_height: Some(15.0),
            child: Box::new(Node::column(Flex::new(0.0).with_child(icon()).with_child(icon()))),
        };
        let column = Node::column(Flex::new(0.0).with_child(scroll).with_child(icon()));
        let list = layout(&column, Size::new(10.0, 100.0), &mut HeuristicMeasurer::default());
        assert!(matches!(list.items()[0], DrawItem::PushClip(r) if r.height() == 15.0));
        let rects = icon_rects(&column, Size::new(10.0, 100.0));
        assert_eq!(rects[2].y0, 15.0);
    }

    #[test]
    fn auto_fit_text_is_fitted_once_per_pass() {
        let root = Node::AlignBottom(Box::new(auto_fit("Cookies", TextStyle::new(40.0))));
        let mut recorder = Recorder::default();
        let list = layout(&root, Size::new(400.0, 200.0), &mut recorder);
        assert_eq!(recorder.sizes, [40.0]);
        let (origin, style) = list.find_text("Cookies").unwrap();
        assert_eq!(style.font_size, 40.0);
        assert!(origin.y > 100.0, "title placed at {}", origin.y);
    }

    #[test]
    fn auto_fit_text_ellipsizes_at_min_size() {
        // 0.6 em at 16 px: 9.6 px per character, so a 100 px line holds ten.
        let text = "aaaa bbbb cccc dddd eeee ffff";
        let clip = TextStyle::new(40.0).with_max_lines(2, TextOverflow::Clip);
        let ellipsis = clip.with_max_lines(2, TextOverflow::Ellipsis);
        let size = Size::new(100.0, 500.0);

        let clipped = layout(&auto_fit(text, clip), size, &mut HeuristicMeasurer::default());
        assert!(clipped.find_text(text).is_some());

        let list = layout(&auto_fit(text, ellipsis), size, &mut HeuristicMeasurer::default());
        let (drawn, _, style) = list.texts().next().unwrap();
        assert_eq!(style.font_size, 16.0);
        assert_eq!(drawn, "aaaa bbbb cccc dddd\u{2026}");
    }
}
