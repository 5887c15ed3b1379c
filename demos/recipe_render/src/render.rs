// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterizes a display list with tiny-skia, drawing glyph outlines from skrifa.

use anyhow::{Context, Result};
use autofit::parley::{GlyphRun, PositionedLayoutItem};
use autofit::ParleyMeasurer;
use peniko::kurbo::{Point, Rect, Size};
use peniko::Color;
use recipe::{DisplayList, DrawItem, IconKind};
use skrifa::instance::{LocationRef, NormalizedCoord, Size as FontSize};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::FontRef as ReadFontsRef;
use skrifa::{GlyphId, MetadataProvider};
use tiny_skia::{
    Color as TinySkiaColor, FillRule, GradientStop, LinearGradient, Mask, Paint, Path,
    PathBuilder, Pixmap, SpreadMode, Stroke, Transform,
};

const PLACEHOLDER: Color = Color::from_rgb8(0xd7, 0xcc, 0xc8);

/// Draws `list` into a new pixmap of `size` logical pixels at `scale`.
///
/// Text is re-laid out with `measurer` at the size chosen during layout, so it
/// must be the measurer the list was laid out with.
pub(crate) fn render(
    list: &DisplayList,
    size: Size,
    scale: f32,
    measurer: &mut ParleyMeasurer,
) -> Result<Pixmap> {
    let width = device_px(size.width, scale);
    let height = device_px(size.height, scale);
    let pixmap = Pixmap::new(width, height)
        .with_context(|| format!("cannot allocate a {width}x{height} pixmap"))?;
    let mut painter = Painter {
        pixmap,
        transform: Transform::from_scale(scale, scale),
        clips: Vec::new(),
    };

    for item in list.items() {
        match item {
            DrawItem::Fill {
                rect,
                radius,
                color,
            } => {
                if let Some(path) = rounded_rect(*rect, *radius) {
                    painter.fill(&path, &solid(*color));
                }
            }
            DrawItem::VerticalGradient { rect, stops } => {
                let stops = stops
                    .iter()
                    .map(|(offset, color)| GradientStop::new(*offset, to_tiny_skia(*color)))
                    .collect();
                let shader = LinearGradient::new(
                    point(Point::new(rect.x0, rect.y0)),
                    point(Point::new(rect.x0, rect.y1)),
                    stops,
                    SpreadMode::Pad,
                    Transform::identity(),
                );
                if let (Some(shader), Some(path)) = (shader, rounded_rect(*rect, 0.0)) {
                    let paint = Paint {
                        shader,
                        anti_alias: true,
                        ..Paint::default()
                    };
                    painter.fill(&path, &paint);
                }
            }
            DrawItem::Image { rect, url, .. } => {
                tracing::debug!(%url, "drawing image placeholder");
                if let Some(path) = rounded_rect(*rect, 0.0) {
                    painter.fill(&path, &solid(PLACEHOLDER));
                }
            }
            DrawItem::Text {
                origin,
                width,
                text,
                style,
                color,
            } => {
                // Allow for rounding in the width the text was measured at.
                let layout = measurer.layout(text, style, px(*width) + 0.5);
                // Ellipsized text already fits; clipped text drops whole lines.
                let visible = style.visible_lines(layout.len());
                if visible < layout.len() {
                    tracing::trace!(%text, visible, "clipping text");
                }
                let paint = solid(*color);
                for line in layout.lines().take(visible) {
                    for item in line.items() {
                        if let PositionedLayoutItem::GlyphRun(glyph_run) = item {
                            draw_glyph_run(&mut painter, &glyph_run, *origin, &paint)?;
                        }
                    }
                }
            }
            DrawItem::Icon { rect, icon, color } => draw_icon(&mut painter, *rect, *icon, *color),
            DrawItem::PushClip(rect) => painter.push_clip(*rect)?,
            DrawItem::PopClip => {
                painter.clips.pop();
            }
        }
    }
    Ok(painter.pixmap)
}

struct Painter {
    pixmap: Pixmap,
    transform: Transform,
    clips: Vec<Mask>,
}

impl Painter {
    fn fill(&mut self, path: &Path, paint: &Paint<'_>) {
        self.pixmap.fill_path(
            path,
            paint,
            FillRule::Winding,
            self.transform,
            self.clips.last(),
        );
    }

    fn stroke(&mut self, path: &Path, paint: &Paint<'_>, width: f32) {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, paint, &stroke, self.transform, self.clips.last());
    }

    fn push_clip(&mut self, rect: Rect) -> Result<()> {
        let path = rounded_rect(rect, 0.0).context("clip rectangle is empty")?;
        let mask = match self.clips.last() {
            Some(outer) => {
                let mut mask = outer.clone();
                mask.intersect_path(&path, FillRule::Winding, true, self.transform);
                mask
            }
            None => {
                let mut mask = Mask::new(self.pixmap.width(), self.pixmap.height())
                    .context("cannot allocate clip mask")?;
                mask.fill_path(&path, FillRule::Winding, true, self.transform);
                mask
            }
        };
        self.clips.push(mask);
        Ok(())
    }
}

fn draw_glyph_run(
    painter: &mut Painter,
    glyph_run: &GlyphRun<'_, ()>,
    origin: Point,
    paint: &Paint<'_>,
) -> Result<()> {
    let run = glyph_run.run();
    let font = run.font();
    let font_size = run.font_size();
    let normalized_coords = run
        .normalized_coords()
        .iter()
        .map(|coord| NormalizedCoord::from_bits(*coord))
        .collect::<Vec<_>>();

    let font_ref = ReadFontsRef::from_index(font.data.as_ref(), font.index)
        .context("glyph run refers to an unreadable font")?;
    let outlines = font_ref.outline_glyphs();

    let mut pen = GlyphPen::default();
    for glyph in glyph_run.positioned_glyphs() {
        let Some(outline) = outlines.get(GlyphId::from(glyph.id)) else {
            continue;
        };
        pen.x = px(origin.x) + glyph.x;
        pen.y = px(origin.y) + glyph.y;
        let settings = DrawSettings::unhinted(
            FontSize::new(font_size),
            LocationRef::new(&normalized_coords),
        );
        if let Err(err) = outline.draw(settings, &mut pen) {
            tracing::warn!(glyph = glyph.id, "skipping glyph: {err}");
        }
    }
    if let Some(path) = pen.builder.finish() {
        painter.fill(&path, paint);
    }
    Ok(())
}

/// Collects glyph outlines into one path, flipping the font's y-up space.
#[derive(Default)]
struct GlyphPen {
    builder: PathBuilder,
    x: f32,
    y: f32,
}

impl OutlinePen for GlyphPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.x + x, self.y - y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.x + x, self.y - y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.x + cx0, self.y - cy0, self.x + x, self.y - y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.x + cx0,
            self.y - cy0,
            self.x + cx1,
            self.y - cy1,
            self.x + x,
            self.y - y,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

fn draw_icon(painter: &mut Painter, rect: Rect, icon: IconKind, color: Color) {
    let paint = solid(color);
    let (cx, cy) = (px(rect.center().x), px(rect.center().y));
    let r = px(rect.width().min(rect.height()) / 2.0);
    let mut pb = PathBuilder::new();
    match icon {
        IconKind::Star => {
            for i in 0_u8..10 {
                let radius = if i % 2 == 0 { r } else { r * 0.45 };
                let angle = core::f32::consts::PI * (f32::from(i) / 5.0 - 0.5);
                let (x, y) = (cx + radius * angle.cos(), cy + radius * angle.sin());
                if i == 0 {
                    pb.move_to(x, y);
                } else {
                    pb.line_to(x, y);
                }
            }
            pb.close();
            if let Some(path) = pb.finish() {
                painter.fill(&path, &paint);
            }
            return;
        }
        IconKind::Clock => {
            pb.push_circle(cx, cy, r * 0.8);
            pb.move_to(cx, cy - r * 0.5);
            pb.line_to(cx, cy);
            pb.line_to(cx + r * 0.4, cy);
        }
        IconKind::Dining => {
            pb.move_to(cx - r * 0.4, cy - r * 0.8);
            pb.line_to(cx - r * 0.4, cy + r * 0.8);
            pb.move_to(cx + r * 0.4, cy - r * 0.8);
            pb.line_to(cx + r * 0.4, cy + r * 0.8);
        }
        IconKind::Kitchen => {
            if let Some(fridge) = tiny_skia::Rect::from_ltrb(cx - r * 0.5, cy - r * 0.8, cx + r * 0.5, cy + r * 0.8) {
                pb.push_rect(fridge);
            }
            pb.move_to(cx - r * 0.5, cy - r * 0.2);
            pb.line_to(cx + r * 0.5, cy - r * 0.2);
        }
        IconKind::Servings => {
            pb.push_circle(cx, cy, r * 0.7);
            pb.push_circle(cx, cy, r * 0.35);
        }
        IconKind::Favorite => {
            pb.move_to(cx, cy + r * 0.7);
            pb.cubic_to(cx - r * 1.2, cy - r * 0.1, cx - r * 0.5, cy - r * 0.9, cx, cy - r * 0.35);
            pb.cubic_to(cx + r * 0.5, cy - r * 0.9, cx + r * 1.2, cy - r * 0.1, cx, cy + r * 0.7);
            pb.close();
        }
        IconKind::Bookmark => {
            pb.move_to(cx - r * 0.5, cy - r * 0.8);
            pb.line_to(cx + r * 0.5, cy - r * 0.8);
            pb.line_to(cx + r * 0.5, cy + r * 0.8);
            pb.line_to(cx, cy + r * 0.4);
            pb.line_to(cx - r * 0.5, cy + r * 0.8);
            pb.close();
        }
        IconKind::Share => {
            let nodes = [
                (cx + r * 0.5, cy - r * 0.6),
                (cx - r * 0.5, cy),
                (cx + r * 0.5, cy + r * 0.6),
            ];
            pb.move_to(nodes[0].0, nodes[0].1);
            pb.line_to(nodes[1].0, nodes[1].1);
            pb.line_to(nodes[2].0, nodes[2].1);
            for (x, y) in nodes {
                pb.push_circle(x, y, r * 0.2);
            }
        }
    }
    if let Some(path) = pb.finish() {
        painter.stroke(&path, &paint, (r / 6.0).max(1.0));
    }
}

/// A rectangle with circular corners; `None` if it has no area.
fn rounded_rect(rect: Rect, radius: f64) -> Option<Path> {
    let (x0, y0, x1, y1) = (px(rect.x0), px(rect.y0), px(rect.x1), px(rect.y1));
    if radius <= 0.0 {
        return tiny_skia::Rect::from_ltrb(x0, y0, x1, y1).map(PathBuilder::from_rect);
    }
    let r = px(radius).min((x1 - x0) / 2.0).min((y1 - y0) / 2.0);
    let mut pb = PathBuilder::new();
    pb.move_to(x0 + r, y0);
    pb.line_to(x1 - r, y0);
    pb.quad_to(x1, y0, x1, y0 + r);
    pb.line_to(x1, y1 - r);
    pb.quad_to(x1, y1, x1 - r, y1);
    pb.line_to(x0 + r, y1);
    pb.quad_to(x0, y1, x0, y1 - r);
    pb.line_to(x0, y0 + r);
    pb.quad_to(x0, y0, x0 + r, y0);
    pb.close();
    pb.finish()
}

fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_tiny_skia(color));
    paint.anti_alias = true;
    paint
}

fn point(point: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(px(point.x), px(point.y))
}

/// Layout coordinates in the single precision tiny-skia draws with.
#[expect(
    clippy::cast_possible_truncation,
    reason = "screen coordinates are far inside f32 range"
)]
fn px(value: f64) -> f32 {
    value as f32
}

/// Whole device pixels covering `logical` pixels at `scale`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "`as` saturates, and Pixmap::new rejects sizes too large to allocate"
)]
fn device_px(logical: f64, scale: f32) -> u32 {
    (logical * f64::from(scale)).ceil() as u32
}

fn to_tiny_skia(color: Color) -> TinySkiaColor {
    let rgba = color.to_rgba8();
    TinySkiaColor::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}
