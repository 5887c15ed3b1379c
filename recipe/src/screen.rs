// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use autofit::{FontSizeRange, LayoutProbe, TextOverflow, TextStyle};
use peniko::color::palette;
use peniko::kurbo::Insets;
use peniko::Color;

use crate::tree::{AutoFitText, Button, CrossAxis, Flex, Image, MainAxis, Node, Stack, Surface, Text};
use crate::{IconKind, Ingredient, Recipe};

/// Colors and metrics of the recipe screen.
#[derive(Clone, Debug)]
pub struct ScreenConfig {
    /// Behind everything.
    pub background: Color,
    /// Cards and the main info panel.
    pub surface: Color,
    /// Text and icons on surfaces.
    pub on_surface: Color,
    /// The cook button.
    pub primary: Color,
    /// Text on the cook button.
    pub on_primary: Color,
    /// Gap between sections and cards.
    pub spacing: f64,
    /// Card corner radius.
    pub card_radius: f64,
    /// Card shadow depth.
    pub card_elevation: f64,
    /// Edge length of the section icons.
    pub icon_size: f64,
    /// Edge length of the review stars.
    pub star_size: f64,
    /// Candidate sizes for the title.
    pub title_sizes: FontSizeRange,
    /// Lines the title may take before it is cut off.
    pub title_max_lines: usize,
    /// The title may wrap only at or below this size.
    pub title_wrap_size: f32,
    /// Height cap of the scrolled description.
    pub description_max_height: f64,
    /// Height of the cook button.
    pub button_height: f64,
}

/// The title starts at 40 and shrinks to 16 in steps of 2.
pub const TITLE_FONT_SIZES: FontSizeRange = FontSizeRange::new_const(16.0, 40.0, 2.0);

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            background: palette::css::WHITE,
            surface: palette::css::WHITE,
            on_surface: palette::css::BLACK,
            primary: Color::from_rgb8(0x62, 0x00, 0xee),
            on_primary: palette::css::WHITE,
            spacing: 10.0,
            card_radius: 4.0,
            card_elevation: 1.0,
            icon_size: 22.0,
            star_size: 18.0,
            title_sizes: TITLE_FONT_SIZES,
            title_max_lines: 3,
            title_wrap_size: 24.0,
            description_max_height: 80.0,
            button_height: 50.0,
        }
    }
}

/// Build the screen showing `recipe`.
pub fn recipe_screen(recipe: &Recipe, config: &ScreenConfig) -> Node {
    let sides = Insets::new(config.spacing, 0.0, config.spacing, 0.0);
    let root = Flex::new(config.spacing)
        .cross(CrossAxis::Stretch)
        .with_child(main_info(recipe, config))
        .with_child(details(recipe, config).padded(sides))
        .with_flex_child(ingredients(&recipe.ingredients, config).padded(sides), 1.0)
        .with_child(actions(config).padded(sides))
        .with_child(Node::Button(Button {
            label: Text {
                text: "COOK".to_owned(),
                style: TextStyle::new(14.0).with_weight(500.0),
                color: config.on_primary,
            },
            height: config.button_height,
            color: config.primary,
        }));
    Node::Surface(Surface {
        color: config.background,
        radius: 0.0,
        elevation: 0.0,
        child: Box::new(Node::column(root)),
    })
}

/// The title predicate: shrink while the title is cut off, or while it wraps
/// at a size above `wrap_size`.
pub fn title_predicate(wrap_size: f32) -> impl Fn(&LayoutProbe) -> bool + Copy + Send + Sync {
    move |probe: &LayoutProbe| {
        probe.did_overflow_height || (probe.line_count > 1 && probe.font_size > wrap_size)
    }
}

fn main_info(recipe: &Recipe, config: &ScreenConfig) -> Node {
    let title = Node::AutoFitText(AutoFitText {
        text: recipe.title.clone(),
        style: TextStyle::new(config.title_sizes.max())
            .with_weight(800.0)
            .with_max_lines(config.title_max_lines, TextOverflow::Ellipsis),
        range: config.title_sizes,
        predicate: Arc::new(title_predicate(config.title_wrap_size)),
        color: palette::css::WHITE,
    });
    let scrim = vec![
        (0.0, Color::TRANSPARENT),
        (0.1, palette::css::BLACK.with_alpha(0.2)),
        (1.0, palette::css::BLACK.with_alpha(0.7)),
    ];
    let header = Node::Stack(Stack {
        base: Box::new(Node::Image(Image {
            url: recipe.image_url.clone(),
            description: "Recipe photo".to_owned(),
            aspect_ratio: 1.5,
        })),
        overlays: vec![Node::AlignBottom(Box::new(Node::Gradient(
            scrim,
            Box::new(title.padded(Insets::new(8.0, 24.0, 8.0, 8.0))),
        )))],
    });

    let mut column = Flex::new(0.0).with_child(header);
    if let Some(description) = &recipe.description {
        let text = Node::text(description, TextStyle::new(15.0), config.on_surface)
            .padded(Insets::new(10.0, 2.0, 10.0, 5.0));
        column = column.with_child(Node::Scroll {
            max_height: Some(config.description_max_height),
            child: Box::new(text),
        });
    }
    Node::Surface(Surface {
        color: config.surface,
        radius: 0.0,
        elevation: config.card_elevation,
        child: Box::new(Node::column(column)),
    })
}

fn details(recipe: &Recipe, config: &ScreenConfig) -> Node {
    let time = entry_card(
        config,
        &[
            (IconKind::Clock, "Overall cooking time"),
            (IconKind::Dining, "Active cooking time"),
            (IconKind::Kitchen, "Preparation time"),
        ],
        &[
            format!("Overall: {}", recipe.time.overall),
            format!("Active: {}", recipe.time.active),
            format!("Preparation: {}", recipe.time.preparation),
        ],
    );
    let servings = entry_card(
        config,
        &[(IconKind::Servings, "Number of servings")],
        &[recipe.servings.clone()],
    );

    let mut stars = Flex::new(0.0);
    for _ in 0..5 {
        stars = stars.with_child(Node::icon(
            IconKind::Star,
            config.star_size,
            None,
            config.on_surface,
        ));
    }
    let reviews = card(
        config,
        Node::column(
            Flex::new(0.0)
                .cross(CrossAxis::Center)
                .with_child(Node::row(stars))
                .with_child(Node::text(
                    format!("{} reviews", recipe.review.count),
                    TextStyle::new(14.0),
                    config.on_surface,
                )),
        )
        .padded(Insets::uniform(10.0)),
    );

    let side = Flex::new(config.spacing)
        .cross(CrossAxis::Stretch)
        .with_child(servings)
        .with_child(reviews);
    Node::row(
        Flex::new(config.spacing)
            .with_flex_child(time, 4.0)
            .with_flex_child(Node::column(side), 3.0),
    )
}

fn entry_card(config: &ScreenConfig, icons: &[(IconKind, &str)], texts: &[String]) -> Node {
    let mut icon_column = Flex::new(0.0)
        .main(MainAxis::SpaceAround)
        .cross(CrossAxis::Center);
    for (kind, description) in icons {
        icon_column = icon_column.with_child(Node::icon(
            *kind,
            config.icon_size,
            Some(*description),
            config.on_surface,
        ));
    }
    let mut text_column = Flex::new(0.0)
        .main(MainAxis::SpaceAround)
        .cross(CrossAxis::Start);
    for text in texts {
        text_column =
            text_column.with_child(Node::text(text, TextStyle::new(14.0), config.on_surface));
    }
    let row = Flex::new(config.spacing)
        .main(MainAxis::Center)
        .with_child(Node::column(icon_column))
        .with_child(Node::column(text_column));
    card(config, Node::row(row).padded(Insets::uniform(10.0)))
}

fn ingredients(ingredients: &[Ingredient], config: &ScreenConfig) -> Node {
    let mut list = Flex::new(0.0).cross(CrossAxis::Center).with_child(Node::text(
        "Ingredients",
        TextStyle::new(14.0).with_weight(700.0),
        config.on_surface,
    ));
    for ingredient in ingredients {
        let row = Flex::new(0.0)
            .main(MainAxis::SpaceBetween)
            .with_child(Node::text(
                &ingredient.name,
                TextStyle::new(14.0),
                config.on_surface,
            ))
            .with_child(Node::text(
                &ingredient.quantity,
                TextStyle::new(14.0),
                config.on_surface,
            ));
        list = list.with_child(Node::row(row));
    }
    card(
        config,
        Node::Scroll {
            max_height: None,
            child: Box::new(Node::column(list).padded(Insets::new(20.0, 10.0, 20.0, 10.0))),
        },
    )
}

fn actions(config: &ScreenConfig) -> Node {
    let icons = [
        (IconKind::Favorite, "Favorite"),
        (IconKind::Bookmark, "Bookmark"),
        (IconKind::Share, "Share"),
    ];
    let mut row = Flex::new(0.0)
        .main(MainAxis::SpaceEvenly)
        .cross(CrossAxis::Center);
    for (kind, description) in icons {
        row = row.with_child(Node::icon(
            kind,
            config.icon_size,
            Some(description),
            config.on_surface,
        ));
    }
    card(config, Node::row(row).padded(Insets::uniform(10.0)))
}

fn card(config: &ScreenConfig, child: Node) -> Node {
    Node::Surface(Surface {
        color: config.surface,
        radius: config.card_radius,
        elevation: config.card_elevation,
        child: Box::new(child),
    })
}

#[cfg(test)]
mod tests {
    use super::{recipe_screen, title_predicate, ScreenConfig, TITLE_FONT_SIZES};
    use crate::{layout, DrawItem, Recipe};
    use autofit::{fit, Area, HeuristicMeasurer, TextOverflow, TextStyle};
    use peniko::kurbo::Size;

    #[test]
    fn short_title_fits_at_max() {
        let style = TextStyle::new(40.0)
            .with_weight(800.0)
            .with_max_lines(3, TextOverflow::Ellipsis);
        let size = fit(
            &mut HeuristicMeasurer::default(),
            "Cookies",
            &style,
            Area::new(395.0, 242.0),
            TITLE_FONT_SIZES,
            &title_predicate(24.0),
        );
        assert_eq!(size, 40.0);
    }

    #[test]
    fn sample_screen_draws_every_section() {
        let screen = recipe_screen(&Recipe::sample(), &ScreenConfig::default());
        let list = layout(&screen, Size::new(411.0, 891.0), &mut HeuristicMeasurer::default());
        for text in ["Cookies", "Overall: 90 min", "32 cookies", "500 reviews", "Ingredients", "COOK"] {
            assert!(list.find_text(text).is_some(), "missing {text:?}");
        }
        let images = list
            .items()
            .iter()
            .filter(|item| matches!(item, DrawItem::Image { .. }))
            .count();
        assert_eq!(images, 1);
    }
}
