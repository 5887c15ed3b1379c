// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

/// A recipe as shown on the recipe screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Shown over the hero image.
    pub title: String,
    /// Free-form introduction shown under the image, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Location of the hero image.
    pub image_url: String,
    /// Yield, e.g. "32 cookies".
    pub servings: String,
    /// How long the recipe takes.
    pub time: CookingTime,
    /// Aggregate of user reviews.
    pub review: ReviewSummary,
    /// Ingredients in the order they are listed.
    pub ingredients: Vec<Ingredient>,
}

/// Durations are free text, e.g. "90 min".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingTime {
    /// Start to finish.
    pub overall: String,
    /// Hands-on time.
    pub active: String,
    /// Preparation before cooking starts.
    pub preparation: String,
}

/// Aggregate of user reviews.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// Average rating out of five.
    pub rating: f32,
    /// Number of reviews.
    pub count: u32,
}

/// An ingredient name and the amount needed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// What to use.
    pub name: String,
    /// How much of it, e.g. "2 cups".
    pub quantity: String,
}

impl Ingredient {
    /// Create an ingredient.
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

impl Recipe {
    /// The built-in recipe the screen shows when no other is supplied.
    pub fn sample() -> Self {
        Self {
            title: "Cookies".to_owned(),
            description: Some(
                "This chocolate chip cookie recipe is truly the best. Just take it from the \
                 14,000 members of the Allrecipes community who have given it rave reviews! \
                 These chocolate chip cookies are beloved because they're soft, chewy, and \
                 absolutely irresistible. Our top-rated recipe for chocolate chip cookies \
                 will quickly become your go-to."
                    .to_owned(),
            ),
            image_url: "https://images-gmi-pmc.edge-generalmills.com/087d17eb-500e-4b26-abd1-4f9ffa96a2c6.jpg"
                .to_owned(),
            servings: "32 cookies".to_owned(),
            time: CookingTime {
                overall: "90 min".to_owned(),
                active: "30 min".to_owned(),
                preparation: "5 min".to_owned(),
            },
            review: ReviewSummary {
                rating: 3.5,
                count: 500,
            },
            ingredients: vec![
                Ingredient::new("salted butter softened", "1 cup"),
                Ingredient::new("white sugar", "1 cup"),
                Ingredient::new("pure vanilla extract", "2 tsp"),
                Ingredient::new("eggs", "2"),
                Ingredient::new("flour", "3 cups"),
                Ingredient::new("baking soda", "1 tsp"),
                Ingredient::new("chocolate chips", "2 cups"),
            ],
        }
    }
}
