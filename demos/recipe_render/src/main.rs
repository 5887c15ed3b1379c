// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lays out the recipe screen with Parley and paints it to a PNG with Tiny-Skia.
//!
//! ```text
//! cargo run -p recipe_render -- --recipe cookies.json --font Roboto.ttf -o screen.png
//! ```
//!
//! Set `RUST_LOG=autofit=trace` to watch the title search probe each size.

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use autofit::ParleyMeasurer;
use clap::Parser;
use peniko::kurbo::Size;
use recipe::{layout, recipe_screen, JsonRecipe, RecipeSource, ScreenConfig, StaticRecipe};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Render the recipe screen to a PNG")]
struct Args {
    /// Recipe to show, as JSON. Defaults to the built-in sample.
    #[arg(long)]
    recipe: Option<PathBuf>,
    /// Font file used for all text. Defaults to the system UI font.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Screen width in logical pixels.
    #[arg(long, default_value_t = 411.0)]
    width: f64,
    /// Screen height in logical pixels.
    #[arg(long, default_value_t = 891.0)]
    height: f64,
    /// Device pixels per logical pixel.
    #[arg(long, default_value_t = 2.0)]
    scale: f32,
    /// Where to write the image.
    #[arg(short, long, default_value = "recipe.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    anyhow::ensure!(
        args.width > 0.0 && args.height > 0.0 && args.scale > 0.0,
        "screen size and scale must be positive"
    );

    let recipe = match &args.recipe {
        Some(path) => JsonRecipe::new(path).load()?,
        None => StaticRecipe::default().load()?,
    };
    tracing::info!(title = %recipe.title, "loaded recipe");

    let mut measurer = ParleyMeasurer::new();
    if let Some(path) = &args.font {
        let data = std::fs::read(path)
            .with_context(|| format!("could not read font {}", path.display()))?;
        let family = measurer
            .register_font(data)
            .with_context(|| format!("{} contains no usable font", path.display()))?;
        tracing::info!(%family, "using font");
    }

    let size = Size::new(args.width, args.height);
    let screen = recipe_screen(&recipe, &ScreenConfig::default());
    let list = layout(&screen, size, &mut measurer);
    if let Some((_, title)) = list.find_text(&recipe.title) {
        tracing::info!(font_size = title.font_size, "fitted title");
    }
    tracing::debug!(items = list.len(), "laid out screen");

    let pixmap = render::render(&list, size, args.scale, &mut measurer)?;
    pixmap
        .save_png(&args.output)
        .with_context(|| format!("could not write {}", args.output.display()))?;
    tracing::info!(path = %args.output.display(), "wrote image");
    Ok(())
}
