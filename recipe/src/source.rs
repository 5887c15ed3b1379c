// Copyright 2026 the Recipe Library Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use crate::Recipe;

/// Supplies the recipe the screen displays.
pub trait RecipeSource {
    /// Produce the recipe.
    fn load(&self) -> Result<Recipe, LoadRecipeError>;
}

/// A source that always returns the same recipe.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticRecipe(pub Recipe);

impl Default for StaticRecipe {
    fn default() -> Self {
        Self(Recipe::sample())
    }
}

impl RecipeSource for StaticRecipe {
    fn load(&self) -> Result<Recipe, LoadRecipeError> {
        Ok(self.0.clone())
    }
}

/// A source reading a JSON document from the local file system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonRecipe {
    path: PathBuf,
}

impl JsonRecipe {
    /// Read the recipe at `path` on every [`load`](RecipeSource::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a recipe from a JSON string.
    pub fn parse(json: &str) -> Result<Recipe, LoadRecipeError> {
        serde_json::from_str(json).map_err(|err| LoadRecipeError {
            kind: LoadRecipeErrorKind::Parse,
            path: None,
            source: Box::new(err),
        })
    }
}

impl RecipeSource for JsonRecipe {
    fn load(&self) -> Result<Recipe, LoadRecipeError> {
        let json = std::fs::read_to_string(&self.path).map_err(|err| LoadRecipeError {
            kind: LoadRecipeErrorKind::Io,
            path: Some(self.path.clone()),
            source: Box::new(err),
        })?;
        let recipe = Self::parse(&json).map_err(|err| err.with_path(&self.path))?;
        log::debug!("loaded recipe {:?} from {}", recipe.title, self.path.display());
        Ok(recipe)
    }
}

/// Error returned when a [`RecipeSource`] cannot produce a recipe.
#[derive(Debug)]
pub struct LoadRecipeError {
    kind: LoadRecipeErrorKind,
    path: Option<PathBuf>,
    source: Box<dyn core::error::Error + Send + Sync + 'static>,
}

impl LoadRecipeError {
    /// The category of this error.
    pub fn kind(&self) -> LoadRecipeErrorKind {
        self.kind
    }

    /// The file involved, if the source reads one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_owned());
        self
    }
}

impl core::fmt::Display for LoadRecipeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let what = match self.kind {
            LoadRecipeErrorKind::Io => "could not read recipe",
            LoadRecipeErrorKind::Parse => "invalid recipe",
        };
        match &self.path {
            Some(path) => write!(f, "{what} {}: {}", path.display(), self.source),
            None => write!(f, "{what}: {}", self.source),
        }
    }
}

impl core::error::Error for LoadRecipeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&*self.source)
    }
}

/// The category of a [`LoadRecipeError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadRecipeErrorKind {
    /// The recipe could not be read.
    Io,

    /// The recipe was read but is not a valid recipe document.
    Parse,
}
