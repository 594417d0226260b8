//! # Recipe Catalog
//!
//! The read-only set of recipes the engine scores against. It is loaded once
//! by the host, validated, and never mutated afterwards.

use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::CatalogError;
use crate::pantry_model::Recipe;

const BUILTIN_CATALOG: &str = include_str!("../data/recipes.json");

/// A validated, immutable list of recipes in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog from recipes, checking catalog invariants
    ///
    /// Ids must be unique and non-empty, base servings at least 1, and every
    /// ingredient needs a non-empty name and a finite positive quantity.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();

        for recipe in &recipes {
            if recipe.id.trim().is_empty() {
                return Err(CatalogError::Invalid("recipe with empty id".to_string()));
            }
            if !ids.insert(recipe.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate recipe id '{}'",
                    recipe.id
                )));
            }
            if recipe.base_servings == 0 {
                return Err(CatalogError::Invalid(format!(
                    "recipe '{}' has zero base servings",
                    recipe.id
                )));
            }
            for ingredient in &recipe.ingredients {
                if ingredient.name.trim().is_empty() {
                    return Err(CatalogError::Invalid(format!(
                        "recipe '{}' has an unnamed ingredient",
                        recipe.id
                    )));
                }
                if !(ingredient.quantity.is_finite() && ingredient.quantity > 0.0) {
                    return Err(CatalogError::Invalid(format!(
                        "recipe '{}': ingredient '{}' has non-positive quantity {}",
                        recipe.id, ingredient.name, ingredient.quantity
                    )));
                }
            }
        }

        debug!("Validated catalog of {} recipes", recipes.len());
        Ok(Self { recipes })
    }

    /// Parse a catalog from a JSON array of recipes
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Read and parse a catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        info!("Loading recipe catalog from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The catalog bundled with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by id
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
