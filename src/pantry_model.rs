//! # Pantry and Recipe Data Model
//!
//! This module defines the data structures that flow through the engine:
//! pantry items built from manual entry and detections, the read-only recipe
//! catalog records, and the derived recommendations and scaled ingredients.
//!
//! ## Core Concepts
//!
//! - **PantryItem**: a normalized item name with an optional advisory quantity
//! - **Detection**: one labeled prediction from the vision classifier
//! - **Recipe**: an immutable catalog record with ordered ingredients
//! - **Recommendation**: a recipe scored against one pantry snapshot
//!
//! ## Usage
//!
//! ```rust
//! use pantry_chef::pantry_model::{PantryItem, RecipeIngredient};
//!
//! let eggs = PantryItem::new("egg").with_quantity(6.0);
//! assert_eq!(eggs.to_string(), "6 egg");
//!
//! let flour = RecipeIngredient::new("flour", 2.0, "cups");
//! assert_eq!(flour.to_string(), "2 cups flour");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::serving_scaler::format_quantity;

/// An entry of the pantry, keyed by its normalized name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Normalized name, the identity of the item
    pub name: String,

    /// Advisory quantity, never used for matching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

/// A labeled prediction emitted by the external vision classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Raw class label as reported by the model
    pub label: String,

    /// Model confidence in `[0, 1]`
    pub confidence: f32,
}

/// Result of post-processing one batch of detections
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionOutcome {
    /// Pantry candidates that survived filtering
    pub items: Vec<PantryItem>,

    /// Mean confidence of the surviving detections, 0 when none survived
    pub aggregate_confidence: f32,
}

/// One ingredient line of a catalog recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// An immutable record of the recipe catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier within the catalog
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub description: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Number of servings the ingredient quantities are written for
    pub base_servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// A recipe scored against one pantry snapshot
///
/// Borrowed from the catalog for the duration of a single scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation<'a> {
    pub recipe: &'a Recipe,

    /// Ingredient names the pantry satisfies, in recipe order
    pub matched_ingredients: Vec<String>,

    /// Ingredient names the pantry lacks, in recipe order
    pub missing_ingredients: Vec<String>,

    /// Fraction of distinct ingredients matched, in `[0, 1]`
    pub score: f64,
}

/// An ingredient rescaled to a serving count, with display rounding applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl PantryItem {
    /// Create a new pantry item with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: None,
        }
    }

    /// Attach an advisory quantity to this item
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Check if this item carries a quantity
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }
}

impl Detection {
    pub fn new(label: &str, confidence: f32) -> Self {
        Self {
            label: label.to_string(),
            confidence,
        }
    }
}

impl DetectionOutcome {
    /// The outcome of a batch in which nothing was confidently detected
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            aggregate_confidence: 0.0,
        }
    }

    /// Check if no detection survived post-processing
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RecipeIngredient {
    pub fn new(name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }
}

impl Recipe {
    /// Distinct ingredient names in recipe order
    pub fn ingredient_names(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Check if the recipe carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

impl Recommendation<'_> {
    /// Check if every ingredient of the recipe is in the pantry
    pub fn is_complete(&self) -> bool {
        self.missing_ingredients.is_empty() && !self.matched_ingredients.is_empty()
    }
}

impl fmt::Display for PantryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantity {
            Some(quantity) => write!(f, "{} {}", format_quantity(quantity), self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl fmt::Display for RecipeIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ingredient(f, &self.name, self.quantity, &self.unit)
    }
}

impl fmt::Display for ScaledIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ingredient(f, &self.name, self.quantity, &self.unit)
    }
}

impl fmt::Display for Recommendation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.0}% match, {} of {} ingredients)",
            self.recipe.name,
            self.score * 100.0,
            self.matched_ingredients.len(),
            self.matched_ingredients.len() + self.missing_ingredients.len()
        )
    }
}

fn write_ingredient(f: &mut fmt::Formatter<'_>, name: &str, quantity: f64, unit: &str) -> fmt::Result {
    if unit.is_empty() {
        write!(f, "{} {}", format_quantity(quantity), name)
    } else {
        write!(f, "{} {} {}", format_quantity(quantity), unit, name)
    }
}
