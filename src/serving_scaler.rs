//! # Serving Scaler
//!
//! Rescales a recipe's ingredient quantities to a serving count and applies
//! the display rounding policy:
//!
//! - below 1: two decimal places
//! - whole numbers: shown as integers
//! - anything else: one decimal place
//!
//! A positive quantity never rounds down to zero; the smallest displayed
//! amount is 0.01.

use log::debug;
use std::ops::RangeInclusive;

use crate::errors::ValidationError;
use crate::pantry_model::{Recipe, ScaledIngredient};

const MIN_DISPLAY_QUANTITY: f64 = 0.01;

/// Scale a recipe to `target_servings`
///
/// Any positive serving count is accepted, including values outside
/// [`serving_range`]. Only a zero target or a recipe with zero base
/// servings is rejected.
///
/// # Examples
///
/// ```rust
/// use pantry_chef::{scale, Catalog};
///
/// let catalog = Catalog::builtin()?;
/// let recipe = catalog.get("avocado-toast").unwrap();
/// let doubled = scale(recipe, recipe.base_servings * 2)?;
/// assert_eq!(doubled.len(), recipe.ingredients.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn scale(recipe: &Recipe, target_servings: u32) -> Result<Vec<ScaledIngredient>, ValidationError> {
    if target_servings == 0 {
        return Err(ValidationError::NonPositiveTargetServings(target_servings));
    }
    if recipe.base_servings == 0 {
        return Err(ValidationError::NonPositiveBaseServings {
            recipe_id: recipe.id.clone(),
        });
    }

    let multiplier = f64::from(target_servings) / f64::from(recipe.base_servings);
    debug!(
        "Scaling '{}' from {} to {} servings (x{:.3})",
        recipe.id, recipe.base_servings, target_servings, multiplier
    );

    Ok(recipe
        .ingredients
        .iter()
        .map(|ingredient| ScaledIngredient {
            name: ingredient.name.clone(),
            quantity: round_for_display(ingredient.quantity * multiplier),
            unit: ingredient.unit.clone(),
        })
        .collect())
}

/// The serving counts a UI offers for a recipe: half to double its base
pub fn serving_range(recipe: &Recipe) -> RangeInclusive<u32> {
    let base = recipe.base_servings.max(1);
    (base / 2).max(1)..=base.saturating_mul(2)
}

/// Apply the display rounding policy to a raw scaled quantity
pub fn round_for_display(raw: f64) -> f64 {
    if raw < 1.0 {
        let rounded = round_to(raw, 2);
        if raw > 0.0 && rounded < MIN_DISPLAY_QUANTITY {
            MIN_DISPLAY_QUANTITY
        } else {
            rounded
        }
    } else if raw.fract() == 0.0 {
        raw
    } else {
        round_to(raw, 1)
    }
}

/// Render a quantity without a trailing ".0" for whole numbers
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
