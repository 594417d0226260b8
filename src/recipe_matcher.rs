//! # Recipe Matcher
//!
//! Scores every catalog recipe against a pantry snapshot. Matching is exact
//! on the normalized name; there is no fuzzy, substring or synonym matching.

use log::{debug, info};
use std::collections::HashSet;

use crate::name_normalizer::normalize;
use crate::pantry_model::{PantryItem, Recipe, Recommendation};

/// Score and rank recipes against the pantry
///
/// Every recipe appears in the output, including those scoring 0. Results
/// are sorted by descending score; ties keep catalog order.
///
/// # Examples
///
/// ```rust
/// use pantry_chef::{score, Catalog, PantryItem};
///
/// let catalog = Catalog::builtin()?;
/// let ranked = score(catalog.recipes(), &[]);
/// assert!(ranked.iter().all(|r| r.score == 0.0));
/// # Ok::<(), pantry_chef::CatalogError>(())
/// ```
pub fn score<'a>(catalog: &'a [Recipe], pantry: &[PantryItem]) -> Vec<Recommendation<'a>> {
    let pantry_keys: HashSet<String> = pantry.iter().map(|item| normalize(&item.name)).collect();

    let mut recommendations: Vec<Recommendation<'a>> = catalog
        .iter()
        .map(|recipe| score_recipe(recipe, &pantry_keys))
        .collect();

    // Vec::sort_by is stable, so equal scores keep catalog order
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));

    info!(
        "Scored {} recipes against {} pantry items",
        recommendations.len(),
        pantry_keys.len()
    );
    recommendations
}

fn score_recipe<'a>(recipe: &'a Recipe, pantry_keys: &HashSet<String>) -> Recommendation<'a> {
    let (matched, missing): (Vec<&str>, Vec<&str>) = recipe
        .ingredient_names()
        .into_iter()
        .partition(|name| pantry_keys.contains(&normalize(name)));

    let total = matched.len() + missing.len();
    let score = if total == 0 {
        0.0
    } else {
        (matched.len() as f64 / total as f64).clamp(0.0, 1.0)
    };

    debug!(
        "Recipe '{}': {}/{} ingredients matched",
        recipe.id,
        matched.len(),
        total
    );

    Recommendation {
        recipe,
        matched_ingredients: matched.into_iter().map(str::to_string).collect(),
        missing_ingredients: missing.into_iter().map(str::to_string).collect(),
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pantry_model::RecipeIngredient;

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: id.to_string(),
            cuisine: "Test".to_string(),
            description: String::new(),
            tags: Default::default(),
            base_servings: 2,
            ingredients: ingredients
                .iter()
                .map(|name| RecipeIngredient::new(name, 1.0, ""))
                .collect(),
            instructions: Vec::new(),
        }
    }

    #[test]
    fn test_partial_match() {
        let catalog = vec![recipe("toast", &["egg", "bread", "cheese"])];
        let pantry = vec![PantryItem::new("egg"), PantryItem::new("bread")];

        let ranked = score(&catalog, &pantry);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].matched_ingredients, vec!["egg", "bread"]);
        assert_eq!(ranked[0].missing_ingredients, vec!["cheese"]);
        assert!((ranked[0].score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ranking_is_stable_on_ties() {
        let catalog = vec![
            recipe("a", &["rice"]),
            recipe("b", &["egg", "bread"]),
            recipe("c", &["pasta"]),
            recipe("d", &["egg"]),
        ];
        let pantry = vec![PantryItem::new("egg")];

        let ids: Vec<_> = score(&catalog, &pantry)
            .iter()
            .map(|r| r.recipe.id.as_str())
            .collect();
        assert_eq!(ids, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_empty_pantry_keeps_catalog_order() {
        let catalog = vec![recipe("a", &["x"]), recipe("b", &["y"])];
        let ranked = score(&catalog, &[]);
        let ids: Vec<_> = ranked.iter().map(|r| r.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(ranked.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_empty_catalog() {
        assert!(score(&[], &[PantryItem::new("egg")]).is_empty());
    }

    #[test]
    fn test_recipe_without_ingredients_scores_zero() {
        let catalog = vec![recipe("water", &[])];
        let ranked = score(&catalog, &[PantryItem::new("egg")]);
        assert_eq!(ranked[0].score, 0.0);
        assert!(ranked[0].matched_ingredients.is_empty());
        assert!(ranked[0].missing_ingredients.is_empty());
    }

    #[test]
    fn test_matching_normalizes_both_sides() {
        let catalog = vec![recipe("salad", &["Olive  Oil", "Tomato"])];
        let pantry = vec![PantryItem::new(" olive oil"), PantryItem::new("tomatoes")];

        let ranked = score(&catalog, &pantry);
        assert_eq!(ranked[0].matched_ingredients, vec!["Olive  Oil"]);
        assert_eq!(ranked[0].missing_ingredients, vec!["Tomato"]);
    }

    #[test]
    fn test_duplicate_ingredients_counted_once() {
        let catalog = vec![recipe("omelette", &["egg", "egg", "milk"])];
        let ranked = score(&catalog, &[PantryItem::new("egg")]);
        assert_eq!(ranked[0].score, 0.5);
    }

    #[test]
    fn test_full_match() {
        let catalog = vec![recipe("toast", &["bread"])];
        let ranked = score(&catalog, &[PantryItem::new("bread")]);
        assert_eq!(ranked[0].score, 1.0);
        assert!(ranked[0].is_complete());
    }
}
