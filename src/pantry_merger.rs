//! # Pantry Merger
//!
//! Folds several candidate lists into one canonical pantry with at most one
//! item per normalized name.

use log::debug;
use std::collections::HashMap;

use crate::name_normalizer::normalize;
use crate::pantry_model::PantryItem;

/// Merge lists of pantry items into one deduplicated, order-stable list
///
/// Lists are concatenated in order and names normalized. On a duplicate
/// name the later entry's quantity replaces the earlier one (an unset
/// quantity included), while the item keeps the position of its first
/// occurrence. Items whose normalized name is empty are discarded.
///
/// # Examples
///
/// ```rust
/// use pantry_chef::{merge, PantryItem};
///
/// let merged = merge(&[
///     vec![PantryItem::new("Egg").with_quantity(2.0), PantryItem::new("bread")],
///     vec![PantryItem::new("egg ").with_quantity(5.0)],
/// ]);
/// assert_eq!(merged, vec![
///     PantryItem::new("egg").with_quantity(5.0),
///     PantryItem::new("bread"),
/// ]);
/// ```
pub fn merge(lists: &[Vec<PantryItem>]) -> Vec<PantryItem> {
    let mut merged: Vec<PantryItem> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for item in lists.iter().flatten() {
        let name = normalize(&item.name);
        if name.is_empty() {
            continue;
        }

        match positions.get(&name) {
            Some(&index) => merged[index].quantity = item.quantity,
            None => {
                positions.insert(name.clone(), merged.len());
                merged.push(PantryItem {
                    name,
                    quantity: item.quantity,
                });
            }
        }
    }

    debug!("Merged {} lists into {} pantry items", lists.len(), merged.len());
    merged
}
