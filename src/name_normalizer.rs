//! # Item Name Normalizer
//!
//! Canonicalizes raw item and ingredient names into the key used for pantry
//! identity and recipe matching. No stemming or synonym folding is applied:
//! "tomato" and "tomatoes" stay distinct keys.

/// Normalize a raw item name into its matching key
///
/// Trims surrounding whitespace, collapses internal whitespace runs to a
/// single space and lowercases. Empty or whitespace-only input yields an
/// empty string, which callers must discard.
///
/// # Examples
///
/// ```rust
/// use pantry_chef::normalize;
///
/// assert_eq!(normalize("  Olive \t OIL "), "olive oil");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
