//! # Pantry Chef
//!
//! A pantry normalization and recipe recommendation engine. Pantry items are
//! collected from free-text entry and from object-detection results, merged
//! into one canonical pantry, and scored against a read-only recipe catalog.
//!
//! Every operation here is a pure function of its inputs: the host owns the
//! live pantry and any I/O, and calls the engine once per state transition.
//!
//! ```rust
//! use pantry_chef::{merge, parse, process_detections, score, Catalog, Detection};
//!
//! let typed = parse("2 eggs, bread");
//! let seen = process_detections(&[Detection::new("Banana", 0.91)]);
//! let pantry = merge(&[typed, seen.items]);
//!
//! let catalog = Catalog::builtin()?;
//! let ranked = score(catalog.recipes(), &pantry);
//! assert_eq!(ranked.len(), catalog.len());
//! # Ok::<(), pantry_chef::CatalogError>(())
//! ```

pub mod catalog;
pub mod detection;
pub mod engine_config;
pub mod entry_parser;
pub mod errors;
pub mod name_normalizer;
pub mod pantry_merger;
pub mod pantry_model;
pub mod recipe_matcher;
pub mod serving_scaler;

pub use catalog::Catalog;
pub use detection::{process_detections, DetectionPostProcessor};
pub use engine_config::{DetectionConfig, EngineConfig};
pub use entry_parser::{parse, parse_segment, ParsedEntry};
pub use errors::{CatalogError, ConfigError, ValidationError};
pub use name_normalizer::normalize;
pub use pantry_merger::merge;
pub use pantry_model::{
    Detection, DetectionOutcome, PantryItem, Recipe, RecipeIngredient, Recommendation,
    ScaledIngredient,
};
pub use recipe_matcher::score;
pub use serving_scaler::{format_quantity, scale, serving_range};
