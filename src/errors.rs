//! # Engine Error Types
//!
//! Parsing, merging and scoring are total over well-typed input and never
//! fail. The only values the engine rejects are non-positive serving counts
//! ([`ValidationError`]). Loading the catalog or configuration from JSON is
//! a host concern with its own error types ([`CatalogError`] and
//! [`ConfigError`]).

use thiserror::Error;

/// An out-of-domain numeric argument passed by the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("target servings must be positive, got {0}")]
    NonPositiveTargetServings(u32),

    #[error("recipe '{recipe_id}' has non-positive base servings")]
    NonPositiveBaseServings { recipe_id: String },
}

/// Errors raised while loading the recipe catalog or engine configuration
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Errors raised while loading the engine configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
