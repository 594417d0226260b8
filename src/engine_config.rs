//! # Engine Configuration Module
//!
//! This module defines the tunable constants of the engine and the
//! configuration structures that carry them. Defaults reproduce the
//! observed behavior exactly; a JSON file may override any subset.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::errors::ConfigError;
use crate::name_normalizer::normalize;

// Constants for detection post-processing
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.4;
pub const DEFAULT_QUANTITY_PER_CONFIDENCE: f64 = 2.0;
pub const DETECTION_QUANTITY_DECIMALS: i32 = 2;

/// Food and kitchen classes of the detector vocabulary eligible to become pantry items
pub const DEFAULT_ALLOWED_LABELS: &[&str] = &[
    "apple",
    "banana",
    "orange",
    "broccoli",
    "carrot",
    "sandwich",
    "hot dog",
    "pizza",
    "donut",
    "cake",
    "bottle",
    "wine glass",
    "cup",
    "bowl",
];

/// Configuration for turning raw detections into pantry candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectionConfig {
    /// Detections strictly below this confidence are dropped
    pub confidence_threshold: f32,
    /// Normalized labels allowed to become pantry items
    pub allowed_labels: BTreeSet<String>,
    /// Multiplier turning a confidence into a proxy quantity
    pub quantity_per_confidence: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            allowed_labels: DEFAULT_ALLOWED_LABELS
                .iter()
                .map(|label| label.to_string())
                .collect(),
            quantity_per_confidence: DEFAULT_QUANTITY_PER_CONFIDENCE,
        }
    }
}

impl DetectionConfig {
    /// Check if a normalized label is on the allow-list
    pub fn allows(&self, label: &str) -> bool {
        self.allowed_labels.contains(label)
    }

    /// Bring allow-list entries to the key form detections are compared in
    ///
    /// Entries are normalized like item names; empty entries are dropped.
    pub fn normalized(mut self) -> Self {
        self.allowed_labels = self
            .allowed_labels
            .iter()
            .map(|label| normalize(label))
            .filter(|label| !label.is_empty())
            .collect();
        self
    }
}

/// Top-level configuration of the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Detection post-processing settings
    pub detection: DetectionConfig,
}

impl EngineConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    ///
    /// Allow-list labels are normalized, so `"Hot  Dog"` matches a `hot dog`
    /// detection.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: EngineConfig = serde_json::from_str(json)?;
        config.detection = config.detection.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading engine configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.detection.confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid(format!(
                "confidence threshold {threshold} is outside [0, 1]"
            )));
        }
        if !(self.detection.quantity_per_confidence > 0.0) {
            return Err(ConfigError::Invalid(
                "quantity per confidence must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
