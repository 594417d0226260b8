//! # Detection Post-Processor
//!
//! Turns one batch of raw classifier output into pantry candidates. The
//! pipeline drops low-confidence detections, keeps only allow-listed
//! food/kitchen labels, derives a proxy quantity from each confidence and
//! reports the mean confidence of what survived.

use log::{debug, info, trace};

use crate::engine_config::{DetectionConfig, DETECTION_QUANTITY_DECIMALS};
use crate::name_normalizer::normalize;
use crate::pantry_model::{Detection, DetectionOutcome, PantryItem};

/// Post-processor for vision detections
///
/// # Examples
///
/// ```rust
/// use pantry_chef::{Detection, DetectionPostProcessor};
///
/// let processor = DetectionPostProcessor::new();
/// let outcome = processor.process(&[
///     Detection::new("Banana", 0.8),
///     Detection::new("person", 0.99),
///     Detection::new("apple", 0.2),
/// ]);
///
/// assert_eq!(outcome.items.len(), 1);
/// assert_eq!(outcome.items[0].name, "banana");
/// assert_eq!(outcome.items[0].quantity, Some(1.6));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DetectionPostProcessor {
    config: DetectionConfig,
}

impl DetectionPostProcessor {
    /// Create a post-processor with the default threshold and allow-list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a post-processor with custom configuration
    ///
    /// Allow-list labels are normalized before use.
    pub fn with_config(config: DetectionConfig) -> Self {
        let config = config.normalized();
        debug!(
            "Creating DetectionPostProcessor: threshold={}, allowed_labels={}",
            config.confidence_threshold,
            config.allowed_labels.len()
        );
        Self { config }
    }

    /// The configuration in effect, with its allow-list normalized
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Process one complete batch of detections
    ///
    /// An empty result with zero aggregate confidence means nothing was
    /// confidently detected; it is not an error.
    pub fn process(&self, detections: &[Detection]) -> DetectionOutcome {
        let survivors: Vec<(String, f32)> = detections
            .iter()
            .filter(|detection| self.is_confident(detection))
            .map(|detection| (normalize(&detection.label), detection.confidence))
            .filter(|(label, _)| {
                let allowed = self.config.allows(label);
                if !allowed {
                    trace!("Dropping detection '{}': not on the allow-list", label);
                }
                allowed
            })
            .collect();

        if survivors.is_empty() {
            debug!("No confident detection in a batch of {}", detections.len());
            return DetectionOutcome::empty();
        }

        let aggregate_confidence =
            survivors.iter().map(|(_, confidence)| confidence).sum::<f32>() / survivors.len() as f32;

        let items: Vec<PantryItem> = survivors
            .into_iter()
            .map(|(label, confidence)| PantryItem {
                name: label,
                quantity: Some(self.proxy_quantity(confidence)),
            })
            .collect();

        info!(
            "Kept {} of {} detections, aggregate confidence {:.2}",
            items.len(),
            detections.len(),
            aggregate_confidence
        );

        DetectionOutcome {
            items,
            aggregate_confidence,
        }
    }

    fn is_confident(&self, detection: &Detection) -> bool {
        // NaN compares false and is dropped
        let confident = detection.confidence >= self.config.confidence_threshold;
        if !confident {
            trace!(
                "Dropping detection '{}': confidence {} below threshold",
                detection.label,
                detection.confidence
            );
        }
        confident
    }

    fn proxy_quantity(&self, confidence: f32) -> f64 {
        let factor = 10f64.powi(DETECTION_QUANTITY_DECIMALS);
        (f64::from(confidence) * self.config.quantity_per_confidence * factor).round() / factor
    }
}

/// Process a batch of detections with the default configuration
pub fn process_detections(detections: &[Detection]) -> DetectionOutcome {
    DetectionPostProcessor::new().process(detections)
}
