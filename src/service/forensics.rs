//! Wall tap-test classification
//!
//! A hollow void behind tile or drywall produces a duller tap with a lower
//! spectral centroid than a solid substrate. Feature extraction happens
//! upstream; this module averages the per-frame centroids and applies the
//! configured threshold.

use crate::model::forensics::{CENTROID_METRIC, HOLLOW_DIAGNOSIS, SOLID_DIAGNOSIS};
use crate::model::{ForensicsConfig, TapAnalysis};

#[derive(Debug, Clone)]
pub struct TapAnalyzer {
    threshold_hz: f64,
}

impl Default for TapAnalyzer {
    fn default() -> Self {
        Self::new(&ForensicsConfig::default())
    }
}

impl TapAnalyzer {
    pub fn new(config: &ForensicsConfig) -> Self {
        Self {
            threshold_hz: config.hollowness_threshold_hz,
        }
    }

    /// Classify a tap recording from its per-frame spectral centroids (Hz)
    ///
    /// Never fails: unusable input produces an `Error` metric record.
    pub fn analyze(&self, centroids_hz: &[f64]) -> TapAnalysis {
        if centroids_hz.is_empty() {
            tracing::warn!("Tap analysis requested without spectral frames");
            return TapAnalysis::failed("no spectral frames supplied");
        }

        if let Some(index) = centroids_hz.iter().position(|c| !c.is_finite()) {
            tracing::warn!(frame = index, "Tap analysis received non-finite centroid");
            return TapAnalysis::failed(&format!("frame {} is not a finite number", index));
        }

        // Running mean so large frames do not overflow an intermediate sum
        let mean = centroids_hz
            .iter()
            .enumerate()
            .fold(0.0, |mean, (i, c)| mean + (c - mean) / (i + 1) as f64);

        if !mean.is_finite() {
            tracing::warn!(frames = centroids_hz.len(), "Tap analysis mean is not finite");
            return TapAnalysis::failed("mean spectral centroid is not a finite number");
        }

        let is_hollow = mean < self.threshold_hz;

        tracing::debug!(
            frames = centroids_hz.len(),
            mean_hz = mean,
            threshold_hz = self.threshold_hz,
            hollow = is_hollow,
            "Tap analysis completed"
        );

        TapAnalysis {
            metric: CENTROID_METRIC.to_string(),
            value_hz: mean,
            risk_detected: is_hollow,
            diagnosis: if is_hollow {
                HOLLOW_DIAGNOSIS
            } else {
                SOLID_DIAGNOSIS
            }
            .to_string(),
        }
    }
}
