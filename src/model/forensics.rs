use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const CENTROID_METRIC: &str = "Spectral Centroid";
pub const ERROR_METRIC: &str = "Error";
pub const HOLLOW_DIAGNOSIS: &str = "Possible Tile Delamination / Void";
pub const SOLID_DIAGNOSIS: &str = "Solid Substrate";

/// Outcome of a wall tap test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TapAnalysis {
    pub metric: String,
    /// Mean spectral centroid in Hz (0.0 when analysis failed)
    pub value_hz: f64,
    pub risk_detected: bool,
    pub diagnosis: String,
}

impl TapAnalysis {
    pub fn failed(reason: &str) -> Self {
        Self {
            metric: ERROR_METRIC.to_string(),
            value_hz: 0.0,
            risk_detected: false,
            diagnosis: format!("Audio Analysis Failed: {}", reason),
        }
    }
}
