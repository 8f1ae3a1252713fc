use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity bucket a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Minor,
    Moderate,
    Serious,
    Critical,
}

impl SeverityBand {
    /// Bucket a 0-100 severity score.
    ///
    /// Scores outside 0-100 are not rejected: anything below zero is `Minor`,
    /// anything above 100 is `Critical`.
    pub fn from_score(severity: i64) -> Self {
        match severity {
            i64::MIN..=20 => SeverityBand::Minor,
            21..=50 => SeverityBand::Moderate,
            51..=80 => SeverityBand::Serious,
            _ => SeverityBand::Critical,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            SeverityBand::Minor => 1.0,
            SeverityBand::Moderate => 1.5,
            SeverityBand::Serious => 2.5,
            SeverityBand::Critical => 4.0,
        }
    }
}

/// Repair cost range for a single finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CostEstimate {
    pub min_estimate_usd: f64,
    pub max_estimate_usd: f64,
    pub severity_multiplier: f64,
    pub severity_band: SeverityBand,
    /// Human-readable derivation, e.g. "Base $500.0 x Severity 1.5x x Region 1.0x"
    pub calculation_note: String,
}

impl CostEstimate {
    pub fn midpoint(&self) -> f64 {
        (self.min_estimate_usd + self.max_estimate_usd) / 2.0
    }
}
