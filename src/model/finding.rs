use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Defect label used when upstream output could not be validated
pub const FALLBACK_DEFECT: &str = "Analysis Pending / Format Error";

/// Description used when upstream output could not be validated
pub const FALLBACK_VISUAL_DESCRIPTION: &str =
    "The system could not automatically parse the defect details. Manual review required.";

/// Fix recommendation used when upstream output could not be validated
pub const FALLBACK_RECOMMENDED_FIX: &str = "Please consult a human inspector.";

/// A single inspection finding as produced by the vision model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct DefectFinding {
    /// Short defect label
    #[schemars(description = "Short label for the defect (e.g. 'Water Damage', 'Hairline Crack')")]
    pub defect: String,

    /// Severity score, intended range 0-100
    #[schemars(description = "Integer severity score from 0 (cosmetic) to 100 (critical)")]
    pub severity: i64,

    #[schemars(description = "What is visible in the image that supports the finding")]
    pub visual_description: String,

    #[schemars(description = "Concrete repair recommendation for the homeowner")]
    pub recommended_fix: String,
}

impl DefectFinding {
    /// The degraded record returned whenever upstream output is unusable
    pub fn fallback() -> Self {
        Self {
            defect: FALLBACK_DEFECT.to_string(),
            severity: 0,
            visual_description: FALLBACK_VISUAL_DESCRIPTION.to_string(),
            recommended_fix: FALLBACK_RECOMMENDED_FIX.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}
