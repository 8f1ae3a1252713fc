//! Error types for finding normalization

use thiserror::Error;

/// Why upstream output was replaced by the fallback finding
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NormalizationError {
    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response does not match the finding schema: {}", .0.join("; "))]
    Schema(Vec<String>),
}

impl NormalizationError {
    /// Individual problems, suitable for returning to API callers
    pub fn details(&self) -> Vec<String> {
        match self {
            NormalizationError::Parse(e) => vec![e.to_string()],
            NormalizationError::Schema(errors) => errors.clone(),
        }
    }
}
