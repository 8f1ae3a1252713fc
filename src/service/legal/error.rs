//! Error types for building code search

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LegalSearchError {
    #[error("code index contains no sections")]
    EmptyIndex,

    #[error("code search backend failed: {0}")]
    Backend(String),
}
