//! Normalization of raw vision-model output into inspection findings
//!
//! The upstream model is asked for a bare JSON object but regularly wraps it in
//! markdown fences, drops fields or returns prose. Every input maps to a fully
//! populated [`DefectFinding`]; anything unusable becomes the fallback record.

pub mod error;
pub mod prompts;
pub mod validation;

use crate::model::DefectFinding;
use crate::service::normalizer::validation::{finding_from_object, validate_finding_document};

pub use error::NormalizationError;

const CODE_FENCE: &str = "```";
const JSON_LANGUAGE_TAG: &str = "json";

/// Outcome of normalizing one model response
#[derive(Debug)]
pub enum NormalizedFinding {
    /// The response parsed and matched the schema
    Validated(DefectFinding),
    /// The response was unusable; callers get [`DefectFinding::fallback`]
    Degraded(NormalizationError),
}

impl NormalizedFinding {
    pub fn is_degraded(&self) -> bool {
        matches!(self, NormalizedFinding::Degraded(_))
    }

    pub fn errors(&self) -> Vec<String> {
        match self {
            NormalizedFinding::Validated(_) => Vec::new(),
            NormalizedFinding::Degraded(e) => e.details(),
        }
    }

    pub fn into_finding(self) -> DefectFinding {
        match self {
            NormalizedFinding::Validated(finding) => finding,
            NormalizedFinding::Degraded(_) => DefectFinding::fallback(),
        }
    }
}

/// Normalize raw model output, substituting the fallback finding on any failure
pub fn normalize(raw_text: &str) -> DefectFinding {
    classify(raw_text).into_finding()
}

/// Normalize raw model output, keeping track of which branch was taken
pub fn classify(raw_text: &str) -> NormalizedFinding {
    match parse_finding(raw_text) {
        Ok(finding) => {
            tracing::debug!(
                defect = %finding.defect,
                severity = finding.severity,
                "Model output validated"
            );
            NormalizedFinding::Validated(finding)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                raw_length = raw_text.len(),
                "Model output failed validation, returning fallback finding"
            );
            NormalizedFinding::Degraded(e)
        }
    }
}

fn parse_finding(raw_text: &str) -> Result<DefectFinding, NormalizationError> {
    let cleaned = strip_code_fences(raw_text);
    let document: serde_json::Value = serde_json::from_str(cleaned)?;

    let result = validate_finding_document(&document);
    if !result.is_valid {
        return Err(NormalizationError::Schema(result.errors));
    }

    document
        .as_object()
        .and_then(finding_from_object)
        .ok_or_else(|| NormalizationError::Schema(vec!["document could not be read".to_string()]))
}

/// Remove a leading code fence (optionally tagged `json`) and a trailing fence
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(CODE_FENCE) {
        text = match rest.get(..JSON_LANGUAGE_TAG.len()) {
            Some(tag) if tag.eq_ignore_ascii_case(JSON_LANGUAGE_TAG) => {
                &rest[JSON_LANGUAGE_TAG.len()..]
            }
            _ => rest,
        };
    }

    if let Some(rest) = text.strip_suffix(CODE_FENCE) {
        text = rest;
    }

    text.trim()
}
