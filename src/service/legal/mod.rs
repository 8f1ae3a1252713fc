//! Legal Shield: building code citations for inspection findings
//!
//! Looks up the code section closest to a defect description and formats it
//! for display. The lookup itself sits behind [`CodeSearch`] so a managed
//! vector-search backend can replace the in-memory keyword index.

use std::sync::Arc;

use async_trait::async_trait;

use crate::model::{CodeSection, LegalContext, LegalContextStatus};
use crate::service::sanitize::InputSanitizer;

pub mod error;
pub mod index;

pub use error::LegalSearchError;
pub use index::KeywordCodeIndex;

pub const NO_MATCH_SUMMARY: &str = "No specific building code citation found for this issue.";

/// Backend that finds the building code section nearest to a description
#[async_trait]
pub trait CodeSearch: Send + Sync {
    async fn nearest_section(
        &self,
        description: &str,
    ) -> Result<Option<CodeSection>, LegalSearchError>;

    /// Check that the backend can serve lookups
    async fn health_check(&self) -> Result<(), LegalSearchError> {
        Ok(())
    }
}

/// Service producing display-ready legal context for defects
#[derive(Clone)]
pub struct LegalShieldService {
    search: Arc<dyn CodeSearch>,
    sanitizer: InputSanitizer,
}

impl LegalShieldService {
    pub fn new(search: Arc<dyn CodeSearch>, sanitizer: InputSanitizer) -> Self {
        Self { search, sanitizer }
    }

    pub async fn health_check(&self) -> Result<(), LegalSearchError> {
        self.search.health_check().await
    }

    /// Retrieve and format the legal context for a defect description
    ///
    /// Never fails: backend errors are reported through the `unavailable` status.
    pub async fn legal_context(&self, defect_description: &str) -> LegalContext {
        let description = self.sanitizer.sanitize(defect_description);

        match self.search.nearest_section(&description).await {
            Ok(Some(section)) => {
                tracing::debug!(section = %section.section_title, "Building code section matched");
                LegalContext {
                    status: LegalContextStatus::Cited,
                    summary: format_citation(&section),
                    section: Some(section),
                }
            }
            Ok(None) => {
                tracing::debug!("No building code section matched");
                LegalContext {
                    status: LegalContextStatus::NoMatch,
                    section: None,
                    summary: NO_MATCH_SUMMARY.to_string(),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Building code search failed");
                LegalContext {
                    status: LegalContextStatus::Unavailable,
                    section: None,
                    summary: format!("Legal Shield RAG Service Unavailable. (Error: {})", e),
                }
            }
        }
    }
}

/// Markdown citation block for a matched section
pub fn format_citation(section: &CodeSection) -> String {
    format!(
        "**Building Code Violation Potential:**\n> **{}**: \"{}\"\n\n*Consult a certified inspector for official verification.*",
        section.section_title, section.chunk_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSearch;

    #[async_trait]
    impl CodeSearch for FailingSearch {
        async fn nearest_section(
            &self,
            _description: &str,
        ) -> Result<Option<CodeSection>, LegalSearchError> {
            Err(LegalSearchError::Backend("connection reset".to_string()))
        }
    }

    /// Records the description it receives
    struct EchoSearch;

    #[async_trait]
    impl CodeSearch for EchoSearch {
        async fn nearest_section(
            &self,
            description: &str,
        ) -> Result<Option<CodeSection>, LegalSearchError> {
            Ok(Some(CodeSection {
                section_title: "Echo".to_string(),
                chunk_text: description.to_string(),
            }))
        }
    }

    fn keyword_service() -> LegalShieldService {
        let index = KeywordCodeIndex::new(vec![CodeSection {
            section_title: "IBC Section 2509.2".to_string(),
            chunk_text: "Gypsum backing board shall not be used where there will be direct exposure to water.".to_string(),
        }]);
        LegalShieldService::new(Arc::new(index), InputSanitizer::new())
    }

    #[tokio::test]
    async fn test_cited_context() {
        let context = keyword_service()
            .legal_context("Gypsum board behind the shower shows water damage")
            .await;
        assert_eq!(context.status, LegalContextStatus::Cited);
        assert_eq!(
            context.summary,
            "**Building Code Violation Potential:**\n> **IBC Section 2509.2**: \"Gypsum backing board shall not be used where there will be direct exposure to water.\"\n\n*Consult a certified inspector for official verification.*"
        );
        assert!(context.section.is_some());
    }

    #[tokio::test]
    async fn test_no_match_context() {
        let context = keyword_service().legal_context("squeaky hinge").await;
        assert_eq!(context.status, LegalContextStatus::NoMatch);
        assert_eq!(context.summary, NO_MATCH_SUMMARY);
        assert!(context.section.is_none());
    }

    #[tokio::test]
    async fn test_backend_failure_context() {
        let service = LegalShieldService::new(Arc::new(FailingSearch), InputSanitizer::new());
        let context = service.legal_context("water damage").await;
        assert_eq!(context.status, LegalContextStatus::Unavailable);
        assert_eq!(
            context.summary,
            "Legal Shield RAG Service Unavailable. (Error: code search backend failed: connection reset)"
        );
    }

    #[tokio::test]
    async fn test_health_check_delegates_to_backend() {
        assert!(keyword_service().health_check().await.is_ok());

        let empty = LegalShieldService::new(
            Arc::new(KeywordCodeIndex::new(Vec::new())),
            InputSanitizer::new(),
        );
        assert!(matches!(
            empty.health_check().await,
            Err(LegalSearchError::EmptyIndex)
        ));
    }

    #[tokio::test]
    async fn test_description_is_sanitized_before_search() {
        let service = LegalShieldService::new(Arc::new(EchoSearch), InputSanitizer::new());
        let context = service
            .legal_context("<script>drop()</script> cracked tile ")
            .await;
        assert_eq!(context.section.unwrap().chunk_text, "cracked tile");
    }
}
