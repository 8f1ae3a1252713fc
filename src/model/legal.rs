use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A building code section as stored in the code index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CodeSection {
    pub section_title: String,
    pub chunk_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LegalContextStatus {
    /// A relevant section was found and cited
    Cited,
    NoMatch,
    /// The code search backend failed
    Unavailable,
}

/// Legal citation context for a defect description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LegalContext {
    pub status: LegalContextStatus,
    pub section: Option<CodeSection>,
    /// Markdown text ready for display
    pub summary: String,
}
