//! In-memory keyword index over building code sections
//!
//! Ranks sections by the number of distinct terms they share with the defect
//! description. Used when no external vector-search backend is configured.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::model::CodeSection;
use crate::service::legal::{CodeSearch, LegalSearchError};

/// Terms shorter than this carry no signal ("a", "of", "in")
const MIN_TERM_LENGTH: usize = 3;

struct IndexedSection {
    section: CodeSection,
    terms: HashSet<String>,
}

pub struct KeywordCodeIndex {
    sections: Vec<IndexedSection>,
}

impl KeywordCodeIndex {
    pub fn new(sections: Vec<CodeSection>) -> Self {
        let sections = sections
            .into_iter()
            .map(|section| {
                let terms = terms_of(&format!("{} {}", section.section_title, section.chunk_text));
                IndexedSection { section, terms }
            })
            .collect();

        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Best matching section; ties keep the earliest section
    fn best_match(&self, description: &str) -> Option<&CodeSection> {
        let query = terms_of(description);
        let mut best: Option<(&IndexedSection, usize)> = None;

        for indexed in &self.sections {
            let score = indexed.terms.intersection(&query).count();
            if score > 0 && best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((indexed, score));
            }
        }

        best.map(|(indexed, _)| &indexed.section)
    }
}

#[async_trait]
impl CodeSearch for KeywordCodeIndex {
    async fn nearest_section(
        &self,
        description: &str,
    ) -> Result<Option<CodeSection>, LegalSearchError> {
        if self.is_empty() {
            return Err(LegalSearchError::EmptyIndex);
        }
        Ok(self.best_match(description).cloned())
    }

    async fn health_check(&self) -> Result<(), LegalSearchError> {
        if self.is_empty() {
            return Err(LegalSearchError::EmptyIndex);
        }
        Ok(())
    }
}

fn terms_of(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|term| term.chars().count() >= MIN_TERM_LENGTH)
        .map(|term| term.to_lowercase())
        .collect()
}
