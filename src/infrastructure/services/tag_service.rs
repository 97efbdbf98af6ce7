//! Tag autocomplete and duplicate-tag confirmation

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::tags::{SuggestOptions, TagSuggestion, is_novel, suggest};
use crate::infrastructure::services::CatalogService;

/// Suggests tags while the user types and flags suspicious "new" tags
///
/// The corpus comes through the catalog service, so repeated keystrokes hit
/// the tag cache rather than the network. Scoring itself is pure CPU work.
#[derive(Debug)]
pub struct TagSuggestionService {
    catalog: Arc<CatalogService>,
    options: SuggestOptions,
}

impl TagSuggestionService {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self::with_options(catalog, SuggestOptions::default())
    }

    pub fn with_options(catalog: Arc<CatalogService>, options: SuggestOptions) -> Self {
        Self { catalog, options }
    }

    /// Ranked suggestions for the current input, skipping already-selected
    /// tags
    pub async fn suggest(
        &self,
        input: &str,
        selected: &HashSet<String>,
    ) -> Result<Vec<TagSuggestion>, DomainError> {
        let corpus = self.corpus().await?;
        Ok(suggest(input, &corpus, selected, &self.options))
    }

    /// True when the candidate names a tag that exists nowhere yet, so the
    /// UI should ask for confirmation before creating it
    pub async fn needs_confirmation(&self, candidate: &str) -> Result<bool, DomainError> {
        let corpus = self.corpus().await?;
        Ok(is_novel(candidate, &corpus))
    }

    async fn corpus(&self) -> Result<Vec<String>, DomainError> {
        let tags = self.catalog.tags().await?;
        Ok(tags.iter().map(|tag| tag.canonical_name()).collect())
    }
}
