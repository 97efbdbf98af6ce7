//! Tag suggestion ranking and duplicate detection

use std::collections::HashSet;

use serde::Serialize;

use super::similarity::similarity;

/// A ranked tag candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagSuggestion {
    /// Canonical lowercase tag name
    pub name: String,
    /// Similarity against the query, in `[0, 1]`
    pub score: f64,
    /// True for the synthetic "create new tag" candidate
    pub is_new: bool,
}

impl TagSuggestion {
    fn existing(name: String, score: f64) -> Self {
        Self {
            name,
            score,
            is_new: false,
        }
    }

    fn create_new(name: String) -> Self {
        Self {
            name,
            score: 1.0,
            is_new: true,
        }
    }
}

/// Tuning knobs for suggestion ranking
#[derive(Debug, Clone)]
pub struct SuggestOptions {
    /// Minimum similarity (exclusive) for a corpus tag to be suggested
    pub threshold: f64,
    /// Maximum number of corpus suggestions returned
    pub limit: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            limit: 5,
        }
    }
}

impl SuggestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Ranks corpus tags by similarity to `query`
///
/// Tags already in `exclude` (the user's current selection) are skipped.
/// Results are sorted descending by score with corpus order preserved on
/// ties, then truncated to the limit. When the normalized query names a tag
/// that exists nowhere in the corpus and is not already selected, a
/// synthetic `is_new` candidate is prepended so the UI can offer "create
/// new tag" ahead of the lookalikes.
pub fn suggest(
    query: &str,
    corpus: &[String],
    exclude: &HashSet<String>,
    options: &SuggestOptions,
) -> Vec<TagSuggestion> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let excluded: HashSet<String> = exclude.iter().map(|t| t.to_lowercase()).collect();

    let mut suggestions: Vec<TagSuggestion> = corpus
        .iter()
        .map(|tag| tag.to_lowercase())
        .filter(|tag| !excluded.contains(tag))
        .filter_map(|tag| {
            let score = similarity(&tag, &query);
            (score > options.threshold).then(|| TagSuggestion::existing(tag, score))
        })
        .collect();

    // Stable sort keeps corpus order for equal scores, so ranking is
    // deterministic across calls.
    suggestions.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions.truncate(options.limit);

    if is_novel(&query, corpus) && !excluded.contains(&query) {
        suggestions.insert(0, TagSuggestion::create_new(query));
    }

    suggestions
}

/// True when the exact lowercase candidate is absent from the known corpus
///
/// Callers should ask the user to confirm before treating such a candidate
/// as a brand-new tag. This is about existence in the corpus, not about
/// whether the tag is already selected.
pub fn is_novel(candidate: &str, corpus: &[String]) -> bool {
    let candidate = candidate.trim().to_lowercase();
    !corpus.iter().any(|tag| tag.to_lowercase() == candidate)
}
