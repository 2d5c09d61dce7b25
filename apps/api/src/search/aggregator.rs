//! Cross-query aggregation: dedup, preference post-filters, failure records.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::posting::Posting;
use crate::models::profile::UserPreferences;
use crate::text::{combined_text, contains_phrase};

/// One provider call that failed. Recorded and reported; never aborts a run.
#[derive(Debug, Clone, Serialize)]
pub struct QueryFailure {
    /// The target title the query was built for.
    pub query: String,
    pub reason: String,
}

/// Removes cross-query duplicates by provider id, preserving first-seen
/// order. Postings without an id are never deduplicated against each other.
pub fn dedupe_by_id(postings: Vec<Posting>) -> Vec<Posting> {
    let mut seen: HashSet<String> = HashSet::new();
    postings
        .into_iter()
        .filter(|posting| match &posting.id {
            Some(id) => seen.insert(id.clone()),
            None => true,
        })
        .collect()
}

/// Drops postings the candidate asked never to see: combined text containing
/// an excluded keyword, or a company on the avoid list.
pub fn apply_preference_filters(
    postings: Vec<Posting>,
    prefs: &UserPreferences,
) -> Vec<Posting> {
    let exclude: Vec<String> = prefs
        .exclude_keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();
    let avoid: Vec<String> = prefs
        .company_preferences
        .avoid
        .iter()
        .map(|c| c.to_lowercase())
        .filter(|c| !c.is_empty())
        .collect();

    if exclude.is_empty() && avoid.is_empty() {
        return postings;
    }

    postings
        .into_iter()
        .filter(|posting| {
            let text = combined_text(&posting.title, &posting.description);
            if exclude.iter().any(|k| contains_phrase(&text, k)) {
                return false;
            }
            !avoid.contains(&posting.company.to_lowercase())
        })
        .collect()
}
