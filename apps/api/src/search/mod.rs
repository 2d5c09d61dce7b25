//! Search pipeline: query building, provider calls, normalization, scoring,
//! eligibility screening, and ranking.
//!
//! The run is sequential and synchronous per query; a failed provider call
//! contributes zero postings plus a recorded failure and never aborts the
//! rest of the run.

pub mod aggregator;
pub mod eligibility;
pub mod handlers;
pub mod normalizer;
pub mod query_builder;
pub mod report;
pub mod scorer;

use tracing::{info, warn};

use crate::config::SearchDefaults;
use crate::models::posting::ScoredPosting;
use crate::models::profile::{UserPreferences, UserProfile};
use crate::provider::JobSourceProvider;
use self::aggregator::QueryFailure;

/// The result of one search run: ranked, eligibility-annotated postings plus
/// any per-query provider failures.
#[derive(Debug)]
pub struct SearchOutcome {
    pub results: Vec<ScoredPosting>,
    pub failures: Vec<QueryFailure>,
}

impl SearchOutcome {
    pub fn eligible(&self) -> impl Iterator<Item = &ScoredPosting> {
        self.results.iter().filter(|r| r.is_eligible())
    }

    pub fn ineligible(&self) -> impl Iterator<Item = &ScoredPosting> {
        self.results.iter().filter(|r| !r.is_eligible())
    }
}

/// Runs the full pipeline for one profile. A profile without target titles
/// produces an empty outcome, not an error.
pub async fn run_search(
    provider: &dyn JobSourceProvider,
    profile: &UserProfile,
    prefs: &UserPreferences,
    defaults: &SearchDefaults,
) -> SearchOutcome {
    let queries = query_builder::build_queries(profile, prefs, defaults);
    if queries.is_empty() {
        info!("profile has no target titles; skipping provider calls");
        return SearchOutcome {
            results: Vec::new(),
            failures: Vec::new(),
        };
    }

    let mut postings = Vec::new();
    let mut failures = Vec::new();

    for query in &queries {
        match provider.search(query).await {
            Ok(raw) => {
                let normalized = normalizer::normalize_all(&raw);
                info!(
                    query = %query.label,
                    raw = raw.len(),
                    kept = normalized.len(),
                    "provider query completed"
                );
                postings.extend(normalized);
            }
            Err(e) => {
                warn!(query = %query.label, "provider query failed: {e}");
                failures.push(QueryFailure {
                    query: query.label.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let postings = aggregator::dedupe_by_id(postings);
    let postings = aggregator::apply_preference_filters(postings, prefs);

    let skill_phrases = profile.skill_phrases();
    let mut scored = scorer::score_postings(&postings, &skill_phrases);
    eligibility::apply_eligibility(&mut scored, &profile.visa_status);

    SearchOutcome {
        results: scorer::rank(scored),
        failures,
    }
}
