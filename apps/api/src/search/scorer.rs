//! Skill-match scoring: a cheap, deterministic lexical heuristic.
//!
//! Each skill phrase is tested for raw substring containment in the
//! posting's combined title + description text. Score is the number of
//! distinct phrases found. Substring collisions ("java" inside
//! "javascript") are accepted behavior, not a defect.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::posting::{Posting, ScoredPosting};
use crate::text::{combined_text, contains_phrase};

/// Scores one posting against a set of skill phrases. Phrases are expected
/// lower-cased; the matched set is distinct and sorted.
pub fn score_posting(posting: &Posting, skill_phrases: &[String]) -> ScoredPosting {
    let haystack = combined_text(&posting.title, &posting.description);

    let matched: BTreeSet<&str> = skill_phrases
        .iter()
        .map(String::as_str)
        .filter(|phrase| contains_phrase(&haystack, phrase))
        .collect();

    ScoredPosting {
        posting: posting.clone(),
        score: matched.len() as u32,
        matched_skills: matched.into_iter().map(str::to_string).collect(),
        eligibility: None,
    }
}

pub fn score_postings(postings: &[Posting], skill_phrases: &[String]) -> Vec<ScoredPosting> {
    postings
        .iter()
        .map(|p| score_posting(p, skill_phrases))
        .collect()
}

/// The ranking total order: score descending, ties broken by ascending
/// lexical title. Applying it twice yields identical output.
pub fn rank_ordering(a: &ScoredPosting, b: &ScoredPosting) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.posting.title.cmp(&b.posting.title))
}

pub fn rank(mut scored: Vec<ScoredPosting>) -> Vec<ScoredPosting> {
    scored.sort_by(rank_ordering);
    scored
}
