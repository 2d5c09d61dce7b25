//! Resume-aware match refiner.
//!
//! Compares one job description against one resume (and optionally a cover
//! letter) and blends two signals: keyword coverage (explainable, weighted
//! 0.7) and cosine similarity over unigram+bigram term frequencies (weighted
//! 0.3). Below-threshold scores produce advisory "tweak" suggestions listing
//! missing keywords. Pure and stateless: safe to call concurrently.

pub mod handlers;

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 0.70;

/// Missing-keyword suggestions are capped to keep them digestible.
const MAX_SUGGESTED_KEYWORDS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweakKind {
    Add,
    Emphasize,
    Remove,
}

/// One actionable suggestion produced when a score falls below threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweak {
    pub kind: TweakKind,
    pub message: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0.7 * coverage + 0.3 * cosine, rounded to 3 decimals.
    pub score: f64,
    pub coverage: f64,
    pub cosine: f64,
    pub tweaks: Vec<Tweak>,
}

/// Lower-cases, strips everything outside alphanumerics and `- + / #`, and
/// drops tokens of length <= 2.
pub fn normalize_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '/' | '#') {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .filter(|token| token.len() > 2)
        .map(str::to_string)
        .collect()
}

pub fn keyword_set(text: &str) -> BTreeSet<String> {
    normalize_tokens(text).into_iter().collect()
}

/// Fraction of the job's distinct keywords present in the candidate text,
/// plus the sorted missing keywords. An empty job keyword set scores 0.0 by
/// definition.
pub fn coverage_score(job_text: &str, candidate_text: &str) -> (f64, Vec<String>) {
    let job_keywords = keyword_set(job_text);
    if job_keywords.is_empty() {
        return (0.0, Vec::new());
    }
    let candidate_keywords = keyword_set(candidate_text);
    let overlap = job_keywords.intersection(&candidate_keywords).count();
    let missing: Vec<String> = job_keywords
        .difference(&candidate_keywords)
        .cloned()
        .collect();
    (overlap as f64 / job_keywords.len() as f64, missing)
}

/// Unigram + bigram term-frequency vector.
fn term_frequencies(text: &str) -> HashMap<String, f64> {
    let tokens = normalize_tokens(text);
    let mut counts: HashMap<String, f64> = HashMap::new();
    for token in &tokens {
        *counts.entry(token.clone()).or_insert(0.0) += 1.0;
    }
    for pair in tokens.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine similarity between the term-frequency vectors of the two texts.
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_match(job_text: &str, candidate_text: &str) -> f64 {
    let a = term_frequencies(job_text);
    let b = term_frequencies(candidate_text);

    let dot: f64 = a
        .iter()
        .filter_map(|(term, weight)| b.get(term).map(|other| weight * other))
        .sum();
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

fn blended(coverage: f64, cosine: f64) -> f64 {
    0.7 * coverage + 0.3 * cosine
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Computes the full match result for a (job, resume[, cover letter]) set.
pub fn compute_match(
    job_description: &str,
    resume_text: &str,
    cover_text: Option<&str>,
    threshold: f64,
) -> MatchResult {
    let (coverage, missing) = coverage_score(job_description, resume_text);
    let cosine = cosine_match(job_description, resume_text);
    let score = blended(coverage, cosine);

    let mut tweaks = Vec::new();
    if score < threshold {
        tweaks.push(Tweak {
            kind: TweakKind::Add,
            message: "Consider incorporating these keywords/phrases to improve the match:"
                .to_string(),
            keywords: missing.into_iter().take(MAX_SUGGESTED_KEYWORDS).collect(),
        });
    }

    if let Some(cover) = cover_text {
        let (cover_coverage, cover_missing) = coverage_score(job_description, cover);
        let cover_cosine = cosine_match(job_description, cover);
        if blended(cover_coverage, cover_cosine) < threshold {
            tweaks.push(Tweak {
                kind: TweakKind::Add,
                message: "Suggested edits for your cover letter:".to_string(),
                keywords: cover_missing
                    .into_iter()
                    .take(MAX_SUGGESTED_KEYWORDS)
                    .collect(),
            });
        }
    }

    MatchResult {
        score: round3(score),
        coverage: round3(coverage),
        cosine: round3(cosine),
        tweaks,
    }
}
