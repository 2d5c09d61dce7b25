//! Plain-text digest of a search run: the top matches with score, matched
//! skills, and URL, plus an appendix of postings removed by the
//! work-authorization screen.

use crate::models::posting::ScoredPosting;
use crate::search::SearchOutcome;

const REPORT_TOP_N: usize = 10;
const REPORT_REMOVED_N: usize = 5;

fn push_match(lines: &mut Vec<String>, index: usize, item: &ScoredPosting) {
    lines.push(format!(
        "{}. {} @ {}",
        index, item.posting.title, item.posting.company
    ));
    if !item.posting.location.is_empty() {
        lines.push(format!("   Location: {}", item.posting.location));
    }
    lines.push(format!("   Score: {}", item.score));
    if !item.matched_skills.is_empty() {
        lines.push(format!("   Matched skills: {}", item.matched_skills.join(", ")));
    }
    if !item.posting.url.is_empty() {
        lines.push(format!("   URL: {}", item.posting.url));
    }
    lines.push(String::new());
}

/// Renders the run digest for a named candidate.
pub fn render_text(name: &str, outcome: &SearchOutcome) -> String {
    let mut lines: Vec<String> = Vec::new();

    let display_name = if name.trim().is_empty() { "you" } else { name };
    lines.push(format!("Job matches for {display_name}"));
    lines.push(String::new());

    let eligible: Vec<&ScoredPosting> = outcome.eligible().take(REPORT_TOP_N).collect();
    if eligible.is_empty() {
        lines.push("No eligible matches this run.".to_string());
        lines.push(String::new());
    } else {
        for (i, item) in eligible.iter().enumerate() {
            push_match(&mut lines, i + 1, item);
        }
    }

    let removed: Vec<&ScoredPosting> = outcome.ineligible().take(REPORT_REMOVED_N).collect();
    if !removed.is_empty() {
        lines.push("Removed by the work-authorization screen:".to_string());
        for item in removed {
            lines.push(format!(
                "- {} @ {} ({})",
                item.posting.title,
                item.posting.company,
                item.ineligibility_reason().unwrap_or("screened")
            ));
        }
        lines.push(String::new());
    }

    if !outcome.failures.is_empty() {
        lines.push("Queries that failed this run:".to_string());
        for failure in &outcome.failures {
            lines.push(format!("- {}: {}", failure.query, failure.reason));
        }
    }

    lines.join("\n").trim_end().to_string()
}
