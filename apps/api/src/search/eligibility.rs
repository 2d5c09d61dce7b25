//! Work-authorization screen.
//!
//! A blunt keyword blocklist, not a legal determination: postings whose text
//! carries citizenship, clearance, or no-sponsorship phrasing are tagged
//! Ineligible with the first matching phrase as the reason. Candidates whose
//! status marks them as citizens or permanent residents skip the scan
//! entirely.

use crate::models::posting::{EligibilityVerdict, ScoredPosting};
use crate::text::contains_phrase;

/// Statuses that make every posting eligible. Compared against the trimmed,
/// lower-cased status string.
const UNRESTRICTED_STATUSES: &[&str] = &[
    "citizen",
    "us citizen",
    "u.s. citizen",
    "pr",
    "green card",
    "green-card",
    "permanent resident",
    "us citizen / pr",
    "citizen/pr",
];

/// Blocking phrases, scanned in order; the first hit becomes the reason.
const BLOCKING_PHRASES: &[&str] = &[
    // citizenship / permanent residency
    "us citizen",
    "u.s. citizen",
    "citizen only",
    "us person",
    "u.s. person",
    "green card required",
    "permanent resident only",
    "permanent resident",
    // clearance / federal work
    "security clearance",
    "ts/sci",
    "top secret",
    "dod clearance",
    "federal contractor",
    // sponsorship refusals
    "no sponsorship",
    "cannot sponsor",
    "not able to sponsor",
    "sponsorship not available",
    "h1b not supported",
    "h-1b not supported",
    "opt/cpt not accepted",
    "must be authorized to work in the us without sponsorship",
    "must be authorized to work in the united states without sponsorship",
];

/// Eligibility class derived from the candidate's free-text visa status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkAuthorization {
    /// Citizen / permanent resident: nothing is filtered.
    Unrestricted,
    /// Everything else: postings are screened against the blocklist.
    NeedsScreening,
}

impl WorkAuthorization {
    pub fn from_status(visa_status: &str) -> Self {
        let status = visa_status.trim().to_lowercase();
        if UNRESTRICTED_STATUSES.contains(&status.as_str()) {
            WorkAuthorization::Unrestricted
        } else {
            WorkAuthorization::NeedsScreening
        }
    }
}

fn screen_posting(scored: &ScoredPosting) -> EligibilityVerdict {
    let haystack = format!(
        "{} {} {}",
        scored.posting.title, scored.posting.company, scored.posting.description
    )
    .to_lowercase();

    // First matching phrase wins; one reason per posting.
    for phrase in BLOCKING_PHRASES {
        if contains_phrase(&haystack, phrase) {
            return EligibilityVerdict::Ineligible {
                reason: format!("failed work-authorization screen: '{phrase}'"),
            };
        }
    }
    EligibilityVerdict::Eligible
}

/// Annotates every posting with an eligibility verdict.
pub fn apply_eligibility(scored: &mut [ScoredPosting], visa_status: &str) {
    let authorization = WorkAuthorization::from_status(visa_status);
    for item in scored.iter_mut() {
        item.eligibility = Some(match authorization {
            WorkAuthorization::Unrestricted => EligibilityVerdict::Eligible,
            WorkAuthorization::NeedsScreening => screen_posting(item),
        });
    }
}
