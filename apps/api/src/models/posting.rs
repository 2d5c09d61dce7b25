use serde::{Deserialize, Serialize};

/// Canonical job posting, produced by the normalizer from whatever field
/// names the provider version of the day uses. All text fields are plain
/// strings; a missing source field becomes the empty string, never null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Posting {
    /// Provider-assigned id. Postings without one are never deduplicated.
    pub id: Option<String>,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    /// Raw provider date string; formats vary across provider versions.
    pub posted_at: Option<String>,
}

/// Eligibility classification attached by the work-authorization screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EligibilityVerdict {
    Eligible,
    Ineligible { reason: String },
}

impl EligibilityVerdict {
    pub fn is_eligible(&self) -> bool {
        matches!(self, EligibilityVerdict::Eligible)
    }
}

/// A posting with its skill-match score. Immutable once scored, except for
/// the eligibility annotation attached by the filter stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: Posting,
    /// Count of distinct matched skill phrases.
    pub score: u32,
    /// Lower-cased, sorted, distinct.
    pub matched_skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<EligibilityVerdict>,
}

impl ScoredPosting {
    pub fn is_eligible(&self) -> bool {
        self.eligibility
            .as_ref()
            .map(EligibilityVerdict::is_eligible)
            .unwrap_or(true)
    }

    pub fn ineligibility_reason(&self) -> Option<&str> {
        match &self.eligibility {
            Some(EligibilityVerdict::Ineligible { reason }) => Some(reason),
            _ => None,
        }
    }
}
