use serde::{Deserialize, Serialize};

/// A candidate's declared identity and skills, immutable for the duration of
/// a search run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    /// Search priority order: one provider query is issued per title.
    #[serde(default)]
    pub target_titles: Vec<String>,
    #[serde(default)]
    pub hard_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    /// Free text, mapped to provider seniority values by the query builder.
    #[serde(default)]
    pub experience_level: String,
    /// Free text, mapped to an eligibility class by the eligibility filter.
    #[serde(default)]
    pub visa_status: String,
}

impl UserProfile {
    /// All declared skill phrases, lower-cased, in declaration order.
    pub fn skill_phrases(&self) -> Vec<String> {
        self.hard_skills
            .iter()
            .chain(self.soft_skills.iter())
            .map(|s| s.to_lowercase())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationPref {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    /// Some(true) = remote only, Some(false) = on-site only, None = either.
    #[serde(default)]
    pub remote: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryPref {
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyPrefs {
    #[serde(default)]
    pub preferred: Vec<String>,
    #[serde(default)]
    pub avoid: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub location: LocationPref,
    #[serde(default)]
    pub salary: Option<SalaryPref>,
    /// Must be > 0 when set; zero falls back to the configured default.
    #[serde(default)]
    pub job_age_limit_days: Option<u32>,
    #[serde(default)]
    pub employment_type: Vec<String>,
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
    #[serde(default)]
    pub company_preferences: CompanyPrefs,
}
