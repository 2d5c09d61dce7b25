//! Turns a user profile + preferences into provider-facing search queries.
//!
//! One query is issued per target title. Every optional filter field is
//! omitted from the serialized body when empty — some provider versions
//! reject null fields, others reject empty arrays, so nothing empty goes on
//! the wire at all.

use serde::Serialize;

use crate::config::SearchDefaults;
use crate::models::profile::{UserPreferences, UserProfile};

/// Provider seniority vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    CLevel,
    Staff,
    Senior,
    MidLevel,
    Junior,
}

/// One free-text → seniority mapping rule. Rules are evaluated in table
/// order; the first rule whose needles are all contained in the lower-cased
/// experience text wins.
struct SeniorityRule {
    needles: &'static [&'static str],
    emits: &'static [Seniority],
}

const SENIORITY_RULES: &[SeniorityRule] = &[
    SeniorityRule {
        needles: &["mid", "senior"],
        emits: &[Seniority::MidLevel, Seniority::Senior],
    },
    SeniorityRule {
        needles: &["mid"],
        emits: &[Seniority::MidLevel],
    },
    SeniorityRule {
        needles: &["senior"],
        emits: &[Seniority::Senior],
    },
    SeniorityRule {
        needles: &["junior"],
        emits: &[Seniority::Junior],
    },
    SeniorityRule {
        needles: &["entry"],
        emits: &[Seniority::Junior],
    },
    // NOTE: "c" matches any text containing the letter c, not just C-suite
    // titles. Kept as-is; narrowing it changes which postings are searched.
    SeniorityRule {
        needles: &["c"],
        emits: &[Seniority::CLevel],
    },
    SeniorityRule {
        needles: &["executive"],
        emits: &[Seniority::CLevel],
    },
];

/// Maps a free-text experience level ("mid-to-senior", "entry level", ...) to
/// the provider's seniority values. Empty result means no seniority filter.
pub fn map_experience_level(experience_level: &str) -> Vec<Seniority> {
    let text = experience_level.to_lowercase();
    if text.is_empty() {
        return Vec::new();
    }
    SENIORITY_RULES
        .iter()
        .find(|rule| rule.needles.iter().all(|n| text.contains(n)))
        .map(|rule| rule.emits.to_vec())
        .unwrap_or_default()
}

/// Location pattern resolution: `city, state` → city → state → country →
/// literal "united states". Always lower-cased before transmission.
pub fn location_pattern(location: &crate::models::profile::LocationPref) -> String {
    let city = location.city.trim();
    let state = location.state.trim();
    let country = location.country.trim();

    let pattern = if !city.is_empty() && !state.is_empty() {
        format!("{city}, {state}")
    } else if !city.is_empty() {
        city.to_string()
    } else if !state.is_empty() {
        state.to_string()
    } else if !country.is_empty() {
        country.to_string()
    } else {
        "united states".to_string()
    };

    pattern.to_lowercase()
}

/// Provider-facing filter body for one search. Serialized directly as the
/// POST payload; `label` identifies the query in failure reports and logs.
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    #[serde(skip)]
    pub label: String,
    pub job_title_or: Vec<String>,
    pub job_location_pattern_or: Vec<String>,
    pub posted_at_max_age_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub job_seniority_or: Vec<Seniority>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub employment_type: Vec<String>,
    pub limit: u32,
}

/// Builds one `SearchQuery` per target title. A profile with no target
/// titles legitimately produces zero queries (and therefore an empty run).
pub fn build_queries(
    profile: &UserProfile,
    prefs: &UserPreferences,
    defaults: &SearchDefaults,
) -> Vec<SearchQuery> {
    let pattern = location_pattern(&prefs.location);
    let seniority = map_experience_level(&profile.experience_level);
    let max_age_days = match prefs.job_age_limit_days {
        Some(days) if days > 0 => days,
        _ => defaults.max_age_days,
    };
    let min_salary = prefs
        .salary
        .as_ref()
        .and_then(|s| s.min)
        .filter(|min| *min > 0)
        .map(f64::from);

    profile
        .target_titles
        .iter()
        .filter(|title| !title.trim().is_empty())
        .map(|title| SearchQuery {
            label: title.clone(),
            job_title_or: vec![title.clone()],
            job_location_pattern_or: vec![pattern.clone()],
            posted_at_max_age_days: max_age_days,
            min_salary_usd: min_salary,
            remote: prefs.location.remote,
            job_seniority_or: seniority.clone(),
            employment_type: prefs.employment_type.clone(),
            limit: defaults.result_limit,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{LocationPref, SalaryPref};

    fn defaults() -> SearchDefaults {
        SearchDefaults {
            result_limit: 25,
            max_age_days: 30,
        }
    }

    #[test]
    fn mid_and_senior_emit_both_levels() {
        assert_eq!(
            map_experience_level("Mid-to-Senior"),
            vec![Seniority::MidLevel, Seniority::Senior]
        );
    }

    #[test]
    fn mid_alone_emits_mid_level() {
        assert_eq!(map_experience_level("mid level"), vec![Seniority::MidLevel]);
    }

    #[test]
    fn senior_alone_emits_senior() {
        assert_eq!(map_experience_level("Senior IC"), vec![Seniority::Senior]);
    }

    #[test]
    fn junior_and_entry_both_emit_junior() {
        assert_eq!(map_experience_level("junior dev"), vec![Seniority::Junior]);
        assert_eq!(map_experience_level("entry level"), vec![Seniority::Junior]);
    }

    #[test]
    fn letter_c_emits_c_level() {
        // The "c" needle is deliberately broad.
        assert_eq!(map_experience_level("architect"), vec![Seniority::CLevel]);
        assert_eq!(map_experience_level("CTO"), vec![Seniority::CLevel]);
    }

    #[test]
    fn unmatched_text_emits_no_filter() {
        assert!(map_experience_level("guru").is_empty());
        assert!(map_experience_level("").is_empty());
    }

    #[test]
    fn seniority_serializes_to_provider_vocabulary() {
        assert_eq!(
            serde_json::to_value(Seniority::CLevel).unwrap(),
            serde_json::json!("c_level")
        );
        assert_eq!(
            serde_json::to_value(Seniority::MidLevel).unwrap(),
            serde_json::json!("mid_level")
        );
    }

    #[test]
    fn location_pattern_prefers_city_state() {
        let loc = LocationPref {
            city: "Atlanta".into(),
            state: "GA".into(),
            country: "US".into(),
            remote: None,
        };
        assert_eq!(location_pattern(&loc), "atlanta, ga");
    }

    #[test]
    fn location_pattern_falls_through_to_default() {
        assert_eq!(
            location_pattern(&LocationPref::default()),
            "united states"
        );
        let state_only = LocationPref {
            state: "Georgia".into(),
            ..LocationPref::default()
        };
        assert_eq!(location_pattern(&state_only), "georgia");
        let country_only = LocationPref {
            country: "Canada".into(),
            ..LocationPref::default()
        };
        assert_eq!(location_pattern(&country_only), "canada");
    }

    #[test]
    fn one_query_per_target_title() {
        let profile = UserProfile {
            target_titles: vec!["Data Analyst".into(), "BI Developer".into()],
            ..UserProfile::default()
        };
        let queries = build_queries(&profile, &UserPreferences::default(), &defaults());
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].label, "Data Analyst");
        assert_eq!(queries[1].job_title_or, vec!["BI Developer".to_string()]);
    }

    #[test]
    fn no_titles_produce_no_queries() {
        let queries = build_queries(
            &UserProfile::default(),
            &UserPreferences::default(),
            &defaults(),
        );
        assert!(queries.is_empty());
    }

    #[test]
    fn empty_fields_are_omitted_from_wire_body() {
        let profile = UserProfile {
            target_titles: vec!["Data Analyst".into()],
            ..UserProfile::default()
        };
        let queries = build_queries(&profile, &UserPreferences::default(), &defaults());
        let body = serde_json::to_value(&queries[0]).unwrap();
        let obj = body.as_object().unwrap();
        assert!(!obj.contains_key("min_salary_usd"));
        assert!(!obj.contains_key("remote"));
        assert!(!obj.contains_key("job_seniority_or"));
        assert!(!obj.contains_key("employment_type"));
        assert!(!obj.contains_key("label"));
        assert_eq!(obj["limit"], 25);
        assert_eq!(obj["posted_at_max_age_days"], 30);
    }

    #[test]
    fn preferences_override_defaults() {
        let profile = UserProfile {
            target_titles: vec!["Data Analyst".into()],
            experience_level: "senior".into(),
            ..UserProfile::default()
        };
        let prefs = UserPreferences {
            job_age_limit_days: Some(7),
            salary: Some(SalaryPref {
                min: Some(90_000),
                max: None,
            }),
            location: LocationPref {
                remote: Some(true),
                ..LocationPref::default()
            },
            employment_type: vec!["full-time".into()],
            ..UserPreferences::default()
        };
        let queries = build_queries(&profile, &prefs, &defaults());
        let body = serde_json::to_value(&queries[0]).unwrap();
        assert_eq!(body["posted_at_max_age_days"], 7);
        assert_eq!(body["min_salary_usd"], 90_000.0);
        assert_eq!(body["remote"], true);
        assert_eq!(body["job_seniority_or"], serde_json::json!(["senior"]));
        assert_eq!(body["employment_type"], serde_json::json!(["full-time"]));
    }

    #[test]
    fn zero_age_limit_falls_back_to_default() {
        let profile = UserProfile {
            target_titles: vec!["Data Analyst".into()],
            ..UserProfile::default()
        };
        let prefs = UserPreferences {
            job_age_limit_days: Some(0),
            ..UserPreferences::default()
        };
        let queries = build_queries(&profile, &prefs, &defaults());
        assert_eq!(queries[0].posted_at_max_age_days, 30);
    }
}
