//! Maps heterogeneous raw provider records into the canonical [`Posting`].
//!
//! Provider versions rename fields over time, so each canonical field is
//! resolved by trying candidate keys in fixed priority order. A missing field
//! resolves to the empty string, never null — downstream matching always
//! concatenates plain strings.

use serde_json::Value;

use crate::models::posting::Posting;

const TITLE_KEYS: &[&str] = &["job_title", "title"];
const COMPANY_KEYS: &[&str] = &["company_name", "company"];
const LOCATION_KEYS: &[&str] = &["long_location", "location", "short_location"];
const URL_KEYS: &[&str] = &["final_url", "url", "source_url"];

fn first_string(raw: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| raw.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}

/// Provider ids arrive as strings or integers depending on the API version.
fn posting_id(raw: &Value) -> Option<String> {
    match raw.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Normalizes one raw record. Returns `None` when both title and company are
/// empty — such a record carries nothing to match or display.
pub fn normalize(raw: &Value) -> Option<Posting> {
    let title = first_string(raw, TITLE_KEYS);
    let company = first_string(raw, COMPANY_KEYS);
    if title.is_empty() && company.is_empty() {
        return None;
    }

    Some(Posting {
        id: posting_id(raw),
        title,
        company,
        location: first_string(raw, LOCATION_KEYS),
        description: first_string(raw, &["description"]),
        url: first_string(raw, URL_KEYS),
        posted_at: raw
            .get("posted_at")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

/// Normalizes a batch, silently dropping unusable records.
pub fn normalize_all(raw: &[Value]) -> Vec<Posting> {
    raw.iter().filter_map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_keys_in_priority_order() {
        let raw = json!({
            "job_title": "Data Analyst",
            "title": "ignored",
            "company_name": "Acme",
            "long_location": "Atlanta, GA, US",
            "location": "ignored",
            "final_url": "https://jobs.example/1",
            "url": "ignored",
            "description": "Use SQL daily",
        });
        let posting = normalize(&raw).unwrap();
        assert_eq!(posting.title, "Data Analyst");
        assert_eq!(posting.company, "Acme");
        assert_eq!(posting.location, "Atlanta, GA, US");
        assert_eq!(posting.url, "https://jobs.example/1");
        assert_eq!(posting.description, "Use SQL daily");
    }

    #[test]
    fn falls_back_through_alternate_keys() {
        let raw = json!({
            "title": "Engineer",
            "company": "Beta Corp",
            "short_location": "Remote",
            "source_url": "https://jobs.example/2",
        });
        let posting = normalize(&raw).unwrap();
        assert_eq!(posting.title, "Engineer");
        assert_eq!(posting.company, "Beta Corp");
        assert_eq!(posting.location, "Remote");
        assert_eq!(posting.url, "https://jobs.example/2");
        assert_eq!(posting.description, "");
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let posting = normalize(&json!({ "job_title": "Engineer" })).unwrap();
        assert_eq!(posting.company, "");
        assert_eq!(posting.location, "");
        assert_eq!(posting.url, "");
        assert!(posting.id.is_none());
        assert!(posting.posted_at.is_none());
    }

    #[test]
    fn drops_record_with_no_title_and_no_company() {
        assert!(normalize(&json!({ "description": "mystery role" })).is_none());
        assert!(normalize(&json!({})).is_none());
    }

    #[test]
    fn keeps_record_with_company_only() {
        let posting = normalize(&json!({ "company_name": "Acme" })).unwrap();
        assert_eq!(posting.title, "");
        assert_eq!(posting.company, "Acme");
    }

    #[test]
    fn id_accepts_string_or_number() {
        assert_eq!(
            normalize(&json!({ "id": "abc-1", "title": "X" }))
                .unwrap()
                .id
                .as_deref(),
            Some("abc-1")
        );
        assert_eq!(
            normalize(&json!({ "id": 42, "title": "X" }))
                .unwrap()
                .id
                .as_deref(),
            Some("42")
        );
    }

    #[test]
    fn normalize_all_drops_only_unusable_records() {
        let raw = vec![
            json!({ "job_title": "Keep me" }),
            json!({ "description": "drop me" }),
        ];
        let postings = normalize_all(&raw);
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].title, "Keep me");
    }
}
