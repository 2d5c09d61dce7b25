//! Shared text-matching primitive.
//!
//! Skill scoring, the work-authorization screen, and resume skill extraction
//! all use the same containment rule. Keeping it in one place means the three
//! call sites cannot drift apart.

/// Returns true when `phrase` occurs anywhere inside `haystack` as a raw
/// substring. Both sides are expected to be lower-cased by the caller.
///
/// This is intentionally not word-boundary matching: "java" matches inside
/// "javascript". Callers accept that trade for predictability.
pub fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    !phrase.is_empty() && haystack.contains(phrase)
}

/// Lower-cased `title + " " + description`, the canonical haystack for skill
/// scoring.
pub fn combined_text(title: &str, description: &str) -> String {
    format!("{} {}", title.to_lowercase(), description.to_lowercase())
}
