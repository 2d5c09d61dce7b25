//! Document-extraction collaborator.
//!
//! Turns an uploaded resume into plain lower-cased text. Extraction is best
//! effort: an unreadable file or unsupported format degrades to empty text
//! with a warning, and the caller carries on — a broken resume must never
//! take down a search run.

pub mod handlers;

use tracing::warn;

use crate::text::contains_phrase;

/// Declared format of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Resolves a format from the uploaded filename, by extension.
    pub fn from_filename(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentFormat::Docx)
        } else if lower.ends_with(".txt") {
            Some(DocumentFormat::PlainText)
        } else {
            None
        }
    }
}

/// Extraction seam. The local implementation is the default; tests swap in
/// stubs.
pub trait DocumentExtractor: Send + Sync {
    /// Returns extracted lower-cased text, or the empty string on failure.
    fn extract(&self, bytes: &[u8], format: DocumentFormat) -> String;
}

/// In-process extractor: PDF via `pdf-extract`, plain text via lossy UTF-8.
/// DOCX is not supported in this build and degrades to empty text.
pub struct LocalExtractor;

impl DocumentExtractor for LocalExtractor {
    fn extract(&self, bytes: &[u8], format: DocumentFormat) -> String {
        match format {
            DocumentFormat::Pdf => match pdf_extract::extract_text_from_mem(bytes) {
                Ok(text) => text.to_lowercase(),
                Err(e) => {
                    warn!("PDF extraction failed: {e}");
                    String::new()
                }
            },
            DocumentFormat::PlainText => String::from_utf8_lossy(bytes).to_lowercase(),
            DocumentFormat::Docx => {
                warn!("DOCX extraction is not supported; returning empty text");
                String::new()
            }
        }
    }
}

/// Cross-references extracted resume text against the profile's declared
/// skills using the same containment rule as posting scoring. Returns the
/// found skills lower-cased, sorted, distinct.
pub fn extract_declared_skills(resume_text: &str, reference_skills: &[String]) -> Vec<String> {
    let text = resume_text.to_lowercase();
    let mut found: Vec<String> = reference_skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .filter(|skill| contains_phrase(&text, skill))
        .collect();
    found.sort();
    found.dedup();
    found
}
