use crate::language::Language;

/// A single submitted lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRequest {
    /// Trimmed user input
    pub word: String,
    pub language: Language,
}

impl LookupRequest {
    /// Build from raw form fields. Missing fields behave like an empty word
    /// and the default language.
    pub fn from_form(word: Option<&str>, language: Option<&str>) -> Self {
        Self {
            word: word.unwrap_or_default().trim().to_string(),
            language: language.map(Language::from_code).unwrap_or_default(),
        }
    }

    /// Whitespace-only submissions count as no submission
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Rendered dictionary entry, or an HTML error fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionResult {
    pub html: String,
}

impl DefinitionResult {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}
