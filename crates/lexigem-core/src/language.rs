use serde::Serialize;

/// Languages a dictionary entry can be requested in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    /// Resolve a submitted language code. Only exact tags are recognized;
    /// anything else is English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "fr" => Language::Fr,
            _ => Language::En,
        }
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Name shown in the language picker
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
        }
    }
}
