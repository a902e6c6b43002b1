use std::env;
use std::fmt;
use std::time::Duration;

use crate::{lookup_parse, lookup_string};

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

#[derive(Clone)]
pub struct GeneratorConfig {
    /// `None` when the credential is absent or blank
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL, without the `/models/...` suffix
    pub api_url: String,
    /// No timeout unless set
    pub timeout: Option<Duration>,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup_string(&lookup, API_KEY_VAR);

        let model = lookup_string(&lookup, "GEMINI_MODEL").unwrap_or_else(default_model);

        let api_url = lookup_string(&lookup, "GEMINI_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(default_api_url);

        let timeout = lookup_parse::<u64>(&lookup, "GEMINI_TIMEOUT_SECONDS")
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            api_key,
            model,
            api_url,
            timeout,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            api_url: default_api_url(),
            timeout: None,
        }
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::vars;

    #[test]
    fn blank_key_is_none() {
        let config = GeneratorConfig::from_lookup(vars(&[(API_KEY_VAR, "  \t ")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn key_is_trimmed() {
        let config = GeneratorConfig::from_lookup(vars(&[(API_KEY_VAR, " abc123\n")]));
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn trailing_slash_is_stripped_from_url() {
        let config = GeneratorConfig::from_lookup(vars(&[(
            "GEMINI_API_URL",
            "https://proxy.example.test/v1beta//",
        )]));
        assert_eq!(config.api_url, "https://proxy.example.test/v1beta");
    }

    #[test]
    fn timeout_parses_seconds() {
        let config = GeneratorConfig::from_lookup(vars(&[("GEMINI_TIMEOUT_SECONDS", "30")]));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn bad_or_zero_timeout_means_none() {
        for raw in ["soon", "-5", "0", ""] {
            let config = GeneratorConfig::from_lookup(vars(&[("GEMINI_TIMEOUT_SECONDS", raw)]));
            assert!(config.timeout.is_none(), "raw {raw:?}");
        }
    }

    #[test]
    fn model_override() {
        let config = GeneratorConfig::from_lookup(vars(&[("GEMINI_MODEL", "gemini-2.0-flash")]));
        assert_eq!(config.model, "gemini-2.0-flash");
    }

    #[test]
    fn debug_output_hides_the_key() {
        let config = GeneratorConfig {
            api_key: Some("secret-value".to_string()),
            ..GeneratorConfig::default()
        };

        let printed = format!("{config:?}");
        assert!(!printed.contains("secret-value"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn defaults_point_at_gemini_flash() {
        let config = GeneratorConfig::default();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert!(config.api_url.starts_with("https://generativelanguage.googleapis.com"));
        assert!(config.api_key.is_none());
        assert!(config.timeout.is_none());
    }
}
